//! Keyboard notifications and animation coordination.
//!
//! The host adapter forwards on-screen keyboard show/hide notifications to
//! the field as [`KeyboardNotification`] payloads. A payload is a bag of
//! optional values; it decodes into [`KeyboardAnimationTraits`] only when
//! every expected field is present, and otherwise the whole event is dropped
//! without touching any state. Malformed keyboard notifications must never
//! crash or corrupt layout state.
//!
//! The [`AnimationCoordinator`] tracks the last decoded keyboard frame and
//! turns show/hide transitions into [`SlideAnimation`] requests. Every
//! request carries a monotonically increasing sequence number; completions
//! reported for a superseded sequence are stale and ignored, so a show
//! arriving mid hide-animation can never have its views torn down by the
//! earlier hide's completion.

use std::time::Duration;

use crate::animation::{Easing, SlideAnimation, SlidePhase};
use crate::geometry::Rect;

/// A raw keyboard notification payload.
///
/// Hosts fill in whatever their notification actually carried; decoding
/// validates completeness.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct KeyboardNotification {
    /// The keyboard's end frame, in window coordinates.
    pub end_frame: Option<Rect>,
    /// The promised animation duration.
    pub duration: Option<Duration>,
    /// The host's opaque animation-curve token.
    pub curve: Option<u32>,
}

impl KeyboardNotification {
    /// Create a fully populated notification.
    pub fn new(end_frame: Rect, duration: Duration, curve: u32) -> Self {
        Self {
            end_frame: Some(end_frame),
            duration: Some(duration),
            curve: Some(curve),
        }
    }
}

/// An immutable snapshot of a keyboard transition's animation parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyboardAnimationTraits {
    /// The keyboard's end frame, in window coordinates.
    pub end_frame: Rect,
    /// The promised animation duration.
    pub duration: Duration,
    /// The easing curve decoded from the notification's curve token.
    pub easing: Easing,
}

impl KeyboardAnimationTraits {
    /// Decode a notification payload.
    ///
    /// Returns `None` unless the end frame, duration and curve token are all
    /// present; callers drop the event entirely in that case.
    pub fn from_notification(notification: &KeyboardNotification) -> Option<Self> {
        let end_frame = notification.end_frame?;
        let duration = notification.duration?;
        let curve = notification.curve?;

        Some(Self {
            end_frame,
            duration,
            easing: Easing::from_curve_token(curve),
        })
    }

    /// Whether this transition leaves the keyboard off screen.
    ///
    /// Holds when the frame's top edge rests exactly on the screen's bottom
    /// edge.
    pub fn is_keyboard_hidden(&self, screen: Rect) -> bool {
        self.end_frame.top() == screen.bottom()
    }
}

/// An immutable frame proposal for the suggestions content view, handed to
/// the host's callbacks for confirmation or override.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContentViewTraits {
    /// The proposed frame, in window coordinates.
    pub frame: Rect,
}

impl ContentViewTraits {
    /// Create traits for a proposed frame.
    pub fn new(frame: Rect) -> Self {
        Self { frame }
    }
}

/// Tracks keyboard geometry and issues slide animations for the suggestion
/// views.
#[derive(Debug, Default)]
pub struct AnimationCoordinator {
    /// Last keyboard frame decoded from a show/hide notification.
    keyboard_frame: Option<Rect>,
    /// Sequence number of the most recently issued animation.
    sequence: u64,
    /// Sequence of the hide animation whose completion should detach views.
    pending_detach: Option<u64>,
}

impl AnimationCoordinator {
    /// Create a coordinator that has not observed any keyboard yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the keyboard frame from a successfully decoded notification.
    pub fn record(&mut self, traits: &KeyboardAnimationTraits) {
        tracing::trace!(
            target: "lumen_typeahead::keyboard",
            top = traits.end_frame.top(),
            "recording keyboard frame"
        );
        self.keyboard_frame = Some(traits.end_frame);
    }

    /// The last observed keyboard frame, if any.
    pub fn keyboard_frame(&self) -> Option<Rect> {
        self.keyboard_frame
    }

    /// The keyboard's top edge, falling back to the screen's bottom edge
    /// when no keyboard has been observed (full space below the field).
    pub fn keyboard_top(&self, screen: Rect) -> f32 {
        self.keyboard_frame
            .map(|frame| frame.top())
            .unwrap_or_else(|| screen.bottom())
    }

    /// Sequence number of the most recently issued animation.
    pub fn current_sequence(&self) -> u64 {
        self.sequence
    }

    /// Build the appearance animation: the content view grows from a
    /// zero-height copy of `target` while the label fades in.
    ///
    /// Issuing an appearance cancels any pending detach, so a completion of
    /// an interrupted hide animation can no longer tear the views down.
    pub fn begin_appearance(
        &mut self,
        target: Rect,
        traits: &KeyboardAnimationTraits,
    ) -> SlideAnimation {
        self.sequence += 1;
        self.pending_detach = None;

        SlideAnimation {
            sequence: self.sequence,
            phase: SlidePhase::Appearing,
            content_start: target.with_height(0.0),
            content_end: target,
            label_opacity_start: 0.0,
            label_opacity_end: 1.0,
            duration: traits.duration,
            easing: traits.easing,
        }
    }

    /// Build the disappearance animation: the content view collapses from
    /// `current` to zero height while the label fades out. The views detach
    /// when the host reports this animation's completion.
    pub fn begin_disappearance(
        &mut self,
        current: Rect,
        traits: &KeyboardAnimationTraits,
    ) -> SlideAnimation {
        self.sequence += 1;
        self.pending_detach = Some(self.sequence);

        SlideAnimation {
            sequence: self.sequence,
            phase: SlidePhase::Disappearing,
            content_start: current,
            content_end: current.with_height(0.0),
            label_opacity_start: 1.0,
            label_opacity_end: 0.0,
            duration: traits.duration,
            easing: traits.easing,
        }
    }

    /// Handle a completion report from the host.
    ///
    /// Returns `true` when the completed animation is the pending hide and
    /// the views should detach now. Stale sequences (superseded by a newer
    /// animation) and appearance completions return `false`.
    pub fn finish(&mut self, sequence: u64) -> bool {
        if self.pending_detach == Some(sequence) {
            self.pending_detach = None;
            true
        } else {
            tracing::trace!(
                target: "lumen_typeahead::keyboard",
                sequence,
                current = self.sequence,
                "ignoring stale or non-detaching animation completion"
            );
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn traits(top: f32) -> KeyboardAnimationTraits {
        KeyboardAnimationTraits {
            end_frame: Rect::new(0.0, top, 320.0, 216.0),
            duration: Duration::from_millis(250),
            easing: Easing::EaseInOut,
        }
    }

    #[test]
    fn test_decode_requires_all_fields() {
        let complete =
            KeyboardNotification::new(Rect::new(0.0, 264.0, 320.0, 216.0), Duration::from_millis(250), 0);
        assert!(KeyboardAnimationTraits::from_notification(&complete).is_some());

        let missing_duration = KeyboardNotification {
            duration: None,
            ..complete
        };
        assert!(KeyboardAnimationTraits::from_notification(&missing_duration).is_none());

        let missing_frame = KeyboardNotification {
            end_frame: None,
            ..complete
        };
        assert!(KeyboardAnimationTraits::from_notification(&missing_frame).is_none());

        let missing_curve = KeyboardNotification {
            curve: None,
            ..complete
        };
        assert!(KeyboardAnimationTraits::from_notification(&missing_curve).is_none());
    }

    #[test]
    fn test_is_keyboard_hidden_at_screen_bottom() {
        let screen = Rect::new(0.0, 0.0, 320.0, 480.0);

        assert!(traits(480.0).is_keyboard_hidden(screen));
        assert!(!traits(264.0).is_keyboard_hidden(screen));
    }

    #[test]
    fn test_keyboard_top_falls_back_to_screen_bottom() {
        let screen = Rect::new(0.0, 0.0, 320.0, 480.0);
        let mut coordinator = AnimationCoordinator::new();

        assert_eq!(coordinator.keyboard_top(screen), 480.0);

        coordinator.record(&traits(264.0));
        assert_eq!(coordinator.keyboard_top(screen), 264.0);
    }

    #[test]
    fn test_appearance_animation_shape() {
        let mut coordinator = AnimationCoordinator::new();
        let target = Rect::new(20.0, 120.0, 280.0, 144.0);

        let animation = coordinator.begin_appearance(target, &traits(264.0));
        assert_eq!(animation.phase, SlidePhase::Appearing);
        assert_eq!(animation.content_start, target.with_height(0.0));
        assert_eq!(animation.content_end, target);
        assert_eq!(animation.label_opacity_start, 0.0);
        assert_eq!(animation.label_opacity_end, 1.0);
    }

    #[test]
    fn test_disappearance_then_finish_detaches() {
        let mut coordinator = AnimationCoordinator::new();
        let current = Rect::new(20.0, 120.0, 280.0, 144.0);

        let animation = coordinator.begin_disappearance(current, &traits(480.0));
        assert_eq!(animation.phase, SlidePhase::Disappearing);
        assert_eq!(animation.content_end.height(), 0.0);

        assert!(coordinator.finish(animation.sequence));
        // A second report for the same sequence is inert
        assert!(!coordinator.finish(animation.sequence));
    }

    #[test]
    fn test_show_supersedes_pending_hide() {
        let mut coordinator = AnimationCoordinator::new();
        let frame = Rect::new(20.0, 120.0, 280.0, 144.0);

        let hide = coordinator.begin_disappearance(frame, &traits(480.0));
        let _show = coordinator.begin_appearance(frame, &traits(264.0));

        // The hide completion arrives late; views must stay attached
        assert!(!coordinator.finish(hide.sequence));
    }

    #[test]
    fn test_appearance_completion_never_detaches() {
        let mut coordinator = AnimationCoordinator::new();
        let frame = Rect::new(20.0, 120.0, 280.0, 144.0);

        let show = coordinator.begin_appearance(frame, &traits(264.0));
        assert!(!coordinator.finish(show.sequence));
    }
}
