//! Easing curves and keyboard-driven slide animations.
//!
//! The field never drives animation frames itself: keyboard events produce a
//! declarative [`SlideAnimation`] request that the host's animation engine
//! executes over the keyboard's promised duration, sampling
//! [`content_frame_at`](SlideAnimation::content_frame_at) and
//! [`label_opacity_at`](SlideAnimation::label_opacity_at) each frame and
//! reporting completion back to the field.

use std::time::Duration;

use crate::geometry::Rect;

/// Available easing functions.
///
/// Keyboard notifications carry an opaque curve token; [`Easing::from_curve_token`]
/// maps it onto this set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Linear interpolation (no easing).
    Linear,
    /// Quadratic ease-in (starts slow, accelerates).
    EaseIn,
    /// Quadratic ease-out (starts fast, decelerates).
    EaseOut,
    /// Quadratic ease-in-out (smooth start and end).
    #[default]
    EaseInOut,
}

impl Easing {
    /// Map a host keyboard-notification curve token onto an easing function.
    ///
    /// Tokens follow the conventional ordering `0` ease-in-out, `1` ease-in,
    /// `2` ease-out, `3` linear. Unknown tokens fall back to ease-in-out,
    /// the default keyboard curve.
    pub fn from_curve_token(token: u32) -> Self {
        match token {
            0 => Self::EaseInOut,
            1 => Self::EaseIn,
            2 => Self::EaseOut,
            3 => Self::Linear,
            _ => Self::EaseInOut,
        }
    }
}

/// Apply an easing function to a progress value.
///
/// `t` is clamped to the `0.0..=1.0` range first.
#[inline]
pub fn ease(easing: Easing, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);

    match easing {
        Easing::Linear => t,
        Easing::EaseIn => t * t,
        Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
        Easing::EaseInOut => {
            if t < 0.5 {
                2.0 * t * t
            } else {
                1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
            }
        }
    }
}

/// Interpolate between two values using an easing function.
#[inline]
pub fn lerp_eased(easing: Easing, start: f32, end: f32, t: f32) -> f32 {
    start + (end - start) * ease(easing, t)
}

/// Which way a slide animation moves the suggestion views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlidePhase {
    /// The content view grows from zero height and the label fades in.
    Appearing,
    /// The content view collapses to zero height and the label fades out;
    /// both views detach once the host reports completion.
    Disappearing,
}

/// A declarative animation request handed to the host.
///
/// Carries everything the host animation engine needs: the start and end
/// frames of the content view, the label opacity endpoints, the duration and
/// curve promised by the keyboard notification, and the sequence number the
/// host must echo back through
/// [`SuggestionsField::animation_finished`](crate::field::SuggestionsField::animation_finished).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideAnimation {
    /// Monotonically increasing id; stale completions are discarded.
    pub sequence: u64,
    /// Appearance or disappearance.
    pub phase: SlidePhase,
    /// Content view frame at progress 0.
    pub content_start: Rect,
    /// Content view frame at progress 1.
    pub content_end: Rect,
    /// Label opacity at progress 0.
    pub label_opacity_start: f32,
    /// Label opacity at progress 1.
    pub label_opacity_end: f32,
    /// Promised animation duration.
    pub duration: Duration,
    /// Easing curve decoded from the keyboard notification.
    pub easing: Easing,
}

impl SlideAnimation {
    /// Raw (un-eased) progress after `elapsed` time, clamped to `0.0..=1.0`.
    ///
    /// A zero duration completes immediately.
    pub fn progress(&self, elapsed: Duration) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Content view frame at the given raw progress.
    pub fn content_frame_at(&self, t: f32) -> Rect {
        self.content_start.lerp(self.content_end, ease(self.easing, t))
    }

    /// Label opacity at the given raw progress.
    pub fn label_opacity_at(&self, t: f32) -> f32 {
        lerp_eased(self.easing, self.label_opacity_start, self.label_opacity_end, t)
    }
}
