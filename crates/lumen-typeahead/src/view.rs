//! View capability traits for the field's collaborators.
//!
//! The field owns two optional, externally supplied views: the inline
//! suggestion label and the suggestions content view (a list or grid of
//! candidates). Both are abstracted behind explicit capability traits so the
//! field depends only on what it actually drives: frames, attachment,
//! opacity, measurement, and reloads. Any concrete toolkit widget can sit
//! behind them through a thin adapter.
//!
//! Attachment stands in for view-hierarchy membership: `attach` corresponds
//! to adding the view to the host hierarchy (the field for the label, the
//! window or a caller-supplied container for the content view) and `detach`
//! to removing it.

use crate::geometry::{Rect, Size};
use crate::metrics::{GraphemeMetrics, TextMetrics};

/// The small text element showing the remainder of an autocompleted
/// candidate's name.
pub trait SuggestionLabel {
    /// The label's current suggestion text.
    fn text(&self) -> &str;

    /// Replace the label's suggestion text.
    fn set_text(&mut self, text: String);

    /// Measure the label's preferred size within the given fitting size.
    fn preferred_size(&self, fits: Size) -> Size;

    /// The label's current frame, in field-local coordinates.
    fn frame(&self) -> Rect;

    /// Move the label.
    fn set_frame(&mut self, frame: Rect);

    /// Set the label's opacity (0.0 transparent to 1.0 opaque).
    fn set_opacity(&mut self, opacity: f32);

    /// Add the label to the view hierarchy.
    fn attach(&mut self);

    /// Remove the label from the view hierarchy.
    fn detach(&mut self);

    /// Whether the label is currently part of the view hierarchy.
    fn is_attached(&self) -> bool;
}

/// The attached list/grid presenting the full set of matching candidates.
pub trait SuggestionsContentView {
    /// The view's current frame, in window coordinates.
    fn frame(&self) -> Rect;

    /// Move/resize the view.
    fn set_frame(&mut self, frame: Rect);

    /// The natural size of the view's content (all rows, unclipped).
    fn content_size(&self) -> Size;

    /// Re-query the data source and refresh rows.
    fn reload(&mut self);

    /// Force a pending layout pass so `content_size` is current.
    ///
    /// Hosts with self-sizing rows may veto this call through
    /// [`FieldCallbacks::should_force_layout`](crate::field::FieldCallbacks),
    /// in which case the field assumes an unbounded natural height.
    fn perform_layout(&mut self);

    /// Add the view to the view hierarchy.
    fn attach(&mut self);

    /// Remove the view from the view hierarchy.
    fn detach(&mut self);

    /// Whether the view is currently part of the view hierarchy.
    fn is_attached(&self) -> bool;
}

/// A minimal built-in suggestion label.
///
/// Tracks text, frame, opacity and attachment, and measures itself through
/// [`GraphemeMetrics`]. Useful for hosts without a native label and for
/// driving the behavior in tests and examples.
#[derive(Debug, Clone)]
pub struct PlainLabel {
    text: String,
    metrics: GraphemeMetrics,
    frame: Rect,
    opacity: f32,
    attached: bool,
}

impl PlainLabel {
    /// Create an empty label measured with the given metrics.
    pub fn new(metrics: GraphemeMetrics) -> Self {
        Self {
            text: String::new(),
            metrics,
            frame: Rect::ZERO,
            opacity: 1.0,
            attached: false,
        }
    }

    /// The label's current opacity.
    pub fn opacity(&self) -> f32 {
        self.opacity
    }
}

impl Default for PlainLabel {
    fn default() -> Self {
        Self::new(GraphemeMetrics::default())
    }
}

impl SuggestionLabel for PlainLabel {
    fn text(&self) -> &str {
        &self.text
    }

    fn set_text(&mut self, text: String) {
        self.text = text;
    }

    fn preferred_size(&self, fits: Size) -> Size {
        self.metrics.bounding_size(&self.text, fits)
    }

    fn frame(&self) -> Rect {
        self.frame
    }

    fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }

    fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity.clamp(0.0, 1.0);
    }

    fn attach(&mut self) {
        self.attached = true;
    }

    fn detach(&mut self) {
        self.attached = false;
    }

    fn is_attached(&self) -> bool {
        self.attached
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_label_measures_through_metrics() {
        let mut label = PlainLabel::new(GraphemeMetrics::new(8.0, 18.0));
        label.set_text("Phone".to_string());

        let size = label.preferred_size(Size::new(200.0, 40.0));
        assert_eq!(size, Size::new(40.0, 18.0));
    }

    #[test]
    fn test_plain_label_attachment() {
        let mut label = PlainLabel::default();
        assert!(!label.is_attached());

        label.attach();
        assert!(label.is_attached());

        label.detach();
        assert!(!label.is_attached());
    }

    #[test]
    fn test_plain_label_opacity_clamped() {
        let mut label = PlainLabel::default();
        label.set_opacity(1.5);
        assert_eq!(label.opacity(), 1.0);
        label.set_opacity(-0.5);
        assert_eq!(label.opacity(), 0.0);
    }
}
