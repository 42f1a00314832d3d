//! Layout policy for the suggestions field.
//!
//! This module computes every rectangle the field hands back to its host:
//! the rectangle typed text renders into, the frame of the inline suggestion
//! label, and the frame of the attached suggestions content view. The policy
//! is a pure function of the state passed in per call — it mutates nothing,
//! and the field applies the returned [`EditingLayout`] to its views in a
//! separate step.
//!
//! Coordinates are field-local except for [`content_view_frame`], which
//! works in window space (the content view lives outside the field, between
//! its bottom edge and the keyboard).

use crate::config::FieldConfig;
use crate::geometry::{Point, Rect, Size};
use crate::metrics::TextMetrics;

/// Sentinel content height used when the host vetoes a forced layout pass.
///
/// The keyboard-space clamp in [`content_view_frame`] cuts it down to the
/// actually available height.
pub const UNBOUNDED_CONTENT_HEIGHT: f32 = f32::MAX;

/// The outcome of an editing-rectangle computation.
///
/// Besides the rectangle the host should render editing text into, this
/// carries the suggestion label placement the field applies afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditingLayout {
    /// The rectangle available for the typed text.
    pub text_rect: Rect,
    /// The frame for the suggestion label, in field-local coordinates.
    pub label_frame: Rect,
    /// Whether the suggestion label should be shown (the field contains
    /// text) or hidden (it is empty and the placeholder is displayed).
    pub label_visible: bool,
}

/// Pure layout computation over the current field configuration and a text
/// measurer.
///
/// Constructed per layout pass; holds no state of its own.
pub struct LayoutPolicy<'a> {
    config: &'a FieldConfig,
    metrics: &'a dyn TextMetrics,
}

impl<'a> LayoutPolicy<'a> {
    /// Create a policy over the given configuration and measurer.
    pub fn new(config: &'a FieldConfig, metrics: &'a dyn TextMetrics) -> Self {
        Self { config, metrics }
    }

    /// The rectangle non-editing text renders into: the bounds shrunk by the
    /// configured text insets.
    pub fn text_rect(&self, bounds: Rect) -> Rect {
        bounds.inset_by(self.config.text_insets)
    }

    /// Compute the editing rectangle and the suggestion label placement.
    ///
    /// `label_text` and `label_size` describe the suggestion label's current
    /// text and measured size; pass an empty string and [`Size::ZERO`] when
    /// no label is installed.
    ///
    /// The computation mirrors the field's editing behavior:
    ///
    /// 1. Shrink the bounds by the text insets.
    /// 2. Measure the current text, or the placeholder when the field is
    ///    empty, constrained to the available size; ceil the result.
    /// 3. When the field contains text, widen the measured rectangle by the
    ///    minimum editing width so the caret region survives the host's
    ///    scroll-into-view behavior.
    /// 4. Place the label after the measured text (see
    ///    [`suggestion_label_frame`](Self::suggestion_label_frame)); it is
    ///    visible only while the field contains text.
    /// 5. When the label is visible with a non-zero width, reserve
    ///    `min_suggestion_text_width + suggestion_spacing` out of the text
    ///    rectangle so typed text and label never overlap.
    pub fn editing_layout(
        &self,
        bounds: Rect,
        text: &str,
        placeholder: &str,
        label_text: &str,
        label_size: Size,
    ) -> EditingLayout {
        let available = bounds.inset_by(self.config.text_insets);

        let measured = if !text.is_empty() {
            self.metrics.bounding_size(text, available.size)
        } else {
            self.metrics.bounding_size(placeholder, available.size)
        };
        let mut required = Rect::from_origin_size(Point::ZERO, measured).ceiled();

        if !text.is_empty() {
            // The offset is required due to the way the host scrolls the
            // caret into view while editing.
            required.size.width += self.config.min_editing_text_width;
        }

        let label_frame = self.suggestion_label_frame(
            available,
            required,
            label_size,
            !label_text.is_empty(),
            bounds.height(),
        );
        let label_visible = !text.is_empty();

        let mut text_rect = available;
        if label_visible && label_frame.width() != 0.0 {
            text_rect.size.width = (text_rect.size.width
                - (self.config.min_suggestion_text_width + self.config.suggestion_spacing))
                .max(0.0);
        }

        EditingLayout {
            text_rect,
            label_frame,
            label_visible,
        }
    }

    /// Compute the suggestion label frame.
    ///
    /// The label width is `max(min_suggestion_text_width, available_width -
    /// required_width)` while the label has text, and zero otherwise. The
    /// label sits immediately after the typed text, never past the field's
    /// right edge, and is centered vertically in the field bounds.
    pub fn suggestion_label_frame(
        &self,
        available_text_rect: Rect,
        required_text_rect: Rect,
        label_size: Size,
        has_label_text: bool,
        bounds_height: f32,
    ) -> Rect {
        let label_size = label_size.ceiled();

        let mut label_width = 0.0;
        if has_label_text {
            let free_width = (available_text_rect.width() - required_text_rect.width()).max(0.0);
            label_width = self.config.min_suggestion_text_width.max(free_width);
        }

        let x = required_text_rect
            .width()
            .min(available_text_rect.width() - label_width)
            + self.config.suggestion_spacing;
        let y = ((bounds_height - label_size.height) / 2.0).floor();

        Rect::new(x, y, label_width, label_size.height)
    }
}

/// Compute the suggestions content view frame, in window coordinates.
///
/// The content view spans the field's width, hangs from its bottom edge and
/// is clipped to the vertical space remaining above the keyboard:
/// `min(natural_height, max(0, keyboard_top - field_bottom))`. Callers with
/// no observed keyboard pass the screen's bottom edge as `keyboard_top`, and
/// [`UNBOUNDED_CONTENT_HEIGHT`] as `natural_height` when the content's
/// natural height is unknown.
pub fn content_view_frame(field_window_frame: Rect, keyboard_top: f32, natural_height: f32) -> Rect {
    let available_height = (keyboard_top - field_window_frame.bottom()).max(0.0);
    Rect::new(
        field_window_frame.left(),
        field_window_frame.bottom(),
        field_window_frame.width(),
        natural_height.min(available_height),
    )
}
