//! Text measurement seam for the layout policy.
//!
//! The editing-rectangle computation needs the bounding box of the current
//! text (or placeholder) as it would render inside the available rectangle.
//! Real measurement belongs to the host's text stack; the layout policy only
//! depends on the [`TextMetrics`] trait so it stays deterministic and
//! testable without a font system.
//!
//! [`GraphemeMetrics`] is the built-in implementation: a fixed advance per
//! grapheme cluster with line-fragment wrapping. It is exact enough for
//! monospace-ish hosts and for driving the demo, and hosts with a shaping
//! text stack substitute their own implementation.

use unicode_segmentation::UnicodeSegmentation;

use crate::geometry::Size;

/// Measures the bounding box of a text run.
pub trait TextMetrics {
    /// Measure `text` constrained to `constraint`'s width.
    ///
    /// The returned size reflects line-fragment wrapping: text wider than
    /// the constraint wraps and grows the height instead. The height
    /// component of `constraint` is not enforced, matching how hosts
    /// measure text that may overflow vertically.
    fn bounding_size(&self, text: &str, constraint: Size) -> Size;
}

/// Fixed-advance text measurement over grapheme clusters.
#[derive(Debug, Clone, Copy)]
pub struct GraphemeMetrics {
    /// Horizontal advance per grapheme cluster.
    pub advance: f32,
    /// Height of one wrapped line fragment.
    pub line_height: f32,
}

impl GraphemeMetrics {
    /// Create metrics with the given advance and line height.
    pub const fn new(advance: f32, line_height: f32) -> Self {
        Self {
            advance,
            line_height,
        }
    }
}

impl Default for GraphemeMetrics {
    fn default() -> Self {
        // Roughly a 14pt sans-serif
        Self::new(8.0, 18.0)
    }
}

impl TextMetrics for GraphemeMetrics {
    fn bounding_size(&self, text: &str, constraint: Size) -> Size {
        if text.is_empty() {
            return Size::ZERO;
        }

        let clusters = text.graphemes(true).count() as f32;
        let total_width = clusters * self.advance;

        if total_width <= constraint.width {
            return Size::new(total_width, self.line_height);
        }

        // Wrap into line fragments, at least one cluster per line.
        let per_line = (constraint.width / self.advance).floor().max(1.0);
        let lines = (clusters / per_line).ceil();
        Size::new(per_line * self.advance, lines * self.line_height)
    }
}
