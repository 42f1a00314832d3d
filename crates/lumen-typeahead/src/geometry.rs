//! Basic geometry types for field layout.
//!
//! This module provides the fundamental types used throughout the layout
//! computation: points, sizes, rectangles and per-edge insets, together with
//! the component-wise rounding family used to align measured text rectangles
//! to pixel-ish boundaries.
//!
//! Rounding follows `f32::round`: half-way values round away from zero. All
//! rounding operations are exact for integral inputs and idempotent.

use serde::{Deserialize, Serialize};

/// A point in 2D space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// The origin point (0, 0).
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Component-wise ceiling.
    #[inline]
    pub fn ceiled(self) -> Self {
        Self::new(self.x.ceil(), self.y.ceil())
    }

    /// Component-wise floor.
    #[inline]
    pub fn floored(self) -> Self {
        Self::new(self.x.floor(), self.y.floor())
    }

    /// Component-wise rounding (half away from zero).
    #[inline]
    pub fn rounded(self) -> Self {
        Self::new(self.x.round(), self.y.round())
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// A size in 2D space (width and height).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Zero size.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Check if the size has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Component-wise ceiling.
    #[inline]
    pub fn ceiled(self) -> Self {
        Self::new(self.width.ceil(), self.height.ceil())
    }

    /// Component-wise floor.
    #[inline]
    pub fn floored(self) -> Self {
        Self::new(self.width.floor(), self.height.floor())
    }

    /// Component-wise rounding (half away from zero).
    #[inline]
    pub fn rounded(self) -> Self {
        Self::new(self.width.round(), self.height.round())
    }
}

impl From<(f32, f32)> for Size {
    fn from((width, height): (f32, f32)) -> Self {
        Self { width, height }
    }
}

/// A rectangle defined by origin and size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    /// Create a new rectangle from origin and size.
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point { x, y },
            size: Size { width, height },
        }
    }

    /// Empty rectangle at origin.
    pub const ZERO: Self = Self {
        origin: Point::ZERO,
        size: Size::ZERO,
    };

    /// Create a rectangle from an origin point and a size.
    #[inline]
    pub const fn from_origin_size(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Left edge x coordinate.
    #[inline]
    pub fn left(&self) -> f32 {
        self.origin.x
    }

    /// Top edge y coordinate.
    #[inline]
    pub fn top(&self) -> f32 {
        self.origin.y
    }

    /// Right edge x coordinate.
    #[inline]
    pub fn right(&self) -> f32 {
        self.origin.x + self.size.width
    }

    /// Bottom edge y coordinate.
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.origin.y + self.size.height
    }

    /// Width of the rectangle.
    #[inline]
    pub fn width(&self) -> f32 {
        self.size.width
    }

    /// Height of the rectangle.
    #[inline]
    pub fn height(&self) -> f32 {
        self.size.height
    }

    /// Check if the rectangle is empty (zero or negative size).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size.is_empty()
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left()
            && point.x < self.right()
            && point.y >= self.top()
            && point.y < self.bottom()
    }

    /// Return a copy with a different height.
    #[inline]
    pub fn with_height(self, height: f32) -> Self {
        Self {
            origin: self.origin,
            size: Size::new(self.size.width, height),
        }
    }

    /// Component-wise ceiling of origin and size.
    #[inline]
    pub fn ceiled(self) -> Self {
        Self {
            origin: self.origin.ceiled(),
            size: self.size.ceiled(),
        }
    }

    /// Component-wise floor of origin and size.
    #[inline]
    pub fn floored(self) -> Self {
        Self {
            origin: self.origin.floored(),
            size: self.size.floored(),
        }
    }

    /// Component-wise rounding of origin and size (half away from zero).
    #[inline]
    pub fn rounded(self) -> Self {
        Self {
            origin: self.origin.rounded(),
            size: self.size.rounded(),
        }
    }

    /// Shrink the rectangle by the given insets.
    ///
    /// The origin is offset by (left, top) and the size loses the horizontal
    /// and vertical inset sums. Width and height are clamped at zero; the
    /// result never has a negative dimension.
    pub fn inset_by(self, insets: EdgeInsets) -> Self {
        Self {
            origin: Point::new(self.origin.x + insets.left, self.origin.y + insets.top),
            size: Size::new(
                (self.size.width - insets.horizontal()).max(0.0),
                (self.size.height - insets.vertical()).max(0.0),
            ),
        }
    }

    /// Linear interpolation between two rectangles.
    ///
    /// At `t = 0` returns `self`, at `t = 1` returns `other`. Used for
    /// sampling slide animations.
    pub fn lerp(self, other: Rect, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self::new(
            self.origin.x + (other.origin.x - self.origin.x) * t,
            self.origin.y + (other.origin.y - self.origin.y) * t,
            self.size.width + (other.size.width - self.size.width) * t,
            self.size.height + (other.size.height - self.size.height) * t,
        )
    }
}

/// Per-edge shrinkage applied to a rectangle before content is placed in it.
///
/// All four edges are configured independently. Values are expected to be
/// non-negative; negative values are accepted as-is and simply grow the
/// rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EdgeInsets {
    /// Top inset.
    pub top: f32,
    /// Left inset.
    pub left: f32,
    /// Bottom inset.
    pub bottom: f32,
    /// Right inset.
    pub right: f32,
}

impl EdgeInsets {
    /// Zero insets.
    pub const ZERO: Self = Self {
        top: 0.0,
        left: 0.0,
        bottom: 0.0,
        right: 0.0,
    };

    /// Create new insets.
    pub const fn new(top: f32, left: f32, bottom: f32, right: f32) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Create uniform insets (same value on all edges).
    pub const fn uniform(inset: f32) -> Self {
        Self::new(inset, inset, inset, inset)
    }

    /// Create symmetric insets (same left/right and top/bottom).
    pub const fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    /// Total horizontal inset (left + right).
    #[inline]
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Total vertical inset (top + bottom).
    #[inline]
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}
