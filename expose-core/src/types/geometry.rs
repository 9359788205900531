//! Integer geometric primitives used by the overview placement.
//!
//! All coordinates are `i32` in screen space (y grows downwards). Rectangle
//! extents are signed as well: intermediate results of the placement passes may
//! shrink a rectangle past zero, and callers validate positivity at the boundary
//! instead of relying on the type.

use serde::{Deserialize, Serialize};

/// An integer point with `i32` coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PointInt {
    pub x: i32,
    pub y: i32,
}

impl PointInt {
    /// Creates a new `PointInt`.
    pub const fn new(x: i32, y: i32) -> Self {
        PointInt { x, y }
    }

    /// The origin `(0, 0)`.
    pub const ZERO: PointInt = PointInt::new(0, 0);

    /// Returns `true` if both components are zero.
    pub fn is_zero(&self) -> bool {
        self.x == 0 && self.y == 0
    }
}

/// An axis-aligned integer rectangle: `{x, y, width, height}`.
///
/// This is a plain value type. Operations never mutate in place; they return a
/// new rectangle.
///
/// # Examples
///
/// ```
/// use expose_core::types::Rectangle;
///
/// let window = Rectangle::new(0, 0, 100, 50);
/// let inflated = window.adjusted(-10, -10, 10, 10);
/// assert_eq!(inflated, Rectangle::new(-10, -10, 120, 70));
/// assert!(inflated.contains(&window));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rectangle {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rectangle {
    /// Creates a new `Rectangle` from its origin and extent.
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Rectangle { x, y, width, height }
    }

    /// Returns the x-coordinate one past the right edge.
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Returns the y-coordinate one past the bottom edge.
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Returns `true` if the rectangle has no positive area.
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Moves each edge independently.
    ///
    /// `dx1`/`dy1` shift the left/top edges, `dx2`/`dy2` the right/bottom edges.
    /// Negative values on the leading edges together with positive values on the
    /// trailing edges grow the rectangle; the opposite signs shrink it.
    pub fn adjusted(&self, dx1: i32, dy1: i32, dx2: i32, dy2: i32) -> Rectangle {
        Rectangle {
            x: self.x + dx1,
            y: self.y + dy1,
            width: self.width - dx1 + dx2,
            height: self.height - dy1 + dy2,
        }
    }

    /// Returns the rectangle moved by `(dx, dy)` with its size unchanged.
    pub fn translated(&self, dx: i32, dy: i32) -> Rectangle {
        Rectangle::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Smallest rectangle containing both `self` and `other`.
    ///
    /// A zero-sized rectangle contributes its origin as a single point.
    pub fn union(&self, other: &Rectangle) -> Rectangle {
        let x1 = self.x.min(other.x);
        let y1 = self.y.min(other.y);
        let x2 = self.right().max(other.right());
        let y2 = self.bottom().max(other.bottom());

        Rectangle::new(x1, y1, x2 - x1, y2 - y1)
    }

    /// Strict intersection test. Rectangles that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Rectangle) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Integer midpoint. Halving truncates towards zero.
    pub fn center(&self) -> PointInt {
        PointInt::new(self.x + self.width / 2, self.y + self.height / 2)
    }

    /// Returns `true` if `other` lies entirely within `self` (edges inclusive).
    pub fn contains(&self, other: &Rectangle) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

/// Margins carved out of each edge of a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Padding {
    #[serde(default)]
    pub top: i32,
    #[serde(default)]
    pub right: i32,
    #[serde(default)]
    pub bottom: i32,
    #[serde(default)]
    pub left: i32,
}

impl Padding {
    /// Creates a padding from explicit edge values.
    pub const fn new(top: i32, right: i32, bottom: i32, left: i32) -> Self {
        Padding { top, right, bottom, left }
    }

    /// Same margin on every edge.
    pub const fn uniform(value: i32) -> Self {
        Padding::new(value, value, value, value)
    }

    /// Total horizontal margin (`left + right`).
    pub fn horizontal(&self) -> i32 {
        self.left + self.right
    }

    /// Total vertical margin (`top + bottom`).
    pub fn vertical(&self) -> i32 {
        self.top + self.bottom
    }
}
