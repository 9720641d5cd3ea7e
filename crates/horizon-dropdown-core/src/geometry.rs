//! Basic geometry types.
//!
//! All coordinates are logical pixels. Rectangles reported by a layout engine
//! are in viewport coordinates; adding the document scroll offset turns them
//! into document coordinates.

use serde::{Deserialize, Serialize};

/// A point in 2D space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
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

    /// Offset this point by another point treated as a vector.
    #[inline]
    pub fn offset(self, by: Point) -> Self {
        Self::new(self.x + by.x, self.y + by.y)
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// A size in 2D space (width and height).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
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
}

impl From<(f32, f32)> for Size {
    fn from((width, height): (f32, f32)) -> Self {
        Self { width, height }
    }
}

/// A rectangle defined by origin and size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
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

    /// Create a rectangle from an origin point and a size.
    #[inline]
    pub const fn from_origin_size(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Empty rectangle at origin.
    pub const ZERO: Self = Self {
        origin: Point::ZERO,
        size: Size::ZERO,
    };

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

    /// Bottom-left corner.
    #[inline]
    pub fn bottom_left(&self) -> Point {
        Point {
            x: self.left(),
            y: self.bottom(),
        }
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

    /// Return this rectangle moved by `offset`.
    #[inline]
    pub fn translated(&self, offset: Point) -> Rect {
        Rect {
            origin: self.origin.offset(offset),
            size: self.size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let rect = Rect::new(10.0, 20.0, 100.0, 40.0);
        assert_eq!(rect.left(), 10.0);
        assert_eq!(rect.right(), 110.0);
        assert_eq!(rect.bottom(), 60.0);
        assert_eq!(rect.bottom_left(), Point::new(10.0, 60.0));
    }

    #[test]
    fn test_rect_contains_is_half_open() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(rect.contains(Point::new(0.0, 0.0)));
        assert!(rect.contains(Point::new(9.9, 9.9)));
        assert!(!rect.contains(Point::new(10.0, 5.0)));
        assert!(!rect.contains(Point::new(5.0, -0.1)));
    }

    #[test]
    fn test_rect_translated() {
        let rect = Rect::new(5.0, 5.0, 20.0, 10.0).translated(Point::new(0.0, 300.0));
        assert_eq!(rect, Rect::new(5.0, 305.0, 20.0, 10.0));
    }

    #[test]
    fn test_empty_size() {
        assert!(Size::ZERO.is_empty());
        assert!(Rect::new(0.0, 0.0, 10.0, 0.0).is_empty());
        assert!(!Size::new(1.0, 1.0).is_empty());
    }
}
