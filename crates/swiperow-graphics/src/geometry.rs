//! Geometric primitives: Point, IntSize, PixelDelta

use std::ops::Sub;

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl Sub for Point {
    type Output = PixelDelta;

    /// Whole-pixel delta from `rhs` to `self`, truncated toward zero.
    fn sub(self, rhs: Self) -> PixelDelta {
        PixelDelta {
            dx: (self.x - rhs.x) as i32,
            dy: (self.y - rhs.y) as i32,
        }
    }
}

/// Laid-out extent of a row in whole pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Hash)]
pub struct IntSize {
    pub width: i32,
    pub height: i32,
}

impl IntSize {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub const ZERO: IntSize = IntSize {
        width: 0,
        height: 0,
    };

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

/// Signed whole-pixel displacement between two pointer positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Hash)]
pub struct PixelDelta {
    pub dx: i32,
    pub dy: i32,
}

impl PixelDelta {
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    pub const ZERO: PixelDelta = PixelDelta { dx: 0, dy: 0 };

    /// Component along `axis`.
    pub fn along(&self, axis: crate::Axis) -> i32 {
        match axis {
            crate::Axis::Horizontal => self.dx,
            crate::Axis::Vertical => self.dy,
        }
    }
}
