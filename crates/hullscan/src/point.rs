//! 2D screen-space point (y grows downward).

use nalgebra::Vector2;

/// A 2D point, value-equal by coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance to `other`.
    ///
    /// Every distance comparison inside the scan uses this form; it
    /// avoids the square root and stays exact on integer coordinates.
    #[inline]
    pub fn squared_distance(self, other: Point) -> f64 {
        (other.coords() - self.coords()).norm_squared()
    }

    /// Euclidean distance to `other`. The scan itself never calls this;
    /// it exists for callers that need a true metric distance.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        self.squared_distance(other).sqrt()
    }

    /// Coordinate vector of the point.
    #[inline]
    pub fn coords(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}

impl From<[f64; 2]> for Point {
    #[inline]
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<Vector2<f64>> for Point {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Self { x: v.x, y: v.y }
    }
}
