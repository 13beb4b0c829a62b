//! 2D points and the distance used to compare them.

/// A position in the plane.
///
/// Points carry no identity of their own: the clustering code refers to a
/// point by its index in the input slice.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// X coordinate.
    pub x: f32,
    /// Y coordinate.
    pub y: f32,
}

impl Point {
    /// The origin `(0, 0)`.
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    /// Create a point from its coordinates.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance to `other`. See [`squared_distance`].
    #[inline]
    pub fn squared_distance_to(&self, other: &Point) -> f32 {
        squared_distance(self, other)
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

impl From<[f32; 2]> for Point {
    fn from([x, y]: [f32; 2]) -> Self {
        Self { x, y }
    }
}

/// Squared Euclidean distance between two points.
///
/// The square root is never taken anywhere in this crate, so every radius
/// handed to the clustering code is compared against this value and must be
/// squared as well.
#[inline]
pub fn squared_distance(a: &Point, b: &Point) -> f32 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    dx * dx + dy * dy
}
