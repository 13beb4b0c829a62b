use super::dbscan::Label;
use crate::error::Result;
use crate::point::Point;

/// Common interface for hard clustering algorithms (one label per point).
pub trait Clustering {
    /// Label every input point; the output is index-aligned with `points`.
    fn cluster(&self, points: &[Point]) -> Result<Vec<Label>>;
}
