//! Density clustering of 2D points and centroid extraction.
//!
//! ## DBSCAN
//!
//! Density-based clustering that discovers groups of any shape and leaves
//! isolated points out as noise. The number of groups is not fixed in advance:
//! a group is any chain of points where each link is within the radius and
//! the chain runs through "core" points (points with at least `min_pts`
//! neighbors, counting themselves).
//!
//! ## Centroids
//!
//! Each cluster is reduced to the arithmetic mean of its members. Centroids
//! are always returned in ascending cluster-id order, which is the order in
//! which the clusters were discovered while scanning the input.
//!
//! ## Radius convention
//!
//! Distances are compared squared. [`Dbscan::new`] takes a linear radius and
//! squares it; the free functions in this module take `eps_squared` directly.
//!
//! ## Usage
//!
//! ```rust
//! use clumps::cluster::{centroids, Clustering, Dbscan, Label};
//! use clumps::Point;
//!
//! let points = vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(0.1, 0.1),
//!     Point::new(10.0, 10.0),
//!     Point::new(10.1, 10.1),
//!     Point::new(-50.0, 30.0),
//! ];
//!
//! let labels = Dbscan::new(0.5, 2).cluster(&points).unwrap();
//! assert_eq!(labels[0], labels[1]);
//! assert_ne!(labels[0], labels[2]);
//! assert_eq!(labels[4], Label::Noise);
//!
//! let groups = centroids(&points, &labels).unwrap();
//! assert_eq!(groups.len(), 2);
//! assert_eq!(groups[0].size, 2);
//! ```

mod batch;
mod centroid;
mod dbscan;
mod traits;
mod util;

pub use centroid::{centroids, Centroid};
pub use dbscan::{
    cluster_count, members, noise_indices, Dbscan, Label, SOLDIER_EPS_SQUARED, SOLDIER_MIN_PTS,
};
pub use traits::Clustering;

use crate::error::Result;
use crate::point::Point;

/// Label `points` with DBSCAN.
///
/// `eps_squared` is the *squared* neighborhood radius; `min_pts` counts the
/// point itself. The result is index-aligned with `points`.
pub fn cluster(points: &[Point], eps_squared: f32, min_pts: usize) -> Result<Vec<Label>> {
    Dbscan::from_squared_radius(eps_squared, min_pts).cluster(points)
}

/// Cluster `points` and return the centroid of each cluster by ascending id.
///
/// `eps_squared` is the *squared* neighborhood radius.
pub fn cluster_and_centroid(
    points: &[Point],
    eps_squared: f32,
    min_pts: usize,
) -> Result<Vec<Point>> {
    Dbscan::from_squared_radius(eps_squared, min_pts).cluster_and_centroid(points)
}
