//! Density clustering for 2D points.
//!
//! `clumps` groups a snapshot of 2D points (units on a map, say) into
//! density-connected clumps with DBSCAN and reduces each clump to its centroid,
//! so downstream logic can reason about groups instead of individuals.
//!
//! The primary public API is under [`cluster`], which provides:
//! - DBSCAN labeling (core / border / noise)
//! - centroid aggregation over a labeling, in ascending cluster-id order
//! - a parallel batch entry point for many independent point sets
//!
//! ```rust
//! use clumps::{Dbscan, Point};
//!
//! let points = [
//!     Point::new(0.0, 0.0),
//!     Point::new(1.0, 0.0),
//!     Point::new(40.0, 40.0),
//!     Point::new(41.0, 40.0),
//! ];
//!
//! // Linear radius 5.0; squared internally.
//! let centroids = Dbscan::new(5.0, 2).cluster_and_centroid(&points).unwrap();
//! assert_eq!(centroids, vec![Point::new(0.5, 0.0), Point::new(40.5, 40.0)]);
//! ```

#![forbid(unsafe_code)]

pub mod cluster;
pub mod error;
pub mod point;

pub use cluster::{
    cluster, cluster_and_centroid, cluster_count, centroids, members, noise_indices, Centroid,
    Clustering, Dbscan, Label, SOLDIER_EPS_SQUARED, SOLDIER_MIN_PTS,
};
pub use error::{Error, Result};
pub use point::{squared_distance, Point};
