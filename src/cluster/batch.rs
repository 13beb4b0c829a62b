//! Clustering many independent snapshots at once.
//!
//! A single pass has no shared state, so separate point sets can be clustered
//! on separate threads. Panics inside a worker propagate to the caller.

use rayon::prelude::*;
use tracing::debug;

use super::dbscan::Dbscan;
use crate::error::Result;
use crate::point::Point;

impl Dbscan {
    /// Run [`Dbscan::cluster_and_centroid`] over every set in parallel.
    ///
    /// Results are returned in the same order as `sets`. Parameters are
    /// validated once up front, so an invalid configuration fails before any
    /// set is processed.
    pub fn cluster_and_centroid_batch<S>(&self, sets: &[S]) -> Result<Vec<Vec<Point>>>
    where
        S: AsRef<[Point]> + Sync,
    {
        self.validate()?;
        debug!(sets = sets.len(), "dbscan: batch start");

        sets.par_iter()
            .map(|set| self.cluster_and_centroid(set.as_ref()))
            .collect()
    }
}
