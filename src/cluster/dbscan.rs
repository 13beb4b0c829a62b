//! DBSCAN: Density-Based Spatial Clustering of Applications with Noise.
//!
//! # The Algorithm (Ester et al., 1996)
//!
//! DBSCAN groups points by neighborhood density. Unlike k-means, it:
//!
//! - Discovers clusters of arbitrary shape
//! - Automatically determines the number of clusters
//! - Identifies noise points (outliers)
//!
//! ## Core Concepts
//!
//! - **Radius (ε)**: Maximum distance between two points to be neighbors.
//!   This implementation compares squared distances, so internally ε is held
//!   as ε².
//! - **MinPts**: Minimum neighbors within ε, *counting the point itself*, for a
//!   point to be "core".
//! - **Core point**: Has at least MinPts neighbors within ε.
//! - **Border point**: Within ε of a core point but not core itself.
//! - **Noise point**: Neither core nor border.
//!
//! ## Algorithm Steps
//!
//! 1. For each unclassified point P, in input order:
//!    - Find neighbors within ε
//!    - If |neighbors| < MinPts, mark as noise (may change later)
//!    - Else P is core: start a new cluster, expand from its neighbors
//!
//! 2. Expansion works through a FIFO frontier:
//!    - Noise reached from the cluster becomes a border point; it is not expanded
//!    - Unclassified points join; if they are core, their neighbors join the frontier
//!    - Points already in a cluster are left alone
//!
//! ## Complexity
//!
//! - **Time**: O(n²). There is no spatial index; intended for tens to low
//!   hundreds of points per call.
//! - **Space**: O(n) for labels, plus the frontier.
//!
//! ## Border ties
//!
//! A border point within ε of core points from two different clusters joins
//! whichever cluster reaches it first. That depends on input order, so only
//! the grouping of core points is independent of ordering.

use std::collections::VecDeque;

use tracing::{debug, trace};

use super::centroid::{self, Centroid};
use super::traits::Clustering;
use super::util::region_query;
use crate::error::{Error, Result};
use crate::point::Point;

/// Squared neighborhood radius for clumping soldier units (radius 5).
pub const SOLDIER_EPS_SQUARED: f32 = 25.0;

/// Minimum clump size for soldier units.
pub const SOLDIER_MIN_PTS: usize = 2;

/// Per-point state of a DBSCAN labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Label {
    /// Not visited yet. Never present in a finished labeling.
    Unclassified,
    /// Not density-reachable from any core point.
    Noise,
    /// Member of the cluster with this id. Ids start at 0 in discovery order.
    Cluster(usize),
}

impl Label {
    /// Whether this point was left as noise.
    #[inline]
    pub fn is_noise(&self) -> bool {
        matches!(self, Label::Noise)
    }

    /// The cluster id, if the point belongs to a cluster.
    #[inline]
    pub fn cluster_id(&self) -> Option<usize> {
        match *self {
            Label::Cluster(id) => Some(id),
            Label::Unclassified | Label::Noise => None,
        }
    }
}

/// Number of clusters in a labeling (largest id + 1).
pub fn cluster_count(labels: &[Label]) -> usize {
    labels
        .iter()
        .filter_map(Label::cluster_id)
        .max()
        .map_or(0, |id| id + 1)
}

/// Indices of the points labeled as noise.
pub fn noise_indices(labels: &[Label]) -> Vec<usize> {
    labels
        .iter()
        .enumerate()
        .filter(|(_, l)| l.is_noise())
        .map(|(i, _)| i)
        .collect()
}

/// Indices of the points in cluster `cluster_id`.
pub fn members(labels: &[Label], cluster_id: usize) -> Vec<usize> {
    labels
        .iter()
        .enumerate()
        .filter(|(_, l)| l.cluster_id() == Some(cluster_id))
        .map(|(i, _)| i)
        .collect()
}

/// DBSCAN clustering algorithm over 2D points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dbscan {
    /// Squared neighborhood radius.
    eps_squared: f32,
    /// Minimum points (including the point itself) for core classification.
    min_pts: usize,
}

/// Square a radius, keeping its sign so that a negative radius stays invalid.
#[inline]
fn signed_square(radius: f32) -> f32 {
    radius * radius.abs()
}

impl Dbscan {
    /// Create a new DBSCAN clusterer.
    ///
    /// # Arguments
    ///
    /// * `radius` - Maximum (linear) distance between two neighbors. It is
    ///   squared here; use [`Dbscan::from_squared_radius`] if you already
    ///   hold a squared value.
    /// * `min_pts` - Minimum number of points, including the point itself,
    ///   to form a dense region.
    pub fn new(radius: f32, min_pts: usize) -> Self {
        Self {
            eps_squared: signed_square(radius),
            min_pts,
        }
    }

    /// Create a clusterer from an already squared radius.
    pub fn from_squared_radius(eps_squared: f32, min_pts: usize) -> Self {
        Self {
            eps_squared,
            min_pts,
        }
    }

    /// Parameters tuned for clumping soldier units: radius 5, pairs and up.
    pub fn soldiers() -> Self {
        Self::from_squared_radius(SOLDIER_EPS_SQUARED, SOLDIER_MIN_PTS)
    }

    /// Set the (linear) neighborhood radius.
    pub fn with_radius(mut self, radius: f32) -> Self {
        self.eps_squared = signed_square(radius);
        self
    }

    /// Set the squared neighborhood radius.
    pub fn with_squared_radius(mut self, eps_squared: f32) -> Self {
        self.eps_squared = eps_squared;
        self
    }

    /// Set minimum points for core classification.
    pub fn with_min_pts(mut self, min_pts: usize) -> Self {
        self.min_pts = min_pts;
        self
    }

    /// The squared neighborhood radius.
    pub fn eps_squared(&self) -> f32 {
        self.eps_squared
    }

    /// Minimum points for core classification.
    pub fn min_pts(&self) -> usize {
        self.min_pts
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.eps_squared.is_nan() || self.eps_squared < 0.0 {
            return Err(Error::InvalidParameter {
                name: "eps_squared",
                message: "must be a non-negative number",
            });
        }

        if self.min_pts == 0 {
            return Err(Error::InvalidParameter {
                name: "min_pts",
                message: "must be at least 1",
            });
        }

        Ok(())
    }

    /// Grow cluster `cluster_id` from the neighbors of its seed.
    ///
    /// The seed must already be labeled. The frontier is consumed in the order
    /// points were discovered; core points append their neighbors to it.
    fn expand_cluster(
        &self,
        points: &[Point],
        labels: &mut [Label],
        cluster_id: usize,
        seed_neighbors: Vec<usize>,
    ) {
        let mut frontier: VecDeque<usize> = seed_neighbors.into();

        while let Some(idx) = frontier.pop_front() {
            match labels[idx] {
                // Border point: joins, but is never used to reach further.
                Label::Noise => labels[idx] = Label::Cluster(cluster_id),
                Label::Unclassified => {
                    labels[idx] = Label::Cluster(cluster_id);

                    let neighbors = region_query(points, idx, self.eps_squared);
                    if neighbors.len() >= self.min_pts {
                        frontier.extend(
                            neighbors
                                .into_iter()
                                .filter(|&n| labels[n].cluster_id().is_none()),
                        );
                    }
                }
                Label::Cluster(_) => {}
            }
        }
    }

    /// Cluster `points` and return one centroid per cluster, by ascending id.
    ///
    /// Noise points contribute to no centroid.
    pub fn cluster_and_centroid(&self, points: &[Point]) -> Result<Vec<Point>> {
        Ok(self
            .centroids_with_sizes(points)?
            .into_iter()
            .map(|c| c.position)
            .collect())
    }

    /// Like [`Dbscan::cluster_and_centroid`], keeping cluster ids and sizes.
    pub fn centroids_with_sizes(&self, points: &[Point]) -> Result<Vec<Centroid>> {
        centroid::cluster_then_aggregate(self, points)
    }
}

impl Default for Dbscan {
    fn default() -> Self {
        Self::soldiers()
    }
}

impl Clustering for Dbscan {
    fn cluster(&self, points: &[Point]) -> Result<Vec<Label>> {
        self.validate()?;

        let mut labels = vec![Label::Unclassified; points.len()];
        let mut next_id = 0usize;

        for idx in 0..points.len() {
            if labels[idx] != Label::Unclassified {
                continue;
            }

            let neighbors = region_query(points, idx, self.eps_squared);

            // MinPts counts the point itself, which region_query always returns.
            if neighbors.len() < self.min_pts {
                labels[idx] = Label::Noise;
                continue;
            }

            labels[idx] = Label::Cluster(next_id);
            self.expand_cluster(points, &mut labels, next_id, neighbors);
            trace!(cluster_id = next_id, seed = idx, "dbscan: cluster discovered");
            next_id += 1;
        }

        debug!(
            points = points.len(),
            clusters = next_id,
            noise = labels.iter().filter(|l| l.is_noise()).count(),
            eps_squared = self.eps_squared,
            min_pts = self.min_pts,
            "dbscan: pass complete"
        );

        Ok(labels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(coords: &[(f32, f32)]) -> Vec<Point> {
        coords.iter().copied().map(Point::from).collect()
    }

    #[test]
    fn test_dbscan_two_clusters() {
        let points = pts(&[
            // Cluster 1: around (0, 0)
            (0.0, 0.0),
            (0.1, 0.0),
            (0.0, 0.1),
            (0.1, 0.1),
            (0.05, 0.05),
            // Cluster 2: around (5, 5)
            (5.0, 5.0),
            (5.1, 5.0),
            (5.0, 5.1),
            (5.1, 5.1),
            (5.05, 5.05),
        ]);

        let labels = Dbscan::new(0.3, 3).cluster(&points).unwrap();

        assert_eq!(labels.len(), 10);
        assert!(labels[..5].iter().all(|l| *l == Label::Cluster(0)));
        assert!(labels[5..].iter().all(|l| *l == Label::Cluster(1)));
        assert_eq!(cluster_count(&labels), 2);
    }

    #[test]
    fn test_dbscan_with_noise() {
        let points = pts(&[
            (0.0, 0.0),
            (0.1, 0.0),
            (0.0, 0.1),
            (0.1, 0.1),
            // Outlier
            (100.0, 100.0),
            (5.0, 5.0),
            (5.1, 5.0),
            (5.0, 5.1),
            (5.1, 5.1),
        ]);

        let labels = Dbscan::new(0.3, 3).cluster(&points).unwrap();

        assert_eq!(noise_indices(&labels), vec![4]);
        for (i, label) in labels.iter().enumerate() {
            if i != 4 {
                assert!(label.cluster_id().is_some());
            }
        }
    }

    #[test]
    fn test_dbscan_all_noise() {
        let points = pts(&[(0.0, 0.0), (10.0, 0.0), (0.0, 10.0), (10.0, 10.0)]);
        let labels = Dbscan::new(0.5, 3).cluster(&points).unwrap();
        assert!(labels.iter().all(Label::is_noise));
        assert_eq!(cluster_count(&labels), 0);
    }

    #[test]
    fn test_dbscan_chain() {
        // Chain of points - DBSCAN should connect them
        let points: Vec<Point> = (0..10).map(|i| Point::new(i as f32 * 0.3, 0.0)).collect();
        let labels = Dbscan::new(0.5, 2).cluster(&points).unwrap();
        assert!(labels.iter().all(|l| *l == Label::Cluster(0)));
    }

    #[test]
    fn test_noise_promoted_to_border() {
        // Point 0 sees only point 1, so with min_pts = 3 it is noise when first
        // visited. Point 1 is core (0, 1, 2) and later absorbs it as a border.
        let points = pts(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)]);
        let labels = Dbscan::new(1.0, 3).cluster(&points).unwrap();
        assert_eq!(labels, vec![Label::Cluster(0); 4]);
    }

    #[test]
    fn test_border_point_does_not_extend_cluster() {
        // 0..=3 is a dense group. Point 4 is reached from core point 3 but has
        // only three neighbors (3, 4, 5), so it is a border point and must not
        // pull in point 5.
        let points = pts(&[(0.0, 0.0), (0.3, 0.0), (0.6, 0.0), (0.9, 0.0), (1.8, 0.0), (2.7, 0.0)]);
        let labels = Dbscan::new(1.0, 4).cluster(&points).unwrap();
        assert_eq!(
            labels,
            vec![
                Label::Cluster(0),
                Label::Cluster(0),
                Label::Cluster(0),
                Label::Cluster(0),
                Label::Cluster(0),
                Label::Noise,
            ]
        );
    }

    #[test]
    fn test_shared_border_goes_to_first_cluster() {
        // Point at x = 0.9 is a border point of both groups.
        let left = [(-0.8, 0.0), (-0.4, 0.0), (0.0, 0.0)];
        let border = (0.9, 0.0);
        let right = [(1.8, 0.0), (2.2, 0.0), (2.6, 0.0)];
        let dbscan = Dbscan::new(1.0, 4);

        let mut coords = left.to_vec();
        coords.push(border);
        coords.extend_from_slice(&right);
        let labels = dbscan.cluster(&pts(&coords)).unwrap();
        assert_eq!(cluster_count(&labels), 2);
        assert_eq!(labels[3], labels[0]);
        assert_ne!(labels[3], labels[4]);

        let mut coords = right.to_vec();
        coords.push(border);
        coords.extend_from_slice(&left);
        let labels = dbscan.cluster(&pts(&coords)).unwrap();
        assert_eq!(cluster_count(&labels), 2);
        assert_eq!(labels[3], labels[0]);
        assert_ne!(labels[3], labels[4]);
    }

    #[test]
    fn test_min_pts_one_every_point_is_core() {
        let points = pts(&[(0.0, 0.0), (50.0, 50.0)]);
        let labels = Dbscan::new(1.0, 1).cluster(&points).unwrap();
        assert_eq!(labels, vec![Label::Cluster(0), Label::Cluster(1)]);
    }

    #[test]
    fn test_zero_radius_groups_duplicates() {
        let points = pts(&[(1.0, 1.0), (2.0, 2.0), (1.0, 1.0)]);
        let labels = Dbscan::from_squared_radius(0.0, 2).cluster(&points).unwrap();
        assert_eq!(labels, vec![Label::Cluster(0), Label::Noise, Label::Cluster(0)]);
    }

    #[test]
    fn test_dbscan_empty() {
        let labels = Dbscan::default().cluster(&[]).unwrap();
        assert!(labels.is_empty());
    }

    #[test]
    fn test_dbscan_invalid_params() {
        let points = pts(&[(0.0, 0.0)]);

        let err = Dbscan::new(-1.0, 3).cluster(&points).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { name: "eps_squared", .. }));

        assert!(Dbscan::from_squared_radius(-0.5, 3).cluster(&points).is_err());
        assert!(Dbscan::from_squared_radius(f32::NAN, 3).cluster(&points).is_err());

        let err = Dbscan::new(0.5, 0).cluster(&points).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { name: "min_pts", .. }));

        // Validation runs even without any points.
        assert!(Dbscan::new(0.5, 0).cluster(&[]).is_err());
    }

    #[test]
    fn test_radius_is_squared_at_the_boundary() {
        assert_eq!(Dbscan::new(5.0, 2).eps_squared(), 25.0);
        assert_eq!(Dbscan::new(5.0, 2), Dbscan::from_squared_radius(25.0, 2));
        assert_eq!(Dbscan::default(), Dbscan::soldiers());
        assert_eq!(Dbscan::soldiers().min_pts(), SOLDIER_MIN_PTS);
        assert!(Dbscan::new(-2.0, 2).eps_squared() < 0.0);
    }

    #[test]
    fn test_label_helpers() {
        let labels = vec![
            Label::Cluster(1),
            Label::Noise,
            Label::Cluster(0),
            Label::Cluster(1),
        ];
        assert_eq!(cluster_count(&labels), 2);
        assert_eq!(noise_indices(&labels), vec![1]);
        assert_eq!(members(&labels, 1), vec![0, 3]);
        assert_eq!(members(&labels, 7), Vec::<usize>::new());
        assert_eq!(Label::Unclassified.cluster_id(), None);
    }
}
