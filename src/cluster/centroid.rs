//! Reduce a labeling to one representative position per cluster.

use std::collections::BTreeMap;

use super::dbscan::Label;
use super::traits::Clustering;
use crate::error::{Error, Result};
use crate::point::Point;

/// Mean position of one cluster.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Centroid {
    /// Cluster id from the labeling.
    pub cluster_id: usize,
    /// Arithmetic mean of the member coordinates.
    pub position: Point,
    /// Number of member points.
    pub size: usize,
}

#[derive(Default)]
struct Accumulator {
    sum_x: f64,
    sum_y: f64,
    count: usize,
}

/// Compute the centroid of every cluster in `labels`, ordered by cluster id.
///
/// `labels` must be index-aligned with `points`. Noise (and unclassified)
/// points are skipped; ids with no members simply do not appear.
///
/// # Errors
///
/// [`Error::LengthMismatch`] if `labels` and `points` differ in length.
pub fn centroids(points: &[Point], labels: &[Label]) -> Result<Vec<Centroid>> {
    if points.len() != labels.len() {
        return Err(Error::LengthMismatch {
            points: points.len(),
            labels: labels.len(),
        });
    }

    // Ordered map so output order never depends on hashing.
    let mut acc: BTreeMap<usize, Accumulator> = BTreeMap::new();
    for (p, label) in points.iter().zip(labels) {
        let Some(id) = label.cluster_id() else {
            continue;
        };
        let entry = acc.entry(id).or_default();
        entry.sum_x += f64::from(p.x);
        entry.sum_y += f64::from(p.y);
        entry.count += 1;
    }

    Ok(acc
        .into_iter()
        .map(|(cluster_id, a)| {
            let n = a.count as f64;
            Centroid {
                cluster_id,
                position: Point::new((a.sum_x / n) as f32, (a.sum_y / n) as f32),
                size: a.count,
            }
        })
        .collect())
}

/// Label `points` with `clusterer`, then aggregate.
pub(crate) fn cluster_then_aggregate<C: Clustering + ?Sized>(
    clusterer: &C,
    points: &[Point],
) -> Result<Vec<Centroid>> {
    let labels = clusterer.cluster(points)?;
    centroids(points, &labels)
}
