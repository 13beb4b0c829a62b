use crate::point::{squared_distance, Point};

/// Indices of every point within `eps_squared` (squared distance) of `points[idx]`.
///
/// Brute force, O(n) per call. The result always contains `idx` itself and is
/// ordered by index, which fixes the order in which a cluster is expanded.
pub(crate) fn region_query(points: &[Point], idx: usize, eps_squared: f32) -> Vec<usize> {
    let center = &points[idx];
    points
        .iter()
        .enumerate()
        .filter(|(_, other)| squared_distance(center, other) <= eps_squared)
        .map(|(i, _)| i)
        .collect()
}
