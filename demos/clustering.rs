//! Clump a few squads of units and print their centroids.
//!
//! Run with `RUST_LOG=clumps=trace` to see the clustering events.

use clumps::{centroids, Clustering, Dbscan, Label, Point};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();

    let points: Vec<Point> = [
        // Squad A (west)
        (-45.5, -21.5),
        (-44.9, -24.4),
        (-46.2, -15.8),
        (-46.1, -18.7),
        // Squad B (north-east)
        (24.5, 44.8),
        (15.9, 46.0),
        (18.8, 45.8),
        (21.6, 45.3),
        // Straggler
        (0.0, 0.0),
    ]
    .into_iter()
    .map(Point::from)
    .collect();

    // Linear radius 5 (squared to 25 internally), at least two units per clump.
    let dbscan = Dbscan::new(5.0, 2);
    let labels = match dbscan.cluster(&points) {
        Ok(labels) => labels,
        Err(err) => {
            eprintln!("clustering failed: {err}");
            return;
        }
    };

    println!("=== DBSCAN (radius=5.0, min_pts=2) ===");
    for (i, (p, label)) in points.iter().zip(&labels).enumerate() {
        let tag = match label {
            Label::Cluster(id) => format!("clump {id}"),
            Label::Noise => "NOISE".to_string(),
            Label::Unclassified => "?".to_string(),
        };
        println!("  unit {:2} ({:6.1}, {:6.1}) => {}", i, p.x, p.y, tag);
    }

    println!("\n=== Centroids ===");
    match centroids(&points, &labels) {
        Ok(out) => {
            for c in out {
                println!(
                    "  clump {} ({} units) at ({:6.2}, {:6.2})",
                    c.cluster_id, c.size, c.position.x, c.position.y
                );
            }
        }
        Err(err) => eprintln!("centroids failed: {err}"),
    }
}
