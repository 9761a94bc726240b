//! Overlap demo: prints the overlap polygon of a named triangle pair.
//!
//! Usage:
//! ```text
//! cargo run --example overlap                     # default (hexagram)
//! cargo run --example overlap -- vertex_on_edge
//! RUST_LOG=triclip=trace cargo run --example overlap -- thin
//! ```

use triclip::math::polygon_2d::signed_area_2d;
use triclip::operations::{EntryRule, OverlapParams, TriangleOverlap, TriangulateConvex};
use triclip::Triangle;

const PATTERNS: &[(&str, [[f64; 2]; 3], [[f64; 2]; 3])] = &[
    (
        "hexagram",
        [[0.0, 0.0], [6.0, 0.0], [3.0, 6.0]],
        [[0.0, 4.0], [3.0, -2.0], [6.0, 4.0]],
    ),
    (
        "vertex_on_edge",
        [[0.0, 0.0], [2.0, 0.0], [2.0, 2.0]],
        [[1.0, 1.0], [2.0, -1.0], [3.0, 1.0]],
    ),
    (
        "vertex_exits_on_edge",
        [[0.0, 0.0], [4.0, 0.0], [0.0, 4.0]],
        [[2.0, 0.0], [3.0, -1.0], [1.0, 2.0]],
    ),
    (
        "contained",
        [[0.0, 0.0], [2.0, 0.0], [2.0, 2.0]],
        [[1.0, 0.0], [2.0, 0.0], [2.0, 1.0]],
    ),
    (
        "vertex_on_vertex",
        [[0.0, 0.0], [2.0, 0.0], [2.0, 2.0]],
        [[2.0, 0.0], [2.0, -2.0], [4.0, 0.0]],
    ),
    (
        "disjoint",
        [[0.0, 0.0], [2.0, 0.0], [2.0, 2.0]],
        [[0.0, -1.0], [2.0, -1.0], [2.0, -3.0]],
    ),
    (
        "thin",
        [[0.0, 0.0], [4.0, 0.0], [2.0, 0.05]],
        [[1.0, -5.0], [3.0, -5.0], [2.0, 5.0]],
    ),
];

fn run(name: &str, a: Triangle, b: Triangle) -> triclip::Result<()> {
    for (label, rule) in [("orientation", EntryRule::Orientation), ("probe", EntryRule::probe())] {
        let params = OverlapParams {
            entry_rule: rule,
            ..OverlapParams::default()
        };
        match TriangleOverlap::new(a, b).with_params(params).execute()? {
            None => println!("{name} [{label}]: no overlap"),
            Some(polygon) => {
                let tris = TriangulateConvex::new(&polygon).execute()?;
                println!(
                    "{name} [{label}]: {} vertices, area {:.6}, {} triangles",
                    polygon.len(),
                    signed_area_2d(&polygon),
                    tris.len()
                );
                for p in &polygon {
                    println!("  ({}, {})", p.x, p.y);
                }
            }
        }
    }
    Ok(())
}

fn main() -> triclip::Result<()> {
    // Default: WARN for everything, INFO for triclip.
    // Override with RUST_LOG env var (e.g. RUST_LOG=triclip=trace).
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn,triclip=info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let wanted = std::env::args().nth(1).unwrap_or_else(|| "hexagram".to_owned());
    let Some((name, a, b)) = PATTERNS.iter().find(|(name, ..)| *name == wanted) else {
        eprintln!("unknown pattern {wanted:?}; known patterns:");
        for (name, ..) in PATTERNS {
            eprintln!("  {name}");
        }
        std::process::exit(2);
    };

    run(name, Triangle::from_coords(*a), Triangle::from_coords(*b))
}
