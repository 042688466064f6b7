//! Hull a seeded random cloud and place a label inside it.
//!
//! Usage:
//!   cargo run -p hull2 --example label_cloud -- [count] [seed]

use hull2::prelude::*;

fn main() {
    let mut args = std::env::args().skip(1);
    let count = args.next().and_then(|s| s.parse().ok()).unwrap_or(50);
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(2025);
    let cfg = CloudCfg {
        count: PointCount::Fixed(count),
        shape: CloudShape::Disk { radius: 10.0 },
        ..CloudCfg::default()
    };
    let points = draw_point_cloud(cfg, ReplayToken { seed, index: 0 });
    let hull = Hull2::from_points(&points);
    println!(
        "points={} hull_vertices={} area={:.4} perimeter={:.4}",
        points.len(),
        hull.len(),
        hull.area(),
        hull.perimeter()
    );
    let lc = LabelCfg {
        precision: 0.01,
        ..LabelCfg::default()
    };
    match polylabel(&hull.vertices, lc) {
        Some(l) => println!(
            "label at ({:.4}, {:.4}), clearance {:.4}, cells {}",
            l.point.x, l.point.y, l.distance, l.cells
        ),
        None => println!("no label: empty hull"),
    }
}
