//! Print the hull of a fixed screen-space scatter, or of a random cloud.
//!
//! Usage:
//!   cargo run -p hullscan --example scatter
//!   cargo run -p hullscan --example scatter -- 200

use hullscan::prelude::*;

fn main() {
    let points = match std::env::args().nth(1) {
        Some(arg) => match arg.parse::<usize>() {
            Ok(n) => draw_point_cloud(
                &CloudCfg {
                    count: n,
                    ..CloudCfg::default()
                },
                ReplayToken {
                    seed: 2025,
                    index: 0,
                },
            ),
            Err(_) => {
                eprintln!("usage: scatter [point-count]");
                return;
            }
        },
        None => fixed_scatter(),
    };
    let total = points.len();
    match convex_hull(points) {
        Ok(hull) => {
            println!("{} of {} points on the hull:", hull.len(), total);
            for p in &hull {
                println!("  ({}, {})", p.x, p.y);
            }
        }
        Err(e) => eprintln!("no hull: {e}"),
    }
}

fn fixed_scatter() -> Vec<Point> {
    [
        (301, 247),
        (218, 219),
        (237, 188),
        (191, 142),
        (239, 139),
        (217, 90),
        (280, 184),
        (246, 39),
        (279, 110),
        (290, 56),
        (320, 126),
        (351, 27),
        (362, 95),
        (378, 64),
        (415, 62),
        (410, 99),
        (387, 138),
        (340, 203),
        (378, 171),
        (447, 128),
        (436, 194),
        (422, 228),
        (375, 245),
    ]
    .iter()
    .map(|&(x, y)| Point::new(f64::from(x), f64::from(y)))
    .collect()
}
