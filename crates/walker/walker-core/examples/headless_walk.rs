//! Walk a path without a renderer and print pose snapshots as JSON lines.
//!
//! Usage: cargo run -p walker-core --example headless_walk -- [path-file] [ticks]

use anyhow::{Context, Result};
use serde_json::json;
use walker_core::{load_path_or_default, LoadedPath, Session, WalkerConfig};

const FRAME: f32 = 1.0 / 60.0;

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let loaded = match args.next() {
        Some(file) => load_path_or_default(file),
        None => LoadedPath::default_loop(),
    };
    let ticks: usize = match args.next() {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("tick count '{raw}' is not a number"))?,
        None => 600,
    };

    let curve = loaded.path.polyline(100);
    let length: f32 = curve.windows(2).map(|w| w[0].distance(w[1])).sum();
    println!(
        "{}",
        json!({
            "basis": loaded.path.basis,
            "control_points": loaded.path.len(),
            "time_step": loaded.time_step,
            "approx_length": length,
        })
    );

    let mut session = Session::new(loaded, WalkerConfig::default());
    for tick in 0..ticks {
        session.tick(FRAME);
        if tick % 60 == 0 {
            let line = json!({
                "tick": tick,
                "heading_deg": session.pose().heading_degrees(),
                "pose": session.pose(),
                "gait": session.gait(),
            });
            println!("{line}");
        }
    }
    Ok(())
}
