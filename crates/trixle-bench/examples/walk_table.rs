//! Print step tables for both walks.
//!
//! Usage: `cargo run -p trixle-bench --example walk_table [STEPS] [SEED]`
//!
//! Set `RUST_LOG=trixle_walk=trace` to see per-step events.

use std::error::Error;

use tracing_subscriber::EnvFilter;
use trixle_bench::args::{parse_table_args, TableArgs};
use trixle_bench::{reference_planar, reference_spatial, report};
use trixle_walk::{seeded_rng, simulate_2d_with, simulate_3d_with};

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let TableArgs { steps, seed } = parse_table_args(std::env::args().skip(1))?;

    let mut planar = reference_planar();
    let mut spatial = reference_spatial();
    if let Some(n) = steps {
        planar.steps = n;
        spatial.steps = n;
    }

    println!("=== Planar walk ({} steps, seed {seed}) ===\n", planar.steps);
    let t2 = simulate_2d_with(&planar, &mut seeded_rng(seed))?;
    println!("{}", report::planar_table(&t2));
    let m2 = t2.metrics();
    println!(
        "\njitter {} / zig {} / zag {}, observed changes {}, max |y| {:.3}",
        m2.jitter_steps, m2.zig_steps, m2.zag_steps, m2.observed_changes, m2.max_lateral_deviation
    );

    println!(
        "\n=== Spatial walk ({} steps, seed {seed}) ===\n",
        spatial.steps
    );
    let t3 = simulate_3d_with(&spatial, &mut seeded_rng(seed))?;
    println!("{}", report::spatial_table(&t3));
    let m3 = t3.metrics();
    println!(
        "\nmove counts {:?}, final hidden {:.3}, final observed {}",
        m3.move_counts,
        t3.final_hidden(),
        t3.final_observed()
    );
    println!("fingerprints: planar {:016x}, spatial {:016x}", t2.fingerprint(), t3.fingerprint());

    Ok(())
}
