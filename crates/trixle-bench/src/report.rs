//! Plain-text step tables for trajectories.
//!
//! One row per step after the origin, in the column layout
//! `Step | True Position | Measurement | State` (planar) or
//! `Step | Decision (Vector) | Measurement` (spatial).

use trixle_walk::{Trajectory2D, Trajectory3D};

/// Header and rule lines for the planar table.
pub fn planar_header() -> String {
    format!(
        "{:<5} | {:<20} | {} | {}\n{}",
        "Step",
        "True Position",
        "Measurement",
        "State",
        "-".repeat(65)
    )
}

/// Header and rule lines for the spatial table.
pub fn spatial_header() -> String {
    format!(
        "{:<5} | {:<20} | {}\n{}",
        "Step",
        "Decision (Vector)",
        "Measurement",
        "-".repeat(60)
    )
}

/// Format every step of a planar walk.
pub fn planar_rows(t: &Trajectory2D) -> Vec<String> {
    t.decisions
        .iter()
        .enumerate()
        .map(|(i, d)| {
            let hidden = t.hidden[i + 1].to_string();
            let observed = t.observed[i + 1].to_string();
            format!("{:<5} | {:<20} | {:<11} | {}", i + 1, hidden, observed, d.label)
        })
        .collect()
}

/// Format every step of a spatial walk.
pub fn spatial_rows(t: &Trajectory3D) -> Vec<String> {
    t.decisions
        .iter()
        .enumerate()
        .map(|(i, d)| {
            let observed = t.observed[i + 1].to_string();
            format!("{:<5} | {:<20} | {}", i + 1, d.mv.name(), observed)
        })
        .collect()
}

/// A full planar table: header followed by one line per step.
pub fn planar_table(t: &Trajectory2D) -> String {
    let mut out = planar_header();
    for row in planar_rows(t) {
        out.push('\n');
        out.push_str(&row);
    }
    out
}

/// A full spatial table: header followed by one line per step.
pub fn spatial_table(t: &Trajectory3D) -> String {
    let mut out = spatial_header();
    for row in spatial_rows(t) {
        out.push('\n');
        out.push_str(&row);
    }
    out
}
