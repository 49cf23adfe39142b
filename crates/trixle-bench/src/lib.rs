//! Benchmark profiles and reporting helpers for Trixle walks.
//!
//! Provides pre-built [`WalkConfig`] profiles for benchmarks and demos:
//!
//! - [`reference_planar`]: the 50-step planar walk
//! - [`reference_spatial`]: the 100-step spatial walk
//! - [`stress_profile`]: a 1M-step run for throughput measurement
//!
//! plain-text table formatting in [`report`], and demo argument parsing
//! in [`args`].

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use trixle_walk::WalkConfig;

pub mod args;
pub mod report;

/// The 50-step planar walk with default scale and observer.
pub fn reference_planar() -> WalkConfig {
    WalkConfig::planar()
}

/// The 100-step spatial walk with default noise.
pub fn reference_spatial() -> WalkConfig {
    WalkConfig::spatial()
}

/// A 1,000,000-step profile for either kernel.
pub fn stress_profile() -> WalkConfig {
    WalkConfig::default().with_steps(1_000_000)
}
