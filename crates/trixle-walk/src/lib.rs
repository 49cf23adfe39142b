//! Walk kernels and the integer observer for Trixle lattices.
//!
//! A particle that may not move along its direction of travel is steered
//! by a per-step decision rule, while an observer snaps its hidden
//! position to the integer lattice. Two kernels share that shape:
//!
//! - [`Walk2D`]: triangular lattice, [`MedianVoter`] correction rule
//! - [`Walk3D`]: tetrahedral lattice, [`GreedyProgress`] scoring rule
//!
//! # Entry points
//!
//! [`simulate_2d`] and [`simulate_3d`] run a kernel with default settings;
//! the `_with` variants take an explicit [`WalkConfig`]. Every function
//! draws randomness only from the caller's [`RandomSource`], so a seeded
//! generator gives a reproducible run.
//!
//! ```
//! use trixle_walk::{seeded_rng, simulate_2d};
//!
//! let mut rng = seeded_rng(7);
//! let (hidden, observed) = simulate_2d(20, &mut rng).unwrap().into_paths();
//! assert_eq!(hidden.len(), 21);
//! assert_eq!(observed.len(), 21);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod decision;
pub mod error;
pub mod fingerprint;
pub mod metrics;
pub mod observer;
pub mod trajectory;
pub mod walk2d;
pub mod walk3d;

pub use config::{ConfigError, FrustrationNoise, WalkConfig};
pub use decision::{Decision2D, Decision3D, GreedyProgress, MedianVoter, StepLabel};
pub use error::WalkError;
pub use metrics::WalkMetrics;
pub use observer::{Observer, Quantize, Rounding};
pub use trajectory::{Trajectory2D, Trajectory3D};
pub use walk2d::Walk2D;
pub use walk3d::Walk3D;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use trixle_core::RandomSource;

/// The canonical seeded generator for reproducible runs.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Run the planar walk for `steps` steps with default settings.
pub fn simulate_2d<R: RandomSource + ?Sized>(
    steps: u32,
    rng: &mut R,
) -> Result<Trajectory2D, WalkError> {
    simulate_2d_with(&WalkConfig::planar().with_steps(steps), rng)
}

/// Run the planar walk described by `config`.
///
/// The configuration is validated before any state is created.
pub fn simulate_2d_with<R: RandomSource + ?Sized>(
    config: &WalkConfig,
    rng: &mut R,
) -> Result<Trajectory2D, WalkError> {
    Walk2D::from_config(config)?.run(config.steps, rng)
}

/// Run the spatial walk for `steps` steps with default settings.
pub fn simulate_3d<R: RandomSource + ?Sized>(
    steps: u32,
    rng: &mut R,
) -> Result<Trajectory3D, WalkError> {
    simulate_3d_with(&WalkConfig::spatial().with_steps(steps), rng)
}

/// Run the spatial walk described by `config`.
///
/// The configuration is validated before any state is created.
pub fn simulate_3d_with<R: RandomSource + ?Sized>(
    config: &WalkConfig,
    rng: &mut R,
) -> Result<Trajectory3D, WalkError> {
    Walk3D::from_config(config)?.run(config.steps, rng)
}
