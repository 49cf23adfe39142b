//! Trixle: constrained lattice walks seen through an integer observer.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Trixle sub-crates. For most users, adding `trixle` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use trixle::prelude::*;
//!
//! let mut rng = seeded_rng(42);
//!
//! // Planar walk: zig-zag around y = 0.
//! let planar = simulate_2d(50, &mut rng).unwrap();
//! assert_eq!(planar.hidden.len(), 51);
//! assert!(planar.hidden.iter().all(|p| p.y.abs() <= 0.5));
//!
//! // Spatial walk with an explicit configuration.
//! let config = WalkConfig { noise_std: 0.2, ..WalkConfig::spatial() };
//! let spatial = simulate_3d_with(&config, &mut rng).unwrap();
//! let (hidden, observed) = spatial.into_paths();
//! assert_eq!(hidden.len(), observed.len());
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `trixle-core` | vectors, lattice points, `RandomSource` |
//! | [`lattice`] | `trixle-lattice` | `Lattice` trait, triangular and tetrahedral move sets |
//! | [`walk`] | `trixle-walk` | config, decision rules, observer, kernels, metrics |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Vectors, lattice points, and the random source seam (`trixle-core`).
pub use trixle_core as types;

/// Lattice geometries (`trixle-lattice`).
///
/// Provides the [`lattice::Lattice`] trait and the two move sets,
/// [`lattice::Triangular2D`] and [`lattice::Tetrahedral3D`].
pub use trixle_lattice as lattice;

/// Walk kernels and the observer (`trixle-walk`).
///
/// [`walk::Walk2D`] and [`walk::Walk3D`] run a configured kernel;
/// [`walk::simulate_2d`] and [`walk::simulate_3d`] are one-call entry
/// points.
pub use trixle_walk as walk;

/// Common imports for typical Trixle usage.
///
/// ```rust
/// use trixle::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use trixle_core::{Point2, Point3, RandomSource, Vec2, Vec3};

    // Lattices
    pub use trixle_lattice::{Lattice, Tetrahedral3D, TetraMove, TriMove, Triangular2D};

    // Walks
    pub use trixle_walk::{
        seeded_rng, simulate_2d, simulate_2d_with, simulate_3d, simulate_3d_with, ConfigError,
        FrustrationNoise, Observer, Rounding, StepLabel, Trajectory2D, Trajectory3D, Walk2D,
        Walk3D, WalkConfig, WalkError, WalkMetrics,
    };
}
