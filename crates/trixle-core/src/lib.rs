//! Core types for the Trixle lattice walk.
//!
//! This is the leaf crate of the workspace. It defines the continuous
//! vector types used for hidden particle state, the integer lattice points
//! produced by the observer, and the [`RandomSource`] seam through which
//! every random draw in a simulation flows.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod point;
pub mod random;
pub mod vector;

pub use point::{Point2, Point3};
pub use random::RandomSource;
pub use vector::{Vec2, Vec3};
