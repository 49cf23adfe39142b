//! Lattice geometries for Trixle walks.
//!
//! A particle on a Trixle lattice cannot move along the direction it wants
//! to travel. It can only take one of a small fixed set of moves. This
//! crate defines the [`Lattice`] trait over those move sets and the two
//! concrete geometries the walks use.
//!
//! # Geometries
//!
//! - [`Triangular2D`]: two moves at ±30° from horizontal
//! - [`Tetrahedral3D`]: four moves at the tetrahedral angle (~109.47°)

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod lattice;
pub mod tetrahedral;
pub mod triangular;

#[cfg(test)]
pub(crate) mod compliance;

pub use error::LatticeError;
pub use lattice::Lattice;
pub use tetrahedral::{Tetrahedral3D, TetraMove};
pub use triangular::{TriMove, Triangular2D};
