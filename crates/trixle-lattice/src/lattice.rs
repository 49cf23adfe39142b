//! The core `Lattice` trait.

use std::fmt;

/// A fixed, finite set of admissible moves on a Trixle lattice.
///
/// Implementors hold their move vectors for the lifetime of a simulation
/// and never mutate them. Moves are addressed by a small `Copy` label so
/// decision rules and reporters can talk about "which move" without
/// comparing floating-point vectors.
///
/// # Ordering
///
/// [`moves`](Self::moves) returns labels in a fixed, backend-defined
/// order. Decision rules that break ties by first-encountered move rely
/// on this order being stable.
pub trait Lattice: Send + Sync + 'static {
    /// Continuous vector type for positions and displacements.
    type Vector: Copy + fmt::Debug;
    /// Label identifying one admissible move.
    type Move: Copy + Eq + fmt::Debug + 'static;

    /// Number of spatial dimensions.
    fn ndim(&self) -> usize;

    /// Multiplier applied to every unit move.
    fn scale(&self) -> f64;

    /// All move labels in canonical order.
    fn moves(&self) -> &'static [Self::Move];

    /// The displacement for a move, already multiplied by [`scale`](Self::scale).
    fn vector(&self, mv: Self::Move) -> Self::Vector;

    /// Length of a move's displacement.
    fn step_length(&self, mv: Self::Move) -> f64;

    /// Angle between two moves, in degrees.
    fn angle_between(&self, a: Self::Move, b: Self::Move) -> f64;

    /// Angle between a move and the +x axis (the direction of travel),
    /// in degrees.
    fn heading(&self, mv: Self::Move) -> f64;

    /// Number of admissible moves.
    fn move_count(&self) -> usize {
        self.moves().len()
    }
}
