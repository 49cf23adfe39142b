//! 2D triangular lattice projection with two diagonal moves.

use crate::error::{check_scale, LatticeError};
use crate::lattice::Lattice;
use trixle_core::Vec2;

/// Angle of the upward move above the x-axis, in degrees.
pub const HALF_ANGLE_DEGREES: f64 = 30.0;

/// One of the two moves on a [`Triangular2D`] lattice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TriMove {
    /// `(cos 30°, sin 30°)`.
    Up = 0,
    /// `(cos -30°, sin -30°)`.
    Down = 1,
}

impl TriMove {
    /// Both moves in canonical order.
    pub const ALL: [TriMove; 2] = [TriMove::Up, TriMove::Down];

    /// Position in [`ALL`](Self::ALL).
    pub fn index(self) -> usize {
        self as usize
    }
}

/// A triangular lattice seen edge-on: the particle may only move at +30°
/// or -30° from the horizontal, never along it.
///
/// `down` is built as the exact mirror of `up` across the x-axis, so an
/// up move followed by a down move returns the lateral coordinate to
/// exactly zero.
///
/// # Examples
///
/// ```
/// use trixle_lattice::{Lattice, TriMove, Triangular2D};
///
/// let tri = Triangular2D::new(1.0).unwrap();
/// assert_eq!(tri.move_count(), 2);
/// let up = tri.vector(TriMove::Up);
/// let down = tri.vector(TriMove::Down);
/// assert_eq!(up.y + down.y, 0.0);
/// assert!((tri.heading(TriMove::Up) - 30.0).abs() < 1e-9);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Triangular2D {
    up: Vec2,
    down: Vec2,
    scale: f64,
}

impl Triangular2D {
    /// Create the move set with every vector multiplied by `scale`.
    ///
    /// Returns `Err(LatticeError::InvalidScale)` unless `scale` is finite
    /// and strictly positive.
    pub fn new(scale: f64) -> Result<Self, LatticeError> {
        let scale = check_scale(scale)?;
        let up = Vec2::from_angle_degrees(HALF_ANGLE_DEGREES) * scale;
        Ok(Self {
            up,
            down: up.mirror_x(),
            scale,
        })
    }

    /// The upward move.
    pub fn up(&self) -> Vec2 {
        self.up
    }

    /// The downward move.
    pub fn down(&self) -> Vec2 {
        self.down
    }

    /// Lateral extent of one move, `sin 30° * scale`.
    pub fn lateral_step(&self) -> f64 {
        self.up.y
    }
}

impl Default for Triangular2D {
    fn default() -> Self {
        let up = Vec2::from_angle_degrees(HALF_ANGLE_DEGREES);
        Self {
            up,
            down: up.mirror_x(),
            scale: 1.0,
        }
    }
}

impl Lattice for Triangular2D {
    type Vector = Vec2;
    type Move = TriMove;

    fn ndim(&self) -> usize {
        2
    }

    fn scale(&self) -> f64 {
        self.scale
    }

    fn moves(&self) -> &'static [TriMove] {
        &TriMove::ALL
    }

    fn vector(&self, mv: TriMove) -> Vec2 {
        match mv {
            TriMove::Up => self.up,
            TriMove::Down => self.down,
        }
    }

    fn step_length(&self, mv: TriMove) -> f64 {
        self.vector(mv).norm()
    }

    fn angle_between(&self, a: TriMove, b: TriMove) -> f64 {
        let (va, vb) = (self.vector(a), self.vector(b));
        let cos = va.dot(vb) / (va.norm() * vb.norm());
        cos.clamp(-1.0, 1.0).acos().to_degrees()
    }

    fn heading(&self, mv: TriMove) -> f64 {
        let v = self.vector(mv);
        (v.x / v.norm()).clamp(-1.0, 1.0).acos().to_degrees()
    }
}
