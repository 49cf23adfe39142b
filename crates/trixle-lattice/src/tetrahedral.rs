//! 3D tetrahedral lattice with four face-normal moves.
//!
//! From the centre of a tetrahedron, the normals to its four faces point
//! at the four neighbouring cells. Any two of them are separated by the
//! tetrahedral angle `arccos(-1/3) ≈ 109.47°`.
//!
//! # Move set
//!
//! | Move   | Unit vector                     |
//! |--------|---------------------------------|
//! | `Up`   | `(0, 0, 1)`                     |
//! | `Leg1` | `(2√2/3, 0, -1/3)`              |
//! | `Leg2` | `(-√2/3, √(2/3), -1/3)`         |
//! | `Leg3` | `(-√2/3, -√(2/3), -1/3)`        |
//!
//! The three legs form a tripod: their xy-projections all have length
//! `2√2/3` and are 120° apart.

use crate::error::{check_scale, LatticeError};
use crate::lattice::Lattice;
use trixle_core::Vec3;

/// The tetrahedral angle, `arccos(-1/3)`, in degrees.
pub const TETRAHEDRAL_ANGLE_DEGREES: f64 = 109.471_220_634_490_7;

/// One of the four moves on a [`Tetrahedral3D`] lattice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TetraMove {
    /// Straight up, `(0, 0, 1)`.
    Up = 0,
    /// Tripod leg in the +x half-plane.
    Leg1 = 1,
    /// Tripod leg rotated +120° from `Leg1`.
    Leg2 = 2,
    /// Tripod leg rotated -120° from `Leg1`.
    Leg3 = 3,
}

impl TetraMove {
    /// All four moves in canonical order.
    pub const ALL: [TetraMove; 4] = [
        TetraMove::Up,
        TetraMove::Leg1,
        TetraMove::Leg2,
        TetraMove::Leg3,
    ];

    /// Position in [`ALL`](Self::ALL).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Short human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            TetraMove::Up => "Up",
            TetraMove::Leg1 => "Leg 1",
            TetraMove::Leg2 => "Leg 2",
            TetraMove::Leg3 => "Leg 3",
        }
    }
}

/// Unit move vectors in canonical order.
fn unit_vectors() -> [Vec3; 4] {
    let sqrt2 = 2f64.sqrt();
    let leg_y = (2.0f64 / 3.0).sqrt();
    let z = -1.0 / 3.0;
    [
        Vec3::Z,
        Vec3::new(2.0 * sqrt2 / 3.0, 0.0, z),
        Vec3::new(-sqrt2 / 3.0, leg_y, z),
        Vec3::new(-sqrt2 / 3.0, -leg_y, z),
    ]
}

/// A tetrahedral lattice: four moves, pairwise ~109.47° apart, one of
/// which points straight up.
///
/// # Examples
///
/// ```
/// use trixle_lattice::{Lattice, Tetrahedral3D, TetraMove};
///
/// let tet = Tetrahedral3D::default();
/// assert_eq!(tet.move_count(), 4);
/// assert!((tet.step_length(TetraMove::Leg2) - 1.0).abs() < 1e-9);
/// let angle = tet.angle_between(TetraMove::Up, TetraMove::Leg1);
/// assert!((angle - 109.47).abs() < 0.01);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Tetrahedral3D {
    vectors: [Vec3; 4],
    scale: f64,
}

impl Tetrahedral3D {
    /// Create the move set with every vector multiplied by `scale`.
    ///
    /// Returns `Err(LatticeError::InvalidScale)` unless `scale` is finite
    /// and strictly positive.
    pub fn new(scale: f64) -> Result<Self, LatticeError> {
        let scale = check_scale(scale)?;
        Ok(Self {
            vectors: unit_vectors().map(|v| v * scale),
            scale,
        })
    }

    /// All four displacements in canonical order.
    pub fn vectors(&self) -> &[Vec3; 4] {
        &self.vectors
    }
}

impl Default for Tetrahedral3D {
    fn default() -> Self {
        Self {
            vectors: unit_vectors(),
            scale: 1.0,
        }
    }
}

impl Lattice for Tetrahedral3D {
    type Vector = Vec3;
    type Move = TetraMove;

    fn ndim(&self) -> usize {
        3
    }

    fn scale(&self) -> f64 {
        self.scale
    }

    fn moves(&self) -> &'static [TetraMove] {
        &TetraMove::ALL
    }

    fn vector(&self, mv: TetraMove) -> Vec3 {
        self.vectors[mv.index()]
    }

    fn step_length(&self, mv: TetraMove) -> f64 {
        self.vector(mv).norm()
    }

    fn angle_between(&self, a: TetraMove, b: TetraMove) -> f64 {
        self.vector(a).angle_degrees(self.vector(b))
    }

    fn heading(&self, mv: TetraMove) -> f64 {
        self.vector(mv).angle_degrees(Vec3::X)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;

    #[test]
    fn unit_norm_within_tolerance() {
        let tet = Tetrahedral3D::default();
        for &mv in tet.moves() {
            let n = tet.step_length(mv);
            assert!((n - 1.0).abs() < 1e-9, "{mv:?} norm {n}");
        }
    }

    #[test]
    fn pairwise_tetrahedral_angle() {
        let tet = Tetrahedral3D::default();
        for (i, &a) in tet.moves().iter().enumerate() {
            for &b in &tet.moves()[i + 1..] {
                let angle = tet.angle_between(a, b);
                assert!(
                    (angle - TETRAHEDRAL_ANGLE_DEGREES).abs() < 0.5,
                    "{a:?}/{b:?}: {angle}"
                );
                assert!((angle - 109.47).abs() < 0.01);
            }
        }
    }

    #[test]
    fn tripod_legs_share_z_and_xy_length() {
        let tet = Tetrahedral3D::default();
        let expected_xy = 2.0 * 2f64.sqrt() / 3.0;
        for mv in [TetraMove::Leg1, TetraMove::Leg2, TetraMove::Leg3] {
            let v = tet.vector(mv);
            assert!((v.z + 1.0 / 3.0).abs() < 1e-15);
            let xy = (v.x * v.x + v.y * v.y).sqrt();
            assert!((xy - expected_xy).abs() < 1e-12, "{mv:?} xy {xy}");
        }
    }

    #[test]
    fn moves_sum_to_zero() {
        let tet = Tetrahedral3D::default();
        let sum = tet.vectors().iter().fold(Vec3::ZERO, |acc, &v| acc + v);
        assert!(sum.norm() < 1e-12, "sum={sum:?}");
    }

    #[test]
    fn leg1_makes_most_progress_along_x() {
        let tet = Tetrahedral3D::default();
        let best = tet
            .moves()
            .iter()
            .copied()
            .max_by(|&a, &b| tet.vector(a).x.total_cmp(&tet.vector(b).x));
        assert_eq!(best, Some(TetraMove::Leg1));
    }

    #[test]
    fn scale_multiplies_lengths() {
        let tet = Tetrahedral3D::new(0.25).unwrap();
        for &mv in tet.moves() {
            assert!((tet.step_length(mv) - 0.25).abs() < 1e-9);
        }
        assert!(Tetrahedral3D::new(-0.25).is_err());
    }

    #[test]
    fn compliance() {
        compliance::run_full_compliance(&Tetrahedral3D::default());
        compliance::run_full_compliance(&Tetrahedral3D::new(2.0).unwrap());
    }
}
