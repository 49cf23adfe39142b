//! Per-step decision rules.
//!
//! A decision rule looks at the particle's hidden state and picks exactly
//! one move from its lattice. The rules here never move the particle
//! themselves; the walk kernels apply the chosen move.
//!
//! - [`MedianVoter`] (2D): steer back toward the centerline, flip a coin
//!   when exactly on it.
//! - [`GreedyProgress`] (3D): take the move that makes the most progress
//!   along a target direction, scored under per-step frustration noise.

use std::fmt;

use trixle_core::{RandomSource, Vec3};
use trixle_lattice::{Lattice, Tetrahedral3D, TetraMove, TriMove};

use crate::config::{check_noise, unit_direction, ConfigError, FrustrationNoise};

// ── 2D ─────────────────────────────────────────────────────────────

/// Which branch of the median-voter rule produced a move.
///
/// Labels are for reporting only and never influence later steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StepLabel {
    /// `y < 0`: forced up.
    Zig,
    /// `y > 0`: forced down.
    Zag,
    /// `y == 0`: coin flip between up and down.
    Jitter,
}

impl StepLabel {
    /// `true` for the deterministic branches.
    pub fn is_correction(self) -> bool {
        !matches!(self, StepLabel::Jitter)
    }
}

impl fmt::Display for StepLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StepLabel::Zig => "Zig (Correction)",
            StepLabel::Zag => "Zag (Correction)",
            StepLabel::Jitter => "Jitter (Gap)",
        };
        f.pad(s)
    }
}

/// One step's choice on the triangular lattice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decision2D {
    /// The move taken.
    pub mv: TriMove,
    /// The branch that chose it.
    pub label: StepLabel,
}

/// The median-voter correction rule.
///
/// Classifies strictly by the sign of the lateral coordinate. The zero
/// test is exact: a `y` of `1e-300` is positive and is corrected
/// deterministically. Only an exact zero (either sign) consumes a coin
/// flip from the random source.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MedianVoter;

impl MedianVoter {
    /// Choose a move given the current lateral coordinate.
    pub fn decide<R: RandomSource + ?Sized>(&self, y: f64, rng: &mut R) -> Decision2D {
        if y > 0.0 {
            Decision2D {
                mv: TriMove::Down,
                label: StepLabel::Zag,
            }
        } else if y < 0.0 {
            Decision2D {
                mv: TriMove::Up,
                label: StepLabel::Zig,
            }
        } else {
            let mv = if rng.coin_flip() {
                TriMove::Up
            } else {
                TriMove::Down
            };
            Decision2D {
                mv,
                label: StepLabel::Jitter,
            }
        }
    }
}

// ── 3D ─────────────────────────────────────────────────────────────

/// One step's choice on the tetrahedral lattice.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Decision3D {
    /// The move taken.
    pub mv: TetraMove,
    /// Score of the winning candidate.
    pub score: f64,
    /// The scaled noise offset that was added to every candidate.
    pub offset: Vec3,
}

/// Greedy progress maximization with frustration noise.
///
/// Each step draws one noise vector, scales it by `noise_scale`, and adds
/// it to every candidate position `position + move`. The candidate whose
/// position projects furthest onto the target wins; ties go to the first
/// move in lattice order. The noise only perturbs scoring. The kernel
/// applies the winning move unperturbed.
#[derive(Clone, Debug, PartialEq)]
pub struct GreedyProgress {
    target: Vec3,
    noise: FrustrationNoise,
    noise_std: f64,
    noise_scale: f64,
}

impl Default for GreedyProgress {
    fn default() -> Self {
        Self {
            target: Vec3::X,
            noise: FrustrationNoise::Gaussian,
            noise_std: 0.1,
            noise_scale: 0.05,
        }
    }
}

impl GreedyProgress {
    /// Create a rule scoring against `target`, normalized to unit length.
    ///
    /// Rejects a zero or non-finite target and negative or non-finite
    /// noise parameters, with the same errors as [`WalkConfig::validate`].
    ///
    /// [`WalkConfig::validate`]: crate::WalkConfig::validate
    pub fn new(
        target: Vec3,
        noise: FrustrationNoise,
        noise_std: f64,
        noise_scale: f64,
    ) -> Result<Self, ConfigError> {
        check_noise(noise_std, noise_scale)?;
        Ok(Self {
            target: unit_direction(target)?,
            noise,
            noise_std,
            noise_scale,
        })
    }

    /// The target direction.
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Draw one unscaled noise vector.
    ///
    /// Consumes two uniform draws per axis for Gaussian noise, one per axis
    /// for uniform noise, and none when noise is off.
    pub fn draw_noise<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Vec3 {
        match self.noise {
            FrustrationNoise::Gaussian => {
                let x = rng.standard_normal();
                let y = rng.standard_normal();
                let z = rng.standard_normal();
                Vec3::new(x, y, z) * self.noise_std
            }
            FrustrationNoise::Uniform => {
                let mut axis = || rng.unit_f64() * 2.0 - 1.0;
                let x = axis();
                let y = axis();
                let z = axis();
                Vec3::new(x, y, z) * self.noise_std
            }
            FrustrationNoise::Off => Vec3::ZERO,
        }
    }

    /// Score and pick the best move from `lattice` at `position`.
    pub fn decide<R: RandomSource + ?Sized>(
        &self,
        lattice: &Tetrahedral3D,
        position: Vec3,
        rng: &mut R,
    ) -> Decision3D {
        let offset = self.draw_noise(rng) * self.noise_scale;
        self.choose(lattice, position, offset)
    }

    /// Pick the best move for an already-drawn scaled noise offset.
    pub fn choose(&self, lattice: &Tetrahedral3D, position: Vec3, offset: Vec3) -> Decision3D {
        let score_of = |mv: TetraMove| (position + lattice.vector(mv) + offset).dot(self.target);

        let moves = lattice.moves();
        let mut best = Decision3D {
            mv: moves[0],
            score: score_of(moves[0]),
            offset,
        };
        for &mv in &moves[1..] {
            let score = score_of(mv);
            if score > best.score {
                best.mv = mv;
                best.score = score;
            }
        }
        best
    }
}
