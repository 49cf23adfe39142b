//! Per-walk summary statistics.
//!
//! [`WalkMetrics`] condenses a trajectory into branch counts and
//! observer-jump data for reporting. Computed after the fact from the
//! recorded decisions and paths, so kernels carry no counters.

use trixle_lattice::{TetraMove, TriMove};

use crate::decision::StepLabel;
use crate::trajectory::{Trajectory2D, Trajectory3D};

/// Branch, move, and observation statistics for a single walk.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WalkMetrics {
    /// Number of steps taken.
    pub steps: u64,
    /// 2D steps where `y < 0` forced an upward correction.
    pub zig_steps: u64,
    /// 2D steps where `y > 0` forced a downward correction.
    pub zag_steps: u64,
    /// 2D steps taken on the exact centerline (coin flip).
    pub jitter_steps: u64,
    /// How often each move was chosen, indexed by move order.
    pub move_counts: Vec<u64>,
    /// Steps after which the observed point differs from the previous one.
    pub observed_changes: u64,
    /// Largest per-axis jump of the observed point in a single step.
    pub max_observed_jump: u64,
    /// Largest distance of the hidden position from the travel axis
    /// (`y = 0` in 2D, the line through the origin along the target in 3D).
    pub max_lateral_deviation: f64,
}

impl WalkMetrics {
    /// Summarize a planar walk.
    pub fn from_2d(t: &Trajectory2D) -> Self {
        let mut m = Self {
            steps: t.steps() as u64,
            move_counts: vec![0; TriMove::ALL.len()],
            ..Self::default()
        };
        for d in &t.decisions {
            match d.label {
                StepLabel::Zig => m.zig_steps += 1,
                StepLabel::Zag => m.zag_steps += 1,
                StepLabel::Jitter => m.jitter_steps += 1,
            }
            m.move_counts[d.mv.index()] += 1;
        }
        for pair in t.observed.windows(2) {
            m.record_jump(pair[0].chebyshev(pair[1]));
        }
        m.max_lateral_deviation = t.hidden.iter().map(|p| p.y.abs()).fold(0.0, f64::max);
        m
    }

    /// Summarize a spatial walk.
    pub fn from_3d(t: &Trajectory3D) -> Self {
        let mut m = Self {
            steps: t.steps() as u64,
            move_counts: vec![0; TetraMove::ALL.len()],
            ..Self::default()
        };
        for d in &t.decisions {
            m.move_counts[d.mv.index()] += 1;
        }
        for pair in t.observed.windows(2) {
            m.record_jump(pair[0].chebyshev(pair[1]));
        }
        let axis = t.target;
        m.max_lateral_deviation = t
            .hidden
            .iter()
            .map(|&p| (p - axis * p.dot(axis)).norm())
            .fold(0.0, f64::max);
        m
    }

    fn record_jump(&mut self, jump: u64) {
        if jump > 0 {
            self.observed_changes += 1;
        }
        self.max_observed_jump = self.max_observed_jump.max(jump);
    }

    /// Fraction of 2D steps that were coin flips, or 0 for an empty walk.
    pub fn jitter_ratio(&self) -> f64 {
        if self.steps == 0 {
            0.0
        } else {
            self.jitter_steps as f64 / self.steps as f64
        }
    }
}
