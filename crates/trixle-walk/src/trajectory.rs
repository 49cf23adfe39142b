//! Recorded walks: hidden path, observed path, and per-step decisions.
//!
//! Both paths hold one entry per step plus the initial origin, so
//! `hidden[i]` and `observed[i]` describe the same instant and
//! `decisions[i - 1]` is the move that led there.

use trixle_core::{Point2, Point3, Vec2, Vec3};

use crate::decision::{Decision2D, Decision3D};
use crate::fingerprint;
use crate::metrics::WalkMetrics;

/// A completed planar walk.
#[derive(Clone, Debug, PartialEq)]
pub struct Trajectory2D {
    /// True continuous positions.
    pub hidden: Vec<Vec2>,
    /// Observer output for each hidden position.
    pub observed: Vec<Point2>,
    /// The decision taken at each step.
    pub decisions: Vec<Decision2D>,
}

impl Trajectory2D {
    pub(crate) fn with_capacity(steps: usize) -> Self {
        let mut hidden = Vec::with_capacity(steps + 1);
        let mut observed = Vec::with_capacity(steps + 1);
        hidden.push(Vec2::ZERO);
        observed.push(Point2::ORIGIN);
        Self {
            hidden,
            observed,
            decisions: Vec::with_capacity(steps),
        }
    }

    pub(crate) fn push(&mut self, decision: Decision2D, hidden: Vec2, observed: Point2) {
        self.decisions.push(decision);
        self.hidden.push(hidden);
        self.observed.push(observed);
    }

    /// Number of steps taken.
    pub fn steps(&self) -> usize {
        self.decisions.len()
    }

    /// Final hidden position.
    pub fn final_hidden(&self) -> Vec2 {
        self.hidden.last().copied().unwrap_or(Vec2::ZERO)
    }

    /// Final observed point.
    pub fn final_observed(&self) -> Point2 {
        self.observed.last().copied().unwrap_or(Point2::ORIGIN)
    }

    /// Branch and jump statistics for this walk.
    pub fn metrics(&self) -> WalkMetrics {
        WalkMetrics::from_2d(self)
    }

    /// Bit-exact hash of both paths.
    pub fn fingerprint(&self) -> u64 {
        fingerprint::fingerprint_2d(&self.hidden, &self.observed)
    }

    /// Split into the bare `(hidden, observed)` path pair.
    pub fn into_paths(self) -> (Vec<Vec2>, Vec<Point2>) {
        (self.hidden, self.observed)
    }
}

/// A completed spatial walk.
#[derive(Clone, Debug, PartialEq)]
pub struct Trajectory3D {
    /// True continuous positions.
    pub hidden: Vec<Vec3>,
    /// Observer output for each hidden position.
    pub observed: Vec<Point3>,
    /// The decision taken at each step.
    pub decisions: Vec<Decision3D>,
    /// Unit direction the walk was scoring against.
    pub target: Vec3,
}

impl Trajectory3D {
    pub(crate) fn with_capacity(steps: usize, target: Vec3) -> Self {
        let mut hidden = Vec::with_capacity(steps + 1);
        let mut observed = Vec::with_capacity(steps + 1);
        hidden.push(Vec3::ZERO);
        observed.push(Point3::ORIGIN);
        Self {
            hidden,
            observed,
            decisions: Vec::with_capacity(steps),
            target,
        }
    }

    pub(crate) fn push(&mut self, decision: Decision3D, hidden: Vec3, observed: Point3) {
        self.decisions.push(decision);
        self.hidden.push(hidden);
        self.observed.push(observed);
    }

    /// Number of steps taken.
    pub fn steps(&self) -> usize {
        self.decisions.len()
    }

    /// Final hidden position.
    pub fn final_hidden(&self) -> Vec3 {
        self.hidden.last().copied().unwrap_or(Vec3::ZERO)
    }

    /// Final observed point.
    pub fn final_observed(&self) -> Point3 {
        self.observed.last().copied().unwrap_or(Point3::ORIGIN)
    }

    /// Move and jump statistics for this walk.
    pub fn metrics(&self) -> WalkMetrics {
        WalkMetrics::from_3d(self)
    }

    /// Bit-exact hash of both paths.
    pub fn fingerprint(&self) -> u64 {
        fingerprint::fingerprint_3d(&self.hidden, &self.observed)
    }

    /// Split into the bare `(hidden, observed)` path pair.
    pub fn into_paths(self) -> (Vec<Vec3>, Vec<Point3>) {
        (self.hidden, self.observed)
    }
}
