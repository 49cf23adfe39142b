//! The observer: per-axis snapping of hidden state to the integer lattice.
//!
//! Observation is a pure function of the hidden position at a single step.
//! Nothing is carried between steps, so an observed path can always be
//! recomputed from its hidden path.

use trixle_core::{Point2, Point3, Vec2, Vec3};

/// How a component exactly halfway between two integers is rounded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Rounding {
    /// `0.5 → 1`, `-0.5 → -1`, `2.5 → 3`.
    #[default]
    HalfAwayFromZero,
    /// `0.5 → 0`, `1.5 → 2`, `2.5 → 2` (banker's rounding).
    HalfToEven,
}

impl Rounding {
    /// Round one component to the nearest integer.
    ///
    /// Values outside the `i64` range saturate; NaN maps to 0.
    pub fn round(self, v: f64) -> i64 {
        let r = match self {
            Rounding::HalfAwayFromZero => v.round(),
            Rounding::HalfToEven => v.round_ties_even(),
        };
        r as i64
    }
}

/// A continuous position that the observer can snap to the lattice.
pub trait Quantize: Copy {
    /// The integer lattice point type.
    type Point: Copy + Eq;

    /// Snap each component independently.
    fn quantize(self, rounding: Rounding) -> Self::Point;
}

impl Quantize for Vec2 {
    type Point = Point2;

    fn quantize(self, rounding: Rounding) -> Point2 {
        Point2::new(rounding.round(self.x), rounding.round(self.y))
    }
}

impl Quantize for Vec3 {
    type Point = Point3;

    fn quantize(self, rounding: Rounding) -> Point3 {
        Point3::new(
            rounding.round(self.x),
            rounding.round(self.y),
            rounding.round(self.z),
        )
    }
}

/// Maps hidden positions to observed lattice points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Observer {
    rounding: Rounding,
}

impl Observer {
    /// Create an observer with the given tie rule.
    pub fn new(rounding: Rounding) -> Self {
        Self { rounding }
    }

    /// The tie rule in use.
    pub fn rounding(&self) -> Rounding {
        self.rounding
    }

    /// Observe a hidden position.
    pub fn observe<V: Quantize>(&self, hidden: V) -> V::Point {
        hidden.quantize(self.rounding)
    }
}
