//! Integer lattice points produced by the observer.

use std::fmt;

use crate::vector::{Vec2, Vec3};

/// An observed point on the 2D integer lattice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point2 {
    /// Observed x.
    pub x: i64,
    /// Observed y.
    pub y: i64,
}

impl Point2 {
    /// The lattice origin.
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    /// Construct from components.
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The same point as a continuous vector.
    pub fn as_vec(self) -> Vec2 {
        Vec2::new(self.x as f64, self.y as f64)
    }

    /// Chebyshev distance to another point (largest per-axis jump).
    pub fn chebyshev(self, other: Self) -> u64 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }
}

impl From<Point2> for (i64, i64) {
    fn from(p: Point2) -> Self {
        (p.x, p.y)
    }
}

impl fmt::Display for Point2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// An observed point on the 3D integer lattice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point3 {
    /// Observed x.
    pub x: i64,
    /// Observed y.
    pub y: i64,
    /// Observed z.
    pub z: i64,
}

impl Point3 {
    /// The lattice origin.
    pub const ORIGIN: Self = Self { x: 0, y: 0, z: 0 };

    /// Construct from components.
    pub const fn new(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }

    /// The same point as a continuous vector.
    pub fn as_vec(self) -> Vec3 {
        Vec3::new(self.x as f64, self.y as f64, self.z as f64)
    }

    /// Chebyshev distance to another point (largest per-axis jump).
    pub fn chebyshev(self, other: Self) -> u64 {
        self.x
            .abs_diff(other.x)
            .max(self.y.abs_diff(other.y))
            .max(self.z.abs_diff(other.z))
    }
}

impl From<Point3> for (i64, i64, i64) {
    fn from(p: Point3) -> Self {
        (p.x, p.y, p.z)
    }
}

impl fmt::Display for Point3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
