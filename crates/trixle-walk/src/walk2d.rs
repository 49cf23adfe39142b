//! Planar walk kernel on the triangular lattice.
//!
//! The particle wants to travel along `y = 0` but may only move at ±30°.
//! Each step the [`MedianVoter`] rule steers it back toward the
//! centerline, and the [`Observer`] snaps the new position to the integer
//! lattice.

use tracing::{debug, trace};
use trixle_core::{RandomSource, Vec2};
use trixle_lattice::{Lattice, Triangular2D};

use crate::config::{ConfigError, WalkConfig, DEFAULT_MAX_STEPS};
use crate::decision::MedianVoter;
use crate::error::WalkError;
use crate::observer::Observer;
use crate::trajectory::Trajectory2D;

/// The planar walk kernel.
///
/// Holds only immutable geometry and rules; every run starts from the
/// origin and draws from the caller's random source.
///
/// # Examples
///
/// ```
/// use trixle_walk::{seeded_rng, Walk2D};
///
/// let walk = Walk2D::default();
/// let mut rng = seeded_rng(42);
/// let t = walk.run(10, &mut rng).unwrap();
/// assert_eq!(t.hidden.len(), 11);
/// assert!(t.hidden.iter().all(|p| p.y.abs() <= 0.5));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Walk2D {
    lattice: Triangular2D,
    rule: MedianVoter,
    observer: Observer,
    max_steps: u32,
}

impl Default for Walk2D {
    fn default() -> Self {
        Self::new(Triangular2D::default())
    }
}

impl Walk2D {
    /// Create a kernel on `lattice` with the default observer and step
    /// limit.
    pub fn new(lattice: Triangular2D) -> Self {
        Self {
            lattice,
            rule: MedianVoter,
            observer: Observer::default(),
            max_steps: DEFAULT_MAX_STEPS,
        }
    }

    /// Build a kernel from a validated configuration.
    pub fn from_config(config: &WalkConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            lattice: Triangular2D::new(config.grid_scale)?,
            rule: MedianVoter,
            observer: Observer::new(config.rounding),
            max_steps: config.max_steps,
        })
    }

    /// Replace the observer.
    pub fn with_observer(mut self, observer: Observer) -> Self {
        self.observer = observer;
        self
    }

    /// Replace the step limit.
    ///
    /// A limit of zero is rejected with [`ConfigError::StepLimitZero`], as
    /// in [`WalkConfig::validate`].
    pub fn with_max_steps(mut self, max_steps: u32) -> Result<Self, ConfigError> {
        if max_steps == 0 {
            return Err(ConfigError::StepLimitZero);
        }
        self.max_steps = max_steps;
        Ok(self)
    }

    /// The lattice the particle moves on.
    pub fn lattice(&self) -> &Triangular2D {
        &self.lattice
    }

    /// The observer applied after every step.
    pub fn observer(&self) -> Observer {
        self.observer
    }

    /// Largest accepted step count.
    pub fn max_steps(&self) -> u32 {
        self.max_steps
    }

    /// Walk `steps` steps from the origin.
    ///
    /// Returns `Err(WalkError::InvalidStepCount)` without touching `rng`
    /// if `steps` exceeds [`max_steps`](Self::max_steps).
    pub fn run<R: RandomSource + ?Sized>(
        &self,
        steps: u32,
        rng: &mut R,
    ) -> Result<Trajectory2D, WalkError> {
        if steps > self.max_steps {
            return Err(WalkError::InvalidStepCount {
                requested: steps,
                max: self.max_steps,
            });
        }
        debug!(
            steps,
            grid_scale = self.lattice.scale(),
            rounding = ?self.observer.rounding(),
            "starting planar walk"
        );

        let mut trajectory = Trajectory2D::with_capacity(steps as usize);
        let mut position = Vec2::ZERO;
        for step in 1..=steps {
            let decision = self.rule.decide(position.y, rng);
            position += self.lattice.vector(decision.mv);
            let observed = self.observer.observe(position);
            trace!(
                step,
                label = %decision.label,
                x = position.x,
                y = position.y,
                ox = observed.x,
                oy = observed.y,
                "planar step"
            );
            trajectory.push(decision, position, observed);
        }

        debug!(
            steps,
            final_x = position.x,
            final_y = position.y,
            "planar walk finished"
        );
        Ok(trajectory)
    }
}
