//! Spatial walk kernel on the tetrahedral lattice.

use tracing::{debug, trace};
use trixle_core::{RandomSource, Vec3};
use trixle_lattice::{Lattice, Tetrahedral3D};

use crate::config::{ConfigError, WalkConfig, DEFAULT_MAX_STEPS};
use crate::decision::GreedyProgress;
use crate::error::WalkError;
use crate::observer::Observer;
use crate::trajectory::Trajectory3D;

/// The spatial walk kernel.
///
/// Each step draws one frustration-noise vector from the caller's random
/// source, lets [`GreedyProgress`] pick a tetrahedral move, applies that
/// move unperturbed, and observes the result.
#[derive(Clone, Debug, PartialEq)]
pub struct Walk3D {
    lattice: Tetrahedral3D,
    rule: GreedyProgress,
    observer: Observer,
    max_steps: u32,
}

impl Default for Walk3D {
    fn default() -> Self {
        Self::new(Tetrahedral3D::default(), GreedyProgress::default())
    }
}

impl Walk3D {
    /// Create a kernel from a lattice and a scoring rule.
    pub fn new(lattice: Tetrahedral3D, rule: GreedyProgress) -> Self {
        Self {
            lattice,
            rule,
            observer: Observer::default(),
            max_steps: DEFAULT_MAX_STEPS,
        }
    }

    /// Build a kernel from a validated configuration.
    pub fn from_config(config: &WalkConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let rule = GreedyProgress::new(
            config.target,
            config.noise,
            config.noise_std,
            config.noise_scale,
        )?;
        Ok(Self {
            lattice: Tetrahedral3D::new(config.grid_scale)?,
            rule,
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
    pub fn lattice(&self) -> &Tetrahedral3D {
        &self.lattice
    }

    /// The scoring rule.
    pub fn rule(&self) -> &GreedyProgress {
        &self.rule
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
    ) -> Result<Trajectory3D, WalkError> {
        if steps > self.max_steps {
            return Err(WalkError::InvalidStepCount {
                requested: steps,
                max: self.max_steps,
            });
        }
        debug!(
            steps,
            grid_scale = self.lattice.scale(),
            target = ?self.rule.target(),
            "starting spatial walk"
        );

        let mut trajectory = Trajectory3D::with_capacity(steps as usize, self.rule.target());
        let mut position = Vec3::ZERO;
        for step in 1..=steps {
            let decision = self.rule.decide(&self.lattice, position, rng);
            position += self.lattice.vector(decision.mv);
            let observed = self.observer.observe(position);
            trace!(
                step,
                mv = decision.mv.name(),
                score = decision.score,
                x = position.x,
                y = position.y,
                z = position.z,
                ox = observed.x,
                oy = observed.y,
                oz = observed.z,
                "spatial step"
            );
            trajectory.push(decision, position, observed);
        }

        debug!(
            steps,
            final_x = position.x,
            final_y = position.y,
            final_z = position.z,
            "spatial walk finished"
        );
        Ok(trajectory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FrustrationNoise;
    use crate::seeded_rng;
    use proptest::prelude::*;
    use trixle_core::Point3;
    use trixle_lattice::TetraMove;
    use trixle_test_utils::{AlwaysUp, CountingSource, NoRandomness, ScriptedSource};

    #[test]
    fn zero_steps_yields_origin_only() {
        let t = Walk3D::default().run(0, &mut NoRandomness).unwrap();
        assert_eq!(t.hidden, vec![Vec3::ZERO]);
        assert_eq!(t.observed, vec![Point3::ORIGIN]);
    }

    #[test]
    fn noiseless_walk_always_takes_leg1() {
        let walk = Walk3D::default();
        let t = walk.run(5, &mut AlwaysUp).unwrap();
        assert!(t.decisions.iter().all(|d| d.mv == TetraMove::Leg1));
        let leg = walk.lattice().vector(TetraMove::Leg1);
        let mut expected = Vec3::ZERO;
        for p in &t.hidden[1..] {
            expected += leg;
            assert_eq!(*p, expected);
        }
    }

    #[test]
    fn noise_only_perturbs_scoring() {
        let walk = Walk3D::default();
        let mut src = ScriptedSource::new().with_normals([3.0, -3.0, 3.0, 1.0, 1.0, 1.0]);
        let t = walk.run(2, &mut src).unwrap();
        let leg = walk.lattice().vector(TetraMove::Leg1);
        assert_eq!(t.hidden[1], leg);
        assert_eq!(t.hidden[2], leg + leg);
        assert!(t.decisions[0].offset.x > 0.0);
        assert!(src.is_exhausted());
    }

    #[test]
    fn gaussian_noise_draws_three_normals_per_step() {
        let mut rng = CountingSource::new(seeded_rng(5));
        Walk3D::default().run(20, &mut rng).unwrap();
        assert_eq!(rng.normals(), 60);
        assert_eq!(rng.coins(), 0);
    }

    #[test]
    fn noise_off_draws_nothing() {
        let config = WalkConfig {
            noise: FrustrationNoise::Off,
            ..WalkConfig::spatial()
        };
        let walk = Walk3D::from_config(&config).unwrap();
        let t = walk.run(10, &mut NoRandomness).unwrap();
        assert_eq!(t.steps(), 10);
    }

    #[test]
    fn observed_descends_in_z() {
        let t = Walk3D::default().run(6, &mut AlwaysUp).unwrap();
        // Leg1 drops z by 1/3 per step: -2 after 6 steps.
        assert_eq!(t.final_observed().z, -2);
        assert_eq!(t.final_observed().y, 0);
        // 6 * 2√2/3 ≈ 5.657
        assert_eq!(t.final_observed().x, 6);
    }

    #[test]
    fn target_changes_heading() {
        let config = WalkConfig {
            target: Vec3::new(0.0, 0.0, 2.0),
            noise: FrustrationNoise::Off,
            ..WalkConfig::spatial()
        };
        let walk = Walk3D::from_config(&config).unwrap();
        assert_eq!(walk.rule().target(), Vec3::Z);
        let t = walk.run(3, &mut NoRandomness).unwrap();
        assert!(t.decisions.iter().all(|d| d.mv == TetraMove::Up));
        assert_eq!(t.final_observed(), Point3::new(0, 0, 3));
    }

    #[test]
    fn rejects_step_count_over_limit() {
        let walk = Walk3D::default().with_max_steps(3).unwrap();
        assert_eq!(
            walk.run(4, &mut NoRandomness),
            Err(WalkError::InvalidStepCount {
                requested: 4,
                max: 3
            })
        );
    }

    #[test]
    fn zero_step_limit_rejected() {
        assert_eq!(
            Walk3D::default().with_max_steps(0),
            Err(ConfigError::StepLimitZero)
        );
    }

    #[test]
    fn degenerate_target_never_reaches_a_kernel() {
        let nan = Vec3::new(f64::NAN, 0.0, 0.0);
        for target in [nan, Vec3::ZERO] {
            let built = GreedyProgress::new(target, FrustrationNoise::Gaussian, 0.1, 0.05)
                .map(|rule| Walk3D::new(Tetrahedral3D::default(), rule));
            assert!(matches!(built, Err(ConfigError::InvalidTarget { .. })));
        }
    }

    #[test]
    fn trajectory_records_rule_target() {
        let config = WalkConfig {
            target: Vec3::new(0.0, 0.0, 5.0),
            ..WalkConfig::spatial()
        };
        let walk = Walk3D::from_config(&config).unwrap();
        let t = walk.run(2, &mut seeded_rng(1)).unwrap();
        assert_eq!(t.target, Vec3::Z);
    }

    proptest! {
        #[test]
        fn unit_steps_and_fresh_observation(seed in any::<u64>(), steps in 0u32..200) {
            let walk = Walk3D::default();
            let t = walk.run(steps, &mut seeded_rng(seed)).unwrap();
            prop_assert_eq!(t.hidden.len(), steps as usize + 1);
            for w in t.hidden.windows(2) {
                prop_assert!(((w[1] - w[0]).norm() - 1.0).abs() < 1e-9);
            }
            for (h, o) in t.hidden.iter().zip(&t.observed) {
                prop_assert_eq!(walk.observer().observe(*h), *o);
            }
        }

        #[test]
        fn chosen_move_maximizes_progress(seed in any::<u64>(), steps in 1u32..100) {
            let walk = Walk3D::default();
            let t = walk.run(steps, &mut seeded_rng(seed)).unwrap();
            for (i, d) in t.decisions.iter().enumerate() {
                let again = walk.rule().choose(walk.lattice(), t.hidden[i], d.offset);
                prop_assert_eq!(again.mv, d.mv);
            }
        }
    }
}
