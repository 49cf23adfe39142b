//! End-to-end scenarios through the public entry points.

use trixle_core::{Point3, Vec2};
use trixle_lattice::{Lattice, TetraMove, Triangular2D};
use trixle_test_utils::{AlwaysUp, CountingSource, NoRandomness};
use trixle_walk::{
    seeded_rng, simulate_2d, simulate_2d_with, simulate_3d, simulate_3d_with, ConfigError,
    StepLabel, WalkConfig, WalkError,
};

#[test]
fn four_steps_with_ties_broken_up() {
    let s = Triangular2D::default().lateral_step();
    let c = Triangular2D::default().up().x;
    let t = simulate_2d(4, &mut AlwaysUp).unwrap();

    assert_eq!(
        t.decisions.iter().map(|d| d.label).collect::<Vec<_>>(),
        vec![
            StepLabel::Jitter,
            StepLabel::Zag,
            StepLabel::Jitter,
            StepLabel::Zag
        ]
    );

    let (hidden, observed) = t.into_paths();
    assert_eq!(hidden.len(), 5);
    assert_eq!(observed.len(), 5);
    assert_eq!(hidden[0], Vec2::ZERO);
    for (i, p) in hidden.iter().enumerate() {
        let expected_y = if i % 2 == 1 { s } else { 0.0 };
        assert_eq!(p.y, expected_y, "step {i}");
        assert!((p.x - c * i as f64).abs() < 1e-12, "step {i}");
    }
}

#[test]
fn default_planar_run_matches_script_length() {
    let t = simulate_2d_with(&WalkConfig::planar(), &mut seeded_rng(0)).unwrap();
    assert_eq!(t.steps(), 50);
    let m = t.metrics();
    assert_eq!(m.jitter_steps, 25);
    assert_eq!(m.zig_steps + m.zag_steps, 25);
    assert_eq!(m.move_counts.iter().sum::<u64>(), 50);
}

#[test]
fn planar_observed_y_never_leaves_band() {
    let t = simulate_2d(1_000, &mut seeded_rng(99)).unwrap();
    assert!(t.observed.iter().all(|p| p.y.abs() <= 1));
    assert!(t.metrics().max_lateral_deviation <= 0.5);
}

#[test]
fn default_spatial_run_drifts_along_x_and_down() {
    let t = simulate_3d_with(&WalkConfig::spatial(), &mut seeded_rng(0)).unwrap();
    assert_eq!(t.steps(), 100);
    let m = t.metrics();
    assert_eq!(m.move_counts[TetraMove::Leg1.index()], 100);
    let end = t.final_observed();
    assert_eq!(end.y, 0);
    assert_eq!(end.x, 94); // 100 * 2√2/3 ≈ 94.28
    assert_eq!(end.z, -33); // 100 * -1/3 ≈ -33.33
    assert!(m.max_observed_jump <= 1);
}

#[test]
fn spatial_observed_steps_are_unit_jumps() {
    let t = simulate_3d(250, &mut seeded_rng(4)).unwrap();
    for w in t.observed.windows(2) {
        assert!(w[0].chebyshev(w[1]) <= 1);
    }
    assert_eq!(t.observed[0], Point3::ORIGIN);
}

#[test]
fn step_limit_rejected_before_any_draw() {
    let config = WalkConfig {
        steps: 1_001,
        max_steps: 1_000,
        ..WalkConfig::planar()
    };
    let err = simulate_2d_with(&config, &mut NoRandomness).unwrap_err();
    assert_eq!(
        err,
        WalkError::InvalidStepCount {
            requested: 1_001,
            max: 1_000
        }
    );
    let err = simulate_3d_with(&config, &mut NoRandomness).unwrap_err();
    assert!(matches!(err, WalkError::InvalidStepCount { .. }));
}

#[test]
fn default_limit_rejects_huge_runs() {
    let mut rng = CountingSource::new(seeded_rng(0));
    let err = simulate_2d(u32::MAX, &mut rng).unwrap_err();
    assert!(matches!(err, WalkError::InvalidStepCount { requested, .. } if requested == u32::MAX));
    assert_eq!(rng.coins(), 0);
}

#[test]
fn invalid_config_rejected_before_any_draw() {
    let config = WalkConfig {
        noise_std: f64::INFINITY,
        ..WalkConfig::spatial()
    };
    let err = simulate_3d_with(&config, &mut NoRandomness).unwrap_err();
    assert!(matches!(
        err,
        WalkError::InvalidConfig(ConfigError::InvalidNoiseStd { .. })
    ));
}

#[test]
fn grid_scale_scales_both_kernels() {
    let config = WalkConfig {
        grid_scale: 3.0,
        ..WalkConfig::planar().with_steps(10)
    };
    let t2 = simulate_2d_with(&config, &mut seeded_rng(1)).unwrap();
    for w in t2.hidden.windows(2) {
        let d = w[1] - w[0];
        assert!((d.norm() - 3.0).abs() < 1e-9);
    }
    let t3 = simulate_3d_with(&config, &mut seeded_rng(1)).unwrap();
    let tet = trixle_lattice::Tetrahedral3D::new(3.0).unwrap();
    assert_eq!(t3.hidden[1], tet.vector(TetraMove::Leg1));
}
