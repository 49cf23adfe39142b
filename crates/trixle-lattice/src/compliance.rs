//! Lattice trait compliance test helpers.
//!
//! These functions verify that a Lattice implementation satisfies the
//! invariants the walk kernels rely on. Reused across both geometry test
//! modules.

use crate::lattice::Lattice;

/// Assert that every move has length `scale()`.
pub fn assert_uniform_step_length<L: Lattice>(lattice: &L) {
    let scale = lattice.scale();
    for &mv in lattice.moves() {
        let len = lattice.step_length(mv);
        assert!(
            (len - scale).abs() < 1e-9 * scale.max(1.0),
            "step_length({mv:?}) = {len}, expected {scale}"
        );
    }
}

/// Assert that no move points along the direction of travel (+x).
pub fn assert_no_move_along_travel<L: Lattice>(lattice: &L) {
    for &mv in lattice.moves() {
        let heading = lattice.heading(mv);
        assert!(
            heading > 1.0,
            "move {mv:?} is aligned with the direction of travel (heading {heading})"
        );
    }
}

/// Assert that `angle(a, b) == angle(b, a)` and `angle(a, a) == 0`.
pub fn assert_angles_symmetric<L: Lattice>(lattice: &L) {
    for &a in lattice.moves() {
        let self_angle = lattice.angle_between(a, a);
        assert!(self_angle.abs() < 1e-5, "angle({a:?}, {a:?}) = {self_angle}");
        for &b in lattice.moves() {
            let ab = lattice.angle_between(a, b);
            let ba = lattice.angle_between(b, a);
            assert!(
                (ab - ba).abs() < 1e-12,
                "angle({a:?}, {b:?}) = {ab} != angle({b:?}, {a:?}) = {ba}"
            );
        }
    }
}

/// Assert that move labels are distinct and `move_count` agrees with them.
pub fn assert_moves_distinct<L: Lattice>(lattice: &L) {
    let moves = lattice.moves();
    assert_eq!(lattice.move_count(), moves.len());
    assert!(moves.len() >= 2, "a lattice needs at least two moves");
    for (i, a) in moves.iter().enumerate() {
        for b in &moves[i + 1..] {
            assert_ne!(a, b, "duplicate move label");
        }
    }
}

/// Assert that two calls to `moves` return the same order.
pub fn assert_move_order_deterministic<L: Lattice>(lattice: &L) {
    assert_eq!(lattice.moves(), lattice.moves());
}

/// Run all compliance checks on a lattice.
pub fn run_full_compliance<L: Lattice>(lattice: &L) {
    assert_uniform_step_length(lattice);
    assert_no_move_along_travel(lattice);
    assert_angles_symmetric(lattice);
    assert_moves_distinct(lattice);
    assert_move_order_deterministic(lattice);
}
