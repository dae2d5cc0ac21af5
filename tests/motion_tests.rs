//! Motion primitive tests.
//!
//! Tests for:
//! - ease-in-out curve shape and monotonicity
//! - Tween endpoint exactness and zero-duration behavior
//! - JumpTween parabolic profile
//! - JointAngles field-wise interpolation

use glam::Vec3;

use marionette::motion::{JumpTween, Tween, ease_in_out_quad};
use marionette::motion::tween::Interpolatable;
use marionette::rig::{JointAngles, JointKey};

const EPSILON: f32 = 1e-5;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

// ============================================================================
// Easing
// ============================================================================

#[test]
fn ease_midpoint_is_half() {
    // ease(0.5) == 0.5 exactly, so a tween's time midpoint is the value
    // midpoint of its endpoints.
    assert!(approx(ease_in_out_quad(0.5), 0.5));
}

#[test]
fn ease_quarter_points() {
    // 2p² below the midpoint
    assert!(approx(ease_in_out_quad(0.25), 0.125));
    // 1 − (−2p + 2)²/2 above it
    assert!(approx(ease_in_out_quad(0.75), 0.875));
}

#[test]
fn ease_progress_is_monotonic() {
    let mut last = -1.0;
    for i in 0..=1000 {
        let e = ease_in_out_quad(i as f32 / 1000.0);
        assert!(e >= last, "ease must be non-decreasing, broke at i={i}");
        last = e;
    }
}

// ============================================================================
// Tween<f32>
// ============================================================================

#[test]
fn tween_reaches_target_exactly() {
    let mut tween = Tween::new(0.0_f32, 10.0, 1.0);
    let mut val = 0.0;
    for _ in 0..7 {
        val = tween.advance(0.15);
    }
    assert!(tween.is_finished());
    // Endpoint property: the final sample is the target bit-for-bit, not an
    // eased value that drifted close to it.
    assert_eq!(val, 10.0);
}

#[test]
fn tween_midpoint_is_eased() {
    let mut tween = Tween::new(0.0_f32, 10.0, 1.0);
    let val = tween.advance(0.25);
    // eased(0.25) = 0.125
    assert!(approx(val, 1.25), "got {val}");
}

#[test]
fn tween_zero_duration_completes_immediately() {
    let mut tween = Tween::new(3.0_f32, 7.0, 0.0);
    assert!(tween.is_finished(), "zero duration must not divide by zero");
    assert_eq!(tween.advance(0.0), 7.0);
}

#[test]
fn tween_negative_duration_completes_immediately() {
    let tween = Tween::new(3.0_f32, 7.0, -5.0);
    assert!(tween.is_finished());
    assert_eq!(tween.sample(), 7.0);
}

#[test]
fn tween_progress_is_monotonic_across_resumptions() {
    let mut tween = Tween::new(0.0_f32, 1.0, 1.0);
    let mut last = 0.0;
    for _ in 0..20 {
        tween.advance(0.07);
        let p = tween.progress();
        assert!(p >= last, "progress must never run backwards");
        last = p;
    }
    assert!(approx(last, 1.0));
}

#[test]
fn tween_overshoot_clamps() {
    let mut tween = Tween::new(0.0_f32, 10.0, 0.5);
    let val = tween.advance(100.0);
    assert_eq!(val, 10.0);
    assert!(approx(tween.progress(), 1.0));
}

// ============================================================================
// Tween<Vec3> / Tween<JointAngles>
// ============================================================================

#[test]
fn tween_vec3_blends_componentwise() {
    let mut tween = Tween::new(Vec3::ZERO, Vec3::new(2.0, 4.0, 8.0), 1.0);
    let val = tween.advance(0.5);
    assert!(approx(val.x, 1.0));
    assert!(approx(val.y, 2.0));
    assert!(approx(val.z, 4.0));
}

#[test]
fn joint_angles_interpolate_each_field_independently() {
    let a = JointAngles::ZERO;
    let b = JointAngles::ZERO
        .with(JointKey::Torso, 40.0)
        .with(JointKey::LeftElbow, -100.0);

    let mid = JointAngles::interpolate_linear(&a, &b, 0.5);
    assert!(approx(mid.torso, 20.0));
    assert!(approx(mid.left_elbow, -50.0));
    assert!(approx(mid.right_knee, 0.0));
}

// ============================================================================
// JumpTween
// ============================================================================

#[test]
fn jump_peak_at_mid_duration() {
    let mut jump = JumpTween::new(Vec3::ZERO, 1.5, 0.8);
    let val = jump.advance(0.4);
    // y = 4 · 1.5 · 0.5 · 0.5 = 1.5
    assert!(approx(val.y, 1.5), "peak should equal the jump height, got {}", val.y);
}

#[test]
fn jump_returns_to_starting_height() {
    let start = Vec3::new(2.0, 0.5, -1.0);
    let mut jump = JumpTween::new(start, 1.0, 0.8);
    let mut val = start;
    for _ in 0..8 {
        val = jump.advance(0.1);
    }
    assert!(jump.is_finished());
    assert_eq!(val, start, "in-place jump must land exactly where it started");
}

#[test]
fn jump_with_horizontal_target_translates_while_arcing() {
    let start = Vec3::ZERO;
    let target = Vec3::new(1.0, 0.0, -1.0);
    let mut jump = JumpTween::new(start, 2.0, 1.0).with_horizontal_target(target);

    let mid = jump.advance(0.5);
    assert!(approx(mid.y, 2.0), "peak at mid-duration");
    assert!(approx(mid.x, 0.5), "x translates independently of the arc");

    let end = jump.advance(0.5);
    assert_eq!(end, Vec3::new(1.0, 0.0, -1.0));
}

#[test]
fn jump_quarter_point_height() {
    let mut jump = JumpTween::new(Vec3::ZERO, 1.0, 1.0);
    let val = jump.advance(0.25);
    // y = 4 · 1 · 0.25 · 0.75 = 0.75
    assert!(approx(val.y, 0.75), "got {}", val.y);
}
