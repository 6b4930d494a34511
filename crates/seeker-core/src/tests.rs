//! Tests for the vector math library and core vocabulary types.

use crate::components::Guidance;
use crate::math::{Vec2, Vec3, Vec3d};
use crate::types::{EntityId, EntityRef, SimTime};

const EPS: f32 = 1e-6;
const EPS_D: f64 = 1e-12;

// ---- Normalization ----

#[test]
fn test_normalize_zero_is_zero() {
    assert_eq!(Vec2::ZERO.normalized(), Vec2::ZERO);
    assert_eq!(Vec3::ZERO.normalized(), Vec3::ZERO);
    assert_eq!(Vec3d::ZERO.normalized(), Vec3d::ZERO);
}

#[test]
fn test_normalize_unit_length() {
    let v = Vec3::new(3.0, -4.0, 12.0);
    let n = v.normalized();
    assert!((n.sqr_magnitude() - 1.0).abs() < EPS);

    let vd = Vec3d::new(1.0, 2.0, -2.0);
    let nd = vd.normalized();
    assert!((nd.sqr_magnitude() - 1.0).abs() < EPS_D);

    let v2 = Vec2::new(-5.0, 12.0);
    let n2 = v2.normalized();
    assert!((n2.sqr_magnitude() - 1.0).abs() < EPS);
}

#[test]
fn test_normalize_axis_is_exact() {
    // Unit axes normalize to themselves with no rounding at all.
    let x = Vec3::new(1.0, 0.0, 0.0);
    assert_eq!(x.normalized(), x);
}

#[test]
fn test_normalize_zero_iff_zero_magnitude() {
    let v = Vec3::new(0.0, 1e-20, 0.0);
    // Tiny but nonzero squared magnitude still normalizes to unit length —
    // the zero check is exact, not an epsilon test.
    assert!(v.sqr_magnitude() > 0.0);
    assert!(v.normalized() != Vec3::ZERO);
}

// ---- Cross product ----

#[test]
fn test_cross_right_handed() {
    let x = Vec3::new(1.0, 0.0, 0.0);
    let y = Vec3::new(0.0, 1.0, 0.0);
    let z = Vec3::new(0.0, 0.0, 1.0);
    assert_eq!(x.cross(y), z);
    assert_eq!(y.cross(z), x);
    assert_eq!(z.cross(x), y);
}

#[test]
fn test_cross_antisymmetric() {
    let a = Vec3::new(1.5, -2.0, 3.25);
    let b = Vec3::new(-4.0, 0.5, 2.0);
    assert_eq!(a.cross(b), b.cross(a) * -1.0);

    let ad = Vec3d::new(1.5, -2.0, 3.25);
    let bd = Vec3d::new(-4.0, 0.5, 2.0);
    assert_eq!(ad.cross(bd), bd.cross(ad) * -1.0);
}

#[test]
fn test_cross_parallel_is_zero() {
    let a = Vec3::new(2.0, -6.0, 1.0);
    assert_eq!(a.cross(a), Vec3::ZERO);
    assert_eq!(a.cross(a * 3.0), Vec3::ZERO);
    assert_eq!(a.cross(Vec3::ZERO), Vec3::ZERO);

    let ad = Vec3d::new(2.0, -6.0, 1.0);
    assert_eq!(ad.cross(ad), Vec3d::ZERO);
}

// ---- Scalar arithmetic ----

#[test]
fn test_scale_divide_round_trip() {
    let v = Vec3::new(0.25, -8.0, 3.5);
    let s = 7.0;
    let back = (v * s) / s;
    assert!((back - v).sqr_magnitude() < EPS);

    let vd = Vec3d::new(0.25, -8.0, 3.5);
    let backd = (vd * 7.0) / 7.0;
    assert!((backd - vd).sqr_magnitude() < EPS_D);
}

#[test]
fn test_divide_by_zero_saturates() {
    let v = Vec3::new(1.0, 2.0, 3.0);
    assert_eq!(v / 0.0, Vec3::ZERO);
    assert_eq!(Vec2::new(1.0, 2.0) / 0.0, Vec2::ZERO);
    assert_eq!(Vec3d::new(1.0, 2.0, 3.0) / 0.0, Vec3d::ZERO);
}

#[test]
fn test_scalar_multiply_commutes() {
    let v = Vec3::new(1.0, -2.0, 0.5);
    assert_eq!(v * 2.0, 2.0 * v);

    let vd = Vec3d::new(1.0, -2.0, 0.5);
    assert_eq!(vd * 2.0, 2.0 * vd);
}

#[test]
fn test_elementwise_add_sub() {
    let a = Vec3::new(1.0, 2.0, 3.0);
    let b = Vec3::new(-1.0, 0.5, 2.0);
    assert_eq!(a + b, Vec3::new(0.0, 2.5, 5.0));
    assert_eq!(a - b, Vec3::new(2.0, 1.5, 1.0));
    assert_eq!((a + b) - b, a);
}

#[test]
fn test_splat_broadcast() {
    assert_eq!(Vec3::splat(2.5), Vec3::new(2.5, 2.5, 2.5));
    assert_eq!(Vec2::splat(-1.0), Vec2::new(-1.0, -1.0));
    assert_eq!(Vec3d::splat(0.0), Vec3d::ZERO);
}

// ---- Precision conversions ----

#[test]
fn test_widening_conversion() {
    let v = Vec3::new(1.5, -2.5, 0.125);
    let vd = Vec3d::from(v);
    assert_eq!(vd, Vec3d::new(1.5, -2.5, 0.125));

    let v2 = Vec2::new(3.0, 4.0);
    assert_eq!(Vec3::from(v2), Vec3::new(3.0, 4.0, 0.0));
    assert_eq!(Vec3d::from(v2), Vec3d::new(3.0, 4.0, 0.0));
}

#[test]
fn test_narrowing_conversion_is_lossy() {
    let precise = Vec3d::new(1.0 + 1e-12, 2.0, 3.0);
    let narrow = precise.to_vec3();
    // The f64-only detail is gone after narrowing.
    assert_eq!(narrow.x, 1.0f32);
    assert_eq!(Vec3d::from(narrow), Vec3d::new(1.0, 2.0, 3.0));
}

// ---- Handles and time ----

#[test]
fn test_entity_ref_null() {
    assert!(EntityRef::NULL.is_null());
    assert!(!EntityRef::new(EntityId(42)).is_null());
}

#[test]
fn test_sim_time_advance() {
    let mut time = SimTime::default();
    for _ in 0..60 {
        time.advance(1.0 / 60.0);
    }
    assert_eq!(time.tick, 60);
    assert!((time.elapsed_secs - 1.0).abs() < 1e-6);
}

// ---- Serde ----

#[test]
fn test_vectors_serde_round_trip() {
    let v = Vec3::new(1.0, -2.0, 3.5);
    let json = serde_json::to_string(&v).unwrap();
    let back: Vec3 = serde_json::from_str(&json).unwrap();
    assert_eq!(v, back);

    let vd = Vec3d::new(0.1, 0.2, -0.3);
    let json = serde_json::to_string(&vd).unwrap();
    let back: Vec3d = serde_json::from_str(&json).unwrap();
    assert_eq!(vd, back);
}

#[test]
fn test_guidance_serde_round_trip() {
    let guidance = Guidance {
        seeking: true,
        seek_timer: 0.25,
        target: EntityRef::new(EntityId(7)),
        ..Default::default()
    };
    let json = serde_json::to_string(&guidance).unwrap();
    let back: Guidance = serde_json::from_str(&json).unwrap();
    assert_eq!(back.seeking, guidance.seeking);
    assert_eq!(back.seek_timer, guidance.seek_timer);
    assert_eq!(back.target, guidance.target);
}
