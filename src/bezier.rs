//! Cubic Bézier evaluation.
//!
//! Besides the shared matrix path ([`evaluate`](crate::evaluate)), this
//! module carries direct closed-form polynomials for position, velocity
//! and acceleration, a de Casteljau lerp chain, and dedicated derivative
//! characteristic matrices. The derivative matrices are redundant with
//! evaluating the position basis against a derivative parameter vector —
//! both routes are kept for callers that prefer precomputed bases, and
//! tests assert their numerical equivalence.

use glam::{Mat4, Vec3, Vec4};

/// Characteristic matrix for evaluating velocity against a *position*
/// parameter vector `[1, t, t², t³]`.
///
/// Equivalent to using [`Bezier::MATRIX`](crate::Basis::MATRIX) with
/// [`tvector::velocity`](crate::tvector::velocity).
pub const VELOCITY_MATRIX: Mat4 = Mat4::from_cols(
    Vec4::new(-3.0, 3.0, 0.0, 0.0),
    Vec4::new(6.0, -12.0, 6.0, 0.0),
    Vec4::new(-3.0, 9.0, -9.0, 3.0),
    Vec4::ZERO,
);

/// Characteristic matrix for evaluating acceleration against a *position*
/// parameter vector `[1, t, t², t³]`.
///
/// Equivalent to using [`Bezier::MATRIX`](crate::Basis::MATRIX) with
/// [`tvector::acceleration`](crate::tvector::acceleration).
pub const ACCELERATION_MATRIX: Mat4 = Mat4::from_cols(
    Vec4::new(6.0, -12.0, 6.0, 0.0),
    Vec4::new(-6.0, 18.0, -18.0, 6.0),
    Vec4::ZERO,
    Vec4::ZERO,
);

/// Packs four control points into a point matrix for the matrix path.
#[inline]
pub fn point_matrix(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3) -> Mat4 {
    Mat4::from_cols(p0.extend(0.0), p1.extend(0.0), p2.extend(0.0), p3.extend(0.0))
}

/// Position at `t` via de Casteljau lerp chains.
///
/// Numerically the most stable route; agrees with
/// [`position_bernstein`] to within floating-point tolerance.
pub fn position(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32) -> Vec3 {
    let q1 = p1.lerp(p2, t);

    p0.lerp(p1, t)
        .lerp(q1, t)
        .lerp(q1.lerp(p2.lerp(p3, t), t), t)
}

/// Position at `t` from the expanded Bernstein polynomials.
pub fn position_bernstein(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32) -> Vec3 {
    let tt = t * t;
    let ttt = tt * t;

    p0 * (-ttt + 3.0 * tt - 3.0 * t + 1.0)
        + p1 * (3.0 * ttt - 6.0 * tt + 3.0 * t)
        + p2 * (-3.0 * ttt + 3.0 * tt)
        + p3 * ttt
}

/// Velocity at `t` via lerp chains over the control-point differences.
pub fn velocity(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32) -> Vec3 {
    let v1 = p2 - p1;

    (p1 - p0).lerp(v1, t).lerp(v1.lerp(p3 - p2, t), t) * 3.0
}

/// Velocity at `t` from the differentiated Bernstein polynomials.
pub fn velocity_bernstein(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32) -> Vec3 {
    let tt = t * t;

    p0 * (-3.0 * tt + 6.0 * t - 3.0)
        + p1 * (9.0 * tt - 12.0 * t + 3.0)
        + p2 * (-9.0 * tt + 6.0 * t)
        + p3 * (3.0 * tt)
}

/// Acceleration at `t` from the twice-differentiated Bernstein polynomials.
pub fn acceleration_bernstein(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32) -> Vec3 {
    p0 * (-6.0 * t + 6.0)
        + p1 * (18.0 * t - 12.0)
        + p2 * (-18.0 * t + 6.0)
        + p3 * (6.0 * t)
}
