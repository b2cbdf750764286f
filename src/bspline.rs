//! Uniform cubic B-spline evaluation.

use glam::Vec3;

/// Position at `t` from the closed-form uniform B-spline blending
/// polynomials (the `1/6` normalization is folded in).
///
/// Approximating: the curve stays inside the convex hull of the window and
/// generally passes through none of the control points.
pub fn position_bernstein(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32) -> Vec3 {
    let tt = t * t;
    let ttt = tt * t;
    let u = 1.0 - t;

    (p0 * (u * u * u)
        + p1 * (3.0 * ttt - 6.0 * tt + 4.0)
        + p2 * (-3.0 * ttt + 3.0 * tt + 3.0 * t + 1.0)
        + p3 * ttt)
        * (1.0 / 6.0)
}
