//! Cubic Hermite evaluation.

use glam::{Mat4, Vec3};

/// Packs a Hermite segment into a point matrix: start position, start
/// velocity, end position, end velocity.
#[inline]
pub fn point_matrix(p0: Vec3, v0: Vec3, p1: Vec3, v1: Vec3) -> Mat4 {
    Mat4::from_cols(p0.extend(0.0), v0.extend(0.0), p1.extend(0.0), v1.extend(0.0))
}

/// Position at `t` from the closed-form Hermite blending polynomials.
///
/// `v0`/`v1` are the segment end velocities, not offset control points.
/// Agrees with the matrix path over the same point matrix.
pub fn position_bernstein(p0: Vec3, v0: Vec3, p1: Vec3, v1: Vec3, t: f32) -> Vec3 {
    let tt = t * t;
    let ttt = tt * t;

    p0 * (2.0 * ttt - 3.0 * tt + 1.0)
        + v0 * (ttt - 2.0 * tt + t)
        + p1 * (-2.0 * ttt + 3.0 * tt)
        + v1 * (ttt - tt)
}
