//! Catmull-Rom evaluation.

use glam::Vec3;

/// Position at `t` from the closed-form Catmull-Rom blending polynomials
/// (uniform parameterization, tension 1/2).
///
/// The curve passes through `p1` at `t = 0` and `p2` at `t = 1`; `p0` and
/// `p3` only shape the tangents.
pub fn position_bernstein(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32) -> Vec3 {
    let tt = t * t;
    let ttt = tt * t;

    (p0 * (-ttt + 2.0 * tt - t)
        + p1 * (3.0 * ttt - 5.0 * tt + 2.0)
        + p2 * (-3.0 * ttt + 4.0 * tt + t)
        + p3 * (ttt - tt))
        * 0.5
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn interpolates_inner_points() {
        let p0 = Vec3::new(-1.0, 0.0, 0.0);
        let p1 = Vec3::new(0.0, 0.0, 0.0);
        let p2 = Vec3::new(1.0, 1.0, 0.0);
        let p3 = Vec3::new(2.0, 1.0, 0.0);

        assert_abs_diff_eq!(position_bernstein(p0, p1, p2, p3, 0.0), p1);
        assert_abs_diff_eq!(position_bernstein(p0, p1, p2, p3, 1.0), p2, epsilon = 1e-6);
    }

    #[test]
    fn collinear_points_stay_on_line() {
        let pts: Vec<Vec3> = (0..4).map(|i| Vec3::new(i as f32, 0.0, 0.0)).collect();
        for i in 0..=10 {
            let t = i as f32 / 10.0;
            let p = position_bernstein(pts[0], pts[1], pts[2], pts[3], t);
            assert_abs_diff_eq!(p.y, 0.0, epsilon = 1e-6);
            assert_abs_diff_eq!(p.x, 1.0 + t, epsilon = 1e-5);
        }
    }
}
