//! Characteristic (basis) matrices for the supported curve families.
//!
//! Every family here is cubic, so one constant 4×4 matrix per family fully
//! encodes its blending basis. The matrices are pure constants; callers may
//! read them as often as they like or cache `B::MATRIX * tvec` products
//! themselves.

use glam::{Mat4, Vec4};

/// A cubic spline basis over closed-loop knot sequences.
///
/// The matrix entries are given row-major with rows corresponding to
/// ascending powers of `t`; a position evaluated through
/// [`evaluate`](crate::evaluate) is
/// `point_matrix * (MATRIX * [1, t, t², t³]) * SCALE`.
pub trait Basis {
    const NAME: &'static str;
    /// Characteristic matrix of the family.
    const MATRIX: Mat4;
    /// Normalization factor applied after the matrix product.
    const SCALE: f32;
    /// Smallest knot count for which segments are geometrically meaningful.
    ///
    /// Fewer knots still evaluate without panicking (all indexing wraps
    /// modulo the knot count) but the control window folds onto itself.
    const MIN_KNOTS: usize;

    /// Returns `true` if a knot sequence of length `len` satisfies this
    /// family's minimum-count precondition.
    fn is_knot_count_ok(len: usize) -> bool {
        len >= Self::MIN_KNOTS
    }
}

/// A cubic *Bézier* basis.
///
/// Segments span two consecutive knots; the inner control points come from
/// the knots' rotated tangent handles.
pub struct Bezier;

basis_impl!(Bezier, "Bézier", 1.0, 2, [
    [1.0, 0.0, 0.0, 0.0],
    [-3.0, 3.0, 0.0, 0.0],
    [3.0, -6.0, 3.0, 0.0],
    [-1.0, 3.0, -3.0, 1.0],
]);

/// A cubic *Hermite* basis.
///
/// Segments span two consecutive knots with an explicit velocity vector at
/// each end.
pub struct Hermite;

basis_impl!(Hermite, "Hermite", 1.0, 2, [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [-3.0, -2.0, 3.0, -1.0],
    [2.0, 1.0, -2.0, 1.0],
]);

/// A *Catmull-Rom* basis.
///
/// Interpolating; each segment is shaped by a sliding window of four knot
/// positions and normalized by `1/2`.
pub struct CatmullRom;

basis_impl!(CatmullRom, "Catmull-Rom", 0.5, 4, [
    [0.0, 2.0, 0.0, 0.0],
    [-1.0, 0.0, 1.0, 0.0],
    [2.0, -5.0, 4.0, -1.0],
    [-1.0, 3.0, -3.0, 1.0],
]);

/// A uniform cubic *B-spline* basis.
///
/// Same four-knot sliding window as [`CatmullRom`]; the approximating shape
/// comes entirely from the different matrix and the `1/6` normalization.
pub struct Bspline;

basis_impl!(Bspline, "B-spline", 1.0 / 6.0, 4, [
    [1.0, 4.0, 1.0, 0.0],
    [-3.0, 0.0, 3.0, 0.0],
    [3.0, -6.0, 3.0, 0.0],
    [-1.0, 3.0, -3.0, 1.0],
]);

/// A placeholder *Linear* basis.
///
/// Evaluation through any path always yields the zero vector; true piecewise
/// linear interpolation is not implemented. This is a preserved, documented
/// limitation, kept so that dispatching on [`SplineType::Linear`] stays
/// well-defined.
///
/// [`SplineType::Linear`]: crate::SplineType::Linear
pub struct Linear;

basis_impl!(Linear, "Linear", 1.0, 2, [
    [0.0, 0.0, 0.0, 0.0],
    [0.0, 0.0, 0.0, 0.0],
    [0.0, 0.0, 0.0, 0.0],
    [0.0, 0.0, 0.0, 0.0],
]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bezier_matrix_rows_are_ascending_powers() {
        // Column j of `MATRIX * [1, t, t², t³]` must reproduce the Bernstein
        // coefficient of control point j.
        let t = 0.3_f32;
        let coeffs = Bezier::MATRIX * Vec4::new(1.0, t, t * t, t * t * t);
        let u = 1.0 - t;
        assert!((coeffs.x - u * u * u).abs() < 1e-6);
        assert!((coeffs.y - 3.0 * t * u * u).abs() < 1e-6);
        assert!((coeffs.z - 3.0 * t * t * u).abs() < 1e-6);
        assert!((coeffs.w - t * t * t).abs() < 1e-6);
    }

    #[test]
    fn partition_of_unity() {
        // Position blending coefficients of interpolating/approximating
        // families sum to one for any t.
        for t in [0.0_f32, 0.25, 0.5, 0.9, 1.0] {
            let tvec = Vec4::new(1.0, t, t * t, t * t * t);

            let b = Bezier::MATRIX * tvec * Bezier::SCALE;
            assert!((b.x + b.y + b.z + b.w - 1.0).abs() < 1e-6);

            let c = CatmullRom::MATRIX * tvec * CatmullRom::SCALE;
            assert!((c.x + c.y + c.z + c.w - 1.0).abs() < 1e-6);

            let s = Bspline::MATRIX * tvec * Bspline::SCALE;
            assert!((s.x + s.y + s.z + s.w - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn linear_matrix_is_zero() {
        assert_eq!(Linear::MATRIX, Mat4::ZERO);
    }
}
