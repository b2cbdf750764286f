//! Evaluation of closed-loop piecewise-cubic splines.
//!
//! A pure math kernel for sampling position and derivatives along closed
//! curves built from an ordered, cyclically indexed sequence of [`Knot`]s.
//! Four cubic families are supported — Bézier, Hermite, Catmull-Rom and
//! uniform B-spline — behind one evaluation scheme:
//!
//! ```text
//! result = point_matrix × characteristic_matrix × tvector × scale
//! ```
//!
//! where the characteristic matrix is a per-family constant ([`Basis`]),
//! the point matrix packs the four control vectors of one segment
//! ([`point_cache`]) and the parameter vector carries the powers of `t`
//! or their derivatives ([`tvector`]). A second, interchangeable strategy
//! evaluates closed-form polynomials directly on four raw control points
//! (the `*_bernstein` functions in the per-family modules) for callers
//! that have no point cache; both strategies agree to floating-point
//! tolerance.
//!
//! All evaluation functions are pure and stateless. The only stateful
//! operation is the point-cache rebuild, which fills a caller-owned
//! buffer; the caller must rebuild after mutating knots — there is no
//! staleness detection.
//!
//! # Example
//!
//! ```
//! use closed_cubic_splines::{point_cache, tvector, Knot, SplineType};
//! use glam::Vec3;
//!
//! let knots = vec![
//!     Knot::new(Vec3::new(0.0, 0.0, 0.0)),
//!     Knot::new(Vec3::new(1.0, 0.0, 0.0)),
//!     Knot::new(Vec3::new(1.0, 1.0, 0.0)),
//!     Knot::new(Vec3::new(0.0, 1.0, 0.0)),
//! ];
//!
//! let mut cache = Vec::new();
//! point_cache::rebuild(&mut cache, &knots, SplineType::CatmullRom);
//!
//! // Halfway along segment 0. A Catmull-Rom segment curves between the
//! // inner knots of its four-knot window (knot 1 to knot 2 here).
//! let p = closed_cubic_splines::evaluate_cached(
//!     SplineType::CatmullRom,
//!     cache[0],
//!     tvector::position(0.5),
//! );
//! assert!((p - Vec3::new(1.125, 0.5, 0.0)).length() < 1e-5);
//! ```

use glam::{Mat4, Vec3, Vec4};

#[macro_use]
mod basis_macros;
pub mod basis;
pub mod bezier;
pub mod bspline;
pub mod catmull_rom;
mod error;
pub mod hermite;
mod knot;
pub mod point_cache;
pub mod tvector;

pub use basis::{Basis, Bezier, Bspline, CatmullRom, Hermite, Linear};
pub use error::{SplineError, SplineResult};
pub use knot::Knot;

/// Curve-family tag for dispatching evaluation and cache rebuilds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SplineType {
    /// Piecewise linear. **Known limitation**: every evaluation path for
    /// this family returns `Vec3::ZERO` instead of interpolating — see
    /// [`Linear`].
    Linear,
    /// Cubic Bézier.
    Bezier,
    /// Cubic Hermite.
    Hermite,
    /// Catmull-Rom.
    CatmullRom,
    /// Uniform cubic B-spline.
    BSpline,
}

impl SplineType {
    /// Human-readable family name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Linear => Linear::NAME,
            Self::Bezier => Bezier::NAME,
            Self::Hermite => Hermite::NAME,
            Self::CatmullRom => CatmullRom::NAME,
            Self::BSpline => Bspline::NAME,
        }
    }

    /// Smallest knot count for which this family's segments are
    /// geometrically meaningful.
    pub fn min_knot_count(self) -> usize {
        match self {
            Self::Linear => Linear::MIN_KNOTS,
            Self::Bezier => Bezier::MIN_KNOTS,
            Self::Hermite => Hermite::MIN_KNOTS,
            Self::CatmullRom => CatmullRom::MIN_KNOTS,
            Self::BSpline => Bspline::MIN_KNOTS,
        }
    }

    /// Opt-in validation of the per-family knot-count precondition.
    ///
    /// The rebuild and evaluation functions never perform this check
    /// themselves: undersized sequences are mechanically safe (all
    /// indexing wraps) but geometrically meaningless.
    pub fn check_knot_count(self, len: usize) -> SplineResult<()> {
        let min_knots = self.min_knot_count();
        if len < min_knots {
            return Err(SplineError::InsufficientKnots {
                family: self.name(),
                min_knots,
                actual: len,
            });
        }
        Ok(())
    }
}

/// Evaluates one segment of a `B`-family curve through the matrix path.
///
/// Computes `point_matrix × B::MATRIX × tvec × B::SCALE` and truncates the
/// homogeneous result. The choice of `tvec` selects the derivative order:
/// [`tvector::position`] yields position, [`tvector::velocity`] velocity,
/// and so on — the same point matrix serves all orders.
#[inline]
pub fn evaluate<B: Basis>(point_matrix: Mat4, tvec: Vec4) -> Vec3 {
    (point_matrix * (B::MATRIX * tvec) * B::SCALE).truncate()
}

/// Matrix-path evaluation dispatched on a family tag.
///
/// `point_matrix` must come from a cache rebuilt for the same family; the
/// families do not share point-matrix layouts. The `Linear` tag always
/// yields `Vec3::ZERO` (documented limitation).
pub fn evaluate_cached(ty: SplineType, point_matrix: Mat4, tvec: Vec4) -> Vec3 {
    match ty {
        SplineType::Linear => evaluate::<Linear>(point_matrix, tvec),
        SplineType::Bezier => evaluate::<Bezier>(point_matrix, tvec),
        SplineType::Hermite => evaluate::<Hermite>(point_matrix, tvec),
        SplineType::CatmullRom => evaluate::<CatmullRom>(point_matrix, tvec),
        SplineType::BSpline => evaluate::<Bspline>(point_matrix, tvec),
    }
}

/// Direct-path position evaluation dispatched on a family tag.
///
/// Operates on four raw control vectors without building a point matrix;
/// intended for one-off samples where maintaining a cache is not worth it.
/// The meaning of the four vectors is family-specific (for Hermite, `p1`
/// and `p3` are end velocities). The `Linear` tag always yields
/// `Vec3::ZERO` (documented limitation).
pub fn evaluate_direct(ty: SplineType, p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32) -> Vec3 {
    match ty {
        SplineType::Linear => Vec3::ZERO,
        SplineType::Bezier => bezier::position_bernstein(p0, p1, p2, p3, t),
        SplineType::Hermite => hermite::position_bernstein(p0, p1, p2, p3, t),
        SplineType::CatmullRom => catmull_rom::position_bernstein(p0, p1, p2, p3, t),
        SplineType::BSpline => bspline::position_bernstein(p0, p1, p2, p3, t),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_knot_count_bounds() {
        assert!(SplineType::Bezier.check_knot_count(2).is_ok());
        assert!(SplineType::CatmullRom.check_knot_count(4).is_ok());

        let err = SplineType::BSpline.check_knot_count(3).unwrap_err();
        assert_eq!(
            err,
            SplineError::InsufficientKnots {
                family: "B-spline",
                min_knots: 4,
                actual: 3,
            }
        );
    }

    #[test]
    fn linear_dispatch_returns_zero() {
        let p = evaluate_cached(
            SplineType::Linear,
            Mat4::from_cols(Vec4::ONE, Vec4::ONE, Vec4::ONE, Vec4::ONE),
            tvector::position(0.5),
        );
        assert_eq!(p, Vec3::ZERO);

        let q = evaluate_direct(SplineType::Linear, Vec3::X, Vec3::Y, Vec3::Z, Vec3::ONE, 0.5);
        assert_eq!(q, Vec3::ZERO);
    }
}
