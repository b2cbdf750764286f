//! Per-segment point-matrix cache.
//!
//! For `n` knots every family produces exactly `n` point matrices, one per
//! segment `i ∈ [0, n)`, where segment `i` runs from knot `i` to knot
//! `(i + 1) % n`. All indexing wraps modulo `n` (closed-loop topology), so
//! the last segments span the array boundary.
//!
//! The cache is derived state owned by the caller. It is rebuilt in full —
//! there is no dirty tracking — and must be rebuilt after any knot mutation
//! before the next evaluation; the engine performs no staleness detection.
//! Rebuilding takes `&mut Vec<Mat4>`, so the single-writer discipline is
//! enforced by the borrow checker.
//!
//! Knot-count preconditions ([`Basis::MIN_KNOTS`]) are documented, not
//! enforced: shorter sequences still rebuild without panicking, but the
//! control window folds onto itself and the resulting curve is
//! geometrically meaningless. Use [`SplineType::check_knot_count`] where
//! validation is wanted.
//!
//! [`Basis::MIN_KNOTS`]: crate::Basis::MIN_KNOTS
//! [`SplineType::check_knot_count`]: crate::SplineType::check_knot_count

use glam::{Mat4, Vec3};

use crate::{Knot, SplineType};

#[inline]
fn point_matrix(c0: Vec3, c1: Vec3, c2: Vec3, c3: Vec3) -> Mat4 {
    Mat4::from_cols(c0.extend(0.0), c1.extend(0.0), c2.extend(0.0), c3.extend(0.0))
}

/// Rebuilds the point cache for the given family.
///
/// The buffer is resized to `knots.len()`; previous contents are discarded.
/// The `Linear` family has no point-matrix form and leaves every entry as
/// the zero matrix.
pub fn rebuild(cache: &mut Vec<Mat4>, knots: &[Knot], ty: SplineType) {
    match ty {
        SplineType::Linear => {
            cache.clear();
            cache.resize(knots.len(), Mat4::ZERO);
        }
        SplineType::Bezier => rebuild_bezier(cache, knots),
        SplineType::Hermite => rebuild_hermite(cache, knots),
        SplineType::CatmullRom => rebuild_catmull_rom(cache, knots),
        SplineType::BSpline => rebuild_bspline(cache, knots),
    }
}

/// Rebuilds Bézier point matrices.
///
/// Columns per segment: start position, start position plus the rotated
/// outgoing handle, end position plus the rotated incoming handle, end
/// position.
pub fn rebuild_bezier(cache: &mut Vec<Mat4>, knots: &[Knot]) {
    let count = knots.len();
    cache.clear();
    cache.reserve(count);

    for i in 0..count {
        let k0 = &knots[i];
        let k1 = &knots[(i + 1) % count];

        let p0 = k0.position;
        let p3 = k1.position;

        cache.push(point_matrix(
            p0,
            p0 + k0.world_tangent_out(),
            p3 + k1.world_tangent_in(),
            p3,
        ));
    }
}

/// Rebuilds Hermite point matrices using the tangent-handle convention.
///
/// Columns per segment: start position, rotated outgoing handle of the
/// start knot scaled by 3, end position, rotated outgoing handle of the
/// *end* knot scaled by 3. Both ends use the outgoing handle so that
/// consecutive segments share their boundary velocity.
///
/// See [`rebuild_hermite_from_velocity`] for the alternative scalar-speed
/// convention; the two are not generally equivalent.
pub fn rebuild_hermite(cache: &mut Vec<Mat4>, knots: &[Knot]) {
    let count = knots.len();
    cache.clear();
    cache.reserve(count);

    for i in 0..count {
        let k0 = &knots[i];
        let k1 = &knots[(i + 1) % count];

        cache.push(point_matrix(
            k0.position,
            k0.world_tangent_out() * 3.0,
            k1.position,
            k1.world_tangent_out() * 3.0,
        ));
    }
}

/// Rebuilds Hermite point matrices using the scalar-velocity convention.
///
/// The end velocities are the knots' rotated forward axis (`+Z`) scaled by
/// their [`velocity`](Knot::velocity) field, for storage layers that carry
/// a speed instead of a tangent handle. Not equivalent to
/// [`rebuild_hermite`] unless `tangent_out * 3 == forward * velocity` at
/// every knot.
pub fn rebuild_hermite_from_velocity(cache: &mut Vec<Mat4>, knots: &[Knot]) {
    let count = knots.len();
    cache.clear();
    cache.reserve(count);

    for i in 0..count {
        let k0 = &knots[i];
        let k1 = &knots[(i + 1) % count];

        cache.push(point_matrix(
            k0.position,
            k0.rotation * Vec3::Z * k0.velocity,
            k1.position,
            k1.rotation * Vec3::Z * k1.velocity,
        ));
    }
}

/// Rebuilds Catmull-Rom point matrices.
///
/// Column `j` of segment `i` is `knots[(i + j) % n].position` — a sliding
/// four-knot window of raw positions, no tangent computation.
pub fn rebuild_catmull_rom(cache: &mut Vec<Mat4>, knots: &[Knot]) {
    let count = knots.len();
    cache.clear();
    cache.reserve(count);

    for i in 0..count {
        cache.push(point_matrix(
            knots[i].position,
            knots[(i + 1) % count].position,
            knots[(i + 2) % count].position,
            knots[(i + 3) % count].position,
        ));
    }
}

/// Rebuilds B-spline point matrices.
///
/// Identical window rule to [`rebuild_catmull_rom`]; the approximating
/// shape comes entirely from the B-spline characteristic matrix and its
/// `1/6` normalization.
pub fn rebuild_bspline(cache: &mut Vec<Mat4>, knots: &[Knot]) {
    rebuild_catmull_rom(cache, knots);
}
