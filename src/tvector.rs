//! Parameter ("T") vectors: powers of the curve parameter and their
//! derivatives.
//!
//! All four curve families are cubic, so the same four-component vectors are
//! shared across families. None of these functions validate the range of
//! `t`; values outside `[0, 1]` extrapolate the segment polynomial.

use glam::Vec4;

/// `[1, t, t², t³]` — evaluates position.
#[inline]
pub fn position(t: f32) -> Vec4 {
    let tt = t * t;
    Vec4::new(1.0, t, tt, tt * t)
}

/// `[0, 1, 2t, 3t²]` — evaluates velocity (first derivative).
#[inline]
pub fn velocity(t: f32) -> Vec4 {
    Vec4::new(0.0, 1.0, 2.0 * t, 3.0 * t * t)
}

/// `[0, 0, 2, 6t]` — evaluates acceleration (second derivative).
#[inline]
pub fn acceleration(t: f32) -> Vec4 {
    Vec4::new(0.0, 0.0, 2.0, 6.0 * t)
}

/// `[0, 0, 0, 6]` — evaluates jolt (third derivative, constant per segment).
#[inline]
pub fn jolt() -> Vec4 {
    Vec4::new(0.0, 0.0, 0.0, 6.0)
}
