//! Error types for spline operations.

use thiserror::Error;

/// Errors that can occur during spline operations.
///
/// Geometric degeneracies (duplicate knot positions, zero-length tangents)
/// are *not* errors; they produce degenerate but defined curves. The only
/// checkable condition is the per-family minimum knot count, and even that
/// is an opt-in check — the rebuild and evaluation functions themselves
/// never fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SplineError {
    /// The knot sequence is shorter than the family's control window.
    #[error("{family} spline must have at least {min_knots} knots. Found: {actual}")]
    InsufficientKnots {
        family: &'static str,
        min_knots: usize,
        actual: usize,
    },
}

/// Result type for spline operations.
pub type SplineResult<T> = Result<T, SplineError>;
