//! Relative-tolerance comparisons for `f64` pool quantities.
//!
//! Each trade recomputes one reserve as `k / new_reserve`, so the live
//! product `reserve_a × reserve_b` differs from `k` by a few ULPs.  These
//! helpers express "equal up to rounding" in one place.

/// Maximum relative error accepted between the live reserve product and
/// the invariant `k`.
pub const INVARIANT_TOLERANCE: f64 = 1e-9;

/// Relative error `|actual − expected| / |expected|`.
///
/// Falls back to the absolute error when `expected` is zero.
#[must_use]
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    let diff = (actual - expected).abs();
    if expected == 0.0 {
        diff
    } else {
        diff / expected.abs()
    }
}

/// Returns `true` if `actual` is within `tolerance` relative error of
/// `expected`.
///
/// # Examples
///
/// ```
/// use xyk_pool::math::{approx_eq, INVARIANT_TOLERANCE};
///
/// assert!(approx_eq(10_000.000_000_001, 10_000.0, INVARIANT_TOLERANCE));
/// assert!(!approx_eq(10_001.0, 10_000.0, INVARIANT_TOLERANCE));
/// ```
#[must_use]
pub fn approx_eq(actual: f64, expected: f64, tolerance: f64) -> bool {
    relative_error(actual, expected) <= tolerance
}
