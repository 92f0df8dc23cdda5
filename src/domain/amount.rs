//! Real-valued asset quantity with finite-checked arithmetic.

use core::fmt;

/// A quantity of one of the pool's two assets.
///
/// Wraps an `f64`.  Construction is infallible: whether a value is an
/// acceptable reserve or trade size depends on context, so validation
/// lives with the caller (see [`Amount::is_positive`]).
///
/// Arithmetic methods are checked: they return `None` when the result is
/// not finite (or on division by zero) instead of propagating `NaN`/`∞`.
///
/// # Examples
///
/// ```
/// use xyk_pool::domain::Amount;
///
/// let a = Amount::new(100.0);
/// let b = Amount::new(10.0);
/// assert_eq!(a.checked_add(&b), Some(Amount::new(110.0)));
/// assert_eq!(a.checked_div(&Amount::ZERO), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[must_use]
pub struct Amount(f64);

impl Amount {
    /// Zero quantity.
    pub const ZERO: Self = Self(0.0);

    /// Creates a new `Amount` from a raw `f64`.
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Returns the underlying `f64` value.
    #[must_use]
    pub const fn get(&self) -> f64 {
        self.0
    }

    /// Returns `true` if the value is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Returns `true` if the value is finite and strictly greater than zero.
    ///
    /// `NaN`, `±∞`, zero, and negatives are all rejected.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.0.is_finite() && self.0 > 0.0
    }

    /// Checked addition. Returns `None` if the sum is not finite.
    #[must_use]
    pub fn checked_add(&self, other: &Self) -> Option<Self> {
        finite(self.0 + other.0)
    }

    /// Checked subtraction. Returns `None` if the difference is not finite.
    ///
    /// A negative difference is returned as-is; callers decide whether it
    /// is meaningful.
    #[must_use]
    pub fn checked_sub(&self, other: &Self) -> Option<Self> {
        finite(self.0 - other.0)
    }

    /// Checked multiplication. Returns `None` if the product is not finite.
    #[must_use]
    pub fn checked_mul(&self, other: &Self) -> Option<Self> {
        finite(self.0 * other.0)
    }

    /// Checked division. Returns `None` if `divisor` is zero or the
    /// quotient is not finite.
    #[must_use]
    pub fn checked_div(&self, divisor: &Self) -> Option<Self> {
        if divisor.0 == 0.0 {
            return None;
        }
        finite(self.0 / divisor.0)
    }
}

fn finite(value: f64) -> Option<Amount> {
    value.is_finite().then_some(Amount(value))
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*}", p, self.0),
            None => write!(f, "{}", self.0),
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    // -- Predicates ---------------------------------------------------------

    #[test]
    fn positive_values() {
        assert!(Amount::new(1.0).is_positive());
        assert!(Amount::new(f64::MIN_POSITIVE).is_positive());
    }

    #[test]
    fn non_positive_values() {
        assert!(!Amount::ZERO.is_positive());
        assert!(!Amount::new(-5.0).is_positive());
        assert!(!Amount::new(f64::NAN).is_positive());
        assert!(!Amount::new(f64::INFINITY).is_positive());
    }

    #[test]
    fn zero_detection() {
        assert!(Amount::ZERO.is_zero());
        assert!(Amount::default().is_zero());
        assert!(!Amount::new(0.5).is_zero());
    }

    // -- Checked arithmetic -------------------------------------------------

    #[test]
    fn add_and_sub() {
        let a = Amount::new(100.0);
        let b = Amount::new(10.0);
        assert_eq!(a.checked_add(&b), Some(Amount::new(110.0)));
        assert_eq!(b.checked_sub(&a), Some(Amount::new(-90.0)));
    }

    #[test]
    fn add_overflow_is_none() {
        let big = Amount::new(f64::MAX);
        assert_eq!(big.checked_add(&big), None);
    }

    #[test]
    fn mul_overflow_is_none() {
        let big = Amount::new(1e200);
        assert_eq!(big.checked_mul(&big), None);
    }

    #[test]
    fn div_by_zero_is_none() {
        assert_eq!(Amount::new(1.0).checked_div(&Amount::ZERO), None);
    }

    #[test]
    fn div_normal() {
        let Some(q) = Amount::new(10_000.0).checked_div(&Amount::new(110.0)) else {
            panic!("expected Some");
        };
        assert!((q.get() - 90.909_090_909).abs() < 1e-6);
    }

    // -- Display --------------------------------------------------------------

    #[test]
    fn display_respects_precision() {
        assert_eq!(format!("{:.2}", Amount::new(90.909_09)), "90.91");
        assert_eq!(format!("{}", Amount::new(1.5)), "1.5");
    }
}
