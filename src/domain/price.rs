//! Exchange rate between the two pool assets.

use core::fmt;

use super::Amount;
use crate::error::AmmError;

/// Exchange rate as a dimensionless ratio (`amount_out_asset / amount_in_asset`).
///
/// Wraps an `f64` value that must be finite and non-negative.
///
/// # Examples
///
/// ```
/// use xyk_pool::domain::Price;
///
/// let price = Price::new(1.5);
/// assert!(price.is_ok());
/// assert!(Price::new(-1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Price(f64);

impl Price {
    /// Price ratio of 1:1.
    pub const ONE: Self = Self(1.0);

    /// Price ratio of zero.
    pub const ZERO: Self = Self(0.0);

    /// Creates a new `Price` from an `f64` value.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidPrice`] if the value is negative, NaN,
    /// or infinite.
    pub fn new(value: f64) -> crate::error::Result<Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(AmmError::InvalidPrice(
                "price must be finite and non-negative",
            ));
        }
        Ok(Self(value))
    }

    /// Returns the underlying `f64` value.
    #[must_use]
    pub const fn get(&self) -> f64 {
        self.0
    }

    /// Computes a price from two amounts: `numerator / denominator`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DivisionByZero`] if `denominator` is zero.
    /// Returns [`AmmError::Overflow`] if the ratio is not finite, and
    /// [`AmmError::InvalidPrice`] if it is negative.
    pub fn from_amounts(numerator: Amount, denominator: Amount) -> crate::error::Result<Self> {
        if denominator.is_zero() {
            return Err(AmmError::DivisionByZero);
        }
        let ratio = numerator.get() / denominator.get();
        if !ratio.is_finite() {
            return Err(AmmError::Overflow("price ratio overflow"));
        }
        Self::new(ratio)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*}", p, self.0),
            None => write!(f, "{}", self.0),
        }
    }
}
