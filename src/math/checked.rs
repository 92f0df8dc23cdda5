//! Checked arithmetic trait for domain wrapper types.
//!
//! The [`CheckedArithmetic`] trait provides fallible arithmetic operations
//! that return [`Result<Self, AmmError>`](crate::error::AmmError) instead
//! of silently producing `NaN` or `±∞`.
//!
//! # Examples
//!
//! ```
//! use xyk_pool::domain::Amount;
//! use xyk_pool::math::CheckedArithmetic;
//!
//! let a = Amount::new(100.0);
//! let b = Amount::new(200.0);
//! assert!(a.safe_add(&b).is_ok());
//! assert!(a.safe_div(&Amount::ZERO).is_err());
//! ```

use crate::domain::Amount;
use crate::error::AmmError;

/// Fallible arithmetic for domain wrapper types.
///
/// Every method returns [`Result<Self, AmmError>`] with a specific error
/// variant so callers can distinguish overflow from division by zero.
///
/// # Contract
///
/// - **No panics**: all error conditions produce `Err`.
/// - **No clamping**: a non-finite result is an error, never saturated.
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the result is not finite.
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the result is not finite.
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError>;

    /// Checked multiplication.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the result is not finite.
    fn safe_mul(&self, other: &Self) -> Result<Self, AmmError>;

    /// Checked division.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DivisionByZero`] if `other` is zero, or
    /// [`AmmError::Overflow`] if the quotient is not finite.
    fn safe_div(&self, other: &Self) -> Result<Self, AmmError>;
}

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_add(other)
            .ok_or(AmmError::Overflow("amount addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_sub(other)
            .ok_or(AmmError::Overflow("amount subtraction overflow"))
    }

    #[inline]
    fn safe_mul(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_mul(other)
            .ok_or(AmmError::Overflow("amount multiplication overflow"))
    }

    fn safe_div(&self, other: &Self) -> Result<Self, AmmError> {
        if other.is_zero() {
            return Err(AmmError::DivisionByZero);
        }
        self.checked_div(other)
            .ok_or(AmmError::Overflow("amount division overflow"))
    }
}
