//! Core swap pool trait for executing trades and querying pool state.
//!
//! [`SwapPool`] covers the full lifecycle of a trade:
//!
//! 1. **Quote**: [`SwapPool::quote`] previews a trade without mutating state.
//! 2. **Execute**: [`SwapPool::swap`] performs the exchange.
//! 3. **Price**: [`SwapPool::spot_price`] returns the marginal exchange rate.
//! 4. **Inspect**: [`SwapPool::reserves`] returns a consistent reserve pair.
//!
//! # Atomicity
//!
//! `swap` validates and computes everything before writing.  On `Err` the
//! pool is untouched; on `Ok` both reserves have moved together.

use crate::domain::{Amount, Price, Reserves, SwapDirection, SwapResult};
use crate::error::AmmError;

/// Trait for two-asset pools that price trades off their reserves.
///
/// # Errors
///
/// Methods that can fail return [`Result<T, AmmError>`].  Common error
/// variants include:
///
/// - [`AmmError::InvalidAmount`]: the trade size is not a positive finite number
/// - [`AmmError::InsufficientLiquidity`]: the trade would empty a reserve
/// - [`AmmError::DivisionByZero`]: a reserve is zero
/// - [`AmmError::Overflow`]: an intermediate left the finite range
pub trait SwapPool {
    /// Executes a trade, adding `amount_in` of the input asset for
    /// `direction` and paying out the other asset.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAmount`] if `amount_in` is not strictly positive.
    /// - [`AmmError::InsufficientLiquidity`] if the output would be
    ///   non-positive or would leave the output reserve at or below zero.
    /// - [`AmmError::Overflow`] if any intermediate is not finite.
    fn swap(&mut self, direction: SwapDirection, amount_in: Amount) -> Result<SwapResult, AmmError>;

    /// Computes what [`swap`](Self::swap) would return for the same
    /// arguments, without changing the pool.
    ///
    /// # Errors
    ///
    /// Same as [`swap`](Self::swap).
    fn quote(&self, direction: SwapDirection, amount_in: Amount) -> Result<SwapResult, AmmError>;

    /// Returns the marginal price of one unit of the input asset for
    /// `direction`, in units of the output asset (`reserve_out / reserve_in`).
    ///
    /// # Errors
    ///
    /// - [`AmmError::DivisionByZero`] if the input-side reserve is zero.
    fn spot_price(&self, direction: SwapDirection) -> Result<Price, AmmError>;

    /// Returns the current reserve pair.
    #[must_use]
    fn reserves(&self) -> Reserves;
}
