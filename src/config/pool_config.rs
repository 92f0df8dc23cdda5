//! Construction blueprint for a constant-product pool.

use serde::{Deserialize, Serialize};

use crate::domain::Amount;
use crate::error::AmmError;

/// Configuration for a constant-product pool (`x · y = k`).
///
/// Holds the initial reserves of both assets.  Deserialised configs are
/// not validated until [`validate`](Self::validate) runs, which
/// [`FromConfig`](crate::traits::FromConfig) always does.
///
/// # Derived Values
///
/// - Invariant: `k = reserve_a × reserve_b`
/// - Initial price (second asset per unit of first): `P₀ = reserve_b / reserve_a`
///
/// # Examples
///
/// ```
/// use xyk_pool::config::PoolConfig;
///
/// let cfg = PoolConfig::new(100.0, 100.0);
/// assert!(cfg.is_ok());
/// assert!(PoolConfig::new(0.0, 100.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PoolConfig {
    reserve_a: f64,
    reserve_b: f64,
}

impl PoolConfig {
    /// Creates a validated `PoolConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidReserve`] if either reserve is zero,
    /// negative, or not finite, or if `k` or the price ratio falls outside
    /// the normal `f64` range (see [`PoolConfig::validate`]).
    pub fn new(reserve_a: f64, reserve_b: f64) -> Result<Self, AmmError> {
        let config = Self {
            reserve_a,
            reserve_b,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidReserve`] if either reserve is zero,
    /// negative, or not finite; if their product overflows or underflows
    /// below the normal `f64` range; or if either price ratio overflows.
    pub fn validate(&self) -> Result<(), AmmError> {
        if !self.reserve_a().is_positive() {
            return Err(AmmError::InvalidReserve("reserve_a must be positive"));
        }
        if !self.reserve_b().is_positive() {
            return Err(AmmError::InvalidReserve("reserve_b must be positive"));
        }
        let k = self.reserve_a * self.reserve_b;
        if !k.is_finite() {
            return Err(AmmError::InvalidReserve("reserve product is not finite"));
        }
        if !k.is_normal() {
            return Err(AmmError::InvalidReserve("reserve product underflows"));
        }
        if !(self.reserve_b / self.reserve_a).is_finite()
            || !(self.reserve_a / self.reserve_b).is_finite()
        {
            return Err(AmmError::InvalidReserve("reserve ratio out of range"));
        }
        Ok(())
    }

    /// Initial reserve of the first asset.
    pub const fn reserve_a(&self) -> Amount {
        Amount::new(self.reserve_a)
    }

    /// Initial reserve of the second asset.
    pub const fn reserve_b(&self) -> Amount {
        Amount::new(self.reserve_b)
    }
}
