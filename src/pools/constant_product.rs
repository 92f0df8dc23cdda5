//! Constant Product pool implementation.
//!
//! The swap invariant is `x × y = k` where `x` and `y` are the reserves
//! of the two assets.  `k` is fixed when the pool is built and never
//! recomputed from live reserves; every trade re-derives the output-side
//! reserve from it.
//!
//! # Swap Algorithm (first asset → second asset)
//!
//! 1. `new_a = reserve_a + amount_in`
//! 2. `new_b = k / new_a`
//! 3. `amount_out = reserve_b − new_b`
//! 4. `(reserve_a, reserve_b) = (new_a, new_b)` in a single assignment
//!
//! The reverse direction swaps the roles of the two reserves.
//!
//! # Invariant
//!
//! After every successful swap, `reserve_a × reserve_b == k` up to `f64`
//! rounding (see [`INVARIANT_TOLERANCE`](crate::math::INVARIANT_TOLERANCE)),
//! and both reserves stay strictly positive.  There are no fees, so a
//! trade neither grows nor shrinks `k`.

use core::fmt;

use tracing::{debug, trace, warn};

use crate::config::PoolConfig;
use crate::domain::{Amount, Price, Reserves, SwapDirection, SwapResult};
use crate::error::AmmError;
use crate::math::{relative_error, CheckedArithmetic};
use crate::traits::{FromConfig, SwapPool};

/// A two-asset constant-product pool (`x · y = k`).
///
/// Created with [`ConstantProductPool::new`] or from a [`PoolConfig`] via
/// [`FromConfig`].  Fields are private: the reserve pair only changes
/// through the two trade operations (or [`SwapPool::swap`]).
///
/// # Example
///
/// ```rust
/// use xyk_pool::pools::ConstantProductPool;
///
/// let mut pool = ConstantProductPool::new(100.0, 100.0).expect("valid reserves");
/// assert_eq!(pool.price().expect("price"), 1.0);
///
/// let out = pool.swap_first_for_second(10.0).expect("swap ok");
/// assert!((out - 9.090_909).abs() < 1e-6);
/// assert_eq!(pool.reserve_a().get(), 110.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ConstantProductPool {
    reserves: Reserves,
    k: Amount,
}

impl ConstantProductPool {
    /// Creates a pool holding `initial_a` of the first asset and
    /// `initial_b` of the second, fixing `k = initial_a × initial_b`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidReserve`] if either reserve is zero,
    /// negative, or not finite, or if `k` or the price ratio falls outside
    /// the normal `f64` range (see [`PoolConfig::validate`]).
    pub fn new(initial_a: f64, initial_b: f64) -> Result<Self, AmmError> {
        Self::from_config(&PoolConfig::new(initial_a, initial_b)?)
    }

    /// Returns the current reserve of the first asset.
    pub const fn reserve_a(&self) -> Amount {
        self.reserves.first()
    }

    /// Returns the current reserve of the second asset.
    pub const fn reserve_b(&self) -> Amount {
        self.reserves.second()
    }

    /// Returns the invariant fixed at construction.
    pub const fn invariant_k(&self) -> Amount {
        self.k
    }

    /// Price of one unit of the first asset in units of the second:
    /// `reserve_b / reserve_a`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DivisionByZero`] if `reserve_a` is zero, or
    /// [`AmmError::Overflow`] if trades have pushed the ratio past the
    /// finite `f64` range (construction rejects such reserves up front).
    pub fn price(&self) -> Result<f64, AmmError> {
        self.spot_price(SwapDirection::FirstForSecond)
            .map(|p| p.get())
    }

    /// Adds `amount_in` of the first asset and returns the amount of the
    /// second asset paid out.
    ///
    /// # Errors
    ///
    /// See [`SwapPool::swap`].
    pub fn swap_first_for_second(&mut self, amount_in: f64) -> Result<f64, AmmError> {
        self.swap(SwapDirection::FirstForSecond, Amount::new(amount_in))
            .map(|r| r.amount_out().get())
    }

    /// Adds `amount_in` of the second asset and returns the amount of the
    /// first asset paid out.
    ///
    /// # Errors
    ///
    /// See [`SwapPool::swap`].
    pub fn swap_second_for_first(&mut self, amount_in: f64) -> Result<f64, AmmError> {
        self.swap(SwapDirection::SecondForFirst, Amount::new(amount_in))
            .map(|r| r.amount_out().get())
    }

    /// Human-readable state: `reserve_a: 110.00, reserve_b: 90.91, k: 10000.00`.
    #[must_use]
    pub fn describe(&self) -> String {
        self.to_string()
    }

    /// Relative error between the live product `reserve_a × reserve_b`
    /// and `k`.
    #[must_use]
    pub fn invariant_drift(&self) -> f64 {
        relative_error(self.reserves.product(), self.k.get())
    }

    /// Computes the post-trade reserves and the trade outcome without
    /// touching `self`.
    fn compute_exact_in(
        &self,
        direction: SwapDirection,
        amount_in: Amount,
    ) -> Result<(Reserves, SwapResult), AmmError> {
        if !amount_in.is_positive() {
            return Err(AmmError::InvalidAmount(
                "trade amount must be positive and finite",
            ));
        }

        let (reserve_in, reserve_out) = self.reserves.oriented(direction);
        let new_in = reserve_in.safe_add(&amount_in)?;
        let new_out = self.k.safe_div(&new_in)?;

        // k / new_in can underflow to zero for extreme inputs; the output
        // reserve must stay strictly positive.
        if !new_out.is_positive() {
            warn!(%direction, amount_in = amount_in.get(), "trade would empty output reserve");
            return Err(AmmError::InsufficientLiquidity);
        }

        let amount_out = reserve_out.safe_sub(&new_out)?;
        if !amount_out.is_positive() || amount_out >= reserve_out {
            warn!(
                %direction,
                amount_in = amount_in.get(),
                amount_out = amount_out.get(),
                "trade output outside (0, reserve_out)"
            );
            return Err(AmmError::InsufficientLiquidity);
        }

        // Prices are informational; a ratio outside f64 range must not veto
        // an otherwise valid trade.
        let price_before = Price::from_amounts(reserve_out, reserve_in).ok();
        let price_after = Price::from_amounts(new_out, new_in).ok();
        let result = SwapResult::new(direction, amount_in, amount_out, price_before, price_after)?;

        Ok((Reserves::from_oriented(direction, new_in, new_out), result))
    }
}

impl FromConfig<PoolConfig> for ConstantProductPool {
    /// Creates a new pool from the given configuration.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`PoolConfig::validate`], which rejects
    /// every reserve pair whose invariant or price is not representable.
    fn from_config(config: &PoolConfig) -> Result<Self, AmmError> {
        config.validate()?;

        let ra = config.reserve_a();
        let rb = config.reserve_b();
        let k = ra.safe_mul(&rb)?;

        debug!(reserve_a = ra.get(), reserve_b = rb.get(), k = k.get(), "pool created");

        Ok(Self {
            reserves: Reserves::new(ra, rb),
            k,
        })
    }
}

impl SwapPool for ConstantProductPool {
    /// Executes a trade on the constant product curve.
    ///
    /// All validation runs before the reserve pair is replaced.
    fn swap(&mut self, direction: SwapDirection, amount_in: Amount) -> Result<SwapResult, AmmError> {
        let (next, result) = self.compute_exact_in(direction, amount_in)?;
        self.reserves = next;

        debug!(
            %direction,
            amount_in = result.amount_in().get(),
            amount_out = result.amount_out().get(),
            reserve_a = next.first().get(),
            reserve_b = next.second().get(),
            "swap executed"
        );

        Ok(result)
    }

    fn quote(&self, direction: SwapDirection, amount_in: Amount) -> Result<SwapResult, AmmError> {
        let (_, result) = self.compute_exact_in(direction, amount_in)?;
        trace!(%direction, amount_in = amount_in.get(), amount_out = result.amount_out().get(), "quote");
        Ok(result)
    }

    /// Returns `reserve_out / reserve_in` for `direction`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::DivisionByZero`] if the input-side reserve is zero.
    /// - [`AmmError::Overflow`] if the ratio is not finite.
    fn spot_price(&self, direction: SwapDirection) -> Result<Price, AmmError> {
        let (reserve_in, reserve_out) = self.reserves.oriented(direction);
        Price::from_amounts(reserve_out, reserve_in)
    }

    fn reserves(&self) -> Reserves {
        self.reserves
    }
}

impl fmt::Display for ConstantProductPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "reserve_a: {:.2}, reserve_b: {:.2}, k: {:.2}",
            self.reserve_a(),
            self.reserve_b(),
            self.k
        )
    }
}
