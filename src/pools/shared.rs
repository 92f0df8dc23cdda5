//! Thread-safe handle around a [`ConstantProductPool`].
//!
//! A trade is read-compute-write; two unsynchronised trades could both
//! price off the same pre-trade reserves.  [`SharedPool`] serialises trades
//! behind the write half of a [`parking_lot::RwLock`] held for the whole
//! call, while price queries share the read half and always see a reserve
//! pair that was published as a unit.

use std::sync::Arc;

use parking_lot::RwLock;

use super::ConstantProductPool;
use crate::config::PoolConfig;
use crate::domain::{Amount, Price, Reserves, SwapDirection, SwapResult};
use crate::error::AmmError;
use crate::traits::{FromConfig, SwapPool};

/// Cloneable, `Send + Sync` handle to one pool.
///
/// Clones share the same underlying pool.
///
/// # Example
///
/// ```rust
/// use std::thread;
/// use xyk_pool::pools::SharedPool;
///
/// let pool = SharedPool::new(100.0, 100.0).expect("valid reserves");
/// let handles: Vec<_> = (0..4)
///     .map(|_| {
///         let pool = pool.clone();
///         thread::spawn(move || pool.swap_first_for_second(1.0))
///     })
///     .collect();
/// for h in handles {
///     assert!(h.join().expect("thread").is_ok());
/// }
/// assert_eq!(pool.reserves().first().get(), 104.0);
/// ```
#[derive(Debug, Clone)]
pub struct SharedPool {
    inner: Arc<RwLock<ConstantProductPool>>,
}

impl SharedPool {
    /// Builds a fresh pool and wraps it.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidReserve`] if either reserve is zero,
    /// negative, or not finite.
    pub fn new(initial_a: f64, initial_b: f64) -> Result<Self, AmmError> {
        ConstantProductPool::new(initial_a, initial_b).map(Self::from)
    }

    /// Executes a trade while holding the write lock.
    ///
    /// # Errors
    ///
    /// See [`SwapPool::swap`].
    pub fn swap(&self, direction: SwapDirection, amount_in: Amount) -> Result<SwapResult, AmmError> {
        self.inner.write().swap(direction, amount_in)
    }

    /// See [`ConstantProductPool::swap_first_for_second`].
    ///
    /// # Errors
    ///
    /// See [`SwapPool::swap`].
    pub fn swap_first_for_second(&self, amount_in: f64) -> Result<f64, AmmError> {
        self.inner.write().swap_first_for_second(amount_in)
    }

    /// See [`ConstantProductPool::swap_second_for_first`].
    ///
    /// # Errors
    ///
    /// See [`SwapPool::swap`].
    pub fn swap_second_for_first(&self, amount_in: f64) -> Result<f64, AmmError> {
        self.inner.write().swap_second_for_first(amount_in)
    }

    /// Previews a trade under the read lock.
    ///
    /// The quote may be stale by the time a subsequent `swap` runs.
    ///
    /// # Errors
    ///
    /// See [`SwapPool::quote`].
    pub fn quote(&self, direction: SwapDirection, amount_in: Amount) -> Result<SwapResult, AmmError> {
        self.inner.read().quote(direction, amount_in)
    }

    /// `reserve_b / reserve_a` from a consistent snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DivisionByZero`] if `reserve_a` is zero.
    pub fn price(&self) -> Result<f64, AmmError> {
        self.inner.read().price()
    }

    /// Marginal price for `direction` from a consistent snapshot.
    ///
    /// # Errors
    ///
    /// See [`SwapPool::spot_price`].
    pub fn spot_price(&self, direction: SwapDirection) -> Result<Price, AmmError> {
        self.inner.read().spot_price(direction)
    }

    /// Current reserve pair.
    #[must_use]
    pub fn reserves(&self) -> Reserves {
        self.inner.read().reserves()
    }

    /// Copy of the pool as of now.
    #[must_use]
    pub fn snapshot(&self) -> ConstantProductPool {
        self.inner.read().clone()
    }

    /// See [`ConstantProductPool::describe`].
    #[must_use]
    pub fn describe(&self) -> String {
        self.inner.read().describe()
    }
}

impl From<ConstantProductPool> for SharedPool {
    fn from(pool: ConstantProductPool) -> Self {
        Self {
            inner: Arc::new(RwLock::new(pool)),
        }
    }
}

impl FromConfig<PoolConfig> for SharedPool {
    fn from_config(config: &PoolConfig) -> Result<Self, AmmError> {
        ConstantProductPool::from_config(config).map(Self::from)
    }
}
