//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use xyk_pool::prelude::*;
//!
//! let mut pool = ConstantProductPool::new(100.0, 100.0).expect("valid");
//! let result = pool.swap(SwapDirection::FirstForSecond, Amount::new(10.0));
//! assert!(result.is_ok());
//! ```

pub use crate::config::PoolConfig;
pub use crate::domain::{Amount, Price, Reserves, SwapDirection, SwapResult};
pub use crate::error::{AmmError, Result};
pub use crate::math::{CheckedArithmetic, INVARIANT_TOLERANCE};
pub use crate::pools::{ConstantProductPool, SharedPool};
pub use crate::traits::{FromConfig, SwapPool};
