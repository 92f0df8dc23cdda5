//! Pool configuration.
//!
//! [`PoolConfig`] is the declarative blueprint a pool is built from, either
//! in code or deserialised from JSON.

mod pool_config;

pub use pool_config::PoolConfig;
