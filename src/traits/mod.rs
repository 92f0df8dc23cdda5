//! Core trait abstractions for pool operations.
//!
//! [`SwapPool`] for quoting and executing trades, and [`FromConfig`] for
//! configuration-driven construction.

mod from_config;
mod swap_pool;

pub use from_config::FromConfig;
pub use swap_pool::SwapPool;
