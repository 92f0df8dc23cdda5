//! Generic construction trait for pool instantiation from configuration.
//!
//! Implementations **must** validate the configuration during
//! construction.  A successfully constructed pool is guaranteed to be in
//! a valid initial state.

use crate::error::AmmError;

/// Builds a pool from a configuration value.
///
/// The configuration is taken by reference because it may be reused
/// (e.g. to build several identical pools).
pub trait FromConfig<C> {
    /// Creates a new pool instance from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidReserve`] (or a more specific variant) if
    /// the configuration is invalid.
    fn from_config(config: &C) -> Result<Self, AmmError>
    where
        Self: Sized;
}
