//! Unified error types for the pool.
//!
//! All fallible operations across the crate return [`AmmError`] as their
//! error type.  Every variant is produced **before** any state mutation, so
//! a returned error always means the pool is exactly as it was before the
//! call.

/// Errors produced by pool construction, price queries, and trades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AmmError {
    /// A reserve supplied at construction is zero, negative, or not finite.
    #[error("invalid reserve: {0}")]
    InvalidReserve(&'static str),

    /// A trade amount is zero, negative, or not finite.
    #[error("invalid amount: {0}")]
    InvalidAmount(&'static str),

    /// A computation would divide by a zero reserve.
    #[error("division by zero")]
    DivisionByZero,

    /// The trade would drive a reserve to zero or below, or is too small
    /// to move the curve at `f64` resolution.
    #[error("insufficient liquidity")]
    InsufficientLiquidity,

    /// An intermediate value left the finite `f64` range.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// A price value is negative or not finite.
    #[error("invalid price: {0}")]
    InvalidPrice(&'static str),
}

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, AmmError>;
