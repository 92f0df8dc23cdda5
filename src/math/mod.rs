//! Arithmetic utilities for pool calculations.
//!
//! [`CheckedArithmetic`] gives finite-checked operations on
//! [`Amount`](crate::domain::Amount); the tolerance helpers define what
//! "equal up to floating-point rounding" means for the invariant.

mod checked;
mod tolerance;

pub use checked::CheckedArithmetic;
pub use tolerance::{approx_eq, relative_error, INVARIANT_TOLERANCE};
