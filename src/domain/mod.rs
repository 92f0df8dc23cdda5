//! Value types used throughout the pool.
//!
//! Quantities, prices, the reserve pair, trade direction, and swap
//! outcomes.  Types that carry an invariant expose validated constructors.

mod amount;
mod price;
mod reserves;
mod swap_direction;
mod swap_result;

pub use amount::Amount;
pub use price::Price;
pub use reserves::Reserves;
pub use swap_direction::SwapDirection;
pub use swap_result::SwapResult;
