//! Pool implementations.
//!
//! | Type | Use |
//! |------|-----|
//! | [`ConstantProductPool`] | Single-owner pool; trades take `&mut self` |
//! | [`SharedPool`] | Cloneable handle that serialises trades across threads |

pub mod constant_product;
mod shared;

#[cfg(test)]
#[allow(clippy::panic)]
mod proptest_properties;

pub use constant_product::ConstantProductPool;
pub use shared::SharedPool;
