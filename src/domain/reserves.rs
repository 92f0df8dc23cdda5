//! The pool's reserve pair, replaced as a single value on every trade.

use core::fmt;

use super::{Amount, SwapDirection};

/// Current balances of both assets.
///
/// A pool never writes one side without the other: a trade builds a new
/// `Reserves` and assigns it in one step, so readers observe either the
/// pre-trade or the post-trade pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Reserves {
    first: Amount,
    second: Amount,
}

impl Reserves {
    /// Creates a reserve pair.  No validation is performed here.
    pub const fn new(first: Amount, second: Amount) -> Self {
        Self { first, second }
    }

    /// Balance of the first asset.
    pub const fn first(&self) -> Amount {
        self.first
    }

    /// Balance of the second asset.
    pub const fn second(&self) -> Amount {
        self.second
    }

    /// Returns `(input side, output side)` for a trade in `direction`.
    #[must_use]
    pub const fn oriented(&self, direction: SwapDirection) -> (Amount, Amount) {
        direction.orient(self.first, self.second)
    }

    /// Builds a pair from `(input side, output side)` values of a trade in
    /// `direction`.
    pub const fn from_oriented(direction: SwapDirection, input: Amount, output: Amount) -> Self {
        let (first, second) = direction.unorient(input, output);
        Self { first, second }
    }

    /// `first × second` without overflow checking.
    #[must_use]
    pub fn product(&self) -> f64 {
        self.first.get() * self.second.get()
    }

    /// Returns `true` if both sides are finite and strictly positive.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.first.is_positive() && self.second.is_positive()
    }
}

impl fmt::Display for Reserves {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.first, self.second)
    }
}
