//! Which asset a trade sells into the pool.

use core::fmt;

use super::Amount;

/// Direction of a swap: which asset the caller adds to the pool.
///
/// The pool always pays out the *other* asset.
///
/// # Examples
///
/// ```
/// use xyk_pool::domain::{Amount, SwapDirection};
///
/// let (input, output) = SwapDirection::SecondForFirst.orient(Amount::new(1.0), Amount::new(2.0));
/// assert_eq!(input, Amount::new(2.0));
/// assert_eq!(output, Amount::new(1.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SwapDirection {
    /// The first asset goes in, the second asset comes out.
    FirstForSecond = 0,
    /// The second asset goes in, the first asset comes out.
    SecondForFirst = 1,
}

impl SwapDirection {
    /// Orders a `(first, second)` pair as `(input side, output side)`.
    #[must_use]
    pub const fn orient(self, first: Amount, second: Amount) -> (Amount, Amount) {
        match self {
            Self::FirstForSecond => (first, second),
            Self::SecondForFirst => (second, first),
        }
    }

    /// Inverse of [`orient`](Self::orient): maps `(input side, output side)`
    /// back to `(first, second)`.
    #[must_use]
    pub const fn unorient(self, input: Amount, output: Amount) -> (Amount, Amount) {
        match self {
            Self::FirstForSecond => (input, output),
            Self::SecondForFirst => (output, input),
        }
    }
}

impl fmt::Display for SwapDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FirstForSecond => write!(f, "FirstForSecond"),
            Self::SecondForFirst => write!(f, "SecondForFirst"),
        }
    }
}
