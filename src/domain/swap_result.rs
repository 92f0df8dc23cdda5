//! Outcome of a swap or quote.

use core::fmt;

use super::{Amount, Price, SwapDirection};
use crate::error::AmmError;

/// The outcome of a swap: amounts exchanged and the spot price on either
/// side of the trade.
///
/// Prices are expressed as units of the output asset per unit of the input
/// asset, i.e. `reserve_out / reserve_in`.  A price whose ratio falls
/// outside the finite `f64` range is recorded as `None`; it never blocks
/// the trade itself.
///
/// # Invariants
///
/// - `amount_in > 0` and `amount_out > 0`, both finite.
///
/// # Examples
///
/// ```
/// use xyk_pool::domain::{Amount, Price, SwapDirection, SwapResult};
///
/// let result = SwapResult::new(
///     SwapDirection::FirstForSecond,
///     Amount::new(10.0),
///     Amount::new(9.0),
///     Some(Price::ONE),
///     Some(Price::ONE),
/// );
/// assert!(result.is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwapResult {
    direction: SwapDirection,
    amount_in: Amount,
    amount_out: Amount,
    price_before: Option<Price>,
    price_after: Option<Price>,
}

impl SwapResult {
    /// Creates a new `SwapResult` with validated invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidAmount`] if either amount is not a
    /// finite, strictly positive value.
    pub fn new(
        direction: SwapDirection,
        amount_in: Amount,
        amount_out: Amount,
        price_before: Option<Price>,
        price_after: Option<Price>,
    ) -> crate::error::Result<Self> {
        if !amount_in.is_positive() {
            return Err(AmmError::InvalidAmount("amount_in must be positive"));
        }
        if !amount_out.is_positive() {
            return Err(AmmError::InvalidAmount("amount_out must be positive"));
        }
        Ok(Self {
            direction,
            amount_in,
            amount_out,
            price_before,
            price_after,
        })
    }

    /// Returns the trade direction.
    #[must_use]
    pub const fn direction(&self) -> SwapDirection {
        self.direction
    }

    /// Returns the input amount.
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Returns the output amount.
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }

    /// Spot price before the trade, if representable.
    #[must_use]
    pub const fn price_before(&self) -> Option<Price> {
        self.price_before
    }

    /// Spot price after the trade, if representable.
    #[must_use]
    pub const fn price_after(&self) -> Option<Price> {
        self.price_after
    }

    /// Realized price: `amount_out / amount_in`.
    ///
    /// # Errors
    ///
    /// Returns an error if the price computation fails.
    pub fn effective_price(&self) -> crate::error::Result<Price> {
        Price::from_amounts(self.amount_out, self.amount_in)
    }

    /// Slippage relative to the pre-trade spot price, in percent:
    /// `|effective − before| / before × 100`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DivisionByZero`] if the pre-trade price is zero,
    /// or [`AmmError::Overflow`] if it was not representable.
    pub fn slippage_percent(&self) -> crate::error::Result<f64> {
        let reference = self
            .price_before
            .ok_or(AmmError::Overflow("pre-trade price out of range"))?
            .get();
        if reference == 0.0 {
            return Err(AmmError::DivisionByZero);
        }
        let effective = self.effective_price()?;
        let diff = (effective.get() - reference).abs();
        Ok(diff / reference * 100.0)
    }
}

impl fmt::Display for SwapResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SwapResult({}, in={}, out={})",
            self.direction, self.amount_in, self.amount_out
        )
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn price(v: f64) -> Price {
        let Ok(p) = Price::new(v) else {
            panic!("valid price");
        };
        p
    }

    fn make(amount_in: f64, amount_out: f64) -> crate::error::Result<SwapResult> {
        SwapResult::new(
            SwapDirection::FirstForSecond,
            Amount::new(amount_in),
            Amount::new(amount_out),
            Some(Price::ONE),
            Some(price(0.826)),
        )
    }

    // -- Construction -------------------------------------------------------

    #[test]
    fn valid_result() {
        let Ok(r) = make(10.0, 9.0) else {
            panic!("expected Ok");
        };
        assert_eq!(r.amount_in(), Amount::new(10.0));
        assert_eq!(r.amount_out(), Amount::new(9.0));
        assert_eq!(r.direction(), SwapDirection::FirstForSecond);
    }

    #[test]
    fn zero_in_rejected() {
        assert!(matches!(make(0.0, 9.0), Err(AmmError::InvalidAmount(_))));
    }

    #[test]
    fn non_positive_out_rejected() {
        assert!(matches!(make(10.0, 0.0), Err(AmmError::InvalidAmount(_))));
        assert!(matches!(make(10.0, -1.0), Err(AmmError::InvalidAmount(_))));
    }

    // -- Pricing --------------------------------------------------------------

    #[test]
    fn effective_price() {
        let Ok(r) = make(10.0, 5.0) else {
            panic!("expected Ok");
        };
        let Ok(p) = r.effective_price() else {
            panic!("expected Ok");
        };
        assert!((p.get() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn slippage_against_unit_price() {
        let Ok(r) = make(10.0, 9.0) else {
            panic!("expected Ok");
        };
        let Ok(s) = r.slippage_percent() else {
            panic!("expected Ok");
        };
        assert!((s - 10.0).abs() < 1e-9);
    }

    #[test]
    fn slippage_zero_reference() {
        let Ok(r) = SwapResult::new(
            SwapDirection::SecondForFirst,
            Amount::new(1.0),
            Amount::new(1.0),
            Some(Price::ZERO),
            Some(Price::ZERO),
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(r.slippage_percent(), Err(AmmError::DivisionByZero));
    }

    #[test]
    fn unrepresentable_prices_do_not_block_construction() {
        let Ok(r) = SwapResult::new(
            SwapDirection::FirstForSecond,
            Amount::new(1e-200),
            Amount::new(1e-10),
            None,
            None,
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(r.price_before(), None);
        assert!(matches!(r.slippage_percent(), Err(AmmError::Overflow(_))));
    }

    #[test]
    fn display() {
        let Ok(r) = make(10.0, 9.0) else {
            panic!("expected Ok");
        };
        assert_eq!(r.to_string(), "SwapResult(FirstForSecond, in=10, out=9)");
    }
}
