//! Property-based tests using `proptest` for pool invariant validation.
//!
//! 1. **Invariant preservation**: `reserve_a × reserve_b ≈ k` after any
//!    sequence of valid trades.
//! 2. **Positivity**: both reserves stay strictly positive.
//! 3. **Monotonic slippage**: output is strictly increasing and strictly
//!    concave in the input size.
//! 4. **Quote agreement**: `quote` predicts `swap` exactly.
//! 5. **Rejection is side-effect free**: non-positive inputs leave the
//!    pool unchanged.
//! 6. **Round trip**: sending the output straight back restores the
//!    reserves up to rounding.

use proptest::prelude::*;

use crate::domain::{Amount, SwapDirection};
use crate::error::AmmError;
use crate::math::{approx_eq, INVARIANT_TOLERANCE};
use crate::pools::ConstantProductPool;
use crate::traits::SwapPool;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn make_pool(ra: f64, rb: f64) -> ConstantProductPool {
    let Ok(pool) = ConstantProductPool::new(ra, rb) else {
        panic!("valid pool");
    };
    pool
}

fn direction(first: bool) -> SwapDirection {
    if first {
        SwapDirection::FirstForSecond
    } else {
        SwapDirection::SecondForFirst
    }
}

/// Input size for `direction` expressed as a fraction of the input-side
/// reserve, so every trade is large enough to move the curve.
fn sized_input(pool: &ConstantProductPool, direction: SwapDirection, fraction: f64) -> Amount {
    let (reserve_in, _) = pool.reserves().oriented(direction);
    Amount::new(reserve_in.get() * fraction)
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Reserve values in [1, 1e6].
fn reserve_strategy() -> impl Strategy<Value = f64> {
    1.0f64..1e6
}

/// Trade size relative to the input reserve: [0.1%, 1000%].
fn fraction_strategy() -> impl Strategy<Value = f64> {
    1e-3f64..10.0
}

/// A short sequence of `(direction, fraction)` trades.
fn trades_strategy() -> impl Strategy<Value = Vec<(bool, f64)>> {
    prop::collection::vec((any::<bool>(), 1e-3f64..2.0), 1..30)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    // -- 1 & 2. Invariant preservation and positivity ---------------------

    #[test]
    fn invariant_preserved_over_sequences(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        trades in trades_strategy(),
    ) {
        let mut pool = make_pool(ra, rb);
        let k = ra * rb;

        for (first, fraction) in trades {
            let dir = direction(first);
            let amount = sized_input(&pool, dir, fraction);
            let result = pool.swap(dir, amount);
            prop_assert!(result.is_ok(), "swap failed: {:?}", result);

            let reserves = pool.reserves();
            prop_assert!(reserves.first().get() > 0.0);
            prop_assert!(reserves.second().get() > 0.0);
            prop_assert!(approx_eq(reserves.product(), k, INVARIANT_TOLERANCE));
        }
    }

    // -- 3. Monotonic slippage ----------------------------------------------

    #[test]
    fn output_increasing_and_concave(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        fraction in fraction_strategy(),
        first in any::<bool>(),
    ) {
        let pool = make_pool(ra, rb);
        let dir = direction(first);
        let x = sized_input(&pool, dir, fraction);
        let two_x = Amount::new(x.get() * 2.0);

        let Ok(single) = pool.quote(dir, x) else {
            panic!("quote x");
        };
        let Ok(double) = pool.quote(dir, two_x) else {
            panic!("quote 2x");
        };
        let (_, reserve_out) = pool.reserves().oriented(dir);

        prop_assert!(double.amount_out() > single.amount_out());
        prop_assert!(double.amount_out().get() < 2.0 * single.amount_out().get());
        prop_assert!(double.amount_out() < reserve_out);
    }

    #[test]
    fn effective_price_below_spot(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        fraction in fraction_strategy(),
    ) {
        let pool = make_pool(ra, rb);
        let dir = SwapDirection::FirstForSecond;
        let Ok(result) = pool.quote(dir, sized_input(&pool, dir, fraction)) else {
            panic!("quote");
        };
        let Ok(effective) = result.effective_price() else {
            panic!("effective price");
        };
        let (Some(before), Some(after)) = (result.price_before(), result.price_after()) else {
            panic!("prices representable for reserves in range");
        };
        prop_assert!(effective < before);
        prop_assert!(after < effective);
    }

    // -- 4. Quote agreement ---------------------------------------------------

    #[test]
    fn quote_predicts_swap(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        fraction in fraction_strategy(),
        first in any::<bool>(),
    ) {
        let mut pool = make_pool(ra, rb);
        let dir = direction(first);
        let amount = sized_input(&pool, dir, fraction);
        let quoted = pool.quote(dir, amount);
        let executed = pool.swap(dir, amount);
        prop_assert_eq!(quoted, executed);
    }

    // -- 5. Rejection is side-effect free -------------------------------------

    #[test]
    fn non_positive_input_rejected(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        amount in -1e6f64..=0.0,
        first in any::<bool>(),
    ) {
        let mut pool = make_pool(ra, rb);
        let before = pool.clone();
        let result = pool.swap(direction(first), Amount::new(amount));
        prop_assert!(matches!(result, Err(AmmError::InvalidAmount(_))));
        prop_assert_eq!(pool, before);
    }

    #[test]
    fn non_positive_reserve_rejected(
        bad in -1e6f64..=0.0,
        good in reserve_strategy(),
    ) {
        prop_assert!(matches!(
            ConstantProductPool::new(bad, good),
            Err(AmmError::InvalidReserve(_))
        ));
        prop_assert!(matches!(
            ConstantProductPool::new(good, bad),
            Err(AmmError::InvalidReserve(_))
        ));
    }

    // -- 6. Round trip ----------------------------------------------------------

    #[test]
    fn round_trip_restores_reserves_within_tolerance(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        fraction in fraction_strategy(),
    ) {
        let mut pool = make_pool(ra, rb);
        let amount = sized_input(&pool, SwapDirection::FirstForSecond, fraction);

        let Ok(out) = pool.swap(SwapDirection::FirstForSecond, amount) else {
            panic!("forward swap");
        };
        let Ok(back) = pool.swap(SwapDirection::SecondForFirst, out.amount_out()) else {
            panic!("reverse swap");
        };

        prop_assert!(approx_eq(back.amount_out().get(), amount.get(), 1e-6));
        prop_assert!(approx_eq(pool.reserve_a().get(), ra, 1e-6));
        prop_assert!(approx_eq(pool.reserve_b().get(), rb, 1e-6));
    }
}
