//! # xyk-pool
//!
//! A two-asset liquidity pool governed by the constant-product invariant
//! (`x · y = k`) used by automated market makers.
//!
//! The pool holds two real-valued reserves and fixes `k` from them at
//! construction.  A trade adds some amount of one asset, re-derives the
//! other reserve as `k / new_reserve`, and pays out the difference.  Larger
//! trades get a worse per-unit rate (slippage), and no trade can empty a
//! reserve.
//!
//! There are no fees, no liquidity provision, and no persistence: this is
//! a single in-process pricing and trading primitive.
//!
//! # Quick Start
//!
//! ```rust
//! use xyk_pool::pools::ConstantProductPool;
//!
//! // 100 apples, 100 potatoes: k = 10 000, price = 1
//! let mut pool = ConstantProductPool::new(100.0, 100.0).expect("valid reserves");
//! assert_eq!(pool.invariant_k().get(), 10_000.0);
//!
//! // Sell 10 apples for potatoes
//! let potatoes = pool.swap_first_for_second(10.0).expect("swap ok");
//! assert!((potatoes - 9.0909).abs() < 1e-4);
//!
//! // Sell 20 potatoes for apples
//! let apples = pool.swap_second_for_first(20.0).expect("swap ok");
//! assert!((apples - 19.8361).abs() < 1e-4);
//!
//! println!("{}", pool.describe());
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │   Consumer    │  PoolConfig / ConstantProductPool::new
//! └──────┬───────┘
//!        │
//!        ▼
//! ┌──────────────┐
//! │    Pools      │  ConstantProductPool, SharedPool (RwLock handle)
//! └──────┬───────┘
//!        │ SwapPool + FromConfig traits
//!        ▼
//! ┌──────────────┐
//! │   Domain      │  Amount, Price, Reserves, SwapDirection, SwapResult
//! └──────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`Amount`](domain::Amount), [`Price`](domain::Price), [`Reserves`](domain::Reserves), etc. |
//! | [`traits`] | [`SwapPool`](traits::SwapPool) and [`FromConfig`](traits::FromConfig) |
//! | [`config`] | [`PoolConfig`](config::PoolConfig), serde-deserialisable |
//! | [`pools`]  | [`ConstantProductPool`](pools::ConstantProductPool) and [`SharedPool`](pools::SharedPool) |
//! | [`math`]   | Finite-checked arithmetic and the invariant tolerance |
//! | [`error`]  | [`AmmError`](error::AmmError) unified error enum |
//! | [`prelude`] | Convenience re-exports |
//!
//! # Logging
//!
//! Construction and executed swaps are reported through [`tracing`] at
//! `debug` level, quotes at `trace`, and rejected trades at `warn`.  The
//! library never installs a subscriber.

pub mod config;
pub mod domain;
pub mod error;
pub mod math;
pub mod pools;
pub mod prelude;
pub mod traits;
