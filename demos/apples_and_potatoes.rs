//! Apples and potatoes: a constant product pool walkthrough.
//!
//! Builds a pool of 100 apples and 100 potatoes (or reads the reserves
//! from a JSON config file), sells 10 apples, then sells 20 potatoes,
//! printing the pool after each step.
//!
//! # Run
//!
//! ```bash
//! cargo run --example apples_and_potatoes
//! cargo run --example apples_and_potatoes -- pool.json
//! ```
//!
//! where `pool.json` looks like `{ "reserve_a": 100.0, "reserve_b": 100.0 }`.

use tracing_subscriber::fmt::Subscriber;
use xyk_pool::config::PoolConfig;
use xyk_pool::pools::ConstantProductPool;
use xyk_pool::traits::FromConfig;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let subscriber = Subscriber::builder()
        .with_max_level(tracing::Level::DEBUG)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // ── 1. Configure the pool ───────────────────────────────────────────
    let config = match std::env::args().nth(1) {
        Some(path) => {
            let raw = std::fs::read_to_string(path)?;
            serde_json::from_str::<PoolConfig>(&raw)?
        }
        None => PoolConfig::new(100.0, 100.0)?,
    };
    let mut pool = ConstantProductPool::from_config(&config)?;

    println!("Initial Pool State:");
    println!("{}", pool.describe());
    println!("Price: {:.4} potatoes per apple", pool.price()?);

    // ── 2. Trade 10 apples for potatoes ─────────────────────────────────
    let potatoes = pool.swap_first_for_second(10.0)?;
    println!("\nTraded 10 apples for {potatoes:.2} potatoes.");
    println!("Pool State After Trade:");
    println!("{}", pool.describe());

    // ── 3. Trade 20 potatoes for apples ─────────────────────────────────
    let apples = pool.swap_second_for_first(20.0)?;
    println!("\nTraded 20 potatoes for {apples:.2} apples.");
    println!("Pool State After Trade:");
    println!("{}", pool.describe());

    println!("\nInvariant drift: {:e}", pool.invariant_drift());
    Ok(())
}
