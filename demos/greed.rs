// Examples are allowed to use expect/unwrap for simplicity
#![allow(clippy::expect_used, clippy::unwrap_used)]

//! Greed Scorer Demo
//!
//! Scores a series of dice throws through the recording proxy, showing
//! call arguments passing through and invocations being counted.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example greed
//!
//! # With interception telemetry
//! RUST_LOG=debug cargo run --example greed
//! ```

use testigo::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("╔════════════════════════════════════════════════════════════╗");
    println!("║                TESTIGO GREED DEMO                          ║");
    println!("╠════════════════════════════════════════════════════════════╣");
    println!("║  Proxied calls with arguments, counted per invocation      ║");
    println!("╚════════════════════════════════════════════════════════════╝");
    println!();

    let mut scorer = Proxy::new(Greed::new());
    tracing::info!(proxy = %scorer.id(), "demo proxy created");

    let throws: &[&[i64]] = &[
        &[5],
        &[1],
        &[1, 5, 5, 1],
        &[2, 3, 4, 6],
        &[1, 1, 1],
        &[2, 2, 2],
        &[1, 1, 1, 5, 1],
        &[2, 5, 2, 2, 3],
    ];

    for throw in throws {
        let args: Vec<Value> = throw.iter().map(|&die| Value::Int(die)).collect();
        let score = scorer.call("score", &args)?;
        println!("[SCORE] {throw:?} -> {score}");
    }
    println!();

    println!(
        "[LOG] score was called {} times",
        scorer.number_of_times_called("score")
    );
    println!("[LOG] messages: {:?}", scorer.messages());

    Ok(())
}
