// Examples are allowed to use expect/unwrap for simplicity
#![allow(clippy::expect_used, clippy::unwrap_used)]

//! Television Proxy Demo
//!
//! Walks through the canonical recording-proxy scenario: wrap a
//! television, drive it through the proxy, and interrogate the log.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example television
//!
//! # With interception telemetry
//! RUST_LOG=trace cargo run --example television
//! ```

use testigo::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("╔════════════════════════════════════════════════════════════╗");
    println!("║              TESTIGO TELEVISION DEMO                       ║");
    println!("╠════════════════════════════════════════════════════════════╣");
    println!("║  A proxy that records every message sent to its target     ║");
    println!("╚════════════════════════════════════════════════════════════╝");
    println!();

    // Wrap a television in a recording proxy.
    let mut tv = Proxy::new(Television::new());
    tracing::info!(proxy = %tv.id(), "demo proxy created");
    println!("[WRAP] target: {}", tv.target().name());
    println!("[WRAP] proxy id: {}", tv.id());
    println!("[WRAP] messages so far: {:?}", tv.messages());
    println!();

    // Drive it through the proxy: one write, one call.
    println!("[SET] value = 10");
    tv.set("value", 10)?;
    println!("[CALL] toggle()");
    tv.call("toggle", &[])?;
    println!();

    // The television answers the same as it would unproxied.
    println!("[GET] value      -> {}", tv.get("value")?);
    println!("[CALL] is_on()   -> {}", tv.call("is_on", &[])?);
    println!();

    // Everything that crossed the proxy is on record.
    println!("[LOG] messages: {:?}", tv.messages());
    println!("[LOG] is_called(\"toggle\"): {}", tv.is_called("toggle"));
    println!(
        "[LOG] number_of_times_called(\"value\"): {}",
        tv.number_of_times_called("value")
    );
    println!();

    // A failed lookup still leaves its name as the last entry.
    println!("[GET] antenna (no such member)");
    match tv.get("antenna") {
        Ok(value) => println!("  unexpected answer: {value}"),
        Err(err) => println!("  error: {err}"),
    }
    println!("[LOG] last message: {:?}", tv.messages().last());
    println!();

    // Rebind the same proxy to an immutable text target.
    println!("[SWAP] replacing target with Text(\"Do Or Do Not\")");
    tv.replace_target(Text::new("Do Or Do Not"));
    let upper = tv.call("upper_operation", &[])?;
    tv.replace_target(Text::new(upper.as_text().expect("text result")));
    let words = tv.call("split_operation", &[])?;
    println!("[CALL] upper_operation() -> {upper}");
    println!("[CALL] split_operation() -> {words}");
    println!();

    println!("[LOG] full record: {:?}", tv.messages());

    Ok(())
}
