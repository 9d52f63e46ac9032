//! Basic usage example for the humane library.
//!
//! Run with: cargo run --example basic_usage

use chrono::{Duration, Utc};
use libhumane::times::MAGNITUDES;
use libhumane::{Humane, big_comma, comma, comma_f64};
use num_bigint::BigInt;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("humane - Basic Usage Example\n");

    println!("Digit grouping:");
    for value in [0, 999, 1000, -10_100_000, i64::MAX] {
        println!("  {:>22} -> {}", value, comma(value));
    }
    println!("  {:>22} -> {}", "6.02214076e23", comma_f64(6.02214076e23));

    let big: BigInt = "84889279597249724975972597249849757294578485".parse()?;
    println!("  {:>22} -> {}\n", "45 digits", big_comma(&big));

    println!("Relative times:");
    let humane = Humane::new();
    let now = humane.now();
    for seconds in [0, 45, 90, 3 * 3600, 10 * 86400, 400 * 86400] {
        let then = now - Duration::seconds(seconds);
        println!("  {:>10}s -> {}", seconds, humane.rel_time(then, now));
    }
    println!(
        "  next week -> {}\n",
        humane.rel_time(Utc::now() + Duration::weeks(1), now)
    );

    println!("Magnitude table:");
    for magnitude in &MAGNITUDES {
        println!(
            "  < {:>20}  {:<8} / {}",
            comma(magnitude.threshold),
            magnitude.template.to_string(),
            magnitude.divisor
        );
    }

    Ok(())
}
