//! Date Difference
//!
//! This example shows the stateless date-difference collaborator: the span
//! between two dates as total days plus week/month/year approximations.
//!
//! Run with: cargo run --example date_difference

use reckon::date::{parse_date, span_between_dates};

fn main() {
    println!("=== Date Difference Example ===\n");

    let start = parse_date("2023-01-01").unwrap();
    let end = parse_date("2024-02-05").unwrap();

    let span = span_between_dates(start, end);
    println!("From {start} to {end}:\n{span}");

    println!("\n=== Example Complete ===");
}
