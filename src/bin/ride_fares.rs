//! Factory method: quote every ride type for one distance.
//!
//! Run with: cargo run --bin ride_fares
//! Extra tariffs and the distance come from `creational.toml` (or the file
//! named by `CREATIONAL_CONFIG`).

use colored::Colorize;
use creational_patterns::config::Settings;
use creational_patterns::logging;
use creational_patterns::ride::quote;
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init(logging::DEFAULT_DIRECTIVE)?;

    let settings = Settings::load()?;
    let registry = settings.ride_registry()?;
    let distance = settings.distance;
    info!(rides = registry.len(), policy = ?registry.policy(), "ride registry ready");

    println!("{}", "=== Ride Fares ===".bold());
    println!("Distance: {distance}\n");

    for ride_type in settings.ride_types() {
        let quote = quote(&registry, ride_type, distance)?;
        println!("Ride Type: {}", quote.ride_type.cyan());
        println!("Fare: ${:.2}", quote.fare);
        println!("ETA: {}", quote.eta);
        println!();
    }

    println!("{}", "=== Unknown Ride Type ===".bold());
    match quote(&registry, "Helicopter", distance) {
        Ok(quote) => println!("unexpected quote: {quote:?}"),
        Err(err) => println!("{} {err}", "error:".red()),
    }

    Ok(())
}
