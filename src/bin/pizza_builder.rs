//! Builder: assemble pizzas and report the outcome at the call site.
//!
//! Run with: cargo run --bin pizza_builder

use colored::Colorize;
use creational_patterns::builder::{Pizza, PizzaBuilder};
use creational_patterns::logging;
use tracing::{error, info};

fn report(result: Result<Pizza, creational_patterns::BuildError>) {
    match result {
        Ok(pizza) => {
            info!("pizza was built successfully");
            println!("{} {pizza}", "built:".green());
        }
        Err(err) => {
            error!(%err, "an error occurred while building pizza");
            println!("{} {err}", "failed:".red());
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init(logging::DEFAULT_DIRECTIVE)?;

    println!("{}", "=== Complete Pizza ===".bold());
    report(
        Pizza::builder()
            .size("Large")
            .crust("Stuffed")
            .topping("Mushrooms")
            .topping("Olives")
            .build(),
    );

    println!("\n{}", "=== Missing Crust ===".bold());
    report(PizzaBuilder::new().size("Medium").topping("Basil").build());

    println!("\n{}", "=== Shared Base ===".bold());
    let base = Pizza::builder().size("Small").crust("Thin");
    report(base.clone().topping("Pepperoni").build());
    report(base.topping("Pineapple").topping("Ham").build());

    Ok(())
}
