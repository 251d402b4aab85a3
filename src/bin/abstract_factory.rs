//! Abstract factory: render a widget family for one platform.
//!
//! Run with: cargo run --bin abstract_factory [Windows|Mac|Linux]

use colored::Colorize;
use creational_patterns::gui::{create_ui, gui_registry, render_for, Platform};
use creational_patterns::logging;
use creational_patterns::Product;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init(logging::DEFAULT_DIRECTIVE)?;

    let registry = gui_registry();

    // Could be detected from the host; defaults to Windows.
    let requested = std::env::args().nth(1).unwrap_or_else(|| "Windows".to_string());

    println!("{}", format!("=== {requested} UI ===").bold());
    match render_for(&registry, &requested) {
        Ok(lines) => lines.iter().for_each(|line| println!("{line}")),
        Err(err) => println!("{} {err}", "error:".red()),
    }

    println!("\n{}", "=== Every Family ===".bold());
    for platform in Platform::ALL {
        let factory = registry.create(&platform, ())?;
        println!("{}:", factory.describe().cyan());
        for line in create_ui(factory.as_ref()) {
            println!("  {line}");
        }
    }

    Ok(())
}
