//! Singleton: one process-wide settings instance with an explicit lifecycle,
//! next to the dependency-injected alternative.
//!
//! Run with: cargo run --bin singleton

use colored::Colorize;
use creational_patterns::logging;
use creational_patterns::singleton::InstanceSlot;
use std::sync::Arc;

#[derive(Debug)]
struct AppSettings {
    value: String,
}

static SETTINGS: InstanceSlot<AppSettings> = InstanceSlot::new();

fn settings(value: &str) -> AppSettings {
    AppSettings {
        value: value.to_string(),
    }
}

// Takes its dependency explicitly instead of reaching for SETTINGS.
fn greeting(settings: &AppSettings) -> String {
    format!("configured with '{}'", settings.value)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init(logging::DEFAULT_DIRECTIVE)?;

    println!("{}", "=== First Value Wins ===".bold());
    let s1 = SETTINGS.get_or_init(|| settings("First"));
    let s2 = SETTINGS.get_or_init(|| settings("Second"));
    println!("s1.value = {}", s1.value);
    println!("s2.value = {}", s2.value);
    println!("same instance: {}", Arc::ptr_eq(&s1, &s2));

    println!("\n{}", "=== Explicit init ===".bold());
    match SETTINGS.init(settings("Third")) {
        Ok(_) => println!("unexpected: slot accepted a second value"),
        Err(err) => println!("{} {err}", "refused:".yellow()),
    }

    println!("\n{}", "=== Reset ===".bold());
    if let Some(previous) = SETTINGS.reset() {
        println!("dropped '{}' from the slot", previous.value);
    }
    let fresh = SETTINGS.init(settings("Reconfigured"))?;
    println!("new value = {}", fresh.value);
    println!("old handle still reads {}", s1.value);

    println!("\n{}", "=== Dependency Injection ===".bold());
    let local = settings("Injected");
    println!("{}", greeting(&local));
    println!("{}", greeting(&fresh));

    Ok(())
}
