//! Factory method: send one message per notification channel.
//!
//! Run with: cargo run --bin factory_method

use colored::Colorize;
use creational_patterns::logging;
use creational_patterns::notification::{notification_registry, send_notification, Channel};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init(logging::DEFAULT_DIRECTIVE)?;

    let registry = notification_registry();

    println!("{}", "=== Notifications ===".bold());
    let messages = [
        (Channel::Email, "Welcome to our service!"),
        (Channel::Sms, "Your code is 1234"),
        (Channel::Push, "You have a new message"),
    ];
    for (channel, message) in messages {
        println!("{}", send_notification(&registry, channel, message)?);
    }

    println!("\n{}", "=== Channel Chosen at Runtime ===".bold());
    for name in ["sms", "pager"] {
        match name.parse::<Channel>() {
            Ok(channel) => println!(
                "{} {}",
                format!("[{channel}]").green(),
                send_notification(&registry, channel, "Chosen at runtime")?
            ),
            Err(err) => println!("{} {err}", "error:".red()),
        }
    }

    Ok(())
}
