//! Console logging for the demo binaries.
//!
//! Library code only emits `tracing` events; binaries call [`init`] once to
//! print them. `RUST_LOG` overrides the default directive, e.g.
//! `RUST_LOG=creational_patterns=debug cargo run --bin ride_fares`.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::LoggingError;

/// Directive used when `RUST_LOG` is unset or empty.
pub const DEFAULT_DIRECTIVE: &str = "info";

/// Builds the filter from `RUST_LOG`, falling back to `default_directive`.
pub fn env_filter(default_directive: &str) -> Result<EnvFilter, LoggingError> {
    let directive = std::env::var("RUST_LOG")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default_directive.to_string());
    parse_filter(&directive)
}

fn parse_filter(directive: &str) -> Result<EnvFilter, LoggingError> {
    EnvFilter::try_new(directive).map_err(|err| LoggingError::Filter {
        filter: directive.to_string(),
        reason: err.to_string(),
    })
}

/// Installs a stderr subscriber and honours `NO_COLOR` for console output.
/// Calling it again after a subscriber is in place is a no-op.
pub fn init(default_directive: &str) -> Result<(), LoggingError> {
    if std::env::var_os("NO_COLOR").is_some() {
        colored::control::set_override(false);
    }
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let filter = env_filter(default_directive)?;
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .try_init()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_env;

    #[test]
    fn test_valid_directives() {
        assert!(parse_filter(DEFAULT_DIRECTIVE).is_ok());
        assert!(parse_filter("debug").is_ok());
        assert!(parse_filter("creational_patterns::registry=trace,warn").is_ok());
    }

    #[test]
    fn test_invalid_directive() {
        let err = parse_filter("creational_patterns=loud").unwrap_err();
        match err {
            LoggingError::Filter { filter, .. } => assert_eq!(filter, "creational_patterns=loud"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_blank_rust_log_uses_default() {
        let _guard = test_env::lock();
        let saved = std::env::var_os("RUST_LOG");

        let mut results = Vec::new();
        for value in ["", "   ", "\t"] {
            std::env::set_var("RUST_LOG", value);
            results.push(env_filter("warn").map(|filter| filter.to_string()));
        }
        std::env::set_var("RUST_LOG", "creational_patterns=loud");
        let from_env = env_filter("warn");

        match saved {
            Some(value) => std::env::set_var("RUST_LOG", value),
            None => std::env::remove_var("RUST_LOG"),
        }

        for result in results {
            assert_eq!(result.unwrap(), "warn");
        }
        match from_env {
            Err(LoggingError::Filter { filter, .. }) => {
                assert_eq!(filter, "creational_patterns=loud")
            }
            other => panic!("expected RUST_LOG to be parsed, got {other:?}"),
        }
    }

    #[test]
    fn test_init_twice_is_noop() {
        let _guard = test_env::lock();
        init("warn").unwrap();
        init("warn").unwrap();
        assert!(tracing::dispatcher::has_been_set());
    }
}
