//! # Creational Patterns
//!
//! Object-creation patterns built around one reusable piece: a
//! [`CreationRegistry`] that maps a discriminator to a constructor and hands
//! back products that share a capability trait.
//!
//! ## Patterns Covered
//!
//! 1. **Creation Registry**
//!    - Flat discriminator -> constructor table, O(1) lookup
//!    - Explicit duplicate policy (reject or replace)
//!    - Unknown keys are errors, never a fallback product
//!
//! 2. **Factory Method**
//!    - Ride services priced per distance ([`ride`])
//!    - Notification channels ([`notification`])
//!
//! 3. **Abstract Factory**
//!    - Families of GUI widgets per platform ([`gui`])
//!
//! 4. **Builder**
//!    - Consuming builder with `Result`-returning `build` ([`builder`])
//!
//! 5. **Singleton**
//!    - Process-wide slot with explicit `init`/`reset` ([`singleton`])
//!
//! ## Running Examples
//!
//! ```bash
//! cargo run --bin ride_fares
//! cargo run --bin abstract_factory
//! cargo run --bin factory_method
//! cargo run --bin pizza_builder
//! cargo run --bin singleton
//! ```
//!
//! Set `RUST_LOG=creational_patterns=debug` to see registry events.

pub mod builder;
pub mod config;
pub mod error;
pub mod gui;
pub mod logging;
pub mod notification;
pub mod registry;
pub mod ride;
pub mod singleton;

pub use error::{BuildError, ConfigError, LoggingError, RegistryError, SingletonError};
pub use registry::{Constructor, CreationRegistry, DuplicatePolicy, Product};

#[cfg(test)]
pub(crate) mod test_env {
    use std::sync::{Mutex, MutexGuard, PoisonError};

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// Serializes tests that set or read process environment variables.
    pub(crate) fn lock() -> MutexGuard<'static, ()> {
        ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
