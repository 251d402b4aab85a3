//! Ride-sharing fares: a factory method keyed by ride type.
//!
//! Run with: cargo run --bin ride_fares

use std::fmt;

use serde::Deserialize;
use tracing::debug;

use crate::error::{ConfigError, RegistryError};
use crate::registry::{CreationRegistry, Product};

/// Built-in discriminators, in the order the demo prints them.
pub const RIDE_TYPES: [&str; 3] = ["Standard", "Premium", "Shared"];

pub trait RideService: Product + Send + Sync {
    fn ride_type(&self) -> &str;
    fn calculate_fare(&self, distance: f64) -> f64;
    fn estimated_time_of_arrival(&self, distance: f64) -> String;
}

pub type RideRegistry = CreationRegistry<String, dyn RideService>;

// Whole minutes, truncated toward zero.
fn eta_text(distance: f64, divisor: f64) -> String {
    format!("Approximately {} minutes", (distance / divisor) as i64)
}

// =============================================================================
// Built-in ride types
// =============================================================================

#[derive(Debug, Clone, Copy, Default)]
pub struct StandardRide;

impl RideService for StandardRide {
    fn ride_type(&self) -> &str {
        "Standard Ride"
    }

    fn calculate_fare(&self, distance: f64) -> f64 {
        5.0 + 1.0 * distance
    }

    fn estimated_time_of_arrival(&self, distance: f64) -> String {
        eta_text(distance, 10.0)
    }
}

impl Product for StandardRide {
    fn describe(&self) -> String {
        self.ride_type().to_string()
    }
}

impl fmt::Display for StandardRide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ride_type())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PremiumRide;

impl RideService for PremiumRide {
    fn ride_type(&self) -> &str {
        "Premium Ride"
    }

    fn calculate_fare(&self, distance: f64) -> f64 {
        10.0 + 2.0 * distance
    }

    fn estimated_time_of_arrival(&self, distance: f64) -> String {
        eta_text(distance, 12.0)
    }
}

impl Product for PremiumRide {
    fn describe(&self) -> String {
        self.ride_type().to_string()
    }
}

impl fmt::Display for PremiumRide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ride_type())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SharedRide;

impl RideService for SharedRide {
    fn ride_type(&self) -> &str {
        "Shared Ride"
    }

    fn calculate_fare(&self, distance: f64) -> f64 {
        3.0 + 0.5 * distance
    }

    fn estimated_time_of_arrival(&self, distance: f64) -> String {
        eta_text(distance, 8.0)
    }
}

impl Product for SharedRide {
    fn describe(&self) -> String {
        self.ride_type().to_string()
    }
}

impl fmt::Display for SharedRide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ride_type())
    }
}

/// Adds the three built-in ride types to `registry`.
pub fn register_standard_rides(registry: &mut RideRegistry) -> Result<(), RegistryError> {
    registry.register("Standard".to_string(), |_| Box::new(StandardRide) as Box<dyn RideService>)?;
    registry.register("Premium".to_string(), |_| Box::new(PremiumRide) as Box<dyn RideService>)?;
    registry.register("Shared".to_string(), |_| Box::new(SharedRide) as Box<dyn RideService>)?;
    Ok(())
}

/// A fresh registry holding the built-in ride types.
pub fn standard_rides() -> RideRegistry {
    let mut registry = RideRegistry::new();
    register_standard_rides(&mut registry).expect("built-in ride discriminators are distinct");
    registry
}

lazy_static::lazy_static! {
    static ref DEFAULT_RIDES: RideRegistry = standard_rides();
}

/// Process-wide registry of the built-in rides, populated on first use.
pub fn default_registry() -> &'static RideRegistry {
    &DEFAULT_RIDES
}

// =============================================================================
// Data-defined tariffs
// =============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Tariff {
    pub name: String,
    pub label: String,
    pub base_fare: f64,
    pub per_unit: f64,
    pub eta_divisor: f64,
}

impl Tariff {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::invalid_tariff(&self.name, "name must not be empty"));
        }
        if !self.base_fare.is_finite() || self.base_fare < 0.0 {
            return Err(ConfigError::invalid_tariff(
                &self.name,
                format!("base_fare must be non-negative, got {}", self.base_fare),
            ));
        }
        if !self.per_unit.is_finite() || self.per_unit < 0.0 {
            return Err(ConfigError::invalid_tariff(
                &self.name,
                format!("per_unit must be non-negative, got {}", self.per_unit),
            ));
        }
        if !self.eta_divisor.is_finite() || self.eta_divisor <= 0.0 {
            return Err(ConfigError::invalid_tariff(
                &self.name,
                format!("eta_divisor must be positive, got {}", self.eta_divisor),
            ));
        }
        Ok(())
    }
}

/// Ride whose pricing comes from a [`Tariff`].
#[derive(Debug, Clone, PartialEq)]
pub struct TariffRide {
    tariff: Tariff,
}

impl TariffRide {
    pub fn new(tariff: Tariff) -> Self {
        Self { tariff }
    }
}

impl RideService for TariffRide {
    fn ride_type(&self) -> &str {
        &self.tariff.label
    }

    fn calculate_fare(&self, distance: f64) -> f64 {
        self.tariff.base_fare + self.tariff.per_unit * distance
    }

    fn estimated_time_of_arrival(&self, distance: f64) -> String {
        eta_text(distance, self.tariff.eta_divisor)
    }
}

impl Product for TariffRide {
    fn describe(&self) -> String {
        self.tariff.label.clone()
    }
}

impl fmt::Display for TariffRide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tariff.label)
    }
}

/// Validates `tariff` and registers it under its name.
pub fn register_tariff(registry: &mut RideRegistry, tariff: Tariff) -> Result<(), ConfigError> {
    tariff.validate()?;
    let name = tariff.name.clone();
    let ride = TariffRide::new(tariff);
    registry.register(name.clone(), move |_| Box::new(ride.clone()) as Box<dyn RideService>)?;
    debug!(tariff = %name, "registered tariff");
    Ok(())
}

// =============================================================================
// Quotes
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub ride_type: String,
    pub fare: f64,
    pub eta: String,
}

pub fn quote(registry: &RideRegistry, key: &str, distance: f64) -> Result<Quote, RegistryError> {
    let ride = registry.create(key, ())?;
    Ok(Quote {
        ride_type: ride.ride_type().to_string(),
        fare: ride.calculate_fare(distance),
        eta: ride.estimated_time_of_arrival(distance),
    })
}
