//! Settings for the demo binaries, read from an optional TOML file.
//!
//! ```toml
//! distance = 10.0
//! duplicate_policy = "reject"   # or "replace"
//!
//! [[tariffs]]
//! name = "Luxury"
//! label = "Luxury Ride"
//! base_fare = 20.0
//! per_unit = 3.0
//! eta_divisor = 15.0
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info};

use crate::error::ConfigError;
use crate::registry::DuplicatePolicy;
use crate::ride::{register_standard_rides, register_tariff, RideRegistry, Tariff, RIDE_TYPES};

/// Environment variable naming the settings file.
pub const CONFIG_ENV: &str = "CREATIONAL_CONFIG";
/// File looked up in the working directory when [`CONFIG_ENV`] is unset.
pub const DEFAULT_CONFIG_FILE: &str = "creational.toml";

const DEFAULT_DISTANCE: f64 = 10.0;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub distance: f64,
    pub duplicate_policy: DuplicatePolicy,
    pub tariffs: Vec<Tariff>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            distance: DEFAULT_DISTANCE,
            duplicate_policy: DuplicatePolicy::default(),
            tariffs: Vec::new(),
        }
    }
}

impl Settings {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_toml_str(&content)?;
        info!(path = %path.display(), tariffs = settings.tariffs.len(), "loaded settings");
        Ok(settings)
    }

    /// Reads `$CREATIONAL_CONFIG`, else `./creational.toml` if present, else
    /// falls back to defaults.
    ///
    /// An explicitly named file that cannot be read is an error.
    pub fn load() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_file(&PathBuf::from(path)),
            None => Self::load_or_default(Path::new(DEFAULT_CONFIG_FILE)),
        }
    }

    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            debug!(path = %path.display(), "no settings file, using defaults");
            Ok(Self::default())
        }
    }

    /// Built-in rides plus every configured tariff, under the configured
    /// duplicate policy.
    pub fn ride_registry(&self) -> Result<RideRegistry, ConfigError> {
        let mut registry = RideRegistry::with_policy(self.duplicate_policy);
        register_standard_rides(&mut registry)?;
        for tariff in &self.tariffs {
            register_tariff(&mut registry, tariff.clone())?;
        }
        Ok(registry)
    }

    /// Ride types to quote: the built-ins, then each configured tariff
    /// name once, in file order.
    pub fn ride_types(&self) -> Vec<&str> {
        let mut ride_types: Vec<&str> = RIDE_TYPES.to_vec();
        for tariff in &self.tariffs {
            let name = tariff.name.as_str();
            if !ride_types.contains(&name) {
                ride_types.push(name);
            }
        }
        ride_types
    }
}
