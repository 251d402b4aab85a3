use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// Registry errors
// =============================================================================

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("unknown discriminator '{key}' (known: {})", .known.join(", "))]
    UnknownDiscriminator { key: String, known: Vec<String> },

    #[error("discriminator '{key}' is already registered")]
    DuplicateDiscriminator { key: String },
}

impl RegistryError {
    pub fn unknown(key: impl Into<String>, known: Vec<String>) -> Self {
        Self::UnknownDiscriminator {
            key: key.into(),
            known,
        }
    }

    pub fn duplicate(key: impl Into<String>) -> Self {
        Self::DuplicateDiscriminator { key: key.into() }
    }

    /// The discriminator the failing call was made with.
    pub fn key(&self) -> &str {
        match self {
            Self::UnknownDiscriminator { key, .. } | Self::DuplicateDiscriminator { key } => key,
        }
    }
}

// =============================================================================
// Builder errors
// =============================================================================

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("missing required field: '{0}'")]
    MissingField(&'static str),

    #[error("topping name must not be empty")]
    EmptyTopping,
}

// =============================================================================
// Singleton errors
// =============================================================================

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SingletonError {
    #[error("instance already initialized; call reset() first")]
    AlreadyInitialized,
}

// =============================================================================
// Configuration errors
// =============================================================================

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid tariff '{name}': {reason}")]
    InvalidTariff { name: String, reason: String },

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

impl ConfigError {
    pub fn invalid_tariff(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidTariff {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

// =============================================================================
// Logging errors
// =============================================================================

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("invalid log filter '{filter}': {reason}")]
    Filter { filter: String, reason: String },

    #[error("failed to install tracing subscriber: {0}")]
    Subscriber(#[from] tracing_subscriber::util::TryInitError),
}
