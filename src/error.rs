//! Error types for the pet simulation core.
//!
//! Expected domain conditions (empty trait pools, sub-minute ticks, critical
//! pets) never surface here. These variants cover caller misuse only.

use crate::catalog::TraitType;
use crate::genetics::DenialReason;
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Result type alias using PetsimError
pub type Result<T> = std::result::Result<T, PetsimError>;

/// Unified error type for petsim operations
#[derive(Debug, Error)]
pub enum PetsimError {
    #[error("Stat error: {0}")]
    Stat(#[from] StatError),

    #[error("Decay error: {0}")]
    Decay(#[from] DecayError),

    #[error("Genetics error: {0}")]
    Genetics(#[from] GeneticsError),

    #[error("Breeding error: {0}")]
    Breeding(#[from] BreedingError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatError {
    #[error("stat value {0} is outside 0..=100")]
    OutOfRange(i64),

    #[error("vital stat {0} is not a number within 0..=100")]
    VitalOutOfRange(f64),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecayError {
    #[error("last update {last_update} is after now ({now})")]
    LastUpdateInFuture {
        last_update: DateTime<Utc>,
        now: DateTime<Utc>,
    },

    #[error("timezone offset {0}h is outside -14..=14")]
    InvalidTimezoneOffset(f64),

    #[error("decay rates rejected: {0}")]
    InvalidRates(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneticsError {
    #[error("catalog has no traits of type '{0}'")]
    NoTraitsOfType(TraitType),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BreedingError {
    #[error("{0}")]
    Ineligible(DenialReason),

    #[error("owner already has {current} pets (limit {limit})")]
    PetLimitReached { current: usize, limit: usize },

    #[error(transparent)]
    Genetics(#[from] GeneticsError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}
