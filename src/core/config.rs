//! Engine configuration.

use crate::decay::{BatchConfig, DecayRates};
use crate::error::ConfigError;
use crate::genetics::{BreedingRules, GeneticsConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Every tunable the engine reads. Missing JSON sections fall back to defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Rarity weights, initial trait counts, mutation and personality noise
    pub genetics: GeneticsConfig,

    /// Eligibility thresholds and the optional per-owner pet ceiling
    pub breeding: BreedingRules,

    /// Hourly decay rates, thresholds and the sleep window
    pub decay: DecayRates,

    pub batch: BatchConfig,
}

impl EngineConfig {
    /// Quick config where breeding never mutates, for deterministic inheritance
    pub fn without_mutation() -> Self {
        let mut config = Self::default();
        config.genetics.mutation_chance = 0.0;
        config
    }

    /// Quick config with no waiting periods between breedings
    pub fn relaxed_breeding() -> Self {
        Self {
            breeding: BreedingRules {
                min_age_days: 0,
                cooldown_days: 0,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.genetics.validate()?;
        self.breeding.validate()?;
        self.decay.validate()?;
        if self.batch.parallel_threshold == 0 {
            return Err(ConfigError::Invalid(
                "batch.parallel_threshold must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Parses and validates a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json_str(&json)?;
        tracing::debug!(path = %path.display(), "loaded engine config");
        Ok(config)
    }
}
