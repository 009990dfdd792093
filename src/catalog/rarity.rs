//! Weighted rarity sampling.

use super::types::Rarity;
use crate::core::constants::{
    RARITY_WEIGHT_COMMON, RARITY_WEIGHT_LEGENDARY, RARITY_WEIGHT_RARE, RARITY_WEIGHT_UNCOMMON,
};
use crate::error::ConfigError;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Probability of each rarity tier. Weights are compared cumulatively in
/// `Rarity::ALL` order against a single uniform draw.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RarityWeights {
    pub common: f64,
    pub uncommon: f64,
    pub rare: f64,
    pub legendary: f64,
}

impl Default for RarityWeights {
    fn default() -> Self {
        Self {
            common: RARITY_WEIGHT_COMMON,
            uncommon: RARITY_WEIGHT_UNCOMMON,
            rare: RARITY_WEIGHT_RARE,
            legendary: RARITY_WEIGHT_LEGENDARY,
        }
    }
}

impl RarityWeights {
    pub fn weight(&self, rarity: Rarity) -> f64 {
        match rarity {
            Rarity::Common => self.common,
            Rarity::Uncommon => self.uncommon,
            Rarity::Rare => self.rare,
            Rarity::Legendary => self.legendary,
        }
    }

    pub fn total(&self) -> f64 {
        Rarity::ALL.iter().map(|r| self.weight(*r)).sum()
    }

    /// Weights must be finite, non-negative and sum to 1 (within 1e-6).
    pub fn validate(&self) -> Result<(), ConfigError> {
        for rarity in Rarity::ALL {
            let w = self.weight(rarity);
            if !w.is_finite() || w < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "rarity weight for {rarity} must be a non-negative number, got {w}"
                )));
            }
        }
        let total = self.total();
        if (total - 1.0).abs() > 1e-6 {
            return Err(ConfigError::Invalid(format!(
                "rarity weights must sum to 1.0, got {total}"
            )));
        }
        Ok(())
    }
}

/// Rolls a rarity tier.
///
/// One uniform draw in [0, 1) is walked through the cumulative weights. If
/// floating-point residue leaves the draw past the last threshold, the roll
/// falls back to `Common`.
pub fn roll_rarity(weights: &RarityWeights, rng: &mut impl Rng) -> Rarity {
    let roll = rng.gen::<f64>();
    let mut cumulative = 0.0;
    for rarity in Rarity::ALL {
        cumulative += weights.weight(rarity);
        if roll < cumulative {
            return rarity;
        }
    }
    Rarity::Common
}
