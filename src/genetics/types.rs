//! Genetics tuning and breeding results.

use crate::catalog::{RarityWeights, TraitId, TraitType};
use crate::core::constants::*;
use crate::error::ConfigError;
use crate::pet::{InheritanceSource, Pet};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Tuning for initial assignment and breeding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneticsConfig {
    pub rarity: RarityWeights,
    /// How many traits of each type a founding pet rolls
    pub initial_trait_counts: BTreeMap<TraitType, u32>,
    /// Chance per inherited slot of replacing the candidate with a fresh trait
    pub mutation_chance: f64,
    /// Personality blend noise, drawn uniformly from `[-variance, variance]`
    pub personality_variance: i32,
}

impl Default for GeneticsConfig {
    fn default() -> Self {
        let initial_trait_counts = BTreeMap::from([
            (TraitType::Visual, INITIAL_VISUAL_TRAITS),
            (TraitType::Personality, INITIAL_PERSONALITY_TRAITS),
            (TraitType::Skill, INITIAL_SKILL_TRAITS),
        ]);
        Self {
            rarity: RarityWeights::default(),
            initial_trait_counts,
            mutation_chance: MUTATION_CHANCE,
            personality_variance: PERSONALITY_VARIANCE,
        }
    }
}

impl GeneticsConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.rarity.validate()?;
        if !(0.0..=1.0).contains(&self.mutation_chance) {
            return Err(ConfigError::Invalid(format!(
                "mutation_chance must be within 0..=1, got {}",
                self.mutation_chance
            )));
        }
        if !(0..=100).contains(&self.personality_variance) {
            return Err(ConfigError::Invalid(format!(
                "personality_variance must be within 0..=100, got {}",
                self.personality_variance
            )));
        }
        Ok(())
    }

    pub fn initial_count(&self, trait_type: &TraitType) -> u32 {
        self.initial_trait_counts.get(trait_type).copied().unwrap_or(0)
    }
}

/// Thresholds for the eligibility rule chain and the owner pet ceiling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreedingRules {
    pub min_age_days: i64,
    /// Both parents need health strictly above this
    pub min_health: u8,
    pub cooldown_days: i64,
    /// None means no ceiling
    pub max_pets_per_owner: Option<usize>,
}

impl Default for BreedingRules {
    fn default() -> Self {
        Self {
            min_age_days: BREEDING_MIN_AGE_DAYS,
            min_health: BREEDING_MIN_HEALTH,
            cooldown_days: BREEDING_COOLDOWN_DAYS,
            max_pets_per_owner: None,
        }
    }
}

impl BreedingRules {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, days) in [
            ("min_age_days", self.min_age_days),
            ("cooldown_days", self.cooldown_days),
        ] {
            if !(0..=MAX_BREEDING_RULE_DAYS).contains(&days) {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be within 0..={MAX_BREEDING_RULE_DAYS}, got {days}"
                )));
            }
        }
        if self.min_health > STAT_MAX {
            return Err(ConfigError::Invalid(format!(
                "min_health must be within 0..=100, got {}",
                self.min_health
            )));
        }
        Ok(())
    }
}

/// What happened to one inherited trait slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SlotOutcome {
    /// The candidate was kept as-is
    Inherited {
        trait_id: TraitId,
        source: InheritanceSource,
    },
    /// A fresh catalog trait replaced the candidate
    Mutated { trait_id: TraitId },
    /// Mutation rolled but produced nothing new, so the candidate was kept
    MutationFellBack {
        trait_id: TraitId,
        source: InheritanceSource,
    },
    /// Nothing unused was available for this slot
    Exhausted { mutation_rolled: bool },
}

impl SlotOutcome {
    pub fn mutation_rolled(&self) -> bool {
        matches!(
            self,
            SlotOutcome::Mutated { .. }
                | SlotOutcome::MutationFellBack { .. }
                | SlotOutcome::Exhausted {
                    mutation_rolled: true
                }
        )
    }

    pub fn trait_id(&self) -> Option<TraitId> {
        match self {
            SlotOutcome::Inherited { trait_id, .. }
            | SlotOutcome::Mutated { trait_id }
            | SlotOutcome::MutationFellBack { trait_id, .. } => Some(*trait_id),
            SlotOutcome::Exhausted { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotRecord {
    pub trait_type: TraitType,
    pub outcome: SlotOutcome,
}

/// Per-slot account of one breeding call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BreedingReport {
    pub slots: Vec<SlotRecord>,
}

impl BreedingReport {
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn mutation_rolls(&self) -> usize {
        self.slots.iter().filter(|s| s.outcome.mutation_rolled()).count()
    }

    pub fn mutated(&self) -> usize {
        self.slots
            .iter()
            .filter(|s| matches!(s.outcome, SlotOutcome::Mutated { .. }))
            .count()
    }

    pub fn exhausted(&self) -> usize {
        self.slots
            .iter()
            .filter(|s| matches!(s.outcome, SlotOutcome::Exhausted { .. }))
            .count()
    }
}

/// A freshly bred pet plus how its trait slots were filled.
#[derive(Debug, Clone, PartialEq)]
pub struct Offspring {
    pub pet: Pet,
    pub report: BreedingReport,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_genetics_config() {
        let config = GeneticsConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.initial_count(&TraitType::Visual), 4);
        assert_eq!(config.initial_count(&TraitType::Personality), 3);
        assert_eq!(config.initial_count(&TraitType::Skill), 0);
        assert_eq!(config.initial_count(&TraitType::Custom("aura".into())), 0);
    }

    #[test]
    fn test_mutation_chance_out_of_range() {
        let config = GeneticsConfig {
            mutation_chance: 1.5,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_breeding_rules_validate() {
        assert!(BreedingRules::default().validate().is_ok());
        let rules = BreedingRules {
            min_health: 120,
            ..Default::default()
        };
        assert!(rules.validate().is_err());
    }

    #[test]
    fn test_breeding_day_bounds() {
        let at_bound = BreedingRules {
            min_age_days: MAX_BREEDING_RULE_DAYS,
            cooldown_days: MAX_BREEDING_RULE_DAYS,
            ..Default::default()
        };
        assert!(at_bound.validate().is_ok());

        let too_long = BreedingRules {
            cooldown_days: i64::MAX,
            ..Default::default()
        };
        let err = too_long.validate().unwrap_err();
        assert!(err.to_string().contains("cooldown_days"));

        let negative = BreedingRules {
            min_age_days: -1,
            ..Default::default()
        };
        assert!(negative.validate().is_err());
    }

    #[test]
    fn test_trait_counts_deserialize_by_type_name() {
        let json = r#"{"initial_trait_counts": {"visual": 2, "aura": 1}}"#;
        let config: GeneticsConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.initial_count(&TraitType::Visual), 2);
        assert_eq!(config.initial_count(&TraitType::Custom("aura".into())), 1);
        assert_eq!(config.initial_count(&TraitType::Personality), 0);
        assert!((config.mutation_chance - MUTATION_CHANCE).abs() < f64::EPSILON);
    }

    #[test]
    fn test_report_counts() {
        let id = TraitId::new();
        let report = BreedingReport {
            slots: vec![
                SlotRecord {
                    trait_type: TraitType::Visual,
                    outcome: SlotOutcome::Mutated { trait_id: id },
                },
                SlotRecord {
                    trait_type: TraitType::Visual,
                    outcome: SlotOutcome::Inherited {
                        trait_id: id,
                        source: InheritanceSource::Parent1,
                    },
                },
                SlotRecord {
                    trait_type: TraitType::Skill,
                    outcome: SlotOutcome::Exhausted {
                        mutation_rolled: true,
                    },
                },
            ],
        };
        assert_eq!(report.slot_count(), 3);
        assert_eq!(report.mutation_rolls(), 2);
        assert_eq!(report.mutated(), 1);
        assert_eq!(report.exhausted(), 1);
    }
}
