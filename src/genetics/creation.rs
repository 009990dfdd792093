//! Founding pets: random personality and an initial trait roll.

use super::selection::roll_trait;
use super::types::GeneticsConfig;
use crate::catalog::{TraitCatalog, TraitId};
use crate::core::constants::STAT_MAX;
use crate::error::GeneticsError;
use crate::pet::{InheritanceSource, OwnerId, Personality, PersonalityAttribute, Pet, PetTrait, Stat};
use chrono::{DateTime, Utc};
use rand::Rng;
use std::collections::HashSet;

/// Each attribute is an independent uniform integer in [0, 100].
pub fn roll_personality(rng: &mut impl Rng) -> Personality {
    let mut personality = Personality::default();
    for attr in PersonalityAttribute::all() {
        personality.set(attr, Stat::clamped(rng.gen_range(0..=STAT_MAX)));
    }
    personality
}

/// Rolls the configured number of traits per type for a founding pet.
///
/// Every slot rolls a rarity, picks uniformly among unused traits of that
/// type and rarity, and widens to any rarity when that pool is empty. A slot
/// with nothing unused left is skipped. A type that is requested but absent
/// from the catalog entirely is an error.
pub fn roll_initial_traits<C: TraitCatalog + ?Sized>(
    catalog: &C,
    config: &GeneticsConfig,
    rng: &mut impl Rng,
) -> Result<Vec<PetTrait>, GeneticsError> {
    let mut used: HashSet<TraitId> = HashSet::new();
    let mut traits = Vec::new();

    for (trait_type, &count) in &config.initial_trait_counts {
        if count == 0 {
            continue;
        }
        if catalog.find_traits_by_type(trait_type).is_empty() {
            return Err(GeneticsError::NoTraitsOfType(trait_type.clone()));
        }

        for slot in 0..count {
            match roll_trait(catalog, trait_type, &config.rarity, Some(&used), rng) {
                Some(t) => {
                    used.insert(t.id);
                    traits.push(PetTrait::new(t, InheritanceSource::Initial));
                }
                None => {
                    tracing::debug!(
                        %trait_type,
                        filled = slot,
                        requested = count,
                        "catalog exhausted for initial traits"
                    );
                    break;
                }
            }
        }
    }

    Ok(traits)
}

/// Creates a generation-1 pet with a random personality and initial traits.
pub fn create_pet_with_genetics<C: TraitCatalog + ?Sized>(
    owner_id: OwnerId,
    name: impl Into<String>,
    now: DateTime<Utc>,
    catalog: &C,
    config: &GeneticsConfig,
    rng: &mut impl Rng,
) -> Result<Pet, GeneticsError> {
    let mut pet = Pet::new(owner_id, name, now);
    pet.personality = roll_personality(rng);
    pet.traits = roll_initial_traits(catalog, config, rng)?;

    tracing::debug!(
        pet_id = %pet.id,
        owner_id = %owner_id,
        traits = pet.traits.len(),
        "created founding pet"
    );
    Ok(pet)
}
