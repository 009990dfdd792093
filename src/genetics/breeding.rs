//! Offspring generation from two parents.

use super::eligibility::{check_eligibility, Eligibility};
use super::selection::roll_trait;
use super::types::{BreedingReport, BreedingRules, GeneticsConfig, Offspring, SlotOutcome, SlotRecord};
use crate::catalog::{TraitCatalog, TraitId, TraitType};
use crate::core::numeric::blend_with_variance;
use crate::error::BreedingError;
use crate::pet::{InheritanceSource, OwnerId, Personality, PersonalityAttribute, Pet, PetTrait, Stat};
use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::{BTreeSet, HashSet};

/// Blends each attribute: floor of the parents' mean plus fresh variance, clamped.
pub fn blend_personality(
    p1: &Personality,
    p2: &Personality,
    variance: i32,
    rng: &mut impl Rng,
) -> Personality {
    let mut blended = Personality::default();
    for attr in PersonalityAttribute::all() {
        let value = blend_with_variance(p1.get(attr).value(), p2.get(attr).value(), variance, rng);
        blended.set(attr, Stat::clamped(value));
    }
    blended
}

/// Number of traits of one type the offspring inherits.
pub fn inherited_count(n1: usize, n2: usize) -> usize {
    ((n1 + n2) / 2).max(1)
}

/// Fills one type bucket of the offspring's traits.
#[allow(clippy::too_many_arguments)]
fn inherit_type<C: TraitCatalog + ?Sized>(
    trait_type: &TraitType,
    parent1: &Pet,
    parent2: &Pet,
    catalog: &C,
    config: &GeneticsConfig,
    used: &mut HashSet<TraitId>,
    traits: &mut Vec<PetTrait>,
    report: &mut BreedingReport,
    rng: &mut impl Rng,
) {
    let mut pool: Vec<(&PetTrait, InheritanceSource)> = parent1
        .traits_of_type(trait_type)
        .map(|t| (t, InheritanceSource::Parent1))
        .chain(
            parent2
                .traits_of_type(trait_type)
                .map(|t| (t, InheritanceSource::Parent2)),
        )
        .collect();
    let n1 = parent1.traits_of_type(trait_type).count();
    let count = inherited_count(n1, pool.len() - n1);

    pool.shuffle(rng);

    for (candidate, origin) in pool.into_iter().take(count) {
        let outcome = if rng.gen::<f64>() < config.mutation_chance {
            let mutant = roll_trait(catalog, trait_type, &config.rarity, None, rng)
                .filter(|m| !used.contains(&m.id));
            match mutant {
                Some(m) => {
                    let trait_id = m.id;
                    tracing::trace!(%trait_type, trait_name = %m.name, "trait mutated");
                    used.insert(trait_id);
                    traits.push(PetTrait::new(m, InheritanceSource::Mutation));
                    SlotOutcome::Mutated { trait_id }
                }
                None if !used.contains(&candidate.id()) => {
                    used.insert(candidate.id());
                    traits.push(PetTrait::new(candidate.definition.clone(), origin));
                    SlotOutcome::MutationFellBack {
                        trait_id: candidate.id(),
                        source: origin,
                    }
                }
                None => SlotOutcome::Exhausted {
                    mutation_rolled: true,
                },
            }
        } else if used.insert(candidate.id()) {
            traits.push(PetTrait::new(candidate.definition.clone(), origin));
            SlotOutcome::Inherited {
                trait_id: candidate.id(),
                source: origin,
            }
        } else {
            SlotOutcome::Exhausted {
                mutation_rolled: false,
            }
        };

        if let SlotOutcome::Exhausted { .. } = outcome {
            tracing::trace!(%trait_type, "inherited slot left empty");
        }
        report.slots.push(SlotRecord {
            trait_type: trait_type.clone(),
            outcome,
        });
    }
}

/// Produces one offspring from two parents.
///
/// Assumes eligibility was already checked. Generation is one past the older
/// lineage, personality is a noisy blend, and each trait type present on
/// either parent contributes `max(1, (n1 + n2) / 2)` slots drawn from the
/// shuffled combined pool, each with a chance to mutate. No trait is ever
/// added twice; a slot with nothing unused to offer is left empty.
#[allow(clippy::too_many_arguments)]
pub fn breed<C: TraitCatalog + ?Sized>(
    parent1: &Pet,
    parent2: &Pet,
    owner_id: OwnerId,
    offspring_name: impl Into<String>,
    now: DateTime<Utc>,
    catalog: &C,
    config: &GeneticsConfig,
    rng: &mut impl Rng,
) -> Offspring {
    let mut pet = Pet::new(owner_id, offspring_name, now);
    pet.generation = parent1.generation.max(parent2.generation) + 1;
    pet.parent1_id = Some(parent1.id);
    pet.parent2_id = Some(parent2.id);
    pet.personality = blend_personality(
        &parent1.personality,
        &parent2.personality,
        config.personality_variance,
        rng,
    );

    // Sorted so seeded runs visit buckets in the same order
    let trait_types: BTreeSet<&TraitType> = parent1
        .traits
        .iter()
        .chain(parent2.traits.iter())
        .map(|t| t.trait_type())
        .collect();

    let mut used = HashSet::new();
    let mut report = BreedingReport::default();
    for trait_type in trait_types {
        inherit_type(
            trait_type,
            parent1,
            parent2,
            catalog,
            config,
            &mut used,
            &mut pet.traits,
            &mut report,
            rng,
        );
    }

    tracing::debug!(
        offspring_id = %pet.id,
        parent1_id = %parent1.id,
        parent2_id = %parent2.id,
        generation = pet.generation,
        traits = pet.traits.len(),
        mutated = report.mutated(),
        "bred offspring"
    );
    Offspring { pet, report }
}

/// Runs the breeding handler sequence on two loaded parents: eligibility,
/// the owner's pet ceiling, breeding, then stamping both parents' cooldown.
/// Persisting the offspring and parents is left to the caller.
#[allow(clippy::too_many_arguments)]
pub fn breed_pets<C: TraitCatalog + ?Sized>(
    parent1: &mut Pet,
    parent2: &mut Pet,
    owner_id: OwnerId,
    offspring_name: impl Into<String>,
    owner_pet_count: usize,
    now: DateTime<Utc>,
    catalog: &C,
    config: &GeneticsConfig,
    rules: &BreedingRules,
    rng: &mut impl Rng,
) -> Result<Offspring, BreedingError> {
    if let Eligibility::Denied(reason) = check_eligibility(parent1, parent2, now, rules) {
        tracing::debug!(%reason, "breeding denied");
        return Err(BreedingError::Ineligible(reason));
    }

    if let Some(limit) = rules.max_pets_per_owner {
        if owner_pet_count >= limit {
            return Err(BreedingError::PetLimitReached {
                current: owner_pet_count,
                limit,
            });
        }
    }

    let offspring = breed(parent1, parent2, owner_id, offspring_name, now, catalog, config, rng);
    parent1.last_bred_at = Some(now);
    parent2.last_bred_at = Some(now);
    Ok(offspring)
}
