//! `PetEngine`: a catalog plus configuration, with the thread RNG and the
//! system clock filled in.
//!
//! The free functions in `genetics` and `decay` take both explicitly; the
//! `*_at` / `*_with_rng` methods here do the same for callers that need
//! reproducible runs.

use crate::catalog::TraitCatalog;
use crate::core::config::EngineConfig;
use crate::decay::{self, BatchOutcome, DecayInput, PetStatsSnapshot, StatUpdate, TimezoneOffset};
use crate::error::{BreedingError, ConfigError, DecayError, GeneticsError};
use crate::genetics::{self, Eligibility, Offspring};
use crate::pet::{OwnerId, Pet};
use chrono::{DateTime, Utc};
use rand::Rng;

#[derive(Debug, Clone)]
pub struct PetEngine<C: TraitCatalog> {
    catalog: C,
    config: EngineConfig,
}

impl<C: TraitCatalog> PetEngine<C> {
    /// Builds an engine after validating `config`.
    pub fn new(catalog: C, config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { catalog, config })
    }

    pub fn with_defaults(catalog: C) -> Self {
        Self {
            catalog,
            config: EngineConfig::default(),
        }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    // =========================================================================
    // Genetics
    // =========================================================================

    pub fn create_pet_with_genetics(
        &self,
        owner_id: OwnerId,
        name: impl Into<String>,
    ) -> Result<Pet, GeneticsError> {
        self.create_pet_with_rng(owner_id, name, Utc::now(), &mut rand::thread_rng())
    }

    pub fn create_pet_with_rng(
        &self,
        owner_id: OwnerId,
        name: impl Into<String>,
        now: DateTime<Utc>,
        rng: &mut impl Rng,
    ) -> Result<Pet, GeneticsError> {
        genetics::create_pet_with_genetics(
            owner_id,
            name,
            now,
            &self.catalog,
            &self.config.genetics,
            rng,
        )
    }

    pub fn check_eligibility(&self, pet1: &Pet, pet2: &Pet) -> Eligibility {
        self.check_eligibility_at(pet1, pet2, Utc::now())
    }

    pub fn check_eligibility_at(&self, pet1: &Pet, pet2: &Pet, now: DateTime<Utc>) -> Eligibility {
        genetics::check_eligibility(pet1, pet2, now, &self.config.breeding)
    }

    /// Breeds without checking eligibility. See [`PetEngine::breed_pets`] for
    /// the checked flow.
    pub fn breed(
        &self,
        parent1: &Pet,
        parent2: &Pet,
        owner_id: OwnerId,
        offspring_name: impl Into<String>,
    ) -> Offspring {
        self.breed_with_rng(
            parent1,
            parent2,
            owner_id,
            offspring_name,
            Utc::now(),
            &mut rand::thread_rng(),
        )
    }

    pub fn breed_with_rng(
        &self,
        parent1: &Pet,
        parent2: &Pet,
        owner_id: OwnerId,
        offspring_name: impl Into<String>,
        now: DateTime<Utc>,
        rng: &mut impl Rng,
    ) -> Offspring {
        genetics::breed(
            parent1,
            parent2,
            owner_id,
            offspring_name,
            now,
            &self.catalog,
            &self.config.genetics,
            rng,
        )
    }

    /// Checks eligibility and the owner ceiling, breeds, and stamps both
    /// parents' `last_bred_at`.
    pub fn breed_pets(
        &self,
        parent1: &mut Pet,
        parent2: &mut Pet,
        owner_id: OwnerId,
        offspring_name: impl Into<String>,
        owner_pet_count: usize,
    ) -> Result<Offspring, BreedingError> {
        self.breed_pets_with_rng(
            parent1,
            parent2,
            owner_id,
            offspring_name,
            owner_pet_count,
            Utc::now(),
            &mut rand::thread_rng(),
        )
    }

    #[allow(clippy::too_many_arguments)]
    pub fn breed_pets_with_rng(
        &self,
        parent1: &mut Pet,
        parent2: &mut Pet,
        owner_id: OwnerId,
        offspring_name: impl Into<String>,
        owner_pet_count: usize,
        now: DateTime<Utc>,
        rng: &mut impl Rng,
    ) -> Result<Offspring, BreedingError> {
        genetics::breed_pets(
            parent1,
            parent2,
            owner_id,
            offspring_name,
            owner_pet_count,
            now,
            &self.catalog,
            &self.config.genetics,
            &self.config.breeding,
            rng,
        )
    }

    // =========================================================================
    // Decay
    // =========================================================================

    pub fn calculate_stat_degradation(
        &self,
        input: &DecayInput,
        tz: TimezoneOffset,
    ) -> Result<StatUpdate, DecayError> {
        self.calculate_stat_degradation_at(input, tz, Utc::now())
    }

    pub fn calculate_stat_degradation_at(
        &self,
        input: &DecayInput,
        tz: TimezoneOffset,
        now: DateTime<Utc>,
    ) -> Result<StatUpdate, DecayError> {
        decay::calculate_stat_degradation(input, tz, now, &self.config.decay)
    }

    /// Runs decay on one pet and writes the result back. Returns whether
    /// anything was applied.
    pub fn tick_pet_at(
        &self,
        pet: &mut Pet,
        tz: TimezoneOffset,
        now: DateTime<Utc>,
    ) -> Result<bool, DecayError> {
        let update = self.calculate_stat_degradation_at(&pet.decay_snapshot().input(), tz, now)?;
        pet.apply_stat_update(&update, now);
        Ok(update.changed)
    }

    pub fn batch_update_pet_stats(
        &self,
        pets: &[PetStatsSnapshot],
        tz: TimezoneOffset,
    ) -> BatchOutcome {
        self.batch_update_pet_stats_at(pets, tz, Utc::now())
    }

    pub fn batch_update_pet_stats_at(
        &self,
        pets: &[PetStatsSnapshot],
        tz: TimezoneOffset,
        now: DateTime<Utc>,
    ) -> BatchOutcome {
        decay::batch_update_pet_stats(pets, tz, now, &self.config.decay, &self.config.batch)
    }
}
