//! Petsim - virtual companion simulation engine
//!
//! Two pure engines over a shared `Pet` snapshot: trait genetics (founding
//! rolls, breeding eligibility, inheritance with mutation) and time-based
//! stat decay with neglect tracking. Persistence, transport and scheduling
//! belong to the host; every operation takes its inputs and "now" by value
//! and returns new values.

pub mod catalog;
pub mod core;
pub mod decay;
pub mod engine;
pub mod error;
pub mod genetics;
pub mod pet;

pub use catalog::{InMemoryCatalog, Rarity, RarityWeights, Trait, TraitCatalog, TraitId, TraitType};
pub use crate::core::config::EngineConfig;
pub use decay::{
    batch_update_pet_stats, calculate_stat_degradation, BatchOutcome, DecayInput, DecayRates,
    PetStatsSnapshot, StatUpdate, TimezoneOffset,
};
pub use engine::PetEngine;
pub use error::{PetsimError, Result};
pub use genetics::{
    breed, breed_pets, check_eligibility, create_pet_with_genetics, BreedingReport, BreedingRules,
    Eligibility, GeneticsConfig, Offspring,
};
pub use pet::{InheritanceSource, OwnerId, Personality, PersonalityAttribute, Pet, PetId, PetTrait, Stat, Vital, VitalStats};
