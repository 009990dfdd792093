//! Batch decay: one shared "now" and timezone applied to many independent pets.

use super::logic::calculate_stat_degradation;
use super::types::{BatchConfig, DecayRates, PetStatsSnapshot, StatUpdate, TimezoneOffset};
use crate::error::DecayError;
use crate::pet::PetId;
use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PetStatUpdate {
    pub id: PetId,
    pub updates: StatUpdate,
}

/// Per-pet results in input order, split into accepted and rejected descriptors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchOutcome {
    pub updated: Vec<PetStatUpdate>,
    pub rejected: Vec<(PetId, DecayError)>,
}

impl BatchOutcome {
    pub fn len(&self) -> usize {
        self.updated.len() + self.rejected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, id: PetId) -> Option<&StatUpdate> {
        self.updated.iter().find(|u| u.id == id).map(|u| &u.updates)
    }
}

/// Decays every snapshot under the same `now` and timezone. Pets share no
/// state, so large batches are mapped on the rayon pool.
pub fn batch_update_pet_stats(
    pets: &[PetStatsSnapshot],
    tz: TimezoneOffset,
    now: DateTime<Utc>,
    rates: &DecayRates,
    config: &BatchConfig,
) -> BatchOutcome {
    let evaluate = |pet: &PetStatsSnapshot| {
        (
            pet.id,
            calculate_stat_degradation(&pet.input(), tz, now, rates),
        )
    };

    let results: Vec<(PetId, Result<StatUpdate, DecayError>)> =
        if pets.len() >= config.parallel_threshold {
            pets.par_iter().map(evaluate).collect()
        } else {
            pets.iter().map(evaluate).collect()
        };

    let mut outcome = BatchOutcome::default();
    for (id, result) in results {
        match result {
            Ok(updates) => outcome.updated.push(PetStatUpdate { id, updates }),
            Err(err) => {
                tracing::warn!(pet_id = %id, error = %err, "skipping pet in stat batch");
                outcome.rejected.push((id, err));
            }
        }
    }

    tracing::debug!(
        pets = pets.len(),
        updated = outcome.updated.len(),
        rejected = outcome.rejected.len(),
        "batch stat update finished"
    );
    outcome
}
