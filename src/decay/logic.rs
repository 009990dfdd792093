//! The stat decay transform and neglect state machine.
//!
//! Hunger, energy and starvation damage run on the time since the last stats
//! update. Happiness runs on the time since the last interaction, so an
//! ignored pet loses happiness faster the longer it is ignored. The energy
//! regime is decided once per call from the current local hour.
//!
//! Vitals are stored unrounded, so ten ten-minute ticks land where one
//! hundred-minute tick would.

use super::types::{DecayInput, DecayRates, EnergyRegime, StatUpdate, TimezoneOffset};
use crate::error::DecayError;
use crate::pet::{Vital, VitalStats};
use chrono::{DateTime, Duration, Timelike, Utc};

const MILLIS_PER_SECOND: i64 = 1_000;
const MILLIS_PER_HOUR: i64 = 3_600_000;

/// Fractional hours from `earlier` to `later`, zero if `earlier` is later.
pub fn hours_between(earlier: DateTime<Utc>, later: DateTime<Utc>) -> f64 {
    let millis = later.signed_duration_since(earlier).num_milliseconds();
    millis.max(0) as f64 / MILLIS_PER_HOUR as f64
}

/// Penalty multiplier for this call: the grace multiplier while the current
/// neglect episode is younger than the grace period, 1.0 otherwise.
pub fn grace_multiplier(
    neglect_started_at: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
    rates: &DecayRates,
) -> f64 {
    let grace_millis = rates.grace_period_hours.saturating_mul(MILLIS_PER_HOUR);
    match neglect_started_at {
        Some(started) if now.signed_duration_since(started).num_milliseconds() < grace_millis => {
            rates.grace_multiplier
        }
        _ => 1.0,
    }
}

/// Classifies the owner's local hour at `now`.
pub fn energy_regime(now: DateTime<Utc>, tz: TimezoneOffset, rates: &DecayRates) -> EnergyRegime {
    let local = now
        .checked_add_signed(Duration::seconds(tz.seconds()))
        .unwrap_or(now);
    if rates.is_sleep_hour(local.hour()) {
        EnergyRegime::Sleep
    } else {
        EnergyRegime::Awake
    }
}

/// Care predicate failure: too hungry or too unhappy.
pub fn is_neglected(stats: &VitalStats, rates: &DecayRates) -> bool {
    stats.hunger.as_f64() > rates.neglect_hunger_threshold
        || stats.happiness.as_f64() < rates.neglect_happiness_threshold
}

/// Applies elapsed-time decay to one pet's vitals.
///
/// Rejects rates that fail [`DecayRates::validate`]. Returns the input
/// unchanged when less than the minimum interval has passed, and only pins
/// health at zero for a pet that is already critical.
pub fn calculate_stat_degradation(
    input: &DecayInput,
    tz: TimezoneOffset,
    now: DateTime<Utc>,
    rates: &DecayRates,
) -> Result<StatUpdate, DecayError> {
    rates
        .validate()
        .map_err(|err| DecayError::InvalidRates(err.to_string()))?;

    if input.last_update > now {
        return Err(DecayError::LastUpdateInFuture {
            last_update: input.last_update,
            now,
        });
    }

    let elapsed_millis = now.signed_duration_since(input.last_update).num_milliseconds();
    if elapsed_millis < rates.min_interval_seconds.saturating_mul(MILLIS_PER_SECOND) {
        return Ok(StatUpdate::unchanged(input));
    }

    if input.is_critical {
        let mut stats = input.stats;
        stats.health = Vital::MIN;
        return Ok(StatUpdate {
            stats,
            is_critical: true,
            neglect_started_at: input.neglect_started_at,
            changed: true,
        });
    }

    let hours = hours_between(input.last_update, now);
    let multiplier = grace_multiplier(input.neglect_started_at, now, rates);
    let current = input.stats;

    let hunger = current
        .hunger
        .saturating_add(rates.hunger_increase_per_hour * multiplier * hours);

    let since_interaction = hours_between(input.last_interaction.unwrap_or(input.last_update), now);
    let happiness = current
        .happiness
        .saturating_add(-rates.happiness_decay_per_hour * multiplier * since_interaction);

    let energy_delta = match energy_regime(now, tz, rates) {
        EnergyRegime::Sleep => rates.energy_recovery_per_hour * hours,
        EnergyRegime::Awake => -rates.energy_decay_per_hour * hours,
    };
    let energy = current.energy.saturating_add(energy_delta);

    let health = if hunger.as_f64() > rates.starvation_hunger_threshold {
        current
            .health
            .saturating_add(-rates.starvation_damage_per_hour * multiplier * hours)
    } else {
        current.health
    };

    // Critical once health shows as zero; from then on it is held at exactly zero
    let is_critical = health.value() == Vital::MIN.value();
    let health = if is_critical { Vital::MIN } else { health };

    let stats = VitalStats {
        health,
        hunger,
        happiness,
        energy,
    };

    if is_critical {
        tracing::info!(hours, hunger = hunger.as_f64(), "pet entered critical state");
    }

    let neglect_started_at = match (is_neglected(&stats, rates), input.neglect_started_at) {
        (true, None) => {
            tracing::debug!(
                hunger = hunger.as_f64(),
                happiness = happiness.as_f64(),
                "neglect episode started"
            );
            Some(now)
        }
        (false, Some(started)) => {
            tracing::debug!(since = %started, "neglect episode cleared");
            None
        }
        (_, unchanged) => unchanged,
    };

    Ok(StatUpdate {
        stats,
        is_critical,
        neglect_started_at,
        changed: true,
    })
}
