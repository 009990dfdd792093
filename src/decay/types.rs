//! Decay inputs, outputs and tuning.

use crate::core::constants::*;
use crate::error::{ConfigError, DecayError};
use crate::pet::{PetId, VitalStats};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Per-hour rates and thresholds driving the decay transform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecayRates {
    pub hunger_increase_per_hour: f64,
    pub happiness_decay_per_hour: f64,
    pub energy_recovery_per_hour: f64,
    pub energy_decay_per_hour: f64,
    pub starvation_damage_per_hour: f64,
    /// Health only drops while hunger is strictly above this
    pub starvation_hunger_threshold: f64,
    pub neglect_hunger_threshold: f64,
    pub neglect_happiness_threshold: f64,
    /// Calls closer than this to the last update are no-ops
    pub min_interval_seconds: i64,
    pub grace_period_hours: i64,
    pub grace_multiplier: f64,
    /// Local sleep window, `[start, end)`
    pub sleep_start_hour: u32,
    pub sleep_end_hour: u32,
}

impl Default for DecayRates {
    fn default() -> Self {
        Self {
            hunger_increase_per_hour: HUNGER_INCREASE_PER_HOUR,
            happiness_decay_per_hour: HAPPINESS_DECAY_PER_HOUR,
            energy_recovery_per_hour: ENERGY_RECOVERY_PER_HOUR,
            energy_decay_per_hour: ENERGY_DECAY_PER_HOUR,
            starvation_damage_per_hour: STARVATION_DAMAGE_PER_HOUR,
            starvation_hunger_threshold: STARVATION_HUNGER_THRESHOLD,
            neglect_hunger_threshold: NEGLECT_HUNGER_THRESHOLD,
            neglect_happiness_threshold: NEGLECT_HAPPINESS_THRESHOLD,
            min_interval_seconds: MIN_DECAY_INTERVAL_SECONDS,
            grace_period_hours: NEGLECT_GRACE_HOURS,
            grace_multiplier: NEGLECT_GRACE_MULTIPLIER,
            sleep_start_hour: SLEEP_START_HOUR,
            sleep_end_hour: SLEEP_END_HOUR,
        }
    }
}

impl DecayRates {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let rates = [
            ("hunger_increase_per_hour", self.hunger_increase_per_hour),
            ("happiness_decay_per_hour", self.happiness_decay_per_hour),
            ("energy_recovery_per_hour", self.energy_recovery_per_hour),
            ("energy_decay_per_hour", self.energy_decay_per_hour),
            ("starvation_damage_per_hour", self.starvation_damage_per_hour),
            ("grace_multiplier", self.grace_multiplier),
        ];
        for (name, value) in rates {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }
        let thresholds = [
            ("starvation_hunger_threshold", self.starvation_hunger_threshold),
            ("neglect_hunger_threshold", self.neglect_hunger_threshold),
            ("neglect_happiness_threshold", self.neglect_happiness_threshold),
        ];
        for (name, value) in thresholds {
            if !value.is_finite() {
                return Err(ConfigError::Invalid(format!("{name} must be a number, got {value}")));
            }
        }
        if !(0..=MAX_DECAY_INTERVAL_SECONDS).contains(&self.min_interval_seconds) {
            return Err(ConfigError::Invalid(format!(
                "min_interval_seconds must be within 0..={MAX_DECAY_INTERVAL_SECONDS}, got {}",
                self.min_interval_seconds
            )));
        }
        if !(0..=MAX_GRACE_PERIOD_HOURS).contains(&self.grace_period_hours) {
            return Err(ConfigError::Invalid(format!(
                "grace_period_hours must be within 0..={MAX_GRACE_PERIOD_HOURS}, got {}",
                self.grace_period_hours
            )));
        }
        if self.sleep_start_hour > 23 || self.sleep_end_hour > 24 {
            return Err(ConfigError::Invalid(format!(
                "sleep window {}..{} is not a valid hour range",
                self.sleep_start_hour, self.sleep_end_hour
            )));
        }
        Ok(())
    }

    /// Whether a local hour of day falls in the sleep window. A window whose
    /// start is after its end wraps past midnight.
    pub fn is_sleep_hour(&self, hour: u32) -> bool {
        if self.sleep_start_hour <= self.sleep_end_hour {
            hour >= self.sleep_start_hour && hour < self.sleep_end_hour
        } else {
            hour >= self.sleep_start_hour || hour < self.sleep_end_hour
        }
    }
}

/// Offset from UTC in hours used to find the pet owner's local hour.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct TimezoneOffset(f64);

impl TimezoneOffset {
    pub const UTC: TimezoneOffset = TimezoneOffset(0.0);

    pub fn new(hours: f64) -> Result<Self, DecayError> {
        if hours.is_finite() && hours.abs() <= MAX_TIMEZONE_OFFSET_HOURS {
            Ok(Self(hours))
        } else {
            Err(DecayError::InvalidTimezoneOffset(hours))
        }
    }

    pub fn hours(self) -> f64 {
        self.0
    }

    pub fn seconds(self) -> i64 {
        (self.0 * 3600.0).round() as i64
    }
}

impl TryFrom<f64> for TimezoneOffset {
    type Error = DecayError;

    fn try_from(hours: f64) -> Result<Self, Self::Error> {
        Self::new(hours)
    }
}

impl From<TimezoneOffset> for f64 {
    fn from(offset: TimezoneOffset) -> Self {
        offset.0
    }
}

/// Day/night regime for energy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnergyRegime {
    Sleep,
    Awake,
}

/// Everything the decay transform reads about one pet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecayInput {
    pub stats: VitalStats,
    pub last_update: DateTime<Utc>,
    #[serde(default)]
    pub last_interaction: Option<DateTime<Utc>>,
    #[serde(default)]
    pub neglect_started_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_critical: bool,
}

impl DecayInput {
    pub fn new(stats: VitalStats, last_update: DateTime<Utc>) -> Self {
        Self {
            stats,
            last_update,
            last_interaction: None,
            neglect_started_at: None,
            is_critical: false,
        }
    }
}

/// Batch descriptor: a decay input tagged with the pet it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PetStatsSnapshot {
    pub id: PetId,
    pub stats: VitalStats,
    pub last_update: DateTime<Utc>,
    #[serde(default)]
    pub last_interaction: Option<DateTime<Utc>>,
    #[serde(default)]
    pub neglect_started_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_critical: bool,
}

impl PetStatsSnapshot {
    pub fn input(&self) -> DecayInput {
        DecayInput {
            stats: self.stats,
            last_update: self.last_update,
            last_interaction: self.last_interaction,
            neglect_started_at: self.neglect_started_at,
            is_critical: self.is_critical,
        }
    }
}

/// Result of one decay evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatUpdate {
    pub stats: VitalStats,
    pub is_critical: bool,
    pub neglect_started_at: Option<DateTime<Utc>>,
    /// False when the call hit the no-op guard; callers should then keep
    /// their stored last-update timestamp.
    pub changed: bool,
}

impl StatUpdate {
    pub fn unchanged(input: &DecayInput) -> Self {
        Self {
            stats: input.stats,
            is_critical: input.is_critical,
            neglect_started_at: input.neglect_started_at,
            changed: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Batches with at least this many pets run on the rayon pool
    pub parallel_threshold: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: PARALLEL_BATCH_THRESHOLD,
        }
    }
}
