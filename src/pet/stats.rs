//! Bounded stat values and the four vital stats.

use crate::core::constants::{
    INITIAL_ENERGY, INITIAL_HAPPINESS, INITIAL_HEALTH, INITIAL_HUNGER, STAT_MAX, STAT_MIN,
};
use crate::core::numeric::clamp_stat;
use crate::error::StatError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An integer in [0, 100]. Personality attributes are stored as these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Stat(u8);

impl Stat {
    pub const MIN: Stat = Stat(STAT_MIN);
    pub const MAX: Stat = Stat(STAT_MAX);

    pub fn new(value: i64) -> Result<Self, StatError> {
        if (STAT_MIN as i64..=STAT_MAX as i64).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(StatError::OutOfRange(value))
        }
    }

    /// Caps an unsigned value at 100.
    pub fn clamped(value: u8) -> Self {
        Self(value.min(STAT_MAX))
    }

    /// Clamps into range and rounds to the nearest integer.
    pub fn saturating(value: f64) -> Self {
        if value.is_nan() {
            return Self::MIN;
        }
        Self(clamp_stat(value).round() as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        self.0 as f64
    }
}

impl TryFrom<i64> for Stat {
    type Error = StatError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Stat> for u8 {
    fn from(stat: Stat) -> Self {
        stat.0
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A vital stat in [0, 100], kept with its fractional part.
///
/// Decay adds fractions of a point per call, so rounding happens on read
/// (`value`) rather than on store. Persisted snapshots keep the fraction.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Vital(f64);

impl Vital {
    pub const MIN: Vital = Vital(STAT_MIN as f64);
    pub const MAX: Vital = Vital(STAT_MAX as f64);

    pub fn new(value: f64) -> Result<Self, StatError> {
        if value.is_finite() && (Self::MIN.0..=Self::MAX.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(StatError::VitalOutOfRange(value))
        }
    }

    /// Clamps into range without rounding. NaN maps to `MIN`; the decay
    /// engine validates its rates so it never produces one.
    pub fn saturating(value: f64) -> Self {
        if value.is_nan() {
            return Self::MIN;
        }
        Self(clamp_stat(value))
    }

    /// Nearest whole point, as shown to players and checked by breeding.
    pub fn value(self) -> u8 {
        self.0.round() as u8
    }

    pub fn as_f64(self) -> f64 {
        self.0
    }

    pub fn saturating_add(self, delta: f64) -> Self {
        Self::saturating(self.0 + delta)
    }
}

impl From<Stat> for Vital {
    fn from(stat: Stat) -> Self {
        Self(stat.as_f64())
    }
}

impl TryFrom<f64> for Vital {
    type Error = StatError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Vital> for f64 {
    fn from(vital: Vital) -> Self {
        vital.0
    }
}

impl fmt::Display for Vital {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value().fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VitalStat {
    Health,
    Hunger,
    Happiness,
    Energy,
}

impl VitalStat {
    pub const ALL: [VitalStat; 4] = [
        VitalStat::Health,
        VitalStat::Hunger,
        VitalStat::Happiness,
        VitalStat::Energy,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            VitalStat::Health => "health",
            VitalStat::Hunger => "hunger",
            VitalStat::Happiness => "happiness",
            VitalStat::Energy => "energy",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VitalStats {
    pub health: Vital,
    pub hunger: Vital,
    pub happiness: Vital,
    pub energy: Vital,
}

impl Default for VitalStats {
    fn default() -> Self {
        Self {
            health: Vital(INITIAL_HEALTH as f64),
            hunger: Vital(INITIAL_HUNGER as f64),
            happiness: Vital(INITIAL_HAPPINESS as f64),
            energy: Vital(INITIAL_ENERGY as f64),
        }
    }
}

impl VitalStats {
    /// Builds vitals from whole points, rejecting anything outside [0, 100].
    pub fn new(health: i64, hunger: i64, happiness: i64, energy: i64) -> Result<Self, StatError> {
        Ok(Self {
            health: Stat::new(health)?.into(),
            hunger: Stat::new(hunger)?.into(),
            happiness: Stat::new(happiness)?.into(),
            energy: Stat::new(energy)?.into(),
        })
    }

    pub fn get(&self, stat: VitalStat) -> Vital {
        match stat {
            VitalStat::Health => self.health,
            VitalStat::Hunger => self.hunger,
            VitalStat::Happiness => self.happiness,
            VitalStat::Energy => self.energy,
        }
    }

    pub fn set(&mut self, stat: VitalStat, value: Vital) {
        match stat {
            VitalStat::Health => self.health = value,
            VitalStat::Hunger => self.hunger = value,
            VitalStat::Happiness => self.happiness = value,
            VitalStat::Energy => self.energy = value,
        }
    }

    /// Applies a signed change and clamps. Feeding, play and items go through here.
    pub fn adjust(&mut self, stat: VitalStat, delta: i32) {
        let updated = self.get(stat).saturating_add(delta as f64);
        self.set(stat, updated);
    }
}
