use super::personality::Personality;
use super::stats::VitalStats;
use crate::catalog::{Trait, TraitId, TraitType};
use crate::decay::{PetStatsSnapshot, StatUpdate};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PetId(pub Uuid);

impl PetId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PetId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnerId(pub Uuid);

impl OwnerId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for OwnerId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Where a pet got one of its traits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InheritanceSource {
    Initial,
    Parent1,
    Parent2,
    Mutation,
}

impl InheritanceSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            InheritanceSource::Initial => "initial",
            InheritanceSource::Parent1 => "parent1",
            InheritanceSource::Parent2 => "parent2",
            InheritanceSource::Mutation => "mutation",
        }
    }
}

/// A pet-trait association.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetTrait {
    #[serde(rename = "trait")]
    pub definition: Trait,
    pub source: InheritanceSource,
}

impl PetTrait {
    pub fn new(definition: Trait, source: InheritanceSource) -> Self {
        Self { definition, source }
    }

    pub fn id(&self) -> TraitId {
        self.definition.id
    }

    pub fn trait_type(&self) -> &TraitType {
        &self.definition.trait_type
    }
}

/// Pet snapshot shared by both engines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pet {
    pub id: PetId,
    pub owner_id: OwnerId,
    pub name: String,
    pub generation: u32,
    pub personality: Personality,
    pub stats: VitalStats,
    #[serde(default)]
    pub is_critical: bool,
    pub created_at: DateTime<Utc>,
    pub last_stats_update: DateTime<Utc>,
    #[serde(default)]
    pub neglect_started_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_fed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_interaction_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_bred_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub parent1_id: Option<PetId>,
    #[serde(default)]
    pub parent2_id: Option<PetId>,
    #[serde(default)]
    pub traits: Vec<PetTrait>,
}

impl Pet {
    /// A generation-1 pet with fresh vitals, a neutral personality and no traits.
    pub fn new(owner_id: OwnerId, name: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: PetId::new(),
            owner_id,
            name: name.into(),
            generation: 1,
            personality: Personality::default(),
            stats: VitalStats::default(),
            is_critical: false,
            created_at: now,
            last_stats_update: now,
            neglect_started_at: None,
            last_fed_at: None,
            last_interaction_at: None,
            last_bred_at: None,
            parent1_id: None,
            parent2_id: None,
            traits: Vec::new(),
        }
    }

    pub fn traits_of_type<'a>(&'a self, trait_type: &'a TraitType) -> impl Iterator<Item = &'a PetTrait> {
        self.traits.iter().filter(move |t| t.trait_type() == trait_type)
    }

    pub fn has_trait(&self, id: TraitId) -> bool {
        self.traits.iter().any(|t| t.id() == id)
    }

    /// True when no trait id appears twice.
    pub fn has_unique_traits(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.traits.len());
        self.traits.iter().all(|t| seen.insert(t.id()))
    }

    /// Descriptor for the decay engine.
    pub fn decay_snapshot(&self) -> PetStatsSnapshot {
        PetStatsSnapshot {
            id: self.id,
            stats: self.stats,
            last_update: self.last_stats_update,
            last_interaction: self.last_interaction_at,
            neglect_started_at: self.neglect_started_at,
            is_critical: self.is_critical,
        }
    }

    /// Writes a decay result back. `now` becomes the new stats timestamp unless
    /// the update was a no-op.
    pub fn apply_stat_update(&mut self, update: &StatUpdate, now: DateTime<Utc>) {
        self.stats = update.stats;
        self.is_critical = update.is_critical;
        self.neglect_started_at = update.neglect_started_at;
        if update.changed {
            self.last_stats_update = now;
        }
    }
}
