//! Read-only trait catalog lookups.

use super::types::{Rarity, Trait, TraitId, TraitType};
use crate::error::ConfigError;
use std::fs;
use std::path::Path;

/// Lookup interface the genetics engine consumes. Empty results are a normal
/// answer, not an error.
pub trait TraitCatalog {
    fn find_traits_by_type_and_rarity(&self, trait_type: &TraitType, rarity: Rarity) -> Vec<Trait>;

    fn find_traits_by_type(&self, trait_type: &TraitType) -> Vec<Trait>;
}

impl<C: TraitCatalog + ?Sized> TraitCatalog for &C {
    fn find_traits_by_type_and_rarity(&self, trait_type: &TraitType, rarity: Rarity) -> Vec<Trait> {
        (**self).find_traits_by_type_and_rarity(trait_type, rarity)
    }

    fn find_traits_by_type(&self, trait_type: &TraitType) -> Vec<Trait> {
        (**self).find_traits_by_type(trait_type)
    }
}

/// Catalog held in memory, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    traits: Vec<Trait>,
}

impl InMemoryCatalog {
    pub fn new(traits: Vec<Trait>) -> Self {
        let mut catalog = Self::default();
        for t in traits {
            catalog.insert(t);
        }
        catalog
    }

    /// Adds a trait. A trait whose id is already present replaces the old entry.
    pub fn insert(&mut self, t: Trait) {
        match self.traits.iter_mut().find(|existing| existing.id == t.id) {
            Some(existing) => *existing = t,
            None => self.traits.push(t),
        }
    }

    pub fn get(&self, id: TraitId) -> Option<&Trait> {
        self.traits.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.traits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.traits.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Trait> {
        self.traits.iter()
    }

    /// Parses a JSON array of traits.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let traits: Vec<Trait> = serde_json::from_str(json)?;
        Ok(Self::new(traits))
    }

    /// Loads a JSON array of traits from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = Self::from_json_str(&json)?;
        tracing::debug!(path = %path.display(), traits = catalog.len(), "loaded trait catalog");
        Ok(catalog)
    }
}

impl TraitCatalog for InMemoryCatalog {
    fn find_traits_by_type_and_rarity(&self, trait_type: &TraitType, rarity: Rarity) -> Vec<Trait> {
        self.traits
            .iter()
            .filter(|t| &t.trait_type == trait_type && t.rarity == rarity)
            .cloned()
            .collect()
    }

    fn find_traits_by_type(&self, trait_type: &TraitType) -> Vec<Trait> {
        self.traits
            .iter()
            .filter(|t| &t.trait_type == trait_type)
            .cloned()
            .collect()
    }
}
