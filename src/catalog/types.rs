use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Rarity weight class for catalog traits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common = 0,
    Uncommon = 1,
    Rare = 2,
    Legendary = 3,
}

impl Rarity {
    /// All rarities from most to least common
    pub const ALL: [Rarity; 4] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Legendary,
    ];

    /// Returns the display name for this rarity tier.
    pub fn name(&self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Uncommon => "uncommon",
            Rarity::Rare => "rare",
            Rarity::Legendary => "legendary",
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Trait category. The well-known categories get their own variants; anything
/// else the catalog carries is kept by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TraitType {
    Visual,
    Personality,
    Skill,
    Custom(String),
}

impl TraitType {
    pub fn as_str(&self) -> &str {
        match self {
            TraitType::Visual => "visual",
            TraitType::Personality => "personality",
            TraitType::Skill => "skill",
            TraitType::Custom(name) => name,
        }
    }
}

impl From<String> for TraitType {
    fn from(name: String) -> Self {
        match name.as_str() {
            "visual" => TraitType::Visual,
            "personality" => TraitType::Personality,
            "skill" => TraitType::Skill,
            _ => TraitType::Custom(name),
        }
    }
}

impl From<&str> for TraitType {
    fn from(name: &str) -> Self {
        TraitType::from(name.to_string())
    }
}

impl From<TraitType> for String {
    fn from(trait_type: TraitType) -> Self {
        trait_type.as_str().to_string()
    }
}

impl fmt::Display for TraitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TraitId(pub Uuid);

impl TraitId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TraitId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TraitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A read-only catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trait {
    pub id: TraitId,
    pub name: String,
    #[serde(rename = "type")]
    pub trait_type: TraitType,
    pub rarity: Rarity,
    #[serde(default)]
    pub description: String,
}

impl Trait {
    pub fn new(name: impl Into<String>, trait_type: TraitType, rarity: Rarity) -> Self {
        Self {
            id: TraitId::new(),
            name: name.into(),
            trait_type,
            rarity,
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rarity_ordering() {
        assert!(Rarity::Common < Rarity::Uncommon);
        assert!(Rarity::Uncommon < Rarity::Rare);
        assert!(Rarity::Rare < Rarity::Legendary);
    }

    #[test]
    fn test_trait_type_round_trips_known_names() {
        for name in ["visual", "personality", "skill"] {
            let tt = TraitType::from(name);
            assert!(!matches!(tt, TraitType::Custom(_)), "{name} should be a known type");
            assert_eq!(tt.as_str(), name);
        }
    }

    #[test]
    fn test_trait_type_keeps_custom_names() {
        let tt = TraitType::from("aura");
        assert_eq!(tt, TraitType::Custom("aura".to_string()));
        assert_eq!(tt.to_string(), "aura");
    }

    #[test]
    fn test_trait_deserializes_from_catalog_json() {
        let json = r#"{
            "id": "2f1b3c9e-6a38-4c59-9d4b-1f9b2b7a4e10",
            "name": "Spotted Coat",
            "type": "visual",
            "rarity": "uncommon"
        }"#;
        let t: Trait = serde_json::from_str(json).unwrap();
        assert_eq!(t.name, "Spotted Coat");
        assert_eq!(t.trait_type, TraitType::Visual);
        assert_eq!(t.rarity, Rarity::Uncommon);
        assert!(t.description.is_empty());
    }
}
