//! Integration test: catalog -> founding pets -> multi-generation breeding
//!
//! Loads a catalog from JSON, founds pets, then breeds several generations
//! and checks the lineage, provenance and uniqueness guarantees end to end.

use chrono::{Duration, Utc};
use petsim::catalog::{InMemoryCatalog, Rarity, TraitCatalog, TraitId, TraitType};
use petsim::genetics::{breed, create_pet_with_genetics, roll_initial_traits, GeneticsConfig};
use petsim::pet::{InheritanceSource, OwnerId, Pet};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn catalog_json() -> String {
    let mut entries = Vec::new();
    let kinds = [("visual", 6), ("personality", 5), ("skill", 3)];
    for (kind, per_rarity) in kinds {
        for rarity in ["common", "uncommon", "rare", "legendary"] {
            for i in 0..per_rarity {
                entries.push(format!(
                    r#"{{"id":"{}","name":"{kind} {rarity} {i}","type":"{kind}","rarity":"{rarity}"}}"#,
                    TraitId::new()
                ));
            }
        }
    }
    format!("[{}]", entries.join(","))
}

fn load_catalog() -> InMemoryCatalog {
    InMemoryCatalog::from_json_str(&catalog_json()).expect("catalog JSON should parse")
}

// =========================================================================
// Catalog loading
// =========================================================================

#[test]
fn test_catalog_json_lookup() {
    let catalog = load_catalog();
    assert_eq!(catalog.len(), (6 + 5 + 3) * 4);
    assert_eq!(catalog.find_traits_by_type(&TraitType::Visual).len(), 24);
    let legendary_skills =
        catalog.find_traits_by_type_and_rarity(&TraitType::Skill, Rarity::Legendary);
    assert_eq!(legendary_skills.len(), 3);
    assert!(legendary_skills.iter().all(|t| t.rarity == Rarity::Legendary));
    assert!(catalog
        .find_traits_by_type(&TraitType::Custom("aura".into()))
        .is_empty());
}

#[test]
fn test_catalog_json_rejects_unknown_rarity() {
    let json = format!(
        r#"[{{"id":"{}","name":"Odd","type":"visual","rarity":"mythic"}}]"#,
        TraitId::new()
    );
    assert!(InMemoryCatalog::from_json_str(&json).is_err());
}

// =========================================================================
// Founding pets
// =========================================================================

#[test]
fn test_founding_pets_follow_configured_counts() {
    let catalog = load_catalog();
    let config = GeneticsConfig {
        initial_trait_counts: [
            (TraitType::Visual, 4),
            (TraitType::Personality, 3),
            (TraitType::Skill, 2),
        ]
        .into_iter()
        .collect(),
        ..Default::default()
    };
    let mut rng = ChaCha8Rng::seed_from_u64(100);
    for _ in 0..100 {
        let traits = roll_initial_traits(&catalog, &config, &mut rng).unwrap();
        assert_eq!(traits.len(), 9);
        let mut ids: Vec<TraitId> = traits.iter().map(|t| t.id()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 9, "initial traits must be distinct");
    }
}

#[test]
fn test_founding_rarity_distribution_tracks_weights() {
    let catalog = load_catalog();
    let config = GeneticsConfig {
        initial_trait_counts: [(TraitType::Visual, 1)].into_iter().collect(),
        ..Default::default()
    };
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let trials = 5000;
    let mut legendary = 0;
    let mut common = 0;
    for _ in 0..trials {
        let traits = roll_initial_traits(&catalog, &config, &mut rng).unwrap();
        match traits[0].definition.rarity {
            Rarity::Common => common += 1,
            Rarity::Legendary => legendary += 1,
            _ => {}
        }
    }
    // 60% and 5% with wide bands
    assert!((2800..=3200).contains(&common), "common {common}/{trials}");
    assert!((170..=340).contains(&legendary), "legendary {legendary}/{trials}");
}

// =========================================================================
// Breeding across generations
// =========================================================================

fn founders(catalog: &InMemoryCatalog, rng: &mut ChaCha8Rng) -> (Pet, Pet) {
    let owner = OwnerId::new();
    let born = Utc::now() - Duration::days(30);
    let config = GeneticsConfig::default();
    let a = create_pet_with_genetics(owner, "Founder A", born, catalog, &config, rng).unwrap();
    let b = create_pet_with_genetics(owner, "Founder B", born, catalog, &config, rng).unwrap();
    (a, b)
}

#[test]
fn test_lineage_generations_increase() {
    let catalog = load_catalog();
    let config = GeneticsConfig::default();
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let (a, b) = founders(&catalog, &mut rng);
    let now = Utc::now();

    let child = breed(&a, &b, a.owner_id, "Kit", now, &catalog, &config, &mut rng).pet;
    assert_eq!(child.generation, 2);

    let grandchild = breed(&child, &a, a.owner_id, "Grandkit", now, &catalog, &config, &mut rng).pet;
    assert_eq!(grandchild.generation, 3);
    assert_eq!(grandchild.parent1_id, Some(child.id));
    assert_eq!(grandchild.parent2_id, Some(a.id));

    let great = breed(&b, &grandchild, a.owner_id, "Great", now, &catalog, &config, &mut rng).pet;
    assert_eq!(great.generation, 4);
}

#[test]
fn test_offspring_provenance_and_uniqueness() {
    let catalog = load_catalog();
    let config = GeneticsConfig::default();
    let mut rng = ChaCha8Rng::seed_from_u64(55);
    let (a, b) = founders(&catalog, &mut rng);

    for _ in 0..200 {
        let offspring = breed(&a, &b, a.owner_id, "Kit", Utc::now(), &catalog, &config, &mut rng);
        let child = &offspring.pet;
        assert!(child.has_unique_traits());

        for pet_trait in &child.traits {
            match pet_trait.source {
                InheritanceSource::Parent1 => assert!(a.has_trait(pet_trait.id())),
                InheritanceSource::Parent2 => assert!(b.has_trait(pet_trait.id())),
                InheritanceSource::Mutation => {
                    assert!(catalog.get(pet_trait.id()).is_some())
                }
                InheritanceSource::Initial => panic!("offspring traits are never initial"),
            }
        }

        // Every filled slot produced exactly one trait
        let filled = offspring
            .report
            .slots
            .iter()
            .filter(|s| s.outcome.trait_id().is_some())
            .count();
        assert_eq!(filled, child.traits.len());
        assert_eq!(
            offspring.report.slot_count(),
            filled + offspring.report.exhausted()
        );
    }
}

#[test]
fn test_offspring_slot_counts_per_type() {
    let catalog = load_catalog();
    let config = GeneticsConfig::default();
    let mut rng = ChaCha8Rng::seed_from_u64(56);
    let (a, b) = founders(&catalog, &mut rng);

    let offspring = breed(&a, &b, a.owner_id, "Kit", Utc::now(), &catalog, &config, &mut rng);
    // Founders carry 4 visual and 3 personality traits each
    let visual_slots = offspring
        .report
        .slots
        .iter()
        .filter(|s| s.trait_type == TraitType::Visual)
        .count();
    let personality_slots = offspring
        .report
        .slots
        .iter()
        .filter(|s| s.trait_type == TraitType::Personality)
        .count();
    assert_eq!(visual_slots, 4);
    assert_eq!(personality_slots, 3);
    assert!(!offspring
        .report
        .slots
        .iter()
        .any(|s| s.trait_type == TraitType::Skill));
}

#[test]
fn test_mutation_fractions_over_two_thousand_breeds() {
    let catalog = load_catalog();
    let config = GeneticsConfig::default();
    let mut rng = ChaCha8Rng::seed_from_u64(9001);
    let (a, b) = founders(&catalog, &mut rng);

    let trials = 2000;
    let (mut slots, mut rolled, mut mutated) = (0, 0, 0);
    for _ in 0..trials {
        let offspring = breed(&a, &b, a.owner_id, "Kit", Utc::now(), &catalog, &config, &mut rng);
        slots += offspring.report.slot_count();
        rolled += offspring.report.mutation_rolls();
        mutated += offspring.report.mutated();
    }
    // Founders carry 4 visual and 3 personality traits each
    assert_eq!(slots, trials * 7);

    // Share of slots where the 15% mutation roll fired
    let roll_rate = rolled as f64 / slots as f64;
    assert!((0.135..=0.165).contains(&roll_rate), "roll rate {roll_rate} over {slots} slots");

    // Share of slots that ended up holding a mutated trait
    let mutated_rate = mutated as f64 / slots as f64;
    assert!(mutated <= rolled);
    assert!((0.10..=0.165).contains(&mutated_rate), "mutated rate {mutated_rate}");
}

#[test]
fn test_offspring_serializes_with_provenance() {
    let catalog = load_catalog();
    let mut rng = ChaCha8Rng::seed_from_u64(77);
    let (a, b) = founders(&catalog, &mut rng);
    let child = breed(
        &a,
        &b,
        a.owner_id,
        "Kit",
        Utc::now(),
        &catalog,
        &GeneticsConfig::default(),
        &mut rng,
    )
    .pet;

    let json = serde_json::to_value(&child).unwrap();
    assert_eq!(json["generation"], 2);
    let first = &json["traits"][0];
    let source = first["source"].as_str().unwrap();
    assert!(["parent1", "parent2", "mutation"].contains(&source));
    assert!(first["trait"]["type"].is_string());

    let restored: Pet = serde_json::from_value(json).unwrap();
    assert_eq!(restored, child);
}
