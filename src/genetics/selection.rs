use crate::catalog::{roll_rarity, Rarity, RarityWeights, Trait, TraitCatalog, TraitId, TraitType};
use rand::Rng;
use std::collections::HashSet;

/// Picks one trait of `trait_type` uniformly, preferring `rarity` and falling
/// back to any rarity of that type. Traits in `exclude` are skipped in both pools.
pub fn pick_trait<C: TraitCatalog + ?Sized>(
    catalog: &C,
    trait_type: &TraitType,
    rarity: Rarity,
    exclude: Option<&HashSet<TraitId>>,
    rng: &mut impl Rng,
) -> Option<Trait> {
    let keep = |t: &Trait| exclude.map_or(true, |used| !used.contains(&t.id));

    let mut pool: Vec<Trait> = catalog
        .find_traits_by_type_and_rarity(trait_type, rarity)
        .into_iter()
        .filter(keep)
        .collect();
    if pool.is_empty() {
        tracing::trace!(%trait_type, %rarity, "no traits at rolled rarity, widening to type");
        pool = catalog
            .find_traits_by_type(trait_type)
            .into_iter()
            .filter(keep)
            .collect();
    }

    if pool.is_empty() {
        return None;
    }
    let index = rng.gen_range(0..pool.len());
    Some(pool.swap_remove(index))
}

/// Rolls a rarity and picks a trait of `trait_type` for it.
pub fn roll_trait<C: TraitCatalog + ?Sized>(
    catalog: &C,
    trait_type: &TraitType,
    weights: &RarityWeights,
    exclude: Option<&HashSet<TraitId>>,
    rng: &mut impl Rng,
) -> Option<Trait> {
    let rarity = roll_rarity(weights, rng);
    pick_trait(catalog, trait_type, rarity, exclude, rng)
}
