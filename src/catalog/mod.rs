//! Trait catalog: trait types, rarity sampling and the read-only lookup interface.

pub mod rarity;
pub mod store;
pub mod types;

pub use rarity::*;
pub use store::*;
pub use types::*;
