//! Trait genetics: founding-pet rolls, breeding eligibility and inheritance.

pub mod breeding;
pub mod creation;
pub mod eligibility;
pub mod selection;
pub mod types;

pub use breeding::*;
pub use creation::*;
pub use eligibility::*;
pub use selection::*;
pub use types::*;
