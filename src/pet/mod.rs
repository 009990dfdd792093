//! Pet snapshot: identity, personality, vital stats and trait associations.

pub mod personality;
pub mod stats;
pub mod types;

pub use personality::*;
pub use stats::*;
pub use types::*;
