//! Stat decay and neglect tracking.
//!
//! A pure transform from a pet's vitals and timestamps to updated vitals. The
//! caller supplies "now" and persists the result.

pub mod batch;
pub mod logic;
pub mod types;

pub use batch::*;
pub use logic::*;
pub use types::*;
