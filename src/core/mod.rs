//! Shared constants, numeric helpers and engine configuration.

pub mod config;
pub mod constants;
pub mod numeric;

pub use config::*;
pub use constants::*;
pub use numeric::*;
