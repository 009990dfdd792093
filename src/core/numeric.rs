//! Small numeric helpers shared by the genetics and decay engines.

use super::constants::{STAT_MAX, STAT_MIN};
use rand::Rng;

/// Clamps a fractional stat value into the [0, 100] range.
pub fn clamp_stat(value: f64) -> f64 {
    value.clamp(STAT_MIN as f64, STAT_MAX as f64)
}

/// Clamps an integer stat value into the [0, 100] range.
pub fn clamp_stat_int(value: i32) -> u8 {
    value.clamp(STAT_MIN as i32, STAT_MAX as i32) as u8
}

/// Draws a uniform integer in `[-bound, bound]`.
pub fn roll_variance(bound: i32, rng: &mut impl Rng) -> i32 {
    let bound = bound.abs();
    rng.gen_range(-bound..=bound)
}

/// Averages two parent values (rounded down), adds a fresh variance roll and clamps.
pub fn blend_with_variance(a: u8, b: u8, bound: i32, rng: &mut impl Rng) -> u8 {
    let midpoint = (a as i32 + b as i32) / 2;
    clamp_stat_int(midpoint + roll_variance(bound, rng))
}
