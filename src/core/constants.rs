// Stat bounds
pub const STAT_MIN: u8 = 0;
pub const STAT_MAX: u8 = 100;

// Starting vitals for a freshly created or hatched pet
pub const INITIAL_HEALTH: u8 = 100;
pub const INITIAL_HUNGER: u8 = 0;
pub const INITIAL_HAPPINESS: u8 = 100;
pub const INITIAL_ENERGY: u8 = 100;

// Rarity weights (must sum to 1.0)
pub const RARITY_WEIGHT_COMMON: f64 = 0.60;
pub const RARITY_WEIGHT_UNCOMMON: f64 = 0.25;
pub const RARITY_WEIGHT_RARE: f64 = 0.10;
pub const RARITY_WEIGHT_LEGENDARY: f64 = 0.05;

// Initial trait counts per type
pub const INITIAL_VISUAL_TRAITS: u32 = 4;
pub const INITIAL_PERSONALITY_TRAITS: u32 = 3;
pub const INITIAL_SKILL_TRAITS: u32 = 0;

// Breeding
pub const MUTATION_CHANCE: f64 = 0.15;
pub const PERSONALITY_VARIANCE: i32 = 15;
pub const BREEDING_MIN_AGE_DAYS: i64 = 7;
pub const BREEDING_MIN_HEALTH: u8 = 50;
pub const BREEDING_COOLDOWN_DAYS: i64 = 7;
/// Upper bound for the age and cooldown rules (a century)
pub const MAX_BREEDING_RULE_DAYS: i64 = 36_500;

// Decay rates (points per hour)
pub const HUNGER_INCREASE_PER_HOUR: f64 = 1.0;
pub const HAPPINESS_DECAY_PER_HOUR: f64 = 0.5;
pub const ENERGY_RECOVERY_PER_HOUR: f64 = 5.0;
pub const ENERGY_DECAY_PER_HOUR: f64 = 0.3;
pub const STARVATION_DAMAGE_PER_HOUR: f64 = 2.0;

// Decay thresholds
pub const STARVATION_HUNGER_THRESHOLD: f64 = 80.0;
pub const NEGLECT_HUNGER_THRESHOLD: f64 = 50.0;
pub const NEGLECT_HAPPINESS_THRESHOLD: f64 = 50.0;
pub const MIN_DECAY_INTERVAL_SECONDS: i64 = 60;

// Grace period at the start of a neglect episode
pub const NEGLECT_GRACE_HOURS: i64 = 24;
pub const NEGLECT_GRACE_MULTIPLIER: f64 = 0.5;
pub const MAX_GRACE_PERIOD_HOURS: i64 = 24 * 36_500;
pub const MAX_DECAY_INTERVAL_SECONDS: i64 = 24 * 60 * 60;

// Local sleep window [start, end) in hours
pub const SLEEP_START_HOUR: u32 = 0;
pub const SLEEP_END_HOUR: u32 = 6;

// Timezone offsets accepted by the decay engine, in hours
pub const MAX_TIMEZONE_OFFSET_HOURS: f64 = 14.0;

// Batches at or above this size are decayed on the rayon pool
pub const PARALLEL_BATCH_THRESHOLD: usize = 256;
