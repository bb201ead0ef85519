//! Simulation constants and tuning parameters.
//!
//! These are the defaults used by `SimConfig`; systems read the values
//! from the configuration, never from here directly.

// --- Economy ---

/// Gold the player starts with.
pub const STARTING_GOLD: u32 = 100;

/// Gold deducted for each tower placement.
pub const TOWER_COST: u32 = 50;

/// Base health the player starts with. One point is lost per leaked enemy.
pub const STARTING_BASE_HEALTH: i32 = 20;

// --- Spawning ---

/// Probability of spawning one enemy per tick.
pub const ENEMY_SPAWN_CHANCE: f64 = 0.02;

// --- Enemies ---

/// Enemy travel distance per tick.
pub const ENEMY_SPEED: f64 = 1.0;

/// Enemy starting hit points.
pub const ENEMY_HP: i32 = 20;

// --- Towers ---

/// Tower detection range.
pub const TOWER_RANGE: f64 = 100.0;

/// Minimum time between tower shots in milliseconds.
pub const TOWER_FIRE_COOLDOWN_MS: u64 = 1000;

// --- Bullets ---

/// Bullet travel distance per tick.
pub const BULLET_SPEED: f64 = 5.0;

/// Damage applied on contact.
pub const BULLET_DAMAGE: i32 = 10;

// --- Host loop ---

/// Default host tick rate (Hz), matching a typical display refresh.
pub const DEFAULT_TICK_RATE: u32 = 60;

/// Default RNG seed.
pub const DEFAULT_SEED: u64 = 42;
