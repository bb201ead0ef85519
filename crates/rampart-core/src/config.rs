//! Simulation configuration.
//!
//! Every field has a default matching the reference tuning, so a partial
//! JSON document only needs to name what it overrides.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;
use crate::path::{default_waypoints, Path, PathError, Waypoint};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid path: {0}")]
    Path(#[from] PathError),
    #[error("spawn_chance must be within [0, 1], got {0}")]
    SpawnChance(f64),
    #[error("{field} must be positive and finite, got {value}")]
    NotPositive { field: &'static str, value: f64 },
    #[error("tower.fire_cooldown_ms must be greater than zero")]
    ZeroCooldown,
    #[error("bullet.damage must not be negative, got {0}")]
    NegativeDamage(i32),
}

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed and inputs = same simulation.
    pub seed: u64,
    /// Probability of one enemy spawning per tick.
    pub spawn_chance: f64,
    pub starting_gold: u32,
    pub starting_base_health: i32,
    pub tower_cost: u32,
    pub tower: TowerSpec,
    pub enemy: EnemySpec,
    pub bullet: BulletSpec,
    pub path: Vec<Waypoint>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TowerSpec {
    pub range: f64,
    pub fire_cooldown_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemySpec {
    pub speed: f64,
    pub hp: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BulletSpec {
    pub speed: f64,
    pub damage: i32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            spawn_chance: ENEMY_SPAWN_CHANCE,
            starting_gold: STARTING_GOLD,
            starting_base_health: STARTING_BASE_HEALTH,
            tower_cost: TOWER_COST,
            tower: TowerSpec::default(),
            enemy: EnemySpec::default(),
            bullet: BulletSpec::default(),
            path: default_waypoints(),
        }
    }
}

impl Default for TowerSpec {
    fn default() -> Self {
        Self {
            range: TOWER_RANGE,
            fire_cooldown_ms: TOWER_FIRE_COOLDOWN_MS,
        }
    }
}

impl Default for EnemySpec {
    fn default() -> Self {
        Self {
            speed: ENEMY_SPEED,
            hp: ENEMY_HP,
        }
    }
}

impl Default for BulletSpec {
    fn default() -> Self {
        Self {
            speed: BULLET_SPEED,
            damage: BULLET_DAMAGE,
        }
    }
}

impl SimConfig {
    /// Parse and validate a JSON config document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every tunable against its invariant.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.spawn_chance) {
            return Err(ConfigError::SpawnChance(self.spawn_chance));
        }
        ensure_positive("tower.range", self.tower.range)?;
        ensure_positive("enemy.speed", self.enemy.speed)?;
        ensure_positive("bullet.speed", self.bullet.speed)?;
        ensure_positive("enemy.hp", f64::from(self.enemy.hp))?;
        if self.tower.fire_cooldown_ms == 0 {
            return Err(ConfigError::ZeroCooldown);
        }
        if self.bullet.damage < 0 {
            return Err(ConfigError::NegativeDamage(self.bullet.damage));
        }
        self.build_path()?;
        Ok(())
    }

    /// Build the validated path from the configured waypoints.
    pub fn build_path(&self) -> Result<Path, PathError> {
        Path::new(self.path.clone())
    }
}

fn ensure_positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}
