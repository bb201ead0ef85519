//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

/// Spawn serial number. Assigned in increasing order by the engine, so
/// sorting by it yields insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SpawnId(pub u64);

/// Marks an entity as an enemy unit walking the path.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy;

/// Progress along the path.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PathFollower {
    /// Index of the waypoint currently being approached.
    pub path_index: usize,
    /// Travel distance per tick.
    pub speed: f64,
}

/// Hit points. Only bullet contact lowers them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub hp: i32,
}

/// A stationary tower that fires at the first enemy in range.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Tower {
    /// Detection radius (exclusive).
    pub range: f64,
    /// Minimum milliseconds between shots (exclusive).
    pub fire_cooldown_ms: u64,
    /// Clock timestamp of the last shot. `None` until the first shot.
    pub last_shot_ms: Option<u64>,
}
