//! Game state snapshot: the complete visible state handed to the
//! rendering and UI layers after each tick.

use serde::{Deserialize, Serialize};

use crate::events::SimEvent;
use crate::path::Waypoint;
use crate::types::{Position, SimTime};

/// Complete game state produced after each tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub gold: u32,
    pub base_health: i32,
    /// True once base health has reached zero. Informational only; the
    /// simulation keeps running.
    pub defeated: bool,
    pub path: Vec<Waypoint>,
    pub towers: Vec<TowerView>,
    pub enemies: Vec<EnemyView>,
    pub bullets: Vec<BulletView>,
    pub events: Vec<SimEvent>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TowerView {
    pub id: u64,
    pub position: Position,
    pub range: f64,
    /// Whether the tower could fire at the snapshot's timestamp.
    pub ready: bool,
}

/// A live enemy (hp > 0).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: u64,
    pub position: Position,
    pub hp: i32,
    pub path_index: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulletView {
    pub id: u64,
    pub position: Position,
    /// Spawn id of the target, `None` if the target is already gone.
    pub target_id: Option<u64>,
}
