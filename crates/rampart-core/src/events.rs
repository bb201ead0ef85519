//! Events emitted by the simulation for UI feedback.

use serde::{Deserialize, Serialize};

use crate::types::Position;

/// Something that happened during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    EnemySpawned { enemy_id: u64 },
    /// Removed at the start of a tick with hp <= 0.
    EnemyKilled { enemy_id: u64 },
    /// Walked past the last waypoint.
    EnemyLeaked { enemy_id: u64, base_health: i32 },
    TowerPlaced {
        tower_id: u64,
        position: Position,
        gold_remaining: u32,
    },
    PlacementRejected { position: Position, gold: u32 },
    ShotFired { tower_id: u64, enemy_id: u64 },
    BulletHit {
        bullet_id: u64,
        enemy_id: u64,
        damage: i32,
        remaining_hp: i32,
    },
    /// The bullet's target was removed before contact. No damage dealt.
    BulletExpired { bullet_id: u64 },
}
