//! Entity spawn factories.
//!
//! Creates enemy, tower, and bullet entities with their component bundles.
//! Every entity gets a `SpawnId`; systems sort by it to iterate in
//! insertion order.

use hecs::{Entity, World};

use rampart_core::components::*;
use rampart_core::config::{BulletSpec, EnemySpec, TowerSpec};
use rampart_core::path::Path;
use rampart_core::types::Position;

use crate::combat::Projectile;

/// Hand out the next spawn serial.
pub fn allocate_id(next_spawn_id: &mut u64) -> SpawnId {
    let id = SpawnId(*next_spawn_id);
    *next_spawn_id += 1;
    id
}

/// Spawn an enemy on the path's first waypoint, approaching index 0.
pub fn spawn_enemy(world: &mut World, id: SpawnId, path: &Path, spec: &EnemySpec) -> Entity {
    spawn_enemy_at(world, id, path.start(), 0, spec)
}

/// Spawn an enemy at an arbitrary position and path index.
pub fn spawn_enemy_at(
    world: &mut World,
    id: SpawnId,
    position: Position,
    path_index: usize,
    spec: &EnemySpec,
) -> Entity {
    world.spawn((
        Enemy,
        id,
        position,
        PathFollower {
            path_index,
            speed: spec.speed,
        },
        Health { hp: spec.hp },
    ))
}

/// Spawn a tower that has never fired.
pub fn spawn_tower(world: &mut World, id: SpawnId, position: Position, spec: &TowerSpec) -> Entity {
    world.spawn((
        id,
        position,
        Tower {
            range: spec.range,
            fire_cooldown_ms: spec.fire_cooldown_ms,
            last_shot_ms: None,
        },
    ))
}

/// Spawn a bullet at `position` homing on `target`.
pub fn spawn_bullet(
    world: &mut World,
    id: SpawnId,
    position: Position,
    target: Entity,
    spec: &BulletSpec,
) -> Entity {
    world.spawn((
        id,
        position,
        Projectile {
            target,
            speed: spec.speed,
            damage: spec.damage,
        },
    ))
}
