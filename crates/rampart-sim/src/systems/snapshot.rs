//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only: it never modifies the world.

use hecs::World;

use rampart_core::components::*;
use rampart_core::events::SimEvent;
use rampart_core::path::Path;
use rampart_core::state::*;
use rampart_core::types::{Position, SimTime};

use crate::combat::Projectile;
use crate::systems::targeting::cooldown_elapsed;

/// Counters the engine tracks outside the ECS world.
#[derive(Debug, Clone, Copy)]
pub struct Counters {
    pub gold: u32,
    pub base_health: i32,
}

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    path: &Path,
    time: &SimTime,
    counters: Counters,
    events: Vec<SimEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        gold: counters.gold,
        base_health: counters.base_health,
        defeated: counters.base_health <= 0,
        path: path.waypoints().to_vec(),
        towers: build_towers(world, time.now_ms),
        enemies: build_enemies(world),
        bullets: build_bullets(world),
        events,
    }
}

fn build_towers(world: &World, now_ms: u64) -> Vec<TowerView> {
    let mut towers: Vec<TowerView> = world
        .query::<(&SpawnId, &Position, &Tower)>()
        .iter()
        .map(|(_, (id, pos, tower))| TowerView {
            id: id.0,
            position: *pos,
            range: tower.range,
            ready: cooldown_elapsed(tower, now_ms),
        })
        .collect();

    towers.sort_by_key(|t| t.id);
    towers
}

/// Only live enemies. Ones killed this tick are still in the world until
/// the next movement pass.
fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(&Enemy, &SpawnId, &Position, &Health, &PathFollower)>()
        .iter()
        .filter(|(_, (_, _, _, health, _))| health.hp > 0)
        .map(|(_, (_, id, pos, health, follower))| EnemyView {
            id: id.0,
            position: *pos,
            hp: health.hp,
            path_index: follower.path_index,
        })
        .collect();

    enemies.sort_by_key(|e| e.id);
    enemies
}

fn build_bullets(world: &World) -> Vec<BulletView> {
    let mut bullets: Vec<BulletView> = world
        .query::<(&SpawnId, &Position, &Projectile)>()
        .iter()
        .map(|(_, (id, pos, projectile))| BulletView {
            id: id.0,
            position: *pos,
            target_id: world.get::<&SpawnId>(projectile.target).ok().map(|t| t.0),
        })
        .collect();

    bullets.sort_by_key(|b| b.id);
    bullets
}
