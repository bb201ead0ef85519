//! Enemy spawning system: rolls once per tick for a new enemy.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use rampart_core::config::EnemySpec;
use rampart_core::events::SimEvent;
use rampart_core::path::Path;

use crate::world_setup;

/// With probability `spawn_chance`, spawn one enemy at the path start.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    spawn_chance: f64,
    path: &Path,
    spec: &EnemySpec,
    next_spawn_id: &mut u64,
    events: &mut Vec<SimEvent>,
) -> Option<Entity> {
    if !rng.gen_bool(spawn_chance) {
        return None;
    }

    let id = world_setup::allocate_id(next_spawn_id);
    let entity = world_setup::spawn_enemy(world, id, path, spec);
    debug!(enemy_id = id.0, "enemy spawned");
    events.push(SimEvent::EnemySpawned { enemy_id: id.0 });
    Some(entity)
}
