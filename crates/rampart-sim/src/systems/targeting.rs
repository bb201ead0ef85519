//! Tower targeting system: each tower fires at the first enemy in range.

use hecs::{Entity, World};
use tracing::trace;

use rampart_core::components::{Enemy, SpawnId, Tower};
use rampart_core::config::BulletSpec;
use rampart_core::events::SimEvent;
use rampart_core::types::Position;

use crate::world_setup;

/// An enemy a tower may fire at.
#[derive(Debug, Clone, Copy)]
pub struct Candidate {
    pub entity: Entity,
    pub id: SpawnId,
    pub position: Position,
}

/// All enemies, in spawn order.
pub fn enemy_candidates(world: &World) -> Vec<Candidate> {
    let mut candidates: Vec<Candidate> = world
        .query::<(&Enemy, &SpawnId, &Position)>()
        .iter()
        .map(|(entity, (_, id, position))| Candidate {
            entity,
            id: *id,
            position: *position,
        })
        .collect();
    candidates.sort_by_key(|c| c.id);
    candidates
}

/// First candidate strictly within `range` of `tower_position`.
/// First in spawn order, not nearest.
pub fn select_target<'a>(
    tower_position: &Position,
    range: f64,
    candidates: &'a [Candidate],
) -> Option<&'a Candidate> {
    candidates
        .iter()
        .find(|c| tower_position.distance_to(&c.position) < range)
}

/// Whether more than `fire_cooldown_ms` has passed since the last shot.
pub fn cooldown_elapsed(tower: &Tower, now_ms: u64) -> bool {
    match tower.last_shot_ms {
        None => true,
        Some(last) => now_ms.saturating_sub(last) > tower.fire_cooldown_ms,
    }
}

/// Consume the cooldown if it has elapsed. Returns whether the tower fires.
pub fn try_shoot(tower: &mut Tower, now_ms: u64) -> bool {
    if !cooldown_elapsed(tower, now_ms) {
        return false;
    }
    tower.last_shot_ms = Some(now_ms);
    true
}

/// Run targeting for every tower and spawn the resulting bullets.
pub fn run(
    world: &mut World,
    bullet_spec: &BulletSpec,
    now_ms: u64,
    next_spawn_id: &mut u64,
    events: &mut Vec<SimEvent>,
) -> Vec<Entity> {
    let candidates = enemy_candidates(world);
    if candidates.is_empty() {
        return Vec::new();
    }

    // (tower id, muzzle position, target)
    let mut shots: Vec<(SpawnId, Position, Candidate)> = Vec::new();

    for (tower_id, entity) in super::in_spawn_order::<&Tower>(world) {
        let Ok((tower, position)) = world.query_one_mut::<(&mut Tower, &Position)>(entity) else {
            continue;
        };
        let Some(target) = select_target(position, tower.range, &candidates) else {
            continue;
        };
        if try_shoot(tower, now_ms) {
            shots.push((tower_id, *position, *target));
        }
    }

    shots
        .into_iter()
        .map(|(tower_id, position, target)| {
            let id = world_setup::allocate_id(next_spawn_id);
            trace!(tower_id = tower_id.0, enemy_id = target.id.0, bullet_id = id.0, "shot fired");
            events.push(SimEvent::ShotFired {
                tower_id: tower_id.0,
                enemy_id: target.id.0,
            });
            world_setup::spawn_bullet(world, id, position, target.entity, bullet_spec)
        })
        .collect()
}
