//! Enemy movement system.
//!
//! Removes enemies that died last tick, walks the rest one step along the
//! path, and removes those that walked off its end.

use hecs::{Entity, World};
use tracing::debug;

use rampart_core::components::{Enemy, Health, PathFollower};
use rampart_core::events::SimEvent;
use rampart_core::path::Path;
use rampart_core::types::{Position, StepOutcome};

/// What a single enemy step produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyStep {
    EnRoute,
    /// Stepped past the last waypoint.
    ReachedEnd,
}

/// Advance one enemy by one tick.
///
/// Reaching a waypoint only bumps `path_index`; the enemy does not also move
/// toward the following waypoint on that tick.
pub fn advance_enemy(position: &mut Position, follower: &mut PathFollower, path: &Path) -> EnemyStep {
    let Some(waypoint) = path.get(follower.path_index) else {
        return EnemyStep::ReachedEnd;
    };

    match position.step_toward(waypoint, follower.speed) {
        StepOutcome::Advanced => EnemyStep::EnRoute,
        StepOutcome::Arrived => {
            follower.path_index += 1;
            if follower.path_index >= path.len() {
                EnemyStep::ReachedEnd
            } else {
                EnemyStep::EnRoute
            }
        }
    }
}

/// Run the movement pass. Decrements `base_health` once per leaked enemy and
/// returns how many leaked.
pub fn run(
    world: &mut World,
    path: &Path,
    base_health: &mut i32,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<SimEvent>,
) -> u32 {
    despawn_buffer.clear();
    let mut leaked = 0;

    for (id, entity) in super::in_spawn_order::<&Enemy>(world) {
        let Ok((position, follower, health)) =
            world.query_one_mut::<(&mut Position, &mut PathFollower, &Health)>(entity)
        else {
            continue;
        };

        if health.hp <= 0 {
            debug!(enemy_id = id.0, "enemy killed");
            events.push(SimEvent::EnemyKilled { enemy_id: id.0 });
            despawn_buffer.push(entity);
            continue;
        }

        if advance_enemy(position, follower, path) == EnemyStep::ReachedEnd {
            *base_health = base_health.saturating_sub(1);
            leaked += 1;
            debug!(enemy_id = id.0, base_health = *base_health, "enemy reached the end");
            events.push(SimEvent::EnemyLeaked {
                enemy_id: id.0,
                base_health: *base_health,
            });
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    leaked
}
