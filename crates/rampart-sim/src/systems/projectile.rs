//! Projectile system: moves bullets toward their targets and applies damage.

use hecs::{Entity, World};
use tracing::trace;

use rampart_core::components::{Health, SpawnId};
use rampart_core::events::SimEvent;
use rampart_core::types::{Position, StepOutcome};

use crate::combat::Projectile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulletStep {
    /// Target was within one step. The bullet did not move.
    Hit,
    InFlight,
}

/// Move a bullet one step toward `target`.
pub fn advance_bullet(position: &mut Position, target: &Position, speed: f64) -> BulletStep {
    match position.step_toward(target, speed) {
        StepOutcome::Arrived => BulletStep::Hit,
        StepOutcome::Advanced => BulletStep::InFlight,
    }
}

/// Run the projectile pass. Bullets that hit, or whose target no longer
/// exists, are despawned.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>, events: &mut Vec<SimEvent>) {
    despawn_buffer.clear();

    for (bullet_id, entity) in super::in_spawn_order::<&Projectile>(world) {
        let projectile = match world.get::<&Projectile>(entity) {
            Ok(p) => *p,
            Err(_) => continue,
        };

        let target_pos = match world.get::<&Position>(projectile.target) {
            Ok(p) => *p,
            Err(_) => {
                // Target removed before contact: drop with no effect.
                trace!(bullet_id = bullet_id.0, "bullet target gone");
                events.push(SimEvent::BulletExpired {
                    bullet_id: bullet_id.0,
                });
                despawn_buffer.push(entity);
                continue;
            }
        };

        let step = match world.get::<&mut Position>(entity) {
            Ok(mut position) => advance_bullet(&mut position, &target_pos, projectile.speed),
            Err(_) => continue,
        };
        if step == BulletStep::InFlight {
            continue;
        }

        despawn_buffer.push(entity);

        let remaining_hp = match world.get::<&mut Health>(projectile.target) {
            Ok(mut health) => {
                health.hp = health.hp.saturating_sub(projectile.damage);
                health.hp
            }
            Err(_) => {
                // Not something that can take damage.
                trace!(bullet_id = bullet_id.0, "bullet target has no health");
                events.push(SimEvent::BulletExpired {
                    bullet_id: bullet_id.0,
                });
                continue;
            }
        };
        let Ok(enemy_id) = world.get::<&SpawnId>(projectile.target).map(|id| id.0) else {
            continue;
        };

        trace!(bullet_id = bullet_id.0, enemy_id, remaining_hp, "bullet hit");
        events.push(SimEvent::BulletHit {
            bullet_id: bullet_id.0,
            enemy_id,
            damage: projectile.damage,
            remaining_hp,
        });
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
