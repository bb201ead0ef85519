//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are pure functions that take `&mut World` (or `&World` for read-only).
//! They do not own state: all state lives in components or is passed in.
//! Each system walks its entities in `SpawnId` order.

pub mod enemy_spawner;
pub mod movement;
pub mod projectile;
pub mod snapshot;
pub mod targeting;

use hecs::{Entity, Query, World};

use rampart_core::components::SpawnId;

/// Entities matching `Q`, sorted by spawn order.
pub(crate) fn in_spawn_order<Q: Query>(world: &World) -> Vec<(SpawnId, Entity)> {
    let mut order: Vec<(SpawnId, Entity)> = world
        .query::<(&SpawnId, Q)>()
        .iter()
        .map(|(entity, (id, _))| (*id, entity))
        .collect();
    order.sort_by_key(|(id, _)| *id);
    order
}
