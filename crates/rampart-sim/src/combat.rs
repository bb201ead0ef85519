//! Bullet data model.
//!
//! Lives here rather than in rampart-core because the target is an ECS
//! handle. hecs entities are generational, so a handle to a despawned enemy
//! fails lookup instead of resolving to whatever reuses its slot.

/// A homing projectile locked onto one enemy.
#[derive(Debug, Clone, Copy)]
pub struct Projectile {
    /// The enemy being tracked. Non-owning.
    pub target: hecs::Entity,
    /// Travel distance per tick.
    pub speed: f64,
    /// Damage applied on contact.
    pub damage: i32,
}
