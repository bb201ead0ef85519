//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, the path, and the gold and
//! base-health counters. It processes player commands, runs all systems,
//! and produces `GameStateSnapshot`s. Completely headless, enabling
//! deterministic testing.
//!
//! Movement is measured in units per tick, so wall-clock speed depends on
//! how often the host calls `tick`.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use rampart_core::commands::PlayerCommand;
use rampart_core::config::{ConfigError, SimConfig};
use rampart_core::events::SimEvent;
use rampart_core::path::Path;
use rampart_core::state::GameStateSnapshot;
use rampart_core::types::{Position, SimTime};

use crate::systems;
use crate::systems::snapshot::Counters;
use crate::world_setup;

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    path: Path,
    config: SimConfig,
    time: SimTime,
    rng: ChaCha8Rng,
    gold: u32,
    base_health: i32,
    next_spawn_id: u64,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<SimEvent>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let path = config.build_path()?;

        Ok(Self {
            world: World::new(),
            path,
            time: SimTime::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            gold: config.starting_gold,
            base_health: config.starting_base_health,
            next_spawn_id: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            config,
        })
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Place a tower immediately if the player can afford it.
    /// Returns whether a tower was created. A rejected placement changes nothing.
    pub fn place_tower(&mut self, position: Position) -> bool {
        let cost = self.config.tower_cost;
        if self.gold < cost {
            debug!(x = position.x, y = position.y, gold = self.gold, "placement rejected");
            self.events.push(SimEvent::PlacementRejected {
                position,
                gold: self.gold,
            });
            return false;
        }

        self.gold -= cost;
        let id = world_setup::allocate_id(&mut self.next_spawn_id);
        world_setup::spawn_tower(&mut self.world, id, position, &self.config.tower);
        debug!(tower_id = id.0, x = position.x, y = position.y, gold = self.gold, "tower placed");
        self.events.push(SimEvent::TowerPlaced {
            tower_id: id.0,
            position,
            gold_remaining: self.gold,
        });
        true
    }

    /// Spawn an enemy at the path start, bypassing the spawn roll.
    pub fn spawn_enemy(&mut self) -> hecs::Entity {
        let id = world_setup::allocate_id(&mut self.next_spawn_id);
        self.events.push(SimEvent::EnemySpawned { enemy_id: id.0 });
        world_setup::spawn_enemy(&mut self.world, id, &self.path, &self.config.enemy)
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    ///
    /// `now_ms` is the clock collaborator's monotonic timestamp, used for
    /// tower cooldowns.
    pub fn tick(&mut self, now_ms: u64) -> GameStateSnapshot {
        self.process_commands();
        self.run_systems(now_ms);
        self.time.advance(now_ms);

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.path,
            &self.time,
            Counters {
                gold: self.gold,
                base_health: self.base_health,
            },
            events,
        )
    }

    pub fn gold(&self) -> u32 {
        self.gold
    }

    /// May go negative; nothing stops the simulation.
    pub fn base_health(&self) -> i32 {
        self.base_health
    }

    /// Whether base health has run out. Purely informational.
    pub fn is_defeated(&self) -> bool {
        self.base_health <= 0
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable world access for tests that stage entities directly.
    #[cfg(test)]
    pub(crate) fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    #[cfg(test)]
    pub(crate) fn next_spawn_id(&mut self) -> &mut u64 {
        &mut self.next_spawn_id
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::PlaceTower { x, y } => {
                self.place_tower(Position::new(x, y));
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self, now_ms: u64) {
        // 1. Enemy spawn roll
        systems::enemy_spawner::run(
            &mut self.world,
            &mut self.rng,
            self.config.spawn_chance,
            &self.path,
            &self.config.enemy,
            &mut self.next_spawn_id,
            &mut self.events,
        );
        // 2. Enemy removal + movement
        systems::movement::run(
            &mut self.world,
            &self.path,
            &mut self.base_health,
            &mut self.despawn_buffer,
            &mut self.events,
        );
        // 3. Tower targeting + firing
        systems::targeting::run(
            &mut self.world,
            &self.config.bullet,
            now_ms,
            &mut self.next_spawn_id,
            &mut self.events,
        );
        // 4. Bullet flight + damage
        systems::projectile::run(&mut self.world, &mut self.despawn_buffer, &mut self.events);
    }
}
