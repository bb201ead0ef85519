//! Game loop thread: runs the simulation engine at a fixed rate and
//! publishes snapshots.
//!
//! The thread owns the engine outright, so every mutation (ticks and player
//! commands alike) is serialized through it. Commands arrive via an `mpsc`
//! channel and take effect at the next tick boundary.

use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use rampart_core::commands::PlayerCommand;
use rampart_core::config::SimConfig;
use rampart_core::constants::DEFAULT_TICK_RATE;
use rampart_core::types::SimTime;
use rampart_sim::SimulationEngine;

use crate::clock::Clock;
use crate::error::AppError;
use crate::state::{GameLoopCommand, SharedSnapshot};

/// Host-side loop settings.
#[derive(Debug, Clone, Copy)]
pub struct LoopConfig {
    /// Ticks per second.
    pub tick_rate: u32,
    /// Stop on its own after this many ticks.
    pub max_ticks: Option<u64>,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            tick_rate: DEFAULT_TICK_RATE,
            max_ticks: None,
        }
    }
}

/// Nominal duration of one tick.
pub fn tick_duration(tick_rate: u32) -> Duration {
    Duration::from_nanos(1_000_000_000 / u64::from(tick_rate.max(1)))
}

/// Handle to a running game loop thread.
pub struct GameLoopHandle {
    commands: mpsc::Sender<GameLoopCommand>,
    thread: JoinHandle<SimTime>,
}

impl GameLoopHandle {
    /// Queue a command. Returns false if the loop has already exited.
    pub fn send(&self, command: GameLoopCommand) -> bool {
        self.commands.send(command).is_ok()
    }

    /// Ask the loop to stop and wait for it. Returns the final sim time.
    pub fn shutdown(self) -> Result<SimTime, AppError> {
        let _ = self.commands.send(GameLoopCommand::Shutdown);
        self.join()
    }

    /// Wait for the loop to exit on its own (`max_ticks` or disconnect).
    pub fn join(self) -> Result<SimTime, AppError> {
        let Self { commands, thread } = self;
        drop(commands);
        thread.join().map_err(|_| AppError::LoopPanicked)
    }
}

/// Spawns the game loop in a new thread.
///
/// The config is validated before the thread starts. `initial_commands` are
/// queued on the engine up front, so they apply on the first tick.
pub fn spawn_game_loop<C>(
    config: SimConfig,
    loop_config: LoopConfig,
    clock: C,
    initial_commands: Vec<PlayerCommand>,
    latest_snapshot: SharedSnapshot,
) -> Result<GameLoopHandle, AppError>
where
    C: Clock + Send + 'static,
{
    if loop_config.tick_rate == 0 {
        return Err(AppError::ZeroTickRate);
    }
    let mut engine = SimulationEngine::new(config)?;
    engine.queue_commands(initial_commands);
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let thread = std::thread::Builder::new()
        .name("rampart-game-loop".into())
        .spawn(move || run_game_loop(engine, loop_config, clock, cmd_rx, &latest_snapshot))?;

    Ok(GameLoopHandle {
        commands: cmd_tx,
        thread,
    })
}

/// The game loop. Runs until Shutdown, channel disconnect, or `max_ticks`.
fn run_game_loop<C: Clock>(
    mut engine: SimulationEngine,
    loop_config: LoopConfig,
    clock: C,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &SharedSnapshot,
) -> SimTime {
    let tick_duration = tick_duration(loop_config.tick_rate);
    let mut next_tick_time = Instant::now();
    info!(tick_rate = loop_config.tick_rate, "game loop started");

    loop {
        if loop_config
            .max_ticks
            .is_some_and(|max| engine.time().tick >= max)
        {
            info!(tick = engine.time().tick, "game loop reached tick limit");
            return engine.time();
        }

        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => {
                    engine.queue_command(cmd);
                }
                Ok(GameLoopCommand::Shutdown) => {
                    info!(tick = engine.time().tick, "game loop shut down");
                    return engine.time();
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => {
                    // Without max_ticks nobody could stop us anymore.
                    if loop_config.max_ticks.is_none() {
                        info!(tick = engine.time().tick, "command channel closed");
                        return engine.time();
                    }
                    break;
                }
            }
        }

        // 2. Advance one tick
        let now_ms = clock.now_ms(engine.time().tick);
        let snapshot = engine.tick(now_ms);

        // 3. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until next tick
        next_tick_time += tick_duration;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > tick_duration * 2 {
            // Too far behind: reset to avoid catch-up spiral
            debug!("game loop fell behind, resetting schedule");
            next_tick_time = now;
        }
    }
}
