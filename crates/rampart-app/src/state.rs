//! State shared between the game loop thread and its callers.

use std::sync::{Arc, Mutex};

use rampart_core::commands::PlayerCommand;
use rampart_core::state::GameStateSnapshot;

/// Commands sent to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    PlayerCommand(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Latest snapshot, written by the game loop after each tick.
pub type SharedSnapshot = Arc<Mutex<Option<GameStateSnapshot>>>;

pub fn new_shared_snapshot() -> SharedSnapshot {
    Arc::new(Mutex::new(None))
}

/// Clone out the most recent snapshot, if any tick has run.
/// A poisoned lock reads as no snapshot.
pub fn latest_snapshot(shared: &SharedSnapshot) -> Option<GameStateSnapshot> {
    shared.lock().ok().and_then(|guard| guard.clone())
}
