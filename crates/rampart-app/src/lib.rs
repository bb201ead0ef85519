//! RAMPART host application.
//!
//! Wires the simulation engine to a clock and a command channel. The game
//! loop thread is the only writer of the engine; everything else talks to
//! it through `GameLoopCommand`s and reads published snapshots.

pub mod clock;
pub mod error;
pub mod game_loop;
pub mod state;
pub mod summary;

pub use error::AppError;
pub use rampart_core as core;
