//! Simulation engine for RAMPART.
//!
//! Owns the hecs ECS world, runs systems once per externally driven tick,
//! and produces GameStateSnapshots for the rendering layer.

pub mod combat;
pub mod engine;
pub mod systems;
pub mod world_setup;

pub use engine::SimulationEngine;
pub use rampart_core as core;
