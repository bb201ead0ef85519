//! Core types and definitions for the RAMPART simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! geometry, the enemy path, components, commands, state snapshots,
//! events, configuration, and constants. It has no dependency on any
//! runtime framework.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod events;
pub mod path;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
