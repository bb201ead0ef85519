//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// 2D position in simulation space (canvas units, y grows downward).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Result of moving a position one step toward a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The target was closer than one step. The position was not moved.
    Arrived,
    /// The position moved exactly one step toward the target.
    Advanced,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of ticks completed.
    pub tick: u64,
    /// Clock timestamp (milliseconds) supplied to the most recent tick.
    pub now_ms: u64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn as_dvec2(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Euclidean distance to another position.
    pub fn distance_to(&self, other: &Position) -> f64 {
        self.as_dvec2().distance(other.as_dvec2())
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Move `step` units toward `target`, unless the target is already
    /// strictly closer than `step`.
    ///
    /// A zero distance always counts as arrived, so the direction is never
    /// normalized by zero as long as `step > 0`.
    pub fn step_toward(&mut self, target: &Position, step: f64) -> StepOutcome {
        let delta = target.as_dvec2() - self.as_dvec2();
        let dist = delta.length();
        if dist < step {
            return StepOutcome::Arrived;
        }
        *self = Position::from(self.as_dvec2() + delta / dist * step);
        StepOutcome::Advanced
    }
}

impl From<DVec2> for Position {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl SimTime {
    /// Record a completed tick at the given clock timestamp.
    pub fn advance(&mut self, now_ms: u64) {
        self.tick += 1;
        self.now_ms = now_ms;
    }
}
