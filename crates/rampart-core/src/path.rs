//! The fixed route enemies walk, waypoint by waypoint.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::Position;

/// One segment endpoint of the enemy route.
pub type Waypoint = Position;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PathError {
    #[error("path needs at least 2 waypoints, got {0}")]
    TooShort(usize),
    #[error("waypoint {index} has a non-finite coordinate ({x}, {y})")]
    NonFinite { index: usize, x: f64, y: f64 },
}

/// Ordered, immutable sequence of at least two waypoints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Path {
    waypoints: Vec<Waypoint>,
}

impl Path {
    pub fn new(waypoints: Vec<Waypoint>) -> Result<Self, PathError> {
        if waypoints.len() < 2 {
            return Err(PathError::TooShort(waypoints.len()));
        }
        if let Some((index, wp)) = waypoints.iter().enumerate().find(|(_, wp)| !wp.is_finite()) {
            return Err(PathError::NonFinite {
                index,
                x: wp.x,
                y: wp.y,
            });
        }
        Ok(Self { waypoints })
    }

    /// The reference route: right along y=250, up to y=100, right to the edge.
    pub fn default_route() -> Self {
        Self {
            waypoints: default_waypoints(),
        }
    }

    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    pub fn get(&self, index: usize) -> Option<&Waypoint> {
        self.waypoints.get(index)
    }

    /// Number of waypoints (always >= 2).
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Where enemies spawn.
    pub fn start(&self) -> Waypoint {
        self.waypoints[0]
    }

    pub fn end(&self) -> Waypoint {
        self.waypoints[self.waypoints.len() - 1]
    }
}

pub fn default_waypoints() -> Vec<Waypoint> {
    vec![
        Waypoint::new(0.0, 250.0),
        Waypoint::new(400.0, 250.0),
        Waypoint::new(400.0, 100.0),
        Waypoint::new(800.0, 100.0),
    ]
}

impl TryFrom<Vec<Waypoint>> for Path {
    type Error = PathError;

    fn try_from(waypoints: Vec<Waypoint>) -> Result<Self, Self::Error> {
        Path::new(waypoints)
    }
}
