//! Running tallies over a sequence of snapshots.

use rampart_core::events::SimEvent;
use rampart_core::state::GameStateSnapshot;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub ticks: u64,
    pub enemies_spawned: u32,
    pub enemies_killed: u32,
    pub enemies_leaked: u32,
    pub towers_placed: u32,
    pub placements_rejected: u32,
    pub shots_fired: u32,
    pub bullets_hit: u32,
    pub bullets_expired: u32,
}

impl RunSummary {
    /// Fold one tick's events into the tallies.
    pub fn record(&mut self, snapshot: &GameStateSnapshot) {
        self.ticks = snapshot.time.tick;
        for event in &snapshot.events {
            match event {
                SimEvent::EnemySpawned { .. } => self.enemies_spawned += 1,
                SimEvent::EnemyKilled { .. } => self.enemies_killed += 1,
                SimEvent::EnemyLeaked { .. } => self.enemies_leaked += 1,
                SimEvent::TowerPlaced { .. } => self.towers_placed += 1,
                SimEvent::PlacementRejected { .. } => self.placements_rejected += 1,
                SimEvent::ShotFired { .. } => self.shots_fired += 1,
                SimEvent::BulletHit { .. } => self.bullets_hit += 1,
                SimEvent::BulletExpired { .. } => self.bullets_expired += 1,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rampart_core::types::{Position, SimTime};

    #[test]
    fn test_record_counts_events() {
        let mut summary = RunSummary::default();
        let snapshot = GameStateSnapshot {
            time: SimTime { tick: 4, now_ms: 64 },
            events: vec![
                SimEvent::EnemySpawned { enemy_id: 0 },
                SimEvent::TowerPlaced {
                    tower_id: 1,
                    position: Position::new(1.0, 1.0),
                    gold_remaining: 50,
                },
                SimEvent::ShotFired {
                    tower_id: 1,
                    enemy_id: 0,
                },
                SimEvent::EnemyLeaked {
                    enemy_id: 0,
                    base_health: 19,
                },
            ],
            ..Default::default()
        };

        summary.record(&snapshot);
        summary.record(&GameStateSnapshot {
            time: SimTime { tick: 5, now_ms: 80 },
            ..Default::default()
        });

        assert_eq!(summary.ticks, 5);
        assert_eq!(summary.enemies_spawned, 1);
        assert_eq!(summary.towers_placed, 1);
        assert_eq!(summary.shots_fired, 1);
        assert_eq!(summary.enemies_leaked, 1);
        assert_eq!(summary.enemies_killed, 0);
    }
}
