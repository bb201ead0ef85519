//! Tests for geometry, path construction, configuration, and serde shapes.

use crate::commands::PlayerCommand;
use crate::config::{ConfigError, SimConfig};
use crate::events::SimEvent;
use crate::path::{Path, PathError, Waypoint};
use crate::state::GameStateSnapshot;
use crate::types::{Position, SimTime, StepOutcome};

// ---- Geometry ----

#[test]
fn test_distance_to() {
    let a = Position::new(0.0, 0.0);
    let b = Position::new(3.0, 4.0);
    assert!((a.distance_to(&b) - 5.0).abs() < 1e-12);
    assert!((b.distance_to(&a) - 5.0).abs() < 1e-12);
}

#[test]
fn test_step_toward_moves_exactly_one_step() {
    let mut pos = Position::new(0.0, 0.0);
    let target = Position::new(30.0, 40.0);
    let outcome = pos.step_toward(&target, 5.0);
    assert_eq!(outcome, StepOutcome::Advanced);
    assert!((pos.x - 3.0).abs() < 1e-12);
    assert!((pos.y - 4.0).abs() < 1e-12);
    assert!((Position::new(0.0, 0.0).distance_to(&pos) - 5.0).abs() < 1e-12);
}

#[test]
fn test_step_toward_arrives_without_moving() {
    let mut pos = Position::new(0.0, 0.0);
    let target = Position::new(3.0, 0.0);
    assert_eq!(pos.step_toward(&target, 5.0), StepOutcome::Arrived);
    assert_eq!(pos, Position::new(0.0, 0.0));
}

#[test]
fn test_step_toward_zero_distance_is_arrival() {
    let mut pos = Position::new(12.0, -7.0);
    let target = pos;
    assert_eq!(pos.step_toward(&target, 1.0), StepOutcome::Arrived);
    assert!(pos.is_finite());
    assert_eq!(pos, target);
}

#[test]
fn test_step_toward_exact_step_distance_advances() {
    // Strictly-less comparison: a target exactly one step away is reached by moving.
    let mut pos = Position::new(0.0, 0.0);
    let target = Position::new(5.0, 0.0);
    assert_eq!(pos.step_toward(&target, 5.0), StepOutcome::Advanced);
    assert_eq!(pos, target);
}

#[test]
fn test_sim_time_advance() {
    let mut time = SimTime::default();
    time.advance(16);
    time.advance(33);
    assert_eq!(time.tick, 2);
    assert_eq!(time.now_ms, 33);
}

// ---- Path ----

#[test]
fn test_default_route() {
    let path = Path::default_route();
    assert_eq!(path.len(), 4);
    assert_eq!(path.start(), Waypoint::new(0.0, 250.0));
    assert_eq!(path.end(), Waypoint::new(800.0, 100.0));
    assert_eq!(path.get(2), Some(&Waypoint::new(400.0, 100.0)));
    assert_eq!(path.get(4), None);
}

#[test]
fn test_path_rejects_single_waypoint() {
    let err = Path::new(vec![Waypoint::new(0.0, 0.0)]).unwrap_err();
    assert_eq!(err, PathError::TooShort(1));
    assert!(Path::new(Vec::new()).is_err());
}

#[test]
fn test_path_rejects_non_finite() {
    let err = Path::new(vec![
        Waypoint::new(0.0, 0.0),
        Waypoint::new(f64::NAN, 1.0),
    ])
    .unwrap_err();
    assert!(matches!(err, PathError::NonFinite { index: 1, .. }));
}

#[test]
fn test_path_try_from() {
    let path: Path = vec![Waypoint::new(0.0, 0.0), Waypoint::new(10.0, 0.0)]
        .try_into()
        .unwrap();
    assert_eq!(path.len(), 2);
}

// ---- Config ----

#[test]
fn test_default_config_is_valid() {
    let config = SimConfig::default();
    config.validate().unwrap();
    assert_eq!(config.starting_gold, 100);
    assert_eq!(config.starting_base_health, 20);
    assert_eq!(config.tower_cost, 50);
    assert_eq!(config.tower.range, 100.0);
    assert_eq!(config.tower.fire_cooldown_ms, 1000);
    assert_eq!(config.bullet.speed, 5.0);
    assert_eq!(config.bullet.damage, 10);
    assert_eq!(config.enemy.speed, 1.0);
    assert_eq!(config.enemy.hp, 20);
    assert_eq!(config.spawn_chance, 0.02);
}

#[test]
fn test_partial_json_uses_defaults() {
    let config = SimConfig::from_json(r#"{ "seed": 7, "tower": { "range": 150.0 } }"#).unwrap();
    assert_eq!(config.seed, 7);
    assert_eq!(config.tower.range, 150.0);
    assert_eq!(config.tower.fire_cooldown_ms, 1000);
    assert_eq!(config.path.len(), 4);
}

#[test]
fn test_config_rejects_bad_spawn_chance() {
    let config = SimConfig {
        spawn_chance: 1.5,
        ..Default::default()
    };
    assert!(matches!(config.validate(), Err(ConfigError::SpawnChance(_))));

    let config = SimConfig {
        spawn_chance: f64::NAN,
        ..Default::default()
    };
    assert!(matches!(config.validate(), Err(ConfigError::SpawnChance(_))));
}

#[test]
fn test_config_rejects_non_positive_values() {
    let mut config = SimConfig::default();
    config.tower.range = 0.0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::NotPositive {
            field: "tower.range",
            ..
        })
    ));

    let mut config = SimConfig::default();
    config.bullet.speed = -1.0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::NotPositive {
            field: "bullet.speed",
            ..
        })
    ));

    let mut config = SimConfig::default();
    config.tower.fire_cooldown_ms = 0;
    assert!(matches!(config.validate(), Err(ConfigError::ZeroCooldown)));

    let mut config = SimConfig::default();
    config.bullet.damage = -3;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::NegativeDamage(-3))
    ));
}

#[test]
fn test_config_rejects_short_path() {
    let err = SimConfig::from_json(r#"{ "path": [ { "x": 0.0, "y": 0.0 } ] }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Path(PathError::TooShort(1))));
}

#[test]
fn test_config_rejects_malformed_json() {
    let err = SimConfig::from_json("{ seed: ").unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}

// ---- Serde shapes ----

#[test]
fn test_player_command_is_tagged() {
    let json = serde_json::to_string(&PlayerCommand::PlaceTower { x: 1.0, y: 2.0 }).unwrap();
    assert_eq!(json, r#"{"type":"PlaceTower","x":1.0,"y":2.0}"#);
}

#[test]
fn test_sim_event_is_tagged() {
    let event = SimEvent::EnemyLeaked {
        enemy_id: 3,
        base_health: 19,
    };
    let value = serde_json::to_value(&event).unwrap();
    assert_eq!(value["type"], "EnemyLeaked");
    assert_eq!(value["base_health"], 19);
}

#[test]
fn test_empty_snapshot_serializes() {
    let snapshot = GameStateSnapshot::default();
    let value = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(value["gold"], 0);
    assert!(value["enemies"].as_array().unwrap().is_empty());
}
