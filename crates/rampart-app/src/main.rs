//! rampart-headless: run the RAMPART simulation without a renderer.
//!
//! Usage:
//!   rampart-headless --ticks 3600 --tower 200,200 --tower 450,180
//!   rampart-headless --config tuning.json --realtime --json

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use rampart_app::clock::{Clock, MonotonicClock, StepClock};
use rampart_app::game_loop::{spawn_game_loop, LoopConfig};
use rampart_app::state::{latest_snapshot, new_shared_snapshot};
use rampart_app::summary::RunSummary;
use rampart_app::AppError;
use rampart_core::commands::PlayerCommand;
use rampart_core::config::SimConfig;
use rampart_core::constants::DEFAULT_TICK_RATE;
use rampart_core::state::GameStateSnapshot;
use rampart_core::types::Position;
use rampart_sim::SimulationEngine;

#[derive(Parser, Debug)]
#[command(name = "rampart-headless")]
#[command(about = "Run the RAMPART tower-defense simulation headless")]
struct Args {
    /// JSON config file; omitted fields keep their defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the config's RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Number of ticks to simulate
    #[arg(long, default_value_t = 3600)]
    ticks: u64,

    /// Ticks per second
    #[arg(long, default_value_t = DEFAULT_TICK_RATE)]
    tick_rate: u32,

    /// Place a tower at x,y before the first tick (repeatable)
    #[arg(long = "tower", value_parser = parse_point)]
    towers: Vec<Position>,

    /// Run on the game loop thread against the wall clock
    #[arg(long)]
    realtime: bool,

    /// Print the final snapshot as JSON
    #[arg(long)]
    json: bool,
}

fn parse_point(s: &str) -> Result<Position, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected x,y but got {s:?}"))?;
    let x: f64 = x.trim().parse().map_err(|e| format!("bad x in {s:?}: {e}"))?;
    let y: f64 = y.trim().parse().map_err(|e| format!("bad y in {s:?}: {e}"))?;
    Ok(Position::new(x, y))
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(AppError::Config(err)) => {
            warn!("rejected configuration: {err}");
            ExitCode::FAILURE
        }
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), AppError> {
    if args.tick_rate == 0 {
        return Err(AppError::ZeroTickRate);
    }

    let mut config = match &args.config {
        Some(path) => SimConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => SimConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    info!(seed = config.seed, ticks = args.ticks, tick_rate = args.tick_rate, "starting run");

    let placements: Vec<PlayerCommand> = args
        .towers
        .iter()
        .map(|p| PlayerCommand::PlaceTower { x: p.x, y: p.y })
        .collect();

    let (final_snapshot, summary) = if args.realtime {
        run_realtime(config, &args, placements)?
    } else {
        run_stepped(config, &args, placements)?
    };

    if let Some(snapshot) = &final_snapshot {
        info!(
            ticks = summary.ticks,
            gold = snapshot.gold,
            base_health = snapshot.base_health,
            towers = snapshot.towers.len(),
            enemies = snapshot.enemies.len(),
            spawned = summary.enemies_spawned,
            killed = summary.enemies_killed,
            leaked = summary.enemies_leaked,
            shots = summary.shots_fired,
            "run complete"
        );
        if args.json {
            println!("{}", serde_json::to_string_pretty(snapshot)?);
        }
    }
    Ok(())
}

/// Drive the engine directly with synthetic time.
fn run_stepped(
    config: SimConfig,
    args: &Args,
    placements: Vec<PlayerCommand>,
) -> Result<(Option<GameStateSnapshot>, RunSummary), AppError> {
    let mut engine = SimulationEngine::new(config)?;
    engine.queue_commands(placements);

    let clock = StepClock::new(args.tick_rate);
    let mut summary = RunSummary::default();
    let mut last = None;
    for tick in 0..args.ticks {
        let snapshot = engine.tick(clock.now_ms(tick));
        summary.record(&snapshot);
        last = Some(snapshot);
    }
    Ok((last, summary))
}

/// Run on the game loop thread. Only the final snapshot's events are
/// visible here, so the summary covers the counters but not the tallies.
fn run_realtime(
    config: SimConfig,
    args: &Args,
    placements: Vec<PlayerCommand>,
) -> Result<(Option<GameStateSnapshot>, RunSummary), AppError> {
    let shared = new_shared_snapshot();
    let handle = spawn_game_loop(
        config,
        LoopConfig {
            tick_rate: args.tick_rate,
            max_ticks: Some(args.ticks),
        },
        MonotonicClock::new(),
        placements,
        shared.clone(),
    )?;
    let time = handle.join()?;

    let summary = RunSummary {
        ticks: time.tick,
        ..Default::default()
    };
    Ok((latest_snapshot(&shared), summary))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_point() {
        assert_eq!(parse_point("200,150.5").unwrap(), Position::new(200.0, 150.5));
        assert_eq!(parse_point(" 1 , 2 ").unwrap(), Position::new(1.0, 2.0));
        assert!(parse_point("200").is_err());
        assert!(parse_point("a,2").is_err());
    }

    #[test]
    fn test_cli_parses_repeated_towers() {
        let args = Args::parse_from([
            "rampart-headless",
            "--ticks",
            "10",
            "--tower",
            "1,2",
            "--tower",
            "3,4",
        ]);
        assert_eq!(args.ticks, 10);
        assert_eq!(args.towers, vec![Position::new(1.0, 2.0), Position::new(3.0, 4.0)]);
        assert!(!args.realtime);
    }

    #[test]
    fn test_stepped_run_places_towers() {
        let args = Args::parse_from(["rampart-headless", "--ticks", "120", "--tower", "200,200"]);
        let placements = vec![PlayerCommand::PlaceTower { x: 200.0, y: 200.0 }];
        let (snapshot, summary) = run_stepped(SimConfig::default(), &args, placements).unwrap();
        let snapshot = snapshot.unwrap();
        assert_eq!(summary.ticks, 120);
        assert_eq!(summary.towers_placed, 1);
        assert_eq!(snapshot.gold, 50);
        assert_eq!(snapshot.time.now_ms, 1983);
    }
}
