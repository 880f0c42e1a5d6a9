//! riverlight: headless runner for the river gameplay simulation.
//!
//! Usage:
//!   riverlight [--level <path>] [--ticks <n>] [--time-scale <f>] [--seed <n>]
//!
//! Runs the built-in river course (or a level loaded from JSON) under a
//! scripted wander input and logs progress summaries. The simulation
//! itself lives in riverlight-sim; this binary only drives it.

mod game_loop;

use std::process;
use std::sync::mpsc;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use riverlight_core::commands::PlayerCommand;
use riverlight_core::enums::EnemyState;
use riverlight_core::errors::LevelError;
use riverlight_core::events::GameEvent;
use riverlight_core::level::LevelConfig;
use riverlight_core::state::GameStateSnapshot;
use riverlight_sim::engine::SimConfig;
use riverlight_sim::levels;

use crate::game_loop::GameLoopCommand;

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return;
    }

    let ticks = parse_u64(&args, "--ticks", 600);
    let time_scale = parse_f64(&args, "--time-scale", 1.0);
    let seed = parse_u64(&args, "--seed", 42);

    let level = match parse_value(&args, "--level") {
        Some(path) => match load_level(&path) {
            Ok(level) => level,
            Err(err) => {
                error!(error = %err, path = %path, "level_load_failed");
                process::exit(1);
            }
        },
        None => levels::river_course(),
    };

    info!(level = %level.name, ticks, time_scale, "riverlight_startup");

    let (snapshot_tx, snapshot_rx) = mpsc::channel();
    let cmd_tx = game_loop::spawn_game_loop(SimConfig { level, time_scale }, snapshot_tx);

    if cmd_tx
        .send(GameLoopCommand::PlayerCommand(PlayerCommand::Start))
        .is_err()
    {
        error!("game_loop_unreachable");
        process::exit(1);
    }

    let final_snapshot = drive(&cmd_tx, &snapshot_rx, ticks, seed);

    let _ = cmd_tx.send(GameLoopCommand::Shutdown);
    if let Some(snapshot) = final_snapshot {
        let (lit, fleeing) = summarize(&snapshot);
        info!(
            tick = snapshot.time.tick,
            phase = ?snapshot.phase,
            x = snapshot.player.position.x,
            y = snapshot.player.position.y,
            lit,
            tethers = snapshot.tethers.len(),
            fleeing,
            "run_summary"
        );
    }
    info!("riverlight_shutdown");
}

/// Feed wander input to the loop and report progress until `ticks`
/// snapshots have been consumed. Resets the level whenever an enemy
/// catches the player so the run keeps going. Returns the last snapshot
/// for the closing summary.
fn drive(
    cmd_tx: &mpsc::Sender<GameLoopCommand>,
    snapshot_rx: &mpsc::Receiver<GameStateSnapshot>,
    ticks: u64,
    seed: u64,
) -> Option<GameStateSnapshot> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut axis = Vec2::new(1.0, 0.0);
    let mut last = None;

    for (count, snapshot) in snapshot_rx.iter().enumerate() {
        if count as u64 >= ticks {
            break;
        }

        // Re-aim every second; pull or drop the tether line now and then.
        if count % 30 == 0 {
            axis = Vec2::new(rng.gen_range(-1.0..=1.0), rng.gen_range(-1.0..=1.0));
        }
        let toggle = count % 180 == 150;
        if cmd_tx
            .send(GameLoopCommand::PlayerCommand(PlayerCommand::Input {
                axis,
                tether_toggled: toggle,
            }))
            .is_err()
        {
            break;
        }

        for event in &snapshot.events {
            if let GameEvent::PlayerCaught { enemy } = event {
                warn!(
                    enemy = *enemy,
                    tick = snapshot.time.tick,
                    "player_caught_resetting"
                );
                let _ = cmd_tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::ResetLevel));
            }
        }

        if count > 0 && count % 150 == 0 {
            let (lit, fleeing) = summarize(&snapshot);
            info!(
                tick = snapshot.time.tick,
                phase = ?snapshot.phase,
                x = snapshot.player.position.x,
                y = snapshot.player.position.y,
                lit,
                fleeing,
                "progress"
            );
        }

        last = Some(snapshot);
    }

    last
}

/// Lit-lantern and fleeing-enemy counts for the summaries.
fn summarize(snapshot: &GameStateSnapshot) -> (usize, usize) {
    let lit = snapshot.tethers.iter().filter(|t| t.lit).count();
    let fleeing = snapshot
        .enemies
        .iter()
        .filter(|e| e.state == EnemyState::Flee)
        .count();
    (lit, fleeing)
}

fn load_level(path: &str) -> Result<LevelConfig, LevelError> {
    let text = std::fs::read_to_string(path)?;
    LevelConfig::from_json(&text)
}

fn print_usage() {
    eprintln!(
        "riverlight: headless runner for the river gameplay simulation\n\
         \n\
         Options:\n\
         \n\
           --level <path>    Level JSON file (default: built-in river course)\n\
           --ticks <n>       Snapshots to consume before exiting (default: 600)\n\
           --time-scale <f>  Loop speed multiplier, clamped to [0, 4] (default: 1)\n\
           --seed <n>        Wander input seed (default: 42)\n"
    );
}

fn parse_value(args: &[String], flag: &str) -> Option<String> {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            return Some(args[i + 1].clone());
        }
    }
    None
}

fn parse_u64(args: &[String], flag: &str, default: u64) -> u64 {
    parse_value(args, flag)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn parse_f64(args: &[String], flag: &str, default: f64) -> f64 {
    parse_value(args, flag)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_names(true)
        .compact()
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_flag_values() {
        let a = args(&["riverlight", "--ticks", "120", "--time-scale", "2.5"]);
        assert_eq!(parse_u64(&a, "--ticks", 600), 120);
        assert!((parse_f64(&a, "--time-scale", 1.0) - 2.5).abs() < 1e-12);
        assert_eq!(parse_u64(&a, "--seed", 42), 42);
    }

    #[test]
    fn test_parse_flag_missing_value_falls_back() {
        let a = args(&["riverlight", "--ticks"]);
        assert_eq!(parse_u64(&a, "--ticks", 600), 600);
        assert_eq!(parse_value(&a, "--ticks"), None);
    }

    #[test]
    fn test_level_json_matches_loader() {
        let level = levels::river_course();
        let json = serde_json::to_string(&level).unwrap();
        let parsed = LevelConfig::from_json(&json).unwrap();
        assert_eq!(parsed.tethers.len(), level.tethers.len());
        assert_eq!(parsed.enemies.len(), level.enemies.len());
        assert_eq!(parsed.player_start, level.player_start);
    }
}
