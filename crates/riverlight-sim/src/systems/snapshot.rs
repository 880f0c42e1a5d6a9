//! Snapshot system: queries the world and assembles the complete
//! GameStateSnapshot handed to the renderer. Read-only over the world.

use hecs::World;

use riverlight_core::components::{CameraRig, Enemy, Player, Tether};
use riverlight_core::constants::LIT_THRESHOLD;
use riverlight_core::enums::GamePhase;
use riverlight_core::events::GameEvent;
use riverlight_core::state::{
    CameraView, EnemyView, GameStateSnapshot, PlayerView, TetherView,
};
use riverlight_core::types::{Position, SimTime};

use crate::registry::{EnemyRoster, TetherRegistry};

/// Build the snapshot for this tick. Tethers and enemies come out in
/// registration order regardless of world storage order.
pub fn build_snapshot(
    world: &World,
    time: SimTime,
    phase: GamePhase,
    tethers: &TetherRegistry,
    enemies: &EnemyRoster,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time,
        phase,
        player: build_player(world),
        tethers: build_tethers(world, tethers),
        enemies: build_enemies(world, enemies),
        camera: build_camera(world),
        events,
    }
}

fn build_player(world: &World) -> PlayerView {
    world
        .query::<(&Player, &Position)>()
        .iter()
        .next()
        .map(|(_, (player, position))| PlayerView {
            position: position.0,
            orientation: player.orientation,
            tether_state: player.tether_state,
            bound_tether: player.bound_tether,
        })
        .unwrap_or_default()
}

fn build_tethers(world: &World, tethers: &TetherRegistry) -> Vec<TetherView> {
    tethers
        .iter()
        .filter_map(|(_, entity)| {
            let tether = world.get::<&Tether>(entity).ok()?;
            let position = world.get::<&Position>(entity).ok()?;
            Some(TetherView {
                position: position.0,
                kind: tether.kind,
                charge: tether.charge,
                lit: tether.charge > LIT_THRESHOLD,
                lit_threshold: LIT_THRESHOLD,
            })
        })
        .collect()
}

fn build_enemies(world: &World, enemies: &EnemyRoster) -> Vec<EnemyView> {
    enemies
        .iter()
        .filter_map(|(_, entity)| {
            let enemy = world.get::<&Enemy>(entity).ok()?;
            let position = world.get::<&Position>(entity).ok()?;
            Some(EnemyView {
                position: position.0,
                orientation: enemy.orientation,
                state: enemy.state,
            })
        })
        .collect()
}

fn build_camera(world: &World) -> CameraView {
    world
        .query::<&CameraRig>()
        .iter()
        .next()
        .map(|(_, rig)| CameraView {
            position: rig.position,
            zoomed: rig.zoomed,
        })
        .unwrap_or_default()
}
