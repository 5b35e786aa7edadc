use std::time::Duration;

use log::info;

use crate::config::GameConfig;
use crate::entities::Owner;
use crate::pools::{Pools, remove_marked};
use crate::state::{GameState, HitOutcome};
use crate::types::overlaps;
use crate::upgrades::{FireMode, PowerUpKind};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CollisionReport {
    pub kills: u32,
    pub hits_taken: u32,
    pub hits_absorbed: u32,
    pub fire_mode_upgrade: Option<FireMode>,
    pub power_up: Option<PowerUpKind>,
}

/// Resolves every collision category for one tick, always in the same order:
/// player lasers against enemies, enemy lasers against the ship, debris
/// against the ship, then the falling power-up against the ship.
///
/// A laser scores at most one hit per tick: the first target in pool order
/// that it overlaps and that no earlier laser already claimed. Lasers
/// overlapping several enemies therefore under-count simultaneous kills.
///
/// Resolution stops as soon as the ship is destroyed.
pub fn resolve(state: &mut GameState, pools: &mut Pools, config: &GameConfig, now: Duration) -> CollisionReport {
    let mut report = CollisionReport::default();
    if state.is_game_over() {
        return report;
    }
    resolve_lasers_vs_enemies(state, pools, config, &mut report);
    resolve_lasers_vs_ship(state, pools, config, &mut report);
    if !state.is_game_over() {
        resolve_debris_vs_ship(state, pools, config, &mut report);
    }
    if !state.is_game_over() {
        resolve_power_up_pickup(state, pools, config, now, &mut report);
    }
    report
}

fn resolve_lasers_vs_enemies(state: &mut GameState, pools: &mut Pools, config: &GameConfig, report: &mut CollisionReport) {
    let mut spent = vec![false; pools.projectiles.len()];
    let mut downed = vec![false; pools.enemies.len()];

    for (pi, laser) in pools.projectiles.iter().enumerate() {
        if laser.owner != Owner::Player {
            continue;
        }
        let target = pools
            .enemies
            .iter()
            .enumerate()
            .position(|(ei, enemy)| !downed[ei] && overlaps(&laser.rect, &enemy.rect));
        if let Some(ei) = target {
            spent[pi] = true;
            downed[ei] = true;
        }
    }

    remove_marked(&mut pools.projectiles, &spent);
    let kills = remove_marked(&mut pools.enemies, &downed);
    for _ in 0..kills {
        if let Some(mode) = state.register_kill(config) {
            report.fire_mode_upgrade = Some(mode);
        }
    }
    report.kills += kills as u32;
}

fn resolve_lasers_vs_ship(state: &mut GameState, pools: &mut Pools, config: &GameConfig, report: &mut CollisionReport) {
    let ship = state.player.rect;
    let spent: Vec<bool> = pools
        .projectiles
        .iter()
        .map(|p| p.owner == Owner::Enemy && overlaps(&p.rect, &ship))
        .collect();
    let hits = remove_marked(&mut pools.projectiles, &spent);
    for _ in 0..hits {
        if state.is_game_over() {
            break;
        }
        apply_hit(state, config, report);
    }
}

fn resolve_debris_vs_ship(state: &mut GameState, pools: &mut Pools, config: &GameConfig, report: &mut CollisionReport) {
    let ship = state.player.rect;
    let crashed: Vec<bool> = pools.obstacles.iter().map(|o| overlaps(&o.rect, &ship)).collect();
    let hits = remove_marked(&mut pools.obstacles, &crashed);
    for _ in 0..hits {
        if state.is_game_over() {
            break;
        }
        apply_hit(state, config, report);
    }
}

fn resolve_power_up_pickup(
    state: &mut GameState,
    pools: &mut Pools,
    config: &GameConfig,
    now: Duration,
    report: &mut CollisionReport,
) {
    let touching = pools.power_up.as_ref().is_some_and(|p| overlaps(&p.rect, &state.player.rect));
    if !touching {
        return;
    }
    if let Some(power_up) = pools.power_up.take() {
        info!("Power-up {} collected.", power_up.kind.label());
        state.activate_power_up(power_up.kind, config.power_up_duration, now);
        report.power_up = Some(power_up.kind);
    }
}

fn apply_hit(state: &mut GameState, config: &GameConfig, report: &mut CollisionReport) {
    match state.take_hit(config) {
        HitOutcome::Absorbed => report.hits_absorbed += 1,
        HitOutcome::LifeLost { .. } | HitOutcome::Destroyed => report.hits_taken += 1,
    }
}
