use std::time::Duration;

use log::{debug, info};
use rand::Rng;

use crate::config::{GameConfig, PowerUpPolicy};
use crate::entities::{Enemy, Obstacle, Projectile};
use crate::pools::Pools;
use crate::state::GameState;
use crate::types::Viewport;
use crate::upgrades::{PowerUp, PowerUpKind};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SpawnReport {
    pub obstacles: usize,
    pub enemies: usize,
    pub power_up: Option<PowerUpKind>,
    pub enemy_shots: usize,
}

/// One tick of stochastic and threshold-triggered spawning.
pub fn spawn(
    config: &GameConfig,
    viewport: &Viewport,
    state: &mut GameState,
    pools: &mut Pools,
    now: Duration,
    rng: &mut impl Rng,
) -> SpawnReport {
    let mut report = SpawnReport::default();
    if spawn_debris(config, viewport, pools, rng) {
        report.obstacles = 1;
    }
    if pools.enemies.is_empty() {
        report.enemies = spawn_wave(config, viewport, state, pools, rng);
    }
    report.power_up = spawn_power_up(config, viewport, state, pools, rng);
    if enemy_return_fire(config, viewport, state, pools, now, rng) {
        report.enemy_shots = 1;
    }
    report
}

pub fn spawn_debris(config: &GameConfig, viewport: &Viewport, pools: &mut Pools, rng: &mut impl Rng) -> bool {
    if !rng.gen_bool(config.debris_chance) {
        return false;
    }
    let size = config.debris_size;
    let x = rng.gen_range(0.0..=viewport.max_x(size.width()));
    pools.obstacles.push(Obstacle::new(x, -size.height(), size, config.debris_speed));
    debug!("Debris spawned at x: {:.1}", x);
    true
}

/// Fills the enemy pool with the current wave. Enemies are scattered up to one
/// viewport height above the top edge so they drift in staggered.
pub fn spawn_wave(
    config: &GameConfig,
    viewport: &Viewport,
    state: &GameState,
    pools: &mut Pools,
    rng: &mut impl Rng,
) -> usize {
    let count = state.wave_size(config);
    let size = config.enemy_size;
    let speed = state.enemy_speed(config);
    let max_x = viewport.max_x(size.width());
    for _ in 0..count {
        let x = rng.gen_range(0.0..=max_x);
        let y = -rng.gen_range(0.0..=viewport.height());
        pools.enemies.push(Enemy::new(x, y, size, speed));
    }
    info!("Wave {} spawned: {} enemies at speed {:.2}", state.wave, count, speed);
    count
}

pub fn spawn_power_up(
    config: &GameConfig,
    viewport: &Viewport,
    state: &mut GameState,
    pools: &mut Pools,
    rng: &mut impl Rng,
) -> Option<PowerUpKind> {
    if pools.power_up.is_some() {
        return None;
    }
    let due = match config.power_up_policy {
        PowerUpPolicy::Chance(p) => rng.gen_bool(p),
        PowerUpPolicy::EveryKills(every) => {
            let due = state.kills >= state.next_power_up_kills;
            if due {
                state.next_power_up_kills = state.kills.saturating_add(every);
            }
            due
        }
    };
    if !due {
        return None;
    }

    let kind = if rng.gen_bool(config.shield_chance) { PowerUpKind::Shield } else { PowerUpKind::MultiShot };
    let size = config.power_up_size;
    let x = rng.gen_range(0.0..=viewport.max_x(size.width()));
    pools.offer_power_up(PowerUp::new(x, -size.height(), size, config.power_up_speed, kind));
    debug!("Power-up {} spawned at x: {:.1}", kind.label(), x);
    Some(kind)
}

/// Fires one volley from the ship's nose. Multi-shot lifts the volley one tier.
pub fn fire_volley(config: &GameConfig, state: &GameState, pools: &mut Pools) -> usize {
    let mode = if state.is_power_up_active(PowerUpKind::MultiShot) {
        state.fire_mode().boosted()
    } else {
        state.fire_mode()
    };
    let bullet = config.bullet_size;
    let ship = &state.player;
    let muzzles = ship.muzzles(mode.shots(), bullet.width(), config.muzzle_inset);
    for &x in &muzzles {
        pools.projectiles.push(Projectile::player_laser(x, ship.rect.y, bullet, config.player_bullet_speed));
    }
    debug!("Volley fired: {} lasers ({})", muzzles.len(), mode.label());
    muzzles.len()
}

/// When the fire interval has elapsed, one random on-screen enemy that has not
/// yet fired during its current pass shoots straight down.
pub fn enemy_return_fire(
    config: &GameConfig,
    viewport: &Viewport,
    state: &mut GameState,
    pools: &mut Pools,
    now: Duration,
    rng: &mut impl Rng,
) -> bool {
    let game_time = state.game_time(now);
    if game_time < state.next_enemy_fire_at {
        return false;
    }
    let ready: Vec<usize> = pools
        .enemies
        .iter()
        .enumerate()
        .filter(|(_, enemy)| !enemy.has_fired_this_pass && enemy.is_on_screen(viewport))
        .map(|(i, _)| i)
        .collect();
    if ready.is_empty() {
        return false;
    }

    let shooter = &mut pools.enemies[ready[rng.gen_range(0..ready.len())]];
    shooter.has_fired_this_pass = true;
    let bullet = config.bullet_size;
    let x = shooter.rect.center_x() - bullet.width() / 2.0;
    let y = shooter.rect.bottom();
    pools.projectiles.push(Projectile::enemy_laser(x, y, bullet, config.enemy_bullet_speed));
    state.next_enemy_fire_at = game_time + state.enemy_fire_interval(config);
    debug!("Enemy fired from x: {:.1}, y: {:.1}", x, y);
    true
}
