mod common;

use std::time::Duration;

use common::{quiet_config, secs, seeded_rng, viewport};
use vibe_shooter::config::{GameConfig, KillPenalty, PowerUpPolicy};
use vibe_shooter::entities::{Enemy, Owner};
use vibe_shooter::pools::Pools;
use vibe_shooter::spawner::{enemy_return_fire, fire_volley, spawn, spawn_debris, spawn_power_up, spawn_wave};
use vibe_shooter::state::GameState;
use vibe_shooter::types::Size;
use vibe_shooter::upgrades::{FireMode, PowerUpKind};

fn fresh(config: &GameConfig) -> (GameState, Pools) {
    (GameState::new(config, &viewport(), Duration::ZERO, 0), Pools::new())
}

fn enemy_at(x: f64, y: f64) -> Enemy {
    Enemy::new(x, y, Size::new(50.0, 50.0).unwrap(), 2.0)
}

// ── waves ─────────────────────────────────────────────────────────────────────

#[test]
fn wave_size_grows_with_wave_number() {
    let config = quiet_config();
    let mut rng = seeded_rng();
    for wave in 1..=4u32 {
        let (mut state, mut pools) = fresh(&config);
        state.wave = wave;
        let spawned = spawn_wave(&config, &viewport(), &state, &mut pools, &mut rng);
        assert_eq!(spawned, wave as usize * 5);
        assert_eq!(pools.enemies.len(), spawned);
    }
}

#[test]
fn wave_enemies_start_above_the_screen_within_bounds() {
    let config = quiet_config();
    let mut rng = seeded_rng();
    let (mut state, mut pools) = fresh(&config);
    state.wave = 6;
    spawn_wave(&config, &viewport(), &state, &mut pools, &mut rng);
    for enemy in &pools.enemies {
        assert!((0.0..=750.0).contains(&enemy.rect.x), "x = {}", enemy.rect.x);
        assert!((-600.0..=0.0).contains(&enemy.rect.y), "y = {}", enemy.rect.y);
        assert!(!enemy.has_fired_this_pass);
    }
}

#[test]
fn enemies_only_spawn_when_the_pool_is_empty() {
    let config = quiet_config();
    let mut rng = seeded_rng();
    let (mut state, mut pools) = fresh(&config);
    let first = spawn(&config, &viewport(), &mut state, &mut pools, Duration::ZERO, &mut rng);
    assert_eq!(first.enemies, 5);
    let second = spawn(&config, &viewport(), &mut state, &mut pools, secs(0.016), &mut rng);
    assert_eq!(second.enemies, 0);
    assert_eq!(pools.enemies.len(), 5);
}

// ── debris ────────────────────────────────────────────────────────────────────

#[test]
fn debris_enters_just_above_the_top_edge() {
    let config = GameConfig { debris_chance: 1.0, ..quiet_config() };
    let mut rng = seeded_rng();
    let mut pools = Pools::new();
    for _ in 0..20 {
        assert!(spawn_debris(&config, &viewport(), &mut pools, &mut rng));
    }
    assert_eq!(pools.obstacles.len(), 20);
    for obstacle in &pools.obstacles {
        assert_eq!(obstacle.rect.y, -30.0);
        assert!((0.0..=770.0).contains(&obstacle.rect.x));
    }
}

#[test]
fn zero_debris_chance_never_spawns() {
    let config = quiet_config();
    let mut rng = seeded_rng();
    let mut pools = Pools::new();
    assert!((0..500).all(|_| !spawn_debris(&config, &viewport(), &mut pools, &mut rng)));
}

// ── power-ups ─────────────────────────────────────────────────────────────────

#[test]
fn at_most_one_power_up_is_ever_in_flight() {
    let config = GameConfig { power_up_policy: PowerUpPolicy::Chance(1.0), ..quiet_config() };
    let mut rng = seeded_rng();
    let (mut state, mut pools) = fresh(&config);

    assert_eq!(
        spawn_power_up(&config, &viewport(), &mut state, &mut pools, &mut rng),
        Some(PowerUpKind::MultiShot)
    );
    for _ in 0..100 {
        assert_eq!(spawn_power_up(&config, &viewport(), &mut state, &mut pools, &mut rng), None);
    }
    assert!(pools.power_up.is_some());
    assert_eq!(pools.power_up.as_ref().map(|p| p.rect.y), Some(-30.0));
}

#[test]
fn shield_chance_picks_the_drop_kind() {
    let config = GameConfig {
        power_up_policy: PowerUpPolicy::Chance(1.0),
        shield_chance: 1.0,
        ..quiet_config()
    };
    let mut rng = seeded_rng();
    let (mut state, mut pools) = fresh(&config);
    assert_eq!(
        spawn_power_up(&config, &viewport(), &mut state, &mut pools, &mut rng),
        Some(PowerUpKind::Shield)
    );
}

#[test]
fn every_kills_policy_drops_on_thresholds() {
    let config = GameConfig { power_up_policy: PowerUpPolicy::EveryKills(3), ..quiet_config() };
    let mut rng = seeded_rng();
    let (mut state, mut pools) = fresh(&config);

    assert_eq!(spawn_power_up(&config, &viewport(), &mut state, &mut pools, &mut rng), None);

    state.kills = 3;
    assert!(spawn_power_up(&config, &viewport(), &mut state, &mut pools, &mut rng).is_some());
    assert_eq!(state.next_power_up_kills, 6);

    pools.power_up = None;
    state.kills = 4;
    assert_eq!(spawn_power_up(&config, &viewport(), &mut state, &mut pools, &mut rng), None);

    state.kills = 6;
    assert!(spawn_power_up(&config, &viewport(), &mut state, &mut pools, &mut rng).is_some());
    assert_eq!(state.next_power_up_kills, 9);
}

#[test]
fn kill_penalty_keeps_the_gap_to_the_next_drop() {
    let config = GameConfig {
        power_up_policy: PowerUpPolicy::EveryKills(5),
        kill_penalty: KillPenalty::Reset,
        ..quiet_config()
    };
    let mut rng = seeded_rng();
    let (mut state, mut pools) = fresh(&config);

    state.kills = 5;
    assert!(spawn_power_up(&config, &viewport(), &mut state, &mut pools, &mut rng).is_some());
    pools.power_up = None;

    state.take_hit(&config);
    assert_eq!(state.kills, 0);
    assert_eq!(state.next_power_up_kills, 5);

    state.kills = 4;
    assert_eq!(spawn_power_up(&config, &viewport(), &mut state, &mut pools, &mut rng), None);
    state.kills = 5;
    assert!(spawn_power_up(&config, &viewport(), &mut state, &mut pools, &mut rng).is_some());
}

#[test]
fn decrement_penalty_shifts_the_drop_threshold() {
    let config = GameConfig {
        power_up_policy: PowerUpPolicy::EveryKills(5),
        kill_penalty: KillPenalty::Decrement(2),
        ..quiet_config()
    };
    let (mut state, _) = fresh(&config);
    state.kills = 3;
    state.take_hit(&config);
    assert_eq!(state.kills, 1);
    assert_eq!(state.next_power_up_kills, 3);
}

// ── volleys ───────────────────────────────────────────────────────────────────

#[test]
fn volley_matches_fire_mode() {
    let config = quiet_config();
    let (mut state, mut pools) = fresh(&config);
    assert_eq!(fire_volley(&config, &state, &mut pools), 1);

    for _ in 0..10 {
        state.register_kill(&config);
    }
    assert_eq!(state.fire_mode(), FireMode::Triple);
    pools.clear();
    assert_eq!(fire_volley(&config, &state, &mut pools), 3);
    assert_eq!(pools.projectiles_of(Owner::Player).count(), 3);
    assert!(pools.projectiles.iter().all(|p| p.velocity_y < 0.0));
    assert!(pools.projectiles.iter().all(|p| p.rect.y == state.player.rect.y));
}

#[test]
fn single_laser_leaves_from_the_ship_center() {
    let config = quiet_config();
    let (state, mut pools) = fresh(&config);
    fire_volley(&config, &state, &mut pools);
    let laser = pools.projectiles[0].rect;
    assert_eq!(laser.center_x(), state.player.rect.center_x());
}

#[test]
fn multi_shot_lifts_the_volley_one_tier() {
    let config = quiet_config();
    let (mut state, mut pools) = fresh(&config);
    state.activate_power_up(PowerUpKind::MultiShot, secs(5.0), Duration::ZERO);
    assert_eq!(fire_volley(&config, &state, &mut pools), 2);

    let ship = state.player.rect;
    let xs: Vec<f64> = pools.projectiles.iter().map(|p| p.rect.x).collect();
    assert_eq!(xs, vec![ship.x + 10.0, ship.right() - 15.0]);
}

#[test]
fn multi_shot_cannot_exceed_quad() {
    let config = quiet_config();
    let (mut state, mut pools) = fresh(&config);
    for _ in 0..20 {
        state.register_kill(&config);
    }
    state.activate_power_up(PowerUpKind::MultiShot, secs(5.0), Duration::ZERO);
    assert_eq!(fire_volley(&config, &state, &mut pools), 4);
}

// ── enemy return fire ─────────────────────────────────────────────────────────

fn firing_config() -> GameConfig {
    GameConfig { enemy_fire_interval: secs(1.0), ..quiet_config() }
}

#[test]
fn enemies_wait_for_the_fire_interval() {
    let config = firing_config();
    let mut rng = seeded_rng();
    let (mut state, mut pools) = fresh(&config);
    pools.enemies.push(enemy_at(100.0, 100.0));

    assert!(!enemy_return_fire(&config, &viewport(), &mut state, &mut pools, secs(0.5), &mut rng));
    assert!(enemy_return_fire(&config, &viewport(), &mut state, &mut pools, secs(1.0), &mut rng));

    let shot = &pools.projectiles[0];
    assert_eq!(shot.owner, Owner::Enemy);
    assert_eq!(shot.rect.x, 122.5);
    assert_eq!(shot.rect.y, 150.0);
    assert!(shot.velocity_y > 0.0);
}

#[test]
fn each_enemy_fires_once_per_pass() {
    let config = firing_config();
    let mut rng = seeded_rng();
    let (mut state, mut pools) = fresh(&config);
    pools.enemies.push(enemy_at(100.0, 100.0));

    assert!(enemy_return_fire(&config, &viewport(), &mut state, &mut pools, secs(1.0), &mut rng));
    assert!(!enemy_return_fire(&config, &viewport(), &mut state, &mut pools, secs(2.5), &mut rng));
    assert!(!enemy_return_fire(&config, &viewport(), &mut state, &mut pools, secs(9.0), &mut rng));

    pools.enemies.push(enemy_at(300.0, 200.0));
    assert!(enemy_return_fire(&config, &viewport(), &mut state, &mut pools, secs(9.5), &mut rng));
    assert!(pools.enemies.iter().all(|e| e.has_fired_this_pass));
    assert_eq!(pools.projectiles.len(), 2);
}

#[test]
fn enemies_above_the_screen_hold_fire() {
    let config = firing_config();
    let mut rng = seeded_rng();
    let (mut state, mut pools) = fresh(&config);
    pools.enemies.push(enemy_at(100.0, -10.0));
    assert!(!enemy_return_fire(&config, &viewport(), &mut state, &mut pools, secs(5.0), &mut rng));
    assert!(pools.projectiles.is_empty());
}
