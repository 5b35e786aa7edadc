use crate::config::{EnemyExit, GameConfig};
use crate::entities::Player;
use crate::input::InputFrame;
use crate::pools::{Pools, remove_where};
use crate::state::GameState;
use crate::types::Viewport;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PruneReport {
    pub projectiles: usize,
    pub obstacles: usize,
    pub enemies: usize,
    pub enemies_wrapped: usize,
    pub power_up: bool,
}

/// Moves the ship from input and keeps it fully on screen. A touch drag wins
/// over the direction keys.
pub fn steer_player(player: &mut Player, input: &InputFrame, viewport: &Viewport) {
    if let Some((x, y)) = input.drag_to {
        player.rect.x = x - player.rect.width() / 2.0;
        player.rect.y = y - player.rect.height() / 2.0;
    } else {
        let (dx, dy) = input.direction();
        player.rect.x += dx * player.speed;
        player.rect.y += dy * player.speed;
    }
    viewport.clamp(&mut player.rect);
}

/// Advances every pooled entity by its velocity.
pub fn integrate(pools: &mut Pools) {
    for projectile in &mut pools.projectiles {
        projectile.rect.y += projectile.velocity_y;
    }
    for obstacle in &mut pools.obstacles {
        obstacle.rect.y += obstacle.velocity_y;
    }
    for enemy in &mut pools.enemies {
        enemy.rect.y += enemy.velocity_y;
    }
    if let Some(power_up) = &mut pools.power_up {
        power_up.rect.y += power_up.velocity_y;
    }
}

/// Removes whatever left the viewport. Projectiles must stay within
/// `0..=height`; everything else only leaves through the bottom edge.
pub fn prune(pools: &mut Pools, viewport: &Viewport, exit: EnemyExit) -> PruneReport {
    let height = viewport.height();
    let mut report = PruneReport {
        projectiles: remove_where(&mut pools.projectiles, |p| p.rect.y < 0.0 || p.rect.y > height),
        obstacles: remove_where(&mut pools.obstacles, |o| o.rect.y > height),
        ..PruneReport::default()
    };

    match exit {
        EnemyExit::Despawn => {
            report.enemies = remove_where(&mut pools.enemies, |e| e.rect.y > height);
        }
        EnemyExit::Wrap => {
            for enemy in pools.enemies.iter_mut().filter(|e| e.rect.y > height) {
                enemy.rect.y = -enemy.rect.height();
                enemy.has_fired_this_pass = false;
                report.enemies_wrapped += 1;
            }
        }
    }

    if pools.power_up.as_ref().is_some_and(|p| p.rect.y > height) {
        pools.power_up = None;
        report.power_up = true;
    }
    report
}

pub fn scroll_backdrop(state: &mut GameState, config: &GameConfig, viewport: &Viewport) {
    state.backdrop_offset += config.backdrop_speed;
    if state.backdrop_offset >= viewport.height() {
        state.backdrop_offset = 0.0;
    }
}

/// Full motion step for one tick.
pub fn advance(state: &mut GameState, pools: &mut Pools, config: &GameConfig, viewport: &Viewport) -> PruneReport {
    integrate(pools);
    scroll_backdrop(state, config, viewport);
    prune(pools, viewport, config.enemy_exit)
}
