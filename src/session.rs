use std::time::Duration;

use log::info;
use rand::Rng;

use crate::collision::{self, CollisionReport};
use crate::config::GameConfig;
use crate::error::GameError;
use crate::input::InputFrame;
use crate::motion::{self, PruneReport};
use crate::pools::Pools;
use crate::snapshot::{Backdrop, Hud, Snapshot};
use crate::spawner::{self, SpawnReport};
use crate::state::{GameState, Phase};
use crate::types::Viewport;
use crate::upgrades::PowerUpKind;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TickReport {
    pub expired: Option<PowerUpKind>,
    pub volley: usize,
    pub spawned: SpawnReport,
    pub pruned: PruneReport,
    pub collisions: CollisionReport,
    pub wave_cleared: bool,
}

/// Context object for one play session: configuration, bounds, global state
/// and entity pools. Every component works on the pieces handed to it here.
#[derive(Clone, Debug)]
pub struct Session {
    pub config: GameConfig,
    pub state: GameState,
    pub pools: Pools,
    viewport: Viewport,
}

impl Session {
    pub fn new(config: GameConfig, viewport: Viewport, now: Duration) -> Result<Self, GameError> {
        config.validate()?;
        let state = GameState::new(&config, &viewport, now, 0);
        info!("Session started in {}x{} viewport.", viewport.width(), viewport.height());
        Ok(Session { config, state, pools: Pools::new(), viewport })
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn generation(&self) -> u64 {
        self.state.generation()
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        viewport.clamp(&mut self.state.player.rect);
        info!("Viewport resized to {}x{}", viewport.width(), viewport.height());
    }

    pub fn toggle_pause(&mut self, now: Duration) -> Phase {
        self.state.toggle_pause(now)
    }

    /// Starts over with fresh state and empty pools. Only honored after game over.
    pub fn restart(&mut self, now: Duration) -> bool {
        if !self.state.is_game_over() {
            return false;
        }
        let generation = self.state.generation() + 1;
        self.state = GameState::new(&self.config, &self.viewport, now, generation);
        self.pools.clear();
        info!("Session restarted (generation {}).", generation);
        true
    }

    /// One tick: timers, input, spawning, motion, collisions, wave progress.
    /// Does nothing unless the session is playing.
    pub fn advance(&mut self, input: &InputFrame, now: Duration, rng: &mut impl Rng) -> TickReport {
        let mut report = TickReport::default();
        if !self.state.is_playing() {
            return report;
        }
        let Session { config, state, pools, viewport } = self;

        report.expired = state.expire_power_up(now);

        motion::steer_player(&mut state.player, input, viewport);
        if input.fire {
            report.volley = spawner::fire_volley(config, state, pools);
        }

        report.spawned = spawner::spawn(config, viewport, state, pools, now, rng);
        report.pruned = motion::advance(state, pools, config, viewport);
        report.collisions = collision::resolve(state, pools, config, now);

        if state.is_playing() && pools.enemies.is_empty() && report.collisions.kills > 0 {
            state.advance_wave(config);
            report.wave_cleared = true;
        }
        report
    }

    pub fn snapshot(&self, now: Duration) -> Snapshot<'_> {
        let state = &self.state;
        let game_time = state.game_time(now);
        let backdrop = if state.backdrop_is_static(&self.config) {
            Backdrop::Static
        } else {
            Backdrop::Scrolling { offset: state.backdrop_offset }
        };
        Snapshot {
            screen: state.phase().into(),
            viewport: self.viewport,
            backdrop,
            player: &state.player,
            pools: &self.pools,
            hud: Hud {
                score: state.score,
                kills: state.kills,
                lives: state.lives(),
                level: state.level,
                wave: state.wave,
                fire_mode: state.fire_mode(),
                power_up: state.power_up().map(|active| (active.kind, active.remaining(game_time))),
            },
        }
    }
}
