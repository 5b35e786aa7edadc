#![allow(dead_code)]

use std::convert::Infallible;
use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;

use vibe_shooter::config::{GameConfig, PowerUpPolicy};
use vibe_shooter::constants::{DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH};
use vibe_shooter::session::Session;
use vibe_shooter::snapshot::{Renderer, Screen, Snapshot};
use vibe_shooter::types::{Rect, Viewport};

pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

pub fn viewport() -> Viewport {
    Viewport::new(DEFAULT_VIEWPORT_WIDTH, DEFAULT_VIEWPORT_HEIGHT).unwrap()
}

pub fn rect(x: f64, y: f64, width: f64, height: f64) -> Rect {
    Rect::new(x, y, width, height).unwrap()
}

pub fn secs(s: f64) -> Duration {
    Duration::from_secs_f64(s)
}

/// No random debris or drops and no enemy return fire, so only what a test
/// places in the pools can interact.
pub fn quiet_config() -> GameConfig {
    GameConfig {
        debris_chance: 0.0,
        power_up_policy: PowerUpPolicy::Chance(0.0),
        shield_chance: 0.0,
        enemy_fire_interval: Duration::from_secs(3600),
        ..GameConfig::default()
    }
}

pub fn quiet_session() -> Session {
    Session::new(quiet_config(), viewport(), Duration::ZERO).unwrap()
}

/// What a renderer saw for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub screen: Screen,
    pub player: Rect,
    pub enemies: Vec<Rect>,
    pub projectiles: usize,
    pub lives: u32,
}

#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub frames: Vec<Frame>,
}

impl Renderer for RecordingRenderer {
    type Error = Infallible;

    fn render(&mut self, snapshot: &Snapshot<'_>) -> Result<(), Infallible> {
        self.frames.push(Frame {
            screen: snapshot.screen,
            player: snapshot.player.rect,
            enemies: snapshot.pools.enemies.iter().map(|e| e.rect).collect(),
            projectiles: snapshot.pools.projectiles.len(),
            lives: snapshot.hud.lives,
        });
        Ok(())
    }
}
