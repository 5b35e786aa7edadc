use std::time::Duration;

use crate::entities::Player;
use crate::pools::Pools;
use crate::state::Phase;
use crate::types::Viewport;
use crate::upgrades::{FireMode, PowerUpKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Playing,
    Paused,
    GameOver,
}

impl From<Phase> for Screen {
    fn from(phase: Phase) -> Self {
        match phase {
            Phase::Playing => Screen::Playing,
            Phase::Paused => Screen::Paused,
            Phase::GameOver => Screen::GameOver,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Backdrop {
    Scrolling { offset: f64 },
    Static,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hud {
    pub score: u32,
    pub kills: u32,
    pub lives: u32,
    pub level: u32,
    pub wave: u32,
    pub fire_mode: FireMode,
    pub power_up: Option<(PowerUpKind, Duration)>,
}

/// Everything a renderer needs for one frame. Borrowed from the session.
#[derive(Clone, Copy, Debug)]
pub struct Snapshot<'a> {
    pub screen: Screen,
    pub viewport: Viewport,
    pub backdrop: Backdrop,
    pub player: &'a Player,
    pub pools: &'a Pools,
    pub hud: Hud,
}

pub trait Renderer {
    type Error;

    fn render(&mut self, snapshot: &Snapshot<'_>) -> Result<(), Self::Error>;
}
