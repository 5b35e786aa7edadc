use std::time::Duration;

use crate::types::{Rect, Size};

/// Number of lasers per volley. Ordered, so tiers compare with `>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum FireMode {
    Single,
    Dual,
    Triple,
    Quad,
}

impl FireMode {
    pub fn shots(self) -> usize {
        match self {
            FireMode::Single => 1,
            FireMode::Dual => 2,
            FireMode::Triple => 3,
            FireMode::Quad => 4,
        }
    }

    /// Highest tier whose threshold `kills` has reached.
    pub fn for_kills(kills: u32, thresholds: &[u32; 3]) -> FireMode {
        let [dual, triple, quad] = *thresholds;
        if kills >= quad {
            FireMode::Quad
        } else if kills >= triple {
            FireMode::Triple
        } else if kills >= dual {
            FireMode::Dual
        } else {
            FireMode::Single
        }
    }

    pub fn boosted(self) -> FireMode {
        match self {
            FireMode::Single => FireMode::Dual,
            FireMode::Dual => FireMode::Triple,
            FireMode::Triple | FireMode::Quad => FireMode::Quad,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FireMode::Single => "single",
            FireMode::Dual => "dual",
            FireMode::Triple => "triple",
            FireMode::Quad => "quad",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PowerUpKind {
    /// Volleys fire one tier above the current fire mode.
    MultiShot,
    /// Hits are absorbed without losing a life.
    Shield,
}

impl PowerUpKind {
    pub fn label(self) -> &'static str {
        match self {
            PowerUpKind::MultiShot => "multi-shot",
            PowerUpKind::Shield => "shield",
        }
    }
}

/// A falling pickup.
#[derive(Clone, Debug, PartialEq)]
pub struct PowerUp {
    pub rect: Rect,
    pub velocity_y: f64,
    pub kind: PowerUpKind,
}

impl PowerUp {
    pub fn new(x: f64, y: f64, size: Size, velocity_y: f64, kind: PowerUpKind) -> Self {
        PowerUp { rect: Rect::from_size(x, y, size), velocity_y, kind }
    }
}

/// A collected power-up and the game-clock instant it runs out.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActivePowerUp {
    pub kind: PowerUpKind,
    pub expires_at: Duration,
}

impl ActivePowerUp {
    pub fn remaining(&self, game_time: Duration) -> Duration {
        self.expires_at.saturating_sub(game_time)
    }
}
