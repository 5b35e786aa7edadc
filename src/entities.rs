use crate::config::GameConfig;
use crate::types::{Rect, Size, Viewport};
use crate::upgrades::FireMode;

// --- Player ship ---
#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub rect: Rect,
    pub speed: f64,
    pub lives: u32,
    pub fire_mode: FireMode,
}

impl Player {
    /// Centered horizontally, resting on the bottom edge.
    pub fn new(config: &GameConfig, viewport: &Viewport) -> Self {
        let size = config.ship_size;
        let x = viewport.max_x(size.width()) / 2.0;
        let y = viewport.max_y(size.height());
        Player {
            rect: Rect::from_size(x, y, size),
            speed: config.ship_speed,
            lives: config.starting_lives,
            fire_mode: FireMode::Single,
        }
    }

    pub fn is_destroyed(&self) -> bool {
        self.lives == 0
    }

    /// Left edges of each laser in a volley of `shots`. A lone laser leaves from the
    /// center; wider volleys are spread evenly between the two outer muzzles.
    pub fn muzzles(&self, shots: usize, bullet_width: f64, inset: f64) -> Vec<f64> {
        if shots <= 1 {
            return vec![self.rect.center_x() - bullet_width / 2.0];
        }
        let left = self.rect.x + inset;
        let right = (self.rect.right() - inset - bullet_width).max(left);
        let step = (right - left) / (shots - 1) as f64;
        (0..shots).map(|i| left + step * i as f64).collect()
    }
}

// --- Projectile ---
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Owner {
    Player,
    Enemy,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Projectile {
    pub rect: Rect,
    pub velocity_y: f64,
    pub owner: Owner,
}

impl Projectile {
    pub fn player_laser(x: f64, y: f64, size: Size, speed: f64) -> Self {
        Projectile { rect: Rect::from_size(x, y, size), velocity_y: -speed, owner: Owner::Player }
    }

    pub fn enemy_laser(x: f64, y: f64, size: Size, speed: f64) -> Self {
        Projectile { rect: Rect::from_size(x, y, size), velocity_y: speed, owner: Owner::Enemy }
    }
}

// --- Enemy craft ---
#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub rect: Rect,
    pub velocity_y: f64,
    pub has_fired_this_pass: bool,
}

impl Enemy {
    pub fn new(x: f64, y: f64, size: Size, velocity_y: f64) -> Self {
        Enemy { rect: Rect::from_size(x, y, size), velocity_y, has_fired_this_pass: false }
    }

    /// Fully inside the viewport, so a shot from its nose starts on screen.
    pub fn is_on_screen(&self, viewport: &Viewport) -> bool {
        self.rect.y >= 0.0 && self.rect.bottom() <= viewport.height()
    }
}

// --- Debris ---
#[derive(Clone, Debug, PartialEq)]
pub struct Obstacle {
    pub rect: Rect,
    pub velocity_y: f64,
}

impl Obstacle {
    pub fn new(x: f64, y: f64, size: Size, velocity_y: f64) -> Self {
        Obstacle { rect: Rect::from_size(x, y, size), velocity_y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dual_muzzles_match_hull_insets() {
        let mut player = Player::new(&GameConfig::default(), &Viewport::new(800.0, 600.0).unwrap());
        player.rect.x = 100.0;
        assert_eq!(player.muzzles(2, 5.0, 10.0), vec![110.0, 165.0]);
        assert_eq!(player.muzzles(1, 5.0, 10.0), vec![137.5]);
        assert_eq!(player.muzzles(4, 5.0, 10.0).len(), 4);
    }
}
