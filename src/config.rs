use std::time::Duration;

use crate::constants::*;
use crate::error::GameError;
use crate::types::Size;

/// What happens to the kill counter when the player loses a life.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KillPenalty {
    Keep,
    Reset,
    Decrement(u32),
}

impl KillPenalty {
    pub fn apply(self, kills: u32) -> u32 {
        match self {
            KillPenalty::Keep => kills,
            KillPenalty::Reset => 0,
            KillPenalty::Decrement(step) => kills.saturating_sub(step),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PowerUpPolicy {
    /// Bernoulli trial each tick.
    Chance(f64),
    /// One drop every `n` kills.
    EveryKills(u32),
}

/// What an enemy does after sliding past the bottom edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnemyExit {
    Despawn,
    /// Re-enter from the top with return fire re-armed.
    Wrap,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub ship_size: Size,
    pub ship_speed: f64,
    pub starting_lives: u32,

    pub bullet_size: Size,
    pub player_bullet_speed: f64,
    pub enemy_bullet_speed: f64,
    pub muzzle_inset: f64,

    pub debris_size: Size,
    pub debris_speed: f64,
    pub debris_chance: f64,

    pub enemy_size: Size,
    pub enemy_speed: f64,
    pub enemy_speed_growth: f64,
    pub enemies_per_wave: u32,
    pub max_level: u32,
    pub enemy_fire_interval: Duration,
    pub enemy_fire_decay: f64,
    pub enemy_exit: EnemyExit,
    pub score_per_kill: u32,

    pub power_up_size: Size,
    pub power_up_speed: f64,
    pub power_up_policy: PowerUpPolicy,
    pub power_up_duration: Duration,
    pub shield_chance: f64,

    pub fire_mode_thresholds: [u32; 3],
    pub kill_penalty: KillPenalty,

    pub backdrop_speed: f64,
    pub static_backdrop_kills: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            ship_size: SHIP_SIZE,
            ship_speed: SHIP_SPEED,
            starting_lives: STARTING_LIVES,
            bullet_size: BULLET_SIZE,
            player_bullet_speed: PLAYER_BULLET_SPEED,
            enemy_bullet_speed: ENEMY_BULLET_SPEED,
            muzzle_inset: MUZZLE_INSET,
            debris_size: DEBRIS_SIZE,
            debris_speed: DEBRIS_SPEED,
            debris_chance: DEBRIS_SPAWN_CHANCE,
            enemy_size: ENEMY_SIZE,
            enemy_speed: ENEMY_SPEED,
            enemy_speed_growth: ENEMY_SPEED_GROWTH,
            enemies_per_wave: ENEMIES_PER_WAVE,
            max_level: MAX_LEVEL,
            enemy_fire_interval: Duration::from_millis(ENEMY_FIRE_INTERVAL_MS),
            enemy_fire_decay: ENEMY_FIRE_INTERVAL_DECAY,
            enemy_exit: EnemyExit::Despawn,
            score_per_kill: SCORE_PER_KILL,
            power_up_size: POWER_UP_SIZE,
            power_up_speed: POWER_UP_SPEED,
            power_up_policy: PowerUpPolicy::Chance(POWER_UP_SPAWN_CHANCE),
            power_up_duration: Duration::from_millis(POWER_UP_DURATION_MS),
            shield_chance: SHIELD_DROP_CHANCE,
            fire_mode_thresholds: FIRE_MODE_THRESHOLDS,
            kill_penalty: KillPenalty::Keep,
            backdrop_speed: BACKDROP_SCROLL_SPEED,
            static_backdrop_kills: STATIC_BACKDROP_KILLS,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), GameError> {
        check_probability("debris_chance", self.debris_chance)?;
        check_probability("shield_chance", self.shield_chance)?;
        match self.power_up_policy {
            PowerUpPolicy::Chance(p) => check_probability("power_up_policy", p)?,
            PowerUpPolicy::EveryKills(0) => {
                return Err(invalid("power_up_policy", "kill interval must be at least 1"));
            }
            PowerUpPolicy::EveryKills(_) => {}
        }

        for (name, speed) in [
            ("ship_speed", self.ship_speed),
            ("player_bullet_speed", self.player_bullet_speed),
            ("enemy_bullet_speed", self.enemy_bullet_speed),
            ("debris_speed", self.debris_speed),
            ("enemy_speed", self.enemy_speed),
            ("power_up_speed", self.power_up_speed),
        ] {
            if !(speed.is_finite() && speed > 0.0) {
                return Err(invalid(name, "must be finite and > 0"));
            }
        }
        if !(self.backdrop_speed.is_finite() && self.backdrop_speed >= 0.0) {
            return Err(invalid("backdrop_speed", "must be finite and >= 0"));
        }
        if !(self.muzzle_inset.is_finite() && self.muzzle_inset >= 0.0) {
            return Err(invalid("muzzle_inset", "must be finite and >= 0"));
        }

        if self.starting_lives == 0 {
            return Err(invalid("starting_lives", "must be at least 1"));
        }
        if self.enemies_per_wave == 0 {
            return Err(invalid("enemies_per_wave", "must be at least 1"));
        }
        if self.max_level == 0 {
            return Err(invalid("max_level", "must be at least 1"));
        }
        if !(self.enemy_speed_growth.is_finite() && self.enemy_speed_growth >= 1.0) {
            return Err(invalid("enemy_speed_growth", "must be >= 1.0"));
        }
        if !(self.enemy_fire_decay > 0.0 && self.enemy_fire_decay <= 1.0) {
            return Err(invalid("enemy_fire_decay", "must be in (0.0, 1.0]"));
        }
        if self.enemy_fire_interval.is_zero() {
            return Err(invalid("enemy_fire_interval", "must be non-zero"));
        }
        if self.power_up_duration.is_zero() {
            return Err(invalid("power_up_duration", "must be non-zero"));
        }

        let [dual, triple, quad] = self.fire_mode_thresholds;
        if dual == 0 || dual >= triple || triple >= quad {
            return Err(invalid("fire_mode_thresholds", "must be non-zero and strictly ascending"));
        }
        Ok(())
    }
}

fn check_probability(name: &'static str, value: f64) -> Result<(), GameError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(GameError::InvalidProbability { name, value })
    }
}

fn invalid(name: &'static str, reason: &'static str) -> GameError {
    GameError::InvalidConfig { name, reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_out_of_range_probability() {
        let config = GameConfig { debris_chance: 1.5, ..GameConfig::default() };
        assert_eq!(
            config.validate(),
            Err(GameError::InvalidProbability { name: "debris_chance", value: 1.5 })
        );
    }

    #[test]
    fn rejects_unordered_thresholds() {
        let config = GameConfig { fire_mode_thresholds: [5, 5, 20], ..GameConfig::default() };
        assert!(matches!(
            config.validate(),
            Err(GameError::InvalidConfig { name: "fire_mode_thresholds", .. })
        ));
    }

    #[test]
    fn rejects_zero_kill_interval() {
        let config = GameConfig { power_up_policy: PowerUpPolicy::EveryKills(0), ..GameConfig::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn kill_penalty_policies() {
        assert_eq!(KillPenalty::Keep.apply(7), 7);
        assert_eq!(KillPenalty::Reset.apply(7), 0);
        assert_eq!(KillPenalty::Decrement(3).apply(7), 4);
        assert_eq!(KillPenalty::Decrement(3).apply(2), 0);
    }
}
