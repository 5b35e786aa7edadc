use std::time::Duration;

use log::info;

use crate::config::{GameConfig, PowerUpPolicy};
use crate::entities::Player;
use crate::types::Viewport;
use crate::upgrades::{ActivePowerUp, FireMode, PowerUpKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Playing,
    Paused,
    GameOver,
}

/// Host time minus time spent paused. Timed effects are measured on this
/// clock so a pause neither burns nor extends them.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct GameClock {
    paused_total: Duration,
    paused_since: Option<Duration>,
}

impl GameClock {
    fn game_time(&self, now: Duration) -> Duration {
        let frozen_at = self.paused_since.unwrap_or(now);
        frozen_at.saturating_sub(self.paused_total)
    }

    fn pause(&mut self, now: Duration) {
        self.paused_since.get_or_insert(now);
    }

    fn resume(&mut self, now: Duration) {
        if let Some(since) = self.paused_since.take() {
            self.paused_total += now.saturating_sub(since);
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitOutcome {
    Absorbed,
    LifeLost { remaining: u32 },
    Destroyed,
}

/// Global state of one play session. Replaced wholesale on restart.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub player: Player,
    pub score: u32,
    pub kills: u32,
    pub level: u32,
    pub wave: u32,
    pub backdrop_offset: f64,
    /// Game-clock instant at which enemies may fire again.
    pub next_enemy_fire_at: Duration,
    /// Kill count that releases the next drop under `PowerUpPolicy::EveryKills`.
    pub next_power_up_kills: u32,
    phase: Phase,
    power_up: Option<ActivePowerUp>,
    clock: GameClock,
    generation: u64,
}

impl GameState {
    pub fn new(config: &GameConfig, viewport: &Viewport, now: Duration, generation: u64) -> Self {
        let mut state = GameState {
            player: Player::new(config, viewport),
            score: 0,
            kills: 0,
            level: 1,
            wave: 1,
            backdrop_offset: 0.0,
            next_enemy_fire_at: Duration::ZERO,
            next_power_up_kills: match config.power_up_policy {
                PowerUpPolicy::EveryKills(every) => every,
                PowerUpPolicy::Chance(_) => 0,
            },
            phase: Phase::Playing,
            power_up: None,
            clock: GameClock::default(),
            generation,
        };
        state.next_enemy_fire_at = state.game_time(now) + state.enemy_fire_interval(config);
        state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_playing(&self) -> bool {
        self.phase == Phase::Playing
    }

    pub fn is_paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn lives(&self) -> u32 {
        self.player.lives
    }

    pub fn fire_mode(&self) -> FireMode {
        self.player.fire_mode
    }

    pub fn game_time(&self, now: Duration) -> Duration {
        self.clock.game_time(now)
    }

    // --- Pause ---

    /// Playing <-> Paused. Game over is unaffected.
    pub fn toggle_pause(&mut self, now: Duration) -> Phase {
        match self.phase {
            Phase::Playing => {
                self.clock.pause(now);
                self.phase = Phase::Paused;
                info!("Paused at {:?} game time.", self.game_time(now));
            }
            Phase::Paused => {
                self.clock.resume(now);
                self.phase = Phase::Playing;
                info!("Resumed at {:?} game time.", self.game_time(now));
            }
            Phase::GameOver => {}
        }
        self.phase
    }

    // --- Power-ups ---

    pub fn power_up(&self) -> Option<ActivePowerUp> {
        self.power_up
    }

    pub fn power_up_active(&self) -> bool {
        self.power_up.is_some()
    }

    pub fn is_power_up_active(&self, kind: PowerUpKind) -> bool {
        self.power_up.is_some_and(|active| active.kind == kind)
    }

    /// Starts (or restarts) a power-up lasting `duration` of game time.
    pub fn activate_power_up(&mut self, kind: PowerUpKind, duration: Duration, now: Duration) {
        let expires_at = self.game_time(now) + duration;
        info!("Power-up {} active until {:?}.", kind.label(), expires_at);
        self.power_up = Some(ActivePowerUp { kind, expires_at });
    }

    /// Clears the power-up once its expiry instant has passed.
    pub fn expire_power_up(&mut self, now: Duration) -> Option<PowerUpKind> {
        let game_time = self.game_time(now);
        match self.power_up {
            Some(active) if game_time >= active.expires_at => {
                self.power_up = None;
                info!("Power-up {} expired.", active.kind.label());
                Some(active.kind)
            }
            _ => None,
        }
    }

    // --- Combat bookkeeping ---

    /// Counts a kill. Returns the new fire mode if this kill crossed a threshold.
    pub fn register_kill(&mut self, config: &GameConfig) -> Option<FireMode> {
        self.kills += 1;
        self.score += config.score_per_kill;
        let earned = FireMode::for_kills(self.kills, &config.fire_mode_thresholds);
        if earned > self.player.fire_mode {
            self.player.fire_mode = earned;
            info!("Fire mode upgraded to {} at {} kills.", earned.label(), self.kills);
            Some(earned)
        } else {
            None
        }
    }

    /// Applies one hit to the player. Reaching zero lives ends the session.
    pub fn take_hit(&mut self, config: &GameConfig) -> HitOutcome {
        if self.is_power_up_active(PowerUpKind::Shield) {
            return HitOutcome::Absorbed;
        }
        if self.player.lives == 0 {
            return HitOutcome::Destroyed;
        }
        self.player.lives -= 1;
        let kept = config.kill_penalty.apply(self.kills);
        // The drop threshold moves with the kill count so the gap to the next drop is kept.
        self.next_power_up_kills = self.next_power_up_kills.saturating_sub(self.kills - kept);
        self.kills = kept;
        if self.player.lives == 0 {
            self.phase = Phase::GameOver;
            info!("Ship destroyed. Game over with score {}.", self.score);
            HitOutcome::Destroyed
        } else {
            info!("Ship hit. Lives left: {}", self.player.lives);
            HitOutcome::LifeLost { remaining: self.player.lives }
        }
    }

    // --- Waves ---

    pub fn advance_wave(&mut self, config: &GameConfig) {
        self.wave += 1;
        self.level = self.wave.min(config.max_level);
        info!("Wave cleared. Next wave {} at level {}.", self.wave, self.level);
    }

    pub fn wave_size(&self, config: &GameConfig) -> usize {
        (self.wave as usize).saturating_mul(config.enemies_per_wave as usize)
    }

    pub fn enemy_speed(&self, config: &GameConfig) -> f64 {
        config.enemy_speed * config.enemy_speed_growth.powi(self.level as i32 - 1)
    }

    pub fn enemy_fire_interval(&self, config: &GameConfig) -> Duration {
        config.enemy_fire_interval.mul_f64(config.enemy_fire_decay.powi(self.level as i32 - 1))
    }

    /// The static backdrop replaces scrolling once enough kills are in and no power-up runs.
    pub fn backdrop_is_static(&self, config: &GameConfig) -> bool {
        self.kills >= config.static_backdrop_kills && !self.power_up_active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_freezes_while_paused() {
        let mut clock = GameClock::default();
        clock.pause(Duration::from_secs(2));
        assert_eq!(clock.game_time(Duration::from_secs(9)), Duration::from_secs(2));
        clock.resume(Duration::from_secs(10));
        assert_eq!(clock.game_time(Duration::from_secs(11)), Duration::from_secs(3));
    }
}
