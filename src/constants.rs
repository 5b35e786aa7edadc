use crate::types::Size;

// --- Viewport ---
pub const DEFAULT_VIEWPORT_WIDTH: f64 = 800.0;
pub const DEFAULT_VIEWPORT_HEIGHT: f64 = 600.0;

// --- Player ship ---
pub const SHIP_SIZE: Size = Size::constant(80.0, 90.0);
pub const SHIP_SPEED: f64 = 7.0; // Pixels per tick
pub const STARTING_LIVES: u32 = 4;

// --- Projectiles ---
pub const BULLET_SIZE: Size = Size::constant(5.0, 15.0);
pub const PLAYER_BULLET_SPEED: f64 = 7.0;
pub const ENEMY_BULLET_SPEED: f64 = 5.0;
pub const MUZZLE_INSET: f64 = 10.0; // Outer lasers sit this far inside the hull

// --- Debris ---
pub const DEBRIS_SIZE: Size = Size::constant(30.0, 30.0);
pub const DEBRIS_SPEED: f64 = 3.0;
pub const DEBRIS_SPAWN_CHANCE: f64 = 0.02; // Per tick

// --- Enemies ---
pub const ENEMY_SIZE: Size = Size::constant(50.0, 50.0);
pub const ENEMY_SPEED: f64 = 2.0;
pub const ENEMY_SPEED_GROWTH: f64 = 1.15; // Multiplier per level
pub const ENEMIES_PER_WAVE: u32 = 5; // Times the wave number
pub const MAX_LEVEL: u32 = 5;
pub const ENEMY_FIRE_INTERVAL_MS: u64 = 2000;
pub const ENEMY_FIRE_INTERVAL_DECAY: f64 = 0.85; // Multiplier per level
pub const SCORE_PER_KILL: u32 = 100;

// --- Power-ups ---
pub const POWER_UP_SIZE: Size = Size::constant(30.0, 30.0);
pub const POWER_UP_SPEED: f64 = 3.0;
pub const POWER_UP_SPAWN_CHANCE: f64 = 0.01; // Per tick, only while none is falling
pub const POWER_UP_DURATION_MS: u64 = 5000;
pub const SHIELD_DROP_CHANCE: f64 = 0.25;

// --- Fire mode ---
pub const FIRE_MODE_THRESHOLDS: [u32; 3] = [5, 10, 20]; // Kills for dual, triple, quad

// --- Backdrop ---
pub const BACKDROP_SCROLL_SPEED: f64 = 1.0;
pub const STATIC_BACKDROP_KILLS: u32 = 3;

// --- Terminal host ---
pub const FRAME_INTERVAL_MS: u64 = 16; // ~60 FPS
pub const CELL_WIDTH_PX: f64 = 10.0;
pub const CELL_HEIGHT_PX: f64 = 20.0;
pub const KEY_HOLD_WINDOW_MS: u64 = 120; // A key counts as held this long after its last press
