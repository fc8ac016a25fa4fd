/// Tuning constants.  All distances are in play-field pixels, all times in
/// simulated milliseconds.

// ── Play field & timing ──────────────────────────────────────────────────────

pub const FIELD_WIDTH: i32 = 800;
pub const FIELD_HEIGHT: i32 = 600;

/// Default tick period (≈50 Hz).
pub const TICK_MS: u64 = 20;

// ── Hero ─────────────────────────────────────────────────────────────────────

pub const HERO_START_X: i32 = 375;
pub const HERO_START_Y: i32 = 500;
pub const HERO_WIDTH: i32 = 50;
pub const HERO_HEIGHT: i32 = 20;
pub const HERO_STEP: i32 = 5;
pub const HERO_MAX_X: i32 = FIELD_WIDTH - HERO_WIDTH;

pub const START_LIVES: u32 = 3;

/// Minimum gap between two accepted hero hits.
pub const HIT_COOLDOWN_MS: u64 = 1000;
/// How long the hero flashes after an accepted hit.
pub const HIT_FLASH_MS: u64 = 1000;

// ── Projectiles ──────────────────────────────────────────────────────────────

pub const LASER_WIDTH: i32 = 4;
pub const LASER_HEIGHT: i32 = 10;
pub const LASER_SPEED: i32 = 10;
/// Horizontal offset of a fresh laser from the hero's left edge.
pub const LASER_OFFSET_X: i32 = 20;

pub const ENEMY_BULLET_WIDTH: i32 = 5;
pub const ENEMY_BULLET_HEIGHT: i32 = 10;
pub const ENEMY_BULLET_SPEED: i32 = 5;
pub const ENEMY_BULLET_OFFSET: i32 = 20;

// ── Enemies ──────────────────────────────────────────────────────────────────

pub const ENEMY_SIZE: i32 = 40;

pub const SHOOTER_STEP: i32 = 2;
pub const SHOOTER_MAX_X: i32 = 750;
/// Chance out of 100, rolled every tick.
pub const SHOOTER_FIRE_PERCENT: u32 = 2;
pub const SHOOTER_HITS: u32 = 2;

pub const SWOOP_STEP: i32 = 4;
/// Stage 1 ends once the swooper is this far below the hero's top edge.
pub const SWOOP_DESCEND_BELOW_HERO: i32 = 20;
/// Stage 2 ends once the swooper is this far right of the hero's left edge.
pub const SWOOP_PASS_HERO_BY: i32 = 100;
pub const SWOOP_COOLDOWN_MS: u64 = 6000;

pub const CAPTURE_STEP: i32 = 4;
pub const BEAM_HEIGHT: i32 = 80;
pub const CAPTURE_FIRE_MS: u64 = 2000;
pub const CAPTURE_REPEAT_MS: u64 = 7000;
pub const CAPTURE_HITS: u32 = 4;

// ── Scoring ──────────────────────────────────────────────────────────────────

pub const SCORE_SHOOTING: u32 = 100;
pub const SCORE_SWOOPING: u32 = 50;
pub const SCORE_CAPTURING: u32 = 150;

// ── Wave layout ──────────────────────────────────────────────────────────────

pub const SLOT_BASE_X: i32 = 100;
pub const SLOT_SPACING: i32 = 150;
pub const SWOOP_ROW_Y: i32 = 220;
pub const SHOOT_ROW_Y: i32 = 120;
/// A slot is only filled when its x is strictly below this.
pub const SPAWN_LIMIT_X: i32 = FIELD_WIDTH - 50;
pub const CAPTURE_SPAWN_X: i32 = FIELD_WIDTH / 2 - ENEMY_SIZE / 2;
pub const CAPTURE_SPAWN_Y: i32 = 50;

// ── HUD ──────────────────────────────────────────────────────────────────────

pub const MESSAGE_MS: u64 = 2000;
