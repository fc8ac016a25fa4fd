//! All game entity types, pure data.  Behaviour lives in `enemies` and
//! `compute`; this module only describes shapes of state.

use crate::constants::{
    ENEMY_BULLET_HEIGHT, ENEMY_BULLET_WIDTH, ENEMY_SIZE, HERO_HEIGHT, HERO_WIDTH, LASER_HEIGHT,
    LASER_WIDTH,
};
use crate::geometry::Rect;
use crate::highscores::HighScoreEntry;

#[derive(Clone, Debug, PartialEq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

// ── Hero ──────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Hero {
    pub x: i32,
    pub y: i32,
    pub left: bool,
    pub right: bool,
    /// Time of the last accepted hit, if any.
    pub last_hit_at: Option<u64>,
    pub flashing: bool,
}

impl Hero {
    pub fn new(x: i32, y: i32) -> Self {
        Hero {
            x,
            y,
            left: false,
            right: false,
            last_hit_at: None,
            flashing: false,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, HERO_WIDTH, HERO_HEIGHT)
    }
}

// ── Projectiles ───────────────────────────────────────────────────────────────

/// Hero laser, travelling straight up.
#[derive(Clone, Debug, PartialEq)]
pub struct Laser {
    pub x: i32,
    pub y: i32,
}

impl Laser {
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, LASER_WIDTH, LASER_HEIGHT)
    }
}

/// Enemy bullet, travelling straight down.
#[derive(Clone, Debug, PartialEq)]
pub struct EnemyBullet {
    pub x: i32,
    pub y: i32,
}

impl EnemyBullet {
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, ENEMY_BULLET_WIDTH, ENEMY_BULLET_HEIGHT)
    }
}

// ── Enemies ───────────────────────────────────────────────────────────────────

/// Type tag used by the factory and the render snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EnemyType {
    Shooting,
    Swooping,
    Capturing,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwoopStage {
    Idle,
    DescendTowardHero,
    CrossPastHero,
    Return,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaptureStage {
    Idle,
    DescendToFirePosition,
    Firing,
    Return,
}

/// Per-variant behaviour state.
#[derive(Clone, Debug, PartialEq)]
pub enum EnemyKind {
    /// Patrols horizontally and drops bullets at random.
    Shooting {
        /// +1 = moving right, -1 = moving left.
        direction: i32,
        damage: u32,
    },
    /// Dives at the hero when told to by the simulation loop.
    Swooping { stage: SwoopStage, active: bool },
    /// Periodically descends and projects a beam under itself.
    Capturing {
        stage: CaptureStage,
        damage: u32,
        fire_started_at: u64,
        /// End of the previous cycle (spawn time before the first one).
        cycle_ended_at: u64,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub x: i32,
    pub y: i32,
    /// Spawn point, returned to after every dive.
    pub origin_x: i32,
    pub origin_y: i32,
    pub kind: EnemyKind,
}

impl Enemy {
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, ENEMY_SIZE, ENEMY_SIZE)
    }

    pub fn enemy_type(&self) -> EnemyType {
        match self.kind {
            EnemyKind::Shooting { .. } => EnemyType::Shooting,
            EnemyKind::Swooping { .. } => EnemyType::Swooping,
            EnemyKind::Capturing { .. } => EnemyType::Capturing,
        }
    }
}

// ── HUD ───────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    pub text: String,
    pub shown_at: u64,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game state.  Cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct EntireGameStateInfo {
    pub hero: Hero,
    pub enemies: Vec<Enemy>,
    pub lasers: Vec<Laser>,
    pub enemy_bullets: Vec<EnemyBullet>,
    pub lives: u32,
    pub score: u32,
    /// Starts at 1 and only ever increases.
    pub wave: u32,
    /// Global swoop cooldown clock.
    pub last_swoop_at: u64,
    pub message: Option<Message>,
    /// Filled in at game over (and on the title screen by the binary).
    pub high_scores: Vec<HighScoreEntry>,
    pub status: GameStatus,
    pub frame: u64,
}
