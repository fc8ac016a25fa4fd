//! Read-only view of one tick, handed to the renderer.

use crate::entities::{
    CaptureStage, EnemyKind, EnemyType, EntireGameStateInfo, GameStatus, SwoopStage,
};
use crate::geometry::Triangle;
use crate::highscores::HighScoreEntry;

#[derive(Clone, Debug, PartialEq)]
pub struct EnemyView {
    pub kind: EnemyType,
    pub x: i32,
    pub y: i32,
    /// 0 for idle/patrolling, 1.. for the active stages in order.
    pub stage: u8,
    pub damage: u32,
    pub beam: Option<Triangle>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FrameSnapshot {
    pub hero_x: i32,
    pub hero_y: i32,
    pub hero_flashing: bool,
    pub enemies: Vec<EnemyView>,
    pub lasers: Vec<(i32, i32)>,
    pub enemy_bullets: Vec<(i32, i32)>,
    pub lives: u32,
    pub wave: u32,
    pub score: u32,
    pub message: Option<String>,
    pub game_over: bool,
    pub high_scores: Vec<HighScoreEntry>,
}

fn stage_index(kind: &EnemyKind) -> u8 {
    match kind {
        EnemyKind::Shooting { .. } => 0,
        EnemyKind::Swooping { stage, .. } => match stage {
            SwoopStage::Idle => 0,
            SwoopStage::DescendTowardHero => 1,
            SwoopStage::CrossPastHero => 2,
            SwoopStage::Return => 3,
        },
        EnemyKind::Capturing { stage, .. } => match stage {
            CaptureStage::Idle => 0,
            CaptureStage::DescendToFirePosition => 1,
            CaptureStage::Firing => 2,
            CaptureStage::Return => 3,
        },
    }
}

pub fn snapshot(state: &EntireGameStateInfo) -> FrameSnapshot {
    FrameSnapshot {
        hero_x: state.hero.x,
        hero_y: state.hero.y,
        hero_flashing: state.hero.flashing,
        enemies: state
            .enemies
            .iter()
            .map(|e| EnemyView {
                kind: e.enemy_type(),
                x: e.x,
                y: e.y,
                stage: stage_index(&e.kind),
                damage: e.damage_level(),
                beam: e.beam(),
            })
            .collect(),
        lasers: state.lasers.iter().map(|l| (l.x, l.y)).collect(),
        enemy_bullets: state.enemy_bullets.iter().map(|b| (b.x, b.y)).collect(),
        lives: state.lives,
        wave: state.wave,
        score: state.score,
        message: state.message.as_ref().map(|m| m.text.clone()),
        game_over: state.status == GameStatus::GameOver,
        high_scores: state.high_scores.clone(),
    }
}
