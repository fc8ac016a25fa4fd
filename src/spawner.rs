/// Enemy factory and the per-wave roster layout.

use std::str::FromStr;

use thiserror::Error;

use crate::constants::{
    CAPTURE_SPAWN_X, CAPTURE_SPAWN_Y, SHOOT_ROW_Y, SLOT_BASE_X, SLOT_SPACING, SPAWN_LIMIT_X,
    SWOOP_ROW_Y,
};
use crate::entities::{CaptureStage, Enemy, EnemyKind, EnemyType, SwoopStage};

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown enemy type: {0:?}")]
pub struct UnknownEnemyType(pub String);

impl FromStr for EnemyType {
    type Err = UnknownEnemyType;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag.to_ascii_lowercase().as_str() {
            "shooting" => Ok(EnemyType::Shooting),
            "swooping" => Ok(EnemyType::Swooping),
            "capturing" => Ok(EnemyType::Capturing),
            _ => Err(UnknownEnemyType(tag.to_string())),
        }
    }
}

/// Build a fresh enemy of the given type at its spawn point.  `now` seeds
/// the capturing enemy's repeat timer.
pub fn create_enemy(kind: EnemyType, x: i32, y: i32, now: u64) -> Enemy {
    let kind = match kind {
        EnemyType::Shooting => EnemyKind::Shooting {
            direction: 1,
            damage: 0,
        },
        EnemyType::Swooping => EnemyKind::Swooping {
            stage: SwoopStage::Idle,
            active: true,
        },
        EnemyType::Capturing => EnemyKind::Capturing {
            stage: CaptureStage::Idle,
            damage: 0,
            fire_started_at: 0,
            cycle_ended_at: now,
        },
    };
    Enemy {
        x,
        y,
        origin_x: x,
        origin_y: y,
        kind,
    }
}

/// Roster for wave `wave`: `wave + 1` slots alternating swooper (even) and
/// shooter (odd), dropping any slot past the right edge, plus exactly one
/// capturing enemy at the top centre.  `wave` starts at 1, so there is always
/// at least one slot.
pub fn spawn_wave(wave: u32, now: u64) -> Vec<Enemy> {
    let slots = wave as i32 + 1;
    let mut enemies = Vec::with_capacity(slots as usize + 1);

    for i in 0..slots {
        let (kind, x, y) = if i % 2 == 0 {
            (EnemyType::Swooping, SLOT_BASE_X + i * SLOT_SPACING, SWOOP_ROW_Y)
        } else {
            (EnemyType::Shooting, SLOT_BASE_X + (i - 1) * SLOT_SPACING, SHOOT_ROW_Y)
        };
        if x < SPAWN_LIMIT_X {
            enemies.push(create_enemy(kind, x, y, now));
        }
        // The capturing enemy follows the first slot in scan order.
        if i == 0 {
            enemies.push(create_enemy(
                EnemyType::Capturing,
                CAPTURE_SPAWN_X,
                CAPTURE_SPAWN_Y,
                now,
            ));
        }
    }

    tracing::info!(wave, enemies = enemies.len(), "wave spawned");
    enemies
}
