//! Enemy behaviour: one small state machine per variant.
//!
//! Enemies never touch shared collections.  A tick may hand back a bullet for
//! the caller to store, and the collision pass asks each enemy for its
//! hazard regions and how it reacts to a laser hit, so the simulation loop
//! never needs to know which variant it is talking to.

use rand::Rng;

use crate::constants::{
    BEAM_HEIGHT, CAPTURE_FIRE_MS, CAPTURE_HITS, CAPTURE_REPEAT_MS, CAPTURE_STEP,
    ENEMY_BULLET_OFFSET, ENEMY_SIZE, HERO_HEIGHT, SCORE_CAPTURING, SCORE_SHOOTING,
    SCORE_SWOOPING, SHOOTER_FIRE_PERCENT, SHOOTER_HITS, SHOOTER_MAX_X, SHOOTER_STEP,
    SWOOP_DESCEND_BELOW_HERO, SWOOP_PASS_HERO_BY, SWOOP_STEP,
};
use crate::entities::{CaptureStage, Enemy, EnemyBullet, EnemyKind, Hero, SwoopStage};
use crate::geometry::{Rect, Triangle};

/// Result of one laser striking an enemy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HitOutcome {
    pub destroyed: bool,
    /// Non-zero only on the hit that destroys the enemy.
    pub score_award: u32,
}

/// A region that hurts the hero on overlap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hazard {
    Body(Rect),
    Beam(Triangle),
}

impl Hazard {
    pub fn hits(&self, target: &Rect) -> bool {
        match self {
            Hazard::Body(rect) => rect.intersects(target),
            Hazard::Beam(triangle) => triangle.intersects_rect(target),
        }
    }
}

/// Move `current` one step toward `target` without passing it.
fn step_toward(current: i32, target: i32, step: i32) -> i32 {
    if current > target {
        (current - step).max(target)
    } else {
        (current + step).min(target)
    }
}

impl Enemy {
    /// Advance this enemy's state machine by one tick.
    pub fn tick(&mut self, hero: &Hero, now: u64, rng: &mut impl Rng) -> Option<EnemyBullet> {
        let Enemy {
            x,
            y,
            origin_x,
            origin_y,
            kind,
        } = self;

        match kind {
            EnemyKind::Shooting { direction, .. } => {
                *x += *direction * SHOOTER_STEP;
                if *x <= 0 || *x >= SHOOTER_MAX_X {
                    *direction = -*direction;
                }
                if rng.gen_range(0..100) < SHOOTER_FIRE_PERCENT {
                    return Some(EnemyBullet {
                        x: *x + ENEMY_BULLET_OFFSET,
                        y: *y + ENEMY_BULLET_OFFSET,
                    });
                }
            }

            EnemyKind::Swooping { stage, .. } => match *stage {
                SwoopStage::Idle => {}
                SwoopStage::DescendTowardHero => {
                    if *y < hero.y + SWOOP_DESCEND_BELOW_HERO {
                        *y += SWOOP_STEP;
                    } else {
                        *stage = SwoopStage::CrossPastHero;
                    }
                }
                SwoopStage::CrossPastHero => {
                    *x += SWOOP_STEP;
                    if *x > hero.x + SWOOP_PASS_HERO_BY {
                        *stage = SwoopStage::Return;
                    }
                }
                SwoopStage::Return => {
                    *x = step_toward(*x, *origin_x, SWOOP_STEP);
                    *y = step_toward(*y, *origin_y, SWOOP_STEP);
                    if *x == *origin_x && *y == *origin_y {
                        *stage = SwoopStage::Idle;
                    }
                }
            },

            EnemyKind::Capturing {
                stage,
                fire_started_at,
                cycle_ended_at,
                ..
            } => {
                if *stage == CaptureStage::Idle
                    && now.saturating_sub(*cycle_ended_at) >= CAPTURE_REPEAT_MS
                {
                    tracing::debug!(x = *x, y = *y, now, "capture cycle started");
                    *stage = CaptureStage::DescendToFirePosition;
                }

                match *stage {
                    CaptureStage::Idle => {}
                    CaptureStage::DescendToFirePosition => {
                        let stop_y = hero.y + HERO_HEIGHT - BEAM_HEIGHT;
                        if *y < stop_y {
                            *y += CAPTURE_STEP;
                        } else {
                            *y = stop_y;
                            *stage = CaptureStage::Firing;
                            *fire_started_at = now;
                        }
                    }
                    CaptureStage::Firing => {
                        if now.saturating_sub(*fire_started_at) > CAPTURE_FIRE_MS {
                            *stage = CaptureStage::Return;
                        }
                    }
                    CaptureStage::Return => {
                        *x = step_toward(*x, *origin_x, CAPTURE_STEP);
                        *y = step_toward(*y, *origin_y, CAPTURE_STEP);
                        if *x == *origin_x && *y == *origin_y {
                            *stage = CaptureStage::Idle;
                            *cycle_ended_at = now;
                        }
                    }
                }
            }
        }

        None
    }

    /// True for a live swooper sitting in formation.
    pub fn can_swoop(&self) -> bool {
        matches!(
            self.kind,
            EnemyKind::Swooping {
                stage: SwoopStage::Idle,
                active: true,
            }
        )
    }

    /// Begin a dive.  Returns false (and does nothing) unless `can_swoop`.
    pub fn start_swoop(&mut self) -> bool {
        if !self.can_swoop() {
            return false;
        }
        if let EnemyKind::Swooping { stage, .. } = &mut self.kind {
            *stage = SwoopStage::DescendTowardHero;
        }
        true
    }

    pub fn is_swooping(&self) -> bool {
        matches!(self.kind, EnemyKind::Swooping { stage, .. } if stage != SwoopStage::Idle)
    }

    /// True while a capturing enemy is anywhere in its descend/fire/return
    /// cycle.
    pub fn is_capturing(&self) -> bool {
        matches!(self.kind, EnemyKind::Capturing { stage, .. } if stage != CaptureStage::Idle)
    }

    /// The beam triangle, present only while firing: apex at the enemy's
    /// bottom centre, base `BEAM_HEIGHT` below its top edge.
    pub fn beam(&self) -> Option<Triangle> {
        match self.kind {
            EnemyKind::Capturing {
                stage: CaptureStage::Firing,
                ..
            } => Some(Triangle::new(
                (self.x + ENEMY_SIZE / 2, self.y + ENEMY_SIZE),
                (self.x, self.y + BEAM_HEIGHT),
                (self.x + ENEMY_SIZE, self.y + BEAM_HEIGHT),
            )),
            _ => None,
        }
    }

    /// Regions that damage the hero this tick.
    pub fn hazard_regions(&self) -> Vec<Hazard> {
        match self.kind {
            EnemyKind::Swooping { active: true, .. } => vec![Hazard::Body(self.bounds())],
            EnemyKind::Capturing { .. } => self.beam().map(Hazard::Beam).into_iter().collect(),
            _ => Vec::new(),
        }
    }

    /// Apply one unit of laser damage.
    pub fn on_hit_by_laser(&mut self) -> HitOutcome {
        match &mut self.kind {
            EnemyKind::Shooting { damage, .. } => counted_hit(damage, SHOOTER_HITS, SCORE_SHOOTING),
            EnemyKind::Capturing { damage, .. } => {
                counted_hit(damage, CAPTURE_HITS, SCORE_CAPTURING)
            }
            EnemyKind::Swooping { active, .. } => {
                let newly = *active;
                *active = false;
                HitOutcome {
                    destroyed: true,
                    score_award: if newly { SCORE_SWOOPING } else { 0 },
                }
            }
        }
    }

    /// Hits taken so far, for damage-dependent rendering.
    pub fn damage_level(&self) -> u32 {
        match self.kind {
            EnemyKind::Shooting { damage, .. } | EnemyKind::Capturing { damage, .. } => damage,
            EnemyKind::Swooping { active, .. } => u32::from(!active),
        }
    }

    pub fn is_destroyed(&self) -> bool {
        match self.kind {
            EnemyKind::Shooting { damage, .. } => damage >= SHOOTER_HITS,
            EnemyKind::Capturing { damage, .. } => damage >= CAPTURE_HITS,
            EnemyKind::Swooping { active, .. } => !active,
        }
    }
}

fn counted_hit(damage: &mut u32, threshold: u32, award: u32) -> HitOutcome {
    let was_destroyed = *damage >= threshold;
    *damage = (*damage + 1).min(threshold);
    let destroyed = *damage >= threshold;
    HitOutcome {
        destroyed,
        score_award: if destroyed && !was_destroyed { award } else { 0 },
    }
}
