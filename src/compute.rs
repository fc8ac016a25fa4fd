//! The simulation loop.
//!
//! `tick` takes an immutable reference to the current `EntireGameStateInfo`
//! plus that tick's input, the simulated time and an RNG handle, and returns
//! a brand-new `EntireGameStateInfo`.  Side effects are limited to the
//! injected RNG, so a run is reproducible from a seed and an input sequence.

use rand::Rng;

use crate::constants::{
    ENEMY_BULLET_SPEED, FIELD_HEIGHT, HERO_MAX_X, HERO_START_X, HERO_START_Y, HERO_STEP,
    HIT_COOLDOWN_MS, HIT_FLASH_MS, LASER_OFFSET_X, LASER_SPEED, MESSAGE_MS, START_LIVES,
    SWOOP_COOLDOWN_MS,
};
use crate::enemies::Hazard;
use crate::entities::{EntireGameStateInfo, GameStatus, Hero, Laser, Message};
use crate::highscores::{insert_score, HighScoreStore};
use crate::input::FrameInput;
use crate::spawner::spawn_wave;

// ── Constructors ─────────────────────────────────────────────────────────────

/// Fresh game at wave 1.  Cooldown clocks start at `now`, so the first
/// swoop comes `SWOOP_COOLDOWN_MS` after the start.
pub fn init_state(now: u64) -> EntireGameStateInfo {
    EntireGameStateInfo {
        hero: Hero::new(HERO_START_X, HERO_START_Y),
        enemies: spawn_wave(1, now),
        lasers: Vec::new(),
        enemy_bullets: Vec::new(),
        lives: START_LIVES,
        score: 0,
        wave: 1,
        last_swoop_at: now,
        message: None,
        high_scores: Vec::new(),
        status: GameStatus::Playing,
        frame: 0,
    }
}

/// New game, keeping the last known high-score table for display.
pub fn restart(state: &EntireGameStateInfo, now: u64) -> EntireGameStateInfo {
    tracing::info!(score = state.score, wave = state.wave, "restarting");
    EntireGameStateInfo {
        high_scores: state.high_scores.clone(),
        ..init_state(now)
    }
}

// ── Hero ─────────────────────────────────────────────────────────────────────

/// One step in each held direction, clamped to the field.
pub fn move_hero(hero: &Hero) -> Hero {
    let mut x = hero.x;
    if hero.left {
        x -= HERO_STEP;
    }
    if hero.right {
        x += HERO_STEP;
    }
    Hero {
        x: x.clamp(0, HERO_MAX_X),
        ..hero.clone()
    }
}

pub fn fire_laser(hero: &Hero) -> Laser {
    Laser {
        x: hero.x + LASER_OFFSET_X,
        y: hero.y,
    }
}

/// Apply one hit to the hero unless it is still inside the hit cooldown.
/// Returns true when the hit ends the game.
pub fn register_hero_hit(state: &mut EntireGameStateInfo, now: u64) -> bool {
    if let Some(last) = state.hero.last_hit_at {
        if now.saturating_sub(last) <= HIT_COOLDOWN_MS {
            return false;
        }
    }

    state.hero.last_hit_at = Some(now);
    state.hero.flashing = true;
    state.lives = state.lives.saturating_sub(1);
    tracing::debug!(lives = state.lives, now, "hero hit");

    if state.lives == 0 {
        state.status = GameStatus::GameOver;
        tracing::info!(score = state.score, wave = state.wave, "game over");
        return true;
    }
    false
}

// ── Per-tick update ──────────────────────────────────────────────────────────

/// Advance the simulation by one tick.  A finished game is frozen: only a
/// restart request changes it.
pub fn tick(
    state: &EntireGameStateInfo,
    input: &FrameInput,
    now: u64,
    rng: &mut impl Rng,
) -> EntireGameStateInfo {
    if state.status == GameStatus::GameOver {
        return if input.restart {
            restart(state, now)
        } else {
            state.clone()
        };
    }

    let mut next = state.clone();
    next.frame += 1;

    // ── 1. Input & hero ──────────────────────────────────────────────────────
    next.hero.left = input.left;
    next.hero.right = input.right;
    next.hero = move_hero(&next.hero);
    next.hero.flashing = next
        .hero
        .last_hit_at
        .is_some_and(|t| now.saturating_sub(t) < HIT_FLASH_MS);
    for _ in 0..input.fires {
        next.lasers.push(fire_laser(&next.hero));
    }

    // ── 2. Lasers ────────────────────────────────────────────────────────────
    for laser in &mut next.lasers {
        laser.y -= LASER_SPEED;
    }

    // ── 3-4. Swoop scheduling, blocked while a capture is under way ─────────
    let capture_active = next.enemies.iter().any(|e| e.is_capturing());
    if !capture_active && now.saturating_sub(next.last_swoop_at) > SWOOP_COOLDOWN_MS {
        trigger_swoop(&mut next, now, rng);
    }

    // ── 5. Transient message ─────────────────────────────────────────────────
    if next
        .message
        .as_ref()
        .is_some_and(|m| now.saturating_sub(m.shown_at) > MESSAGE_MS)
    {
        next.message = None;
    }

    // ── 6. Enemies and their bullets ─────────────────────────────────────────
    let hero = next.hero.clone();
    for enemy in &mut next.enemies {
        if let Some(bullet) = enemy.tick(&hero, now, rng) {
            next.enemy_bullets.push(bullet);
        }
    }
    for bullet in &mut next.enemy_bullets {
        bullet.y += ENEMY_BULLET_SPEED;
    }

    // ── 7. Collisions ────────────────────────────────────────────────────────
    if resolve_collisions(&mut next, now) {
        return next;
    }

    // ── 8. Off-screen projectiles ────────────────────────────────────────────
    next.lasers.retain(|l| l.y >= 0);
    next.enemy_bullets.retain(|b| b.y <= FIELD_HEIGHT);

    // ── 9. Wave progression ──────────────────────────────────────────────────
    if next.enemies.is_empty() {
        let cleared = next.wave;
        next.wave += 1;
        next.enemies = spawn_wave(next.wave, now);
        next.message = Some(Message {
            text: format!("Wave {cleared} cleared!"),
            shown_at: now,
        });
    }

    next
}

/// Pick one idle swooper uniformly at random and send it diving.  The
/// cooldown clock only restarts when a swoop actually begins.
fn trigger_swoop(state: &mut EntireGameStateInfo, now: u64, rng: &mut impl Rng) {
    let eligible: Vec<usize> = state
        .enemies
        .iter()
        .enumerate()
        .filter(|(_, e)| e.can_swoop())
        .map(|(i, _)| i)
        .collect();
    if eligible.is_empty() {
        return;
    }

    let chosen = eligible[rng.gen_range(0..eligible.len())];
    if state.enemies[chosen].start_swoop() {
        state.last_swoop_at = now;
        tracing::debug!(enemy = chosen, now, "swoop started");
    }
}

/// Resolve every collision for this tick.  Returns true if the hero died,
/// in which case the rest of the pass is skipped.
fn resolve_collisions(state: &mut EntireGameStateInfo, now: u64) -> bool {
    let hero_box = state.hero.bounds();

    // Hero vs. enemy bodies, then vs. beams
    let (bodies, beams): (Vec<Hazard>, Vec<Hazard>) = state
        .enemies
        .iter()
        .flat_map(|e| e.hazard_regions())
        .partition(|h| matches!(h, Hazard::Body(_)));
    for hazard in bodies.iter().chain(&beams) {
        if hazard.hits(&hero_box) && register_hero_hit(state, now) {
            return true;
        }
    }

    // Hero vs. enemy bullets: every overlapping bullet is consumed, each one
    // is a separate (rate-limited) hit attempt
    let mut bullet_hits = 0;
    state.enemy_bullets.retain(|b| {
        let hit = b.bounds().intersects(&hero_box);
        if hit {
            bullet_hits += 1;
        }
        !hit
    });
    for _ in 0..bullet_hits {
        if register_hero_hit(state, now) {
            return true;
        }
    }

    // Lasers vs. enemies: mark during the scan, compact afterwards
    let mut spent = vec![false; state.lasers.len()];
    let mut destroyed = vec![false; state.enemies.len()];
    for (li, laser) in state.lasers.iter().enumerate() {
        let laser_box = laser.bounds();
        for (ei, enemy) in state.enemies.iter_mut().enumerate() {
            if destroyed[ei] || !laser_box.intersects(&enemy.bounds()) {
                continue;
            }
            spent[li] = true;
            let outcome = enemy.on_hit_by_laser();
            state.score += outcome.score_award;
            if outcome.destroyed {
                destroyed[ei] = true;
                tracing::debug!(
                    kind = ?enemy.enemy_type(),
                    award = outcome.score_award,
                    "enemy destroyed"
                );
            }
            // A laser is used up by the first enemy it touches
            break;
        }
    }

    state.lasers = std::mem::take(&mut state.lasers)
        .into_iter()
        .enumerate()
        .filter(|(i, _)| !spent[*i])
        .map(|(_, l)| l)
        .collect();
    state.enemies = std::mem::take(&mut state.enemies)
        .into_iter()
        .enumerate()
        .filter(|(i, _)| !destroyed[*i])
        .map(|(_, e)| e)
        .collect();

    false
}

// ── Game over ────────────────────────────────────────────────────────────────

/// Hand the final score to the persistence collaborator.  A storage failure
/// is reported through the transient message; the returned state still
/// carries a valid table and the final score.
pub fn finish_game(
    state: &EntireGameStateInfo,
    store: &mut impl HighScoreStore,
    player: &str,
    now: u64,
) -> EntireGameStateInfo {
    let mut next = state.clone();
    match store.submit_score(player, state.score) {
        Ok(table) => next.high_scores = table,
        Err(err) => {
            tracing::warn!(%err, score = state.score, "high score not saved");
            next.high_scores = insert_score(&store.load_or_init(), player, state.score);
            next.message = Some(Message {
                text: "High score could not be saved".to_string(),
                shown_at: now,
            });
        }
    }
    next
}
