use galaxy_shooter::constants::*;
use galaxy_shooter::enemies::{Hazard, HitOutcome};
use galaxy_shooter::entities::*;
use galaxy_shooter::spawner::create_enemy;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn hero() -> Hero {
    Hero::new(HERO_START_X, HERO_START_Y)
}

fn swoop_stage(e: &Enemy) -> SwoopStage {
    match e.kind {
        EnemyKind::Swooping { stage, .. } => stage,
        _ => panic!("not a swooper"),
    }
}

fn capture_stage(e: &Enemy) -> CaptureStage {
    match e.kind {
        EnemyKind::Capturing { stage, .. } => stage,
        _ => panic!("not a capturer"),
    }
}

// ── Shooting ──────────────────────────────────────────────────────────────────

#[test]
fn shooter_patrols_and_bounces() {
    let mut rng = seeded_rng();
    let mut e = create_enemy(EnemyType::Shooting, SHOOTER_MAX_X - 4, 120, 0);
    e.tick(&hero(), 0, &mut rng);
    assert_eq!(e.x, SHOOTER_MAX_X - 2);
    e.tick(&hero(), 0, &mut rng);
    assert_eq!(e.x, SHOOTER_MAX_X);
    e.tick(&hero(), 0, &mut rng);
    assert_eq!(e.x, SHOOTER_MAX_X - 2);

    let mut e = create_enemy(EnemyType::Shooting, 2, 120, 0);
    if let EnemyKind::Shooting { direction, .. } = &mut e.kind {
        *direction = -1;
    }
    e.tick(&hero(), 0, &mut rng);
    assert_eq!(e.x, 0);
    e.tick(&hero(), 0, &mut rng);
    assert_eq!(e.x, 2);
    assert_eq!(e.y, 120);
}

#[test]
fn shooter_fires_rarely_from_its_centre() {
    let mut rng = seeded_rng();
    let mut e = create_enemy(EnemyType::Shooting, 100, 120, 0);
    let mut shots = 0;
    for _ in 0..1000 {
        if let Some(b) = e.tick(&hero(), 0, &mut rng) {
            assert_eq!(b.x, e.x + ENEMY_BULLET_OFFSET);
            assert_eq!(b.y, e.y + ENEMY_BULLET_OFFSET);
            shots += 1;
        }
    }
    // About 2% of ticks
    assert!((5..=50).contains(&shots), "shots = {shots}");
}

#[test]
fn shooter_damage_caps_at_destruction() {
    let mut e = create_enemy(EnemyType::Shooting, 100, 120, 0);
    assert_eq!(
        e.on_hit_by_laser(),
        HitOutcome { destroyed: false, score_award: 0 }
    );
    assert!(!e.is_destroyed());
    assert_eq!(
        e.on_hit_by_laser(),
        HitOutcome { destroyed: true, score_award: SCORE_SHOOTING }
    );
    assert!(e.is_destroyed());
    // A third hit changes nothing and awards nothing
    assert_eq!(
        e.on_hit_by_laser(),
        HitOutcome { destroyed: true, score_award: 0 }
    );
    assert_eq!(e.damage_level(), SHOOTER_HITS);
}

#[test]
fn shooter_has_no_hazard_regions() {
    let e = create_enemy(EnemyType::Shooting, HERO_START_X, HERO_START_Y, 0);
    assert!(e.hazard_regions().is_empty());
}

// ── Swooping ──────────────────────────────────────────────────────────────────

#[test]
fn idle_swooper_holds_formation() {
    let mut rng = seeded_rng();
    let mut e = create_enemy(EnemyType::Swooping, 100, 220, 0);
    for _ in 0..50 {
        assert!(e.tick(&hero(), 0, &mut rng).is_none());
    }
    assert_eq!((e.x, e.y), (100, 220));
    assert!(e.can_swoop());
    assert!(!e.is_swooping());
}

#[test]
fn swoop_runs_full_cycle() {
    let mut rng = seeded_rng();
    let h = hero();
    let mut e = create_enemy(EnemyType::Swooping, 100, 220, 0);
    assert!(e.start_swoop());
    assert!(e.is_swooping());
    assert!(!e.start_swoop(), "already swooping");

    let mut guard = 0;
    while swoop_stage(&e) == SwoopStage::DescendTowardHero {
        e.tick(&h, 0, &mut rng);
        guard += 1;
        assert!(guard < 1000);
    }
    assert_eq!(swoop_stage(&e), SwoopStage::CrossPastHero);
    assert!(e.y >= h.y + SWOOP_DESCEND_BELOW_HERO);
    assert_eq!(e.x, 100);

    while swoop_stage(&e) == SwoopStage::CrossPastHero {
        e.tick(&h, 0, &mut rng);
        guard += 1;
        assert!(guard < 1000);
    }
    assert!(e.x > h.x + SWOOP_PASS_HERO_BY);

    while swoop_stage(&e) == SwoopStage::Return {
        e.tick(&h, 0, &mut rng);
        guard += 1;
        assert!(guard < 1000);
    }
    assert_eq!((e.x, e.y), (100, 220));
    assert!(e.can_swoop());
}

#[test]
fn return_is_idempotent_at_origin() {
    let mut rng = seeded_rng();
    let mut e = create_enemy(EnemyType::Swooping, 100, 220, 0);
    e.kind = EnemyKind::Swooping {
        stage: SwoopStage::Return,
        active: true,
    };
    e.tick(&hero(), 0, &mut rng);
    assert_eq!(swoop_stage(&e), SwoopStage::Idle);
    e.tick(&hero(), 0, &mut rng);
    assert_eq!((e.x, e.y), (100, 220));
}

#[test]
fn return_never_overshoots_origin() {
    let mut rng = seeded_rng();
    let mut e = create_enemy(EnemyType::Swooping, 100, 220, 0);
    e.x = 103;
    e.y = 223;
    e.kind = EnemyKind::Swooping {
        stage: SwoopStage::Return,
        active: true,
    };
    e.tick(&hero(), 0, &mut rng);
    assert_eq!((e.x, e.y), (100, 220));
}

#[test]
fn swooper_body_is_a_hazard_until_hit() {
    let mut e = create_enemy(EnemyType::Swooping, 100, 220, 0);
    assert_eq!(e.hazard_regions(), vec![Hazard::Body(e.bounds())]);

    assert_eq!(
        e.on_hit_by_laser(),
        HitOutcome { destroyed: true, score_award: SCORE_SWOOPING }
    );
    assert!(e.hazard_regions().is_empty());
    assert!(!e.can_swoop());
    assert!(!e.start_swoop());
    assert_eq!(e.on_hit_by_laser().score_award, 0);
}

// ── Capturing ─────────────────────────────────────────────────────────────────

#[test]
fn capture_cycle_starts_after_repeat_interval() {
    let mut rng = seeded_rng();
    let mut e = create_enemy(EnemyType::Capturing, 380, 50, 1000);
    e.tick(&hero(), 1000 + CAPTURE_REPEAT_MS - 20, &mut rng);
    assert_eq!(capture_stage(&e), CaptureStage::Idle);
    assert!(!e.is_capturing());

    e.tick(&hero(), 1000 + CAPTURE_REPEAT_MS, &mut rng);
    assert_eq!(capture_stage(&e), CaptureStage::DescendToFirePosition);
    assert_eq!(e.y, 50 + CAPTURE_STEP);
    assert!(e.is_capturing());
}

#[test]
fn capture_cycle_fires_returns_and_repeats() {
    let mut rng = seeded_rng();
    let h = hero();
    let stop_y = h.y + HERO_HEIGHT - BEAM_HEIGHT;
    let mut e = create_enemy(EnemyType::Capturing, 380, 50, 0);
    let mut now = CAPTURE_REPEAT_MS;

    while capture_stage(&e) != CaptureStage::Firing {
        e.tick(&h, now, &mut rng);
        now += TICK_MS;
        assert!(now < 60_000);
    }
    assert_eq!(e.y, stop_y);
    let fire_started = now - TICK_MS;

    e.tick(&h, fire_started + CAPTURE_FIRE_MS, &mut rng);
    assert_eq!(capture_stage(&e), CaptureStage::Firing);
    e.tick(&h, fire_started + CAPTURE_FIRE_MS + TICK_MS, &mut rng);
    assert_eq!(capture_stage(&e), CaptureStage::Return);
    assert!(e.beam().is_none());

    now = fire_started + CAPTURE_FIRE_MS + TICK_MS;
    while capture_stage(&e) != CaptureStage::Idle {
        now += TICK_MS;
        e.tick(&h, now, &mut rng);
        assert!(now < 60_000);
    }
    assert_eq!((e.x, e.y), (380, 50));
    let ended = now;

    e.tick(&h, ended + CAPTURE_REPEAT_MS - TICK_MS, &mut rng);
    assert_eq!(capture_stage(&e), CaptureStage::Idle);
    e.tick(&h, ended + CAPTURE_REPEAT_MS, &mut rng);
    assert_eq!(capture_stage(&e), CaptureStage::DescendToFirePosition);
}

#[test]
fn beam_only_while_firing() {
    let mut e = create_enemy(EnemyType::Capturing, 380, 440, 0);
    assert!(e.beam().is_none());
    assert!(e.hazard_regions().is_empty());

    e.kind = EnemyKind::Capturing {
        stage: CaptureStage::Firing,
        damage: 0,
        fire_started_at: 0,
        cycle_ended_at: 0,
    };
    let beam = e.beam().expect("firing capturer has a beam");
    assert_eq!(beam.points, [(400, 480), (380, 520), (420, 520)]);
    assert_eq!(e.hazard_regions(), vec![Hazard::Beam(beam)]);
    assert!(e.hazard_regions()[0].hits(&hero().bounds()));
}

#[test]
fn capturer_takes_four_hits() {
    let mut e = create_enemy(EnemyType::Capturing, 380, 50, 0);
    for _ in 1..CAPTURE_HITS {
        assert_eq!(
            e.on_hit_by_laser(),
            HitOutcome { destroyed: false, score_award: 0 }
        );
    }
    assert_eq!(
        e.on_hit_by_laser(),
        HitOutcome { destroyed: true, score_award: SCORE_CAPTURING }
    );
    assert_eq!(e.damage_level(), CAPTURE_HITS);
}
