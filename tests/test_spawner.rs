use galaxy_shooter::constants::*;
use galaxy_shooter::entities::EnemyType;
use galaxy_shooter::spawner::{create_enemy, spawn_wave, UnknownEnemyType};

fn count(wave: u32, kind: EnemyType) -> usize {
    spawn_wave(wave, 0)
        .iter()
        .filter(|e| e.enemy_type() == kind)
        .count()
}

#[test]
fn first_wave_layout() {
    let roster: Vec<_> = spawn_wave(1, 0)
        .iter()
        .map(|e| (e.enemy_type(), e.x, e.y))
        .collect();
    assert_eq!(
        roster,
        vec![
            (EnemyType::Swooping, 100, 220),
            (EnemyType::Capturing, 380, 50),
            (EnemyType::Shooting, 100, 120),
        ]
    );
}

#[test]
fn exactly_one_capturer_every_wave() {
    for wave in 1..=30 {
        assert_eq!(count(wave, EnemyType::Capturing), 1, "wave {wave}");
    }
}

#[test]
fn slots_past_the_right_edge_are_dropped() {
    assert_eq!(count(2, EnemyType::Swooping), 2);
    assert_eq!(count(4, EnemyType::Swooping), 3);
    assert_eq!(count(4, EnemyType::Shooting), 2);
    assert_eq!(count(5, EnemyType::Shooting), 3);

    // Wave growth stops once every slot column is filled
    for wave in 5..=30 {
        assert_eq!(spawn_wave(wave, 0).len(), 7, "wave {wave}");
    }
    for e in spawn_wave(30, 0) {
        assert!(e.x < SPAWN_LIMIT_X);
    }
}

#[test]
fn spawned_enemies_start_at_their_origin() {
    for e in spawn_wave(3, 500) {
        assert_eq!((e.x, e.y), (e.origin_x, e.origin_y));
        assert_eq!(e.damage_level(), 0);
        assert!(!e.is_capturing());
        assert!(!e.is_swooping());
    }
}

#[test]
fn factory_parses_type_tags() {
    assert_eq!("shooting".parse::<EnemyType>(), Ok(EnemyType::Shooting));
    assert_eq!("Swooping".parse::<EnemyType>(), Ok(EnemyType::Swooping));
    assert_eq!("CAPTURING".parse::<EnemyType>(), Ok(EnemyType::Capturing));
    assert_eq!(
        "boss".parse::<EnemyType>(),
        Err(UnknownEnemyType("boss".to_string()))
    );
}

#[test]
fn create_enemy_positions_new_enemy() {
    let e = create_enemy(EnemyType::Swooping, 250, 220, 0);
    assert_eq!((e.x, e.y, e.origin_x, e.origin_y), (250, 220, 250, 220));
    assert!(e.can_swoop());
}
