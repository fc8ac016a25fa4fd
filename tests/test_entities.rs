use galaxy_shooter::compute::init_state;
use galaxy_shooter::constants::*;
use galaxy_shooter::entities::*;
use galaxy_shooter::spawner::create_enemy;

#[test]
fn entity_clone_and_eq() {
    assert_eq!(EnemyType::Swooping, EnemyType::Swooping);
    assert_ne!(EnemyType::Swooping, EnemyType::Capturing);
    assert_ne!(SwoopStage::Idle, SwoopStage::Return);
    assert_ne!(CaptureStage::Firing, CaptureStage::Return);
    assert_ne!(GameStatus::Playing, GameStatus::GameOver);

    let enemy = create_enemy(EnemyType::Shooting, 100, 120, 0);
    assert_eq!(enemy.clone(), enemy);
}

#[test]
fn game_state_clone_is_independent() {
    let original = init_state(0);
    let mut cloned = original.clone();
    cloned.hero.x = 10;
    cloned.lives = 1;
    cloned.enemies.clear();
    cloned.lasers.push(Laser { x: 5, y: 5 });

    assert_eq!(original.hero.x, HERO_START_X);
    assert_eq!(original.lives, START_LIVES);
    assert_eq!(original.enemies.len(), 3);
    assert!(original.lasers.is_empty());
}

#[test]
fn bounds_match_entity_sizes() {
    let hero = Hero::new(375, 500).bounds();
    assert_eq!((hero.w, hero.h), (HERO_WIDTH, HERO_HEIGHT));

    let laser = Laser { x: 1, y: 2 }.bounds();
    assert_eq!((laser.x, laser.y, laser.w, laser.h), (1, 2, LASER_WIDTH, LASER_HEIGHT));

    let bullet = EnemyBullet { x: 3, y: 4 }.bounds();
    assert_eq!((bullet.w, bullet.h), (ENEMY_BULLET_WIDTH, ENEMY_BULLET_HEIGHT));

    let enemy = create_enemy(EnemyType::Capturing, 380, 50, 0).bounds();
    assert_eq!((enemy.right(), enemy.bottom()), (380 + ENEMY_SIZE, 50 + ENEMY_SIZE));
}

#[test]
fn enemy_type_follows_kind() {
    for kind in [EnemyType::Shooting, EnemyType::Swooping, EnemyType::Capturing] {
        let enemy = create_enemy(kind, 0, 0, 0);
        assert_eq!(enemy.enemy_type(), kind);
        assert_eq!((enemy.origin_x, enemy.origin_y), (0, 0));
    }
}
