use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{
    cpu_match, AttackResult, BoardError, Coordinate, GameConfig, GameError, GameSession,
    GameStatus, NoDelay, Orientation, TokioPacer, Turn,
};

fn session(seed: u64, config: GameConfig) -> (GameSession, SmallRng) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let session = GameSession::new(config, &mut rng, Box::new(NoDelay)).unwrap();
    (session, rng)
}

/// First coordinate on the CPU board that is not occupied by a ship.
fn cpu_water(session: &GameSession) -> Coordinate {
    session
        .cpu()
        .ship_board()
        .cells()
        .find(|c| c.is_ocean())
        .map(|c| c.coordinates())
        .unwrap()
}

#[test]
fn test_attack_before_start_rejected() {
    let (mut s, _) = session(1, GameConfig::standard());
    assert_eq!(s.status(), GameStatus::Setup);
    assert_eq!(
        s.human_attack(Coordinate::new(0, 0)),
        Err(GameError::NotStarted)
    );
    assert_eq!(s.start(), Err(GameError::FleetNotPlaced));
}

#[test]
fn test_manual_placement_phase() {
    let (mut s, _) = session(2, GameConfig::standard());
    s.place_human_ship(0, Coordinate::new(0, 0), Orientation::Horizontal)
        .unwrap();
    assert_eq!(
        s.place_human_ship(0, Coordinate::new(5, 0), Orientation::Horizontal),
        Err(GameError::ShipAlreadyPlaced)
    );
    assert_eq!(
        s.place_human_ship(1, Coordinate::new(0, 2), Orientation::Vertical),
        Err(GameError::Board(BoardError::ShipOverlaps))
    );
    assert_eq!(
        s.place_human_ship(7, Coordinate::new(0, 0), Orientation::Vertical),
        Err(GameError::Board(BoardError::InvalidIndex))
    );
    s.place_human_ship(1, Coordinate::new(1, 0), Orientation::Horizontal)
        .unwrap();
    s.place_human_ship(2, Coordinate::new(2, 0), Orientation::Horizontal)
        .unwrap();
    s.place_human_ship(3, Coordinate::new(3, 0), Orientation::Horizontal)
        .unwrap();
    s.place_human_ship(4, Coordinate::new(4, 0), Orientation::Horizontal)
        .unwrap();
    s.start().unwrap();
    assert_eq!(s.status(), GameStatus::InProgress);
    assert_eq!(s.turn(), Turn::Human);
    assert_eq!(s.clear_human_fleet(), Err(GameError::AlreadyStarted));
}

#[test]
fn test_place_remaining_keeps_manual_ships() {
    let (mut s, mut rng) = session(3, GameConfig::standard());
    s.place_human_ship(0, Coordinate::new(8, 0), Orientation::Horizontal)
        .unwrap();
    s.place_remaining_randomly(&mut rng).unwrap();
    assert!(s.human().fleet_placed());
    assert_eq!(s.human().ships()[0].origin(), Some(Coordinate::new(8, 0)));
}

#[tokio::test]
async fn test_turns_alternate() {
    let config = GameConfig::standard().with_cpu_delay_ms(0..=0);
    let (mut s, mut rng) = session(4, config);
    s.randomize_human_fleet(&mut rng).unwrap();
    s.start().unwrap();

    let target = cpu_water(&s);
    let report = s.human_attack(target).unwrap();
    assert_eq!(report.result, AttackResult::Miss);
    assert!(!report.victory);
    assert_eq!(s.turn(), Turn::Cpu);
    assert_eq!(s.human_attack(target), Err(GameError::NotYourTurn));

    let report = s.cpu_turn(&mut rng).await.unwrap();
    assert!(s.human().ship_board().has_fired_at(report.target));
    assert!(s.cpu().target_board().has_fired_at(report.target));
    assert_eq!(s.turn(), Turn::Human);

    assert_eq!(s.human_attack(target), Err(GameError::AlreadyTargeted));
    assert_eq!(
        s.human_attack(Coordinate::new(9, 0)),
        Err(GameError::Board(BoardError::OutOfBounds))
    );
}

#[tokio::test]
async fn test_human_sinks_whole_fleet() {
    let config = GameConfig::standard().with_cpu_delay_ms(0..=0);
    let (mut s, mut rng) = session(5, config);
    s.randomize_human_fleet(&mut rng).unwrap();
    s.start().unwrap();

    let targets: Vec<Coordinate> = s
        .cpu()
        .ships()
        .iter()
        .flat_map(|ship| ship.cells().to_vec())
        .collect();
    let mut sunk = 0;
    for (i, &target) in targets.iter().enumerate() {
        let report = s.human_attack(target).unwrap();
        assert_eq!(report.result, AttackResult::Hit);
        if report.sunk {
            sunk += 1;
        }
        if i + 1 == targets.len() {
            assert!(report.victory);
        } else {
            assert!(!report.victory);
            s.cpu_turn(&mut rng).await.unwrap();
        }
    }
    assert_eq!(sunk, 5);
    assert_eq!(s.status(), GameStatus::Won);
    assert!(s.cpu().all_ships_sunk());
    assert_eq!(s.human_attack(Coordinate::new(0, 0)), Err(GameError::GameOver));
}

#[tokio::test]
async fn test_cpu_can_win() {
    let mut losses = 0;
    for seed in 0..20 {
        let config = GameConfig::standard()
            .with_dimensions(4, 4)
            .with_fleet(vec![1])
            .with_cpu_delay_ms(0..=0);
        let (mut s, mut rng) = session(seed, config);
        s.randomize_human_fleet(&mut rng).unwrap();
        s.start().unwrap();

        // the human only fires at open water, so only the CPU can win
        let water: Vec<Coordinate> = s
            .cpu()
            .ship_board()
            .cells()
            .filter(|c| c.is_ocean())
            .map(|c| c.coordinates())
            .collect();
        for target in water {
            s.human_attack(target).unwrap();
            let report = s.cpu_turn(&mut rng).await.unwrap();
            if report.victory {
                assert_eq!(s.status(), GameStatus::Lost);
                assert!(s.human().all_ships_sunk());
                assert_eq!(s.cpu_turn(&mut rng).await, Err(GameError::GameOver));
                losses += 1;
                break;
            }
        }
    }
    assert!(losses > 0);
}

#[test]
fn test_cpu_match_finishes() {
    let mut rng1 = SmallRng::seed_from_u64(123);
    let mut rng2 = SmallRng::seed_from_u64(124);
    let mut shots = [0usize; 2];
    let summary = cpu_match(&GameConfig::standard(), [&mut rng1, &mut rng2], |shooter, _| {
        shots[shooter] += 1;
    })
    .unwrap();
    assert_eq!(summary.shots, shots);
    assert!(summary.winner < 2);
    assert!(summary.shots[summary.winner] >= 16);
    assert!(summary.shots[0] <= 81 && summary.shots[1] <= 81);
    // player 0 shoots first
    assert!(summary.shots[0] == summary.shots[1] || summary.shots[0] == summary.shots[1] + 1);
}

#[tokio::test]
async fn test_zero_or_empty_delay_skips_thinking_time() {
    for delay in [0..=0, 5..=1] {
        let config = GameConfig::standard().with_cpu_delay_ms(delay);
        let mut rng = SmallRng::seed_from_u64(21);
        let mut s = GameSession::new(config, &mut rng, Box::new(TokioPacer)).unwrap();
        s.randomize_human_fleet(&mut rng).unwrap();
        s.start().unwrap();
        let target = cpu_water(&s);
        s.human_attack(target).unwrap();

        let report = tokio::time::timeout(
            std::time::Duration::from_millis(200),
            s.cpu_turn(&mut rng),
        )
        .await
        .expect("cpu turn should not pause")
        .unwrap();
        assert!(s.human().target_board().has_fired_at(target));
        assert!(s.cpu().target_board().has_fired_at(report.target));
        assert_eq!(s.turn(), Turn::Human);
    }
}
