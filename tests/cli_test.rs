use std::io::Cursor;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{
    coord_to_string, parse_coordinate, parse_placement, render_fleet_board, render_target_board,
    AttackResult, CliGame, Coordinate, GameConfig, GameSession, GameStatus, Gameboard, NoDelay,
    Orientation, Ship,
};

#[test]
fn test_parse_coordinate() {
    assert_eq!(parse_coordinate("A1", 9, 9), Ok(Coordinate::new(0, 0)));
    assert_eq!(parse_coordinate("b7", 9, 9), Ok(Coordinate::new(1, 6)));
    assert_eq!(parse_coordinate(" I9 ", 9, 9), Ok(Coordinate::new(8, 8)));
    assert!(parse_coordinate("", 9, 9).is_err());
    assert!(parse_coordinate("A", 9, 9).is_err());
    assert!(parse_coordinate("J1", 9, 9).is_err());
    assert!(parse_coordinate("A0", 9, 9).is_err());
    assert!(parse_coordinate("A10", 9, 9).is_err());
    assert!(parse_coordinate("1A", 9, 9).is_err());
}

#[test]
fn test_coord_to_string_roundtrips_labels() {
    assert_eq!(coord_to_string(Coordinate::new(1, 6)), "B7");
    assert_eq!(coord_to_string(Coordinate::new(0, 0)), "A1");
    assert_eq!(coord_to_string(Coordinate::new(25, 8)), "Z9");
    assert_eq!(parse_coordinate("Z9", 9, 26), Ok(Coordinate::new(25, 8)));
    assert_eq!(coord_to_string(Coordinate::new(199, 0)), "?1");
}

#[test]
fn test_parse_placement() {
    assert_eq!(
        parse_placement("C4 v", 9, 9),
        Ok((Coordinate::new(2, 3), Orientation::Vertical))
    );
    assert_eq!(
        parse_placement("a1", 9, 9),
        Ok((Coordinate::new(0, 0), Orientation::Horizontal))
    );
    assert!(parse_placement("A1 x", 9, 9).is_err());
}

#[test]
fn test_render_boards() {
    let mut board = Gameboard::new(3, 2).unwrap();
    let mut fleet = vec![Ship::new(2, Orientation::Horizontal)];
    board
        .place_ship(&mut fleet[0], Coordinate::new(0, 0), Orientation::Horizontal)
        .unwrap();
    board
        .mark_incoming(Coordinate::new(0, 1), AttackResult::Hit)
        .unwrap();
    board
        .mark_incoming(Coordinate::new(1, 2), AttackResult::Miss)
        .unwrap();

    let fleet_view = render_fleet_board(&board);
    assert_eq!(fleet_view, "     1  2  3\n A   S  X  .\n B   .  .  o\n");

    let target_view = render_target_board(&board);
    assert_eq!(target_view, "     1  2  3\n A   .  X  .\n B   .  .  o\n");
}

fn tiny_session(seed: u64) -> (GameSession, SmallRng) {
    let config = GameConfig::standard()
        .with_dimensions(3, 1)
        .with_fleet(vec![1])
        .with_cpu_delay_ms(0..=0);
    let mut rng = SmallRng::seed_from_u64(seed);
    let session = GameSession::new(config, &mut rng, Box::new(NoDelay)).unwrap();
    (session, rng)
}

#[tokio::test]
async fn test_scripted_game_finishes() {
    let (mut session, mut rng) = tiny_session(11);
    let input = Cursor::new("Z9\nA1 h\nA1\nA2\nA3\n");
    let mut game = CliGame::new(input, Vec::new());
    let status = game.run(&mut session, &mut rng).await.unwrap();
    assert!(matches!(status, GameStatus::Won | GameStatus::Lost));
    assert_eq!(session.human().ships()[0].origin(), Some(Coordinate::new(0, 0)));

    let output = String::from_utf8(game.into_output()).unwrap();
    assert!(output.contains("Invalid input"));
    assert!(output.contains("You fired at A1"));
    assert!(output.contains("VICTORY") || output.contains("DEFEAT"));
}

#[tokio::test]
async fn test_blank_line_places_randomly() {
    let (mut session, mut rng) = tiny_session(12);
    let input = Cursor::new("\nA1\nA1\nA2\nA3\n");
    let mut game = CliGame::new(input, Vec::new());
    game.run(&mut session, &mut rng).await.unwrap();
    assert!(session.human().fleet_placed());
    assert_ne!(session.status(), GameStatus::InProgress);
}

#[tokio::test]
async fn test_closed_input_is_an_error() {
    let (mut session, mut rng) = tiny_session(13);
    let mut game = CliGame::new(Cursor::new(""), Vec::new());
    assert!(game.run(&mut session, &mut rng).await.is_err());
}
