// SPDX-License-Identifier: MIT OR Apache-2.0

use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use tictactoe_core::{Coord, GameError, GameState, GameStatus, Mark};

fn play(game: &mut GameState, moves: &[(usize, usize)]) {
    for &(row, col) in moves {
        assert!(game.apply_move(row, col), "move ({}, {}) rejected", row, col);
        game.update_status();
    }
}

fn counts_balanced(game: &GameState) -> bool {
    let x = game.board().count(Mark::X);
    let o = game.board().count(Mark::O);
    x == o || x == o + 1
}

#[test]
fn new_game_starts_empty_with_x() {
    let game = GameState::new();
    assert!(game.board().iter().all(|(_, cell)| cell.is_none()));
    assert_eq!(game.turn(), Mark::X);
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.status_message(), "Player X's turn");
}

#[test]
fn top_row_win_for_x() {
    let mut game = GameState::new();
    play(&mut game, &[(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)]);

    assert!(game.check_win(Mark::X));
    assert!(!game.check_win(Mark::O));
    assert_eq!(game.status(), GameStatus::XWins);
    assert_eq!(game.status_message(), "Player X wins!");
}

#[test]
fn column_win_for_o() {
    let mut game = GameState::new();
    play(&mut game, &[(0, 0), (0, 1), (2, 2), (1, 1), (1, 0), (2, 1)]);

    assert_eq!(game.status(), GameStatus::OWins);
    assert_eq!(game.status().winner(), Some(Mark::O));
    assert_eq!(game.status_message(), "Player O wins!");
}

#[test]
fn full_board_without_line_is_a_draw() {
    let mut game = GameState::new();
    // X: (0,0),(0,1),(1,2),(2,0),(2,2)  O: (0,2),(1,0),(1,1),(2,1)
    play(
        &mut game,
        &[(0, 0), (0, 2), (0, 1), (1, 0), (1, 2), (1, 1), (2, 0), (2, 1), (2, 2)],
    );

    assert!(game.is_full());
    assert!(!game.check_win(Mark::X));
    assert!(!game.check_win(Mark::O));
    assert_eq!(game.status(), GameStatus::Draw);
    assert_eq!(game.status_message(), "It's a draw!");
}

#[test]
fn out_of_range_move_is_ignored() {
    let mut game = GameState::new();
    let before = game.clone();

    assert!(!game.apply_move(5, 5));
    assert_eq!(game, before);
    assert_eq!(game.try_apply_move(Coord::new(3, 0)), Err(GameError::InvalidCoordinate));
    assert_eq!(game, before);
}

#[test]
fn occupied_cell_is_ignored() {
    let mut game = GameState::new();
    assert!(game.apply_move(1, 1));
    let before = game.clone();

    assert!(!game.apply_move(1, 1));
    assert_eq!(game, before);
    assert_eq!(game.turn(), Mark::O);
    assert_eq!(game.try_apply_move(Coord::new(1, 1)), Err(GameError::OccupiedPosition));
}

#[test]
fn moves_after_game_over_are_ignored() {
    let mut game = GameState::new();
    play(&mut game, &[(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)]);
    let before = game.clone();

    assert!(!game.apply_move(2, 2));
    assert_eq!(game.try_apply_move(Coord::new(2, 2)), Err(GameError::GameOver));
    game.update_status();
    assert_eq!(game, before);
}

#[test]
fn apply_move_does_not_update_status() {
    let mut game = GameState::new();
    for (row, col) in [(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)] {
        game.apply_move(row, col);
    }

    assert!(game.check_win(Mark::X));
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.update_status(), GameStatus::XWins);
}

#[test]
fn update_status_is_idempotent() {
    let mut game = GameState::new();
    assert_eq!(game.update_status(), GameStatus::InProgress);
    assert_eq!(game.update_status(), GameStatus::InProgress);

    play(&mut game, &[(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)]);
    assert_eq!(game.update_status(), GameStatus::XWins);
    assert_eq!(game.update_status(), GameStatus::XWins);
}

#[test]
fn initialize_resets_from_any_state() {
    let mut game = GameState::new();
    play(&mut game, &[(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)]);
    game.initialize();
    assert_eq!(game, GameState::new());

    game.apply_move(2, 2);
    game.initialize();
    assert_eq!(game, GameState::new());

    game.initialize();
    assert_eq!(game, GameState::new());
    assert_eq!(game.turn(), Mark::X);
}

#[test]
fn turn_alternates_and_message_follows() {
    let mut game = GameState::new();
    assert_eq!(game.try_apply_move(Coord::new(0, 0)), Ok(Mark::X));
    assert_eq!(game.status_message(), "Player O's turn");
    assert_eq!(game.try_apply_move(Coord::new(2, 2)), Ok(Mark::O));
    assert_eq!(game.status_message(), "Player X's turn");
}

#[test]
fn random_games_keep_mark_counts_balanced() {
    let mut rng = StdRng::seed_from_u64(0x7177_7ac7_0e);

    for _ in 0..500 {
        let mut game = GameState::new();
        let mut cells: Vec<Coord> = Coord::all().collect();
        cells.shuffle(&mut rng);

        for coord in cells {
            let status_before = game.status();
            let placed = game.apply_move(coord.row, coord.col);
            assert_eq!(placed, !status_before.is_terminal());
            assert!(counts_balanced(&game), "unbalanced board {:?}", game.board());
            game.update_status();
        }

        assert!(game.status().is_terminal());
    }
}

#[test]
fn random_clicks_never_break_invariant() {
    let mut rng = StdRng::seed_from_u64(42);
    let targets: Vec<(usize, usize)> = (0..5).flat_map(|r| (0..5).map(move |c| (r, c))).collect();

    let mut game = GameState::new();
    for _ in 0..2_000 {
        let &(row, col) = targets.choose(&mut rng).unwrap();
        game.apply_move(row, col);
        game.update_status();
        assert!(counts_balanced(&game));

        if game.status().is_terminal() {
            game.initialize();
        }
    }
}

#[test]
fn state_serializes_to_json() {
    let mut game = GameState::new();
    game.apply_move(0, 0);
    game.update_status();

    let json = serde_json::to_string(&game).unwrap();
    assert!(json.contains("\"status\":\"InProgress\""));
    let restored: GameState = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, game);
}
