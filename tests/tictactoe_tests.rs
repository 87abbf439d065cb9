//! Turn Engine integration tests.
//!
//! Drives whole games through the public API, including the heuristic
//! opponent, and checks the board-level invariants the engine promises.

use wellness_activities::core::GameRng;
use wellness_activities::tictactoe::{GameOutcome, Mark, TurnGame, BOARD_CELLS};

/// Play a full human-vs-heuristic game. The "human" just takes the
/// lowest open cell; the opponent answers every non-terminal move.
fn play_out(seed: u64) -> TurnGame {
    let mut game = TurnGame::new();
    let mut rng = GameRng::new(seed);

    while !game.is_terminal() {
        let cell = game.board().open_cells().next().unwrap();
        game.apply_move(cell, game.turn()).unwrap();

        if !game.is_terminal() {
            game.opponent_turn(&mut rng).unwrap();
        }
    }

    game
}

#[test]
fn test_every_game_reaches_exactly_one_terminal_state() {
    for seed in 0..50 {
        let game = play_out(seed);

        assert!(game.is_terminal(), "seed {seed}");
        assert!(game.board().mark_count() <= BOARD_CELLS);
        match game.outcome() {
            GameOutcome::Winner(_) => {}
            GameOutcome::Draw => assert!(game.board().is_full(), "seed {seed}"),
            GameOutcome::InProgress => panic!("terminal game reported InProgress (seed {seed})"),
        }
    }
}

#[test]
fn test_moves_rejected_after_terminal() {
    let game = play_out(42);
    let mut game = game;

    for cell in 0..BOARD_CELLS {
        assert!(game.apply_move(cell, game.turn()).is_err());
    }
    assert!(game.opponent_turn(&mut GameRng::new(0)).is_err());
}

#[test]
fn test_mark_counts_stay_balanced() {
    // X moves first, so X never trails and leads by at most one.
    let mut game = TurnGame::new();
    let mut rng = GameRng::new(7);

    while !game.is_terminal() {
        let before = game.board().mark_count();
        let cell = game.board().open_cells().next().unwrap();
        game.apply_move(cell, game.turn()).unwrap();
        assert_eq!(game.board().mark_count(), before + 1);

        if !game.is_terminal() {
            game.opponent_turn(&mut rng).unwrap();
        }
    }
}

#[test]
fn test_opening_corner_draws_center_response() {
    let mut game = TurnGame::new();
    let mut rng = GameRng::new(42);

    game.apply_move(0, Mark::X).unwrap();
    let reply = game.opponent_turn(&mut rng).unwrap();

    assert_eq!(reply, 4);
}

#[test]
fn test_opponent_blocks_row_threat() {
    // X builds two in the top row; O must answer at cell 2.
    let mut game = TurnGame::new();
    let mut rng = GameRng::new(42);

    game.apply_move(0, Mark::X).unwrap();
    game.apply_move(4, Mark::O).unwrap();
    game.apply_move(1, Mark::X).unwrap();
    let reply = game.opponent_turn(&mut rng).unwrap();

    assert_eq!(reply, 2);
}

#[test]
fn test_opponent_takes_win_when_offered() {
    // O assembles two in the middle row while X wanders; O finishes it.
    let mut game = TurnGame::new();
    let mut rng = GameRng::new(42);

    game.apply_move(0, Mark::X).unwrap();
    game.apply_move(3, Mark::O).unwrap();
    game.apply_move(8, Mark::X).unwrap();
    game.apply_move(4, Mark::O).unwrap();
    game.apply_move(1, Mark::X).unwrap();
    // X threatens cell 2, but O's own win at 5 takes priority.
    let reply = game.opponent_turn(&mut rng).unwrap();

    assert_eq!(reply, 5);
    assert_eq!(game.outcome(), GameOutcome::Winner(Mark::O));
}

#[test]
fn test_seeded_games_replay_identically() {
    let a = play_out(123);
    let b = play_out(123);

    assert_eq!(a, b);
}

#[test]
fn test_reset_after_any_game() {
    let mut game = play_out(5);
    game.reset();
    assert_eq!(game, TurnGame::new());

    game.reset();
    assert_eq!(game, TurnGame::new());
}
