//! Property-based tests for the engine invariants.

use proptest::prelude::*;

use wellness_activities::core::GameRng;
use wellness_activities::memory::MatchState;
use wellness_activities::tictactoe::{choose_opponent_move, GameOutcome, Mark, TurnGame, WIN_LINES};
use wellness_activities::wordsearch::PuzzleState;

/// Candidate symbols for arbitrary memory decks.
const ALPHABET: [char; 16] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P',
];

/// Candidate word pool for arbitrary puzzles.
const WORD_POOL: [&str; 8] = ["HOPE", "CALM", "PEACE", "FOCUS", "JOY", "REST", "BREATH", "KIND"];

proptest! {
    /// Any symbol set size deals a deck of two copies per symbol.
    #[test]
    fn deck_always_holds_every_symbol_twice(count in 1usize..=16, seed in any::<u64>()) {
        let symbols = &ALPHABET[..count];
        let mut rng = GameRng::new(seed);
        let game = MatchState::new(symbols, &mut rng).unwrap();

        prop_assert_eq!(game.deck().len(), 2 * count);
        for &symbol in symbols {
            let copies = game.deck().iter().filter(|c| c.symbol == symbol).count();
            prop_assert_eq!(copies, 2);
        }
    }

    /// Random playouts never produce an inconsistent outcome: a winner
    /// always has a completed line, a draw means a full board with no
    /// line, and the game ends within nine moves.
    #[test]
    fn playouts_reach_exactly_one_terminal_state(seed in any::<u64>()) {
        let mut rng = GameRng::new(seed);
        let mut game = TurnGame::new();
        let mut moves = 0;

        while !game.is_terminal() {
            let open: Vec<usize> = game.board().open_cells().collect();
            let cell = *rng.choose(&open).unwrap();
            game.apply_move(cell, game.turn()).unwrap();
            moves += 1;
            prop_assert!(moves <= 9);
        }

        let lines_of = |mark: Mark| {
            WIN_LINES.iter().filter(|line| {
                line.iter().all(|&i| game.board().cell(i).unwrap().mark() == Some(mark))
            }).count()
        };

        match game.outcome() {
            GameOutcome::Winner(mark) => prop_assert!(lines_of(mark) >= 1),
            GameOutcome::Draw => {
                prop_assert!(game.board().is_full());
                prop_assert_eq!(lines_of(Mark::X) + lines_of(Mark::O), 0);
            }
            GameOutcome::InProgress => prop_assert!(false, "terminal game is InProgress"),
        }
    }

    /// The heuristic always answers a non-full board with an open cell.
    #[test]
    fn heuristic_always_picks_an_open_cell(seed in any::<u64>(), moves in 0usize..=6) {
        let mut rng = GameRng::new(seed);
        let mut game = TurnGame::new();

        for _ in 0..moves {
            if game.is_terminal() {
                break;
            }
            let open: Vec<usize> = game.board().open_cells().collect();
            let cell = *rng.choose(&open).unwrap();
            game.apply_move(cell, game.turn()).unwrap();
        }

        if !game.is_terminal() {
            let mover = game.turn();
            let pick = choose_opponent_move(game.board(), mover, mover.other(), &mut rng);
            let cell = pick.unwrap();
            prop_assert!(game.board().is_open(cell));
        }
    }

    /// Every placed path spells its word, regardless of seed, grid
    /// size, or which words were requested.
    #[test]
    fn placed_paths_always_spell_their_words(
        seed in any::<u64>(),
        size in 7usize..=12,
        word_count in 1usize..=8,
    ) {
        let words = &WORD_POOL[..word_count];
        let mut rng = GameRng::new(seed);
        let puzzle = PuzzleState::generate(words, size, &mut rng).unwrap();

        prop_assert_eq!(puzzle.words().len() + puzzle.unplaced().len(), word_count);

        for entry in puzzle.words() {
            let spelled: String = entry
                .path()
                .iter()
                .map(|&pos| puzzle.grid().letter(pos).unwrap())
                .collect();
            prop_assert_eq!(spelled, entry.word());
        }
    }
}
