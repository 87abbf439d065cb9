//! # wellness-activities
//!
//! Pure mini-game engines for a student-wellness dashboard's
//! "Activities" surface: tic-tac-toe with a heuristic opponent, a
//! memory-pairs game, and a word-search puzzle.
//!
//! ## Design Principles
//!
//! 1. **Pure transitions**: Every operation consumes the current state
//!    and an input and mutates to the next state, or returns an error
//!    leaving the state untouched. No I/O, no persistence, no timers.
//!
//! 2. **Injected randomness**: Shuffles, heuristic tie-breaks, and word
//!    placement all draw from a caller-supplied [`core::GameRng`]. The
//!    same seed replays the same game.
//!
//! 3. **Caller-owned delays**: The opponent's "thinking" pause, the
//!    mismatch flip-back, and the stale-selection clear are staged by
//!    the presentation layer, which calls back into the engine
//!    (`resolve_pending_pair`, `clear_stale_selection`) when its timer
//!    fires. The engines themselves never wait.
//!
//! ## Modules
//!
//! - `core`: deterministic RNG and the error taxonomy
//! - `tictactoe`: Turn Engine (board, win/draw evaluation, heuristic opponent)
//! - `memory`: Match Engine (deck shuffle, flip/match state machine)
//! - `wordsearch`: Word Search Engine (grid generation, selection validation)

pub mod core;
pub mod memory;
pub mod tictactoe;
pub mod wordsearch;

// Re-export commonly used types
pub use crate::core::{ActivityError, ActivityResult, GameRng, GameRngState};

pub use crate::tictactoe::{
    choose_opponent_move, Board, Cell, GameOutcome, Mark, TurnGame, BOARD_CELLS,
};

pub use crate::memory::{Card, CardId, FlipOutcome, MatchState, DEFAULT_SYMBOLS};

pub use crate::wordsearch::{
    Grid, GridPos, PuzzleState, SelectionOutcome, WordEntry, DEFAULT_GRID_SIZE, WELLNESS_WORDS,
};
