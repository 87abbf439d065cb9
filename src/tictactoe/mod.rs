//! Turn Engine: tic-tac-toe with a heuristic computer opponent.
//!
//! Pure state transitions only. The caller renders the board, feeds
//! cell clicks into [`TurnGame::apply_move`], and invokes
//! [`TurnGame::opponent_turn`] after whatever "thinking" delay it
//! wants to simulate.

pub mod board;
pub mod game;
pub mod opponent;

pub use board::{Board, Cell, GameOutcome, Mark, BOARD_CELLS, CENTER, WIN_LINES};
pub use game::TurnGame;
pub use opponent::choose_opponent_move;
