//! Turn-based game state: move application and terminal freezing.

use serde::{Deserialize, Serialize};

use crate::core::{ActivityError, ActivityResult, GameRng};

use super::board::{Board, GameOutcome, Mark};
use super::opponent::choose_opponent_move;

/// A tic-tac-toe game in progress.
///
/// X always moves first. Once the outcome leaves `InProgress` the
/// state is frozen; further moves are rejected until `reset`.
///
/// ```
/// use wellness_activities::tictactoe::{Mark, TurnGame};
///
/// let mut game = TurnGame::new();
/// game.apply_move(0, Mark::X).unwrap();
/// assert_eq!(game.turn(), Mark::O);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnGame {
    board: Board,
    turn: Mark,
    outcome: GameOutcome,
}

impl Default for TurnGame {
    fn default() -> Self {
        Self::new()
    }
}

impl TurnGame {
    /// Create a fresh game: empty board, X to move.
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Mark::X,
            outcome: GameOutcome::InProgress,
        }
    }

    /// The current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The mark whose turn it is.
    #[must_use]
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// The current outcome.
    #[must_use]
    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    /// Whether the game has ended.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Place `player`'s mark on `cell`.
    ///
    /// Rejects the move when the game is over, the cell is out of range
    /// or occupied, or it is not `player`'s turn. On success the
    /// outcome is re-evaluated and, if the game continues, the turn
    /// flips to the other mark.
    pub fn apply_move(&mut self, cell: usize, player: Mark) -> ActivityResult<()> {
        if self.is_terminal() {
            return Err(ActivityError::invalid_move("game is over"));
        }
        if player != self.turn {
            return Err(ActivityError::invalid_move(format!("it is not {player}'s turn")));
        }
        if !self.board.is_open(cell) {
            return Err(ActivityError::invalid_move(format!("cell {cell} is not open")));
        }

        self.board.place(cell, player);
        self.outcome = self.board.evaluate();
        if !self.is_terminal() {
            self.turn = self.turn.other();
        }
        Ok(())
    }

    /// Choose and apply the heuristic move for the side to move.
    ///
    /// Returns the cell taken. The caller stages any "thinking" delay
    /// before invoking this; the engine itself never waits.
    pub fn opponent_turn(&mut self, rng: &mut GameRng) -> ActivityResult<usize> {
        if self.is_terminal() {
            return Err(ActivityError::invalid_move("game is over"));
        }

        let mover = self.turn;
        let cell = choose_opponent_move(&self.board, mover, mover.other(), rng)
            .ok_or_else(|| ActivityError::invalid_move("no open cell"))?;
        self.apply_move(cell, mover)?;
        Ok(cell)
    }

    /// Return to the initial state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
