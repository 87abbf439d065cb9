//! Heuristic computer opponent.
//!
//! The move is picked by a fixed priority ladder rather than minimax;
//! the ordering is part of the game's contract and must not change:
//!
//! 1. Take an immediate winning cell.
//! 2. Block the human's immediate winning cell.
//! 3. Take the center.
//! 4. Take a uniformly random empty corner.
//! 5. Take a uniformly random empty edge.
//! 6. Take any remaining empty cell.
//!
//! Steps 1-2 scan cells in board order, so they are fully
//! deterministic; only steps 4-5 consume randomness.

use crate::core::GameRng;

use super::board::{Board, GameOutcome, Mark, CENTER};

const CORNERS: [usize; 4] = [0, 2, 6, 8];
const EDGES: [usize; 4] = [1, 3, 5, 7];

/// Pick the opponent's cell for the current board.
///
/// Returns `None` only when the board has no open cell. Callable
/// synchronously; any "thinking" delay is staged by the caller.
#[must_use]
pub fn choose_opponent_move(
    board: &Board,
    opponent: Mark,
    human: Mark,
    rng: &mut GameRng,
) -> Option<usize> {
    if let Some(cell) = winning_cell(board, opponent) {
        return Some(cell);
    }

    if let Some(cell) = winning_cell(board, human) {
        return Some(cell);
    }

    if board.is_open(CENTER) {
        return Some(CENTER);
    }

    let open_corners: Vec<usize> = CORNERS.iter().copied().filter(|&c| board.is_open(c)).collect();
    if let Some(&cell) = rng.choose(&open_corners) {
        return Some(cell);
    }

    let open_edges: Vec<usize> = EDGES.iter().copied().filter(|&c| board.is_open(c)).collect();
    if let Some(&cell) = rng.choose(&open_edges) {
        return Some(cell);
    }

    board.open_cells().next()
}

/// First open cell that completes a line for `mark`, in board order.
fn winning_cell(board: &Board, mark: Mark) -> Option<usize> {
    board.open_cells().find(|&cell| {
        let mut trial = *board;
        trial.place(cell, mark);
        trial.evaluate() == GameOutcome::Winner(mark)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::board::board_from;

    fn pick(board: &Board, seed: u64) -> Option<usize> {
        choose_opponent_move(board, Mark::O, Mark::X, &mut GameRng::new(seed))
    }

    #[test]
    fn test_takes_center_first() {
        // X opened on a corner; no threats yet, center is open.
        let board = board_from("X........");
        assert_eq!(pick(&board, 42), Some(CENTER));
    }

    #[test]
    fn test_blocks_immediate_win() {
        // X threatens cell 2 via the top row; O has no win of its own
        // (column 0-3-6 is broken by X at 0).
        let board = board_from("XX.O..O..");
        assert_eq!(pick(&board, 42), Some(2));
    }

    #[test]
    fn test_prefers_own_win_over_block() {
        // X threatens cell 2; O threatens cell 5 on the middle row.
        // Rule 1 beats rule 2: O takes its own win.
        let board = board_from("XX.OO....");
        assert_eq!(pick(&board, 42), Some(5));
    }

    #[test]
    fn test_prefers_own_win_over_block_alt_line() {
        // O completes the middle row at 3; the block at 2 is ignored.
        let board = board_from("XX..OO.O.");
        assert_eq!(pick(&board, 42), Some(3));
    }

    #[test]
    fn test_random_corner_when_center_taken() {
        let board = board_from("....X....");
        let cell = pick(&board, 42).unwrap();
        assert!(CORNERS.contains(&cell), "expected a corner, got {cell}");
    }

    #[test]
    fn test_corner_choice_is_seed_deterministic() {
        let board = board_from("....X....");
        assert_eq!(pick(&board, 7), pick(&board, 7));
    }

    #[test]
    fn test_random_edge_when_corners_taken() {
        // Corners and center all taken, edges 3 and 5 open, and neither
        // side has an immediate winning cell.
        let board = board_from("XOX.X.OXO");
        for seed in 0..20 {
            let cell = pick(&board, seed).unwrap();
            assert!(cell == 3 || cell == 5, "expected an open edge, got {cell}");
        }
    }

    #[test]
    fn test_own_win_before_edge_rule() {
        // Only edges 3 and 5 remain; O completes the right column at 5,
        // so rule 1 fires before the random edge pick.
        let board = board_from("XOO.X.XXO");
        assert_eq!(pick(&board, 42), Some(5));
    }

    #[test]
    fn test_full_board_returns_none() {
        let board = board_from("XOXXOOOXX");
        assert_eq!(pick(&board, 42), None);
    }

    #[test]
    fn test_winning_cell_scan_order() {
        // X can win at 0 (top row or diagonal) and at 5 (right column);
        // the scan returns the lowest index.
        let board = board_from(".XXOX.OOX");
        assert_eq!(winning_cell(&board, Mark::X), Some(0));
    }
}
