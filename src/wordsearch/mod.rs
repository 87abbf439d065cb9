//! Word Search Engine: grid generation and selection validation.
//!
//! Words are placed horizontally or vertically on a square grid, each
//! on its own cells, with a bounded number of random trials per word;
//! leftover cells get random filler letters. The player clicks cells in
//! order; an exact match marks the word found, a dead-end selection is
//! flagged stale for the caller to clear after its feedback delay
//! ([`PuzzleState::clear_stale_selection`]).

pub mod grid;
pub mod puzzle;

pub use grid::{
    Direction, Grid, GridPos, WordEntry, DEFAULT_GRID_SIZE, PLACEMENT_ATTEMPTS, WELLNESS_WORDS,
};
pub use puzzle::{PuzzleState, SelectionOutcome};
