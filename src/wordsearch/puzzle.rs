//! Selection handling and puzzle lifecycle.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::{ActivityError, ActivityResult, GameRng};

use super::grid::{generate, validate_words, Grid, GridPos, WordEntry};

/// What a selection change did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionOutcome {
    /// The selection now spells an unfound word; it has been marked
    /// found and the selection cleared.
    WordFound(String),
    /// The selection is a prefix of at least one unfound word; keep
    /// selecting.
    Prefix,
    /// The selection cannot extend into any unfound word. It stays
    /// visible until the caller, after its delay, invokes
    /// [`PuzzleState::clear_stale_selection`].
    NotAPrefix,
}

/// A word-search puzzle in progress.
///
/// ```
/// use wellness_activities::core::GameRng;
/// use wellness_activities::wordsearch::{PuzzleState, DEFAULT_GRID_SIZE, WELLNESS_WORDS};
///
/// let mut rng = GameRng::new(42);
/// let puzzle = PuzzleState::generate(&WELLNESS_WORDS, DEFAULT_GRID_SIZE, &mut rng).unwrap();
/// assert!(!puzzle.is_won());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleState {
    /// Validated, uppercased source list; kept for reset.
    word_list: Vec<String>,
    grid: Grid,
    words: Vec<WordEntry>,
    unplaced: Vec<String>,
    /// Currently highlighted cells, in click order.
    selection: Vec<GridPos>,
    /// Cells of already-found words.
    found_cells: FxHashSet<GridPos>,
    /// Set when the selection stopped being a prefix of any unfound
    /// word; cleared on the next validation or by the caller.
    stale_selection: bool,
}

impl PuzzleState {
    /// Build a puzzle: validate the word list, place words, fill the
    /// rest of the grid with random letters.
    ///
    /// Words that exhaust their placement budget are listed in
    /// [`PuzzleState::unplaced`] instead of silently vanishing.
    pub fn generate(words: &[&str], size: usize, rng: &mut GameRng) -> ActivityResult<Self> {
        let word_list = validate_words(words, size)?;
        let out = generate(&word_list, size, rng);
        Ok(Self {
            word_list,
            grid: out.grid,
            words: out.words,
            unplaced: out.unplaced,
            selection: Vec::new(),
            found_cells: FxHashSet::default(),
            stale_selection: false,
        })
    }

    /// The letter grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Placed words and their discovery state.
    #[must_use]
    pub fn words(&self) -> &[WordEntry] {
        &self.words
    }

    /// Words that could not be placed within the attempt budget.
    #[must_use]
    pub fn unplaced(&self) -> &[String] {
        &self.unplaced
    }

    /// Currently highlighted cells, in click order.
    #[must_use]
    pub fn selection(&self) -> &[GridPos] {
        &self.selection
    }

    /// Whether a cell belongs to an already-found word.
    #[must_use]
    pub fn is_found_cell(&self, pos: GridPos) -> bool {
        self.found_cells.contains(&pos)
    }

    /// Whether the selection is waiting for a stale-clear.
    #[must_use]
    pub fn selection_is_stale(&self) -> bool {
        self.stale_selection
    }

    /// Whether every placed word has been found.
    #[must_use]
    pub fn is_won(&self) -> bool {
        !self.words.is_empty() && self.words.iter().all(WordEntry::found)
    }

    /// Toggle a cell in the selection and validate the result.
    ///
    /// Clicking an unselected cell appends it; clicking a selected cell
    /// removes it (order otherwise preserved). Cells of found words are
    /// rejected, as is anything once the puzzle is won.
    pub fn toggle_cell(&mut self, row: usize, col: usize) -> ActivityResult<SelectionOutcome> {
        if self.is_won() {
            return Err(ActivityError::invalid_move("puzzle is already solved"));
        }

        let pos = GridPos::new(row, col);
        if !self.grid.contains(pos) {
            return Err(ActivityError::invalid_move(format!("cell ({row}, {col}) is off the grid")));
        }
        if self.is_found_cell(pos) {
            return Err(ActivityError::invalid_move("cell belongs to a found word"));
        }

        if let Some(idx) = self.selection.iter().position(|&p| p == pos) {
            self.selection.remove(idx);
        } else {
            self.selection.push(pos);
        }

        Ok(self.validate_selection())
    }

    /// Drop the selection if it was flagged stale. Invoked by the
    /// caller after the miss-feedback delay. Returns whether anything
    /// was cleared.
    pub fn clear_stale_selection(&mut self) -> bool {
        if !self.stale_selection {
            return false;
        }
        self.selection.clear();
        self.stale_selection = false;
        true
    }

    /// Regenerate the puzzle from the original word list.
    pub fn reset(&mut self, rng: &mut GameRng) {
        let out = generate(&self.word_list, self.grid.size(), rng);
        self.grid = out.grid;
        self.words = out.words;
        self.unplaced = out.unplaced;
        self.selection.clear();
        self.found_cells.clear();
        self.stale_selection = false;
    }

    /// Compare the selected letters against the unfound words.
    fn validate_selection(&mut self) -> SelectionOutcome {
        let spelled: String = self
            .selection
            .iter()
            .filter_map(|&pos| self.grid.letter(pos))
            .collect();

        if let Some(entry) = self
            .words
            .iter_mut()
            .find(|w| !w.found() && w.word() == spelled)
        {
            entry.mark_found();
            let word = entry.word().to_string();
            let path: Vec<GridPos> = entry.path().to_vec();
            self.found_cells.extend(path);
            self.selection.clear();
            self.stale_selection = false;
            return SelectionOutcome::WordFound(word);
        }

        let is_prefix = self
            .words
            .iter()
            .any(|w| !w.found() && w.word().starts_with(&spelled));
        self.stale_selection = !is_prefix;
        if is_prefix {
            SelectionOutcome::Prefix
        } else {
            SelectionOutcome::NotAPrefix
        }
    }
}
