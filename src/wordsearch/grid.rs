//! Letter grid and word placement.

use serde::{Deserialize, Serialize};

use crate::core::{ActivityError, ActivityResult, GameRng};

/// Grid size of the shipped puzzle.
pub const DEFAULT_GRID_SIZE: usize = 10;

/// Placement trials per word before it is reported unplaced.
pub const PLACEMENT_ATTEMPTS: usize = 100;

/// The word list the shipped puzzle hunts for.
pub const WELLNESS_WORDS: [&str; 5] = ["HOPE", "CALM", "PEACE", "FOCUS", "JOY"];

/// A cell coordinate, row-major from the top-left.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPos {
    pub row: usize,
    pub col: usize,
}

impl GridPos {
    /// Create a position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Axis a word runs along. Words always read left-to-right or
/// top-to-bottom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Horizontal,
    Vertical,
}

/// A square grid of uppercase letters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    size: usize,
    cells: Vec<char>,
}

impl Grid {
    /// Side length of the grid.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the position is inside the grid.
    #[must_use]
    pub fn contains(&self, pos: GridPos) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    /// The letter at `pos`. Returns `None` out of bounds.
    #[must_use]
    pub fn letter(&self, pos: GridPos) -> Option<char> {
        if self.contains(pos) {
            Some(self.cells[pos.row * self.size + pos.col])
        } else {
            None
        }
    }

    /// Iterate all positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = GridPos> + '_ {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| GridPos::new(row, col)))
    }
}

/// A word the puzzle asks for, with the cells it occupies.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    word: String,
    path: Vec<GridPos>,
    found: bool,
}

impl WordEntry {
    /// The word, uppercased.
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Cells the word occupies, in reading order.
    #[must_use]
    pub fn path(&self) -> &[GridPos] {
        &self.path
    }

    /// Whether the player has found this word.
    #[must_use]
    pub fn found(&self) -> bool {
        self.found
    }

    pub(crate) fn mark_found(&mut self) {
        self.found = true;
    }
}

/// Validate and uppercase a word list.
///
/// Rejects empty lists, blank or non-alphabetic words, words longer
/// than the grid side, and duplicates (case-insensitive).
pub(crate) fn validate_words(words: &[&str], size: usize) -> ActivityResult<Vec<String>> {
    if size == 0 {
        return Err(ActivityError::invalid_config("grid size must be positive"));
    }
    if words.is_empty() {
        return Err(ActivityError::invalid_config("empty word list"));
    }

    let mut upper = Vec::with_capacity(words.len());
    for word in words {
        if word.is_empty() {
            return Err(ActivityError::invalid_config("blank word in list"));
        }
        if !word.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ActivityError::invalid_config(format!(
                "word {word:?} is not purely alphabetic"
            )));
        }
        if word.len() > size {
            return Err(ActivityError::invalid_config(format!(
                "word {word:?} does not fit a {size}x{size} grid"
            )));
        }
        let word = word.to_ascii_uppercase();
        if upper.contains(&word) {
            return Err(ActivityError::invalid_config(format!("duplicate word {word:?}")));
        }
        upper.push(word);
    }
    Ok(upper)
}

/// Grid under construction: cells are empty until a word or filler
/// letter lands on them.
struct GridBuilder {
    size: usize,
    cells: Vec<Option<char>>,
}

impl GridBuilder {
    fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    fn at(&self, pos: GridPos) -> Option<char> {
        self.cells[pos.row * self.size + pos.col]
    }

    fn set(&mut self, pos: GridPos, letter: char) {
        self.cells[pos.row * self.size + pos.col] = Some(letter);
    }

    /// The path `word` would occupy from `start`, or `None` if it runs
    /// off the grid.
    fn path_for(&self, word: &str, start: GridPos, dir: Direction) -> Option<Vec<GridPos>> {
        let len = word.len();
        match dir {
            Direction::Horizontal if start.col + len <= self.size => Some(
                (0..len).map(|i| GridPos::new(start.row, start.col + i)).collect(),
            ),
            Direction::Vertical if start.row + len <= self.size => Some(
                (0..len).map(|i| GridPos::new(start.row + i, start.col)).collect(),
            ),
            _ => None,
        }
    }

    /// A placement is legal only on empty cells. Words never share a
    /// cell, so a found word can never freeze part of another word's
    /// path.
    fn can_place(&self, path: &[GridPos]) -> bool {
        path.iter().all(|&pos| self.at(pos).is_none())
    }

    fn write(&mut self, word: &str, path: &[GridPos]) {
        for (letter, &pos) in word.chars().zip(path) {
            self.set(pos, letter);
        }
    }

    /// Fill every still-empty cell with a uniform random letter.
    fn freeze(self, rng: &mut GameRng) -> Grid {
        let cells = self
            .cells
            .into_iter()
            .map(|cell| cell.unwrap_or_else(|| rng.gen_letter()))
            .collect();
        Grid {
            size: self.size,
            cells,
        }
    }
}

/// Outcome of grid generation.
pub(crate) struct GeneratedGrid {
    pub grid: Grid,
    pub words: Vec<WordEntry>,
    pub unplaced: Vec<String>,
}

/// Place each word with up to [`PLACEMENT_ATTEMPTS`] random trials.
///
/// Words are processed in list order; a word that exhausts its budget
/// is reported in `unplaced` rather than silently dropped. `words`
/// must already be validated.
pub(crate) fn generate(words: &[String], size: usize, rng: &mut GameRng) -> GeneratedGrid {
    let mut builder = GridBuilder::new(size);
    let mut entries = Vec::new();
    let mut unplaced = Vec::new();

    for word in words {
        let mut placed = false;
        for _ in 0..PLACEMENT_ATTEMPTS {
            let dir = if rng.gen_bool(0.5) {
                Direction::Horizontal
            } else {
                Direction::Vertical
            };
            let start = GridPos::new(rng.gen_range_usize(0..size), rng.gen_range_usize(0..size));

            let Some(path) = builder.path_for(word, start, dir) else {
                continue;
            };
            if !builder.can_place(&path) {
                continue;
            }

            builder.write(word, &path);
            entries.push(WordEntry {
                word: word.clone(),
                path,
                found: false,
            });
            placed = true;
            break;
        }
        if !placed {
            unplaced.push(word.clone());
        }
    }

    GeneratedGrid {
        grid: builder.freeze(rng),
        words: entries,
        unplaced,
    }
}
