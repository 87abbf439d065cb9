//! Card and deck construction for the memory game.

use serde::{Deserialize, Serialize};

use crate::core::{ActivityError, ActivityResult, GameRng};

/// The six symbols the shipped game deals (a 12-card deck).
pub const DEFAULT_SYMBOLS: [char; 6] = ['☀', '🌊', '🌸', '🐦', '🦋', '⭐'];

/// Stable identifier of a card: its index in the shuffled deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// The raw deck index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// One card in the deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Position in the deck, fixed at deal time.
    pub id: CardId,
    /// The symbol this card shows when face-up.
    pub symbol: char,
    /// Currently face-up (selected or matched).
    pub face_up: bool,
    /// Permanently matched with its twin.
    pub matched: bool,
}

impl Card {
    fn face_down(id: CardId, symbol: char) -> Self {
        Self {
            id,
            symbol,
            face_up: false,
            matched: false,
        }
    }
}

/// Build a shuffled deck of two copies of each symbol, all face-down.
///
/// Rejects an empty symbol set and repeated symbols: a symbol appearing
/// twice in the input would put four copies in the deck and break the
/// exactly-one-twin invariant.
pub fn build_deck(symbols: &[char], rng: &mut GameRng) -> ActivityResult<Vec<Card>> {
    if symbols.is_empty() {
        return Err(ActivityError::invalid_config("empty symbol set"));
    }
    for (i, symbol) in symbols.iter().enumerate() {
        if symbols[..i].contains(symbol) {
            return Err(ActivityError::invalid_config(format!(
                "duplicate symbol {symbol:?} in symbol set"
            )));
        }
    }

    let mut pool: Vec<char> = symbols.iter().chain(symbols.iter()).copied().collect();
    rng.shuffle(&mut pool);

    Ok(pool
        .into_iter()
        .enumerate()
        .map(|(i, symbol)| Card::face_down(CardId::new(i as u32), symbol))
        .collect())
}
