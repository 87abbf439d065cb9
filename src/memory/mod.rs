//! Match Engine: the memory-pairs game.
//!
//! A deck of two copies of each symbol is shuffled face-down; the
//! player flips cards two at a time. Matches lock permanently; a
//! mismatch parks in a pending slot that the caller resolves after its
//! flip-back delay ([`MatchState::resolve_pending_pair`]), so no timer
//! lives in the engine.

pub mod deck;
pub mod game;

pub use deck::{build_deck, Card, CardId, DEFAULT_SYMBOLS};
pub use game::{FlipOutcome, MatchState};
