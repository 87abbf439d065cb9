//! Flip/match/mismatch state machine.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{ActivityError, ActivityResult, GameRng};

use super::deck::{build_deck, Card, CardId};

/// What a completed flip did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlipOutcome {
    /// First card of a pair turned over; waiting for the second.
    FirstOfPair,
    /// Second card matched the first; both locked face-up.
    Matched,
    /// Second card did not match. Both stay face-up until the caller,
    /// after its delay, invokes [`MatchState::resolve_pending_pair`].
    Mismatch,
}

/// A memory-pairs game.
///
/// ```
/// use wellness_activities::core::GameRng;
/// use wellness_activities::memory::MatchState;
///
/// let mut rng = GameRng::new(42);
/// let game = MatchState::new(&['A', 'B', 'C'], &mut rng).unwrap();
/// assert_eq!(game.deck().len(), 6);
/// assert_eq!(game.moves(), 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    symbols: Vec<char>,
    deck: Vec<Card>,
    /// Cards face-up and not yet resolved, in flip order.
    active: SmallVec<[CardId; 2]>,
    /// A compared, unequal pair awaiting its flip-back.
    pending_mismatch: Option<(CardId, CardId)>,
    /// Completed comparisons.
    moves: u32,
}

impl MatchState {
    /// Deal a fresh game: shuffled deck, all face-down, zero moves.
    ///
    /// Rejects empty or duplicate symbol sets.
    pub fn new(symbols: &[char], rng: &mut GameRng) -> ActivityResult<Self> {
        let deck = build_deck(symbols, rng)?;
        Ok(Self {
            symbols: symbols.to_vec(),
            deck,
            active: SmallVec::new(),
            pending_mismatch: None,
            moves: 0,
        })
    }

    /// The full deck in deal order.
    #[must_use]
    pub fn deck(&self) -> &[Card] {
        &self.deck
    }

    /// Cards currently face-up and unresolved, in flip order.
    #[must_use]
    pub fn active_selection(&self) -> &[CardId] {
        &self.active
    }

    /// The mismatched pair awaiting flip-back, if any.
    #[must_use]
    pub fn pending_mismatch(&self) -> Option<(CardId, CardId)> {
        self.pending_mismatch
    }

    /// Number of completed pair comparisons.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Whether every card is matched.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.deck.iter().all(|c| c.matched)
    }

    /// Turn a card face-up.
    ///
    /// Rejected when the game is won, a mismatch is awaiting
    /// resolution, the id is out of range, or the card is already
    /// matched or face-up. When this is the second card of a pair the
    /// comparison happens immediately: a match locks both cards, a
    /// mismatch parks them in the pending slot for the caller.
    pub fn flip_card(&mut self, id: CardId) -> ActivityResult<FlipOutcome> {
        if self.is_won() {
            return Err(ActivityError::invalid_move("game is already won"));
        }
        if self.pending_mismatch.is_some() {
            return Err(ActivityError::invalid_move("a mismatched pair is pending"));
        }

        let card = self
            .deck
            .get(id.index())
            .copied()
            .ok_or_else(|| ActivityError::invalid_move(format!("no card {}", id.0)))?;
        if card.matched {
            return Err(ActivityError::invalid_move("card is already matched"));
        }
        if card.face_up {
            return Err(ActivityError::invalid_move("card is already face-up"));
        }

        self.deck[id.index()].face_up = true;
        self.active.push(id);

        if self.active.len() < 2 {
            return Ok(FlipOutcome::FirstOfPair);
        }

        let (first, second) = (self.active[0], self.active[1]);
        self.moves += 1;

        if self.deck[first.index()].symbol == self.deck[second.index()].symbol {
            self.deck[first.index()].matched = true;
            self.deck[second.index()].matched = true;
            self.active.clear();
            Ok(FlipOutcome::Matched)
        } else {
            self.pending_mismatch = Some((first, second));
            Ok(FlipOutcome::Mismatch)
        }
    }

    /// Flip a pending mismatched pair back face-down.
    ///
    /// Invoked by the caller after its flip-back delay. Returns whether
    /// a pair was actually resolved; a call with nothing pending is a
    /// no-op.
    pub fn resolve_pending_pair(&mut self) -> bool {
        let Some((first, second)) = self.pending_mismatch.take() else {
            return false;
        };
        self.deck[first.index()].face_up = false;
        self.deck[second.index()].face_up = false;
        self.active.clear();
        true
    }

    /// Reshuffle the same symbols into a fresh game.
    pub fn reset(&mut self, rng: &mut GameRng) {
        self.deck = build_deck(&self.symbols, rng).expect("symbols validated at construction");
        self.active.clear();
        self.pending_mismatch = None;
        self.moves = 0;
    }
}
