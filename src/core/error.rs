//! Error taxonomy for the game engines.
//!
//! There are only two failure classes: a rejected input on a live game
//! (`InvalidMove`) and a bad game setup (`InvalidConfiguration`). Both
//! are returned to the caller as `Err`; nothing in this crate panics on
//! user input. The presentation layer decides whether a rejected move
//! shows as a no-op or an inline message.

use serde::{Deserialize, Serialize};

/// Convenience alias used throughout the crate.
pub type ActivityResult<T> = Result<T, ActivityError>;

/// Errors the engines can return.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityError {
    /// A move was rejected: terminal game, occupied or out-of-range
    /// cell, out-of-turn play, or a pending pair blocking further flips.
    InvalidMove(String),

    /// A game could not be set up: empty symbol set, duplicate words,
    /// word longer than the grid, and similar.
    InvalidConfiguration(String),
}

impl ActivityError {
    /// Build an `InvalidMove` error.
    #[must_use]
    pub fn invalid_move(reason: impl Into<String>) -> Self {
        Self::InvalidMove(reason.into())
    }

    /// Build an `InvalidConfiguration` error.
    #[must_use]
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration(reason.into())
    }
}

impl std::fmt::Display for ActivityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMove(reason) => write!(f, "invalid move: {reason}"),
            Self::InvalidConfiguration(reason) => write!(f, "invalid configuration: {reason}"),
        }
    }
}

impl std::error::Error for ActivityError {}
