//! Shared engine infrastructure: deterministic RNG and the error taxonomy.
//!
//! The engines themselves live in their own top-level modules and share
//! nothing but these two types.

pub mod error;
pub mod rng;

pub use error::{ActivityError, ActivityResult};
pub use rng::{GameRng, GameRngState};
