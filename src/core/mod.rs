//! Core domain types for the game
//!
//! This module contains the fundamental game types with no I/O dependencies.
//! All derived values (win/loss, reveal progress) are pure queries over the
//! session's stored state.

mod reveal;
mod session;
mod word;

pub use reveal::{RevealOrder, reveal_count, shuffle};
pub use session::{GameConfig, GameSession, LetterState, Outcome};
pub use word::{SecretWord, WordError};
