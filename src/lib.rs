//! Forca
//!
//! A terminal hangman game with a twist: a hidden picture sits behind a grid
//! of opaque blocks, and every correct letter reveals a proportional share of
//! blocks in a fixed random order.
//!
//! # Quick Start
//!
//! ```rust
//! use forca::core::{GameConfig, GameSession, SecretWord};
//!
//! let word = SecretWord::new("gato").unwrap();
//! let mut session = GameSession::new(word, GameConfig::default(), &mut rand::rng());
//!
//! session.guess('g');
//! session.guess('z');
//! assert_eq!(session.wrong_guesses(), 1);
//! assert!(!session.is_winner());
//! ```

// Core domain types
pub mod core;

// Candidate word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
