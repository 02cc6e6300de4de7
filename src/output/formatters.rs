//! Formatting utilities for terminal output

use crate::core::GameSession;
use crate::output::art;

/// Format the word blanks line
///
/// Guessed characters show through; the rest render as underscores. A lost
/// round reveals the whole word.
#[must_use]
pub fn masked_word(session: &GameSession) -> String {
    let reveal_all = session.is_loser();
    let mut result = String::with_capacity(session.word().len() * 2);

    for (i, &c) in session.word().letters().iter().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        if reveal_all || session.already_guessed(c) {
            result.push(c);
        } else {
            result.push('_');
        }
    }

    result
}

/// Split the alphabet into the two keyboard rows
///
/// The stock 26-letter alphabet splits 13/13; odd-sized alphabets put the
/// extra key on the first row.
#[must_use]
pub fn keyboard_rows(alphabet: &[char]) -> (&[char], &[char]) {
    alphabet.split_at(alphabet.len().div_ceil(2))
}

/// Render the reveal grid as text rows
///
/// Hidden blocks are opaque; revealed blocks show the picture. Cells are two
/// characters wide to keep the grid roughly square in a terminal.
#[must_use]
pub fn reveal_grid_rows(session: &GameSession) -> Vec<String> {
    let grid_size = session.config().grid_size;
    let mask = session.reveal_mask();

    (0..grid_size)
        .map(|row| {
            let mut line = String::with_capacity(grid_size * 2);
            for col in 0..grid_size {
                let block = row * grid_size + col;
                if mask[block] {
                    let c = art::sample(row, col, grid_size);
                    line.push(c);
                    line.push(c);
                } else {
                    line.push('█');
                    line.push('█');
                }
            }
            line
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
