//! TUI application state and logic

use crate::core::{GameConfig, GameSession, SecretWord};
use crate::wordlists;
use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub session: GameSession,
    words: Vec<SecretWord>,
    pub should_quit: bool,
}

impl App {
    /// Create the app and start the first round
    ///
    /// # Errors
    ///
    /// Fails if the candidate word list is empty.
    pub fn new(words: Vec<SecretWord>, config: GameConfig) -> Result<Self> {
        let mut rng = rand::rng();
        let word = wordlists::draw(&words, &mut rng)
            .context("word list is empty")?
            .clone();
        let session = GameSession::new(word, config, &mut rng);

        Ok(Self {
            session,
            words,
            should_quit: false,
        })
    }

    /// Forward a letter to the session
    ///
    /// Input is rejected here once the round is decided; the session itself
    /// stays a plain mutator.
    pub fn guess(&mut self, letter: char) {
        if self.session.outcome().is_over() {
            return;
        }
        self.session.guess(letter);
    }

    /// Start a new round with a freshly drawn word
    pub fn new_round(&mut self) {
        let mut rng = rand::rng();
        let word = wordlists::draw(&self.words, &mut rng).cloned();
        if let Some(word) = word {
            self.session.reset(word, &mut rng);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Esc => {
                    app.should_quit = true;
                }
                KeyCode::Enter => {
                    app.new_round();
                }
                KeyCode::Char(c) => {
                    app.guess(c.to_ascii_lowercase());
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn app_starts_a_round() {
        let words = words_from_slice(&["gato"]);
        let app = App::new(words, GameConfig::default()).unwrap();
        assert_eq!(app.session.word().text(), "gato");
        assert!(!app.should_quit);
    }

    #[test]
    fn app_rejects_empty_word_list() {
        assert!(App::new(Vec::new(), GameConfig::default()).is_err());
    }

    #[test]
    fn guesses_ignored_once_round_is_decided() {
        let words = words_from_slice(&["ab"]);
        let mut app = App::new(words, GameConfig::default()).unwrap();
        app.guess('a');
        app.guess('b');
        assert!(app.session.is_winner());

        app.guess('z');
        assert_eq!(app.session.wrong_guesses(), 0);
        assert!(!app.session.already_guessed('z'));
    }

    #[test]
    fn new_round_resets_session() {
        let words = words_from_slice(&["gato"]);
        let mut app = App::new(words, GameConfig::default()).unwrap();
        app.guess('g');
        app.guess('z');

        app.new_round();
        assert!(app.session.guessed_letters().is_empty());
        assert_eq!(app.session.wrong_guesses(), 0);
    }
}
