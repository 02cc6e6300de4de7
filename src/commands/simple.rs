//! Simple interactive CLI mode
//!
//! Text-based game loop without the TUI: prints the reveal grid, the word
//! blanks, and the error count after each guess.

use crate::core::{GameConfig, GameSession, LetterState, Outcome, SecretWord};
use crate::output::formatters::{masked_word, reveal_grid_rows};
use crate::wordlists;
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if the word list is empty or reading user input fails.
pub fn run_simple(words: &[SecretWord], config: &GameConfig) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════╗");
    println!("║                  F O R C A  -  modo texto                ║");
    println!("╚══════════════════════════════════════════════════════════╝\n");
    println!("Adivinhe as letras para revelar a imagem escondida.");
    println!("Comandos: 'novo' para recomeçar, 'sair' para encerrar.\n");

    let mut rng = rand::rng();
    let word = wordlists::draw(words, &mut rng)
        .ok_or("Word list is empty")?
        .clone();
    let mut session = GameSession::new(word, config.clone(), &mut rng);

    loop {
        print_board(&session);

        match session.outcome() {
            Outcome::Won => {
                println!("\n{}", "🎉 Você venceu!".bright_green().bold());
            }
            Outcome::Lost => {
                println!(
                    "\n{}",
                    format!("💀 Você perdeu! A palavra era \"{}\"", session.word())
                        .bright_red()
                        .bold()
                );
            }
            Outcome::Playing => {}
        }

        if session.outcome().is_over() {
            match get_user_input("Jogar novamente? (s/n)")?.to_lowercase().as_str() {
                "s" | "sim" | "y" | "yes" => {
                    let word = wordlists::draw(words, &mut rng)
                        .ok_or("Word list is empty")?
                        .clone();
                    session.reset(word, &mut rng);
                    continue;
                }
                _ => {
                    println!("\n👋 Até a próxima!\n");
                    return Ok(());
                }
            }
        }

        let input = get_user_input("Letra (ou comando)")?.to_lowercase();
        match input.as_str() {
            "sair" | "quit" | "exit" => {
                println!("\n👋 Até a próxima!\n");
                return Ok(());
            }
            "novo" | "new" => {
                let word = wordlists::draw(words, &mut rng)
                    .ok_or("Word list is empty")?
                    .clone();
                session.reset(word, &mut rng);
                println!("\n🔄 Novo jogo!\n");
            }
            _ => {
                let mut chars = input.chars();
                match (chars.next(), chars.next()) {
                    (Some(letter), None) if config.alphabet.contains(&letter) => {
                        if session.already_guessed(letter) {
                            println!("Você já tentou '{letter}'.\n");
                        } else {
                            session.guess(letter);
                        }
                    }
                    _ => {
                        println!("❌ Digite uma única letra de a a z.\n");
                    }
                }
            }
        }
    }
}

fn print_board(session: &GameSession) {
    println!("{}", "─".repeat(60));
    for row in reveal_grid_rows(session) {
        println!("  {row}");
    }
    println!();
    println!("  {}", masked_word(session).bold());
    println!(
        "\n  Erros: {} / {}",
        session.wrong_guesses().to_string().red(),
        session.config().max_errors
    );

    let used: String = session
        .guessed_letters()
        .iter()
        .map(|&c| {
            let s = c.to_string();
            match session.letter_state(c) {
                LetterState::Correct => s.green().to_string(),
                LetterState::Wrong => s.red().to_string(),
                LetterState::Unused => s,
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    if !used.is_empty() {
        println!("  Tentadas: {used}");
    }
    println!();
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
