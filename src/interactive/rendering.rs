//! TUI rendering with ratatui

use super::app::App;
use crate::core::{LetterState, Outcome};
use crate::output::art;
use crate::output::formatters::{keyboard_rows, masked_word};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let grid_size = app.session.config().grid_size;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                 // Header
            Constraint::Min(grid_size as u16 + 2), // Picture
            Constraint::Length(3),                 // Word blanks
            Constraint::Length(3),                 // Error gauge
            Constraint::Length(4),                 // Keyboard
            Constraint::Length(3),                 // Status
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_picture(f, app, chunks[1]);
    render_word(f, app, chunks[2]);
    render_errors(f, app, chunks[3]);
    render_keyboard(f, app, chunks[4]);
    render_status(f, app, chunks[5]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🥚 FORCA — revele a imagem")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_picture(f: &mut Frame, app: &App, area: Rect) {
    let grid_size = app.session.config().grid_size;
    let mask = app.session.reveal_mask();

    let lines: Vec<Line> = (0..grid_size)
        .map(|row| {
            let spans: Vec<Span> = (0..grid_size)
                .map(|col| {
                    let block = row * grid_size + col;
                    if mask[block] {
                        let c = art::sample(row, col, grid_size);
                        Span::styled(
                            format!("{c}{c}"),
                            Style::default().fg(Color::Yellow),
                        )
                    } else {
                        Span::styled("██", Style::default().fg(Color::DarkGray))
                    }
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let picture = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Imagem ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(picture, area);
}

fn render_word(f: &mut Frame, app: &App, area: Rect) {
    let word = Paragraph::new(masked_word(&app.session))
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Palavra "));
    f.render_widget(word, area);
}

fn render_errors(f: &mut Frame, app: &App, area: Rect) {
    let wrong = app.session.wrong_guesses();
    let max = app.session.config().max_errors;
    let ratio = if max > 0 {
        (f64::from(wrong) / f64::from(max)).min(1.0)
    } else {
        0.0
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Erros ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Red))
        .ratio(ratio)
        .label(format!("Erros: {wrong} / {max}"));

    f.render_widget(gauge, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let (first, second) = keyboard_rows(&app.session.config().alphabet);

    let row_line = |letters: &[char]| {
        let spans: Vec<Span> = letters
            .iter()
            .map(|&c| {
                let style = match app.session.letter_state(c) {
                    LetterState::Unused => Style::default().fg(Color::White),
                    LetterState::Correct => Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                    LetterState::Wrong => Style::default().fg(Color::DarkGray),
                };
                Span::styled(format!(" {c} "), style)
            })
            .collect();
        Line::from(spans)
    };

    let keyboard = Paragraph::new(vec![row_line(first), row_line(second)])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Teclado "));

    f.render_widget(keyboard, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let (text, color) = match app.session.outcome() {
        Outcome::Won => ("🎉 Você venceu! | Enter: jogar novamente".to_string(), Color::Green),
        Outcome::Lost => (
            format!(
                "💀 Você perdeu! A palavra era \"{}\" | Enter: jogar novamente",
                app.session.word()
            ),
            Color::Red,
        ),
        Outcome::Playing => (
            "letras: adivinhar | Enter: novo jogo | Esc: sair".to_string(),
            Color::DarkGray,
        ),
    };

    let status = Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(status, area);
}
