//! TUI rendering with ratatui
//!
//! Visualizations for the Hit & Blow solver interface.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Color as PegColor, NUM_LINES};
use crate::output::formatters::{
    create_progress_bar, feedback_pegs, remaining_bits, solved_fraction,
};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Candidates listed individually below this count
const CANDIDATE_SAMPLE: usize = 12;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(5), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

/// Terminal color for a peg color
const fn peg_color(color: PegColor) -> Color {
    match color {
        PegColor::Blue => Color::Blue,
        PegColor::Red => Color::Red,
        PegColor::Green => Color::Green,
        PegColor::Yellow => Color::Yellow,
        PegColor::Pink => Color::Magenta,
        PegColor::White => Color::White,
    }
}

/// A line drawn as colored code letters
fn line_spans(line: &crate::core::Line) -> Vec<Span<'static>> {
    line.colors()
        .iter()
        .map(|&c| {
            Span::styled(
                c.code().to_string(),
                Style::default()
                    .fg(peg_color(c))
                    .add_modifier(Modifier::BOLD),
            )
        })
        .collect()
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 HIT & BLOW SOLVER - Interactive Mode")
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

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(35), // Current guess
            Constraint::Percentage(35), // Candidates
            Constraint::Percentage(30), // History
        ])
        .split(area);

    render_current_guess(f, app, chunks[0]);
    render_candidates(f, app, chunks[1]);
    render_history(f, app, chunks[2]);
}

fn render_current_guess(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Current Guess ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let Some(guess) = &app.current_guess else {
        f.render_widget(Paragraph::new("No suggestion available").block(block), area);
        return;
    };

    let s = guess.suggestion;
    let mut headline = vec![Span::raw(if guess.manual {
        "Your guess: "
    } else {
        "Suggested:  "
    })];
    headline.extend(line_spans(&s.line));

    let score_bar = create_progress_bar(s.score, 1.0, 18);
    let content = vec![
        Line::from(headline),
        Line::from(format!("Score:      [{score_bar}] {:.3}", s.score)),
        Line::from(format!("Variance:   {:.2}", s.variance)),
        Line::from(format!(
            "Expected:   {:.1} of {} lines eliminated",
            s.score * app.candidates_count() as f64,
            app.candidates_count()
        )),
        Line::from(format!("Tied best:  {} guesses", guess.top_count)),
    ];

    let paragraph = Paragraph::new(content)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let candidates = app.game.candidates();

    let content = if candidates.is_empty() {
        vec![Line::from("No line fits every restriction")]
    } else if candidates.len() <= CANDIDATE_SAMPLE {
        candidates
            .iter()
            .map(|id| {
                let mut spans = vec![Span::raw("  ")];
                spans.extend(line_spans(id.line()));
                Line::from(spans)
            })
            .collect()
    } else {
        vec![
            Line::from(format!("{} candidates remaining", candidates.len())),
            Line::from(format!(
                "Information needed: {:.2} bits",
                remaining_bits(candidates.len())
            )),
        ]
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Candidates ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(paragraph, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let history_items: Vec<ListItem> = app
        .history
        .iter()
        .rev()
        .take(5)
        .enumerate()
        .map(|(i, entry)| {
            let content = format!(
                "{}: [{}] {} {} [{:.3}] {} → {}",
                app.history.len() - i,
                entry.guess,
                feedback_pegs(entry.feedback),
                entry.feedback,
                entry.score,
                entry.candidates_before,
                entry.candidates_after
            );
            ListItem::new(content)
        })
        .collect();

    let history =
        List::new(history_items).block(Block::default().title(" History ").borders(Borders::ALL));

    f.render_widget(history, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_search_progress(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_search_progress(f: &mut Frame, app: &App, area: Rect) {
    let total_bits = remaining_bits(NUM_LINES);
    let current_candidates = app.candidates_count();
    let bits_gained = total_bits - remaining_bits(current_candidates);
    // Cast is safe: the fraction is clamped to [0, 1]
    let progress_pct = (solved_fraction(current_candidates) * 100.0).round() as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Information Gained ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(progress_pct)
        .label(format!(
            "{bits_gained:.1}/{total_bits:.1} bits | {current_candidates} candidates remain"
        ));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::WinCelebration => (
            " 🎉 CONGRATULATIONS! 🎉 | Press 'n' for new game or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::Feedback => (
            " Enter Feedback (hits,blows) | TAB for manual guess ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
        InputMode::ManualGuess => (
            " Enter Guess (4 of B R G Y P W) | ESC to cancel ",
            app.manual_line.as_str(),
            Color::Cyan,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let restrictions_text = format!("Restrictions: {}", app.game.restrictions().len());
    let restrictions = Paragraph::new(restrictions_text).alignment(Alignment::Center);
    f.render_widget(restrictions, chunks[0]);

    let stats_text = format!(
        "Games: {} | Avg: {:.2}",
        app.stats.total_games,
        if app.stats.games_won > 0 {
            app.stats.total_attempts as f64 / app.stats.games_won as f64
        } else {
            0.0
        }
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let candidates_text = format!("Candidates: {}", app.candidates_count());
    let candidates = Paragraph::new(candidates_text).alignment(Alignment::Center);
    f.render_widget(candidates, chunks[2]);

    let help_text = if app.candidates_count() == 0 {
        "q: Quit | n: New Game | u: Undo"
    } else {
        "q: Quit | u: Undo | Enter: Submit | TAB: Manual Guess"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
