//! TUI application state and logic

use crate::core::{Feedback, LINE_LENGTH, Line, Restriction};
use crate::game::Game;
use crate::solver::{Suggestion, SuggestionEngine, TieBreak};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Messages kept on screen
const MAX_MESSAGES: usize = 5;

/// State saved before each restriction, restored by undo
#[derive(Clone)]
pub struct StateSnapshot {
    pub game: Game,
    pub history_len: usize,
}

/// Application state
pub struct App<'a> {
    pub engine: &'a SuggestionEngine,
    pub tie_break: TieBreak,
    pub game: Game,
    pub history: Vec<HistoryEntry>,
    pub current_guess: Option<GuessInfo>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    pub manual_line: String,
    pub undo_stack: Vec<StateSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Feedback,
    ManualGuess,
    WinCelebration,
}

#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub guess: Line,
    pub feedback: Feedback,
    pub score: f64,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

#[derive(Debug, Clone)]
pub struct GuessInfo {
    pub suggestion: Suggestion,
    /// Number of guesses tied for best
    pub top_count: usize,
    /// Whether the guess was typed in rather than suggested
    pub manual: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub total_attempts: usize,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(engine: &'a SuggestionEngine, tie_break: TieBreak) -> Self {
        Self {
            engine,
            tie_break,
            game: Game::default(),
            history: Vec::new(),
            current_guess: None,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: "Welcome! I'll suggest guesses that eliminate the most lines."
                        .to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Enter feedback as hits,blows (e.g., '1,2')".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Feedback,
            manual_line: String::new(),
            undo_stack: Vec::new(),
        }
    }

    pub fn compute_suggestion(&mut self) {
        // Every guess ties at zero once the secret is known
        if let Some(solution) = self.game.solution() {
            self.current_guess = Some(GuessInfo {
                suggestion: self.engine.evaluate(solution, self.game.candidates()),
                top_count: 1,
                manual: false,
            });
            return;
        }

        let ranking = self.game.suggest(self.engine);

        if let Some(chosen) = self.tie_break.choose(ranking.top()) {
            self.current_guess = Some(GuessInfo {
                suggestion: *chosen,
                top_count: ranking.top().len(),
                manual: false,
            });
        } else {
            self.current_guess = None;
            self.add_message("No valid guesses remaining!", MessageStyle::Error);
        }
    }

    pub fn handle_feedback(&mut self, input: &str) {
        let feedback = match input.parse::<Feedback>() {
            Ok(f) if usize::from(f.hits()) + usize::from(f.blows()) <= LINE_LENGTH => f,
            _ => {
                self.add_message(
                    "Invalid feedback! Use hits,blows with at most 4 pegs",
                    MessageStyle::Error,
                );
                return;
            }
        };

        let Some(guess_info) = &self.current_guess else {
            return;
        };
        let guess = guess_info.suggestion.line;
        let score = guess_info.suggestion.score;

        self.undo_stack.push(StateSnapshot {
            game: self.game.clone(),
            history_len: self.history.len(),
        });

        let candidates_before = self.game.candidate_count();
        self.game.add_restriction(Restriction::new(guess, feedback));
        let candidates_after = self.game.candidate_count();

        self.history.push(HistoryEntry {
            guess,
            feedback,
            score,
            candidates_before,
            candidates_after,
        });
        self.input_buffer.clear();

        if candidates_after == 0 {
            self.current_guess = None;
            self.add_message(
                "No candidates remain - feedback may be incorrect. Press 'u' to undo.",
                MessageStyle::Error,
            );
        } else if feedback.is_solved() {
            let attempts = self.history.len();
            self.stats.total_games += 1;
            self.stats.games_won += 1;
            self.stats.total_attempts += attempts;
            self.input_mode = InputMode::WinCelebration;

            let celebration = match attempts {
                1 => "🎯 FIRST TRY! Extraordinary! 🌟",
                2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                3 => "✨ SPLENDID! Three guesses! ✨",
                4 => "👏 GREAT JOB! Four guesses! 👏",
                5 => "🎉 NICE WORK! Five guesses! 🎉",
                _ => "🎊 SOLVED! 🎊",
            };

            self.add_message(celebration, MessageStyle::Success);
            self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
        } else {
            self.compute_suggestion();
            match self.game.solution() {
                Some(line) => self.add_message(
                    &format!("Only [{line}] remains - play it!"),
                    MessageStyle::Success,
                ),
                None => self.add_message(
                    &format!("{candidates_after} candidates remaining"),
                    MessageStyle::Info,
                ),
            }
        }
    }

    pub fn new_game(&mut self) {
        self.game = Game::default();
        self.history.clear();
        self.undo_stack.clear();
        self.current_guess = None;
        self.input_buffer.clear();
        self.manual_line.clear();
        self.messages.clear();
        self.input_mode = InputMode::Feedback;
        self.add_message(
            "New game started! I'll suggest the best opening guess.",
            MessageStyle::Info,
        );
        self.compute_suggestion();
    }

    pub fn undo_last(&mut self) {
        if let Some(snapshot) = self.undo_stack.pop() {
            self.game = snapshot.game;
            self.history.truncate(snapshot.history_len);
            self.input_mode = InputMode::Feedback;
            self.compute_suggestion();
            self.add_message("Undone!", MessageStyle::Info);
        } else {
            self.add_message("Nothing to undo!", MessageStyle::Error);
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    #[must_use]
    pub fn candidates_count(&self) -> usize {
        self.game.candidate_count()
    }

    pub fn use_manual_guess(&mut self) {
        let line = match self.manual_line.parse::<Line>() {
            Ok(line) => line,
            Err(e) => {
                self.add_message(&format!("Invalid guess: {e}"), MessageStyle::Error);
                return;
            }
        };

        let evaluated = self.engine.evaluate(&line, self.game.candidates());

        if let Some(suggested) = &self.current_guess
            && evaluated.score < suggested.suggestion.score
        {
            self.add_message(
                &format!(
                    "Note: suggested guess scored {:.3} ({:.3} more)",
                    suggested.suggestion.score,
                    suggested.suggestion.score - evaluated.score
                ),
                MessageStyle::Info,
            );
        }

        let top_count = self.current_guess.as_ref().map_or(0, |g| g.top_count);
        self.current_guess = Some(GuessInfo {
            suggestion: evaluated,
            top_count,
            manual: true,
        });

        self.add_message(
            &format!(
                "Using: [{line}] (score: {:.3}, variance: {:.2})",
                evaluated.score, evaluated.variance
            ),
            MessageStyle::Success,
        );

        self.input_mode = InputMode::Feedback;
        self.manual_line.clear();
    }

    /// Apply one key press to the state
    pub fn handle_key(&mut self, key: KeyEvent) {
        if let KeyCode::Char('c') = key.code
            && key.modifiers.contains(KeyModifiers::CONTROL)
        {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::WinCelebration => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                KeyCode::Char('u') => self.undo_last(),
                _ => {}
            },
            InputMode::Feedback => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                KeyCode::Char('u') => self.undo_last(),
                KeyCode::Tab => {
                    if self.candidates_count() > 0 {
                        self.input_mode = InputMode::ManualGuess;
                        self.add_message(
                            "Enter your own guess (4 color codes: B R G Y P W)",
                            MessageStyle::Info,
                        );
                    }
                }
                KeyCode::Char(c) if c.is_ascii_digit() || matches!(c, ',' | ' ' | '/') => {
                    self.input_buffer.push(c);
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => {
                    let input = self.input_buffer.clone();
                    self.handle_feedback(&input);
                }
                _ => {}
            },
            InputMode::ManualGuess => match key.code {
                KeyCode::Esc => {
                    self.input_mode = InputMode::Feedback;
                    self.manual_line.clear();
                    self.add_message("Cancelled manual guess entry", MessageStyle::Info);
                }
                KeyCode::Tab => {
                    self.input_mode = InputMode::Feedback;
                    self.manual_line.clear();
                }
                KeyCode::Char(c) => {
                    if self.manual_line.len() < LINE_LENGTH && c.is_ascii_alphabetic() {
                        self.manual_line.push(c.to_ascii_uppercase());
                    }
                }
                KeyCode::Backspace => {
                    self.manual_line.pop();
                }
                KeyCode::Enter => {
                    if self.manual_line.len() == LINE_LENGTH {
                        self.use_manual_guess();
                    } else {
                        self.add_message("Guess must be exactly 4 colors!", MessageStyle::Error);
                    }
                }
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

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
    app.compute_suggestion();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only key presses; Windows also reports releases
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
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

    static ENGINE: SuggestionEngine = SuggestionEngine::new();

    fn new_app() -> App<'static> {
        let mut app = App::new(&ENGINE, TieBreak::First);
        app.compute_suggestion();
        app
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn starts_with_opening_suggestion() {
        let app = new_app();
        let guess = app.current_guess.as_ref().unwrap();
        assert!(!guess.manual);
        assert!(guess.top_count >= 1);
        assert_eq!(app.candidates_count(), 1296);
    }

    #[test]
    fn feedback_narrows_candidates() {
        let mut app = new_app();
        type_text(&mut app, "0,1");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.history.len(), 1);
        assert!(app.candidates_count() < 1296);
        assert_eq!(app.history[0].candidates_after, app.candidates_count());
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn invalid_feedback_is_rejected() {
        let mut app = new_app();
        app.handle_feedback("3,2");
        app.handle_feedback("hello");

        assert!(app.history.is_empty());
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn solved_feedback_celebrates() {
        let mut app = new_app();
        app.handle_feedback("4,0");

        assert_eq!(app.input_mode, InputMode::WinCelebration);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.candidates_count(), 1);
    }

    #[test]
    fn undo_restores_previous_game() {
        let mut app = new_app();
        app.handle_feedback("1,1");
        app.handle_feedback("0,2");
        assert_eq!(app.history.len(), 2);

        press(&mut app, KeyCode::Char('u'));
        assert_eq!(app.history.len(), 1);
        assert_eq!(app.game.restrictions().len(), 1);
        assert_eq!(app.candidates_count(), app.history[0].candidates_after);

        press(&mut app, KeyCode::Char('u'));
        assert_eq!(app.candidates_count(), 1296);

        press(&mut app, KeyCode::Char('u'));
        assert_eq!(app.messages.last().unwrap().text, "Nothing to undo!");
    }

    #[test]
    fn manual_guess_replaces_suggestion() {
        let mut app = new_app();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.input_mode, InputMode::ManualGuess);

        type_text(&mut app, "wwww");
        press(&mut app, KeyCode::Enter);

        let guess = app.current_guess.as_ref().unwrap();
        assert!(guess.manual);
        assert_eq!(guess.suggestion.line, "WWWW".parse().unwrap());
        assert_eq!(app.input_mode, InputMode::Feedback);
    }

    #[test]
    fn short_manual_guess_is_rejected() {
        let mut app = new_app();
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "RG");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.input_mode, InputMode::ManualGuess);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn contradictory_feedback_empties_game() {
        let mut app = new_app();
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "BBBB");
        press(&mut app, KeyCode::Enter);
        app.handle_feedback("0,0");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "BBBB");
        press(&mut app, KeyCode::Enter);
        app.handle_feedback("1,0");

        assert_eq!(app.candidates_count(), 0);
        assert!(app.current_guess.is_none());
    }

    fn narrow_to(app: &mut App, secret: &Line, guesses: &[&str]) {
        for guess in guesses {
            let guess: Line = guess.parse().unwrap();
            app.game.add_restriction(Restriction::observe(guess, secret));
        }
    }

    #[test]
    fn single_candidate_is_suggested() {
        let secret: Line = "GYPW".parse().unwrap();
        let mut app = new_app();
        narrow_to(&mut app, &secret, &["BBRR", "RGYP", "GYPB", "WYPW"]);
        assert_eq!(app.game.solution(), Some(&secret));

        app.compute_suggestion();
        let guess = app.current_guess.as_ref().unwrap();
        assert_eq!(guess.suggestion.line, secret);
        assert_eq!(guess.top_count, 1);
        assert!(!guess.manual);
    }

    #[test]
    fn solved_feedback_for_impossible_guess_is_not_a_win() {
        let secret: Line = "GYPW".parse().unwrap();
        let mut app = new_app();
        narrow_to(&mut app, &secret, &["BBRR", "RGYP", "GYPB", "WYPW"]);

        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "BBBB");
        press(&mut app, KeyCode::Enter);
        app.handle_feedback("4,0");

        assert_eq!(app.candidates_count(), 0);
        assert_eq!(app.input_mode, InputMode::Feedback);
        assert_eq!(app.stats.games_won, 0);
        assert!(app.current_guess.is_none());
    }

    #[test]
    fn new_game_resets_state() {
        let mut app = new_app();
        app.handle_feedback("1,0");
        press(&mut app, KeyCode::Char('n'));

        assert!(app.history.is_empty());
        assert!(app.undo_stack.is_empty());
        assert_eq!(app.candidates_count(), 1296);
        assert!(app.current_guess.is_some());
    }

    #[test]
    fn quit_keys() {
        let mut app = new_app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);

        let mut app = new_app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }
}
