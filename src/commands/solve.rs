//! Playing out a game against a known secret
//!
//! Shared by the `solve`, `simulate` and `test-all` commands.

use crate::core::{Feedback, Line, Restriction};
use crate::game::Game;
use crate::solver::{SuggestionEngine, TieBreak};

/// Configuration for playing out a game
#[derive(Debug, Clone, Copy)]
pub struct PlayConfig {
    pub max_attempts: usize,
    pub tie_break: TieBreak,
}

impl PlayConfig {
    #[must_use]
    pub const fn new(tie_break: TieBreak) -> Self {
        Self {
            max_attempts: 10,
            tie_break,
        }
    }
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self::new(TieBreak::default())
    }
}

/// A single guess in a played-out game
#[derive(Debug, Clone, PartialEq)]
pub struct Attempt {
    pub guess: Line,
    pub feedback: Feedback,
    pub score: f64,
    pub variance: f64,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Full record of a played-out game
#[derive(Debug, Clone, PartialEq)]
pub struct GameRecord {
    pub secret: Line,
    pub attempts: Vec<Attempt>,
    /// The single remaining candidate, if the game narrowed down to one
    pub solution: Option<Line>,
}

impl GameRecord {
    /// True when the game isolated the secret
    #[must_use]
    pub fn solved(&self) -> bool {
        self.solution == Some(self.secret)
    }
}

/// Play `secret` until one candidate remains or attempts run out
///
/// Each turn ranks the current candidates, picks a top suggestion with the
/// configured tie-break, scores it against the secret and records the result.
pub fn play_game(engine: &SuggestionEngine, secret: &Line, config: &PlayConfig) -> GameRecord {
    let mut game = Game::default();
    let mut attempts = Vec::new();

    for _ in 0..config.max_attempts {
        let candidates_before = game.candidate_count();
        let ranking = game.suggest(engine);
        let Some(chosen) = config.tie_break.choose(ranking.top()) else {
            break;
        };

        let restriction = Restriction::observe(chosen.line, secret);
        game.add_restriction(restriction);

        attempts.push(Attempt {
            guess: chosen.line,
            feedback: restriction.feedback,
            score: chosen.score,
            variance: chosen.variance,
            candidates_before,
            candidates_after: game.candidate_count(),
        });

        if game.candidate_count() == 1 {
            break;
        }
    }

    GameRecord {
        secret: *secret,
        attempts,
        solution: game.solution().copied(),
    }
}

/// Solve a secret given as text, e.g. `RGYP`
///
/// # Errors
///
/// Returns an error if the secret is not four valid color codes.
pub fn solve_secret(
    secret: &str,
    config: &PlayConfig,
    engine: &SuggestionEngine,
) -> Result<GameRecord, String> {
    let secret: Line = secret
        .parse()
        .map_err(|e| format!("Invalid secret: {e}"))?;
    Ok(play_game(engine, &secret, config))
}

#[cfg(test)]
mod tests {
    use super::*;

    static ENGINE: SuggestionEngine = SuggestionEngine::new();

    fn line(s: &str) -> Line {
        s.parse().unwrap()
    }

    #[test]
    fn play_game_isolates_secret() {
        let config = PlayConfig::new(TieBreak::First);
        let record = play_game(&ENGINE, &line("GYPW"), &config);

        assert!(record.solved());
        assert!(!record.attempts.is_empty());
        assert!(record.attempts.len() <= 5);
        assert_eq!(record.attempts[0].candidates_before, 1296);
    }

    #[test]
    fn attempts_shrink_candidates() {
        let config = PlayConfig::new(TieBreak::Random);
        let record = play_game(&ENGINE, &line("RRBB"), &config);

        for attempt in &record.attempts {
            assert!(attempt.candidates_after <= attempt.candidates_before);
            assert_eq!(
                attempt.feedback,
                Feedback::calculate(&record.secret, &attempt.guess)
            );
        }
        let last = record.attempts.last().unwrap();
        assert_eq!(last.candidates_after, 1);
    }

    #[test]
    fn deterministic_tie_break_replays_identically() {
        let config = PlayConfig::new(TieBreak::First);
        let first = play_game(&ENGINE, &line("WBYG"), &config);
        let second = play_game(&ENGINE, &line("WBYG"), &config);
        assert_eq!(first, second);
    }

    #[test]
    fn attempt_limit_is_respected() {
        let mut config = PlayConfig::new(TieBreak::First);
        config.max_attempts = 1;
        let record = play_game(&ENGINE, &line("PWGY"), &config);
        assert_eq!(record.attempts.len(), 1);
    }

    #[test]
    fn zero_attempts_leaves_game_unsolved() {
        let mut config = PlayConfig::new(TieBreak::First);
        config.max_attempts = 0;
        let record = play_game(&ENGINE, &line("PWGY"), &config);
        assert!(record.attempts.is_empty());
        assert!(!record.solved());
        assert!(record.solution.is_none());
    }

    #[test]
    fn solve_secret_parses_input() {
        let config = PlayConfig::new(TieBreak::First);
        let record = solve_secret("bbrr", &config, &ENGINE).unwrap();
        assert_eq!(record.secret, line("BBRR"));
        assert!(record.solved());

        assert!(solve_secret("BBR", &config, &ENGINE).is_err());
        assert!(solve_secret("BBRX", &config, &ENGINE).is_err());
    }
}
