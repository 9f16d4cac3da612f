//! Suggestion command
//!
//! Builds a game from known restrictions, ranks every guess, optionally
//! writes the full ranking to a report file and picks the next guess.

use crate::core::Restriction;
use crate::game::Game;
use crate::output::report::write_report;
use crate::solver::{Ranking, Suggestion, SuggestionEngine, TieBreak};
use anyhow::Result;
use std::path::PathBuf;
use std::sync::Arc;

/// Configuration for a suggestion run
pub struct SuggestConfig {
    pub restrictions: Vec<Restriction>,
    /// Where to write the ranking report, if anywhere
    pub report_path: Option<PathBuf>,
    pub tie_break: TieBreak,
}

impl SuggestConfig {
    #[must_use]
    pub fn new(restrictions: Vec<Restriction>) -> Self {
        Self {
            restrictions,
            report_path: Some(PathBuf::from("suggestions.txt")),
            tie_break: TieBreak::Random,
        }
    }
}

/// Result of a suggestion run
pub struct SuggestResult {
    pub status: String,
    pub candidate_count: usize,
    pub ranking: Arc<Ranking>,
    /// Guess picked from the top suggestions
    pub next: Option<Suggestion>,
    /// Report file that was written
    pub report: Option<PathBuf>,
}

/// Rank guesses for a game described by `config.restrictions`
///
/// The report is only written when there is at least one top suggestion.
///
/// # Errors
///
/// Returns an error if the report file cannot be written.
pub fn run_suggest(engine: &SuggestionEngine, config: SuggestConfig) -> Result<SuggestResult> {
    let game = Game::new(config.restrictions);
    let ranking = game.suggest(engine);

    let report = match config.report_path {
        Some(path) if !ranking.top().is_empty() => {
            write_report(&path, &ranking)?;
            Some(path)
        }
        _ => None,
    };

    let next = config.tie_break.choose(ranking.top()).copied();

    Ok(SuggestResult {
        status: game.status(),
        candidate_count: game.candidate_count(),
        ranking,
        next,
        report,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Feedback;
    use std::fs;

    static ENGINE: SuggestionEngine = SuggestionEngine::new();

    fn restriction(guess: &str, hits: u8, blows: u8) -> Restriction {
        Restriction::new(guess.parse().unwrap(), Feedback::new(hits, blows))
    }

    fn temp_report(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("hitblow_{}_{name}.txt", std::process::id()))
    }

    #[test]
    fn suggest_writes_report() {
        let path = temp_report("written");
        let mut config = SuggestConfig::new(vec![restriction("BBRR", 0, 1)]);
        config.report_path = Some(path.clone());
        config.tie_break = TieBreak::First;

        let result = run_suggest(&ENGINE, config).unwrap();
        assert_eq!(result.report.as_deref(), Some(path.as_path()));
        assert_eq!(result.next, result.ranking.top().first().copied());
        assert!(result.status.starts_with("Restrictions: 1\n"));

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 1296);
        assert!(content.lines().next().unwrap().ends_with("\t(top)"));
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn inconsistent_restrictions_skip_report() {
        let path = temp_report("skipped");
        let mut config = SuggestConfig::new(vec![
            restriction("BBRR", 0, 0),
            restriction("BBRR", 1, 0),
        ]);
        config.report_path = Some(path.clone());

        let result = run_suggest(&ENGINE, config).unwrap();
        assert_eq!(result.candidate_count, 0);
        assert!(result.ranking.is_empty());
        assert!(result.next.is_none());
        assert!(result.report.is_none());
        assert!(!path.exists());
    }

    #[test]
    fn report_can_be_disabled() {
        let mut config = SuggestConfig::new(vec![]);
        config.report_path = None;

        let result = run_suggest(&ENGINE, config).unwrap();
        assert_eq!(result.candidate_count, 1296);
        assert!(result.report.is_none());
        assert!(result.next.is_some());
    }

    #[test]
    fn unwritable_report_is_an_error() {
        let mut config = SuggestConfig::new(vec![]);
        config.report_path = Some(PathBuf::from("/nonexistent-dir/hitblow/suggestions.txt"));

        assert!(run_suggest(&ENGINE, config).is_err());
    }
}
