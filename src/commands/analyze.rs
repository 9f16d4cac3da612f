//! Guess analysis command
//!
//! Scores one guess against the candidates of a game and locates it in the
//! full ranking.

use crate::core::{Line, Restriction};
use crate::game::Game;
use crate::solver::{Suggestion, SuggestionEngine};

/// Result of analyzing a guess
pub struct AnalysisResult {
    pub suggestion: Suggestion,
    /// 1-based position in the ranking (0 when the ranking is empty)
    pub rank: usize,
    pub total_guesses: usize,
    pub is_top: bool,
    pub best: Option<Suggestion>,
    pub total_candidates: usize,
    /// Whether the guess itself could still be the secret
    pub is_candidate: bool,
}

/// Analyze a guess given as text against the game built from `restrictions`
///
/// # Errors
///
/// Returns an error if the guess is not four valid color codes.
pub fn analyze_guess(
    guess: &str,
    restrictions: Vec<Restriction>,
    engine: &SuggestionEngine,
) -> Result<AnalysisResult, String> {
    let guess: Line = guess.parse().map_err(|e| format!("Invalid guess: {e}"))?;

    let game = Game::new(restrictions);
    let ranking = game.suggest(engine);
    let suggestion = engine.evaluate(&guess, game.candidates());
    let position = ranking.position(&guess);

    Ok(AnalysisResult {
        suggestion,
        rank: position.map_or(0, |p| p + 1),
        total_guesses: ranking.all().len(),
        is_top: position.is_some_and(|p| ranking.is_top(p)),
        best: ranking.top().first().copied(),
        total_candidates: game.candidate_count(),
        is_candidate: game.candidates().contains(&guess.id()),
    })
}
