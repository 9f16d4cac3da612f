//! Suggestion engine: parallel ranking with a memoized opening

use super::information::estimate_information_value;
use super::ranking::{Ranking, Suggestion};
use crate::core::line::table;
use crate::core::{Line, LineId, NUM_LINES};
use rayon::prelude::*;
use std::sync::{Arc, OnceLock};

/// Ranks every possible guess against a candidate set
///
/// Guesses are drawn from the whole universe, not only from the candidates:
/// the best probe need not be a possible secret.
///
/// The ranking for the full universe depends on nothing but the universe, so
/// it is computed at most once per engine and shared afterwards.
#[derive(Debug, Default)]
pub struct SuggestionEngine {
    opening: OnceLock<Arc<Ranking>>,
}

impl SuggestionEngine {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            opening: OnceLock::new(),
        }
    }

    /// Rank all 1296 guesses against `candidates`
    ///
    /// An empty candidate set yields an empty ranking: the restrictions that
    /// produced it cannot all hold.
    ///
    /// # Examples
    /// ```
    /// use hitblow_solver::game::Game;
    /// use hitblow_solver::solver::SuggestionEngine;
    ///
    /// let engine = SuggestionEngine::new();
    /// let ranking = engine.rank(Game::default().candidates());
    ///
    /// assert_eq!(ranking.all().len(), 1296);
    /// assert!(!ranking.top().is_empty());
    /// ```
    #[must_use]
    pub fn rank(&self, candidates: &[LineId]) -> Arc<Ranking> {
        if candidates.is_empty() {
            return Arc::new(Ranking::default());
        }

        if is_universe(candidates) {
            let opening = self
                .opening
                .get_or_init(|| Arc::new(compute_ranking(candidates)));
            return Arc::clone(opening);
        }

        Arc::new(compute_ranking(candidates))
    }

    /// Score a single guess against `candidates`
    #[must_use]
    pub fn evaluate(&self, guess: &Line, candidates: &[LineId]) -> Suggestion {
        let (score, variance) = estimate_information_value(guess, candidates);
        Suggestion {
            line: *guess,
            score,
            variance,
        }
    }

    /// Whether the opening ranking has been computed yet
    #[must_use]
    pub fn has_opening(&self) -> bool {
        self.opening.get().is_some()
    }
}

/// True when `candidates` lists every id of the universe in order
fn is_universe(candidates: &[LineId]) -> bool {
    candidates.len() == NUM_LINES
        && candidates
            .iter()
            .enumerate()
            .all(|(i, id)| id.index() == i)
}

/// Score every guess in parallel and rank the results
///
/// Each guess writes its suggestion into the slot matching its id, so the
/// pre-sort order is the id order whatever order the tasks finish in.
fn compute_ranking(candidates: &[LineId]) -> Ranking {
    let mut suggestions = Vec::with_capacity(NUM_LINES);
    table()
        .par_iter()
        .map(|guess| {
            let (score, variance) = estimate_information_value(guess, candidates);
            Suggestion {
                line: *guess,
                score,
                variance,
            }
        })
        .collect_into_vec(&mut suggestions);

    Ranking::from_suggestions(suggestions)
}
