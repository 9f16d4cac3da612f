//! Ordering of scored guesses and extraction of the top suggestions

use crate::core::Line;
use std::cmp::Ordering;

/// A guess with its expected-elimination statistics
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Suggestion {
    pub line: Line,
    /// Mean elimination, the primary sort key
    pub score: f64,
    /// Spread of the elimination outcome, lower is preferred on ties
    pub variance: f64,
}

/// All scored guesses, best first, plus the length of the top prefix
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ranking {
    suggestions: Vec<Suggestion>,
    top_len: usize,
}

impl Ranking {
    /// Rank scored guesses
    ///
    /// Sorts by score descending, then variance ascending. The sort is stable,
    /// so exact ties keep their input order. The top prefix is every leading
    /// suggestion whose score and variance both equal the best one's.
    #[must_use]
    pub fn from_suggestions(mut suggestions: Vec<Suggestion>) -> Self {
        suggestions.sort_by(compare);

        #[allow(clippy::float_cmp)] // Exact ties are what defines the top set
        let top_len = suggestions.first().map_or(0, |best| {
            suggestions
                .iter()
                .take_while(|s| s.score == best.score && s.variance == best.variance)
                .count()
        });

        Self {
            suggestions,
            top_len,
        }
    }

    /// Suggestions tied for best score and variance
    #[must_use]
    pub fn top(&self) -> &[Suggestion] {
        &self.suggestions[..self.top_len]
    }

    /// Every suggestion in ranking order
    #[must_use]
    pub fn all(&self) -> &[Suggestion] {
        &self.suggestions
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.suggestions.is_empty()
    }

    /// Whether the suggestion at `index` belongs to the top prefix
    #[must_use]
    pub const fn is_top(&self, index: usize) -> bool {
        index < self.top_len
    }

    /// Ranking position (0-based) of a guess
    #[must_use]
    pub fn position(&self, line: &Line) -> Option<usize> {
        self.suggestions.iter().position(|s| s.line == *line)
    }
}

fn compare(a: &Suggestion, b: &Suggestion) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.variance.total_cmp(&b.variance))
}
