//! Candidate-set engine
//!
//! A `Game` holds the restrictions issued so far and the ids of every line
//! still consistent with all of them. The full universe is scanned once, on
//! creation; later restrictions only re-filter the surviving candidates.

use crate::core::restriction::accepts_all;
use crate::core::{Line, LineId, NUM_LINES, Restriction};
use crate::solver::{Ranking, SuggestionEngine};
use std::sync::Arc;

/// How many candidates `status` lists
const STATUS_SAMPLE: usize = 10;

/// One match in progress
#[derive(Debug, Clone)]
pub struct Game {
    restrictions: Vec<Restriction>,
    candidates: Vec<LineId>,
}

impl Game {
    /// Start a game from zero or more known restrictions
    #[must_use]
    pub fn new(restrictions: Vec<Restriction>) -> Self {
        let candidates = LineId::all()
            .filter(|id| accepts_all(id.line(), &restrictions))
            .collect();

        Self {
            restrictions,
            candidates,
        }
    }

    /// Record new restrictions and drop candidates they rule out
    ///
    /// Only the current candidates are checked, and only against the new
    /// restrictions. Contradictory input leaves the candidate set empty.
    pub fn add_restrictions<I>(&mut self, restrictions: I)
    where
        I: IntoIterator<Item = Restriction>,
    {
        let start = self.restrictions.len();
        self.restrictions.extend(restrictions);

        let added = &self.restrictions[start..];
        self.candidates
            .retain(|id| accepts_all(id.line(), added));
    }

    /// Record a single restriction
    pub fn add_restriction(&mut self, restriction: Restriction) {
        self.add_restrictions([restriction]);
    }

    #[must_use]
    pub fn restrictions(&self) -> &[Restriction] {
        &self.restrictions
    }

    /// Ids of lines still consistent with every restriction, ascending
    #[must_use]
    pub fn candidates(&self) -> &[LineId] {
        &self.candidates
    }

    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    /// True while no restriction has narrowed the universe
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.candidates.len() == NUM_LINES
    }

    /// The secret, once exactly one candidate remains
    #[must_use]
    pub fn solution(&self) -> Option<&'static Line> {
        match self.candidates.as_slice() {
            [only] => Some(only.line()),
            _ => None,
        }
    }

    /// Rank every possible guess against this game's candidates
    #[must_use]
    pub fn suggest(&self, engine: &SuggestionEngine) -> Arc<Ranking> {
        engine.rank(&self.candidates)
    }

    /// Human-readable summary of restrictions and remaining candidates
    ///
    /// ```text
    /// Restrictions: 1
    ///   [BBRR] -> {0 hits, 1 blows}
    ///
    /// Possible lines: 256
    ///   [RGGG]
    ///   ...
    /// ```
    #[must_use]
    pub fn status(&self) -> String {
        let restrictions: String = self
            .restrictions
            .iter()
            .map(|restriction| format!("  {restriction}\n"))
            .collect();
        let sample: String = self
            .candidates
            .iter()
            .take(STATUS_SAMPLE)
            .map(|id| format!("  [{id}]\n"))
            .collect();

        format!(
            "Restrictions: {}\n{restrictions}\nPossible lines: {}\n{sample}\n",
            self.restrictions.len(),
            self.candidates.len()
        )
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
