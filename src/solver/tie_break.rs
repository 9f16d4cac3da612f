//! Choosing one guess among equally ranked top suggestions

use super::Suggestion;
use rand::prelude::IndexedRandom;

/// Policy for picking a guess from the top suggestions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreak {
    /// Always the first top suggestion (lowest line id)
    First,
    /// Uniformly random among the top suggestions
    #[default]
    Random,
}

impl TieBreak {
    /// Create a policy from its name
    ///
    /// Supported names: "first", "deterministic", "random".
    /// Defaults to random if the name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "first" | "deterministic" => Self::First,
            _ => Self::Random,
        }
    }

    /// Pick a suggestion, or `None` if there are none
    #[must_use]
    pub fn choose<'a>(&self, top: &'a [Suggestion]) -> Option<&'a Suggestion> {
        match self {
            Self::First => top.first(),
            Self::Random => top.choose(&mut rand::rng()),
        }
    }
}
