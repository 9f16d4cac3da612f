//! Hit & Blow feedback calculation
//!
//! A hit is a position where guess and secret agree. Blows are counted over the
//! remaining positions: for every color, the smaller of its occurrence counts in
//! the two non-hit residues.

use super::{LINE_LENGTH, Line, NUM_COLORS, ParseError};
use std::fmt;
use std::str::FromStr;

/// Number of distinct feedback slots addressed by [`Feedback::index`]
pub(crate) const FEEDBACK_SLOTS: usize = (LINE_LENGTH + 1) * (LINE_LENGTH + 1);

/// Feedback for a guess: number of hits and blows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback {
    hits: u8,
    blows: u8,
}

impl Feedback {
    /// Four hits: the guess is the secret
    pub const SOLVED: Self = Self::new(LINE_LENGTH as u8, 0);

    /// Create feedback from raw counts
    ///
    /// Values are not range-checked. A feedback no real line can produce simply
    /// matches nothing when used in a restriction.
    #[inline]
    #[must_use]
    pub const fn new(hits: u8, blows: u8) -> Self {
        Self { hits, blows }
    }

    #[inline]
    #[must_use]
    pub const fn hits(self) -> u8 {
        self.hits
    }

    #[inline]
    #[must_use]
    pub const fn blows(self) -> u8 {
        self.blows
    }

    #[inline]
    #[must_use]
    pub const fn is_solved(self) -> bool {
        self.hits as usize == LINE_LENGTH
    }

    /// Dense slot `hits × 5 + blows` for partition counting
    ///
    /// Only meaningful for feedback produced by [`Feedback::calculate`].
    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        self.hits as usize * (LINE_LENGTH + 1) + self.blows as usize
    }

    /// Score `guess` against `secret`
    ///
    /// Swapping the arguments yields the same feedback: hits compare positions
    /// and blows take per-color minimums, both symmetric.
    ///
    /// # Examples
    /// ```
    /// use hitblow_solver::core::{Feedback, Line};
    ///
    /// let secret: Line = "RRBG".parse().unwrap();
    /// let guess: Line = "BWBR".parse().unwrap();
    /// assert_eq!(Feedback::calculate(&secret, &guess), Feedback::new(1, 1));
    /// ```
    #[must_use]
    pub fn calculate(secret: &Line, guess: &Line) -> Self {
        let mut secret_residue = [0u8; NUM_COLORS];
        let mut guess_residue = [0u8; NUM_COLORS];
        let mut hits = 0;

        for (s, g) in secret.colors().iter().zip(guess.colors()) {
            if s == g {
                hits += 1;
            } else {
                secret_residue[s.digit()] += 1;
                guess_residue[g.digit()] += 1;
            }
        }

        let blows = secret_residue
            .iter()
            .zip(&guess_residue)
            .map(|(&s, &g)| s.min(g))
            .sum();

        Self { hits, blows }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{} hits, {} blows}}", self.hits, self.blows)
    }
}

impl FromStr for Feedback {
    type Err = ParseError;

    /// Parse `HITS,BLOWS`; a space or slash also works as the separator
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::InvalidFeedback(s.to_string());

        let mut parts = s.split([',', ' ', '/']).filter(|part| !part.is_empty());
        let (Some(hits), Some(blows), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(invalid());
        };
        let hits = hits.parse().map_err(|_| invalid())?;
        let blows = blows.parse().map_err(|_| invalid())?;

        Ok(Self::new(hits, blows))
    }
}
