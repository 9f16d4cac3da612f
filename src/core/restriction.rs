//! Restrictions: an issued guess paired with the feedback it received

use super::{Feedback, Line, ParseError};
use std::fmt;
use std::str::FromStr;

/// A guess and its observed feedback
///
/// A line is consistent with the restriction when scoring the guess against it
/// reproduces the observed feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Restriction {
    pub guess: Line,
    pub feedback: Feedback,
}

impl Restriction {
    #[must_use]
    pub const fn new(guess: Line, feedback: Feedback) -> Self {
        Self { guess, feedback }
    }

    /// Restriction obtained by playing `guess` against a known `secret`
    #[must_use]
    pub fn observe(guess: Line, secret: &Line) -> Self {
        Self::new(guess, Feedback::calculate(secret, &guess))
    }

    /// Check whether `line` could be the secret given this restriction
    #[inline]
    #[must_use]
    pub fn accepts(&self, line: &Line) -> bool {
        Feedback::calculate(&self.guess, line) == self.feedback
    }
}

/// Check `line` against every restriction, stopping at the first rejection
#[must_use]
pub fn accepts_all(line: &Line, restrictions: &[Restriction]) -> bool {
    restrictions.iter().all(|restriction| restriction.accepts(line))
}

impl fmt::Display for Restriction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] -> {}", self.guess, self.feedback)
    }
}

impl FromStr for Restriction {
    type Err = ParseError;

    /// Parse `LINE:HITS,BLOWS`, e.g. `BBRR:0,1`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (guess, feedback) = s
            .split_once([':', '='])
            .ok_or_else(|| ParseError::InvalidRestriction(s.to_string()))?;

        Ok(Self::new(guess.parse()?, feedback.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::line::table;

    fn line(s: &str) -> Line {
        s.parse().unwrap()
    }

    #[test]
    fn accepts_matching_line() {
        let restriction = Restriction::new(line("BBRR"), Feedback::new(0, 1));
        assert!(restriction.accepts(&line("RGYP")));
        assert!(!restriction.accepts(&line("BGYP")));
        assert!(!restriction.accepts(&line("GGYP")));
    }

    #[test]
    fn observed_restriction_accepts_secret() {
        let secret = line("GYPW");
        for guess in table().iter().step_by(11) {
            let restriction = Restriction::observe(*guess, &secret);
            assert!(restriction.accepts(&secret));
        }
    }

    #[test]
    fn impossible_feedback_accepts_nothing() {
        let restriction = Restriction::new(line("BRGY"), Feedback::new(3, 1));
        assert!(table().iter().all(|l| !restriction.accepts(l)));

        let out_of_range = Restriction::new(line("BRGY"), Feedback::new(4, 4));
        assert!(table().iter().all(|l| !out_of_range.accepts(l)));
    }

    #[test]
    fn accepts_all_is_a_conjunction() {
        let secret = line("RPGG");
        let restrictions = [
            Restriction::observe(line("BBRR"), &secret),
            Restriction::observe(line("RPGG"), &secret),
        ];
        assert!(accepts_all(&secret, &restrictions));
        assert!(accepts_all(&secret, &[]));

        let contradictory = [
            Restriction::new(line("BBRR"), Feedback::new(0, 0)),
            Restriction::new(line("BBRR"), Feedback::new(1, 0)),
        ];
        assert!(table().iter().all(|l| !accepts_all(l, &contradictory)));
    }

    #[test]
    fn restriction_display() {
        let restriction = Restriction::new(line("BBRR"), Feedback::new(0, 1));
        assert_eq!(restriction.to_string(), "[BBRR] -> {0 hits, 1 blows}");
    }

    #[test]
    fn restriction_parsing() {
        let parsed: Restriction = "bbrr:0,1".parse().unwrap();
        assert_eq!(parsed, Restriction::new(line("BBRR"), Feedback::new(0, 1)));

        let parsed: Restriction = "GYPW=3,0".parse().unwrap();
        assert_eq!(parsed, Restriction::new(line("GYPW"), Feedback::new(3, 0)));
    }

    #[test]
    fn restriction_parsing_rejects_bad_input() {
        assert!(matches!(
            "BBRR".parse::<Restriction>(),
            Err(ParseError::InvalidRestriction(_))
        ));
        assert!(matches!(
            "BBR:0,1".parse::<Restriction>(),
            Err(ParseError::InvalidLength(3))
        ));
        assert!(matches!(
            "BBRR:x".parse::<Restriction>(),
            Err(ParseError::InvalidFeedback(_))
        ));
    }
}
