//! Command implementations

pub mod analyze;
pub mod simulate;
pub mod solve;
pub mod suggest;
pub mod test_all;

pub use analyze::{AnalysisResult, analyze_guess};
pub use simulate::{SimulationConfig, SimulationStats, run_simulation};
pub use solve::{Attempt, GameRecord, PlayConfig, play_game, solve_secret};
pub use suggest::{SuggestConfig, SuggestResult, run_suggest};
pub use test_all::run_test_all;

use crate::core::{ParseError, Restriction};

/// Parse restriction arguments such as `BBRR:0,1`
///
/// # Errors
/// Returns the first `ParseError` encountered.
pub fn parse_restrictions<S: AsRef<str>>(args: &[S]) -> Result<Vec<Restriction>, ParseError> {
    args.iter().map(|arg| arg.as_ref().parse()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Feedback;

    #[test]
    fn parses_all_restrictions() {
        let parsed = parse_restrictions(&["BBRR:0,1", "rgyp:1,2"]).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].feedback, Feedback::new(0, 1));
        assert_eq!(parsed[1].guess.to_string(), "RGYP");
    }

    #[test]
    fn reports_first_error() {
        let err = parse_restrictions(&["BBRR:0,1", "BBXR:0,1"]).unwrap_err();
        assert_eq!(err, ParseError::UnknownColor('X'));
    }

    #[test]
    fn no_arguments_no_restrictions() {
        let none: [&str; 0] = [];
        assert!(parse_restrictions(&none).unwrap().is_empty());
    }
}
