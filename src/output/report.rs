//! Suggestion report
//!
//! One row per ranked guess, in ranking order:
//!
//! ```text
//! [LINE]\t<score, 3 decimals>\t<variance, 2 decimals>\t<"(top)" or empty>
//! ```

use crate::solver::Ranking;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Render the ranking as report text
#[must_use]
pub fn format_report(ranking: &Ranking) -> String {
    ranking
        .all()
        .iter()
        .enumerate()
        .map(|(i, suggestion)| {
            let marker = if ranking.is_top(i) { "(top)" } else { "" };
            format!(
                "[{}]\t{:.3}\t{:.2}\t{}\n",
                suggestion.line, suggestion.score, suggestion.variance, marker
            )
        })
        .collect()
}

/// Write the report to `path`, replacing any previous file
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_report(path: &Path, ranking: &Ranking) -> Result<()> {
    fs::write(path, format_report(ranking))
        .with_context(|| format!("Failed to write suggestion report to {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::Suggestion;

    fn suggestion(line: &str, score: f64, variance: f64) -> Suggestion {
        Suggestion {
            line: line.parse().unwrap(),
            score,
            variance,
        }
    }

    #[test]
    fn report_rows_follow_ranking() {
        let ranking = Ranking::from_suggestions(vec![
            suggestion("BBBB", 0.25, 0.126),
            suggestion("BRGY", 0.8126, 0.0149),
            suggestion("RGYP", 0.8126, 0.0149),
        ]);

        assert_eq!(
            format_report(&ranking),
            "[BRGY]\t0.813\t0.01\t(top)\n\
             [RGYP]\t0.813\t0.01\t(top)\n\
             [BBBB]\t0.250\t0.13\t\n"
        );
    }

    #[test]
    fn empty_ranking_empty_report() {
        assert_eq!(format_report(&Ranking::default()), "");
    }

    #[test]
    fn write_report_overwrites() {
        let path = std::env::temp_dir().join(format!("hitblow_report_{}.txt", std::process::id()));
        fs::write(&path, "stale contents\n").unwrap();

        let ranking = Ranking::from_suggestions(vec![suggestion("WWWW", 0.5, 0.0)]);
        write_report(&path, &ranking).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "[WWWW]\t0.500\t0.00\t(top)\n");
        fs::remove_file(&path).unwrap();
    }
}
