//! Expected elimination of a single guess
//!
//! For a guess `G` and candidates `C` (n = |C|), every candidate `A` is treated
//! as a hypothetical secret. Observing `hb = calculate(A, G)` would keep the
//! candidates that share that feedback, so `A` contributes
//! `eliminated(A) = n − |{c ∈ C : calculate(c, G) = hb}|`.
//!
//! # Formula
//! ```text
//! mean     = Σ eliminated(A)  / n / n
//! variance = Σ eliminated(A)² / n / n − mean²
//! ```
//!
//! Both sums are divided by n², not n.

use crate::core::{FEEDBACK_SLOTS, Feedback, Line, LineId};
use rayon::prelude::*;

/// Mean and variance of the number of candidates `guess` eliminates
///
/// Returns `(0.0, 0.0)` for an empty candidate set.
///
/// # Examples
/// ```
/// use hitblow_solver::core::Line;
/// use hitblow_solver::solver::estimate_information_value;
///
/// let candidates = ["BBBB".parse::<Line>().unwrap().id(), "RRRR".parse::<Line>().unwrap().id()];
///
/// // BBBB tells the two candidates apart: each observation eliminates one
/// let (mean, variance) = estimate_information_value(&"BBBB".parse().unwrap(), &candidates);
/// assert!((mean - 0.5).abs() < 1e-12);
/// assert!((variance - 0.25).abs() < 1e-12);
///
/// // GGGG gets the same feedback from both, eliminating nothing
/// let (mean, _) = estimate_information_value(&"GGGG".parse().unwrap(), &candidates);
/// assert!(mean.abs() < 1e-12);
/// ```
#[must_use]
pub fn estimate_information_value(guess: &Line, candidates: &[LineId]) -> (f64, f64) {
    if candidates.is_empty() {
        return (0.0, 0.0);
    }

    let eliminated = elimination_counts(guess, candidates);
    let (total, total_squared) = eliminated
        .iter()
        .fold((0u64, 0u64), |(sum, sum_sq), &count| {
            (sum + count, sum_sq + count * count)
        });

    let n = candidates.len() as f64;
    let mean = total as f64 / n / n;
    let variance = total_squared as f64 / n / n - mean * mean;

    (mean, variance)
}

/// Candidates eliminated per hypothetical secret, in candidate order
///
/// Runs in two joined phases. The first writes each candidate's feedback into
/// its own slot; partition sizes are tallied from the finished buffer; the
/// second writes each candidate's elimination count into its own slot.
#[must_use]
pub fn elimination_counts(guess: &Line, candidates: &[LineId]) -> Vec<u64> {
    let mut feedbacks = Vec::with_capacity(candidates.len());
    candidates
        .par_iter()
        .map(|id| Feedback::calculate(id.line(), guess))
        .collect_into_vec(&mut feedbacks);

    let survivors = partition_sizes(&feedbacks);
    let n = candidates.len() as u64;

    let mut eliminated = Vec::with_capacity(candidates.len());
    feedbacks
        .par_iter()
        .map(|feedback| n - survivors[feedback.index()])
        .collect_into_vec(&mut eliminated);

    eliminated
}

/// Number of candidates per feedback slot
fn partition_sizes(feedbacks: &[Feedback]) -> [u64; FEEDBACK_SLOTS] {
    let mut sizes = [0u64; FEEDBACK_SLOTS];
    for feedback in feedbacks {
        sizes[feedback.index()] += 1;
    }
    sizes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Restriction;
    use crate::core::line::table;

    fn line(s: &str) -> Line {
        s.parse().unwrap()
    }

    fn ids(lines: &[&str]) -> Vec<LineId> {
        lines.iter().map(|s| line(s).id()).collect()
    }

    /// Survivor count by rescanning every candidate for each hypothetical secret
    fn rescan_counts(guess: &Line, candidates: &[LineId]) -> Vec<u64> {
        candidates
            .iter()
            .map(|secret| {
                let restriction = Restriction::new(*guess, Feedback::calculate(secret.line(), guess));
                let survivors = candidates
                    .iter()
                    .filter(|c| restriction.accepts(c.line()))
                    .count();
                (candidates.len() - survivors) as u64
            })
            .collect()
    }

    #[test]
    fn empty_candidates_score_zero() {
        let (mean, variance) = estimate_information_value(&line("BRGY"), &[]);
        assert!(mean.abs() < f64::EPSILON);
        assert!(variance.abs() < f64::EPSILON);
    }

    #[test]
    fn single_candidate_eliminates_nothing() {
        let candidates = ids(&["GYPW"]);
        for guess in table().iter().step_by(13) {
            assert_eq!(elimination_counts(guess, &candidates), vec![0]);
            let (mean, variance) = estimate_information_value(guess, &candidates);
            assert!(mean.abs() < f64::EPSILON);
            assert!(variance.abs() < f64::EPSILON);
        }
    }

    #[test]
    fn partition_counts_match_rescan() {
        let candidates: Vec<LineId> = LineId::all().step_by(17).collect();
        for guess in table().iter().step_by(29) {
            assert_eq!(
                elimination_counts(guess, &candidates),
                rescan_counts(guess, &candidates)
            );
        }
    }

    #[test]
    fn counts_follow_candidate_order() {
        // BBBB splits these into {BBBB}, {BBRR, RRBB}, {RRRR}
        let candidates = ids(&["RRRR", "BBRR", "BBBB", "RRBB"]);
        assert_eq!(
            elimination_counts(&line("BBBB"), &candidates),
            vec![3, 2, 3, 2]
        );
    }

    #[test]
    fn normalization_divides_by_n_squared() {
        let candidates = ids(&["RRRR", "BBRR", "BBBB", "RRBB"]);
        let (mean, variance) = estimate_information_value(&line("BBBB"), &candidates);

        // sums: 10 and 26, n² = 16
        let expected_mean = 10.0 / 16.0;
        let expected_variance = 26.0 / 16.0 - expected_mean * expected_mean;
        assert!((mean - expected_mean).abs() < 1e-12);
        assert!((variance - expected_variance).abs() < 1e-12);
    }

    #[test]
    fn full_universe_values_are_bounded() {
        let candidates: Vec<LineId> = LineId::all().collect();
        for guess in table().iter().step_by(97) {
            let (mean, variance) = estimate_information_value(guess, &candidates);
            // Σ eliminated / n² < n / n = 1
            assert!(mean > 0.0 && mean < 1.0);
            assert!(variance.is_finite());
        }
    }
}
