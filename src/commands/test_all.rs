//! Play every possible secret - exhaustive solver evaluation

use super::simulate::SimulationStats;
use super::solve::{PlayConfig, play_game};
use crate::core::line::table;
use crate::solver::SuggestionEngine;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Instant;

/// Play every secret of the universe (or the first `limit` by id)
///
/// # Panics
///
/// Panics if the progress bar template is malformed.
pub fn run_test_all(
    engine: &SuggestionEngine,
    limit: Option<usize>,
    config: &PlayConfig,
) -> SimulationStats {
    let secrets = &table()[..limit.unwrap_or(usize::MAX).min(table().len())];

    let pb = ProgressBar::new(secrets.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let mut stats = SimulationStats::default();

    for (idx, secret) in secrets.iter().enumerate() {
        let record = play_game(engine, secret, config);
        stats.record(&record);

        if idx % 16 == 0 {
            pb.set_message(format!("Avg: {:.3}", stats.average_attempts()));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");
    stats.duration = start.elapsed();
    stats
}
