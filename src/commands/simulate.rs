//! Repeated games against random secrets
//!
//! Plays a number of trials, each against a uniformly random secret, and
//! aggregates how many attempts the solver needed.

use super::solve::{GameRecord, PlayConfig, play_game};
use crate::core::{Line, LineId, NUM_LINES};
use crate::solver::SuggestionEngine;
use rand::Rng;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Configuration for a simulation run
#[derive(Debug, Clone, Copy)]
pub struct SimulationConfig {
    pub trials: usize,
    pub play: PlayConfig,
}

impl SimulationConfig {
    #[must_use]
    pub const fn new(trials: usize, play: PlayConfig) -> Self {
        Self { trials, play }
    }
}

/// Aggregate statistics over played games
#[derive(Debug, Default)]
pub struct SimulationStats {
    pub total_games: usize,
    pub solved: usize,
    pub failed: usize,
    /// Attempts needed → number of solved games
    pub attempt_distribution: FxHashMap<usize, usize>,
    /// Opening guess → number of games it was played in
    pub opening_usage: FxHashMap<Line, usize>,
    pub total_attempts: usize,
    pub min_attempts: Option<usize>,
    pub max_attempts: usize,
    /// Solved games needing the most attempts
    pub hardest: Vec<(Line, usize)>,
    pub duration: Duration,
}

impl SimulationStats {
    /// Fold one game into the statistics
    pub fn record(&mut self, game: &GameRecord) {
        self.total_games += 1;

        if let Some(first) = game.attempts.first() {
            *self.opening_usage.entry(first.guess).or_insert(0) += 1;
        }

        if !game.solved() {
            self.failed += 1;
            return;
        }

        let attempts = game.attempts.len();
        self.solved += 1;
        self.total_attempts += attempts;
        *self.attempt_distribution.entry(attempts).or_insert(0) += 1;
        self.min_attempts = Some(self.min_attempts.map_or(attempts, |m| m.min(attempts)));
        self.max_attempts = self.max_attempts.max(attempts);

        self.hardest.push((game.secret, attempts));
        self.hardest
            .sort_by_key(|&(_, n)| std::cmp::Reverse(n));
        self.hardest.truncate(10);
    }

    /// Average attempts over solved games
    #[must_use]
    pub fn average_attempts(&self) -> f64 {
        if self.solved == 0 {
            0.0
        } else {
            self.total_attempts as f64 / self.solved as f64
        }
    }
}

/// Pick a secret uniformly from the universe
#[must_use]
pub fn random_secret() -> Line {
    let id = rand::rng().random_range(0..NUM_LINES);
    *LineId::new(id as u16).line()
}

/// Play `config.trials` games against random secrets
///
/// `on_game` is called after every game with its 1-based trial number.
pub fn run_simulation<F>(
    engine: &SuggestionEngine,
    config: &SimulationConfig,
    mut on_game: F,
) -> SimulationStats
where
    F: FnMut(usize, &GameRecord),
{
    let start = Instant::now();
    let mut stats = SimulationStats::default();

    for trial in 1..=config.trials {
        let secret = random_secret();
        let record = play_game(engine, &secret, &config.play);
        stats.record(&record);
        on_game(trial, &record);
    }

    stats.duration = start.elapsed();
    stats
}
