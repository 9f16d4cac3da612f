//! Formatting utilities for terminal output

use crate::core::{Feedback, LINE_LENGTH, NUM_LINES};

/// Render feedback as pegs: `●` per hit, `○` per blow, `·` for the rest
#[must_use]
pub fn feedback_pegs(feedback: Feedback) -> String {
    let hits = usize::from(feedback.hits());
    let blows = usize::from(feedback.blows());
    let empty = LINE_LENGTH.saturating_sub(hits + blows);

    format!("{}{}{}", "●".repeat(hits), "○".repeat(blows), "·".repeat(empty))
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bits of uncertainty left with `candidates` possible secrets
#[must_use]
pub fn remaining_bits(candidates: usize) -> f64 {
    if candidates == 0 {
        0.0
    } else {
        (candidates as f64).log2()
    }
}

/// Share of the initial uncertainty resolved, in `[0, 1]`
#[must_use]
pub fn solved_fraction(candidates: usize) -> f64 {
    let total = remaining_bits(NUM_LINES);
    ((total - remaining_bits(candidates)) / total).clamp(0.0, 1.0)
}
