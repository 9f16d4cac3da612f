//! Guess ranking by expected elimination
//!
//! Every line of the universe is scored against the live candidate set, the
//! scores are ranked, and the exact-tie best prefix is offered as the top
//! suggestions.

mod engine;
pub mod information;
mod ranking;
mod tie_break;

pub use engine::SuggestionEngine;
pub use information::estimate_information_value;
pub use ranking::{Ranking, Suggestion};
pub use tie_break::TieBreak;
