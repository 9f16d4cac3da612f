//! Terminal output formatting and the suggestion report
//!
//! Display utilities for CLI results and the tab-separated ranking report.

pub mod display;
pub mod formatters;
pub mod report;

pub use display::{
    print_analysis_result, print_game_record, print_simulation_stats, print_suggest_result,
};
