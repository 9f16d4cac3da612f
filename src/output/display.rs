//! Display functions for command results

use super::formatters::{create_progress_bar, feedback_pegs, remaining_bits};
use crate::commands::{AnalysisResult, GameRecord, SimulationStats, SuggestResult};
use colored::Colorize;

/// How many top suggestions are listed on screen
const SHOWN_SUGGESTIONS: usize = 10;

/// Print the result of a suggestion run
pub fn print_suggest_result(result: &SuggestResult) {
    println!("{}", result.status);

    let top = result.ranking.top();
    if top.is_empty() {
        println!(
            "{}",
            "❌ No candidates remain - the restrictions contradict each other."
                .red()
                .bold()
        );
        return;
    }

    match &result.report {
        Some(path) => println!(
            "Suggestions: {} (see {} for detail)",
            top.len().to_string().bright_yellow().bold(),
            path.display()
        ),
        None => println!("Suggestions: {}", top.len().to_string().bright_yellow().bold()),
    }
    for suggestion in top.iter().take(SHOWN_SUGGESTIONS) {
        println!(
            "  [{}] {:.3} ({:.2})",
            suggestion.line.to_string().bright_white().bold(),
            suggestion.score,
            suggestion.variance
        );
    }
    println!();

    if let Some(next) = &result.next {
        println!("Next: [{}]", next.line.to_string().bright_green().bold());
        println!();
    }
}

/// Print one played-out game, attempt by attempt
pub fn print_game_record(trial: usize, record: &GameRecord) {
    println!(
        "Trial #{}: Answer=[{}]",
        trial,
        record.secret.to_string().bright_yellow()
    );

    for (i, attempt) in record.attempts.iter().enumerate() {
        println!(
            "  Attempt #{}: [{}] => {} {} ({} => {})",
            i + 1,
            attempt.guess,
            attempt.feedback,
            feedback_pegs(attempt.feedback).bright_cyan(),
            attempt.candidates_before,
            attempt.candidates_after
        );
    }

    match record.solution {
        Some(solution) => println!(
            "  {} [{}] (attempts: {})",
            "Answer Found!".green().bold(),
            solution,
            record.attempts.len()
        ),
        None => println!(
            "  {} after {} attempts",
            "Not isolated".red().bold(),
            record.attempts.len()
        ),
    }
}

/// Print the analysis of a single guess
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "GUESS ANALYSIS:".bright_cyan().bold(),
        result.suggestion.line.to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📊 Against {} possible lines ({:.2} bits of uncertainty):",
        result.total_candidates,
        remaining_bits(result.total_candidates)
    );

    if result.total_guesses == 0 {
        println!(
            "   {}",
            "No candidates remain - nothing left to rank.".red()
        );
        return;
    }

    println!(
        "   Score:       {}",
        format!("{:.3}", result.suggestion.score).bright_yellow()
    );
    println!("   Variance:    {:.2}", result.suggestion.variance);
    println!("   Rank:        {} of {}", result.rank, result.total_guesses);
    println!(
        "   Top guess:   {}",
        if result.is_top {
            "yes".green().bold()
        } else {
            "no".yellow()
        }
    );
    println!(
        "   Candidate:   {}",
        if result.is_candidate { "yes" } else { "no" }
    );

    if let Some(best) = &result.best
        && !result.is_top
    {
        println!(
            "   Best:        [{}] {:.3} ({:.2})",
            best.line, best.score, best.variance
        );
    }
}

/// Print aggregate statistics of a simulation or exhaustive run
pub fn print_simulation_stats(stats: &SimulationStats) {
    println!("\n{}", "═".repeat(70));
    println!(" Results ");
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Games played:        {}", stats.total_games);
    if stats.total_games == 0 {
        return;
    }

    println!(
        "  Secrets isolated:    {} {}",
        stats.solved,
        format!(
            "({:.1}%)",
            stats.solved as f64 / stats.total_games as f64 * 100.0
        )
        .green()
    );
    if stats.failed > 0 {
        println!(
            "  Not isolated:        {} {}",
            stats.failed,
            format!(
                "({:.1}%)",
                stats.failed as f64 / stats.total_games as f64 * 100.0
            )
            .red()
        );
    }
    println!(
        "  Average attempts:    {}",
        format!("{:.3}", stats.average_attempts())
            .bright_yellow()
            .bold()
    );
    if let Some(min) = stats.min_attempts {
        println!("  Best case:           {}", min.to_string().green());
    }
    println!(
        "  Worst case:          {}",
        stats.max_attempts.to_string().yellow()
    );
    println!("  Total time:          {:.2}s", stats.duration.as_secs_f64());

    println!("\n📈 {}", "Attempt Distribution".bright_cyan().bold());
    let max_count = stats
        .attempt_distribution
        .values()
        .copied()
        .max()
        .unwrap_or(1);
    for attempts in 1..=stats.max_attempts {
        let count = stats
            .attempt_distribution
            .get(&attempts)
            .copied()
            .unwrap_or(0);
        let pct = count as f64 / stats.solved.max(1) as f64 * 100.0;
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        println!("  {attempts:2}: {} {count:5} ({pct:5.1}%)", bar.green());
    }

    if !stats.hardest.is_empty() {
        println!("\n😰 {}", "Hardest Secrets".yellow().bold());
        for (secret, attempts) in stats.hardest.iter().take(5) {
            println!("  [{}] ({} attempts)", secret.to_string().yellow(), attempts);
        }
    }

    println!("\n🎯 Opening Guess Usage");
    let mut openings: Vec<_> = stats.opening_usage.iter().collect();
    openings.sort_by_key(|&(line, count)| (std::cmp::Reverse(*count), line.id()));
    for (line, count) in openings.iter().take(5) {
        let pct = **count as f64 / stats.total_games as f64 * 100.0;
        println!("  [{line}]: {count} times ({pct:.1}%)");
    }
}
