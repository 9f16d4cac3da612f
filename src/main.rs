//! Hit & Blow Solver - CLI
//!
//! Hit & Blow solver with TUI and CLI modes, ranking guesses by expected
//! elimination of the remaining lines.

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use hitblow_solver::{
    commands::{
        PlayConfig, SimulationConfig, SuggestConfig, analyze_guess, parse_restrictions,
        run_simulation, run_suggest, run_test_all, solve_secret,
    },
    core::NUM_LINES,
    output::{
        print_analysis_result, print_game_record, print_simulation_stats, print_suggest_result,
    },
    solver::{SuggestionEngine, TieBreak},
};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "hitblow_solver",
    about = "Hit & Blow solver ranking guesses by expected elimination",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Tie-break among equally ranked guesses: random (default) or first
    #[arg(short, long, global = true, default_value = "random")]
    tie_break: String,

    /// Give up on a secret after this many guesses
    #[arg(short, long, global = true, default_value = "10")]
    max_attempts: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Suggest the next guess from known restrictions
    Suggest {
        /// Restrictions as GUESS:HITS,BLOWS, e.g. BBRR:0,1
        restrictions: Vec<String>,

        /// Where to write the full ranking
        #[arg(short, long, default_value = "suggestions.txt")]
        output: PathBuf,

        /// Skip writing the ranking report
        #[arg(long)]
        no_report: bool,
    },

    /// Play games against random secrets
    Simulate {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "100")]
        trials: usize,

        /// Only show the summary
        #[arg(short, long)]
        quiet: bool,
    },

    /// Solve a specific secret
    Solve {
        /// The secret line, e.g. RGYP
        secret: String,

        /// Show score and variance of every guess
        #[arg(short, long)]
        verbose: bool,
    },

    /// Analyze a guess against the lines left by some restrictions
    Analyze {
        /// Guess to analyze
        guess: String,

        /// Restrictions as GUESS:HITS,BLOWS
        restrictions: Vec<String>,
    },

    /// Test solver on ALL possible secrets
    TestAll {
        /// Limit number of secrets to test
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let engine = SuggestionEngine::new();
    let play = PlayConfig {
        max_attempts: cli.max_attempts,
        tie_break: TieBreak::from_name(&cli.tie_break),
    };

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&engine, play.tie_break),
        Commands::Suggest {
            restrictions,
            output,
            no_report,
        } => run_suggest_command(&engine, &restrictions, output, no_report, play.tie_break),
        Commands::Simulate { trials, quiet } => {
            run_simulate_command(&engine, trials, quiet, play);
            Ok(())
        }
        Commands::Solve { secret, verbose } => {
            run_solve_command(&engine, &secret, verbose, &play)
        }
        Commands::Analyze {
            guess,
            restrictions,
        } => run_analyze_command(&engine, &guess, &restrictions),
        Commands::TestAll { limit } => {
            run_test_all_command(&engine, limit, &play, &cli.tie_break);
            Ok(())
        }
    }
}

fn run_suggest_command(
    engine: &SuggestionEngine,
    restrictions: &[String],
    output: PathBuf,
    no_report: bool,
    tie_break: TieBreak,
) -> Result<()> {
    let restrictions = parse_restrictions(restrictions)?;
    let config = SuggestConfig {
        restrictions,
        report_path: (!no_report).then_some(output),
        tie_break,
    };

    let result = run_suggest(engine, config)?;
    print_suggest_result(&result);
    Ok(())
}

fn run_solve_command(
    engine: &SuggestionEngine,
    secret: &str,
    verbose: bool,
    config: &PlayConfig,
) -> Result<()> {
    let record = solve_secret(secret, config, engine).map_err(|e| anyhow::anyhow!(e))?;

    print_game_record(1, &record);
    if verbose {
        println!();
        for (i, attempt) in record.attempts.iter().enumerate() {
            println!(
                "  Guess #{}: [{}] score {:.3} variance {:.2}",
                i + 1,
                attempt.guess,
                attempt.score,
                attempt.variance
            );
        }
    }
    Ok(())
}

fn run_analyze_command(engine: &SuggestionEngine, guess: &str, restrictions: &[String]) -> Result<()> {
    let restrictions = parse_restrictions(restrictions)?;
    let result = analyze_guess(guess, restrictions, engine).map_err(|e| anyhow::anyhow!(e))?;
    print_analysis_result(&result);
    Ok(())
}

fn run_simulate_command(engine: &SuggestionEngine, trials: usize, quiet: bool, play: PlayConfig) {
    println!("Running {trials} games against random secrets...");

    let pb = if quiet {
        let pb = ProgressBar::new(trials as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓▒░"),
        );
        Some(pb)
    } else {
        None
    };

    let config = SimulationConfig::new(trials, play);
    let stats = run_simulation(engine, &config, |trial, record| match &pb {
        Some(pb) => pb.inc(1),
        None => print_game_record(trial, record),
    });

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }
    print_simulation_stats(&stats);
}

fn run_test_all_command(
    engine: &SuggestionEngine,
    limit: Option<usize>,
    play: &PlayConfig,
    tie_break_name: &str,
) {
    println!("\n{}", "═".repeat(70));
    println!(" Comprehensive Hit & Blow Solver Test ");
    println!("{}", "═".repeat(70));
    println!(
        "\nTesting against {} possible secrets",
        limit.map_or(NUM_LINES, |l| l.min(NUM_LINES))
    );
    println!("Tie-break: {}", tie_break_name.bright_white());
    println!("Max attempts: {}", play.max_attempts);
    println!();

    let stats = run_test_all(engine, limit, play);
    print_simulation_stats(&stats);
}

fn run_play_command(engine: &SuggestionEngine, tie_break: TieBreak) -> Result<()> {
    use hitblow_solver::interactive::{App, run_tui};

    let app = App::new(engine, tie_break);
    run_tui(app)
}
