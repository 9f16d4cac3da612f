//! Hit & Blow Solver
//!
//! A solver for Hit & Blow (Mastermind with 4 positions and 6 colors) that
//! picks the guess expected to eliminate the most remaining lines.
//!
//! # Quick Start
//!
//! ```rust
//! use hitblow_solver::core::{Feedback, Line, Restriction};
//! use hitblow_solver::game::Game;
//! use hitblow_solver::solver::SuggestionEngine;
//!
//! let secret: Line = "YPRB".parse().unwrap();
//! let guess: Line = "BBRR".parse().unwrap();
//! assert_eq!(Feedback::calculate(&secret, &guess), Feedback::new(1, 1));
//!
//! let mut game = Game::default();
//! game.add_restriction(Restriction::observe(guess, &secret));
//!
//! let engine = SuggestionEngine::new();
//! let ranking = game.suggest(&engine);
//! println!("Next guess: {}", ranking.top()[0].line);
//! ```

// Core domain types
pub mod core;

// Candidate tracking
pub mod game;

// Guess ranking
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
