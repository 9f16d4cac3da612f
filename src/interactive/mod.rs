//! Interactive terminal interface

mod app;
mod rendering;

pub use app::{App, run_tui};
