//! Core domain types for Hit & Blow
//!
//! Colors, lines and their dense ids, hit/blow feedback and restrictions.
//! Everything here is pure and free of I/O.

mod color;
mod error;
mod feedback;
pub mod line;
pub mod restriction;

pub use color::{Color, NUM_COLORS};
pub use error::ParseError;
pub use feedback::Feedback;
pub(crate) use feedback::FEEDBACK_SLOTS;
pub use line::{LINE_LENGTH, Line, LineId, NUM_LINES};
pub use restriction::Restriction;
