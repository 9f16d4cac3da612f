//! Errors produced when parsing user-supplied lines, feedback and restrictions

use std::fmt;

/// Error type for malformed textual input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A line must have exactly four color codes
    InvalidLength(usize),
    /// Character is not one of `B R G Y P W`
    UnknownColor(char),
    /// Feedback is not of the form `H,B`
    InvalidFeedback(String),
    /// Restriction is not of the form `LINE:H,B`
    InvalidRestriction(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Line must be exactly 4 colors, got {len}")
            }
            Self::UnknownColor(ch) => {
                write!(f, "Unknown color code '{ch}' (expected one of B, R, G, Y, P, W)")
            }
            Self::InvalidFeedback(s) => {
                write!(f, "Invalid feedback '{s}' (expected HITS,BLOWS such as 1,2)")
            }
            Self::InvalidRestriction(s) => {
                write!(f, "Invalid restriction '{s}' (expected LINE:HITS,BLOWS such as BBRR:0,1)")
            }
        }
    }
}

impl std::error::Error for ParseError {}
