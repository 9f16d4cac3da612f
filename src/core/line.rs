//! Lines (secret codes) and their dense integer ids
//!
//! A line is a sequence of four colors. Lines map one-to-one onto ids in
//! `0..1296` through positional base-6 encoding:
//!
//! ```text
//! id = c0×216 + c1×36 + c2×6 + c3
//! ```
//!
//! The table of all lines is built once per process and only ever read.

use super::{Color, NUM_COLORS, ParseError};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Number of positions in a line
pub const LINE_LENGTH: usize = 4;

/// Size of the universe: 6^4 lines
pub const NUM_LINES: usize = NUM_COLORS * NUM_COLORS * NUM_COLORS * NUM_COLORS;

/// Four colors, repeats allowed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Line([Color; LINE_LENGTH]);

/// Dense id of a line (0-1295)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineId(u16);

impl Line {
    #[inline]
    #[must_use]
    pub const fn new(colors: [Color; LINE_LENGTH]) -> Self {
        Self(colors)
    }

    /// Decode an id into its line
    ///
    /// # Examples
    /// ```
    /// use hitblow_solver::core::{Color, Line, LineId};
    ///
    /// let line = Line::from_id(LineId::new(1));
    /// assert_eq!(line.colors(), &[Color::Blue, Color::Blue, Color::Blue, Color::Red]);
    /// ```
    #[must_use]
    pub const fn from_id(id: LineId) -> Self {
        let id = id.0 as usize;
        Self([
            Color::from_digit(id / (NUM_COLORS * NUM_COLORS * NUM_COLORS)),
            Color::from_digit((id / (NUM_COLORS * NUM_COLORS)) % NUM_COLORS),
            Color::from_digit((id / NUM_COLORS) % NUM_COLORS),
            Color::from_digit(id % NUM_COLORS),
        ])
    }

    /// Encode this line into its id
    #[must_use]
    pub const fn id(&self) -> LineId {
        let mut id = 0;
        let mut i = 0;
        while i < LINE_LENGTH {
            id = id * NUM_COLORS + self.0[i].digit();
            i += 1;
        }
        LineId(id as u16)
    }

    #[inline]
    #[must_use]
    pub const fn colors(&self) -> &[Color; LINE_LENGTH] {
        &self.0
    }

    /// Color at a position (0-3)
    ///
    /// # Panics
    /// Panics if position >= 4
    #[inline]
    #[must_use]
    pub const fn color_at(&self, position: usize) -> Color {
        self.0[position]
    }
}

impl LineId {
    /// # Panics
    /// Panics in debug mode if value >= 1296
    #[inline]
    #[must_use]
    pub const fn new(value: u16) -> Self {
        debug_assert!((value as usize) < NUM_LINES, "LineId must be < 1296");
        Self(value)
    }

    #[inline]
    #[must_use]
    pub const fn value(self) -> u16 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Look the line up in the shared table
    #[inline]
    #[must_use]
    pub fn line(self) -> &'static Line {
        &table()[self.index()]
    }

    /// Every id of the universe in ascending order
    pub fn all() -> impl ExactSizeIterator<Item = Self> {
        (0..NUM_LINES as u16).map(Self)
    }
}

static LINE_TABLE: OnceLock<Vec<Line>> = OnceLock::new();

/// All 1296 lines, indexed by id
///
/// Built on first use by decoding every id in order.
pub fn table() -> &'static [Line] {
    LINE_TABLE.get_or_init(|| LineId::all().map(Line::from_id).collect())
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for color in &self.0 {
            write!(f, "{}", color.code())?;
        }
        Ok(())
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.line())
    }
}

impl FromStr for Line {
    type Err = ParseError;

    /// Parse four color codes such as `BRGY` (case-insensitive)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let count = s.chars().count();
        if count != LINE_LENGTH {
            return Err(ParseError::InvalidLength(count));
        }

        let mut colors = [Color::Blue; LINE_LENGTH];
        for (slot, ch) in colors.iter_mut().zip(s.chars()) {
            *slot = Color::from_code(ch)?;
        }
        Ok(Self(colors))
    }
}
