//! Peg colors

use super::ParseError;
use std::fmt;

/// Number of distinct colors
pub const NUM_COLORS: usize = 6;

/// One of the six peg colors
///
/// The discriminant is the color's digit in the base-6 line encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    Blue = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Pink = 4,
    White = 5,
}

impl Color {
    /// All colors in digit order
    pub const ALL: [Self; NUM_COLORS] = [
        Self::Blue,
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Pink,
        Self::White,
    ];

    /// Color for a base-6 digit
    ///
    /// # Panics
    /// Panics if `digit >= 6`
    #[inline]
    #[must_use]
    pub const fn from_digit(digit: usize) -> Self {
        Self::ALL[digit]
    }

    /// Base-6 digit of this color (0-5)
    #[inline]
    #[must_use]
    pub const fn digit(self) -> usize {
        self as usize
    }

    /// Single-letter code used when rendering lines
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Blue => 'B',
            Self::Red => 'R',
            Self::Green => 'G',
            Self::Yellow => 'Y',
            Self::Pink => 'P',
            Self::White => 'W',
        }
    }

    /// Parse a single-letter code (case-insensitive)
    ///
    /// # Errors
    /// Returns `ParseError::UnknownColor` for anything outside `B R G Y P W`.
    pub fn from_code(code: char) -> Result<Self, ParseError> {
        match code.to_ascii_uppercase() {
            'B' => Ok(Self::Blue),
            'R' => Ok(Self::Red),
            'G' => Ok(Self::Green),
            'Y' => Ok(Self::Yellow),
            'P' => Ok(Self::Pink),
            'W' => Ok(Self::White),
            _ => Err(ParseError::UnknownColor(code)),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Blue => "Blue",
            Self::Red => "Red",
            Self::Green => "Green",
            Self::Yellow => "Yellow",
            Self::Pink => "Pink",
            Self::White => "White",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_names() {
        let names: Vec<String> = Color::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(names, ["Blue", "Red", "Green", "Yellow", "Pink", "White"]);
    }

    #[test]
    fn color_codes() {
        assert_eq!(Color::Blue.code(), 'B');
        assert_eq!(Color::Red.code(), 'R');
        assert_eq!(Color::White.code(), 'W');
    }

    #[test]
    fn color_code_parsing_is_case_insensitive() {
        for color in Color::ALL {
            assert_eq!(Color::from_code(color.code()), Ok(color));
            assert_eq!(Color::from_code(color.code().to_ascii_lowercase()), Ok(color));
        }
        assert_eq!(Color::from_code('X'), Err(ParseError::UnknownColor('X')));
    }

    #[test]
    fn color_digits_follow_declaration_order() {
        for (i, color) in Color::ALL.iter().enumerate() {
            assert_eq!(color.digit(), i);
            assert_eq!(Color::from_digit(i), *color);
        }
    }
}
