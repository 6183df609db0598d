// src/pixel.rs

//! Defines the `Pixel` type stored in every cell of a `Grid`.
//!
//! A pixel is a single symbolic character (for example `O`, `A` or `#`).
//! Pixels only support equality; they carry no ordering or color arithmetic.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single cell value on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Pixel(char);

/// Pixel used for fresh grids when nothing else is configured.
pub const DEFAULT_PIXEL: Pixel = Pixel('O');

impl Pixel {
    /// Creates a pixel from a character.
    ///
    /// Returns `None` for whitespace and control characters, which would
    /// break the one-character-per-cell render layout.
    pub fn new(c: char) -> Option<Self> {
        if c.is_whitespace() || c.is_control() {
            return None;
        }
        Some(Pixel(c))
    }

    /// Parses a command token. The token must be exactly one valid character.
    pub fn from_token(token: &str) -> Option<Self> {
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Pixel::new(c),
            _ => None,
        }
    }

    /// The character displayed for this pixel.
    pub fn as_char(self) -> char {
        self.0
    }
}

impl Default for Pixel {
    fn default() -> Self {
        DEFAULT_PIXEL
    }
}

impl TryFrom<char> for Pixel {
    type Error = String;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Pixel::new(c).ok_or_else(|| format!("{:?} cannot be used as a pixel", c))
    }
}

impl From<Pixel> for char {
    fn from(pixel: Pixel) -> char {
        pixel.0
    }
}

impl fmt::Display for Pixel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_token_single_char() {
        assert_eq!(Pixel::from_token("A").map(Pixel::as_char), Some('A'));
        assert_eq!(Pixel::from_token("#").map(Pixel::as_char), Some('#'));
    }

    #[test]
    fn test_from_token_rejects_multi_char_and_empty() {
        assert_eq!(Pixel::from_token("AB"), None);
        assert_eq!(Pixel::from_token(""), None);
    }

    #[test]
    fn test_new_rejects_whitespace_and_control() {
        assert_eq!(Pixel::new(' '), None);
        assert_eq!(Pixel::new('\t'), None);
        assert_eq!(Pixel::new('\u{7}'), None);
    }

    #[test]
    fn test_deserialize_validates() {
        assert_eq!(serde_json::from_str::<Pixel>("\"#\"").unwrap().as_char(), '#');
        assert!(serde_json::from_str::<Pixel>("\" \"").is_err());
        assert_eq!(serde_json::to_string(&DEFAULT_PIXEL).unwrap(), "\"O\"");
    }

    #[test]
    fn test_default_is_o() {
        assert_eq!(Pixel::default().to_string(), "O");
    }
}
