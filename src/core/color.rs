//! Piece colors.
//!
//! Colors are 24-bit RGB values written as `#rrggbb`. They serialize as
//! that string so saved events and configs stay readable.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::ConfigError;
use super::player::PlayerId;

/// A 24-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Default color of the first player.
    pub const PURPLE: Color = Color::rgb(0xb3, 0x00, 0xb3);
    /// Default color of the second player.
    pub const TEAL: Color = Color::rgb(0x52, 0xab, 0x9d);

    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// The palette color assigned to a seat when no choice is made.
    #[must_use]
    pub const fn default_for(player: PlayerId) -> Self {
        match player.index() {
            0 => Self::PURPLE,
            _ => Self::TEAL,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ConfigError;

    /// Parse `#rrggbb` (the leading `#` is optional, hex digits are
    /// case-insensitive).
    ///
    /// ```
    /// use connect_four::core::Color;
    ///
    /// let c: Color = "#52AB9D".parse().unwrap();
    /// assert_eq!(c, Color::TEAL);
    /// assert!("#12345".parse::<Color>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ConfigError::InvalidColor(s.to_string()));
        }

        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| ConfigError::InvalidColor(s.to_string()))
        };

        Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl TryFrom<String> for Color {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Color::PURPLE.to_string(), "#b300b3");
        assert_eq!(Color::rgb(0, 1, 255).to_string(), "#0001ff");
    }

    #[test]
    fn test_parse() {
        assert_eq!("#b300b3".parse::<Color>().unwrap(), Color::PURPLE);
        assert_eq!("52ab9d".parse::<Color>().unwrap(), Color::TEAL);
        assert_eq!(" #FFFFFF ".parse::<Color>().unwrap(), Color::rgb(255, 255, 255));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["", "#", "#fff", "#gggggg", "#1234567", "red"] {
            assert!(
                matches!(bad.parse::<Color>(), Err(ConfigError::InvalidColor(_))),
                "{:?} should not parse",
                bad
            );
        }
    }

    #[test]
    fn test_defaults_differ() {
        assert_eq!(Color::default_for(PlayerId::FIRST), Color::PURPLE);
        assert_eq!(Color::default_for(PlayerId::SECOND), Color::TEAL);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Color::TEAL).unwrap();
        assert_eq!(json, "\"#52ab9d\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Color::TEAL);
        assert!(serde_json::from_str::<Color>("\"nope\"").is_err());
    }
}
