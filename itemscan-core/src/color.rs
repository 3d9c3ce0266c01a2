//! Closed palette of color names produced by classification

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Human-readable color label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NamedColor {
    Black,
    DarkGray,
    Gray,
    LightGray,
    White,
    Red,
    Pink,
    Orange,
    DarkOrange,
    Brown,
    Yellow,
    YellowGreen,
    Green,
    LightGreen,
    DarkGreen,
    Cyan,
    Blue,
    LightBlue,
    Purple,
    Magenta,
    Unknown,
}

impl NamedColor {
    /// Every member of the palette, `Unknown` last
    pub const ALL: [NamedColor; 21] = [
        NamedColor::Black,
        NamedColor::DarkGray,
        NamedColor::Gray,
        NamedColor::LightGray,
        NamedColor::White,
        NamedColor::Red,
        NamedColor::Pink,
        NamedColor::Orange,
        NamedColor::DarkOrange,
        NamedColor::Brown,
        NamedColor::Yellow,
        NamedColor::YellowGreen,
        NamedColor::Green,
        NamedColor::LightGreen,
        NamedColor::DarkGreen,
        NamedColor::Cyan,
        NamedColor::Blue,
        NamedColor::LightBlue,
        NamedColor::Purple,
        NamedColor::Magenta,
        NamedColor::Unknown,
    ];

    /// Canonical (non-localized) display name
    pub fn name(&self) -> &'static str {
        match self {
            NamedColor::Black => "Black",
            NamedColor::DarkGray => "Dark Gray",
            NamedColor::Gray => "Gray",
            NamedColor::LightGray => "Light Gray",
            NamedColor::White => "White",
            NamedColor::Red => "Red",
            NamedColor::Pink => "Pink",
            NamedColor::Orange => "Orange",
            NamedColor::DarkOrange => "Dark Orange",
            NamedColor::Brown => "Brown",
            NamedColor::Yellow => "Yellow",
            NamedColor::YellowGreen => "Yellow Green",
            NamedColor::Green => "Green",
            NamedColor::LightGreen => "Light Green",
            NamedColor::DarkGreen => "Dark Green",
            NamedColor::Cyan => "Cyan",
            NamedColor::Blue => "Blue",
            NamedColor::LightBlue => "Light Blue",
            NamedColor::Purple => "Purple",
            NamedColor::Magenta => "Magenta",
            NamedColor::Unknown => "Unknown",
        }
    }

    /// Achromatic members of the palette
    pub fn is_neutral(&self) -> bool {
        matches!(
            self,
            NamedColor::Black
                | NamedColor::DarkGray
                | NamedColor::Gray
                | NamedColor::LightGray
                | NamedColor::White
        )
    }
}

impl fmt::Display for NamedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unrecognised color name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseColorError(pub String);

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown color name: {}", self.0)
    }
}

impl std::error::Error for ParseColorError {}

impl FromStr for NamedColor {
    type Err = ParseColorError;

    /// Accepts "Dark Gray", "DarkGray", "dark_gray" and "dark-gray" alike
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .flat_map(char::to_lowercase)
            .collect();

        NamedColor::ALL
            .iter()
            .copied()
            .find(|color| {
                color
                    .name()
                    .chars()
                    .filter(|c| *c != ' ')
                    .flat_map(char::to_lowercase)
                    .eq(key.chars())
            })
            .ok_or_else(|| ParseColorError(s.to_string()))
    }
}
