//! Stone colors.

use std::fmt;
use std::str::FromStr;

use crate::error::SetupError;

/// The marker a player places on the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Stone {
    Blue,
    Red,
    Green,
    White,
}

impl Stone {
    /// Every stone variant, in display order.
    pub const ALL: [Stone; 4] = [Stone::Blue, Stone::Red, Stone::Green, Stone::White];

    /// Single character used when the board is drawn as text.
    pub fn glyph(self) -> char {
        match self {
            Stone::Blue => 'B',
            Stone::Red => 'R',
            Stone::Green => 'G',
            Stone::White => 'W',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Stone::Blue => "blue",
            Stone::Red => "red",
            Stone::Green => "green",
            Stone::White => "white",
        }
    }
}

impl fmt::Display for Stone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Stone {
    type Err = SetupError;

    /// Accepts the color name or its glyph, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Stone::ALL
            .into_iter()
            .find(|stone| {
                stone.name() == wanted || stone.glyph().to_ascii_lowercase().to_string() == wanted
            })
            .ok_or(SetupError::UnknownStone { name: s.to_string() })
    }
}
