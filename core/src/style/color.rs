use std::fmt;
use std::str::FromStr;

use crate::Error;

/// A named swatch offered for quick selection
#[derive(Debug, Clone, Copy)]
pub struct PaletteEntry {
    pub name: &'static str,
    pub hex: &'static str,
}

pub const PALETTE: [PaletteEntry; 8] = [
    PaletteEntry { name: "Black", hex: "#000000" },
    PaletteEntry { name: "Blue", hex: "#3B82F6" },
    PaletteEntry { name: "Purple", hex: "#8B5CF6" },
    PaletteEntry { name: "Pink", hex: "#EC4899" },
    PaletteEntry { name: "Red", hex: "#EF4444" },
    PaletteEntry { name: "Amber", hex: "#F59E0B" },
    PaletteEntry { name: "Emerald", hex: "#10B981" },
    PaletteEntry { name: "Indigo", hex: "#6366F1" },
];

/// Foreground color written as `#RRGGBB`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexColor {
    pub const BLACK: HexColor = HexColor { r: 0, g: 0, b: 0 };

    pub fn rgb(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    fn parse_hex(s: &str) -> Option<Self> {
        let digits = s.strip_prefix('#')?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Self { r: channel(0)?, g: channel(2)?, b: channel(4)? })
    }
}

impl Default for HexColor {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for HexColor {
    type Err = Error;

    /// Accepts `#RRGGBB` or the name of a palette entry
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let hex = PALETTE
            .iter()
            .find(|entry| entry.name.eq_ignore_ascii_case(s))
            .map_or(s, |entry| entry.hex);

        Self::parse_hex(hex).ok_or_else(|| Error::InvalidColor(s.to_string()))
    }
}
