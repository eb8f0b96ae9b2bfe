use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Decoration around the displayed QR code.
///
/// Purely cosmetic: the encoded payload and the exported image never
/// depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrameStyle {
    #[default]
    None,
    Dots,
    Square,
    Rounded,
}

impl FrameStyle {
    pub const ALL: [FrameStyle; 4] = [Self::None, Self::Dots, Self::Square, Self::Rounded];

    pub fn id(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Dots => "dots",
            Self::Square => "square",
            Self::Rounded => "rounded",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::None => "No Frame",
            Self::Dots => "Dots",
            Self::Square => "Square",
            Self::Rounded => "Rounded",
        }
    }
}

impl fmt::Display for FrameStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for FrameStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|frame| frame.id().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::InvalidFrame(s.to_string()))
    }
}
