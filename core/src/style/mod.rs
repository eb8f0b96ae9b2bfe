//! Styling options: error correction, frame, color and size

mod color;
mod frame;
mod level;

pub use color::{HexColor, PaletteEntry, PALETTE};
pub use frame::FrameStyle;
pub use level::ErrorCorrectionLevel;

use crate::constants::{MAX_SIZE, MIN_SIZE};
use crate::{Error, Result};

/// Validate a rendered edge length in pixels
pub fn validate_size(size: u32) -> Result<u32> {
    if (MIN_SIZE..=MAX_SIZE).contains(&size) {
        Ok(size)
    } else {
        Err(Error::InvalidSize(size))
    }
}
