//! linkqr core - QR code payloads and rendering
//!
//! Turns a URL, free text or contact details into the exact string encoded
//! in a QR symbol, and draws that symbol with basic styling. Encoding is
//! delegated to the `qrcode` crate.

pub mod clipboard;
pub mod constants;
pub mod export;
pub mod normalize;
pub mod notice;
pub mod payload;
pub mod render;
pub mod session;
pub mod share;
pub mod style;

mod error;

use std::path::PathBuf;

pub use error::{Error, Result};

/// Styling and output settings a session starts from
#[derive(Debug, Clone)]
pub struct Config {
    /// Rendered edge length in pixels
    pub size: u32,
    pub fg_color: HexColor,
    pub level: ErrorCorrectionLevel,
    pub frame: FrameStyle,
    /// Directory downloads are written to
    pub output_dir: PathBuf,
    /// Download file stem; `.png` is appended
    pub filename: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            size: constants::DEFAULT_SIZE,
            fg_color: HexColor::default(),
            level: ErrorCorrectionLevel::default(),
            frame: FrameStyle::default(),
            output_dir: export::default_download_dir(),
            filename: constants::DEFAULT_FILENAME.to_string(),
        }
    }
}

// Re-export key types for convenience
pub use clipboard::{ClipboardManager, ClipboardSink};
pub use normalize::{format_text_as_url, is_valid_url};
pub use notice::Notice;
pub use payload::{build_payload, generate_vcard, ContactInfo, Mode};
pub use render::{QrMatrix, RenderRequest};
pub use session::{Downloaded, QrSession};
pub use share::{NoShareTarget, ShareTarget};
pub use style::{ErrorCorrectionLevel, FrameStyle, HexColor, PALETTE};
