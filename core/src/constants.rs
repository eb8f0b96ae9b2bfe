//! Centralized defaults and limits
//!
//! Shared by the session, the renderer and the CLI so that every surface
//! agrees on the same bounds.

/// Smallest rendered QR code edge, in pixels
pub const MIN_SIZE: u32 = 100;

/// Largest rendered QR code edge, in pixels
pub const MAX_SIZE: u32 = 300;

/// Default rendered QR code edge, in pixels
pub const DEFAULT_SIZE: u32 = 200;

/// Size slider granularity
pub const SIZE_STEP: u32 = 10;

/// Default foreground color
pub const DEFAULT_FG_COLOR: &str = "#000000";

/// File stem used for downloads when none is given
pub const DEFAULT_FILENAME: &str = "qrcode";

/// Extension appended to every downloaded file
pub const DOWNLOAD_EXTENSION: &str = "png";

/// Substituted for blank input; the encoder rejects empty values
pub const BLANK_PAYLOAD: &str = " ";

/// Title passed to the share target
pub const SHARE_TITLE: &str = "QR Code Content";

/// How long the "copied" indicator stays on, in milliseconds
pub const COPIED_RESET_MS: u64 = 2000;

/// Quiet zone width around the symbol, in modules
pub const QUIET_ZONE_MODULES: usize = 4;
