//! Form state for one QR code being composed, and the user actions on it

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::clipboard::ClipboardSink;
use crate::constants::{COPIED_RESET_MS, SHARE_TITLE};
use crate::notice::{self, Notice};
use crate::payload::{self, build_payload, ContactInfo, Mode};
use crate::render::RenderRequest;
use crate::share::ShareTarget;
use crate::style::{validate_size, ErrorCorrectionLevel, FrameStyle, HexColor};
use crate::{export, Config, Error, Result};

/// Result of a successful download
#[derive(Debug, Clone)]
pub struct Downloaded {
    pub path: PathBuf,
    pub notice: Notice,
}

/// Current form state
#[derive(Debug, Clone)]
pub struct QrSession {
    mode: Mode,
    text: String,
    contact: ContactInfo,
    size: u32,
    fg_color: HexColor,
    level: ErrorCorrectionLevel,
    frame: FrameStyle,
    copied_at: Option<Instant>,
}

impl QrSession {
    /// Create a session with default styling
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    /// Create a session styled from `config`
    pub fn with_config(config: &Config) -> Self {
        Self {
            mode: Mode::default(),
            text: String::new(),
            contact: ContactInfo::default(),
            size: config.size,
            fg_color: config.fg_color,
            level: config.level,
            frame: config.frame,
            copied_at: None,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn contact(&self) -> &ContactInfo {
        &self.contact
    }

    pub fn set_contact(&mut self, contact: ContactInfo) {
        self.contact = contact;
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// Rejects sizes outside the supported range, leaving the current one
    pub fn set_size(&mut self, size: u32) -> Result<()> {
        self.size = validate_size(size)?;
        Ok(())
    }

    pub fn fg_color(&self) -> HexColor {
        self.fg_color
    }

    pub fn set_fg_color(&mut self, color: HexColor) {
        self.fg_color = color;
    }

    pub fn level(&self) -> ErrorCorrectionLevel {
        self.level
    }

    pub fn set_level(&mut self, level: ErrorCorrectionLevel) {
        self.level = level;
    }

    pub fn frame(&self) -> FrameStyle {
        self.frame
    }

    pub fn set_frame(&mut self, frame: FrameStyle) {
        self.frame = frame;
    }

    /// Nothing worth encoding has been entered. Contact mode is never blank.
    pub fn is_blank(&self) -> bool {
        self.mode != Mode::Contact && payload::is_blank(&self.text)
    }

    /// The exact string to encode
    pub fn qr_value(&self) -> String {
        build_payload(self.mode, &self.text, &self.contact)
    }

    /// Encoder input for the current state
    pub fn render_request(&self) -> RenderRequest {
        RenderRequest {
            value: self.qr_value(),
            size: self.size,
            fg_color: self.fg_color,
            level: self.level,
        }
    }

    fn require_content(&self, blank: Notice) -> Result<()> {
        if self.is_blank() {
            tracing::debug!("{} rejected: {}", self.mode, blank.title);
            return Err(Error::Validation(blank));
        }
        Ok(())
    }

    /// Render the code and save it as `<dir>/<filename>.png`
    pub fn download(&self, dir: &Path, filename: &str) -> Result<Downloaded> {
        self.require_content(notice::NOTHING_TO_GENERATE)?;

        let data_url = self.render_request().to_data_url()?;
        let path = export::download(&data_url, dir, filename)?;

        Ok(Downloaded { path, notice: notice::DOWNLOADED })
    }

    /// Copy the payload to the clipboard
    pub fn copy_to_clipboard(&mut self, clipboard: &mut dyn ClipboardSink) -> Result<Notice> {
        self.require_content(notice::NOTHING_TO_COPY)?;

        clipboard.write_text(&self.qr_value())?;
        self.copied_at = Some(Instant::now());

        tracing::info!("copied {} payload to clipboard", self.mode);
        Ok(notice::COPIED)
    }

    /// Share the payload, falling back to the clipboard when sharing fails
    pub fn share(
        &mut self,
        target: &dyn ShareTarget,
        clipboard: &mut dyn ClipboardSink,
    ) -> Result<Notice> {
        self.require_content(notice::NOTHING_TO_SHARE)?;

        match target.share(SHARE_TITLE, &self.qr_value()) {
            Ok(()) => {
                tracing::info!("shared {} payload", self.mode);
                Ok(notice::SHARED)
            }
            Err(e) => {
                tracing::warn!("share failed, copying instead: {}", e);
                self.copy_to_clipboard(clipboard)
            }
        }
    }

    /// Whether the "copied" indicator is still on
    pub fn is_copied(&self) -> bool {
        self.is_copied_at(Instant::now())
    }

    pub fn is_copied_at(&self, now: Instant) -> bool {
        self.copied_at
            .is_some_and(|at| now.saturating_duration_since(at) < Duration::from_millis(COPIED_RESET_MS))
    }
}

impl Default for QrSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[derive(Default)]
    struct RecordingClipboard {
        contents: Option<String>,
    }

    impl ClipboardSink for RecordingClipboard {
        fn write_text(&mut self, text: &str) -> Result<()> {
            self.contents = Some(text.to_string());
            Ok(())
        }
    }

    struct FailingClipboard;

    impl ClipboardSink for FailingClipboard {
        fn write_text(&mut self, _text: &str) -> Result<()> {
            Err(Error::Clipboard("no display".to_string()))
        }
    }

    #[derive(Default)]
    struct RecordingShare {
        shared: RefCell<Vec<(String, String)>>,
    }

    impl ShareTarget for RecordingShare {
        fn share(&self, title: &str, text: &str) -> Result<()> {
            self.shared.borrow_mut().push((title.to_string(), text.to_string()));
            Ok(())
        }
    }

    fn session_with(mode: Mode, text: &str) -> QrSession {
        let mut session = QrSession::new();
        session.set_mode(mode);
        session.set_text(text);
        session
    }

    #[test]
    fn test_defaults() {
        let session = QrSession::new();
        assert_eq!(session.mode(), Mode::Url);
        assert_eq!(session.size(), 200);
        assert_eq!(session.fg_color().to_string(), "#000000");
        assert_eq!(session.level(), ErrorCorrectionLevel::M);
        assert_eq!(session.frame(), FrameStyle::None);
        assert!(!session.is_copied());
    }

    #[test]
    fn test_qr_value_follows_mode() {
        let mut session = session_with(Mode::Url, "example.com");
        assert_eq!(session.qr_value(), "https://example.com");

        session.set_mode(Mode::Text);
        assert_eq!(session.qr_value(), "example.com");

        session.set_mode(Mode::Contact);
        session.set_contact(ContactInfo::new("Jane"));
        assert_eq!(session.qr_value(), "BEGIN:VCARD\nVERSION:3.0\nFN:Jane\nEND:VCARD");
    }

    #[test]
    fn test_frame_does_not_affect_payload() {
        let mut session = session_with(Mode::Url, "example.com");
        let before = session.render_request();
        session.set_frame(FrameStyle::Rounded);
        assert_eq!(session.render_request(), before);
    }

    #[test]
    fn test_set_size_rejects_out_of_range() {
        let mut session = QrSession::new();
        session.set_size(250).unwrap();
        assert!(session.set_size(400).is_err());
        assert_eq!(session.size(), 250);
    }

    #[test]
    fn test_blank_contact_mode_is_not_blank() {
        let session = session_with(Mode::Contact, "");
        assert!(!session.is_blank());
        assert!(session_with(Mode::Text, " \n").is_blank());
    }

    #[test]
    fn test_copy_blank_is_rejected() {
        let mut session = session_with(Mode::Url, "   ");
        let mut clipboard = RecordingClipboard::default();

        let err = session.copy_to_clipboard(&mut clipboard).unwrap_err();
        match err {
            Error::Validation(n) => {
                assert_eq!(n.title, "Nothing to copy");
                assert!(n.is_destructive());
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(clipboard.contents.is_none());
        assert!(!session.is_copied());
    }

    #[test]
    fn test_copy_writes_payload_and_sets_copied() {
        let mut session = session_with(Mode::Url, "example.com");
        let mut clipboard = RecordingClipboard::default();

        let notice = session.copy_to_clipboard(&mut clipboard).unwrap();

        assert_eq!(notice, notice::COPIED);
        assert_eq!(clipboard.contents.as_deref(), Some("https://example.com"));
        assert!(session.is_copied());
    }

    #[test]
    fn test_copied_indicator_resets() {
        let mut session = session_with(Mode::Text, "hi");
        session.copy_to_clipboard(&mut RecordingClipboard::default()).unwrap();

        let now = Instant::now();
        assert!(session.is_copied_at(now));
        assert!(!session.is_copied_at(now + Duration::from_millis(COPIED_RESET_MS + 1)));
    }

    #[test]
    fn test_copy_propagates_clipboard_error() {
        let mut session = session_with(Mode::Text, "hi");
        let err = session.copy_to_clipboard(&mut FailingClipboard).unwrap_err();
        assert!(matches!(err, Error::Clipboard(_)));
        assert!(!session.is_copied());
    }

    #[test]
    fn test_share_uses_target() {
        let mut session = session_with(Mode::Text, "hello");
        let target = RecordingShare::default();
        let mut clipboard = RecordingClipboard::default();

        let notice = session.share(&target, &mut clipboard).unwrap();

        assert_eq!(notice, notice::SHARED);
        assert_eq!(
            target.shared.borrow().as_slice(),
            [("QR Code Content".to_string(), "hello".to_string())]
        );
        assert!(clipboard.contents.is_none());
    }

    #[test]
    fn test_share_falls_back_to_clipboard() {
        let mut session = session_with(Mode::Contact, "");
        session.set_contact(ContactInfo::new("Jane"));
        let mut clipboard = RecordingClipboard::default();

        let notice = session.share(&crate::share::NoShareTarget, &mut clipboard).unwrap();

        assert_eq!(notice, notice::COPIED);
        assert_eq!(
            clipboard.contents.as_deref(),
            Some("BEGIN:VCARD\nVERSION:3.0\nFN:Jane\nEND:VCARD")
        );
    }

    #[test]
    fn test_share_blank_is_rejected() {
        let mut session = session_with(Mode::Url, "");
        let err = session
            .share(&RecordingShare::default(), &mut RecordingClipboard::default())
            .unwrap_err();
        assert!(matches!(err, Error::Validation(n) if n == notice::NOTHING_TO_SHARE));
    }

    #[test]
    fn test_download_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let session = session_with(Mode::Url, "example.com");

        let downloaded = session.download(dir.path(), "qrcode").unwrap();

        assert_eq!(downloaded.path, dir.path().join("qrcode.png"));
        assert_eq!(downloaded.notice, notice::DOWNLOADED);
        let bytes = std::fs::read(&downloaded.path).unwrap();
        assert_eq!(&bytes[..4], b"\x89PNG");
    }

    #[test]
    fn test_download_blank_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let session = session_with(Mode::Text, "");

        let err = session.download(dir.path(), "qrcode").unwrap_err();

        assert!(matches!(err, Error::Validation(n) if n == notice::NOTHING_TO_GENERATE));
        assert!(!dir.path().join("qrcode.png").exists());
    }
}
