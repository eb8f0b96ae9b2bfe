//! Clipboard access

use arboard::Clipboard as ArboardClipboard;

use crate::{Error, Result};

/// Anything a payload can be copied into
pub trait ClipboardSink {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// System clipboard backed by `arboard`
pub struct ClipboardManager {
    clipboard: Option<ArboardClipboard>,
}

impl ClipboardManager {
    pub fn new() -> Self {
        Self { clipboard: None }
    }

    fn clipboard(&mut self) -> Result<&mut ArboardClipboard> {
        if self.clipboard.is_none() {
            let clipboard = ArboardClipboard::new()
                .map_err(|e| Error::Clipboard(e.to_string()))?;
            self.clipboard = Some(clipboard);
        }

        self.clipboard
            .as_mut()
            .ok_or_else(|| Error::Clipboard("clipboard unavailable".to_string()))
    }
}

impl Default for ClipboardManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardSink for ClipboardManager {
    /// On Linux the contents are only served while the handle lives, so
    /// this blocks until another application (or a clipboard manager)
    /// takes ownership of them.
    #[cfg(target_os = "linux")]
    fn write_text(&mut self, text: &str) -> Result<()> {
        use arboard::SetExtLinux;

        tracing::info!("waiting for the clipboard contents to be taken over");
        self.clipboard()?
            .set()
            .wait()
            .text(text)
            .map_err(|e| Error::Clipboard(e.to_string()))
    }

    #[cfg(not(target_os = "linux"))]
    fn write_text(&mut self, text: &str) -> Result<()> {
        self.clipboard()?
            .set_text(text)
            .map_err(|e| Error::Clipboard(e.to_string()))
    }
}
