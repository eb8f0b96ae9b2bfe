//! User-facing notifications

use std::fmt;

/// How a notice should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeVariant {
    Default,
    Destructive,
}

/// Short, non-blocking message reporting the outcome of a user action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: &'static str,
    pub description: &'static str,
    pub variant: NoticeVariant,
}

impl Notice {
    pub const fn success(title: &'static str, description: &'static str) -> Self {
        Self { title, description, variant: NoticeVariant::Default }
    }

    pub const fn destructive(title: &'static str, description: &'static str) -> Self {
        Self { title, description, variant: NoticeVariant::Destructive }
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == NoticeVariant::Destructive
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.description)
    }
}

pub const NOTHING_TO_GENERATE: Notice = Notice::destructive(
    "No content to generate QR code",
    "Please enter some text or URL first.",
);

pub const DOWNLOADED: Notice = Notice::success(
    "QR Code Downloaded",
    "Your QR code has been downloaded successfully.",
);

pub const NOTHING_TO_COPY: Notice = Notice::destructive(
    "Nothing to copy",
    "Please enter some text or URL first.",
);

pub const COPIED: Notice = Notice::success(
    "Copied to clipboard",
    "The text has been copied to your clipboard.",
);

pub const NOTHING_TO_SHARE: Notice = Notice::destructive(
    "Nothing to share",
    "Please enter some content first.",
);

pub const SHARED: Notice = Notice::success(
    "Shared successfully",
    "The content has been shared.",
);
