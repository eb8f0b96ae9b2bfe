//! Construction of the string encoded into the QR symbol

mod vcard;

use std::fmt;

use crate::constants::BLANK_PAYLOAD;
use crate::normalize::format_text_as_url;

pub use vcard::{generate_vcard, ContactInfo};

/// What kind of content the user is entering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Url,
    Text,
    Contact,
}

impl Mode {
    pub fn id(&self) -> &'static str {
        match self {
            Mode::Url => "url",
            Mode::Text => "text",
            Mode::Contact => "contact",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// True when `text` holds nothing but whitespace. A byte order mark
/// counts as whitespace.
pub fn is_blank(text: &str) -> bool {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
        .is_empty()
}

/// Produce the exact string to encode for the given mode.
///
/// Never returns an empty string: blank url/text input yields a single
/// space. Contact mode always serializes a vCard, even from an empty card.
pub fn build_payload(mode: Mode, text: &str, contact: &ContactInfo) -> String {
    let payload = match mode {
        Mode::Contact => generate_vcard(contact),
        _ if is_blank(text) => BLANK_PAYLOAD.to_string(),
        Mode::Url => format_text_as_url(text),
        Mode::Text => text.to_string(),
    };

    tracing::debug!("built {} payload ({} bytes)", mode, payload.len());
    payload
}
