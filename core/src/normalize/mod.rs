//! Input normalization: deciding whether free-form text is a URL
//!
//! Text without an `http://`/`https://` prefix is checked as if it had an
//! `https://` one. Parse failures are never reported; such text is simply
//! treated as plain text.

use url::Url;

const HTTP_PREFIX: &str = "http://";
const HTTPS_PREFIX: &str = "https://";

fn has_http_prefix(text: &str) -> bool {
    text.starts_with(HTTP_PREFIX) || text.starts_with(HTTPS_PREFIX)
}

/// Check whether `text` parses as a URL, assuming `https://` when no
/// http(s) prefix is present.
pub fn is_valid_url(text: &str) -> bool {
    let parsed = if has_http_prefix(text) {
        Url::parse(text)
    } else {
        Url::parse(&format!("{HTTPS_PREFIX}{text}"))
    };

    match parsed {
        Ok(_) => true,
        Err(e) => {
            tracing::trace!("not a url ({}): {:?}", e, text);
            false
        }
    }
}

/// Canonicalize `text` into a URL when it looks like one.
///
/// Valid URLs keep an existing http(s) prefix or gain `https://`; anything
/// else comes back unchanged.
pub fn format_text_as_url(text: &str) -> String {
    if is_valid_url(text) && !has_http_prefix(text) {
        format!("{HTTPS_PREFIX}{text}")
    } else {
        text.to_string()
    }
}
