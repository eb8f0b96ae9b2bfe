//! Minimal vCard 3.0 serialization for contact payloads

use serde::{Deserialize, Serialize};

use crate::Result;

/// Contact details entered in contact mode
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub organization: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl ContactInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Self::default() }
    }

    /// Load a contact card from JSON
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

fn property(key: &str, value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .map(|v| format!("{key}:{v}"))
}

/// Serialize a contact as a vCard.
///
/// `FN` is always emitted, even when the name is empty. Optional fields
/// that are absent or empty are left out entirely.
pub fn generate_vcard(contact: &ContactInfo) -> String {
    let mut lines = vec![
        "BEGIN:VCARD".to_string(),
        "VERSION:3.0".to_string(),
        format!("FN:{}", contact.name),
    ];

    lines.extend(
        [
            property("TEL", &contact.phone),
            property("EMAIL", &contact.email),
            property("ORG", &contact.organization),
            property("URL", &contact.url),
        ]
        .into_iter()
        .flatten(),
    );

    lines.push("END:VCARD".to_string());
    lines.join("\n")
}
