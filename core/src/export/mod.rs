//! Saving rendered QR codes to disk

use std::path::{Path, PathBuf};

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

use crate::constants::DOWNLOAD_EXTENSION;
use crate::{Error, Result};

const PNG_DATA_URL_PREFIX: &str = "data:image/png;base64,";

/// Wrap PNG bytes in a `data:` URL
pub fn png_data_url(png: &[u8]) -> String {
    format!("{PNG_DATA_URL_PREFIX}{}", BASE64.encode(png))
}

/// Decode the payload of a base64 `data:` URL
pub fn decode_data_url(data_url: &str) -> Result<Vec<u8>> {
    let rest = data_url
        .strip_prefix("data:")
        .ok_or_else(|| Error::DataUrl("missing data: scheme".to_string()))?;
    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| Error::DataUrl("missing payload separator".to_string()))?;

    if !header.ends_with(";base64") {
        return Err(Error::DataUrl("payload is not base64".to_string()));
    }

    BASE64
        .decode(payload)
        .map_err(|e| Error::DataUrl(e.to_string()))
}

/// Where downloads land when no directory is configured
pub fn default_download_dir() -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// Write the image behind `data_url` to `<dir>/<filename>.png`
pub fn download(data_url: &str, dir: &Path, filename: &str) -> Result<PathBuf> {
    let bytes = decode_data_url(data_url)?;
    let path = dir.join(format!("{filename}.{DOWNLOAD_EXTENSION}"));

    std::fs::create_dir_all(dir)?;
    std::fs::write(&path, bytes)?;

    tracing::info!("saved qr code to {}", path.display());
    Ok(path)
}
