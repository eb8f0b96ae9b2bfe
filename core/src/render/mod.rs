//! Adapter to the QR symbol encoder
//!
//! Encoding itself is delegated to the `qrcode` crate; this module only turns
//! its module grid into a colored bitmap of the requested size.

use std::io::Cursor;

use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use qrcode::{Color, QrCode};

use crate::constants::{DEFAULT_SIZE, QUIET_ZONE_MODULES};
use crate::export::png_data_url;
use crate::style::{validate_size, ErrorCorrectionLevel, HexColor};
use crate::{Error, Result};

const LIGHT: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Everything the encoder needs to draw one QR code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRequest {
    pub value: String,
    pub size: u32,
    pub fg_color: HexColor,
    pub level: ErrorCorrectionLevel,
}

impl RenderRequest {
    /// Create a request with default styling
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            size: DEFAULT_SIZE,
            fg_color: HexColor::default(),
            level: ErrorCorrectionLevel::default(),
        }
    }

    /// Encode the value and return the module grid, quiet zone included
    pub fn matrix(&self) -> Result<QrMatrix> {
        if self.value.is_empty() {
            return Err(Error::Encode("cannot encode an empty value".to_string()));
        }

        let code = QrCode::with_error_correction_level(self.value.as_bytes(), self.level.into())
            .map_err(|e| Error::Encode(e.to_string()))?;

        Ok(QrMatrix::with_quiet_zone(code.width(), &code.to_colors()))
    }

    /// Draw the code as a `size`×`size` bitmap.
    ///
    /// Every module gets at least one pixel; a symbol wider than `size`
    /// modules is rejected rather than drawn unscannable.
    pub fn render_image(&self) -> Result<RgbaImage> {
        let size = validate_size(self.size)?;
        let matrix = self.matrix()?;
        let [r, g, b] = self.fg_color.rgb();
        let dark = Rgba([r, g, b, 255]);
        let modules = matrix.width() as u64;

        if modules > size as u64 {
            return Err(Error::Encode(format!(
                "{modules} modules do not fit in {size}px, use a larger size or shorter content"
            )));
        }

        let image = RgbaImage::from_fn(size, size, |x, y| {
            let mx = (x as u64 * modules / size as u64) as usize;
            let my = (y as u64 * modules / size as u64) as usize;
            if matrix.is_dark(mx, my) {
                dark
            } else {
                LIGHT
            }
        });

        tracing::debug!(
            "rendered {}x{} qr code ({} modules, level {})",
            size,
            size,
            modules,
            self.level
        );
        Ok(image)
    }

    /// Draw the code and encode it as PNG
    pub fn to_png(&self) -> Result<Vec<u8>> {
        let image = self.render_image()?;
        let mut png = Vec::new();
        DynamicImage::ImageRgba8(image).write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;
        Ok(png)
    }

    /// Draw the code and wrap the PNG in a `data:` URL
    pub fn to_data_url(&self) -> Result<String> {
        Ok(png_data_url(&self.to_png()?))
    }
}

/// Square grid of QR modules
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrMatrix {
    width: usize,
    dark: Vec<bool>,
}

impl QrMatrix {
    fn with_quiet_zone(symbol_width: usize, colors: &[Color]) -> Self {
        let width = symbol_width + 2 * QUIET_ZONE_MODULES;
        let mut dark = vec![false; width * width];

        for (y, row) in colors.chunks(symbol_width).enumerate() {
            for (x, color) in row.iter().enumerate() {
                let idx = (y + QUIET_ZONE_MODULES) * width + x + QUIET_ZONE_MODULES;
                dark[idx] = *color == Color::Dark;
            }
        }

        Self { width, dark }
    }

    /// Modules per side
    pub fn width(&self) -> usize {
        self.width
    }

    /// Out-of-range coordinates read as light
    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.width && self.dark[y * self.width + x]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_has_requested_size() {
        for size in [100, 210, 300] {
            let request = RenderRequest { size, ..RenderRequest::new("https://example.com") };
            let image = request.render_image().unwrap();
            assert_eq!(image.dimensions(), (size, size));
        }
    }

    #[test]
    fn test_quiet_zone_is_light_and_finder_uses_fg() {
        let request = RenderRequest {
            fg_color: "#EF4444".parse().unwrap(),
            ..RenderRequest::new("hello")
        };
        let matrix = request.matrix().unwrap();
        assert!(!matrix.is_dark(0, 0));
        // Top-left corner of the finder pattern
        assert!(matrix.is_dark(QUIET_ZONE_MODULES, QUIET_ZONE_MODULES));

        let image = request.render_image().unwrap();
        assert_eq!(*image.get_pixel(0, 0), LIGHT);

        let modules = matrix.width() as u32;
        let finder_px = (QUIET_ZONE_MODULES as u32 * request.size).div_ceil(modules);
        assert_eq!(*image.get_pixel(finder_px, finder_px), Rgba([0xEF, 0x44, 0x44, 255]));
    }

    #[test]
    fn test_higher_level_needs_more_modules() {
        let value = "https://example.com/some/longer/path?with=query&and=more";
        let low = RenderRequest { level: ErrorCorrectionLevel::L, ..RenderRequest::new(value) };
        let high = RenderRequest { level: ErrorCorrectionLevel::H, ..RenderRequest::new(value) };
        assert!(high.matrix().unwrap().width() > low.matrix().unwrap().width());
    }

    #[test]
    fn test_dense_payload_too_wide_for_size() {
        let value = "a".repeat(1500);
        let request = RenderRequest { size: 100, ..RenderRequest::new(value) };
        assert!(request.matrix().unwrap().width() > 100);
        assert!(matches!(request.render_image(), Err(Error::Encode(_))));
        assert!(request.to_png().is_err());
    }

    #[test]
    fn test_dense_payload_keeps_every_module() {
        let request = RenderRequest { size: 300, ..RenderRequest::new("a".repeat(1500)) };
        let matrix = request.matrix().unwrap();
        let image = request.render_image().unwrap();
        let [r, g, b] = request.fg_color.rgb();
        let dark = Rgba([r, g, b, 255]);
        let modules = matrix.width() as u32;

        // Each module's first pixel carries that module's color
        for m in 0..modules {
            let px = (m * request.size).div_ceil(modules);
            for row in 0..modules {
                let py = (row * request.size).div_ceil(modules);
                let expected = if matrix.is_dark(m as usize, row as usize) { dark } else { LIGHT };
                assert_eq!(*image.get_pixel(px, py), expected, "module ({m}, {row})");
            }
        }
    }

    #[test]
    fn test_blank_sentinel_encodes() {
        assert!(RenderRequest::new(" ").to_png().is_ok());
    }

    #[test]
    fn test_empty_value_rejected() {
        assert!(matches!(RenderRequest::new("").matrix(), Err(Error::Encode(_))));
    }

    #[test]
    fn test_size_out_of_range_rejected() {
        let request = RenderRequest { size: 50, ..RenderRequest::new("x") };
        assert!(matches!(request.render_image(), Err(Error::InvalidSize(50))));
    }

    #[test]
    fn test_png_signature_and_data_url() {
        let request = RenderRequest::new("example");
        let png = request.to_png().unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
        assert!(request.to_data_url().unwrap().starts_with("data:image/png;base64,"));
    }
}
