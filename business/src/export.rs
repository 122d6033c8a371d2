//! Image export: format selection, in-memory encoding, file writing.
//!
//! The save dialog lives in the UI; everything here is dialog-free so the
//! export pipeline can be exercised directly in tests.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat};
use serde::{Deserialize, Serialize};

use crate::encode::RenderedSurface;
use crate::error::ExportError;

/// Output raster format for an exported symbol.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportFormat {
    /// Lossless raster, the fallback for anything unrecognized.
    #[default]
    Png,
    /// Lossy raster. Alpha is flattened before encoding.
    Jpg,
    /// Modern raster (lossless WebP).
    Webp,
}

impl ExportFormat {
    pub const ALL: [Self; 3] = [Self::Png, Self::Jpg, Self::Webp];

    /// Parse a user-facing label. Unrecognized labels fall back to PNG
    /// rather than failing.
    pub fn parse_or_default(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Self::Jpg,
            "webp" => Self::Webp,
            _ => Self::Png,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpg => "jpg",
            Self::Webp => "webp",
        }
    }

    pub fn mime(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpg => "image/jpeg",
            Self::Webp => "image/webp",
        }
    }

    /// Uppercase label for display in the format picker.
    pub fn label(self) -> &'static str {
        match self {
            Self::Png => "PNG",
            Self::Jpg => "JPG",
            Self::Webp => "WEBP",
        }
    }

    fn image_format(self) -> ImageFormat {
        match self {
            Self::Png => ImageFormat::Png,
            Self::Jpg => ImageFormat::Jpeg,
            Self::Webp => ImageFormat::WebP,
        }
    }
}

/// What the user asked the exporter to produce.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRequest {
    /// Base file name without extension. May be empty; the exported file then
    /// has an empty base name (e.g. ".png"), matching the permissive input
    /// handling elsewhere.
    pub file_name: String,
    pub format: ExportFormat,
}

/// `"{base}.{ext}"` for the chosen format.
pub fn export_file_name(base: &str, format: ExportFormat) -> String {
    format!("{base}.{}", format.extension())
}

/// Encode the surface into the requested format in memory.
pub fn encode_surface(
    surface: &RenderedSurface,
    format: ExportFormat,
) -> Result<Vec<u8>, ExportError> {
    let mut buffer = Cursor::new(Vec::new());
    match format {
        // The JPEG encoder rejects RGBA input, so flatten first. The surface
        // is fully opaque, making this a straight channel drop.
        ExportFormat::Jpg => {
            let rgb = DynamicImage::ImageRgba8(surface.as_image().clone()).to_rgb8();
            rgb.write_to(&mut buffer, ImageFormat::Jpeg)?;
        }
        _ => surface.as_image().write_to(&mut buffer, format.image_format())?,
    }
    Ok(buffer.into_inner())
}

/// Encode and write the export into `dir`, returning the written path.
pub fn write_export(
    surface: &RenderedSurface,
    request: &ExportRequest,
    dir: &Path,
) -> Result<PathBuf, ExportError> {
    let bytes = encode_surface(surface, request.format)?;
    let path = dir.join(export_file_name(&request.file_name, request.format));
    std::fs::write(&path, &bytes)?;
    log::info!(
        "exported {} ({} bytes, {})",
        path.display(),
        bytes.len(),
        request.format.mime()
    );
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::{EncodingRequest, render};

    fn test_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("qrstudio-export-{name}-{}", std::process::id()));
        std::fs::create_dir_all(&dir).expect("creating temp export dir should not fail");
        dir
    }

    fn surface(text: &str) -> RenderedSurface {
        render(&EncodingRequest::new(text, 200)).expect("render should succeed")
    }

    #[test]
    fn labels_parse_with_png_fallback() {
        assert_eq!(ExportFormat::parse_or_default("jpg"), ExportFormat::Jpg);
        assert_eq!(ExportFormat::parse_or_default("JPEG"), ExportFormat::Jpg);
        assert_eq!(ExportFormat::parse_or_default("webp"), ExportFormat::Webp);
        assert_eq!(ExportFormat::parse_or_default("png"), ExportFormat::Png);
        assert_eq!(ExportFormat::parse_or_default("tiff"), ExportFormat::Png);
        assert_eq!(ExportFormat::parse_or_default(""), ExportFormat::Png);
    }

    #[test]
    fn file_names_carry_the_format_extension() {
        assert_eq!(export_file_name("qrcode", ExportFormat::Png), "qrcode.png");
        assert_eq!(export_file_name("qrcode", ExportFormat::Jpg), "qrcode.jpg");
        assert_eq!(export_file_name("qrcode", ExportFormat::Webp), "qrcode.webp");
        // Empty base name degrades to a bare extension, not an error.
        assert_eq!(export_file_name("", ExportFormat::Webp), ".webp");
    }

    #[test]
    fn png_bytes_carry_png_magic() {
        let bytes = encode_surface(&surface("Hello, world!"), ExportFormat::Png)
            .expect("PNG encoding should succeed");
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn jpg_bytes_carry_jfif_magic() {
        let bytes = encode_surface(&surface("Hello, world!"), ExportFormat::Jpg)
            .expect("JPEG encoding should succeed");
        assert_eq!(&bytes[..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn webp_bytes_carry_riff_magic() {
        let bytes = encode_surface(&surface("Hello, world!"), ExportFormat::Webp)
            .expect("WebP encoding should succeed");
        assert_eq!(&bytes[..4], b"RIFF");
        assert_eq!(&bytes[8..12], b"WEBP");
    }

    #[test]
    fn exported_png_decodes_back_to_the_surface() {
        let rendered = surface("Hello, world!");
        let dir = test_dir("roundtrip");
        let request = ExportRequest {
            file_name: "qrcode".into(),
            format: ExportFormat::Png,
        };
        let path = write_export(&rendered, &request, &dir).expect("export should succeed");
        assert_eq!(path.file_name().and_then(|n| n.to_str()), Some("qrcode.png"));

        let bytes = std::fs::read(&path).expect("exported file should be readable");
        let decoded = image::load_from_memory(&bytes)
            .expect("exported PNG should decode")
            .to_rgba8();
        assert_eq!(decoded.as_raw().as_slice(), rendered.as_raw());
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn empty_text_and_name_export_as_bare_webp() {
        let rendered = surface("");
        let dir = test_dir("degenerate");
        let request = ExportRequest {
            file_name: String::new(),
            format: ExportFormat::Webp,
        };
        let path = write_export(&rendered, &request, &dir).expect("export should succeed");
        assert_eq!(path.file_name().and_then(|n| n.to_str()), Some(".webp"));
        assert!(std::fs::metadata(&path).expect("file should exist").len() > 0);
        std::fs::remove_dir_all(&dir).ok();
    }
}
