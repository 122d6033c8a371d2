//! Logo overlay data structures and decoding.
//!
//! A logo is decoded once into raw RGBA bytes so that an [`EncodingRequest`]
//! stays a plain, comparable value — the renderer re-runs only when the
//! request actually changed.
//!
//! [`EncodingRequest`]: crate::encode::EncodingRequest

use image::RgbaImage;
use serde::{Deserialize, Serialize};

use crate::error::RenderError;

/// Decoded logo pixels in RGBA format (4 bytes per pixel).
///
/// Source-agnostic: the bytes may come from a local file or an HTTP fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoImage {
    /// Width of the decoded image in pixels.
    pub width: u32,
    /// Height of the decoded image in pixels.
    pub height: u32,
    /// Raw RGBA bytes, `width * height * 4` long.
    pub rgba: Vec<u8>,
}

impl LogoImage {
    /// Reconstruct an `image` buffer from the raw bytes.
    ///
    /// Returns `None` if the byte length does not match the dimensions,
    /// which would indicate a corrupted overlay.
    pub(crate) fn to_rgba_image(&self) -> Option<RgbaImage> {
        RgbaImage::from_raw(self.width, self.height, self.rgba.clone())
    }
}

/// A logo placed at the center of the rendered symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoOverlay {
    /// The decoded source image.
    pub image: LogoImage,
    /// Width the logo is drawn at, in surface pixels.
    pub display_width: u32,
    /// Height the logo is drawn at, in surface pixels.
    pub display_height: u32,
    /// Clear the region beneath the logo to the background color so the
    /// overlay sits on a blank "knockout" area instead of on modules.
    pub excavate: bool,
}

/// Decode arbitrary image bytes (PNG, JPEG, WebP, ...) into a [`LogoImage`].
pub fn decode_logo(bytes: &[u8]) -> Result<LogoImage, RenderError> {
    let decoded = image::load_from_memory(bytes)?.to_rgba8();
    let (width, height) = decoded.dimensions();
    log::debug!("decoded logo image: {width}x{height}");
    Ok(LogoImage {
        width,
        height,
        rgba: decoded.into_raw(),
    })
}
