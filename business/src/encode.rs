//! QR symbol rendering.
//!
//! Turns an [`EncodingRequest`] into an RGBA pixel surface. Rendering is
//! deterministic: identical requests produce byte-identical buffers, which is
//! what lets the UI cache the surface and re-render only on change.

use image::{Rgba, RgbaImage, imageops};
use qrcode::QrCode;
use serde::{Deserialize, Serialize};

use crate::error::RenderError;
use crate::logo::LogoOverlay;

/// Quiet-zone border around the symbol, in modules (per the QR standard).
const QUIET_ZONE_MODULES: u32 = 4;

/// An opaque RGB color. Kept egui-free so the pipeline stays UI-agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    fn to_rgba(self) -> Rgba<u8> {
        Rgba([self.r, self.g, self.b, 255])
    }
}

/// Everything the renderer needs to draw one symbol.
///
/// `PartialEq` is the change-detection mechanism: the UI compares the request
/// built this frame against the previous one and skips rendering when equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodingRequest {
    /// Payload text. May be empty; an empty payload still encodes to a valid
    /// (degenerate) version-1 symbol.
    pub text: String,
    /// Target edge length of the surface in pixels. Modules are scaled by an
    /// integer factor, so the actual surface may be somewhat smaller.
    pub size: u32,
    /// Module (dark) color.
    pub foreground: Rgb,
    /// Background (light) color.
    pub background: Rgb,
    /// Optional centered logo overlay.
    pub logo: Option<LogoOverlay>,
}

impl EncodingRequest {
    pub fn new(text: impl Into<String>, size: u32) -> Self {
        Self {
            text: text.into(),
            size,
            foreground: Rgb::BLACK,
            background: Rgb::WHITE,
            logo: None,
        }
    }
}

/// The rendered pixel surface. Read-only from the exporter's perspective.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedSurface {
    image: RgbaImage,
}

impl RenderedSurface {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Raw RGBA bytes, row-major, 4 bytes per pixel.
    pub fn as_raw(&self) -> &[u8] {
        self.image.as_raw()
    }

    pub(crate) fn as_image(&self) -> &RgbaImage {
        &self.image
    }
}

/// Render a request into a pixel surface.
///
/// Fails only when the payload exceeds QR capacity (or a logo overlay carries
/// corrupted pixel data); everything else, including empty text, renders.
pub fn render(request: &EncodingRequest) -> Result<RenderedSurface, RenderError> {
    let code = QrCode::new(request.text.as_bytes())?;
    let modules = code.to_colors();
    let module_count = code.width() as u32;
    let total_modules = module_count + 2 * QUIET_ZONE_MODULES;

    // Integer scale so modules stay crisp; never below 1.
    let scale = (request.size / total_modules).max(1);
    let edge = total_modules * scale;

    let mut image = RgbaImage::from_pixel(edge, edge, request.background.to_rgba());
    let foreground = request.foreground.to_rgba();

    for (index, module) in modules.iter().enumerate() {
        if *module != qrcode::Color::Dark {
            continue;
        }
        let mx = (index as u32 % module_count + QUIET_ZONE_MODULES) * scale;
        let my = (index as u32 / module_count + QUIET_ZONE_MODULES) * scale;
        for dy in 0..scale {
            for dx in 0..scale {
                image.put_pixel(mx + dx, my + dy, foreground);
            }
        }
    }

    if let Some(overlay) = &request.logo {
        composite_logo(&mut image, overlay, request.background)?;
    }

    Ok(RenderedSurface { image })
}

/// Draw the logo centered on the surface, optionally knocking out the region
/// beneath it first. Relies on the symbol's error correction to stay scannable.
fn composite_logo(
    surface: &mut RgbaImage,
    overlay: &LogoOverlay,
    background: Rgb,
) -> Result<(), RenderError> {
    let source = overlay.image.to_rgba_image().ok_or_else(|| {
        RenderError::LogoDecode(image::ImageError::Parameter(
            image::error::ParameterError::from_kind(
                image::error::ParameterErrorKind::DimensionMismatch,
            ),
        ))
    })?;

    let edge = surface.width();
    let width = overlay.display_width.min(edge).max(1);
    let height = overlay.display_height.min(edge).max(1);
    let scaled = imageops::resize(&source, width, height, imageops::FilterType::Triangle);

    let x0 = (edge - width) / 2;
    let y0 = (surface.height() - height) / 2;

    if overlay.excavate {
        let clear = background.to_rgba();
        for y in y0..y0 + height {
            for x in x0..x0 + width {
                surface.put_pixel(x, y, clear);
            }
        }
    }

    for (x, y, pixel) in scaled.enumerate_pixels() {
        let dst = surface.get_pixel_mut(x0 + x, y0 + y);
        *dst = blend_over(*pixel, *dst);
    }

    Ok(())
}

/// Standard "source over" alpha blend onto an opaque destination.
fn blend_over(src: Rgba<u8>, dst: Rgba<u8>) -> Rgba<u8> {
    let alpha = u32::from(src.0[3]);
    if alpha == 255 {
        return src;
    }
    if alpha == 0 {
        return dst;
    }
    let mix = |s: u8, d: u8| -> u8 {
        ((u32::from(s) * alpha + u32::from(d) * (255 - alpha)) / 255) as u8
    };
    Rgba([
        mix(src.0[0], dst.0[0]),
        mix(src.0[1], dst.0[1]),
        mix(src.0[2], dst.0[2]),
        255,
    ])
}
