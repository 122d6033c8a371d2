//! Error types for the rendering and export pipeline.

use thiserror::Error;

/// Errors produced while turning an encoding request into a pixel surface.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The `qrcode` crate rejected the payload (e.g. over capacity).
    #[error("QR encoding failed: {0}")]
    Encode(#[from] qrcode::types::QrError),

    /// The logo bytes could not be decoded as an image.
    #[error("logo image decode failed: {0}")]
    LogoDecode(#[from] image::ImageError),
}

/// Errors produced while encoding or writing an exported image.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("image encoding failed: {0}")]
    Encode(#[from] image::ImageError),

    #[error("failed to write exported file: {0}")]
    Io(#[from] std::io::Error),
}
