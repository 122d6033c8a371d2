#![warn(clippy::all, rust_2018_idioms)]

//! UI-free pipeline for QR Studio: symbol rendering and image export.
//!
//! The `ui` crate owns all egui/eframe concerns; everything here operates on
//! plain pixel buffers so it can be tested without a window or a GPU.

pub mod encode;
pub mod error;
pub mod export;
pub mod logo;

pub use encode::{EncodingRequest, RenderedSurface, Rgb, render};
pub use error::{ExportError, RenderError};
pub use export::{ExportFormat, ExportRequest, encode_surface, export_file_name, write_export};
pub use logo::{LogoImage, LogoOverlay, decode_logo};
