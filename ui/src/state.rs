use std::path::PathBuf;

use egui::{Color32, TextureHandle};
use flume::{Receiver, Sender};
use qrstudio_business::{EncodingRequest, ExportFormat, LogoImage, LogoOverlay, RenderedSurface};

use crate::utils::colors::color32_to_rgb;
use crate::utils::logo_fetch::LogoFetchResult;

/// Edge length the preview symbol is rendered at, in pixels.
pub const QR_PREVIEW_SIZE: u32 = 200;

/// Edge length the center logo is drawn at, in pixels.
pub const LOGO_DISPLAY_SIZE: u32 = 30;

/// The main application state.
///
/// Note: we manually implement Default because the logo fetch channel
/// doesn't implement Default.
pub struct State {
    /// Payload text entered by the user. May be empty.
    pub text: String,
    /// Export base file name (no extension). May be empty.
    pub file_name: String,
    /// Selected export format.
    pub format: ExportFormat,
    /// Optional title shown above the preview (customization panel).
    pub title: String,
    /// Logo source: an http(s) URL or a local file path.
    pub logo_url: String,
    /// Decoded logo, once a fetch/load succeeded.
    pub logo: Option<LogoImage>,
    /// Knock out the region beneath the logo.
    pub excavate: bool,
    /// Module (dark) color.
    pub foreground: Color32,
    /// Background (light) color.
    pub background: Color32,
    /// Whether the customization panel is open.
    pub options_open: bool,
    /// Last render failure, shown inline under the preview.
    pub render_error: Option<String>,
    /// Request the current surface/texture were rendered from.
    pub last_request: Option<EncodingRequest>,
    /// Current rendered surface; the exporter reads this.
    pub surface: Option<RenderedSurface>,
    /// Preview texture uploaded from the surface.
    pub qr_texture: Option<TextureHandle>,
    /// Sender for logo fetch results.
    pub logo_sender: Sender<LogoFetchResult>,
    /// Receiver for logo fetch results, drained each frame.
    pub logo_receiver: Receiver<LogoFetchResult>,
    /// When set, exports are written here without showing a save dialog.
    pub export_dir: Option<PathBuf>,
}

impl Default for State {
    fn default() -> Self {
        let (logo_sender, logo_receiver) = flume::unbounded();

        Self {
            text: String::new(),
            file_name: String::new(),
            format: ExportFormat::default(),
            title: String::new(),
            logo_url: String::new(),
            logo: None,
            excavate: true,
            foreground: Color32::BLACK,
            background: Color32::WHITE,
            options_open: false,
            render_error: None,
            last_request: None,
            surface: None,
            qr_texture: None,
            logo_sender,
            logo_receiver,
            export_dir: None,
        }
    }
}

impl State {
    /// State for integration tests: exports bypass the save dialog and land
    /// in `export_dir`.
    pub fn test(export_dir: PathBuf) -> Self {
        Self {
            export_dir: Some(export_dir),
            ..Self::default()
        }
    }

    /// Snapshot the form fields into the renderer's input.
    pub fn encoding_request(&self) -> EncodingRequest {
        EncodingRequest {
            text: self.text.clone(),
            size: QR_PREVIEW_SIZE,
            foreground: color32_to_rgb(self.foreground),
            background: color32_to_rgb(self.background),
            logo: self.logo.as_ref().map(|image| LogoOverlay {
                image: image.clone(),
                display_width: LOGO_DISPLAY_SIZE,
                display_height: LOGO_DISPLAY_SIZE,
                excavate: self.excavate,
            }),
        }
    }
}
