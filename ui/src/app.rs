use serde::{Deserialize, Serialize};

use crate::utils::logo_fetch::LogoFetchResult;
use crate::{state::State, widgets};

/// Which optional actions the form carries.
///
/// One form serves every variant: plain, with a copy button, or with the
/// customization panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureSet {
    /// Show a "Copy Text" button next to the export button.
    pub copy_button: bool,
    /// Show the customization disclosure panel (title, logo, colors).
    pub customization_panel: bool,
}

impl FeatureSet {
    /// Text input, preview, export. Nothing else.
    pub fn basic() -> Self {
        Self::default()
    }

    pub fn with_copy() -> Self {
        Self {
            copy_button: true,
            ..Self::default()
        }
    }

    pub fn with_customization() -> Self {
        Self {
            customization_panel: true,
            ..Self::default()
        }
    }

    pub fn full() -> Self {
        Self {
            copy_button: true,
            customization_panel: true,
        }
    }
}

pub struct QrStudioApp {
    pub state: State,
    pub features: FeatureSet,
}

impl QrStudioApp {
    /// Called once before the first frame.
    pub fn new(state: State, features: FeatureSet) -> Self {
        Self { state, features }
    }

    /// Apply logo fetch results delivered since the last frame.
    fn drain_logo_results(&mut self) {
        for result in self.state.logo_receiver.try_iter() {
            match result {
                LogoFetchResult::Loaded(image) => {
                    log::info!("logo loaded: {}x{}", image.width, image.height);
                    self.state.logo = Some(image);
                }
                LogoFetchResult::Failed { source, reason } => {
                    log::warn!("logo load failed for {source}: {reason}");
                }
            }
        }
    }
}

impl eframe::App for QrStudioApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_logo_results();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("QR Code Generator");
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            widgets::generator_form(&mut self.state, self.features, ui);
            ui.add_space(12.0);
            powered_by_egui_and_eframe(ui);
        });
    }
}

fn powered_by_egui_and_eframe(ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        ui.label("Powered by ");
        ui.hyperlink_to("egui", "https://github.com/emilk/egui");
        ui.label(" and ");
        ui.hyperlink_to(
            "eframe",
            "https://github.com/emilk/egui/tree/master/crates/eframe",
        );
        ui.label(".");
    });
}
