//! The single form that drives the whole application: text input, live QR
//! preview, export controls, and the optional copy/customization actions.

use egui::{Color32, Frame, Margin, RichText, Ui};
use qrstudio_business::{ExportFormat, render};

use crate::app::FeatureSet;
use crate::state::State;
use crate::utils::clipboard;
use crate::widgets::{options_panel, perform_export};

/// Border color for the preview frame (subtle gray).
const PREVIEW_BORDER_COLOR: Color32 = Color32::from_rgb(200, 200, 200);

/// Re-render the preview if the form fields changed since the last frame.
///
/// On failure the previous surface is kept and the error is recorded for
/// inline display, so a too-long payload never blanks the preview.
pub fn sync_preview(state: &mut State, ctx: &egui::Context) {
    let request = state.encoding_request();
    if state.last_request.as_ref() == Some(&request) {
        return;
    }

    match render(&request) {
        Ok(surface) => {
            let color_image = egui::ColorImage::from_rgba_unmultiplied(
                [surface.width() as usize, surface.height() as usize],
                surface.as_raw(),
            );
            state.qr_texture = Some(ctx.load_texture(
                "qr_preview",
                color_image,
                egui::TextureOptions::NEAREST,
            ));
            state.surface = Some(surface);
            state.render_error = None;
        }
        Err(e) => {
            log::warn!("render failed: {e}");
            state.render_error = Some(e.to_string());
        }
    }
    state.last_request = Some(request);
}

/// Render the generator form. `features` selects which optional actions
/// (copy button, customization panel) are present.
pub fn generator_form(state: &mut State, features: FeatureSet, ui: &mut Ui) {
    sync_preview(state, ui.ctx());

    ui.label("Text or URL");
    ui.text_edit_singleline(&mut state.text);

    ui.add_space(8.0);

    if !state.title.is_empty() {
        ui.vertical_centered(|ui| {
            ui.heading(&state.title);
        });
    }

    preview(state, ui);

    if let Some(error) = &state.render_error {
        ui.colored_label(Color32::RED, format!("Error: {error}"));
    }

    ui.add_space(8.0);

    ui.label("File Name");
    ui.text_edit_singleline(&mut state.file_name);

    ui.add_space(4.0);

    egui::ComboBox::from_label("Format")
        .selected_text(state.format.label())
        .show_ui(ui, |ui| {
            for format in ExportFormat::ALL {
                ui.selectable_value(&mut state.format, format, format.label());
            }
        });

    ui.add_space(8.0);

    let mut options_toggled = false;
    ui.horizontal(|ui| {
        if ui.button("Download QR Code").clicked() {
            perform_export(state);
        }

        if features.copy_button && ui.button("Copy Text").clicked() {
            clipboard::copy_text(&state.text);
        }

        if features.customization_panel {
            let label = if state.options_open {
                "Customize ▴"
            } else {
                "Customize ▾"
            };
            if ui.button(label).clicked() {
                state.options_open = !state.options_open;
                options_toggled = true;
            }
        }
    });

    if features.customization_panel && state.options_open {
        ui.add_space(4.0);
        options_panel(state, options_toggled, ui);
    }
}

/// The preview box: white frame around the QR texture so custom background
/// colors read against the panel.
fn preview(state: &State, ui: &mut Ui) {
    Frame::NONE
        .fill(Color32::WHITE)
        .stroke(egui::Stroke::new(1.0, PREVIEW_BORDER_COLOR))
        .inner_margin(Margin::same(8))
        .corner_radius(4.0)
        .show(ui, |ui| {
            if let Some(texture) = &state.qr_texture {
                ui.image(texture);
            } else {
                ui.label(RichText::new("rendering…").small());
            }
        });
}
