//! The customization disclosure panel.
//!
//! Open/Closed is a two-state machine owned by [`State::options_open`]: the
//! toggle button flips it, and while open a click anywhere outside the
//! panel's bounding region closes it. The outside-click check uses
//! `Response::clicked_elsewhere`, which only exists on frames where the panel
//! is rendered — nothing is left listening once the panel closes.
//!
//! [`State::options_open`]: crate::state::State::options_open

use egui::{Frame, Ui};

use crate::state::State;
use crate::utils::logo_fetch::request_logo;

/// Render the open panel. Callers gate on `state.options_open` and pass
/// `just_toggled` on the frame the toggle button was pressed, since that
/// press would otherwise register as an outside click and close the panel
/// the moment it opens.
pub fn options_panel(state: &mut State, just_toggled: bool, ui: &mut Ui) {
    let inner = Frame::group(ui.style()).show(ui, |ui| {
        ui.label("Title");
        ui.text_edit_singleline(&mut state.title);

        ui.label("Logo URL");
        let logo_response = ui.text_edit_singleline(&mut state.logo_url);
        if logo_response.lost_focus() {
            if state.logo_url.trim().is_empty() {
                state.logo = None;
            } else {
                request_logo(&state.logo_url, state.logo_sender.clone(), ui.ctx().clone());
            }
        }

        ui.horizontal(|ui| {
            ui.label("Foreground");
            ui.color_edit_button_srgba(&mut state.foreground);
            ui.label("Background");
            ui.color_edit_button_srgba(&mut state.background);
        });
    });

    if !just_toggled && inner.response.clicked_elsewhere() {
        state.options_open = false;
    }
}
