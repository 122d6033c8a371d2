//! The export action behind the download button.

use qrstudio_business::{ExportRequest, export_file_name, write_export};

use crate::state::State;

/// Export the current surface as an image file.
///
/// With no rendered surface this is a silent no-op: no dialog, no file, no
/// error. Normally the destination comes from a native save dialog pre-filled
/// with `"{file_name}.{ext}"`; when `state.export_dir` is set (tests) the file
/// is written there directly.
pub fn perform_export(state: &mut State) {
    let Some(surface) = &state.surface else {
        log::debug!("export requested with no rendered surface; ignoring");
        return;
    };

    let request = ExportRequest {
        file_name: state.file_name.clone(),
        format: state.format,
    };

    if let Some(dir) = &state.export_dir {
        if let Err(e) = write_export(surface, &request, dir) {
            log::error!("export failed: {e}");
        }
        return;
    }

    save_via_dialog(state, &request);
}

#[cfg(not(target_arch = "wasm32"))]
fn save_via_dialog(state: &State, request: &ExportRequest) {
    use qrstudio_business::encode_surface;

    let Some(surface) = &state.surface else {
        return;
    };

    let suggested = export_file_name(&request.file_name, request.format);
    let Some(path) = rfd::FileDialog::new()
        .set_title("Save QR code")
        .set_file_name(&suggested)
        .add_filter(request.format.label(), &[request.format.extension()])
        .save_file()
    else {
        log::debug!("export cancelled in the save dialog");
        return;
    };

    match encode_surface(surface, request.format) {
        Ok(bytes) => {
            if let Err(e) = std::fs::write(&path, &bytes) {
                log::error!("failed to write {}: {e}", path.display());
            } else {
                log::info!("exported {} ({} bytes)", path.display(), bytes.len());
            }
        }
        Err(e) => log::error!("export encoding failed: {e}"),
    }
}

#[cfg(target_arch = "wasm32")]
fn save_via_dialog(_state: &State, request: &ExportRequest) {
    log::warn!(
        "file export is not available on web (wanted {})",
        export_file_name(&request.file_name, request.format)
    );
}
