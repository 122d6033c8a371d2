#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use qrstudio_ui::state::State;
use qrstudio_ui::{FeatureSet, QrStudioApp};

fn main() -> eframe::Result {
    // Log to stderr (if you run with `RUST_LOG=debug`).
    env_logger::Builder::from_env(env_logger::Env::default()).init();

    let features = features_from_args();
    log::info!("starting with features: {features:?}");

    let native_options = eframe::NativeOptions {
        hardware_acceleration: eframe::HardwareAcceleration::Preferred,
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 560.0])
            .with_min_inner_size([320.0, 420.0]),
        ..Default::default()
    };

    eframe::run_native(
        "QR Studio",
        native_options,
        Box::new(move |_cc| {
            let app = QrStudioApp::new(State::default(), features);
            Ok(Box::new(app))
        }),
    )
}

/// Pick the form variant from the command line. The default is the full
/// feature set; `basic` and `copy` reproduce the leaner variants.
fn features_from_args() -> FeatureSet {
    match std::env::args().nth(1).as_deref() {
        Some("basic") => FeatureSet::basic(),
        Some("copy") => FeatureSet::with_copy(),
        Some("customize") => FeatureSet::with_customization(),
        Some(other) => {
            log::warn!("unknown variant {other:?}; using the full feature set");
            FeatureSet::full()
        }
        None => FeatureSet::full(),
    }
}
