//! Shared helpers for the UI integration tests.

#![allow(dead_code)]

use std::path::PathBuf;

use egui_kittest::Harness;
use qrstudio_ui::state::State;
use qrstudio_ui::{FeatureSet, QrStudioApp};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Harness around the real app with the given feature set.
pub fn new_harness(features: FeatureSet) -> Harness<'static, QrStudioApp> {
    init_logging();
    let app = QrStudioApp::new(State::default(), features);
    Harness::new_eframe(|_| app)
}

/// Harness whose exports bypass the save dialog and land in `export_dir`.
pub fn new_harness_with_export_dir(
    features: FeatureSet,
    export_dir: PathBuf,
) -> Harness<'static, QrStudioApp> {
    init_logging();
    let app = QrStudioApp::new(State::test(export_dir), features);
    Harness::new_eframe(|_| app)
}

/// Run a few frames so state changes propagate through render and layout.
pub fn settle(harness: &mut Harness<'_, QrStudioApp>) {
    for _ in 0..5 {
        harness.step();
    }
}

/// Fresh per-test temp directory for export output.
pub fn temp_export_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("qrstudio-ui-{name}-{}", std::process::id()));
    std::fs::remove_dir_all(&dir).ok();
    std::fs::create_dir_all(&dir).expect("creating the temp export dir should not fail");
    dir
}
