//! Integration tests for the customization panel's open/close behavior.

mod common;

use common::{new_harness, settle};
use kittest::Queryable;
use qrstudio_ui::FeatureSet;

#[test]
fn panel_starts_closed() {
    let mut harness = new_harness(FeatureSet::with_customization());
    settle(&mut harness);

    assert!(!harness.state().state.options_open);
    assert!(harness.query_by_label("Logo URL").is_none());
    harness.get_by_label("Customize ▾");
}

#[test]
fn toggle_press_opens_the_panel() {
    let mut harness = new_harness(FeatureSet::with_customization());
    settle(&mut harness);

    harness.get_by_label("Customize ▾").click();
    settle(&mut harness);

    assert!(harness.state().state.options_open);
    harness.get_by_label("Title");
    harness.get_by_label("Logo URL");
    harness.get_by_label("Foreground");
    harness.get_by_label("Background");
}

#[test]
fn toggle_press_while_open_closes_the_panel() {
    let mut harness = new_harness(FeatureSet::with_customization());
    harness.state_mut().state.options_open = true;
    settle(&mut harness);

    harness.get_by_label("Customize ▴").click();
    settle(&mut harness);

    assert!(!harness.state().state.options_open);
}

#[test]
fn click_outside_the_panel_closes_it() {
    let mut harness = new_harness(FeatureSet::with_customization());
    harness.state_mut().state.options_open = true;
    settle(&mut harness);

    // The text label sits well outside the panel's bounding region.
    harness.get_by_label("Text or URL").click();
    settle(&mut harness);

    assert!(!harness.state().state.options_open);
}

#[test]
fn click_inside_the_panel_keeps_it_open() {
    let mut harness = new_harness(FeatureSet::with_customization());
    harness.state_mut().state.options_open = true;
    settle(&mut harness);

    harness.get_by_label("Title").click();
    settle(&mut harness);

    assert!(harness.state().state.options_open);
}

#[test]
fn panel_edits_feed_the_preview() {
    let mut harness = new_harness(FeatureSet::with_customization());
    harness.state_mut().state.options_open = true;
    settle(&mut harness);
    let initial = harness
        .state()
        .state
        .surface
        .clone()
        .expect("initial surface should exist");

    harness.state_mut().state.foreground = egui::Color32::from_rgb(180, 20, 20);
    settle(&mut harness);

    let recolored = harness
        .state()
        .state
        .surface
        .clone()
        .expect("recolored surface should exist");
    assert_ne!(initial.as_raw(), recolored.as_raw());
}
