mod export;
mod generator_form;
mod options_panel;

pub use export::perform_export;
pub use generator_form::{generator_form, sync_preview};
pub use options_panel::options_panel;
