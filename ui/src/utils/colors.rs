//! Conversions between egui colors and the pipeline's UI-agnostic color type.

use egui::Color32;
use qrstudio_business::Rgb;

pub fn color32_to_rgb(color: Color32) -> Rgb {
    Rgb::new(color.r(), color.g(), color.b())
}

pub fn rgb_to_color32(color: Rgb) -> Color32 {
    Color32::from_rgb(color.r, color.g, color.b)
}
