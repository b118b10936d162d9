use huewheel::{ColorState, Rgb};
use palette::FromColor;

pub type Color = [f32; 4];

/// 0-360, 0-1, 0-1, 0-1
pub fn hsla(h: f32, s: f32, l: f32, a: f32) -> Color {
    let converted = palette::rgb::Rgb::from_color(palette::Hsl::new(h, s, l)).into_components();
    [converted.0, converted.1, converted.2, a]
}

pub fn rgba(r: u8, g: u8, b: u8, a: f32) -> Color {
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a]
}

pub fn from_rgb(rgb: Rgb, a: f32) -> Color {
    rgba(rgb.r, rgb.g, rgb.b, a)
}

/// The picked color with its alpha, as the preview swatch shows it.
pub fn from_state(state: &ColorState) -> Color {
    from_rgb(state.rgb(), state.a() as f32 / 255.0)
}

pub const BLACK: Color = [0.0, 0.0, 0.0, 1.0];
pub const WHITE: Color = [1.0; 4];
pub const BACKGROUND: Color = [0.12, 0.12, 0.14, 1.0];
pub const LIGHT_GREY: Color = [0.8, 0.8, 0.8, 1.0];
pub const DARK_GREY: Color = [0.55, 0.55, 0.55, 1.0];
