//! The one color record every control reads from.
//!
//! `(h, s, v)` and `(r, g, b)` describe the same color at all times: the only
//! way to change either triple is [`ColorState::set_from_hsv`] or
//! [`ColorState::set_from_rgb`], and both regenerate the other triple before
//! returning. Alpha and format sit outside that pairing.

use crate::{
    color::{hsv_to_rgb, rgb_to_hex, rgb_to_hsv, Hsl, Hsv, Rgb},
    format::ColorFormat,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorState {
    h: f64,
    s: f64,
    v: f64,
    r: u8,
    g: u8,
    b: u8,
    a: u8,
    format: ColorFormat,
}

impl Default for ColorState {
    /// opaque pure red, shown as rgba
    fn default() -> Self {
        Self {
            h: 0.0,
            s: 1.0,
            v: 1.0,
            r: 255,
            g: 0,
            b: 0,
            a: 255,
            format: ColorFormat::Rgba,
        }
    }
}

fn finite_or_zero(x: f64) -> f64 {
    if x.is_finite() {
        x
    } else {
        0.0
    }
}

impl ColorState {
    pub fn from_rgb(rgb: Rgb) -> Self {
        let mut state = Self::default();
        state.set_from_rgb(rgb.r, rgb.g, rgb.b);
        state
    }

    /// `h` in degrees (wrapped into 0-360), `s` and `v` clamped to 0-1
    pub fn set_from_hsv(&mut self, h: f64, s: f64, v: f64) {
        self.h = finite_or_zero(h).rem_euclid(360.0);
        self.s = finite_or_zero(s).clamp(0.0, 1.0);
        self.v = finite_or_zero(v).clamp(0.0, 1.0);
        let Rgb { r, g, b } = hsv_to_rgb(self.h / 360.0, self.s, self.v);
        (self.r, self.g, self.b) = (r, g, b);
    }

    pub fn set_from_rgb(&mut self, r: u8, g: u8, b: u8) {
        (self.r, self.g, self.b) = (r, g, b);
        let Hsv { h, s, v } = rgb_to_hsv(r, g, b);
        (self.h, self.s, self.v) = (h, s, v);
    }

    pub fn set_alpha(&mut self, a: u8) {
        self.a = a;
    }

    pub fn set_format(&mut self, format: ColorFormat) {
        self.format = format;
    }

    pub fn h(&self) -> f64 {
        self.h
    }

    pub fn s(&self) -> f64 {
        self.s
    }

    pub fn v(&self) -> f64 {
        self.v
    }

    pub fn r(&self) -> u8 {
        self.r
    }

    pub fn g(&self) -> u8 {
        self.g
    }

    pub fn b(&self) -> u8 {
        self.b
    }

    pub fn a(&self) -> u8 {
        self.a
    }

    pub fn format(&self) -> ColorFormat {
        self.format
    }

    pub fn rgb(&self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }

    pub fn hsv(&self) -> Hsv {
        Hsv::new(self.h, self.s, self.v)
    }

    pub fn hsl(&self) -> Hsl {
        self.rgb().to_hsl()
    }

    /// alpha as a 0-1 fraction with two decimals, e.g. `0.50`
    pub fn alpha_text(&self) -> String {
        format!("{:.2}", self.a as f64 / 255.0)
    }

    /// the color in the active format
    pub fn display_text(&self) -> String {
        self.text_in(self.format)
    }

    /// the color in `format`, regardless of the active one
    pub fn text_in(&self, format: ColorFormat) -> String {
        match format {
            ColorFormat::Rgba => self.preview_css(),
            ColorFormat::Hex => rgb_to_hex(self.r, self.g, self.b),
            ColorFormat::Hsla => {
                let Hsl { h, s, l } = self.hsl();
                format!("hsla({h}, {s}%, {l}%, {})", self.alpha_text())
            }
        }
    }

    /// rgba() string used to paint the preview swatch
    pub fn preview_css(&self) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            self.r,
            self.g,
            self.b,
            self.alpha_text()
        )
    }
}
