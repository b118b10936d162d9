//! Pointer ↔ color mapping for every interactive control.
//!
//! Controls never touch [`ColorState`] directly: a press or drag yields a
//! [`ColorUpdate`] that the picker applies through the state's entry points.

mod alpha_slider;
mod hue_wheel;
mod rgb_sliders;

pub use alpha_slider::AlphaSlider;
pub use hue_wheel::{HueWheel, WheelGeometry, WheelLatch};
pub use rgb_sliders::{RgbSliders, Track};

use crate::{color::Channel, state::ColorState, vec2::F64x2};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlId {
    HueWheel,
    AlphaSlider,
    RgbSliders,
}

impl ControlId {
    pub const ALL: [ControlId; 3] = [
        ControlId::HueWheel,
        ControlId::AlphaSlider,
        ControlId::RgbSliders,
    ];
}

/// A change a control wants applied to the shared state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorUpdate {
    /// degrees, 0-360
    Hue(f64),
    SaturationValue { s: f64, v: f64 },
    Alpha(u8),
    Channel(Channel, u8),
}

/// Where a control sits in its parent, and how big it ended up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    pub origin: F64x2,
    pub size: F64x2,
    /// width / height, if the control keeps a fixed shape
    pub aspect_ratio: Option<f64>,
}

impl Canvas {
    pub const fn new(aspect_ratio: Option<f64>) -> Self {
        Self {
            origin: F64x2::zero(),
            size: F64x2::zero(),
            aspect_ratio,
        }
    }

    /// Takes the container's width, and either its height or the height the
    /// aspect ratio asks for.
    pub fn fit(&mut self, container: F64x2) -> F64x2 {
        self.size = match self.aspect_ratio {
            Some(ratio) if ratio > 0.0 => F64x2::new(container.x, container.x / ratio),
            _ => container,
        };
        self.size
    }

    /// window coordinates -> control coordinates
    pub fn to_local(&self, global: F64x2) -> F64x2 {
        global - self.origin
    }

    pub fn to_global(&self, local: F64x2) -> F64x2 {
        local + self.origin
    }

    pub fn contains_local(&self, local: F64x2) -> bool {
        (0.0..=self.size.x).contains(&local.x) && (0.0..=self.size.y).contains(&local.y)
    }
}

pub trait Resizable {
    fn canvas(&self) -> &Canvas;
    fn canvas_mut(&mut self) -> &mut Canvas;
    /// recompute geometry after the canvas changed size
    fn layout(&mut self);

    /// Lays the control out inside `container` and returns the size it took.
    fn resize(&mut self, container: F64x2) -> F64x2 {
        let size = self.canvas_mut().fit(container);
        self.layout();
        size
    }

    fn size(&self) -> F64x2 {
        self.canvas().size
    }

    fn place(&mut self, origin: F64x2) {
        self.canvas_mut().origin = origin;
    }
}

pub trait PointerMappable {
    /// Classifies a press and latches a drag mode. `None` means the press hit
    /// nothing and nothing is latched.
    fn press(&mut self, pos: F64x2) -> Option<ColorUpdate>;
    /// Interprets a move in the latched mode, wherever the pointer is.
    fn drag(&mut self, pos: F64x2) -> Option<ColorUpdate>;
    fn release(&mut self);
    fn is_latched(&self) -> bool;
    /// cursor centers for the current state, in control coordinates
    fn cursors(&self, state: &ColorState) -> Vec<F64x2>;
}

pub trait Control: Resizable + PointerMappable {}

impl<T: Resizable + PointerMappable> Control for T {}

#[inline(always)]
pub(crate) fn clamp01(x: f64) -> f64 {
    if x.is_nan() {
        0.0
    } else {
        x.clamp(0.0, 1.0)
    }
}

/// 0-1 fraction -> 0-255 channel
#[inline(always)]
pub(crate) fn fraction_to_u8(x: f64) -> u8 {
    (clamp01(x) * 255.0).round() as u8
}
