//! Owns the color state and every control, and keeps them in step.
//!
//! Each mutation goes through one of the state's entry points and returns a
//! [`Refresh`] naming what has to be redrawn, so a front end can stay a dumb
//! painter and the data flow can be tested without one.

use rand::Rng;

use crate::{
    color::hex_to_rgb,
    controls::{
        AlphaSlider, ColorUpdate, Control, ControlId, HueWheel, PointerMappable, Resizable,
        RgbSliders,
    },
    format::ColorFormat,
    presets::PRESETS,
    state::ColorState,
    vec2::F64x2,
};

/// Something that renders from the state and must redraw after a change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Consumer {
    HueWheel,
    AlphaSlider,
    RgbSliders,
    /// the swatch showing the color over a checkerboard
    Preview,
    /// per-channel numbers next to the sliders
    Readouts,
    /// the formatted color string
    Text,
}

impl Consumer {
    pub const ALL: [Consumer; 6] = [
        Consumer::HueWheel,
        Consumer::AlphaSlider,
        Consumer::RgbSliders,
        Consumer::Preview,
        Consumer::Readouts,
        Consumer::Text,
    ];
}

/// The state after a mutation, plus who needs to redraw.
#[derive(Debug, Clone, PartialEq)]
pub struct Refresh {
    pub state: ColorState,
    pub dirty: Vec<Consumer>,
}

impl Refresh {
    pub fn is_dirty(&self, consumer: Consumer) -> bool {
        self.dirty.contains(&consumer)
    }

    pub fn display_text(&self) -> String {
        self.state.display_text()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Picker {
    state: ColorState,
    hue_wheel: HueWheel,
    alpha_slider: AlphaSlider,
    rgb_sliders: RgbSliders,
}

impl Picker {
    pub fn new(state: ColorState) -> Self {
        Self {
            state,
            ..Default::default()
        }
    }

    pub fn state(&self) -> &ColorState {
        &self.state
    }

    pub fn hue_wheel(&self) -> &HueWheel {
        &self.hue_wheel
    }

    pub fn alpha_slider(&self) -> &AlphaSlider {
        &self.alpha_slider
    }

    pub fn rgb_sliders(&self) -> &RgbSliders {
        &self.rgb_sliders
    }

    pub fn control(&self, id: ControlId) -> &dyn Control {
        match id {
            ControlId::HueWheel => &self.hue_wheel,
            ControlId::AlphaSlider => &self.alpha_slider,
            ControlId::RgbSliders => &self.rgb_sliders,
        }
    }

    fn control_mut(&mut self, id: ControlId) -> &mut dyn Control {
        match id {
            ControlId::HueWheel => &mut self.hue_wheel,
            ControlId::AlphaSlider => &mut self.alpha_slider,
            ControlId::RgbSliders => &mut self.rgb_sliders,
        }
    }

    /// Lays out one control for its parent container; returns the size it took.
    pub fn resize(&mut self, id: ControlId, container: F64x2) -> F64x2 {
        let size = self.control_mut(id).resize(container);
        debug!("{id:?} resized to {size:?}");
        size
    }

    /// Where the control sits in window space, for pointer translation.
    pub fn place(&mut self, id: ControlId, origin: F64x2) {
        self.control_mut(id).place(origin);
    }

    /// Everything, e.g. for the first frame.
    pub fn refresh_all(&self) -> Refresh {
        Refresh {
            state: self.state,
            dirty: Consumer::ALL.to_vec(),
        }
    }

    pub fn set_from_hsv(&mut self, h: f64, s: f64, v: f64) -> Refresh {
        self.state.set_from_hsv(h, s, v);
        self.refresh_all()
    }

    pub fn set_from_rgb(&mut self, r: u8, g: u8, b: u8) -> Refresh {
        self.state.set_from_rgb(r, g, b);
        self.refresh_all()
    }

    pub fn set_alpha(&mut self, a: u8) -> Refresh {
        self.state.set_alpha(a);
        self.refresh_all()
    }

    /// Only the text changes with the format.
    pub fn set_format(&mut self, format: ColorFormat) -> Refresh {
        self.state.set_format(format);
        Refresh {
            state: self.state,
            dirty: vec![Consumer::Text],
        }
    }

    pub fn display_text(&self) -> String {
        self.state.display_text()
    }

    /// Applies a control's update through the matching entry point.
    pub fn apply(&mut self, update: ColorUpdate) -> Refresh {
        let state = self.state;
        match update {
            ColorUpdate::Hue(h) => self.set_from_hsv(h, state.s(), state.v()),
            ColorUpdate::SaturationValue { s, v } => self.set_from_hsv(state.h(), s, v),
            ColorUpdate::Alpha(a) => self.set_alpha(a),
            ColorUpdate::Channel(channel, value) => {
                let rgb = state.rgb().with_channel(channel, value);
                self.set_from_rgb(rgb.r, rgb.g, rgb.b)
            }
        }
    }

    /// Starts a gesture on `id`. `pos` is in the control's own coordinates.
    ///
    /// Any other latch is dropped first. Returns `None` if the press missed
    /// every zone of the control; nothing is latched then.
    pub fn press(&mut self, id: ControlId, pos: F64x2) -> Option<Refresh> {
        self.release();
        let update = self.control_mut(id).press(pos);
        debug!("press on {id:?} at {pos:?}: {update:?}");
        update.map(|update| self.apply(update))
    }

    /// Continues the gesture latched on `id`; ignored if `id` holds no latch.
    pub fn drag(&mut self, id: ControlId, pos: F64x2) -> Option<Refresh> {
        let update = self.control_mut(id).drag(pos)?;
        trace!("drag on {id:?} at {pos:?}: {update:?}");
        Some(self.apply(update))
    }

    /// Pointer went up anywhere; every gesture ends.
    pub fn release(&mut self) {
        for id in ControlId::ALL {
            self.control_mut(id).release();
        }
    }

    pub fn latched(&self) -> Option<ControlId> {
        ControlId::ALL
            .into_iter()
            .find(|id| self.control(*id).is_latched())
    }

    /// Malformed hex is logged and ignored.
    pub fn select_preset(&mut self, hex: &str) -> Option<Refresh> {
        match hex_to_rgb(hex) {
            Some(rgb) => Some(self.set_from_rgb(rgb.r, rgb.g, rgb.b)),
            None => {
                warn!("ignoring malformed preset color {hex:?}");
                None
            }
        }
    }

    /// Selects one of the built-in [`PRESETS`].
    pub fn preset(&mut self, index: usize) -> Option<Refresh> {
        let hex = PRESETS.get(index)?;
        self.select_preset(hex)
    }

    /// Picks a uniformly random color; alpha is left alone.
    pub fn randomize<R: Rng>(&mut self, rng: &mut R) -> Refresh {
        let (r, g, b) = (rng.gen(), rng.gen(), rng.gen());
        self.set_from_rgb(r, g, b)
    }
}
