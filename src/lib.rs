//! Color picker core: conversions between RGB, HSV, HSL and hex, a color
//! state that keeps HSV and RGB paired, and the hit-testing behind a hue
//! wheel, an alpha slider and three RGB sliders.

#[macro_use]
extern crate log;

pub mod actor;
pub mod color;
pub mod config;
pub mod controls;
pub mod error;
pub mod format;
pub mod picker;
pub mod presets;
pub mod state;
pub mod vec2;

pub use color::{Channel, Hsl, Hsv, Rgb};
pub use controls::ControlId;
pub use format::ColorFormat;
pub use picker::{Consumer, Picker, Refresh};
pub use state::ColorState;
pub use vec2::F64x2;
