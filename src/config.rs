//! Layout constants for each control. All lengths are in logical pixels.

pub struct WheelConfig {
    /// ring thickness as a fraction of the control's width
    pub thickness_ratio: f64,
    /// gap between the ring and the control edge, also used (x3) to shrink the
    /// inscribed square away from the ring
    pub padding: f64,
}

pub const WHEEL_CFG: WheelConfig = WheelConfig {
    thickness_ratio: 0.08,
    padding: 5.0,
};

pub struct AlphaConfig {
    /// inset of the bar from every edge of the control
    pub padding: f64,
}

pub const ALPHA_CFG: AlphaConfig = AlphaConfig { padding: 8.0 };

pub struct RgbSlidersConfig {
    /// horizontal inset of the tracks
    pub padding_x: f64,
    pub track_height: f64,
    /// extra slack above and below each track's hit band
    pub hit_margin: f64,
}

pub const RGB_SLIDERS_CFG: RgbSlidersConfig = RgbSlidersConfig {
    padding_x: 15.0,
    track_height: 20.0,
    hit_margin: 10.0,
};

/// radius of the round cursor drawn on every control
pub const CURSOR_RADIUS: f64 = 10.0;
