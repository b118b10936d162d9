use super::{fraction_to_u8, Canvas, ColorUpdate, PointerMappable, Resizable};
use crate::{color::Channel, config::RGB_SLIDERS_CFG, state::ColorState, vec2::F64x2};

/// One horizontal channel track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Track {
    pub channel: Channel,
    /// top edge of the drawn track
    pub top: f64,
    /// vertical band a press must land in, inclusive
    pub hit_band: (f64, f64),
}

impl Track {
    pub fn center_y(&self) -> f64 {
        self.top + RGB_SLIDERS_CFG.track_height / 2.0
    }

    fn hit(&self, y: f64) -> bool {
        y >= self.hit_band.0 && y <= self.hit_band.1
    }
}

/// Three stacked tracks for red, green and blue.
#[derive(Debug, Clone)]
pub struct RgbSliders {
    canvas: Canvas,
    tracks: Vec<Track>,
    track_width: f64,
    active: Option<Channel>,
}

impl Default for RgbSliders {
    fn default() -> Self {
        Self::new()
    }
}

impl RgbSliders {
    pub fn new() -> Self {
        Self {
            canvas: Canvas::new(None),
            tracks: vec![],
            track_width: 0.0,
            active: None,
        }
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn track_width(&self) -> f64 {
        self.track_width
    }

    pub fn active(&self) -> Option<Channel> {
        self.active
    }

    pub fn value_at(&self, x: f64) -> u8 {
        fraction_to_u8((x - RGB_SLIDERS_CFG.padding_x) / self.track_width)
    }

    pub fn cursor(&self, track: &Track, value: u8) -> F64x2 {
        F64x2::new(
            RGB_SLIDERS_CFG.padding_x + value as f64 / 255.0 * self.track_width,
            track.center_y(),
        )
    }
}

impl Resizable for RgbSliders {
    fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    fn layout(&mut self) {
        let cfg = &RGB_SLIDERS_CFG;
        let size = self.canvas.size;
        self.track_width = size.x - cfg.padding_x * 2.0;
        if !size.is_drawable() || self.track_width <= 0.0 {
            self.tracks.clear();
            return;
        }
        let gap = (size.y - cfg.track_height * 3.0) / 4.0;
        self.tracks = Channel::ALL
            .into_iter()
            .enumerate()
            .map(|(i, channel)| {
                let top = gap * (i + 1) as f64 + cfg.track_height * i as f64;
                Track {
                    channel,
                    top,
                    hit_band: (
                        top - cfg.hit_margin,
                        top + cfg.track_height + gap + cfg.hit_margin,
                    ),
                }
            })
            .collect();
    }
}

impl PointerMappable for RgbSliders {
    /// Bands overlap; a press in an overlap goes to the lower track.
    fn press(&mut self, pos: F64x2) -> Option<ColorUpdate> {
        self.active = if self.canvas.contains_local(pos) {
            self.tracks
                .iter()
                .rev()
                .find(|track| track.hit(pos.y))
                .map(|track| track.channel)
        } else {
            None
        };
        trace!("rgb sliders press at {pos:?} -> {:?}", self.active);
        self.drag(pos)
    }

    fn drag(&mut self, pos: F64x2) -> Option<ColorUpdate> {
        let channel = self.active?;
        Some(ColorUpdate::Channel(channel, self.value_at(pos.x)))
    }

    fn release(&mut self) {
        self.active = None;
    }

    fn is_latched(&self) -> bool {
        self.active.is_some()
    }

    fn cursors(&self, state: &ColorState) -> Vec<F64x2> {
        let rgb = state.rgb();
        self.tracks
            .iter()
            .map(|track| self.cursor(track, rgb.channel(track.channel)))
            .collect()
    }
}
