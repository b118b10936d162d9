use super::{fraction_to_u8, Canvas, ColorUpdate, PointerMappable, Resizable};
use crate::{config::ALPHA_CFG, state::ColorState, vec2::F64x2};

/// Vertical bar, opaque at the top and transparent at the bottom.
#[derive(Debug, Clone)]
pub struct AlphaSlider {
    canvas: Canvas,
    /// top of the bar and its height, once laid out
    bar: Option<(f64, f64)>,
    dragging: bool,
}

impl Default for AlphaSlider {
    fn default() -> Self {
        Self::new()
    }
}

impl AlphaSlider {
    pub fn new() -> Self {
        Self {
            canvas: Canvas::new(None),
            bar: None,
            dragging: false,
        }
    }

    /// top left corner and size of the bar
    pub fn bar_rect(&self) -> Option<(F64x2, F64x2)> {
        let (top, height) = self.bar?;
        let pad = ALPHA_CFG.padding;
        Some((
            F64x2::new(pad, top),
            F64x2::new(self.canvas.size.x - pad * 2.0, height),
        ))
    }

    pub fn alpha_at(&self, y: f64) -> Option<u8> {
        let (top, height) = self.bar?;
        Some(fraction_to_u8(1.0 - (y - top) / height))
    }

    pub fn cursor(&self, a: u8) -> Option<F64x2> {
        let (top, height) = self.bar?;
        Some(F64x2::new(
            self.canvas.size.x / 2.0,
            top + (255 - a) as f64 / 255.0 * height,
        ))
    }
}

impl Resizable for AlphaSlider {
    fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    fn layout(&mut self) {
        let pad = ALPHA_CFG.padding;
        let height = self.canvas.size.y - pad * 2.0;
        self.bar = (self.canvas.size.is_drawable() && height > 0.0).then(|| (pad, height));
    }
}

impl PointerMappable for AlphaSlider {
    /// Anywhere on the control grabs the slider.
    fn press(&mut self, pos: F64x2) -> Option<ColorUpdate> {
        self.dragging = self.bar.is_some() && self.canvas.contains_local(pos);
        trace!("alpha slider press at {pos:?} -> latched: {}", self.dragging);
        self.drag(pos)
    }

    fn drag(&mut self, pos: F64x2) -> Option<ColorUpdate> {
        if !self.dragging {
            return None;
        }
        self.alpha_at(pos.y).map(ColorUpdate::Alpha)
    }

    fn release(&mut self) {
        self.dragging = false;
    }

    fn is_latched(&self) -> bool {
        self.dragging
    }

    fn cursors(&self, state: &ColorState) -> Vec<F64x2> {
        self.cursor(state.a()).into_iter().collect()
    }
}
