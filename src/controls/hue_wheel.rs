use std::f64::consts::SQRT_2;

use super::{clamp01, Canvas, ColorUpdate, PointerMappable, Resizable};
use crate::{config::WHEEL_CFG, state::ColorState, vec2::F64x2};

/// Which part of the wheel a drag started on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WheelLatch {
    Ring,
    Square,
}

/// Hue ring with the saturation/value square inscribed in its hole.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelGeometry {
    pub center: F64x2,
    pub outer_radius: f64,
    pub inner_radius: f64,
    pub thickness: f64,
    /// top left corner of the square
    pub square_origin: F64x2,
    pub square_size: f64,
}

impl WheelGeometry {
    /// `None` when the control is too small to hold a ring.
    pub fn new(size: F64x2) -> Option<Self> {
        if !size.is_drawable() {
            return None;
        }
        let width = size.x;
        let thickness = width * WHEEL_CFG.thickness_ratio;
        let outer_radius = width / 2.0 - WHEEL_CFG.padding;
        if outer_radius <= 0.0 {
            return None;
        }
        let inner_radius = (outer_radius - thickness).max(0.0);
        let square_size = (inner_radius * SQRT_2 - WHEEL_CFG.padding * 3.0).max(0.0);
        let center = size / 2.0;
        Some(Self {
            center,
            outer_radius,
            inner_radius,
            thickness,
            square_origin: center - F64x2::splat(square_size / 2.0),
            square_size,
        })
    }

    /// radius the hue cursor rides on, midway through the ring
    pub fn track_radius(&self) -> f64 {
        self.outer_radius - self.thickness / 2.0
    }

    pub fn on_ring(&self, pos: F64x2) -> bool {
        let dist = (pos - self.center).length();
        dist >= self.inner_radius && dist <= self.outer_radius
    }

    pub fn on_square(&self, pos: F64x2) -> bool {
        let rel = pos - self.square_origin;
        self.square_size > 0.0
            && (0.0..=self.square_size).contains(&rel.x)
            && (0.0..=self.square_size).contains(&rel.y)
    }

    /// Degrees clockwise from 12 o'clock, 0-360.
    pub fn hue_at(&self, pos: F64x2) -> f64 {
        ((pos - self.center).angle().to_degrees() + 450.0).rem_euclid(360.0)
    }

    /// Saturation grows to the right, value grows upwards. Both clamped to 0-1.
    pub fn sv_at(&self, pos: F64x2) -> (f64, f64) {
        let rel = (pos - self.square_origin) / self.square_size;
        (clamp01(rel.x), clamp01(1.0 - rel.y))
    }

    /// point at hue `h` and `radius` away from the center
    pub fn point_at(&self, h: f64, radius: f64) -> F64x2 {
        self.center + F64x2::from_angle((h - 90.0).to_radians()) * radius
    }

    pub fn hue_cursor(&self, h: f64) -> F64x2 {
        self.point_at(h, self.track_radius())
    }

    pub fn sv_cursor(&self, s: f64, v: f64) -> F64x2 {
        self.square_origin + F64x2::new(s, 1.0 - v) * self.square_size
    }

    fn update_for(&self, latch: WheelLatch, pos: F64x2) -> ColorUpdate {
        match latch {
            WheelLatch::Ring => ColorUpdate::Hue(self.hue_at(pos)),
            WheelLatch::Square => {
                let (s, v) = self.sv_at(pos);
                ColorUpdate::SaturationValue { s, v }
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct HueWheel {
    canvas: Canvas,
    geometry: Option<WheelGeometry>,
    latch: Option<WheelLatch>,
}

impl Default for HueWheel {
    fn default() -> Self {
        Self::new()
    }
}

impl HueWheel {
    pub fn new() -> Self {
        Self {
            canvas: Canvas::new(Some(1.0)),
            geometry: None,
            latch: None,
        }
    }

    pub fn geometry(&self) -> Option<&WheelGeometry> {
        self.geometry.as_ref()
    }

    pub fn latch(&self) -> Option<WheelLatch> {
        self.latch
    }
}

impl Resizable for HueWheel {
    fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    fn layout(&mut self) {
        self.geometry = WheelGeometry::new(self.canvas.size);
    }
}

impl PointerMappable for HueWheel {
    fn press(&mut self, pos: F64x2) -> Option<ColorUpdate> {
        let geometry = self.geometry?;
        self.latch = if geometry.on_ring(pos) {
            Some(WheelLatch::Ring)
        } else if geometry.on_square(pos) {
            Some(WheelLatch::Square)
        } else {
            None
        };
        trace!("hue wheel press at {pos:?} -> {:?}", self.latch);
        Some(geometry.update_for(self.latch?, pos))
    }

    fn drag(&mut self, pos: F64x2) -> Option<ColorUpdate> {
        Some(self.geometry?.update_for(self.latch?, pos))
    }

    fn release(&mut self) {
        self.latch = None;
    }

    fn is_latched(&self) -> bool {
        self.latch.is_some()
    }

    fn cursors(&self, state: &ColorState) -> Vec<F64x2> {
        match self.geometry {
            Some(g) => vec![g.hue_cursor(state.h()), g.sv_cursor(state.s(), state.v())],
            None => vec![],
        }
    }
}
