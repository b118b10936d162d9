use std::ops::{Add, Div, Mul, Sub};

/// A point or size in control space (x right, y down).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct F64x2 {
    pub x: f64,
    pub y: f64,
}

impl F64x2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub const fn splat(x: f64) -> Self {
        Self::new(x, x)
    }

    pub const fn zero() -> Self {
        F64x2::new(0.0, 0.0)
    }

    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// unit vector at `angle` radians, measured from +x towards +y
    pub fn from_angle(angle: f64) -> Self {
        Self::new(angle.cos(), angle.sin())
    }

    /// angle of this vector in radians, in `-pi..=pi`
    pub fn angle(self) -> f64 {
        self.y.atan2(self.x)
    }

    /// both components strictly positive and finite
    pub fn is_drawable(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.x > 0.0 && self.y > 0.0
    }
}

impl Add for F64x2 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for F64x2 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl Mul<f64> for F64x2 {
    type Output = Self;

    fn mul(self, other: f64) -> Self {
        Self {
            x: self.x * other,
            y: self.y * other,
        }
    }
}

impl Div<f64> for F64x2 {
    type Output = Self;

    fn div(self, other: f64) -> Self {
        Self {
            x: self.x / other,
            y: self.y / other,
        }
    }
}

impl From<[f64; 2]> for F64x2 {
    fn from(val: [f64; 2]) -> Self {
        Self {
            x: val[0],
            y: val[1],
        }
    }
}

impl From<F64x2> for [f64; 2] {
    fn from(val: F64x2) -> Self {
        [val.x, val.y]
    }
}
