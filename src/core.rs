use crate::error::{RaysceneError, RaysceneResult};

/// 3-D vector with `f64` components.
///
/// Equality is exact component-wise comparison. It is used to detect
/// literally duplicated triangle vertices, not to compare computed geometry.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Return `true` when the magnitude is within 1% of 1.0.
    pub fn is_normalized(self) -> bool {
        let magnitude = (self.x * self.x + self.y * self.y + self.z * self.z).sqrt();
        (magnitude - 1.0).abs() <= 0.01
    }
}

/// RGB color with each component in `[0, 1]`.
///
/// [`Color::new`] is the only way to produce a value, so a constructed color
/// always satisfies the range invariant.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct Color {
    r: f64,
    g: f64,
    b: f64,
}

impl Color {
    /// Create a validated color with every component in `[0, 1]`.
    pub fn new(r: f64, g: f64, b: f64) -> RaysceneResult<Self> {
        for (component, value) in [("r", r), ("g", g), ("b", b)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(RaysceneError::out_of_range(format!(
                    "color has {component} component outside the range [0, 1]"
                )));
            }
        }
        Ok(Self { r, g, b })
    }

    pub fn r(self) -> f64 {
        self.r
    }

    pub fn g(self) -> f64 {
        self.g
    }

    pub fn b(self) -> f64 {
        self.b
    }
}
