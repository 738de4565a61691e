use crate::foundation::error::{BlendError, BlendResult};

/// Width and height of one 2D plane, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Dims {
    /// Pixels per row.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
}

impl Dims {
    /// Build a plane size.
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Pixel count, failing on overflow.
    pub fn pixels(self) -> BlendResult<usize> {
        self.width.checked_mul(self.height).ok_or_else(|| {
            BlendError::shape(format!(
                "{}x{} plane overflows usize",
                self.width, self.height
            ))
        })
    }

    /// Number of `f64` values in an RGBA buffer of this size.
    pub fn rgba_len(self) -> BlendResult<usize> {
        self.pixels()?
            .checked_mul(4)
            .ok_or_else(|| BlendError::shape("rgba buffer size overflow"))
    }
}

impl std::fmt::Display for Dims {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Straight RGB triple with components in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rgb {
    /// Red.
    pub r: f64,
    /// Green.
    pub g: f64,
    /// Blue.
    pub b: f64,
}

impl Rgb {
    /// Build a triple without range checks.
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Build a gray triple.
    pub const fn gray(v: f64) -> Self {
        Self { r: v, g: v, b: v }
    }

    /// Build a triple from 8-bit channels.
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: f64::from(r) / 255.0,
            g: f64::from(g) / 255.0,
            b: f64::from(b) / 255.0,
        }
    }

    /// Channels in R, G, B order.
    pub fn channels(self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// True if every channel is finite and within `[0, 1]`.
    pub fn in_unit_range(self) -> bool {
        self.channels()
            .iter()
            .all(|c| c.is_finite() && (0.0..=1.0).contains(c))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
