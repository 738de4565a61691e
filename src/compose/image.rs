use crate::foundation::core::Dims;
use crate::foundation::error::{BlendError, BlendResult};

fn check_len(dims: Dims, data: &[f64]) -> BlendResult<()> {
    let expected = dims.rgba_len()?;
    if data.len() != expected {
        return Err(BlendError::shape(format!(
            "rgba image {dims} needs {expected} values, got {}",
            data.len()
        )));
    }
    Ok(())
}

fn pixel_at(dims: Dims, data: &[f64], x: usize, y: usize) -> Option<[f64; 4]> {
    if x >= dims.width || y >= dims.height {
        return None;
    }
    let idx = (y * dims.width + x) * 4;
    let px = data.get(idx..idx + 4)?;
    Some([px[0], px[1], px[2], px[3]])
}

/// RGBA image with straight (unassociated) alpha.
///
/// Interleaved, row-major: `data[(y * width + x) * 4 + channel]`.
#[derive(Clone, Debug, PartialEq)]
pub struct StraightRgba {
    dims: Dims,
    data: Vec<f64>,
}

impl StraightRgba {
    /// Wrap interleaved RGBA values.
    pub fn new(dims: Dims, data: Vec<f64>) -> BlendResult<Self> {
        check_len(dims, &data)?;
        Ok(Self { dims, data })
    }

    /// Interleave an RGB image (3 values per pixel) with an alpha plane.
    pub fn from_rgb_and_alpha(dims: Dims, rgb: &[f64], alpha: &[f64]) -> BlendResult<Self> {
        let pixels = dims.pixels()?;
        if rgb.len() != pixels * 3 || alpha.len() != pixels {
            return Err(BlendError::shape(format!(
                "rgb ({}) and alpha ({}) do not match a {dims} image",
                rgb.len(),
                alpha.len()
            )));
        }
        let mut data = Vec::with_capacity(pixels * 4);
        for (c, a) in rgb.chunks_exact(3).zip(alpha) {
            data.extend_from_slice(c);
            data.push(*a);
        }
        Ok(Self { dims, data })
    }

    /// Image size.
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Interleaved values.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// RGBA at `(x, y)`.
    pub fn pixel(&self, x: usize, y: usize) -> Option<[f64; 4]> {
        pixel_at(self.dims, &self.data, x, y)
    }

    /// Scale each pixel's color channels by its alpha.
    pub fn premultiply(self) -> PremulRgba {
        let Self { dims, mut data } = self;
        for px in data.chunks_exact_mut(4) {
            let a = px[3];
            px[0] *= a;
            px[1] *= a;
            px[2] *= a;
        }
        PremulRgba { dims, data }
    }
}

/// RGBA image whose color channels are already multiplied by alpha.
///
/// Only this type is accepted by [`crate::over`]. Same layout as [`StraightRgba`].
#[derive(Clone, Debug, PartialEq)]
pub struct PremulRgba {
    dims: Dims,
    data: Vec<f64>,
}

impl PremulRgba {
    /// Wrap values the caller guarantees are already premultiplied.
    pub fn from_premultiplied(dims: Dims, data: Vec<f64>) -> BlendResult<Self> {
        check_len(dims, &data)?;
        Ok(Self { dims, data })
    }

    /// Image size.
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Interleaved values.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// RGBA at `(x, y)`.
    pub fn pixel(&self, x: usize, y: usize) -> Option<[f64; 4]> {
        pixel_at(self.dims, &self.data, x, y)
    }

    /// Consume into interleaved values.
    pub fn into_data(self) -> Vec<f64> {
        self.data
    }

    /// Straight-alpha RGBA8 bytes for display or export.
    ///
    /// Color is divided back by alpha, then every channel is clamped to `[0, 1]`
    /// and quantized. Fully transparent pixels become `[0, 0, 0, 0]`.
    pub fn to_rgba8(&self) -> Vec<u8> {
        fn to_u8(x: f64) -> u8 {
            if x.is_nan() {
                return 0;
            }
            (x.clamp(0.0, 1.0) * 255.0).round() as u8
        }

        let mut out = Vec::with_capacity(self.data.len());
        for px in self.data.chunks_exact(4) {
            let a = px[3];
            if a <= 0.0 || a.is_nan() {
                out.extend_from_slice(&[0, 0, 0, 0]);
                continue;
            }
            out.push(to_u8(px[0] / a));
            out.push(to_u8(px[1] / a));
            out.push(to_u8(px[2] / a));
            out.push(to_u8(a));
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/image.rs"]
mod tests;
