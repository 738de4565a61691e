use crate::foundation::core::Dims;
use crate::foundation::error::{BlendError, BlendResult};
use crate::foundation::math;

/// One 2D brightness map, row-major (`data[y * width + x]`).
#[derive(Clone, Debug, PartialEq)]
pub struct IntensityMap {
    dims: Dims,
    data: Vec<f64>,
}

impl IntensityMap {
    /// Wrap row-major data; the length must equal `width * height`.
    pub fn new(dims: Dims, data: Vec<f64>) -> BlendResult<Self> {
        let expected = dims.pixels()?;
        if data.len() != expected {
            return Err(BlendError::shape(format!(
                "intensity map {dims} needs {expected} values, got {}",
                data.len()
            )));
        }
        Ok(Self { dims, data })
    }

    /// Uniform map.
    pub fn filled(dims: Dims, value: f64) -> BlendResult<Self> {
        Ok(Self {
            dims,
            data: vec![value; dims.pixels()?],
        })
    }

    /// Plane size.
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Row-major values.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Value at `(x, y)`.
    pub fn get(&self, x: usize, y: usize) -> Option<f64> {
        if x >= self.dims.width || y >= self.dims.height {
            return None;
        }
        self.data.get(y * self.dims.width + x).copied()
    }

    /// Largest value, `None` when the map is empty.
    pub fn max(&self) -> Option<f64> {
        math::peak(self.data.iter().copied())
    }
}

/// Stack of equally sized intensity maps, slice-major then row-major
/// (`data[(s * height + y) * width + x]`).
#[derive(Clone, Debug, PartialEq)]
pub struct Cube {
    slices: usize,
    dims: Dims,
    data: Vec<f64>,
}

impl Cube {
    /// Wrap slice-major data of shape `(slices, height, width)`.
    pub fn new(slices: usize, dims: Dims, data: Vec<f64>) -> BlendResult<Self> {
        if dims.width == 0 || dims.height == 0 {
            return Err(BlendError::shape(format!(
                "cube planes must be non-empty, got {dims}"
            )));
        }
        let expected = dims
            .pixels()?
            .checked_mul(slices)
            .ok_or_else(|| BlendError::shape("cube size overflow"))?;
        if data.len() != expected {
            return Err(BlendError::shape(format!(
                "cube ({slices}, {}, {}) needs {expected} values, got {}",
                dims.height,
                dims.width,
                data.len()
            )));
        }
        Ok(Self { slices, dims, data })
    }

    /// Stack maps bottom to top. All maps must share one size.
    pub fn from_maps(maps: &[IntensityMap]) -> BlendResult<Self> {
        let Some(first) = maps.first() else {
            return Err(BlendError::shape(
                "cannot infer plane size from zero intensity maps",
            ));
        };
        let dims = first.dims();
        let mut data = Vec::with_capacity(first.data().len() * maps.len());
        for (idx, map) in maps.iter().enumerate() {
            if map.dims() != dims {
                return Err(BlendError::shape(format!(
                    "slice {idx} is {}, expected {dims}",
                    map.dims()
                )));
            }
            data.extend_from_slice(map.data());
        }
        Self::new(maps.len(), dims, data)
    }

    /// Number of slices.
    pub fn slices(&self) -> usize {
        self.slices
    }

    /// Plane size shared by every slice.
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Shape as `(slices, height, width)`.
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.slices, self.dims.height, self.dims.width)
    }

    /// All values, slice-major.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Values of slice `index`.
    pub fn slice(&self, index: usize) -> Option<&[f64]> {
        if index >= self.slices {
            return None;
        }
        let len = self.plane_len();
        self.data.get(index * len..(index + 1) * len)
    }

    /// Copy of slice `index` as its own map.
    pub fn map(&self, index: usize) -> Option<IntensityMap> {
        self.slice(index).map(|s| IntensityMap {
            dims: self.dims,
            data: s.to_vec(),
        })
    }

    /// Slices in storage order.
    pub fn iter_slices(&self) -> impl ExactSizeIterator<Item = &[f64]> + '_ {
        self.data.chunks_exact(self.plane_len())
    }

    /// Global maximum, `None` for a cube without slices.
    pub fn max(&self) -> Option<f64> {
        math::peak(self.data.iter().copied())
    }

    pub(crate) fn plane_len(&self) -> usize {
        self.dims.width * self.dims.height
    }
}

#[cfg(test)]
#[path = "../../tests/unit/cube/model.rs"]
mod tests;
