//! Cube reshaping used when preparing model image cubes for compositing.

use crate::cube::model::Cube;
use crate::foundation::core::Dims;
use crate::foundation::error::BlendResult;

/// Expand a half-size cube into a full-size one by mirroring columns to the left.
///
/// A half-size plane of width `w` holds the right half of a symmetric image,
/// with column 0 on the symmetry axis. The output has width `2w - 1`; column 0
/// appears once. Square cubes are already full-size and come back unchanged.
pub fn mirror_fullsize(cube: &Cube) -> BlendResult<Cube> {
    let Dims { width, height } = cube.dims();
    if width == height {
        tracing::debug!("cube is square, skipping mirror");
        return Ok(cube.clone());
    }

    let out_width = 2 * width - 1;
    let mut data = Vec::with_capacity(cube.slices() * height * out_width);
    for plane in cube.iter_slices() {
        for row in plane.chunks_exact(width) {
            data.extend(row[1..].iter().rev());
            data.extend_from_slice(row);
        }
    }
    Cube::new(cube.slices(), Dims::new(out_width, height), data)
}

/// Reverse row order in every slice.
///
/// FITS images count rows bottom-up while the cube stores them top-down.
pub fn flip_y(cube: &Cube) -> BlendResult<Cube> {
    let width = cube.dims().width;
    let mut data = Vec::with_capacity(cube.data().len());
    for plane in cube.iter_slices() {
        for row in plane.chunks_exact(width).rev() {
            data.extend_from_slice(row);
        }
    }
    Cube::new(cube.slices(), cube.dims(), data)
}

#[cfg(test)]
#[path = "../../tests/unit/cube/reshape.rs"]
mod tests;
