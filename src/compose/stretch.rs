use crate::compose::image::PremulRgba;
use crate::foundation::error::BlendResult;
use crate::foundation::math;

/// Divide the color channels by their global maximum; alpha is untouched.
///
/// Returns the divisor. An already stretched image comes back unchanged.
pub fn stretch_contrast(image: &mut PremulRgba) -> BlendResult<f64> {
    let max = math::positive_peak(
        image
            .data()
            .chunks_exact(4)
            .flat_map(|px| px[..3].iter().copied()),
        "composite color channels",
    )?;
    for px in image.data_mut().chunks_exact_mut(4) {
        px[0] /= max;
        px[1] /= max;
        px[2] /= max;
    }
    Ok(max)
}

#[cfg(test)]
#[path = "../../tests/unit/compose/stretch.rs"]
mod tests;
