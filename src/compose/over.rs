use crate::compose::image::PremulRgba;
use crate::foundation::error::{BlendError, BlendResult};

/// `above` over `below`, returning a new image.
///
/// `C = B + A - A * beta`, with `beta` the alpha of `B` applied to all four
/// channels of `A`.
pub fn over(below: &PremulRgba, above: &PremulRgba) -> BlendResult<PremulRgba> {
    let mut out = below.clone();
    over_in_place(&mut out, above)?;
    Ok(out)
}

/// `above` over `acc`, writing into `acc`.
pub fn over_in_place(acc: &mut PremulRgba, above: &PremulRgba) -> BlendResult<()> {
    if acc.dims() != above.dims() {
        return Err(BlendError::shape(format!(
            "cannot composite {} over {}",
            above.dims(),
            acc.dims()
        )));
    }
    for (a, b) in acc
        .data_mut()
        .chunks_exact_mut(4)
        .zip(above.data().chunks_exact(4))
    {
        let beta = b[3];
        for c in 0..4 {
            a[c] = b[c] + a[c] - a[c] * beta;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/compose/over.rs"]
mod tests;
