use crate::color::resolver::{ColorResolver, ColorSpec};
use crate::compose::image::{PremulRgba, StraightRgba};
use crate::cube::model::IntensityMap;
use crate::foundation::error::BlendResult;
use crate::foundation::math;

/// One slice rendered as premultiplied RGBA, ready for compositing.
#[derive(Clone, Debug, PartialEq)]
pub struct Layer {
    image: PremulRgba,
    alpha: f64,
    color: ColorSpec,
}

impl Layer {
    /// Premultiplied pixels.
    pub fn image(&self) -> &PremulRgba {
        &self.image
    }

    /// Uniform opacity of this layer.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Color the slice was tinted with.
    pub fn color(&self) -> &ColorSpec {
        &self.color
    }

    /// Consume into the pixel buffer.
    pub fn into_image(self) -> PremulRgba {
        self.image
    }
}

/// Layer before alpha premultiplication. Cannot be composited.
#[derive(Clone, Debug, PartialEq)]
pub struct StraightLayer {
    image: StraightRgba,
    alpha: f64,
    color: ColorSpec,
}

impl StraightLayer {
    /// Straight-alpha pixels.
    pub fn image(&self) -> &StraightRgba {
        &self.image
    }

    /// Uniform opacity of this layer.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Multiply color channels by alpha.
    pub fn premultiply(self) -> Layer {
        Layer {
            image: self.image.premultiply(),
            alpha: self.alpha,
            color: self.color,
        }
    }
}

/// Build a premultiplied layer from an intensity map.
///
/// With `normalize`, a private copy of the map is first divided by its own
/// maximum, which must be positive. The caller's map is never modified.
pub fn make_layer(
    map: &IntensityMap,
    color: &ColorSpec,
    alpha: f64,
    normalize: bool,
    resolver: &dyn ColorResolver,
) -> BlendResult<Layer> {
    Ok(make_straight_layer(map, color, alpha, normalize, resolver)?.premultiply())
}

/// Build a layer and stop before premultiplication.
pub fn make_straight_layer(
    map: &IntensityMap,
    color: &ColorSpec,
    alpha: f64,
    normalize: bool,
    resolver: &dyn ColorResolver,
) -> BlendResult<StraightLayer> {
    let alpha = math::check_alpha(None, alpha)?;

    let mut intensity = map.data().to_vec();
    if normalize {
        math::normalize_to_peak(&mut intensity, "intensity map")?;
    }

    let [r, g, b] = resolver.resolve(color)?.channels();
    let mut rgb = Vec::with_capacity(intensity.len() * 3);
    for v in &intensity {
        rgb.extend_from_slice(&[v * r, v * g, v * b]);
    }
    let alpha_plane = vec![alpha; intensity.len()];

    let image = StraightRgba::from_rgb_and_alpha(map.dims(), &rgb, &alpha_plane)?;
    Ok(StraightLayer {
        image,
        alpha,
        color: color.clone(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/compose/layer.rs"]
mod tests;
