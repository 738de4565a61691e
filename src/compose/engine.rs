use rayon::prelude::*;

use crate::color::resolver::{ColorResolver, ColorSpec};
use crate::compose::alpha::resolve_alphas;
use crate::compose::image::PremulRgba;
use crate::compose::layer::{Layer, make_layer};
use crate::compose::over::over_in_place;
use crate::compose::stretch::stretch_contrast;
use crate::cube::model::{Cube, IntensityMap};
use crate::foundation::error::{BlendError, BlendResult};
use crate::foundation::math;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Knobs for one compositing run.
pub struct CompositeOptions {
    /// Per-layer opacity, bottom first. `None` selects the equal-share schedule.
    pub alphas: Option<Vec<f64>>,
    /// Color of the opaque layer underneath every slice.
    pub background: ColorSpec,
    /// Premultiply layer colors by alpha. Compositing requires it.
    pub premultiply: bool,
    /// Divide the whole cube by its global peak first.
    pub normalize_cube: bool,
    /// Divide every slice by its own peak before coloring.
    pub normalize_slices: bool,
    /// Worker threads for layer construction; `None` uses the global rayon pool.
    pub threads: Option<usize>,
}

impl Default for CompositeOptions {
    fn default() -> Self {
        Self {
            alphas: None,
            background: ColorSpec::default(),
            premultiply: true,
            normalize_cube: true,
            normalize_slices: true,
            threads: None,
        }
    }
}

impl CompositeOptions {
    /// Check option values that do not depend on the cube.
    pub fn validate(&self) -> BlendResult<()> {
        if self.threads == Some(0) {
            return Err(BlendError::validation("threads must be >= 1 when set"));
        }
        if let Some(alphas) = &self.alphas {
            for (i, &a) in alphas.iter().enumerate() {
                math::check_alpha(Some(i), a)?;
            }
        }
        Ok(())
    }
}

/// Result of a compositing run.
#[derive(Clone, Debug, PartialEq)]
pub struct Composite {
    /// Stretched premultiplied RGBA image.
    pub image: PremulRgba,
    /// Alphas actually applied to the content layers, bottom first.
    pub alphas: Vec<f64>,
    /// Color peak the final stretch divided by.
    pub stretch: f64,
}

/// Stateless compositing engine.
///
/// Every run copies what it mutates; nothing is kept between runs.
pub struct Compositor;

impl Compositor {
    #[tracing::instrument(skip_all, fields(shape = ?cube.shape()))]
    /// Blend every slice of `cube` over a background and contrast-stretch.
    ///
    /// `colors[j]` tints slice `j`. Slice 0 is the bottom layer.
    pub fn run(
        cube: &Cube,
        colors: &[ColorSpec],
        opts: &CompositeOptions,
        resolver: &dyn ColorResolver,
    ) -> BlendResult<Composite> {
        opts.validate()?;

        let n = cube.slices();
        if n == 0 {
            return Err(BlendError::selection("no slices selected for compositing"));
        }
        if colors.len() != n {
            return Err(BlendError::ColorCountMismatch {
                colors: colors.len(),
                slices: n,
            });
        }
        let alphas = resolve_alphas(opts.alphas.as_deref(), n)?;
        if !opts.premultiply {
            return Err(BlendError::NotPremultiplied(
                "straight-alpha layers cannot be composited with the premultiplied over operator"
                    .to_owned(),
            ));
        }
        tracing::debug!(?alphas, explicit = opts.alphas.is_some(), "layer alphas");

        let mut cube = cube.clone();
        if opts.normalize_cube {
            let peak = math::normalize_to_peak(cube.data_mut(), "cube")?;
            tracing::debug!(peak, "normalized cube");
        }

        let background = make_layer(
            &IntensityMap::filled(cube.dims(), 1.0)?,
            &opts.background,
            1.0,
            false,
            resolver,
        )?;
        let layers = build_layers(&cube, colors, &alphas, opts, resolver)?;

        let mut image = Self::compose_layers(&background, &layers)?;
        let stretch = stretch_contrast(&mut image)?;
        tracing::debug!(stretch, "contrast stretched");

        Ok(Composite {
            image,
            alphas,
            stretch,
        })
    }

    /// Fold `layers` bottom to top over `background`, without stretching.
    pub fn compose_layers(background: &Layer, layers: &[Layer]) -> BlendResult<PremulRgba> {
        let mut acc = background.image().clone();
        for layer in layers {
            over_in_place(&mut acc, layer.image())?;
        }
        Ok(acc)
    }
}

fn build_layers(
    cube: &Cube,
    colors: &[ColorSpec],
    alphas: &[f64],
    opts: &CompositeOptions,
    resolver: &dyn ColorResolver,
) -> BlendResult<Vec<Layer>> {
    let build = || {
        (0..cube.slices())
            .into_par_iter()
            .map(|j| -> BlendResult<Layer> {
                let map = cube.map(j).ok_or_else(|| {
                    BlendError::selection(format!("slice {j} missing from cube"))
                })?;
                make_layer(&map, &colors[j], alphas[j], opts.normalize_slices, resolver)
            })
            .collect::<Vec<_>>()
    };

    let built = match opts.threads {
        Some(n) => build_thread_pool(n)?.install(build),
        None => build(),
    };

    // First failure in stack order wins, independent of scheduling.
    let mut layers = Vec::with_capacity(built.len());
    for item in built {
        layers.push(item?);
    }
    Ok(layers)
}

fn build_thread_pool(threads: usize) -> BlendResult<rayon::ThreadPool> {
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|e| BlendError::validation(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/compose/engine.rs"]
mod tests;
