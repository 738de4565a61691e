//! cubeblend blends slices of a 3D data cube into one RGBA image.
//!
//! Each selected slice is a monochromatic brightness map. It is tinted with its
//! own color, given an opacity, and composited bottom to top with the
//! Porter-Duff "over" operator on alpha-premultiplied pixels.
//!
//! # Pipeline overview
//!
//! 1. **Load** (optional): `path -> Cube` through a [`CubeLoader`] (FITS or JSON)
//! 2. **Select**: `Cube + Selection -> Cube` ([`Stack::select`]), order is stacking order
//! 3. **Layer**: every slice becomes a premultiplied [`Layer`] ([`make_layer`])
//! 4. **Compose**: layers are folded over an opaque background ([`Compositor::run`])
//! 5. **Stretch**: color channels are scaled so the brightest value is 1
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Pure runs**: the compositor keeps no state and never mutates caller buffers.
//! - **No IO in the engine**: files are only touched by loaders and [`Recipe::load`].
//! - **Premultiplied by type**: [`over`] only accepts [`PremulRgba`].
//!
//! When no alphas are given, content layer `k` (bottom = 1) gets `1 / (k + 1)`,
//! so background and every slice contribute equally to what the viewer sees
//! (see [`visible_contributions`]).
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod color;
mod compose;
mod cube;
mod foundation;
mod recipe;
mod source;

pub use color::resolver::{ColorResolver, ColorSpec, NamedColors};
pub use compose::alpha::{default_alphas, resolve_alphas, visible_contributions};
pub use compose::engine::{Composite, CompositeOptions, Compositor};
pub use compose::image::{PremulRgba, StraightRgba};
pub use compose::layer::{Layer, StraightLayer, make_layer, make_straight_layer};
pub use compose::over::{over, over_in_place};
pub use compose::stretch::stretch_contrast;
pub use cube::model::{Cube, IntensityMap};
pub use cube::reshape::{flip_y, mirror_fullsize};
pub use cube::stack::{Selection, Stack};
pub use foundation::core::{Dims, Rgb};
pub use foundation::error::{BlendError, BlendResult};
pub use recipe::Recipe;
pub use source::fits::{FitsLoader, parse_fits};
pub use source::json::{CubeDocument, JsonCubeLoader};
pub use source::loader::{CubeLoader, load_cube};
