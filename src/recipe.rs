use std::path::Path;

use anyhow::Context as _;

use crate::color::resolver::{ColorResolver, ColorSpec};
use crate::compose::engine::{Composite, CompositeOptions, Compositor};
use crate::cube::model::Cube;
use crate::cube::reshape;
use crate::cube::stack::{Selection, Stack};
use crate::foundation::error::{BlendError, BlendResult};

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Everything needed to turn a loaded cube into a composite.
///
/// ```json
/// {
///   "slices": [5, 0, 8],
///   "colors": ["r", "g", "b"],
///   "alphas": null,
///   "background": "black",
///   "normalize_slices": false,
///   "fullsize": true,
///   "flip_y": true
/// }
/// ```
pub struct Recipe {
    /// Slices to blend, bottom first.
    pub slices: Selection,
    /// One color per selected slice.
    pub colors: Vec<ColorSpec>,
    /// Compositing options, inlined into the recipe object.
    #[serde(flatten)]
    pub options: CompositeOptions,
    /// Mirror half-size cubes to full size before selecting.
    pub fullsize: bool,
    /// Reverse row order before selecting (FITS rows run bottom-up).
    pub flip_y: bool,
}

impl Recipe {
    /// Parse a recipe from JSON text.
    ///
    /// A malformed `slices` entry fails with [`BlendError::InvalidSelection`];
    /// every other problem is a [`BlendError::Validation`].
    pub fn from_json_str(s: &str) -> BlendResult<Self> {
        let value: serde_json::Value = serde_json::from_str(s)
            .map_err(|e| BlendError::validation(format!("recipe JSON: {e}")))?;
        if let Some(slices) = value.get("slices") {
            Selection::from_json(slices)?;
        }
        serde_json::from_value(value)
            .map_err(|e| BlendError::validation(format!("recipe JSON: {e}")))
    }

    /// Read and parse a recipe file.
    pub fn load(path: &Path) -> BlendResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read recipe '{}'", path.display()))?;
        Self::from_json_str(&text)
    }

    /// Check values that do not depend on the cube.
    pub fn validate(&self) -> BlendResult<()> {
        if self.colors.is_empty() {
            return Err(BlendError::validation("recipe needs at least one color"));
        }
        self.options.validate()
    }

    /// Reshape, select and composite `cube`.
    pub fn apply(&self, cube: &Cube, resolver: &dyn ColorResolver) -> BlendResult<Composite> {
        self.validate()?;
        let selected = Stack::select(&self.prepare(cube)?, &self.slices)?;
        Compositor::run(&selected, &self.colors, &self.options, resolver)
    }

    /// Apply the reshaping steps only.
    pub fn prepare(&self, cube: &Cube) -> BlendResult<Cube> {
        let mut cube = if self.fullsize {
            reshape::mirror_fullsize(cube)?
        } else {
            cube.clone()
        };
        if self.flip_y {
            cube = reshape::flip_y(&cube)?;
        }
        Ok(cube)
    }
}

#[cfg(test)]
#[path = "../tests/unit/recipe.rs"]
mod tests;
