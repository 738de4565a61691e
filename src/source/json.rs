use std::path::Path;

use crate::cube::model::Cube;
use crate::foundation::core::Dims;
use crate::foundation::error::{BlendError, BlendResult};
use crate::source::loader::{CubeLoader, read_source};

/// JSON cube document: `{"shape": [slices, height, width], "data": [...]}`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CubeDocument {
    /// `[slices, height, width]`.
    pub shape: [usize; 3],
    /// Slice-major, row-major values.
    pub data: Vec<f64>,
}

impl CubeDocument {
    /// Check the shape and build the cube.
    pub fn into_cube(self) -> BlendResult<Cube> {
        let [slices, height, width] = self.shape;
        Cube::new(slices, Dims::new(width, height), self.data)
    }
}

impl From<&Cube> for CubeDocument {
    fn from(cube: &Cube) -> Self {
        let (slices, height, width) = cube.shape();
        Self {
            shape: [slices, height, width],
            data: cube.data().to_vec(),
        }
    }
}

/// Loads [`CubeDocument`] files.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonCubeLoader;

impl CubeLoader for JsonCubeLoader {
    #[tracing::instrument(skip(self))]
    fn load(&self, path: &Path) -> BlendResult<Cube> {
        let bytes = read_source(path)?;
        let doc: CubeDocument = serde_json::from_slice(&bytes)
            .map_err(|e| BlendError::load(format!("parse cube JSON '{}': {e}", path.display())))?;
        doc.into_cube()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/source/json.rs"]
mod tests;
