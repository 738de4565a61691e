use std::path::Path;

use crate::cube::model::Cube;
use crate::foundation::error::{BlendError, BlendResult};
use crate::source::fits::FitsLoader;
use crate::source::json::JsonCubeLoader;

/// Produces a cube from an external source.
///
/// Implementations report every source problem as [`BlendError::Load`] so
/// callers can tell bad data files apart from bad compositing parameters.
pub trait CubeLoader {
    /// Load the cube stored at `path`.
    fn load(&self, path: &Path) -> BlendResult<Cube>;
}

/// Load a cube, picking the loader from the file extension.
///
/// `.fits`, `.fit` and `.fts` go to [`FitsLoader`]; `.json` to [`JsonCubeLoader`].
pub fn load_cube(path: &Path) -> BlendResult<Cube> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    match ext.as_str() {
        "fits" | "fit" | "fts" => FitsLoader.load(path),
        "json" => JsonCubeLoader.load(path),
        _ => Err(BlendError::load(format!(
            "'{}': unsupported cube format (expected .fits or .json)",
            path.display()
        ))),
    }
}

pub(crate) fn read_source(path: &Path) -> BlendResult<Vec<u8>> {
    if !path.is_file() {
        return Err(BlendError::load(format!(
            "'{}' is not a regular file or is missing",
            path.display()
        )));
    }
    std::fs::read(path).map_err(|e| BlendError::load(format!("read '{}': {e}", path.display())))
}

#[cfg(test)]
#[path = "../../tests/unit/source/loader.rs"]
mod tests;
