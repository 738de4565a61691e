pub(crate) mod alpha;
pub(crate) mod engine;
pub(crate) mod image;
pub(crate) mod layer;
pub(crate) mod over;
pub(crate) mod stretch;
