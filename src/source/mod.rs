pub(crate) mod fits;
pub(crate) mod json;
pub(crate) mod loader;
