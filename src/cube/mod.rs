pub(crate) mod model;
pub(crate) mod reshape;
pub(crate) mod stack;
