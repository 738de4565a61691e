pub(crate) mod resolver;
mod table;
