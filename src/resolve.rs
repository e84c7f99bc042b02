pub(crate) mod library;
pub(crate) mod resolver;
pub(crate) mod settings;
