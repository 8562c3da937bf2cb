pub(crate) mod engine;
pub(crate) mod instructions;
pub(crate) mod palette;
