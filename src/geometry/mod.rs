pub(crate) mod export;
pub(crate) mod interpolate;
pub(crate) mod mesh;
pub(crate) mod poses;
pub(crate) mod topology;
