/// Convenience result type used across orizuru.
pub type OrizuruResult<T> = Result<T, OrizuruError>;

/// Top-level error taxonomy used by engine APIs.
///
/// The folding engine itself is pure computation; these errors surface at the boundaries
/// (configuration loading, pose-library validation, export and CLI plumbing).
#[derive(thiserror::Error, Debug)]
pub enum OrizuruError {
    /// Invalid caller-provided data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Invalid or unreadable engine configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Malformed pose or topology data.
    #[error("geometry error: {0}")]
    Geometry(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl OrizuruError {
    /// Build a [`OrizuruError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`OrizuruError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`OrizuruError::Geometry`] value.
    pub fn geometry(msg: impl Into<String>) -> Self {
        Self::Geometry(msg.into())
    }

    /// Build a [`OrizuruError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
