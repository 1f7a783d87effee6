/// Convenience result type used across orbglow.
pub type OrbResult<T> = Result<T, OrbError>;

/// Error taxonomy for everything outside the renderer core.
///
/// [`crate::OrbRenderer::render`] itself cannot fail; these errors come from parameter
/// validation, rasterization setup, scene loading, and output.
#[derive(thiserror::Error, Debug)]
pub enum OrbError {
    /// Invalid user-provided parameters or scene data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors raised while preparing or reading back a raster surface.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing scenes and traces.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl OrbError {
    /// Build an [`OrbError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`OrbError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build an [`OrbError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
