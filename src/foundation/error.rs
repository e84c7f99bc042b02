/// Convenience result type used across charart.
pub type IllustrationResult<T> = Result<T, IllustrationError>;

/// Top-level error taxonomy returned by the resolution pipeline.
#[derive(thiserror::Error, Debug)]
pub enum IllustrationError {
    /// The container decoder could not parse the supplied bytes.
    #[error("decode error: {0:#}")]
    Decode(anyhow::Error),

    /// Neither a color nor an alpha layer matched the request.
    #[error("illustration not found: {0}")]
    IllustrationNotFound(String),

    /// An alpha layer matched but no color layer did.
    #[error("incomplete illustration: {0}")]
    IncompleteIllustration(String),

    /// Color and alpha layers disagree on size.
    #[error(
        "dimension mismatch: color layer is {}x{}, alpha layer is {}x{}",
        .color.0,
        .color.1,
        .alpha.0,
        .alpha.1
    )]
    DimensionMismatch {
        /// Color layer `(width, height)`.
        color: (u32, u32),
        /// Alpha layer `(width, height)`.
        alpha: (u32, u32),
    },

    /// The asset store has no blob under the requested key.
    #[error("asset not found: {0}")]
    AssetNotFound(String),

    /// A decoded texture violates the raw texture layout.
    #[error("invalid texture: {0}")]
    InvalidTexture(String),

    /// Invalid caller-provided data (requests, keys, settings).
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing settings.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl IllustrationError {
    /// Build an [`IllustrationError::Decode`] value from any decoder failure.
    pub fn decode(err: impl Into<anyhow::Error>) -> Self {
        Self::Decode(err.into())
    }

    /// Build an [`IllustrationError::IllustrationNotFound`] value.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::IllustrationNotFound(msg.into())
    }

    /// Build an [`IllustrationError::IncompleteIllustration`] value.
    pub fn incomplete(msg: impl Into<String>) -> Self {
        Self::IncompleteIllustration(msg.into())
    }

    /// Build an [`IllustrationError::AssetNotFound`] value.
    pub fn asset_not_found(key: impl Into<String>) -> Self {
        Self::AssetNotFound(key.into())
    }

    /// Build an [`IllustrationError::InvalidTexture`] value.
    pub fn invalid_texture(msg: impl Into<String>) -> Self {
        Self::InvalidTexture(msg.into())
    }

    /// Build an [`IllustrationError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`IllustrationError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
