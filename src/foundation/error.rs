/// Convenience result type used across tagbloom.
pub type TagbloomResult<T> = Result<T, TagbloomError>;

/// Top-level error taxonomy used by library APIs.
#[derive(thiserror::Error, Debug)]
pub enum TagbloomError {
    /// Invalid user-provided configuration or input data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Dataset list could not be loaded or has the wrong shape.
    #[error("dataset error: {0}")]
    Dataset(String),

    /// Failures while turning markup into pixels.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TagbloomError {
    /// Build a [`TagbloomError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`TagbloomError::Dataset`] value.
    pub fn dataset(msg: impl Into<String>) -> Self {
        Self::Dataset(msg.into())
    }

    /// Build a [`TagbloomError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`TagbloomError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for TagbloomError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
