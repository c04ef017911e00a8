/// Convenience result type used across mipfill.
pub type MipfillResult<T> = Result<T, MipfillError>;

/// Top-level error taxonomy used by the library APIs.
#[derive(thiserror::Error, Debug)]
pub enum MipfillError {
    /// Invalid caller-provided buffers or options.
    #[error("validation error: {0}")]
    Validation(String),

    /// Failures while running a pass (thread pool setup, internal invariants).
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Errors when serializing or deserializing options.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MipfillError {
    /// Build a [`MipfillError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`MipfillError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`MipfillError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
