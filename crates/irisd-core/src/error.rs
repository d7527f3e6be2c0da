//! Error types for irisd

/// Result type alias using irisd's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for irisd operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Model fitting and prediction errors
    #[error("model error: {0}")]
    Model(String),

    /// Artifact encoding/decoding errors
    #[error("artifact error: {0}")]
    Artifact(String),

    /// Dataset errors
    #[error("dataset error: {0}")]
    Dataset(String),

    /// Network/IO errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] bincode::Error),
}

impl Error {
    /// Create a new model error
    pub fn model(msg: impl Into<String>) -> Self {
        Self::Model(msg.into())
    }

    /// Create a new artifact error
    pub fn artifact(msg: impl Into<String>) -> Self {
        Self::Artifact(msg.into())
    }

    /// Create a new dataset error
    pub fn dataset(msg: impl Into<String>) -> Self {
        Self::Dataset(msg.into())
    }
}
