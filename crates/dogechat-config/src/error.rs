use thiserror::Error;

/// Errors produced while turning a configuration document into a
/// [`ChatConfig`](crate::ChatConfig).
///
/// Only document-level failures show up here. Bad URLs and unknown users are
/// answered locally by the query methods and never become errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required field is missing or has the wrong type.
    #[error("Malformed config document: {0}")]
    MalformedDocument(#[from] serde_json::Error),

    /// Reading a local document failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ConfigError>;
