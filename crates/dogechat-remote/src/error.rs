use dogechat_config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RemoteError {
    /// Transport failure or a non-success HTTP status.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid config endpoint: {0}")]
    InvalidEndpoint(String),

    /// The body arrived but is not a usable config document.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, RemoteError>;
