//! Error types for the catalog viewer.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the catalog viewer.
#[derive(Error, Debug)]
pub enum Error {
    // Preflight errors
    #[error("TMDB API key not configured. Set TMDB_API_KEY or [tmdb].api_key in config.toml")]
    TmdbApiKeyMissing,

    // Route errors
    #[error("Invalid route: {0}")]
    InvalidRoute(String),

    // Config errors
    #[error("Config file not found: {0}")]
    ConfigNotFound(String),

    #[error("Invalid config file: {0}")]
    InvalidConfig(#[from] toml::de::Error),

    #[error("HTTP client setup failed: {0}")]
    ClientSetup(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // JSON errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // Generic errors
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a generic error from a string.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }
}
