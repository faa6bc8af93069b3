//! Error types for face2face-utils.

use thiserror::Error;

/// Main error type for the crate.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    // Model registry errors
    #[error("Model {0} not found")]
    ModelNotFound(String),

    // Download errors
    #[error("Download failed: {0}")]
    Download(String),

    // Image errors
    #[error("Could not load image {input}. Error: {message}")]
    ImageLoad { input: String, message: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    // URL parsing errors
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl Error {
    /// Build an image-load error from a source identifier and any displayable cause.
    pub fn image_load(input: impl Into<String>, cause: impl std::fmt::Display) -> Self {
        Error::ImageLoad {
            input: input.into(),
            message: cause.to_string(),
        }
    }
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes used by the binary.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const DOWNLOAD_ERROR: i32 = 2;
    pub const CONFIG_ERROR: i32 = 3;
    pub const MODEL_NOT_FOUND: i32 = 4;
    pub const IMAGE_ERROR: i32 = 5;
    pub const UNEXPECTED_ERROR: i32 = 6;
}
