use thiserror::Error;

#[derive(Error, Debug)]
pub enum KunaError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("missing API credentials: {0}")]
    MissingCredentials(String),

    #[error("encoding error: {0}")]
    Encoding(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("not implemented: {0}")]
    NotImplemented(&'static str),

    #[error("configuration error: {0}")]
    Config(#[from] crate::core::config::ConfigError),
}

impl KunaError {
    /// True when the server answered with a non-2xx status.
    pub fn is_api_error(&self) -> bool {
        matches!(self, Self::Api { .. })
    }
}
