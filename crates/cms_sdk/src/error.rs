use reqwest::StatusCode;
use thiserror::Error;

/// Errors returned by the schema API client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The CMS rejected the configured credentials (HTTP 401).
    #[error("CMS authentication failed")]
    Authentication,
    /// No API answered at the configured URL (HTTP 404).
    #[error("CMS API not found")]
    NotFound,
    /// The schema endpoint refused the request (HTTP 403). Carries the
    /// server's own explanation.
    #[error("access to the schema was denied: {0}")]
    Access(String),
    /// Any other non-success response.
    #[error("the CMS API returned an unexpected status: {0}")]
    Service(StatusCode),
    /// The request never completed, or the body could not be decoded.
    #[error("request to the CMS API failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Errors resolving a [`ClientConfig`](crate::ClientConfig) from the
/// environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable {0} is not set")]
    MissingVar(&'static str),
    #[error("API_URL is not a valid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("{0}")]
    Dotenv(String),
}
