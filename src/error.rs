use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, ToolError>;

/// Error type covering the different failure cases that can occur while the
/// tool fetches, reshapes, or writes executive-order data.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Wrapper for IO failures such as creating or writing the output file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Raised when a page body is not valid JSON for the expected schema.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Transport-level failures bubbled up from the HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Errors bubbled up from the CSV encoder.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Raised when the API answers with anything other than `200 OK`.
    #[error("received non 200 status code {status} from {url}")]
    UnexpectedStatus { url: String, status: u16 },

    /// Raised when the endpoint or a pagination link is not a valid URL.
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Raised when the tracing subscriber fails to initialise.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}
