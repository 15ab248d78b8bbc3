use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, ExportError>;

/// Error type covering the different failure cases that can occur while the
/// tool talks to the dashboard, shapes rows, or emits the report.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Wrapper for IO failures such as console reads or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Transport-level failures: connection errors, timeouts, and non-2xx
    /// responses. Never retried; the run aborts on the first one.
    #[error("API request failed: {0}")]
    Api(#[from] reqwest::Error),

    /// Raised when a response body is not the JSON the endpoint promises.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Errors bubbled up from the Excel writer implementation.
    #[error("Excel write error: {0}")]
    ExcelWrite(#[from] rust_xlsxwriter::XlsxError),

    /// Raised when a numbered selection falls outside the listed range.
    #[error("selection {index} is out of range ({count} items listed)")]
    SelectionOutOfRange { index: usize, count: usize },

    /// Raised when the API key has no visible organizations to choose from.
    #[error("no organizations are visible to this API key")]
    NoOrganizations,

    /// Raised when the tracing subscriber fails to initialise.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}
