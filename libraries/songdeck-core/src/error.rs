/// Core error types for Songdeck
use thiserror::Error;

/// Result type alias using `CatalogError`
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Retrieval failure while fetching the catalog, album metadata, or a track listing
///
/// These never reach the end user: `CatalogStore` substitutes defaults
/// (empty lists, placeholder metadata) and logs the cause.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Transport-level failure (connection refused, timeout, ...)
    #[error("Request failed: {0}")]
    Request(String),

    /// Server answered with a non-success status
    #[error("Unexpected status {status} from {url}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Requested URL
        url: String,
    },

    /// Response body could not be parsed
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Album (or other entity) absent from the catalog
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Kind of entity that was looked up
        entity: String,
        /// Identifier that was looked up
        id: String,
    },

    /// Base URL could not be used to build request URLs
    #[error("Invalid catalog URL: {0}")]
    InvalidUrl(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl CatalogError {
    /// Create a request error
    pub fn request(msg: impl Into<String>) -> Self {
        Self::Request(msg.into())
    }

    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }
}
