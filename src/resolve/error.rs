use thiserror::Error;

pub type Result<T> = std::result::Result<T, ResolveError>;

/// Failure of an online lookup.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// No matching result, a 404, or an empty body.
    #[error("nothing found: {0}")]
    NotFound(String),

    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },

    #[error("cannot decode response from {url}: {source}")]
    Parse {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// The downloaded artwork could not be stored.
    #[error("cannot store artwork: {0}")]
    Io(#[from] std::io::Error),
}

impl ResolveError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
