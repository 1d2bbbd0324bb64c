use std::path::PathBuf;

use thiserror::Error;

use crate::feed::FetchError;

/// Convenient result alias for the HazardWatch library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when the upstream hazard feed could not be queried. Carries the
    /// fetch cause so callers can distinguish timeouts from bad responses.
    #[error("upstream hazard feed unavailable: {0}")]
    UpstreamUnavailable(#[source] FetchError),

    /// Raised when a content file holds something other than the expected
    /// JSON array.
    #[error("malformed content file {path}: {source}")]
    MalformedContent {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
