//! Errors raised while preparing fakes.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from loading fixture data.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// The seed file could not be read.
    #[error("failed to read seed file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The seed file is not a valid deployment map.
    #[error("invalid seed file {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
