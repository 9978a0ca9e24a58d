//! Errors from content loading.

use std::path::PathBuf;

/// Errors raised while reading or parsing a bundled data file.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {what}")]
    Parse {
        what: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("publication \"{title}\" has neither a year nor a date")]
    MissingYear { title: String },
}
