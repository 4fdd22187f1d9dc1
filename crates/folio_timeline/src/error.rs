use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TimelineError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed timeline document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate milestone id {0}")]
    DuplicateId(u32),
}
