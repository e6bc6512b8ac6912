use std::path::PathBuf;

use thiserror::Error;

/// Failure to build the episode collection at startup.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open episode data '{}': {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read episode data: {0}")]
    Read(#[from] std::io::Error),
    #[error("malformed episode data: {0}")]
    Parse(#[from] serde_json::Error),
}
