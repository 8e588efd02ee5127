use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type used across the entire application.
#[derive(Debug, Error)]
pub enum BattError {
    /// A quantity file exists but could not be read.
    #[error("cannot read '{path}': {source}", path = path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T, E = BattError> = std::result::Result<T, E>;
