// Errors surfaced while locating and reading status data.

use std::path::PathBuf;

/// Fatal conditions for a status read. Malformed lines and bad numbers are
/// tolerated by the reader and never show up here.
#[derive(Debug, thiserror::Error)]
pub enum StatusError {
    /// The status file or main config could not be opened.
    #[error("cannot open '{}': {source}", path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A read failed part-way through the stream.
    #[error("read failed: {source}")]
    Read { source: std::io::Error },

    /// The main config has no status_file / status_log directive.
    #[error("no status file configured in '{}'", config.display())]
    NoStatusFile { config: PathBuf },
}

pub type Result<T> = std::result::Result<T, StatusError>;
