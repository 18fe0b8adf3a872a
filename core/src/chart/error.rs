//! Error types for progress chart rendering

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("cannot allocate a {width}x{height} chart")]
    Canvas { width: u32, height: u32 },

    #[error("failed to create chart directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode chart {path}: {reason}")]
    Encode { path: PathBuf, reason: String },

    #[error("failed to write chart {path}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
