// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckError {
    #[error("{0}")]
    Usage(String),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing the report or a usage message failed, e.g. stdout was closed.
    #[error("failed to write output: {0}")]
    Output(#[source] std::io::Error),

    /// No method/returns/signature/description table, or one with no data rows.
    /// The two cases are not told apart.
    #[error("No matching table found in {}", .0.display())]
    NoManualTable(PathBuf),
}

pub type Result<T> = std::result::Result<T, CheckError>;
