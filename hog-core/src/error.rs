use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HogError {
    #[error("Path does not exist: {0}")]
    PathNotFound(PathBuf),

    #[error("Cannot read start path {path}: {source}")]
    RootUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Standard output is not an interactive terminal")]
    NotATerminal,

    #[error("Scan thread panicked")]
    ScanPanicked,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, HogError>;
