use std::path::PathBuf;
use thiserror::Error;

/// nbstrip unified error type
#[derive(Error, Debug)]
pub enum NbStripError {
    #[error("Failed to read notebook {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write notebook {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed notebook {source_name}: {source}")]
    Parse {
        source_name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Output error: {0}")]
    Output(String),
}

pub type NbStripResult<T> = Result<T, NbStripError>;
