use atomlink::model::serialize::ParseError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Invalid JSON document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("The document does not declare a 'class' field")]
    MissingClass,

    #[error("Unknown document class '{found}'")]
    UnknownClass { found: String },

    #[error("Failed to read '{path}': {source}", path = path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse '{path}': {source}", path = path.display())]
    FileParsing {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("{failed} of {total} document(s) failed validation")]
    Validation { failed: usize, total: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
