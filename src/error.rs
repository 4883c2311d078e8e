//! Crate error type.

use std::path::PathBuf;

use crate::metadata::MetadataField;

pub type Result<T> = std::result::Result<T, Error>;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("directory walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("dialog error: {0}")]
    Dialog(String),
    #[error("GUI error: {0}")]
    Gui(#[from] eframe::Error),

    #[error("decision for field {0} not found in decisions")]
    MissingDecision(MetadataField),
    #[error("field {0} must be set to generate an identifier")]
    IncompleteMetadata(MetadataField),
    #[error("edition must be set to determine the executable path")]
    EditionUnset,

    #[error("failed to download {url}: HTTP {status}")]
    DownloadStatus { url: String, status: reqwest::StatusCode },
    #[error("could not find {name} in {}", dir.display())]
    ArtifactNotFound { name: String, dir: PathBuf },

    #[error("configuration file at {} not found and initialization was declined", path.display())]
    InitDeclined { path: PathBuf },

    #[error("database not initialized")]
    DatabaseNotInitialized,
    #[error("element with id {id} not found in table {table}")]
    ElementNotFound { id: String, table: String },

    #[error("unknown {kind}: {name}")]
    UnknownName { kind: &'static str, name: String },
}

// dialog::Error implements Display but not std::error::Error
impl From<dialog::Error> for Error {
    fn from(e: dialog::Error) -> Self {
        Error::Dialog(e.to_string())
    }
}
