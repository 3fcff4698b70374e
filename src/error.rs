use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocGuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to open document: {path}")]
    DocumentOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Not a readable .docx document: {path}: {detail}")]
    DocumentParse { path: PathBuf, detail: String },

    #[error("Failed to write report: {path}")]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DocGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
