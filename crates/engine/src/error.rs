use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Walk error: {0}")]
    Walk(#[from] ignore::Error),

    #[error("Invalid exclude pattern '{pattern}': {source}")]
    Glob {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Failed to access settings file '{path}': {source}")]
    SettingsIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed settings file '{path}': {source}")]
    SettingsFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("No project root is open: '{0}' is not a directory")]
    NoProjectRoot(PathBuf),

    #[error("No directories to count. Pass a directory or configure includeDirs.")]
    NoIncludeDirs,

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl EngineError {
    /// Path the error is about, when it names one.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::FileRead { path, .. }
            | Self::SettingsIo { path, .. }
            | Self::SettingsFormat { path, .. }
            | Self::NoProjectRoot(path) => Some(path),
            Self::Walk(e) => walk_error_path(e),
            Self::Glob { .. } | Self::NoIncludeDirs | Self::Config(_) => None,
        }
    }
}

fn walk_error_path(error: &ignore::Error) -> Option<&Path> {
    match error {
        ignore::Error::WithPath { path, .. } => Some(path),
        ignore::Error::Loop { child, .. } => Some(child),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            walk_error_path(err)
        }
        _ => None,
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
