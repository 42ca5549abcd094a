//! Crate error type.

use std::path::PathBuf;

use crate::config::ConfigError;
use crate::grid::FormatError;

/// Errors surfaced to the command-line layer.
///
/// Every variant is terminal for the current invocation; the kinds are kept
/// apart so the binary can word its message for each.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Invalid art file '{}': {source}", path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: FormatError,
    },

    #[error("Failed to read art file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("ASCII art file named '{name}' not found in {}", dir.display())]
    ArtNotFound { name: String, dir: PathBuf },

    #[error("Directory does not exist: {}", dir.display())]
    MissingDirectory { dir: PathBuf },

    #[error("No ASCII art files found in {}", dir.display())]
    EmptyLibrary { dir: PathBuf },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Config file already exists: {}", path.display())]
    ConfigExists { path: PathBuf },
}
