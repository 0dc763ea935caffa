//! Error types for the command-line tool.

use std::path::PathBuf;

/// Errors that can occur while reading input or configuration.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// A file could not be read.
    #[error("Failed to read '{path}': {source}")]
    Io {
        /// Path of the file.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Standard input could not be read.
    #[error("Failed to read standard input: {0}")]
    Stdin(#[source] std::io::Error),

    /// The config file is not valid JSON or has unknown keys.
    #[error("Invalid config file '{path}': {source}")]
    Config {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying parse error.
        source: serde_json::Error,
    },

    /// A keyword list file, or the `keywords` array of a config file, holds
    /// no words.
    #[error("Keyword list '{0}' contains no words")]
    EmptyKeywordList(PathBuf),

    /// Tokens could not be written as JSON.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for command-line operations.
pub type Result<T> = std::result::Result<T, CliError>;
