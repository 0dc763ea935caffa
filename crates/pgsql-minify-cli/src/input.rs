//! Reading statements and keyword lists.

use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::{CliError, Result};

/// Reads a statement from `path`, or from stdin when no path is given.
pub fn read_statement(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => read_file(path),
        None => read_from(std::io::stdin().lock()),
    }
}

/// Reads a statement from any reader.
pub fn read_from(mut reader: impl Read) -> Result<String> {
    let mut sql = String::new();
    reader.read_to_string(&mut sql).map_err(CliError::Stdin)?;
    Ok(sql)
}

/// Reads a whitespace-separated keyword list.
pub fn read_keywords(path: &Path) -> Result<Vec<String>> {
    let words: Vec<String> = read_file(path)?
        .split_whitespace()
        .map(str::to_lowercase)
        .collect();
    if words.is_empty() {
        return Err(CliError::EmptyKeywordList(path.to_path_buf()));
    }
    debug!(count = words.len(), path = %path.display(), "loaded keyword list");
    Ok(words)
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })
}
