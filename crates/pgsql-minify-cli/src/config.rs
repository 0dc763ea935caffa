//! Configuration for the command-line tool.
//!
//! Settings come from an optional JSON file; command-line flags override it.
//!
//! ```json
//! {
//!   "includeComments": true,
//!   "includeTrailingSemicolon": false,
//!   "keywords": ["select", "from", "where"]
//! }
//! ```

use std::path::Path;
use std::sync::Arc;

use pgsql_minify_core::{KeywordSet, MinifyOptions, ScanOptions};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CliError, Result};

fn default_true() -> bool {
    true
}

/// Settings shared by all subcommands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Config {
    /// Render comments (default: false).
    #[serde(default)]
    pub include_comments: bool,

    /// Render a trailing `;` (default: true).
    #[serde(default = "default_true")]
    pub include_trailing_semicolon: bool,

    /// Replacement keyword list. `None` keeps the Postgres defaults. An
    /// empty list is rejected by [`Config::load`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            include_comments: false,
            include_trailing_semicolon: true,
            keywords: None,
        }
    }
}

impl Config {
    /// Parses a config from JSON text.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Loads a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&json).map_err(|source| CliError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        if config
            .keywords
            .as_ref()
            .is_some_and(|words| words.iter().all(|word| word.trim().is_empty()))
        {
            return Err(CliError::EmptyKeywordList(path.to_path_buf()));
        }
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Returns the keyword set override, if any.
    #[must_use]
    pub fn keyword_set(&self) -> Option<Arc<KeywordSet>> {
        self.keywords
            .as_ref()
            .map(|words| Arc::new(words.iter().collect()))
    }

    /// Builds minify options from this config.
    #[must_use]
    pub fn minify_options(&self) -> MinifyOptions {
        MinifyOptions {
            keywords: self.keyword_set(),
            include_comments: self.include_comments,
            include_trailing_semicolon: self.include_trailing_semicolon,
        }
    }

    /// Builds scan options from this config.
    #[must_use]
    pub fn scan_options(&self) -> ScanOptions {
        self.minify_options().scan_options()
    }
}
