//! Options for scanning and minifying.

use std::sync::Arc;

use crate::lexer::KeywordSet;

/// Options for [`scan_with`](crate::scan_with).
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// Replacement keyword set. `None` uses [`KeywordSet::postgres`].
    pub keywords: Option<Arc<KeywordSet>>,
}

impl ScanOptions {
    /// Creates options using the default keyword set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the keyword set.
    #[must_use]
    pub fn keywords(mut self, keywords: impl Into<Arc<KeywordSet>>) -> Self {
        self.keywords = Some(keywords.into());
        self
    }

    /// Returns the active keyword set.
    #[must_use]
    pub fn keyword_set(&self) -> &KeywordSet {
        self.keywords.as_deref().unwrap_or_else(KeywordSet::postgres)
    }
}

/// Options for [`minify_with`](crate::minify_with).
#[derive(Debug, Clone)]
pub struct MinifyOptions {
    /// Replacement keyword set. `None` uses [`KeywordSet::postgres`].
    pub keywords: Option<Arc<KeywordSet>>,
    /// Render comments as `/* ... */` (default: false).
    pub include_comments: bool,
    /// Render a trailing `;` (default: true).
    pub include_trailing_semicolon: bool,
}

impl Default for MinifyOptions {
    fn default() -> Self {
        Self {
            keywords: None,
            include_comments: false,
            include_trailing_semicolon: true,
        }
    }
}

impl MinifyOptions {
    /// Creates the default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the keyword set.
    #[must_use]
    pub fn keywords(mut self, keywords: impl Into<Arc<KeywordSet>>) -> Self {
        self.keywords = Some(keywords.into());
        self
    }

    /// Sets whether comments are kept.
    #[must_use]
    pub const fn include_comments(mut self, include: bool) -> Self {
        self.include_comments = include;
        self
    }

    /// Sets whether a trailing `;` is kept.
    #[must_use]
    pub const fn include_trailing_semicolon(mut self, include: bool) -> Self {
        self.include_trailing_semicolon = include;
        self
    }

    /// Returns the active keyword set.
    #[must_use]
    pub fn keyword_set(&self) -> &KeywordSet {
        self.keywords.as_deref().unwrap_or_else(KeywordSet::postgres)
    }

    /// Returns the scan options these minify options imply.
    #[must_use]
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            keywords: self.keywords.clone(),
        }
    }
}
