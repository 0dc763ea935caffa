//! # pgsql-minify-core
//!
//! A tokenizer and minifier for single Postgres-flavoured SQL statements.
//!
//! This crate provides:
//! - A hand-written single-pass lexer that understands dollar-quoted strings,
//!   `e'...'` / `u&'...'` strings, `u&"..."` identifiers, `b'...'` / `x'...'`
//!   bit-strings, `$n` parameters and `::` / `..` punctuation
//! - A minifier that re-spaces the token stream canonically and lowercases
//!   keywords and identifiers
//!
//! Neither step ever fails. Malformed spans are dropped and scanning stops at
//! the first `;`, so the result is a best-effort rendering, not a validation.
//!
//! ## Minifying
//!
//! ```rust
//! use pgsql_minify_core::{minify, minify_with, MinifyOptions};
//!
//! assert_eq!(minify("Select   ( 2*10/x )\n;"), "select (2 * 10 / x);");
//!
//! let options = MinifyOptions::new()
//!     .include_comments(true)
//!     .include_trailing_semicolon(false);
//! assert_eq!(
//!     minify_with("SELECT --note\n1;", &options),
//!     "select /* note */ 1"
//! );
//! ```
//!
//! ## Scanning
//!
//! ```rust
//! use pgsql_minify_core::{scan, TokenKind};
//!
//! let tokens = scan("SELECT $1::int");
//! let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [TokenKind::Keyword, TokenKind::Parameter, TokenKind::DoubleColon, TokenKind::Keyword]
//! );
//! assert_eq!(tokens[0].text(), Some("SELECT"));
//! ```

pub mod formatter;
pub mod lexer;
pub mod options;

pub use formatter::Minifier;
pub use lexer::{KeywordSet, Lexer, Token, TokenKind};
pub use options::{MinifyOptions, ScanOptions};

/// Tokenizes one statement with the default keyword set.
#[must_use]
pub fn scan(sql: &str) -> Vec<Token> {
    Lexer::new(sql).tokenize()
}

/// Tokenizes one statement.
#[must_use]
pub fn scan_with(sql: &str, options: &ScanOptions) -> Vec<Token> {
    Lexer::with_keywords(sql, options.keyword_set()).tokenize()
}

/// Minifies one statement with the default options.
#[must_use]
pub fn minify(sql: &str) -> String {
    minify_with(sql, &MinifyOptions::default())
}

/// Minifies one statement.
#[must_use]
pub fn minify_with(sql: &str, options: &MinifyOptions) -> String {
    Minifier::new(options).minify(sql)
}
