//! Rendering token streams for display.

use pgsql_minify_core::Token;

use crate::error::Result;

/// Renders tokens one per line as `<code>\t<text>`.
#[must_use]
pub fn token_lines(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|token| match token.text() {
            Some(text) => format!("{}\t{text}\n", token.kind.code()),
            None => format!("{}\n", token.kind.code()),
        })
        .collect()
}

/// Renders tokens as a pretty-printed JSON array.
pub fn token_json(tokens: &[Token]) -> Result<String> {
    Ok(serde_json::to_string_pretty(tokens)?)
}
