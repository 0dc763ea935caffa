//! Statement minifier.
//!
//! Reassembles a token stream into one line with minimal spacing. Keywords
//! and identifiers are lowercased; every other lexeme is written as scanned.
//! Spacing depends only on the current token and the kind of the previously
//! rendered one.

mod spacing;

use tracing::debug;

use crate::lexer::{Lexer, Token, TokenKind};
use crate::options::MinifyOptions;

use spacing::{attaches_after, is_closing, paren_spaced_after};

/// Minifies statements with a fixed set of options.
#[derive(Debug, Clone, Copy)]
pub struct Minifier<'o> {
    options: &'o MinifyOptions,
}

impl<'o> Minifier<'o> {
    /// Creates a minifier.
    #[must_use]
    pub const fn new(options: &'o MinifyOptions) -> Self {
        Self { options }
    }

    /// Scans `sql` and renders the result.
    #[must_use]
    pub fn minify(&self, sql: &str) -> String {
        let tokens = Lexer::with_keywords(sql, self.options.keyword_set()).tokenize();
        debug!(tokens = tokens.len(), "minifying statement");
        self.render(&tokens)
    }

    /// Renders an already scanned token stream.
    #[must_use]
    pub fn render(&self, tokens: &[Token]) -> String {
        let mut out = String::new();
        let mut prev = TokenKind::Unknown;

        for token in tokens {
            let kind = token.kind;
            match kind {
                TokenKind::Comment => {
                    if self.options.include_comments {
                        out.push_str(" /* ");
                        out.push_str(lexeme(token));
                        out.push_str(" */");
                    }
                }
                // A lone `;` is the whole statement and is always kept.
                TokenKind::Semicolon
                    if !self.options.include_trailing_semicolon && tokens.len() > 1 =>
                {
                    continue;
                }
                kind if is_closing(kind) => out.push_str(lexeme(token)),
                TokenKind::DoubleDot => out.push_str(" .."),
                TokenKind::LeftParen => {
                    if paren_spaced_after(prev) {
                        out.push(' ');
                    }
                    out.push('(');
                }
                TokenKind::Keyword | TokenKind::Identifier => {
                    if !attaches_after(prev) {
                        out.push(' ');
                    }
                    out.push_str(&lexeme(token).to_lowercase());
                }
                _ => {
                    if !attaches_after(prev) {
                        out.push(' ');
                    }
                    out.push_str(lexeme(token));
                }
            }
            prev = kind;
        }
        out
    }
}

/// Returns the text a token renders as.
fn lexeme(token: &Token) -> &str {
    token
        .text()
        .or_else(|| token.kind.as_str())
        .unwrap_or_default()
}
