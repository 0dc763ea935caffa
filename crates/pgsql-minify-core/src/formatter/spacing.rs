//! Leading-space rules keyed on the previous token kind.

use crate::lexer::TokenKind;

/// Returns true if a word, literal or `[` after `prev` is written without a
/// leading space.
pub const fn attaches_after(prev: TokenKind) -> bool {
    matches!(
        prev,
        TokenKind::Unknown
            | TokenKind::LeftParen
            | TokenKind::LeftBracket
            | TokenKind::DoubleColon
            | TokenKind::Colon
            | TokenKind::Dot
    )
}

/// Returns true if `(` after `prev` gets a leading space. Anything else
/// reads as a call, so `foo(x)` stays tight while `in (x)` does not.
pub const fn paren_spaced_after(prev: TokenKind) -> bool {
    matches!(
        prev,
        TokenKind::Keyword | TokenKind::Operator | TokenKind::Comma
    )
}

/// Returns true for punctuation written with no leading space.
pub const fn is_closing(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::RightParen
            | TokenKind::RightBracket
            | TokenKind::Semicolon
            | TokenKind::Comma
            | TokenKind::DoubleColon
            | TokenKind::Colon
            | TokenKind::Dot
    )
}
