//! Token types for the SQL lexer.

#[cfg(feature = "serde")]
use serde::Serialize;

/// The kind of token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TokenKind {
    /// Placeholder used before any token has been processed.
    Unknown,

    // Delimiters
    /// (
    LeftParen,
    /// )
    RightParen,
    /// [
    LeftBracket,
    /// ]
    RightBracket,
    /// ,
    Comma,
    /// ;
    Semicolon,
    /// .
    Dot,
    /// ..
    DoubleDot,
    /// :
    Colon,
    /// ::
    DoubleColon,

    // Words
    /// Reserved word from the active keyword set
    Keyword,
    /// Unquoted identifier (e.g., `column_name`)
    Identifier,
    /// Quoted identifier (e.g., `"hello world"`, `u&"d\0061t"`)
    QuotedIdentifier,

    // Literals
    /// String constant (e.g., `'abc'`, `e'\n'`, `$tag$abc$tag$`)
    String,
    /// Numeric constant (e.g., `42`, `.5`, `3.1415e-5`)
    Numeric,
    /// Positional parameter (e.g., `$1`)
    Parameter,
    /// Binary bit-string (e.g., `b'1010'`)
    BinaryBitString,
    /// Hexadecimal bit-string (e.g., `x'1f'`)
    HexBitString,

    /// Operator run (e.g., `+`, `||`, `@-`)
    Operator,
    /// Line or block comment
    Comment,
}

impl TokenKind {
    /// Returns the fixed rendering of a punctuation kind.
    #[must_use]
    pub const fn as_str(self) -> Option<&'static str> {
        match self {
            Self::LeftParen => Some("("),
            Self::RightParen => Some(")"),
            Self::LeftBracket => Some("["),
            Self::RightBracket => Some("]"),
            Self::Comma => Some(","),
            Self::Semicolon => Some(";"),
            Self::Dot => Some("."),
            Self::DoubleDot => Some(".."),
            Self::Colon => Some(":"),
            Self::DoubleColon => Some("::"),
            _ => None,
        }
    }

    /// Returns the compact code for this kind, used in token dumps.
    ///
    /// Punctuation kinds use their own text; lexical classes use a single
    /// character (`k` keyword, `i` identifier, `o` operator, `'` string,
    /// `0` numeric, `"` quoted identifier, `$` parameter, `b`/`x` bit-strings,
    /// `c` comment). [`TokenKind::Unknown`] has the empty code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Unknown => "",
            Self::Keyword => "k",
            Self::Identifier => "i",
            Self::Operator => "o",
            Self::String => "'",
            Self::Numeric => "0",
            Self::QuotedIdentifier => "\"",
            Self::Parameter => "$",
            Self::BinaryBitString => "b",
            Self::HexBitString => "x",
            Self::Comment => "c",
            Self::LeftParen => "(",
            Self::RightParen => ")",
            Self::LeftBracket => "[",
            Self::RightBracket => "]",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::Dot => ".",
            Self::DoubleDot => "..",
            Self::Colon => ":",
            Self::DoubleColon => "::",
        }
    }

    /// Returns true for single-character punctuation, which carries no text.
    #[must_use]
    pub const fn is_bare(self) -> bool {
        matches!(
            self,
            Self::LeftParen
                | Self::RightParen
                | Self::LeftBracket
                | Self::RightBracket
                | Self::Comma
                | Self::Semicolon
                | Self::Dot
                | Self::Colon
        )
    }
}

/// A token and the raw lexeme it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The raw lexeme, absent for single-character punctuation.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub text: Option<String>,
}

impl Token {
    /// Creates a punctuation token without text.
    #[must_use]
    pub const fn bare(kind: TokenKind) -> Self {
        debug_assert!(kind.is_bare());
        Self { kind, text: None }
    }

    /// Creates a token carrying its lexeme.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: Some(text.into()),
        }
    }

    /// Returns the lexeme, if any.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

impl core::fmt::Display for Token {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match (&self.text, self.kind.as_str()) {
            (Some(text), _) => f.write_str(text),
            (None, Some(punct)) => f.write_str(punct),
            (None, None) => Ok(()),
        }
    }
}
