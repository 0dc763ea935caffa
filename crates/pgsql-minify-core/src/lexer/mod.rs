//! SQL Lexer/Tokenizer
//!
//! This module provides a hand-written, single-pass lexer that turns one SQL
//! statement into a flat stream of tokens. Malformed spans produce no token.

mod comment;
mod keywords;
mod token;
mod tokenizer;

pub use keywords::KeywordSet;
pub use token::{Token, TokenKind};
pub use tokenizer::Lexer;
