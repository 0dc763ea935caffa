//! SQL Tokenizer implementation.

use tracing::trace;

use super::comment::{fold_block, fold_line};
use super::{KeywordSet, Token, TokenKind};

/// Characters that start an operator run (besides `-` and `/`).
const OPERATOR_START: &str = "+*<>=~!@#%^&|`?";

/// Characters that may continue an operator run.
const OPERATOR_RUN: &str = "+-*/<>=~!@#%^&|`?";

/// Operator symbols that make a run ending in `+` or `-` acceptable.
const NON_ARITHMETIC: &str = "~!@#%^&|`?";

/// Prefix of a string constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StringPrefix {
    /// `'...'`
    Plain,
    /// `e'...'`
    Escape,
    /// `u&'...'`
    Unicode,
}

/// Typed bit-string literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BitString {
    /// `b'0101'`
    Binary,
    /// `x'1f'`
    Hex,
}

impl BitString {
    const fn prefix(self) -> &'static str {
        match self {
            Self::Binary => "b'",
            Self::Hex => "x'",
        }
    }

    const fn kind(self) -> TokenKind {
        match self {
            Self::Binary => TokenKind::BinaryBitString,
            Self::Hex => TokenKind::HexBitString,
        }
    }

    const fn accepts(self, c: char) -> bool {
        match self {
            Self::Binary => matches!(c, '0' | '1'),
            Self::Hex => c.is_ascii_hexdigit(),
        }
    }
}

/// A lexer that tokenizes a single SQL statement.
///
/// The cursor always points at the next unread character. Each scan step
/// consumes one character and dispatches on it; sub-scans that fail emit
/// nothing and leave the cursor where their last lookup left it.
pub struct Lexer<'k> {
    /// The input as characters.
    chars: Vec<char>,
    /// Index of the next character to read.
    pos: usize,
    /// Words classified as keywords.
    keywords: &'k KeywordSet,
    /// Tokens produced so far.
    tokens: Vec<Token>,
}

impl Lexer<'static> {
    /// Creates a lexer using the default Postgres keyword set.
    #[must_use]
    pub fn new(input: &str) -> Self {
        Self::with_keywords(input, KeywordSet::postgres())
    }
}

impl<'k> Lexer<'k> {
    /// Creates a lexer that classifies words against `keywords`.
    #[must_use]
    pub fn with_keywords(input: &str, keywords: &'k KeywordSet) -> Self {
        Self {
            chars: input.chars().collect(),
            pos: 0,
            keywords,
            tokens: Vec::new(),
        }
    }

    /// Tokenizes the statement, stopping after the first `;`.
    #[must_use]
    pub fn tokenize(mut self) -> Vec<Token> {
        while self.scan_next() {}
        self.tokens
    }

    /// Consumes the current character and returns it.
    fn advance(&mut self) -> Option<char> {
        let c = self.chars.get(self.pos).copied()?;
        self.pos += 1;
        Some(c)
    }

    /// Returns the current character without advancing.
    fn peek(&self) -> Option<char> {
        self.peek_at(0)
    }

    /// Returns the character `offset` places past the current one.
    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    /// Un-reads the last consumed character.
    fn back_up(&mut self) {
        self.pos -= 1;
    }

    fn emit(&mut self, kind: TokenKind, text: String) {
        self.tokens.push(Token::new(kind, text));
    }

    fn emit_bare(&mut self, kind: TokenKind) {
        self.tokens.push(Token::bare(kind));
    }

    /// Scans one step. Returns false once scanning is over.
    fn scan_next(&mut self) -> bool {
        let Some(c) = self.advance() else {
            return false;
        };

        match c {
            ' ' | '\t' | '\n' => {}

            // Single-character tokens
            '(' => self.emit_bare(TokenKind::LeftParen),
            ')' => self.emit_bare(TokenKind::RightParen),
            '[' => self.emit_bare(TokenKind::LeftBracket),
            ']' => self.emit_bare(TokenKind::RightBracket),
            ',' => self.emit_bare(TokenKind::Comma),
            ';' => {
                self.emit_bare(TokenKind::Semicolon);
                return false;
            }

            // Quoted forms
            '"' => self.scan_quoted_identifier(false),
            '\'' => self.scan_string(StringPrefix::Plain),
            '$' => {
                if self.peek().is_some_and(|n| n.is_ascii_digit()) {
                    self.scan_parameter();
                } else {
                    self.scan_dollar_quoted();
                }
            }

            // Comments or operators
            '-' if self.peek() == Some('-') => self.scan_line_comment(),
            '/' if self.peek() == Some('*') => self.scan_block_comment(),
            '-' | '/' => self.scan_operator(c),
            c if OPERATOR_START.contains(c) => self.scan_operator(c),

            // Numbers and multi-character punctuation
            '0'..='9' => self.scan_number(c),
            '.' => match self.peek() {
                Some(n) if n.is_ascii_digit() => self.scan_number(c),
                Some('.') => {
                    self.pos += 1;
                    self.emit(TokenKind::DoubleDot, String::from(".."));
                }
                _ => self.emit_bare(TokenKind::Dot),
            },
            ':' => {
                if self.peek() == Some(':') {
                    self.pos += 1;
                    self.emit(TokenKind::DoubleColon, String::from("::"));
                } else {
                    self.emit_bare(TokenKind::Colon);
                }
            }

            // Prefixed literals
            'b' | 'B' if self.peek() == Some('\'') => self.scan_bit_string(BitString::Binary),
            'x' | 'X' if self.peek() == Some('\'') => self.scan_bit_string(BitString::Hex),
            'e' | 'E' if self.peek() == Some('\'') => self.scan_string(StringPrefix::Escape),
            'u' | 'U' if self.peek() == Some('&') => self.scan_unicode_prefixed(),

            // Identifiers and keywords
            c if is_letter(c) || c == '_' => self.scan_identifier(c),

            _ => trace!(pos = self.pos - 1, "skipping unexpected character {c:?}"),
        }
        true
    }

    /// Scans an identifier or keyword whose first character is consumed.
    fn scan_identifier(&mut self, first: char) {
        let mut value = String::from(first);
        while let Some(c) = self.peek().filter(|&c| is_word_char(c)) {
            value.push(c);
            self.pos += 1;
        }

        let kind = if self.keywords.contains(&value) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        };
        self.emit(kind, value);
    }

    /// Dispatches `u&"` and `u&'`. Any other `u&` drops the `u` and leaves
    /// the `&` to be scanned next.
    fn scan_unicode_prefixed(&mut self) {
        match self.peek_at(1) {
            Some('"') => {
                self.pos += 2;
                self.scan_quoted_identifier(true);
            }
            Some('\'') => {
                self.pos += 2;
                self.scan_string(StringPrefix::Unicode);
            }
            _ => trace!(pos = self.pos, "dropping `u` before `&`"),
        }
    }

    /// Scans a quoted identifier. The opening quote is consumed.
    fn scan_quoted_identifier(&mut self, unicode: bool) {
        let mut value = String::from(if unicode { "u&\"" } else { "\"" });
        while let Some(c) = self.advance() {
            value.push(c);
            if c == '"' {
                // `""` names nothing.
                if value.chars().count() > 2 {
                    self.emit(TokenKind::QuotedIdentifier, value);
                } else {
                    trace!(pos = self.pos, "rejected empty quoted identifier");
                }
                return;
            }
        }
        trace!(pos = self.pos, "unterminated quoted identifier");
    }

    /// Scans a string constant. For the plain form the opening quote is
    /// consumed; for the prefixed forms the cursor sits on the quote
    /// (escape) or just past it (unicode).
    fn scan_string(&mut self, prefix: StringPrefix) {
        let mut value = String::from(match prefix {
            StringPrefix::Plain => "'",
            StringPrefix::Escape => {
                self.pos += 1;
                "e'"
            }
            StringPrefix::Unicode => "u&'",
        });

        while let Some(c) = self.advance() {
            value.push(c);
            if c != '\'' {
                continue;
            }
            if self.peek() == Some('\'') {
                value.push('\'');
                self.pos += 1;
            } else {
                self.emit(TokenKind::String, value);
                return;
            }
        }
        trace!(pos = self.pos, "unterminated string constant");
    }

    /// Scans `$tag$ ... $tag$`. The leading `$` is consumed.
    fn scan_dollar_quoted(&mut self) {
        let mut value = String::from('$');
        let mut tag = vec!['$'];
        let mut tag_closed = false;
        // Index into `tag` of the last character matched by a candidate
        // closing delimiter.
        let mut closing: Option<usize> = None;

        while let Some(c) = self.advance() {
            let first = value.len() == 1;
            if (first && !is_letter(c) && c != '$') || !(tag_closed || is_word_char(c)) {
                break;
            }
            value.push(c);
            if !tag_closed {
                tag.push(c);
            }

            if c == '$' {
                if closing.is_some_and(|idx| idx + 2 == tag.len()) {
                    self.emit(TokenKind::String, value);
                    return;
                }
                if tag_closed {
                    closing = Some(0);
                } else {
                    tag_closed = true;
                }
            } else if let Some(idx) = closing {
                closing = (tag.get(idx + 1) == Some(&c)).then_some(idx + 1);
            }
        }
        trace!(pos = self.pos, "unterminated dollar-quoted string");
    }

    /// Scans `$n`. The `$` is consumed and a digit follows.
    fn scan_parameter(&mut self) {
        let mut value = String::from('$');
        while let Some(c) = self.peek().filter(char::is_ascii_digit) {
            value.push(c);
            self.pos += 1;
        }
        self.emit(TokenKind::Parameter, value);
    }

    /// Scans `b'...'` or `x'...'`. The prefix letter is consumed and the
    /// cursor sits on the quote. An illegal character is consumed with the
    /// failed literal.
    fn scan_bit_string(&mut self, bits: BitString) {
        let mut value = String::from(bits.prefix());
        self.pos += 1;
        loop {
            match self.advance() {
                Some('\'') => {
                    value.push('\'');
                    self.emit(bits.kind(), value);
                    return;
                }
                Some(c) if bits.accepts(c) => value.push(c),
                _ => break,
            }
        }
        trace!(pos = self.pos, "malformed bit-string {value:?}");
    }

    /// Scans a numeric constant whose first character (digit or `.`) is
    /// consumed.
    fn scan_number(&mut self, first: char) {
        if let Some(value) = self.read_number(first) {
            self.emit(TokenKind::Numeric, value);
        } else {
            trace!(pos = self.pos, "malformed numeric constant");
        }
    }

    fn read_number(&mut self, first: char) -> Option<String> {
        let mut value = String::from(first);
        let mut seen_dot = first == '.';
        let mut seen_digit = first.is_ascii_digit();
        let mut seen_exponent = false;

        loop {
            let Some(c) = self.advance() else {
                return Some(value);
            };
            match c {
                '0'..='9' => {
                    value.push(c);
                    seen_digit = true;
                }
                '.' => {
                    if seen_dot || seen_exponent {
                        return None;
                    }
                    seen_dot = true;
                    value.push(c);
                }
                'e' | 'E' => {
                    if seen_exponent || !seen_digit {
                        return None;
                    }
                    seen_exponent = true;
                    value.push(c);
                    match self.peek() {
                        Some(d) if d.is_ascii_digit() => {
                            value.push(d);
                            self.pos += 1;
                        }
                        Some(sign @ ('+' | '-')) => {
                            value.push(sign);
                            self.pos += 1;
                            if !self.peek().is_some_and(|d| d.is_ascii_digit()) {
                                return None;
                            }
                        }
                        _ => return None,
                    }
                }
                // A letter glued to the digits spoils the whole constant.
                c if is_letter(c) => return None,
                _ => {
                    self.back_up();
                    return Some(value);
                }
            }
        }
    }

    /// Scans an operator run whose first character is consumed.
    fn scan_operator(&mut self, first: char) {
        let mut value = String::from(first);
        let mut last = None;

        let terminated = loop {
            let Some(c) = self.advance() else {
                break false;
            };
            if (c == '-' && last == Some('-')) || (c == '*' && last == Some('/')) {
                break false;
            }
            if !OPERATOR_RUN.contains(c) {
                self.back_up();
                break true;
            }
            value.push(c);
            last = Some(c);
        };

        if !terminated {
            trace!(pos = self.pos, "discarding unterminated operator {value:?}");
            return;
        }
        if value.len() > 1
            && matches!(last, Some('+' | '-'))
            && !value.contains(|c: char| NON_ARITHMETIC.contains(c))
        {
            trace!(pos = self.pos, "discarding ambiguous operator {value:?}");
            return;
        }
        self.emit(TokenKind::Operator, value);
    }

    /// Scans `-- ...` up to the end of the line. The first `-` is consumed.
    fn scan_line_comment(&mut self) {
        self.pos += 1;
        let mut body = String::new();
        while let Some(c) = self.advance() {
            if c == '\n' {
                break;
            }
            body.push(c);
        }
        self.emit(TokenKind::Comment, fold_line(&body));
    }

    /// Scans `/* ... */`. The `/` is consumed.
    fn scan_block_comment(&mut self) {
        self.pos += 1;
        let mut body = String::new();
        while let Some(c) = self.advance() {
            let Some(n) = self.peek() else { break };
            if c == '*' && n == '/' {
                self.pos += 1;
                self.emit(TokenKind::Comment, fold_block(&body));
                return;
            }
            body.push(c);
        }
        trace!(pos = self.pos, "unterminated block comment");
    }
}

/// Returns true for cased letters.
fn is_letter(c: char) -> bool {
    !c.to_lowercase().eq(c.to_uppercase())
}

/// Returns true for characters that continue an identifier or a dollar tag.
fn is_word_char(c: char) -> bool {
    is_letter(c) || c.is_ascii_digit() || c == '_' || c == '$'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenize(input: &str) -> Vec<Token> {
        Lexer::new(input).tokenize()
    }

    fn token_kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input).into_iter().map(|t| t.kind).collect()
    }

    fn texts(input: &str) -> Vec<String> {
        tokenize(input).iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_whitespace_only() {
        assert!(tokenize("   \n\t  ").is_empty());
    }

    #[test]
    fn test_keywords_case_insensitive() {
        let tokens = tokenize("select FROM wHeRe");
        assert!(tokens.iter().all(|t| t.kind == TokenKind::Keyword));
        assert_eq!(texts("select FROM wHeRe"), vec!["select", "FROM", "wHeRe"]);
    }

    #[test]
    fn test_identifiers() {
        assert_eq!(
            tokenize("foo Bar_baz _qux a$1"),
            vec![
                Token::new(TokenKind::Identifier, "foo"),
                Token::new(TokenKind::Identifier, "Bar_baz"),
                Token::new(TokenKind::Identifier, "_qux"),
                Token::new(TokenKind::Identifier, "a$1"),
            ]
        );
    }

    #[test]
    fn test_custom_keywords() {
        let keywords = KeywordSet::from_words("foo");
        let tokens = Lexer::with_keywords("foo select", &keywords).tokenize();
        assert_eq!(
            tokens,
            vec![
                Token::new(TokenKind::Keyword, "foo"),
                Token::new(TokenKind::Identifier, "select"),
            ]
        );
    }

    #[test]
    fn test_delimiters() {
        assert_eq!(
            token_kinds("( ) [ ] , . .. : :: ;"),
            vec![
                TokenKind::LeftParen,
                TokenKind::RightParen,
                TokenKind::LeftBracket,
                TokenKind::RightBracket,
                TokenKind::Comma,
                TokenKind::Dot,
                TokenKind::DoubleDot,
                TokenKind::Colon,
                TokenKind::DoubleColon,
                TokenKind::Semicolon,
            ]
        );
    }

    #[test]
    fn test_semicolon_stops_scanning() {
        assert_eq!(
            token_kinds("a; b; c"),
            vec![TokenKind::Identifier, TokenKind::Semicolon]
        );
    }

    #[test]
    fn test_triple_colon() {
        assert_eq!(
            token_kinds("a:::b"),
            vec![
                TokenKind::Identifier,
                TokenKind::DoubleColon,
                TokenKind::Colon,
                TokenKind::Identifier,
            ]
        );
    }

    #[test]
    fn test_strings() {
        assert_eq!(texts("'abc' 'a''bc' ''"), vec!["'abc'", "'a''bc'", "''"]);
        assert!(tokenize("'abc").is_empty());
        assert!(tokenize("'abc''").is_empty());
    }

    #[test]
    fn test_prefixed_strings_are_lowercased() {
        assert_eq!(
            tokenize("E'DeF' U&'x'"),
            vec![
                Token::new(TokenKind::String, "e'DeF'"),
                Token::new(TokenKind::String, "u&'x'"),
            ]
        );
    }

    #[test]
    fn test_quoted_identifiers() {
        assert_eq!(
            tokenize("\"hello world\" U&\"d\\0061t\""),
            vec![
                Token::new(TokenKind::QuotedIdentifier, "\"hello world\""),
                Token::new(TokenKind::QuotedIdentifier, "u&\"d\\0061t\""),
            ]
        );
    }

    #[test]
    fn test_quoted_identifier_has_no_doubled_quote_escape() {
        assert_eq!(
            tokenize("\"a\"\"b\""),
            vec![
                Token::new(TokenKind::QuotedIdentifier, "\"a\""),
                Token::new(TokenKind::QuotedIdentifier, "\"b\""),
            ]
        );
    }

    #[test]
    fn test_empty_quoted_identifier_rejected() {
        assert_eq!(
            tokenize("\"\" x"),
            vec![Token::new(TokenKind::Identifier, "x")]
        );
    }

    #[test]
    fn test_unicode_prefix_without_quote_drops_u() {
        assert_eq!(
            tokenize("u&x"),
            vec![
                Token::new(TokenKind::Operator, "&"),
                Token::new(TokenKind::Identifier, "x"),
            ]
        );
        assert_eq!(texts("user"), vec!["user"]);
    }

    #[test]
    fn test_dollar_quoted() {
        assert_eq!(
            tokenize("$$abc\ndef$$ $abc$x$abc$ $abc$hello$ab world$abc$"),
            vec![
                Token::new(TokenKind::String, "$$abc\ndef$$"),
                Token::new(TokenKind::String, "$abc$x$abc$"),
                Token::new(TokenKind::String, "$abc$hello$ab world$abc$"),
            ]
        );
    }

    #[test]
    fn test_dollar_quoted_tag_must_start_with_letter() {
        // `$_` fails and eats the `_`; `x` survives as an identifier.
        assert_eq!(texts("$_x"), vec!["x"]);
    }

    #[test]
    fn test_unterminated_dollar_quote() {
        assert!(tokenize("$$abc").is_empty());
        assert!(tokenize("$a$abc$a").is_empty());
    }

    #[test]
    fn test_parameters() {
        assert_eq!(
            tokenize("$1 $23)"),
            vec![
                Token::new(TokenKind::Parameter, "$1"),
                Token::new(TokenKind::Parameter, "$23"),
                Token::bare(TokenKind::RightParen),
            ]
        );
    }

    #[test]
    fn test_bit_strings() {
        assert_eq!(
            tokenize("b'10' B'10101' x'abc123' X'012DEF'"),
            vec![
                Token::new(TokenKind::BinaryBitString, "b'10'"),
                Token::new(TokenKind::BinaryBitString, "b'10101'"),
                Token::new(TokenKind::HexBitString, "x'abc123'"),
                Token::new(TokenKind::HexBitString, "x'012DEF'"),
            ]
        );
    }

    #[test]
    fn test_bad_bit_string_eats_offending_character() {
        assert_eq!(texts("x'abcdefg from"), vec!["from"]);
        assert_eq!(texts("b'012 x"), vec!["x"]);
    }

    #[test]
    fn test_numbers() {
        assert_eq!(
            texts("123 .12 3.1415e-5 3.1415e5 1e+2 7."),
            vec!["123", ".12", "3.1415e-5", "3.1415e5", "1e+2", "7."]
        );
        assert!(tokenize("42").iter().all(|t| t.kind == TokenKind::Numeric));
    }

    #[test]
    fn test_number_followed_by_operator() {
        assert_eq!(texts("123-1"), vec!["123", "-", "1"]);
    }

    #[test]
    fn test_malformed_numbers() {
        assert_eq!(texts("3.13.4"), vec!["4"]);
        assert_eq!(texts("3.1415e+x"), vec!["x"]);
        assert_eq!(texts("3.1415ex"), vec!["x"]);
        assert_eq!(texts("3.1415e-1e5"), vec!["5"]);
        assert!(tokenize("3.1415e").is_empty());
        assert!(tokenize("1e+").is_empty());
    }

    #[test]
    fn test_letter_after_digits_is_eaten() {
        assert_eq!(texts("12abc"), vec!["bc"]);
    }

    #[test]
    fn test_operators() {
        assert_eq!(
            texts("a || b @- c <> d"),
            vec!["a", "||", "b", "@-", "c", "<>", "d"]
        );
        assert!(tokenize("a <> b")
            .iter()
            .any(|t| t.kind == TokenKind::Operator));
    }

    #[test]
    fn test_arithmetic_run_ending_in_sign_rejected() {
        assert_eq!(texts("abc *+ def"), vec!["abc", "def"]);
        assert_eq!(texts("abc =- def"), vec!["abc", "def"]);
        assert_eq!(texts("abc - def"), vec!["abc", "-", "def"]);
    }

    #[test]
    fn test_operator_at_end_of_input_rejected() {
        assert!(tokenize("+").is_empty());
        assert!(tokenize("+--").is_empty());
        assert!(tokenize("+/*").is_empty());
    }

    #[test]
    fn test_line_comment() {
        assert_eq!(
            tokenize("select   --   some comment\n123-1"),
            vec![
                Token::new(TokenKind::Keyword, "select"),
                Token::new(TokenKind::Comment, "some comment"),
                Token::new(TokenKind::Numeric, "123"),
                Token::new(TokenKind::Operator, "-"),
                Token::new(TokenKind::Numeric, "1"),
            ]
        );
    }

    #[test]
    fn test_line_comment_at_end_of_input() {
        assert_eq!(tokenize("--"), vec![Token::new(TokenKind::Comment, "")]);
    }

    #[test]
    fn test_block_comment() {
        assert_eq!(
            tokenize("select\n/*\n this   is\n   a\ncomment\n  */\tid from somewhere"),
            vec![
                Token::new(TokenKind::Keyword, "select"),
                Token::new(TokenKind::Comment, "this is a comment"),
                Token::new(TokenKind::Identifier, "id"),
                Token::new(TokenKind::Keyword, "from"),
                Token::new(TokenKind::Identifier, "somewhere"),
            ]
        );
    }

    #[test]
    fn test_unterminated_block_comment() {
        assert_eq!(texts("select /* oh oh"), vec!["select"]);
    }

    #[test]
    fn test_empty_block_comments() {
        assert_eq!(tokenize("/**/"), vec![Token::new(TokenKind::Comment, "")]);
        assert_eq!(tokenize("/***/"), vec![Token::new(TokenKind::Comment, "*")]);
        assert!(tokenize("/*/").is_empty());
        assert!(tokenize("/*").is_empty());
    }

    #[test]
    fn test_comment_trims_byte_order_mark() {
        assert_eq!(
            tokenize("--\u{feff}x"),
            vec![Token::new(TokenKind::Comment, "x")]
        );
        assert_eq!(
            tokenize("/*\u{85}x */"),
            vec![Token::new(TokenKind::Comment, "\u{85}x")]
        );
    }

    #[test]
    fn test_titlecase_keyword() {
        let keywords = KeywordSet::from_words("\u{1c6}");
        let tokens = Lexer::with_keywords("\u{1c5} \u{1c4}", &keywords).tokenize();
        assert_eq!(
            tokens,
            vec![
                Token::new(TokenKind::Keyword, "\u{1c5}"),
                Token::new(TokenKind::Keyword, "\u{1c4}"),
            ]
        );
    }

    #[test]
    fn test_unexpected_characters_skipped() {
        assert_eq!(texts("select 😃 \r\n1"), vec!["select", "1"]);
    }
}
