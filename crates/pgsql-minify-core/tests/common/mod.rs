#![allow(dead_code)]

use pgsql_minify_core::{minify, minify_with, scan, MinifyOptions, Token, TokenKind};

/// Asserts that every `(input, expected)` pair minifies as expected.
pub fn assert_minified(cases: &[(&str, &str)]) {
    assert_minified_with(cases, &MinifyOptions::default());
}

pub fn assert_minified_with(cases: &[(&str, &str)], options: &MinifyOptions) {
    for (input, expected) in cases {
        let actual = minify_with(input, options);
        assert_eq!(
            &actual, expected,
            "Minify failed.\n  Input:    {input:?}\n  Expected: {expected:?}\n  Actual:   {actual:?}"
        );
    }
}

/// Verifies that minifying is a fixed point: the output minifies to itself.
pub fn idempotent(sql: &str) {
    let once = minify(sql);
    let twice = minify(&once);
    assert_eq!(
        once, twice,
        "Minify is not idempotent.\n  Input:  {sql:?}\n  First:  {once:?}\n  Second: {twice:?}"
    );
}

/// Scans `sql` and returns `(code, text)` pairs for compact comparisons.
pub fn codes(sql: &str) -> Vec<(&'static str, Option<String>)> {
    scan(sql)
        .into_iter()
        .map(|t| (t.kind.code(), t.text))
        .collect()
}

pub fn word(kind: TokenKind, text: &str) -> Token {
    Token::new(kind, text)
}
