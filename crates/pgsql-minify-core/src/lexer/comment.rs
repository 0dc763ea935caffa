//! Whitespace folding for comment bodies.

/// Normalises a block comment body: trims it and folds every whitespace
/// run into a single space.
pub fn fold_block(body: &str) -> String {
    fold(body.trim_matches(is_space), 1)
}

/// Normalises a line comment body: trims it and folds whitespace runs of
/// two or more characters into a single space. A lone tab is kept.
pub fn fold_line(body: &str) -> String {
    fold(body.trim_matches(is_space), 2)
}

/// Whitespace as ECMAScript defines it: Unicode `White_Space` without
/// U+0085, plus the byte order mark.
fn is_space(c: char) -> bool {
    c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}')
}

fn fold(body: &str, min_run: usize) -> String {
    let mut out = String::with_capacity(body.len());
    let mut run = String::new();
    for c in body.chars() {
        if is_space(c) {
            run.push(c);
            continue;
        }
        flush(&mut out, &mut run, min_run);
        out.push(c);
    }
    flush(&mut out, &mut run, min_run);
    out
}

fn flush(out: &mut String, run: &mut String, min_run: usize) {
    if run.is_empty() {
        return;
    }
    if run.chars().count() >= min_run {
        out.push(' ');
    } else {
        out.push_str(run);
    }
    run.clear();
}
