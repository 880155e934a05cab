//! Backslash escaping for path tokens.
//!
//! Path text keeps its escapes until a token has to be compared against a
//! document key. Every helper here treats `\x` as the literal character `x`.

/// Characters that carry meaning anywhere inside a path token.
const SPECIAL: &[char] = &['\\', '.', '|', '*', '?', '#', '(', ')', ','];

/// Characters that only carry meaning at the start of a token. A leading
/// `[` or `{` would read back as a multipath.
const LEADING: &[char] = &['@', '~', '!', '[', '{'];

/// Removes one level of backslash escaping.
pub fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some(next) => out.push(next),
                None => out.push('\\'),
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Parses a token made only of ASCII digits as an array index.
pub fn array_index(token: &str) -> Option<usize> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

/// Escapes a document key so it reads back as the same literal token.
///
/// All-digit keys get a leading backslash so they are not read as array
/// indices. The empty key has no literal form and stays empty.
pub fn escape_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 2);
    if !key.is_empty() && key.bytes().all(|b| b.is_ascii_digit()) {
        out.push('\\');
    }
    for (i, c) in key.chars().enumerate() {
        if SPECIAL.contains(&c) || (i == 0 && LEADING.contains(&c)) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Byte offsets of every unescaped character in `text`.
fn unescaped_indices(text: &str) -> impl Iterator<Item = (usize, char)> + '_ {
    let mut escaped = false;
    text.char_indices().filter(move |&(_, c)| {
        if escaped {
            escaped = false;
            return false;
        }
        if c == '\\' {
            escaped = true;
            return false;
        }
        true
    })
}

pub fn contains_unescaped(text: &str, needle: char) -> bool {
    unescaped_indices(text).any(|(_, c)| c == needle)
}

/// Finds `pattern` starting at an unescaped character.
pub fn find_unescaped(text: &str, pattern: &str) -> Option<usize> {
    unescaped_indices(text)
        .map(|(i, _)| i)
        .find(|&i| text[i..].starts_with(pattern))
}

/// True when `text` ends with `pattern` and its first character is not escaped.
pub fn ends_with_unescaped(text: &str, pattern: &str) -> bool {
    if !text.ends_with(pattern) {
        return false;
    }
    let start = text.len() - pattern.len();
    unescaped_indices(text).any(|(i, _)| i == start)
}

/// Splits on every unescaped `sep`, keeping escapes in the pieces.
pub fn split_unescaped(text: &str, sep: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    for (i, c) in unescaped_indices(text) {
        if c == sep {
            parts.push(&text[start..i]);
            start = i + c.len_utf8();
        }
    }
    parts.push(&text[start..]);
    parts
}
