//! Splitting for the `[a,b]` and `{"key":a,b}` grouping forms and for inline
//! `,!literal` suffixes.

use crate::ast::MultipathComponent;
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::is_not,
    character::complete::{anychar, char, multispace0},
    combinator::recognize,
    multi::many0,
    sequence::{delimited, pair, terminated},
};

/// Byte offsets of top-level commas, honoring quotes, escapes and nesting.
fn top_level_commas(text: &str) -> Vec<usize> {
    let mut commas = Vec::new();
    let mut depth = 0usize;
    let mut in_quotes = false;
    let mut escaped = false;

    for (i, c) in text.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '"' => in_quotes = !in_quotes,
            _ if in_quotes => {}
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => commas.push(i),
            _ => {}
        }
    }
    commas
}

/// Splits the inner text of a multipath on top-level commas. Components are
/// trimmed and empty ones dropped.
pub fn split_components(inner: &str) -> Vec<&str> {
    let mut components = Vec::new();
    let mut start = 0;
    for comma in top_level_commas(inner) {
        components.push(&inner[start..comma]);
        start = comma + 1;
    }
    components.push(&inner[start..]);

    components
        .into_iter()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .collect()
}

fn quoted_key(input: &str) -> IResult<&str, &str> {
    terminated(
        delimited(
            char('"'),
            recognize(many0(alt((
                recognize(pair(char('\\'), anychar)),
                is_not("\\\""),
            )))),
            char('"'),
        ),
        (multispace0, char(':')),
    )
    .parse(input)
}

/// Splits the inner text of an object-form multipath into optional keys and
/// their sub-paths.
pub fn split_keyed_components(inner: &str) -> Vec<MultipathComponent<'_>> {
    split_components(inner)
        .into_iter()
        .map(|part| match quoted_key(part) {
            Ok((path, key)) => MultipathComponent {
                key: Some(key.to_string()),
                path: path.trim(),
            },
            Err(_) => MultipathComponent {
                key: None,
                path: part,
            },
        })
        .collect()
}

/// Cuts a path at its first top-level `,!` literal, e.g. `age,!42` → `age`.
pub fn strip_literal_suffix(path: &str) -> &str {
    top_level_commas(path)
        .into_iter()
        .find(|&i| path[i + 1..].starts_with('!'))
        .map_or(path, |i| &path[..i])
}
