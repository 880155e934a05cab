//! `nom`-based recognizers for the tokens inside a path segment, and the
//! filter-query parser built on top of them.
use crate::ast::{CompareOp, Modifier, NESTED_SENTINEL, QueryCondition, QuerySegment, Tilde};
use crate::escape::find_unescaped;
use crate::segment::Nesting;
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::char,
    combinator::{opt, rest, value},
    sequence::preceded,
};

// --- Token Parsers ---

/// Recognizes the longest comparison operator at the head of `input`.
pub fn parse_operator(input: &str) -> IResult<&str, CompareOp> {
    alt((
        value(CompareOp::NotEq, tag("!=")),
        value(CompareOp::NotLike, tag("!%")),
        value(CompareOp::Eq, tag("==")),
        value(CompareOp::GtEq, tag(">=")),
        value(CompareOp::LtEq, tag("<=")),
        value(CompareOp::Gt, tag(">")),
        value(CompareOp::Lt, tag("<")),
        value(CompareOp::Like, tag("%")),
    ))
    .parse(input)
}

fn tilde(input: &str) -> IResult<&str, Tilde> {
    alt((
        value(Tilde::True, tag("~true")),
        value(Tilde::False, tag("~false")),
        value(Tilde::Null, tag("~null")),
        value(Tilde::Exists, tag("~*")),
    ))
    .parse(input)
}

/// Recognizes a whole-token tilde value; trailing text disqualifies it.
pub fn parse_tilde(input: &str) -> Option<Tilde> {
    match tilde(input) {
        Ok(("", t)) => Some(t),
        _ => None,
    }
}

fn modifier_name(input: &str) -> IResult<&str, &str> {
    preceded(
        char('@'),
        take_while1(|c: char| c.is_alphanumeric() || c == '_' || c == '-'),
    )
    .parse(input)
}

fn modifier_args(input: &str) -> IResult<&str, Option<&str>> {
    opt(preceded(char(':'), rest)).parse(input)
}

fn modifier(input: &str) -> IResult<&str, Modifier<'_>> {
    let (input, name) = modifier_name(input)?;
    let (input, args) = modifier_args(input)?;
    Ok((input, Modifier { name, args }))
}

/// Parses an `@name[:args]` token. Anything after the name that is not an
/// argument list makes the token a plain field name instead.
pub fn parse_modifier(text: &str) -> Option<Modifier<'_>> {
    match modifier(text) {
        Ok(("", m)) => Some(m),
        _ => None,
    }
}

// --- Query Segments ---

/// Splits a segment around its first unescaped `#(` or `#[` filter.
///
/// The closer is the one matching the opener; when the body is unbalanced the
/// last closer of the same kind is used instead. Returns `None` when no closer
/// exists at all.
pub fn parse_query_segment(text: &str) -> Option<QuerySegment<'_>> {
    let paren = find_unescaped(text, "#(");
    let bracket = find_unescaped(text, "#[");
    let (start, closer) = match (paren, bracket) {
        (Some(p), Some(b)) if b < p => (b, ']'),
        (Some(p), _) => (p, ')'),
        (None, Some(b)) => (b, ']'),
        (None, None) => return None,
    };

    let body_start = start + 2;
    let end = matching_closer(text, start, closer)
        .or_else(|| text[body_start..].rfind(closer).map(|i| body_start + i))?;

    Some(QuerySegment {
        prefix: &text[..start],
        body: &text[body_start..end],
        suffix: &text[end + 1..],
    })
}

/// Finds the closer matching the opener that follows the `#` at byte `hash`.
fn matching_closer(text: &str, hash: usize, closer: char) -> Option<usize> {
    let mut nesting = Nesting::default();
    for (i, c) in text[hash..].char_indices() {
        nesting.step(hash + i, c);
        if i > 1 && c == closer && nesting.depth() == 0 && nesting.quote_start().is_none() {
            return Some(hash + i);
        }
    }
    None
}

// --- Query Conditions ---

/// Parses a filter body into a `QueryCondition`.
///
/// Priority: nested array predicate, operator split, bare `=`, and finally a
/// direct comparison of the element against the whole body.
pub fn parse_condition(body: &str) -> QueryCondition {
    if body.contains(".#(") && body.contains(')') {
        return QueryCondition::new(body, CompareOp::Eq, NESTED_SENTINEL);
    }

    if let Some((idx, op, len)) = find_operator(body) {
        let field = body[..idx].trim();
        let value = strip_quotes(body[idx + len..].trim());
        return QueryCondition::new(field, op, value);
    }

    if let Some((field, value)) = body.split_once('=') {
        return QueryCondition::new(field.trim(), CompareOp::Eq, strip_quotes(value.trim()));
    }

    QueryCondition::new("", CompareOp::Eq, body)
}

/// Leftmost operator outside parentheses and quoted strings.
fn find_operator(body: &str) -> Option<(usize, CompareOp, usize)> {
    let mut depth = 0usize;
    let mut in_quotes = false;
    let mut escaped = false;
    for (i, c) in body.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '"' => in_quotes = !in_quotes,
            _ if in_quotes => {}
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            _ if depth == 0 => {
                if let Ok((remaining, op)) = parse_operator(&body[i..]) {
                    let len = body.len() - i - remaining.len();
                    return Some((i, op, len));
                }
            }
            _ => {}
        }
    }
    None
}

fn strip_quotes(value: &str) -> &str {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        &value[1..value.len() - 1]
    } else {
        value
    }
}
