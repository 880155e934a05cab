//! Splits a raw path into `.`/`|` separated segments.
//!
//! Separators inside a filter body (`#(...)`, legacy `#[...]`) or inside a
//! quoted string within such a body are not split points. Escapes are kept
//! verbatim in the segment text.

use crate::ast::{Segment, Separator};
use itertools::Itertools;

/// Tracks open delimiters and quote state while scanning path text.
#[derive(Debug, Default)]
pub(crate) struct Nesting {
    open: Vec<(char, usize)>,
    in_quotes: Option<usize>,
    escaped: bool,
    prev: Option<char>,
}

impl Nesting {
    /// Feeds one character. Returns true when the character is a candidate
    /// split point: unescaped, outside quotes and at depth zero.
    pub(crate) fn step(&mut self, position: usize, c: char) -> bool {
        if self.escaped {
            self.escaped = false;
            self.prev = None;
            return false;
        }
        if c == '\\' {
            self.escaped = true;
            return false;
        }
        let prev = self.prev.replace(c);
        if self.in_quotes.is_some() {
            if c == '"' {
                self.in_quotes = None;
            }
            return false;
        }
        let nested = !self.open.is_empty();
        match c {
            '"' if nested => {
                self.in_quotes = Some(position);
                false
            }
            '(' => {
                self.open.push((')', position));
                false
            }
            '[' if nested || prev == Some('#') => {
                self.open.push((']', position));
                false
            }
            '{' if nested => {
                self.open.push(('}', position));
                false
            }
            ')' | ']' | '}' if nested => {
                if self.open.last().is_some_and(|&(close, _)| close == c) {
                    self.open.pop();
                }
                false
            }
            _ => !nested,
        }
    }

    pub(crate) fn depth(&self) -> usize {
        self.open.len()
    }

    pub(crate) fn innermost(&self) -> Option<(char, usize)> {
        self.open.last().copied()
    }

    pub(crate) fn quote_start(&self) -> Option<usize> {
        self.in_quotes
    }

    pub(crate) fn pending_escape(&self) -> bool {
        self.escaped
    }
}

/// Splits `path` into its ordered segments.
///
/// Empty pieces (`a..b`, leading or trailing separators) are dropped; the
/// separator that preceded them is carried to the next emitted segment.
pub fn segment(path: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut nesting = Nesting::default();
    let mut start = 0;
    let mut separator = Separator::None;

    for (i, c) in path.char_indices() {
        if !nesting.step(i, c) {
            continue;
        }
        let next = match c {
            '.' => Separator::Dot,
            '|' => Separator::Pipe,
            _ => continue,
        };
        if i > start {
            segments.push(Segment::new(&path[start..i], separator));
        }
        separator = next;
        start = i + 1;
    }

    if start < path.len() {
        segments.push(Segment::new(&path[start..], separator));
    }

    if nesting.depth() > 0 {
        log::trace!("unclosed delimiter in path '{}', segmented best-effort", path);
    }
    segments
}

/// Rebuilds the raw text of a run of segments, joined by their own separators.
pub fn rest_text(segments: &[Segment<'_>]) -> String {
    segments
        .iter()
        .enumerate()
        .map(|(i, seg)| {
            if i == 0 {
                seg.text.to_string()
            } else {
                format!("{}{}", seg.separator.as_str(), seg.text)
            }
        })
        .join("")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(path: &str) -> Vec<&str> {
        segment(path).into_iter().map(|s| s.text).collect()
    }

    #[test]
    fn test_simple_dotted_path() {
        let segs = segment("name.first");
        assert_eq!(
            segs,
            vec![
                Segment::new("name", Separator::None),
                Segment::new("first", Separator::Dot),
            ]
        );
    }

    #[test]
    fn test_pipe_separators_are_tracked() {
        let segs = segment("friends|0.first");
        assert_eq!(segs[1].separator, Separator::Pipe);
        assert_eq!(segs[2].separator, Separator::Dot);
    }

    #[test]
    fn test_empty_input() {
        assert!(segment("").is_empty());
        assert!(segment(".").is_empty());
        assert!(segment("..|").is_empty());
    }

    #[test]
    fn test_escaped_separator_kept_verbatim() {
        assert_eq!(texts(r"fav\.movie.0"), vec![r"fav\.movie", "0"]);
        assert_eq!(texts(r"field\|name"), vec![r"field\|name"]);
    }

    #[test]
    fn test_query_body_not_split() {
        assert_eq!(
            texts(r#"friends.#(name.first=="Dale")#.last"#),
            vec!["friends", r#"#(name.first=="Dale")#"#, "last"]
        );
        assert_eq!(
            texts(r#"friends.#(nets.#(=="fb"))#.first"#),
            vec!["friends", r#"#(nets.#(=="fb"))#"#, "first"]
        );
    }

    #[test]
    fn test_legacy_bracket_query_not_split() {
        assert_eq!(
            texts(r#"friends.#[age>4.5]#.first"#),
            vec!["friends", "#[age>4.5]#", "first"]
        );
    }

    #[test]
    fn test_quoted_closer_inside_query() {
        assert_eq!(
            texts(r#"a.#(b==")x.y")#.c"#),
            vec!["a", r#"#(b==")x.y")#"#, "c"]
        );
    }

    #[test]
    fn test_unbalanced_paren_is_tolerated() {
        assert_eq!(texts("a.#(b==1.c"), vec!["a", "#(b==1.c"]);
        assert_eq!(texts("a).b"), vec!["a)", "b"]);
    }

    #[test]
    fn test_skipped_segment_carries_separator() {
        let segs = segment("a.|b");
        assert_eq!(segs[1], Segment::new("b", Separator::Pipe));
    }

    #[test]
    fn test_rest_text_rebuilds_raw_path() {
        let segs = segment("children.@case:lower|@reverse");
        assert_eq!(rest_text(&segs[1..]), "@case:lower|@reverse");
        assert_eq!(rest_text(&[]), "");
    }
}
