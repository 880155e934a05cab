//! The recursive expander.
//!
//! A path is segmented once. Each step dispatches on the shape of the current
//! segment and either emits a literal path, prunes the branch, or recurses
//! into a child value with the next segment index. Sub-paths that live inside
//! a single segment (`#.field` after a query) are segmented on their own and
//! chained in front of the outer segments that remain, so a fan-out branch
//! keeps walking from its element value.

use crate::glob::Glob;
use crate::options::{ExpandOptions, LeafPolicy, LengthMode};
use crate::predicate::Predicate;
use itertools::Itertools;
use jexpand_jpath::{
    Multipath, QuerySegment, Segment, Separator, array_index, contains_unescaped,
    ends_with_unescaped, escape_key, parse_condition, parse_modifier, parse_query_segment,
    parse_tilde, rest_text, segment, split_components, split_keyed_components, split_unescaped,
    strip_literal_suffix, unescape, validate,
};
use serde_json::Value;

/// The reserved token for the document root.
pub const ROOT_TOKEN: &str = "@this";

fn join(path: &str, token: &str) -> String {
    if path.is_empty() {
        token.to_string()
    } else {
        format!("{}.{}", path, token)
    }
}

/// Expands path expressions against one parsed document.
#[derive(Debug, Clone)]
pub struct Expander<'v> {
    root: &'v Value,
    options: ExpandOptions,
}

impl<'v> Expander<'v> {
    pub fn new(root: &'v Value) -> Self {
        Self::with_options(root, ExpandOptions::default())
    }

    pub fn with_options(root: &'v Value, options: ExpandOptions) -> Self {
        Self { root, options }
    }

    pub fn options(&self) -> &ExpandOptions {
        &self.options
    }

    /// Expands `path` into the literal paths it denotes, in document order.
    pub fn expand(&self, path: &str) -> Vec<String> {
        let mut out = Vec::new();
        self.expand_into(path, &mut out);
        log::debug!("Expanded '{}' into {} path(s)", path, out.len());
        out
    }

    /// Expands several paths against the same document, concatenating the
    /// results in argument order.
    pub fn expand_all<I, S>(&self, paths: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out = Vec::new();
        for path in paths {
            self.expand_into(path.as_ref(), &mut out);
        }
        out
    }

    fn expand_into(&self, path: &str, out: &mut Vec<String>) {
        if path.is_empty() || path == ROOT_TOKEN {
            out.push(path.to_string());
            return;
        }

        match Multipath::detect(path) {
            Some(Multipath::Array(inner)) => {
                for component in split_components(inner) {
                    if component.starts_with('!') {
                        log::trace!("Skipping literal '{}'", component);
                        continue;
                    }
                    self.expand_into(component, out);
                }
                return;
            }
            Some(Multipath::Object(inner)) => {
                for component in split_keyed_components(inner) {
                    if component.is_literal() {
                        log::trace!("Skipping literal '{}'", component.path);
                        continue;
                    }
                    self.expand_into(component.path, out);
                }
                return;
            }
            None => {}
        }

        let stripped = strip_literal_suffix(path);
        if stripped.len() < path.len() {
            log::trace!("Dropping literal suffix '{}'", &path[stripped.len()..]);
            self.expand_into(stripped, out);
            return;
        }

        if let Err(e) = validate(path) {
            log::warn!("Expanding malformed path '{}' best-effort: {}", path, e);
        }

        let segments = segment(path);
        if segments.is_empty() {
            out.push(String::new());
            return;
        }
        self.walk(self.root, &segments, 0, "", out);
    }

    // --- Segment Dispatch ---

    fn walk(
        &self,
        value: &Value,
        segments: &[Segment<'_>],
        index: usize,
        path: &str,
        out: &mut Vec<String>,
    ) {
        let Some(current) = segments.get(index) else {
            out.push(path.to_string());
            return;
        };
        let text = current.text;

        if let Some(modifier) = parse_modifier(text) {
            if !modifier.is_builtin() {
                log::debug!("Unknown modifier '@{}' kept as an opaque leaf", modifier.name);
            }
            log::trace!(
                "Modifier '@{}' (args: {:?}) ends the branch at '{}'",
                modifier.name,
                modifier.args,
                path
            );
            out.push(join(path, &rest_text(&segments[index..])));
        } else if parse_tilde(text).is_some() {
            out.push(join(path, text));
        } else if let Some(query) = parse_query_segment(text) {
            self.expand_query(value, &query, segments, index, path, out);
        } else if text == "#" {
            self.expand_hash(value, segments, index, path, out);
        } else if contains_unescaped(text, '#') {
            self.expand_hash_suffix(value, segments, index, path, out);
        } else if contains_unescaped(text, '*') || contains_unescaped(text, '?') {
            self.expand_wildcard(value, segments, index, path, out);
        } else {
            self.expand_field(value, segments, index, path, out);
        }
    }

    /// A bare `#` segment: fan out over an array, or emit a length marker.
    fn expand_hash(
        &self,
        value: &Value,
        segments: &[Segment<'_>],
        index: usize,
        path: &str,
        out: &mut Vec<String>,
    ) {
        let next = index + 1;

        if next == segments.len() {
            match value {
                Value::Array(items) if self.expands_trailing_hash(path) => {
                    out.extend((0..items.len()).map(|i| join(path, &i.to_string())));
                }
                _ => out.push(join(path, "#")),
            }
            return;
        }

        match value {
            Value::Array(_) if segments[next].separator == Separator::Pipe => {
                log::debug!(
                    "'{}' after '#' applies to the array itself at '{}', which has no members",
                    segments[next].text,
                    path
                );
            }
            Value::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    self.walk(item, segments, next, &join(path, &i.to_string()), out);
                }
            }
            _ => out.push(join(path, "#")),
        }
    }

    fn expands_trailing_hash(&self, path: &str) -> bool {
        match self.options.length_mode {
            LengthMode::Length => false,
            LengthMode::Expand => true,
            LengthMode::Auto => {
                let numeric = split_unescaped(path, '.')
                    .into_iter()
                    .filter(|token| token.parse::<i64>().is_ok())
                    .count();
                numeric >= self.options.auto_expand_depth
            }
        }
    }

    /// `field#` is the length path of `field`, whatever follows it. Any other
    /// placement of `#` inside a segment is part of a key.
    fn expand_hash_suffix(
        &self,
        value: &Value,
        segments: &[Segment<'_>],
        index: usize,
        path: &str,
        out: &mut Vec<String>,
    ) {
        let text = segments[index].text;
        let field = match text.strip_suffix('#') {
            Some(field) if ends_with_unescaped(text, "#") && !field.is_empty() => field,
            _ => return self.expand_field(value, segments, index, path, out),
        };

        let length_path = join(&join(path, field), "#");
        if index + 1 < segments.len() {
            log::debug!(
                "'{}' ends at '{}', ignoring '{}'",
                text,
                length_path,
                rest_text(&segments[index + 1..])
            );
        }
        out.push(length_path);
    }

    fn expand_wildcard(
        &self,
        value: &Value,
        segments: &[Segment<'_>],
        index: usize,
        path: &str,
        out: &mut Vec<String>,
    ) {
        let text = segments[index].text;
        let Value::Object(map) = value else {
            log::debug!("Wildcard '{}' at '{}' has no object to match", text, path);
            return;
        };
        let glob = match Glob::new(text) {
            Ok(glob) => glob,
            Err(e) => {
                log::warn!("Invalid wildcard '{}': {}", text, e);
                return;
            }
        };

        for key in map.keys().filter(|key| glob.is_match(key)).sorted() {
            if key.is_empty() {
                log::debug!("Wildcard '{}' at '{}' skips the empty key", text, path);
                continue;
            }
            let child = &map[key.as_str()];
            self.walk(child, segments, index + 1, &join(path, &escape_key(key)), out);
        }
    }

    /// A plain key or array index. An all-digit token is only ever an index;
    /// numeric object keys are reached through their escaped form.
    fn expand_field(
        &self,
        value: &Value,
        segments: &[Segment<'_>],
        index: usize,
        path: &str,
        out: &mut Vec<String>,
    ) {
        let text = segments[index].text;
        let field_path = join(path, text);
        let terminal = index + 1 == segments.len();

        let numeric = array_index(text);

        let child = match (value, numeric) {
            (Value::Array(items), Some(i)) => items.get(i),
            (Value::Object(map), None) => map.get(&unescape(text)),
            _ => None,
        };

        match child {
            Some(child) => self.walk(child, segments, index + 1, &field_path, out),
            None if terminal && numeric.is_none() => {
                match self.options.leaf_policy {
                    LeafPolicy::Always => out.push(field_path),
                    LeafPolicy::Existing => {
                        log::debug!("Dropping leaf '{}': field does not exist", field_path)
                    }
                }
            }
            None => log::debug!("Pruned '{}': nothing to descend into", field_path),
        }
    }

    // --- Filter Queries ---

    fn expand_query(
        &self,
        value: &Value,
        query: &QuerySegment<'_>,
        segments: &[Segment<'_>],
        index: usize,
        path: &str,
        out: &mut Vec<String>,
    ) {
        let (target, base) = if query.prefix.is_empty() {
            (Some(value), path.to_string())
        } else {
            let prefix = if ends_with_unescaped(query.prefix, ".") {
                &query.prefix[..query.prefix.len() - 1]
            } else {
                query.prefix
            };
            let target = value.as_object().and_then(|map| map.get(&unescape(prefix)));
            (target, join(path, prefix))
        };
        let Some(Value::Array(items)) = target else {
            log::debug!("Query '{}' at '{}' has no array to filter", query.body, path);
            return;
        };

        let condition = parse_condition(query.body);
        let predicate = Predicate::compile(&condition);
        let matching = items
            .iter()
            .enumerate()
            .filter(|(_, item)| predicate.matches(item))
            .map(|(i, _)| i)
            .collect_vec();
        log::trace!(
            "Query '{}' ('{}' {} '{}') at '{}' matched {} of {} element(s)",
            query.body,
            condition.field,
            condition.op.as_str(),
            condition.value,
            base,
            matching.len(),
            items.len()
        );

        let rest = &segments[index + 1..];
        let suffix = query.suffix;
        if suffix == "#" {
            self.walk_matches(items, &matching, rest, &base, out);
        } else if suffix.is_empty() {
            let selected = if condition.op.is_pattern() {
                &matching[..]
            } else {
                &matching[..matching.len().min(1)]
            };
            self.walk_matches(items, selected, rest, &base, out);
        } else if let Some(sub) = suffix.strip_prefix("#.").or_else(|| suffix.strip_prefix('.')) {
            let mut chained = segment(sub);
            chained.extend_from_slice(rest);
            self.walk_matches(items, &matching, &chained, &base, out);
        } else {
            log::debug!("Unrecognized query suffix '{}' at '{}'", suffix, base);
        }
    }

    fn walk_matches(
        &self,
        items: &[Value],
        indices: &[usize],
        segments: &[Segment<'_>],
        base: &str,
        out: &mut Vec<String>,
    ) {
        for &i in indices {
            self.walk(&items[i], segments, 0, &join(base, &i.to_string()), out);
        }
    }
}
