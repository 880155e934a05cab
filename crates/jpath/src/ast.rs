//! Syntax types produced by the path segmenter and the query parser.

/// The separator that preceded a segment in the raw path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Separator {
    /// First segment of a path.
    #[default]
    None,
    /// `.`
    Dot,
    /// `|`
    Pipe,
}

impl Separator {
    pub fn as_str(self) -> &'static str {
        match self {
            Separator::None => "",
            Separator::Dot => ".",
            Separator::Pipe => "|",
        }
    }
}

/// One delimited token of a path expression.
///
/// `text` still carries its backslash escapes; they are only removed when the
/// token is compared against document keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub separator: Separator,
}

impl<'a> Segment<'a> {
    pub fn new(text: &'a str, separator: Separator) -> Self {
        Self { text, separator }
    }
}

/// A comparison operator inside a filter query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    NotEq,
    Gt,
    Lt,
    GtEq,
    LtEq,
    /// `%`, glob match.
    Like,
    /// `!%`, negated glob match.
    NotLike,
}

impl CompareOp {
    pub fn as_str(self) -> &'static str {
        match self {
            CompareOp::Eq => "==",
            CompareOp::NotEq => "!=",
            CompareOp::Gt => ">",
            CompareOp::Lt => "<",
            CompareOp::GtEq => ">=",
            CompareOp::LtEq => "<=",
            CompareOp::Like => "%",
            CompareOp::NotLike => "!%",
        }
    }

    /// Pattern operators always select every matching element.
    pub fn is_pattern(self) -> bool {
        matches!(self, CompareOp::Like | CompareOp::NotLike)
    }
}

/// Truthiness/existence tests written as `~true`, `~false`, `~null` and `~*`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tilde {
    True,
    False,
    Null,
    Exists,
}

/// The sentinel value carried by a nested-array condition.
pub const NESTED_SENTINEL: &str = "true";

/// A parsed filter predicate: `field OP value`.
///
/// An empty `field` compares the array element itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryCondition {
    pub field: String,
    pub op: CompareOp,
    pub value: String,
}

impl QueryCondition {
    pub fn new(field: impl Into<String>, op: CompareOp, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            op,
            value: value.into(),
        }
    }

    /// Classifies the value as a tilde test.
    ///
    /// `None` means the value is an ordinary literal. `Some(None)` is a `~token`
    /// that is not one of the four known tests; such a condition never matches.
    pub fn tilde(&self) -> Option<Option<Tilde>> {
        if !self.value.starts_with('~') {
            return None;
        }
        Some(crate::parser::parse_tilde(&self.value))
    }

    /// Splits a nested-array condition such as `nets.#(=="fb")` into the array
    /// field (`nets`) and the inner predicate body (`=="fb"`).
    pub fn nested(&self) -> Option<(&str, &str)> {
        if self.value != NESTED_SENTINEL {
            return None;
        }
        let start = self.field.find(".#(")?;
        let end = self.field.rfind(')')?;
        if end < start + 3 {
            return None;
        }
        Some((&self.field[..start], &self.field[start + 3..end]))
    }
}

/// A segment split around its filter query: `prefix#(body)suffix`, or the
/// legacy `prefix#[body]suffix`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuerySegment<'a> {
    pub prefix: &'a str,
    pub body: &'a str,
    pub suffix: &'a str,
}

/// Names of the modifiers built into the query language.
pub const BUILTIN_MODIFIERS: &[&str] = &[
    "this", "valid", "pretty", "ugly", "reverse", "flatten", "join", "keys", "values", "tostr",
    "fromstr", "group", "dig",
];

/// An `@name[:args]` token. The engine treats modifiers as opaque leaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Modifier<'a> {
    pub name: &'a str,
    pub args: Option<&'a str>,
}

impl Modifier<'_> {
    pub fn is_builtin(&self) -> bool {
        BUILTIN_MODIFIERS.contains(&self.name)
    }
}

/// One component of a `[...]` or `{...}` multipath.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultipathComponent<'a> {
    /// Output key for the object form, without its quotes.
    pub key: Option<String>,
    pub path: &'a str,
}

impl MultipathComponent<'_> {
    /// Inline literals (`!true`, `!"text"`) contribute no paths.
    pub fn is_literal(&self) -> bool {
        self.path.trim_start().starts_with('!')
    }
}

/// The two grouping forms, carrying their inner (unwrapped) content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Multipath<'a> {
    Array(&'a str),
    Object(&'a str),
}

impl<'a> Multipath<'a> {
    pub fn detect(path: &'a str) -> Option<Self> {
        if path.len() < 2 {
            return None;
        }
        if path.starts_with('[') && path.ends_with(']') {
            return Some(Multipath::Array(&path[1..path.len() - 1]));
        }
        if path.starts_with('{') && path.ends_with('}') {
            return Some(Multipath::Object(&path[1..path.len() - 1]));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_condition_split() {
        let cond = QueryCondition::new(r#"nets.#(=="fb")"#, CompareOp::Eq, NESTED_SENTINEL);
        assert_eq!(cond.nested(), Some(("nets", r#"=="fb""#)));

        let plain = QueryCondition::new("nets", CompareOp::Eq, "fb");
        assert_eq!(plain.nested(), None);
    }

    #[test]
    fn test_tilde_classification() {
        let cond = QueryCondition::new("b", CompareOp::Eq, "~true");
        assert_eq!(cond.tilde(), Some(Some(Tilde::True)));

        let unknown = QueryCondition::new("b", CompareOp::Eq, "~maybe");
        assert_eq!(unknown.tilde(), Some(None));

        let literal = QueryCondition::new("b", CompareOp::Eq, "true");
        assert_eq!(literal.tilde(), None);
    }

    #[test]
    fn test_multipath_detection() {
        assert_eq!(Multipath::detect("[a,b]"), Some(Multipath::Array("a,b")));
        assert_eq!(Multipath::detect("{a,b}"), Some(Multipath::Object("a,b")));
        assert_eq!(Multipath::detect("a.b"), None);
        assert_eq!(Multipath::detect("["), None);
    }

    #[test]
    fn test_literal_component() {
        let lit = MultipathComponent { key: None, path: " !true" };
        assert!(lit.is_literal());
        let path = MultipathComponent { key: Some("k".into()), path: "a.b" };
        assert!(!path.is_literal());
    }
}
