//! Evaluation of filter conditions against array elements.

use crate::glob::Glob;
use jexpand_jpath::{CompareOp, QueryCondition, Tilde, parse_condition, split_unescaped, unescape};
use serde_json::Value;
use std::borrow::Cow;
use std::cmp::Ordering;

/// A filter condition ready to be tested against many elements.
#[derive(Debug, Clone)]
pub struct Predicate {
    field: String,
    test: Test,
}

#[derive(Debug, Clone)]
enum Test {
    /// `field.#(inner)`: some (`==`) or no (`!=`) element of `field` matches.
    Nested {
        inner: Box<Predicate>,
        op: CompareOp,
    },
    /// `None` is an unrecognized `~token`.
    Tilde { tilde: Option<Tilde>, negate: bool },
    Compare { op: CompareOp, value: String },
    /// `None` when the glob failed to compile; such a pattern matches nothing.
    Pattern { glob: Option<Glob>, negate: bool },
}

impl Predicate {
    pub fn compile(condition: &QueryCondition) -> Self {
        if let Some((field, body)) = condition.nested() {
            let inner = Predicate::compile(&parse_condition(body));
            return Self {
                field: field.to_string(),
                test: Test::Nested {
                    inner: Box::new(inner),
                    op: condition.op,
                },
            };
        }

        let test = if let Some(tilde) = condition.tilde() {
            Test::Tilde {
                tilde,
                negate: condition.op == CompareOp::NotEq,
            }
        } else if condition.op.is_pattern() {
            let glob = match Glob::new(&condition.value) {
                Ok(glob) => Some(glob),
                Err(e) => {
                    log::warn!("Invalid pattern '{}': {}", condition.value, e);
                    None
                }
            };
            Test::Pattern {
                glob,
                negate: condition.op == CompareOp::NotLike,
            }
        } else {
            Test::Compare {
                op: condition.op,
                value: condition.value.clone(),
            }
        };

        Self {
            field: condition.field.clone(),
            test,
        }
    }

    pub fn matches(&self, element: &Value) -> bool {
        let item = resolve_field(element, &self.field);
        match &self.test {
            Test::Nested { inner, op } => {
                let Some(Value::Array(items)) = item else {
                    return false;
                };
                let any = items.iter().any(|e| inner.matches(e));
                match op {
                    CompareOp::Eq => any,
                    CompareOp::NotEq => !any,
                    _ => false,
                }
            }
            Test::Tilde { tilde: None, .. } => false,
            Test::Tilde {
                tilde: Some(tilde),
                negate,
            } => {
                let result = if self.field.is_empty() {
                    tilde_on_element(*tilde, element)
                } else {
                    tilde_on_field(*tilde, item)
                };
                result != *negate
            }
            // A missing item equals nothing and matches no pattern, so only
            // the negated operators hold.
            Test::Compare { op, value } => match item {
                Some(item) => compare(&stringify(item), *op, value),
                None => *op == CompareOp::NotEq,
            },
            Test::Pattern { glob, negate } => match (item, glob) {
                (Some(item), Some(glob)) => glob.is_match(&stringify(item)) != *negate,
                (None, _) => *negate,
                (Some(_), None) => false,
            },
        }
    }
}

fn tilde_on_element(tilde: Tilde, element: &Value) -> bool {
    match tilde {
        Tilde::True => is_truthy(element),
        Tilde::False => is_falsy(element),
        Tilde::Null => element.is_null(),
        // The element is present by virtue of being iterated.
        Tilde::Exists => true,
    }
}

fn tilde_on_field(tilde: Tilde, item: Option<&Value>) -> bool {
    match (tilde, item) {
        (Tilde::Exists, item) => item.is_some(),
        (Tilde::False, None) | (Tilde::Null, None) => true,
        (Tilde::True, None) => false,
        (tilde, Some(value)) => tilde_on_element(tilde, value),
    }
}

/// Resolves a dotted condition field (`name.first`, `nets.0`) below `element`.
/// An empty field is the element itself.
pub(crate) fn resolve_field<'v>(element: &'v Value, field: &str) -> Option<&'v Value> {
    if field.is_empty() {
        return Some(element);
    }
    split_unescaped(field, '.')
        .into_iter()
        .try_fold(element, |current, part| match current {
            Value::Object(map) => map.get(&unescape(part)),
            Value::Array(items) => part.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        })
}

pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::String(s) => s == "1" || s == "true",
        Value::Number(n) => n.as_f64() == Some(1.0),
        _ => false,
    }
}

pub(crate) fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !*b,
        Value::String(s) => s.is_empty() || s == "0" || s == "false",
        Value::Number(n) => n.as_f64() == Some(0.0),
        _ => false,
    }
}

/// Text form of a value for comparisons: strings verbatim, integral numbers
/// without a fraction, containers as compact JSON.
pub(crate) fn stringify(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s),
        Value::Null => Cow::Borrowed("null"),
        Value::Bool(true) => Cow::Borrowed("true"),
        Value::Bool(false) => Cow::Borrowed("false"),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => {
                Cow::Owned(format!("{}", f as i64))
            }
            _ => Cow::Owned(n.to_string()),
        },
        _ => Cow::Owned(value.to_string()),
    }
}

fn compare(item: &str, op: CompareOp, value: &str) -> bool {
    let ordering = || match (item.parse::<f64>(), value.parse::<f64>()) {
        (Ok(a), Ok(b)) => a.partial_cmp(&b),
        _ => Some(item.cmp(value)),
    };
    match op {
        CompareOp::Eq => item == value,
        CompareOp::NotEq => item != value,
        CompareOp::Gt => ordering() == Some(Ordering::Greater),
        CompareOp::Lt => ordering() == Some(Ordering::Less),
        CompareOp::GtEq => matches!(ordering(), Some(Ordering::Greater | Ordering::Equal)),
        CompareOp::LtEq => matches!(ordering(), Some(Ordering::Less | Ordering::Equal)),
        CompareOp::Like | CompareOp::NotLike => false,
    }
}
