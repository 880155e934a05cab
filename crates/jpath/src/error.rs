use crate::segment::Nesting;
use thiserror::Error;

/// Structural problems found in a path expression.
///
/// Expansion itself never fails on these; it degrades to best-effort
/// segmentation. `validate` reports them for callers that want to know.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JPathError {
    #[error("Unclosed '{open}' opened at position {position}")]
    UnclosedDelimiter { open: char, position: usize },

    #[error("Unmatched '{close}' at position {position}")]
    UnmatchedCloser { close: char, position: usize },

    #[error("Unterminated string starting at position {position}")]
    UnterminatedString { position: usize },

    #[error("Dangling escape at position {position}")]
    DanglingEscape { position: usize },
}

fn opener_for(close: char) -> char {
    match close {
        ')' => '(',
        ']' => '[',
        _ => '{',
    }
}

/// Checks that every filter delimiter and quoted string in `path` is closed.
///
/// Bare `]` and `}` outside a filter are multipath closers and pass. A stray
/// `)` is reported.
pub fn validate(path: &str) -> Result<(), JPathError> {
    let mut nesting = Nesting::default();

    for (position, c) in path.char_indices() {
        let live = !nesting.pending_escape() && nesting.quote_start().is_none();
        if live && matches!(c, ')' | ']' | '}') {
            match nesting.innermost() {
                Some((close, _)) if close == c => {}
                Some(_) => return Err(JPathError::UnmatchedCloser { close: c, position }),
                None if c == ')' => return Err(JPathError::UnmatchedCloser { close: c, position }),
                None => {}
            }
        }
        nesting.step(position, c);
    }

    if nesting.pending_escape() {
        return Err(JPathError::DanglingEscape {
            position: path.len() - 1,
        });
    }
    if let Some(position) = nesting.quote_start() {
        return Err(JPathError::UnterminatedString { position });
    }
    if let Some((close, position)) = nesting.innermost() {
        return Err(JPathError::UnclosedDelimiter {
            open: opener_for(close),
            position,
        });
    }
    Ok(())
}
