//! Anchor-based text splicing.
//!
//! Generated files carry stable anchor lines (`// Actions`,
//! `switch (action.type) {`, ...). New code is inserted as a block directly
//! below the matching line. No parsing happens here: a line matches when it
//! contains the anchor text, and a missing anchor is an error because the
//! file no longer looks like generator output.

use std::path::Path;

use crate::domain::{case::render_placeholders, error::DomainError};

/// Which matching line an insertion is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnchorPosition {
    #[default]
    First,
    Last,
}

/// One "insert this block after that anchor" step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insertion {
    pub anchor: &'static str,
    pub position: AnchorPosition,
    pub fragment: Vec<String>,
}

impl Insertion {
    pub fn after(anchor: &'static str, fragment: Vec<String>) -> Self {
        Self {
            anchor,
            position: AnchorPosition::First,
            fragment,
        }
    }

    pub fn after_last(anchor: &'static str, fragment: Vec<String>) -> Self {
        Self {
            anchor,
            position: AnchorPosition::Last,
            fragment,
        }
    }
}

/// Insert `fragment` after the first (or last) line containing `anchor`.
///
/// Every fragment line is rendered against `name` before splicing. The
/// fragment keeps its internal order and the content keeps its line
/// terminators, including a trailing newline. Inserted lines end the way
/// the file's lines do (CRLF or LF).
///
/// `path` is only used to build the error.
pub fn insert_after<S: AsRef<str>>(
    content: &str,
    anchor: &str,
    fragment: &[S],
    name: &str,
    position: AnchorPosition,
    path: &Path,
) -> Result<String, DomainError> {
    let eol = line_ending(content);
    let mut lines: Vec<String> = content
        .split(eol)
        .map(str::to_string)
        .collect();

    let matched = match position {
        AnchorPosition::First => lines.iter().position(|line| line.contains(anchor)),
        AnchorPosition::Last => lines.iter().rposition(|line| line.contains(anchor)),
    }
    .ok_or_else(|| DomainError::AnchorNotFound {
        anchor: anchor.to_string(),
        path: path.to_path_buf(),
    })?;

    let rendered = fragment
        .iter()
        .map(|line| render_placeholders(line.as_ref(), name));

    lines.splice(matched + 1..matched + 1, rendered);

    Ok(lines.join(eol))
}

/// `"\r\n"` for files written on Windows, `"\n"` otherwise.
fn line_ending(content: &str) -> &'static str {
    if content.contains("\r\n") { "\r\n" } else { "\n" }
}
