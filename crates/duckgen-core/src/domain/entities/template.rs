//! Template entities.
//!
//! A [`Template`] is an immutable named text resource. Its name doubles as the
//! destination filename pattern, so `__naMe__.js` resolves to `todo.js` for the
//! `todo` duck while `configureStore.js` always resolves to itself.

use std::fmt;

use crate::domain::case::render_placeholders;

/// Bundled text (`include_str!`) or text read from an override directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// Compile-time string literal (e.g., `include_str!("configureStore.js")`)
    Static(&'static str),

    /// Runtime-owned string (loaded from a template directory)
    Owned(String),
}

impl From<&'static str> for TemplateSource {
    fn from(s: &'static str) -> Self {
        Self::Static(s)
    }
}

impl From<String> for TemplateSource {
    fn from(s: String) -> Self {
        Self::Owned(s)
    }
}

impl TemplateSource {
    /// The template text.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Static(s) => s,
            Self::Owned(s) => s,
        }
    }
}

/// A named template body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    name: String,
    body: TemplateSource,
}

impl Template {
    pub fn new(name: impl Into<String>, body: impl Into<TemplateSource>) -> Self {
        Self {
            name: name.into(),
            body: body.into(),
        }
    }

    /// Logical name, e.g. `configureStore.js` or `__naMe__.js`.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn body(&self) -> &str {
        self.body.as_str()
    }

    /// `true` for templates compiled into the binary.
    pub fn is_builtin(&self) -> bool {
        matches!(self.body, TemplateSource::Static(_))
    }

    /// Destination filename for `target`.
    pub fn filename_for(&self, target: &str) -> String {
        render_placeholders(&self.name, target)
    }

    /// Whether this template answers to a logical name.
    ///
    /// A trailing `*` turns the name into a prefix pattern (`_*` matches
    /// `__naMe__.js`).
    pub fn matches(&self, pattern: &str) -> bool {
        match pattern.strip_suffix('*') {
            Some(prefix) => self.name.starts_with(prefix),
            None => self.name == pattern,
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A template resolved for a concrete target name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTemplate {
    pub content: String,
    pub filename: String,
}
