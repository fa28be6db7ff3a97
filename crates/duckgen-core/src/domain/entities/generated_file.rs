//! A text buffer bound to a path inside the generated tree.

use std::path::{Path, PathBuf};

use crate::domain::{
    anchor::{Insertion, insert_after},
    error::DomainError,
    marker::find_marker,
};

/// Mutable view of one generated file.
///
/// The buffer is loaded once when the file is opened. `content` is `None`
/// when nothing exists at `path` and no template has been applied yet.
/// Every successful mutation marks the buffer dirty; persisting it is the
/// caller's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    path: PathBuf,
    content: Option<String>,
    existed: bool,
    dirty: bool,
}

impl GeneratedFile {
    /// A file that was found on disk.
    pub fn loaded(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: Some(content.into()),
            existed: true,
            dirty: false,
        }
    }

    /// A file that does not exist yet.
    pub fn missing(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            content: None,
            existed: false,
            dirty: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the file existed when it was opened.
    pub fn exists(&self) -> bool {
        self.existed
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Use `body` as the content if the file has none yet.
    pub fn or_template(mut self, body: &str) -> Self {
        if self.content.is_none() {
            self.content = Some(body.to_string());
            self.dirty = true;
        }
        self
    }

    /// Apply one insertion, rendering its fragment against `name`.
    pub fn insert(&mut self, insertion: &Insertion, name: &str) -> Result<(), DomainError> {
        let current = self.content.as_deref().unwrap_or_default();
        let updated = insert_after(
            current,
            insertion.anchor,
            insertion.fragment.as_slice(),
            name,
            insertion.position,
            &self.path,
        )?;

        self.content = Some(updated);
        self.dirty = true;
        Ok(())
    }

    /// Line number of the rendered marker, if present.
    pub fn search(&self, marker: &str, name: &str) -> Result<usize, DomainError> {
        find_marker(self.content.as_deref().unwrap_or_default(), marker, name)
    }

    /// Record that the buffer now matches what is on disk.
    pub fn mark_saved(&mut self) {
        self.dirty = false;
        self.existed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_takes_template_body() {
        let file = GeneratedFile::missing("modules/todo.js").or_template("// Actions\n");
        assert!(!file.exists());
        assert!(file.is_dirty());
        assert_eq!(file.content(), Some("// Actions\n"));
    }

    #[test]
    fn existing_content_wins_over_template() {
        let file = GeneratedFile::loaded("modules/todo.js", "mine").or_template("theirs");
        assert_eq!(file.content(), Some("mine"));
        assert!(!file.is_dirty());
    }

    #[test]
    fn insert_marks_dirty() {
        let mut file = GeneratedFile::loaded("modules/todo.js", "// Actions\n");
        file.insert(&Insertion::after("// Actions", vec!["const __NA_ME__ = 1;".into()]), "set")
            .unwrap();

        assert!(file.is_dirty());
        assert_eq!(file.content(), Some("// Actions\nconst SET = 1;\n"));
        assert_eq!(file.search("const __NA_ME__ = 1;", "set"), Ok(2));
    }

    #[test]
    fn insert_into_empty_buffer_reports_anchor() {
        let mut file = GeneratedFile::missing("modules/todo.js");
        let err = file
            .insert(&Insertion::after("// Actions", vec![]), "set")
            .unwrap_err();
        assert!(matches!(err, DomainError::AnchorNotFound { .. }));
    }

    #[test]
    fn mark_saved_clears_dirty() {
        let mut file = GeneratedFile::missing("configureStore.js").or_template("x");
        file.mark_saved();
        assert!(file.exists());
        assert!(!file.is_dirty());
    }
}
