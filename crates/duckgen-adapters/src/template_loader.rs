//! Loads template overrides from a user directory.
//!
//! Each kit has its own subdirectory, and a file replaces the bundled
//! template with the same name:
//!
//! ```text
//! my-templates/
//! ├── duck/
//! │   ├── configureStore.js   ← replaces the bundled registry
//! │   └── __naMe__.js         ← replaces the duck module
//! └── starter-kit/
//!     └── reducers.js
//! ```
//!
//! Only plain files directly inside a kit directory are considered; the file
//! name is the logical template name. Hidden files are ignored.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

use duckgen_core::{
    application::ApplicationError,
    domain::{Kit, Template},
    error::DuckResult,
};

/// Loads override templates from a directory tree.
pub struct DirectoryTemplateLoader {
    templates_dir: PathBuf,
}

impl DirectoryTemplateLoader {
    /// Create a loader pointed at `templates_dir`.
    pub fn new(templates_dir: impl Into<PathBuf>) -> Self {
        Self {
            templates_dir: templates_dir.into(),
        }
    }

    pub fn templates_dir(&self) -> &Path {
        &self.templates_dir
    }

    /// Load every template found in the directory of `kit`.
    ///
    /// A missing kit directory yields no templates. A missing root directory
    /// is an error, since it was named explicitly. Files that are not valid
    /// UTF-8 are skipped with a warning.
    #[instrument(skip(self), fields(dir = %self.templates_dir.display()))]
    pub fn load(&self, kit: Kit) -> DuckResult<Vec<Template>> {
        if !self.templates_dir.is_dir() {
            return Err(ApplicationError::TemplateResolution {
                reason: format!(
                    "templates directory not found: {}",
                    self.templates_dir.display()
                ),
            }
            .into());
        }

        let kit_dir = self.templates_dir.join(kit.as_str());
        if !kit_dir.is_dir() {
            debug!(path = %kit_dir.display(), "no overrides for kit");
            return Ok(Vec::new());
        }

        let mut templates = Vec::new();

        for entry in WalkDir::new(&kit_dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| ApplicationError::TemplateResolution {
                reason: format!("failed to read '{}': {e}", kit_dir.display()),
            })?;

            if !entry.file_type().is_file() {
                continue;
            }

            let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                warn!(path = %entry.path().display(), "skipping template with non UTF-8 name");
                continue;
            };
            if name.starts_with('.') {
                continue;
            }

            match fs::read_to_string(entry.path()) {
                Ok(body) => {
                    debug!(template = %name, "loaded override template");
                    templates.push(Template::new(name, body));
                }
                Err(e) => {
                    warn!(
                        path  = %entry.path().display(),
                        error = %e,
                        "skipping unreadable template"
                    );
                }
            }
        }

        debug!(count = templates.len(), "finished loading templates");
        Ok(templates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn make_dir(files: &[(&str, &str)]) -> TempDir {
        let temp = TempDir::new().unwrap();
        for (rel_path, content) in files {
            let full = temp.path().join(rel_path);
            if let Some(parent) = full.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(full, content).unwrap();
        }
        temp
    }

    #[test]
    fn missing_root_is_an_error() {
        let loader = DirectoryTemplateLoader::new("/absolutely/does/not/exist");
        assert!(loader.load(Kit::Duck).is_err());
    }

    #[test]
    fn missing_kit_dir_yields_nothing() {
        let temp = make_dir(&[("duck/configureStore.js", "x")]);
        let loader = DirectoryTemplateLoader::new(temp.path());
        assert!(loader.load(Kit::StarterKit).unwrap().is_empty());
    }

    #[test]
    fn loads_files_sorted_by_name() {
        let temp = make_dir(&[
            ("duck/configureStore.js", "store"),
            ("duck/__naMe__.js", "// Actions\n"),
            ("duck/.DS_Store", "junk"),
            ("duck/nested/ignored.js", "nested"),
        ]);

        let templates = DirectoryTemplateLoader::new(temp.path())
            .load(Kit::Duck)
            .unwrap();

        let names: Vec<_> = templates.iter().map(|t| t.name()).collect();
        assert_eq!(names, vec!["__naMe__.js", "configureStore.js"]);
        assert_eq!(templates[1].body(), "store");
    }
}
