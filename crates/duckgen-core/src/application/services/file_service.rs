//! File Service - opens generated files and persists them.
//!
//! In dry-run mode writes are captured in memory and never reach the
//! filesystem port. Later opens see the captured content, so a dry run of
//! `init` followed by its example duck behaves like the real thing.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::{
    application::ports::Filesystem,
    domain::{GeneratedFile, render_placeholders},
    error::DuckResult,
};

pub struct FileService {
    filesystem: Box<dyn Filesystem>,
    dry_run: bool,
    pending: BTreeMap<PathBuf, String>,
}

impl FileService {
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            filesystem,
            dry_run: false,
            pending: BTreeMap::new(),
        }
    }

    pub fn dry_run(mut self, enabled: bool) -> Self {
        self.dry_run = enabled;
        self
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Open the file at `path`, rendering its placeholders for `target`.
    ///
    /// Never creates anything: a missing file comes back empty with
    /// `exists() == false`.
    pub fn open(&self, path: &Path, target: &str) -> DuckResult<GeneratedFile> {
        let path = PathBuf::from(render_placeholders(&path.to_string_lossy(), target));

        if let Some(content) = self.pending.get(&path) {
            return Ok(GeneratedFile::loaded(path, content.clone()));
        }

        if self.filesystem.exists(&path) {
            let content = self.filesystem.read_to_string(&path)?;
            debug!(path = %path.display(), bytes = content.len(), "Loaded file");
            Ok(GeneratedFile::loaded(path, content))
        } else {
            debug!(path = %path.display(), "File does not exist");
            Ok(GeneratedFile::missing(path))
        }
    }

    /// Write `file` back, creating parent directories.
    pub fn persist(&mut self, file: &mut GeneratedFile) -> DuckResult<()> {
        let content = file.content().unwrap_or_default().to_string();
        let path = file.path().to_path_buf();

        if self.dry_run {
            info!(path = %path.display(), "Dry run: would write file");
            self.pending.insert(path, content);
        } else {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                self.filesystem.create_dir_all(parent)?;
            }
            self.filesystem.write_file(&path, &content)?;
            info!(path = %path.display(), "Wrote file");
        }

        file.mark_saved();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ApplicationError;
    use crate::application::ports::output::MockFilesystem;
    use crate::error::DuckError;

    #[test]
    fn open_renders_path_placeholders() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .withf(|p| p == Path::new("src/redux/modules/todoList.js"))
            .return_const(false);

        let files = FileService::new(Box::new(fs));
        let file = files
            .open(Path::new("src/redux/modules/__naMe__.js"), "todo-list")
            .unwrap();

        assert!(!file.exists());
        assert_eq!(file.content(), None);
    }

    #[test]
    fn persist_creates_parent_then_writes() {
        let mut fs = MockFilesystem::new();
        let mut seq = mockall::Sequence::new();
        fs.expect_create_dir_all()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        fs.expect_write_file()
            .withf(|p, c| p == Path::new("src/redux/reducers.js") && c == "x")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));

        let mut files = FileService::new(Box::new(fs));
        let mut file = GeneratedFile::missing("src/redux/reducers.js").or_template("x");
        files.persist(&mut file).unwrap();

        assert!(!file.is_dirty());
    }

    #[test]
    fn write_failure_is_reported() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(|p, _| {
            Err(ApplicationError::FilesystemError {
                path: p.to_path_buf(),
                reason: "read-only".into(),
            }
            .into())
        });

        let mut files = FileService::new(Box::new(fs));
        let mut file = GeneratedFile::missing("a/b.js").or_template("x");
        let err = files.persist(&mut file).unwrap_err();

        assert!(matches!(
            err,
            DuckError::Application(ApplicationError::FilesystemError { .. })
        ));
        assert!(file.is_dirty());
    }

    #[test]
    fn dry_run_never_touches_the_port() {
        let mut fs = MockFilesystem::new();
        fs.expect_write_file().never();
        fs.expect_create_dir_all().never();

        let mut files = FileService::new(Box::new(fs)).dry_run(true);
        let mut file = GeneratedFile::missing("src/redux/configureStore.js").or_template("x");
        files.persist(&mut file).unwrap();

        let reopened = files
            .open(Path::new("src/redux/configureStore.js"), "")
            .unwrap();
        assert!(reopened.exists());
        assert_eq!(reopened.content(), Some("x"));
    }
}
