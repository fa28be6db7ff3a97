//! A project tree that only lives in memory.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use duckgen_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{DuckError, DuckResult},
};

/// Clones share one tree: hand a clone to a `DuckService` and inspect the
/// outcome through the original.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    tree: Arc<RwLock<Tree>>,
}

#[derive(Debug, Default)]
struct Tree {
    files: BTreeMap<PathBuf, String>,
    dirs: BTreeSet<PathBuf>,
}

impl Tree {
    fn mkdir_p(&mut self, dir: &Path) {
        for ancestor in dir.ancestors() {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            self.dirs.insert(ancestor.to_path_buf());
        }
    }
}

impl MemoryFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed `path` with `content`; its parents are created as well.
    pub fn with_file(self, path: impl AsRef<Path>, content: impl Into<String>) -> Self {
        if let Ok(mut tree) = self.write() {
            let path = path.as_ref();
            tree.mkdir_p(path.parent().unwrap_or(Path::new("")));
            tree.files.insert(path.to_path_buf(), content.into());
        }
        self
    }

    pub fn read_file(&self, path: impl AsRef<Path>) -> Option<String> {
        self.read().ok()?.files.get(path.as_ref()).cloned()
    }

    /// Every file path, in sorted order.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.read()
            .map(|tree| tree.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    fn read(&self) -> DuckResult<RwLockReadGuard<'_, Tree>> {
        self.tree.read().map_err(|_| poisoned())
    }

    fn write(&self) -> DuckResult<RwLockWriteGuard<'_, Tree>> {
        self.tree.write().map_err(|_| poisoned())
    }
}

fn poisoned() -> DuckError {
    ApplicationError::LockPoisoned { what: "filesystem" }.into()
}

fn missing(path: &Path, reason: &str) -> DuckError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: reason.to_owned(),
    }
    .into()
}

impl Filesystem for MemoryFilesystem {
    fn read_to_string(&self, path: &Path) -> DuckResult<String> {
        self.read()?
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| missing(path, "file does not exist"))
    }

    fn write_file(&self, path: &Path, content: &str) -> DuckResult<()> {
        let mut tree = self.write()?;
        let orphaned = path
            .parent()
            .is_some_and(|dir| !dir.as_os_str().is_empty() && !tree.dirs.contains(dir));
        if orphaned {
            return Err(missing(path, "parent directory does not exist"));
        }
        tree.files.insert(path.to_path_buf(), content.to_owned());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.read().is_ok_and(|tree| tree.files.contains_key(path))
    }

    fn create_dir_all(&self, path: &Path) -> DuckResult<()> {
        self.write()?.mkdir_p(path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_need_an_existing_parent() {
        let fs = MemoryFilesystem::new();
        let reducers = Path::new("src/redux/reducers.js");

        assert!(fs.write_file(reducers, "x").is_err());

        fs.create_dir_all(Path::new("src/redux")).unwrap();
        fs.write_file(reducers, "x").unwrap();
        assert_eq!(fs.read_to_string(reducers).unwrap(), "x");
    }

    #[test]
    fn top_level_files_need_no_directory() {
        let fs = MemoryFilesystem::new();
        fs.write_file(Path::new("duckgen.toml"), "").unwrap();
        assert!(fs.exists(Path::new("duckgen.toml")));
    }

    #[test]
    fn clones_see_each_others_writes() {
        let fs = MemoryFilesystem::new();
        let other = fs.clone();

        other.create_dir_all(Path::new("a")).unwrap();
        other.write_file(Path::new("a/b.js"), "b").unwrap();

        assert_eq!(fs.read_file("a/b.js").as_deref(), Some("b"));
    }

    #[test]
    fn seeding_creates_every_ancestor() {
        let fs = MemoryFilesystem::new().with_file("src/redux/configureStore.js", "x");
        fs.write_file(Path::new("src/app.js"), "").unwrap();
        fs.write_file(Path::new("src/redux/reducers.js"), "").unwrap();
        assert!(!fs.exists(Path::new("src/redux")));
        assert_eq!(
            fs.list_files(),
            vec![
                PathBuf::from("src/app.js"),
                PathBuf::from("src/redux/configureStore.js"),
                PathBuf::from("src/redux/reducers.js"),
            ]
        );
    }
}
