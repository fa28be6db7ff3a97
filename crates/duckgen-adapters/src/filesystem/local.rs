//! The project tree on disk.

use std::fs;
use std::io;
use std::path::Path;

use tracing::trace;

use duckgen_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{DuckError, DuckResult},
};

#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for LocalFilesystem {
    fn read_to_string(&self, path: &Path) -> DuckResult<String> {
        trace!(path = %path.display(), "read");
        fs::read_to_string(path).map_err(io_failure(path, "cannot read"))
    }

    fn write_file(&self, path: &Path, content: &str) -> DuckResult<()> {
        trace!(path = %path.display(), bytes = content.len(), "write");
        fs::write(path, content).map_err(io_failure(path, "cannot write"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn create_dir_all(&self, path: &Path) -> DuckResult<()> {
        fs::create_dir_all(path).map_err(io_failure(path, "cannot create directory"))
    }
}

fn io_failure<'a>(path: &'a Path, what: &'a str) -> impl FnOnce(io::Error) -> DuckError + 'a {
    move |source| {
        ApplicationError::FilesystemError {
            path: path.to_path_buf(),
            reason: format!("{what}: {source}"),
        }
        .into()
    }
}
