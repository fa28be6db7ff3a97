//! Driven (output) ports - implemented by infrastructure.

use std::path::Path;

use crate::domain::{Kit, Template};
use crate::error::DuckResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `duckgen_adapters::filesystem::LocalFilesystem` (production)
/// - `duckgen_adapters::filesystem::MemoryFilesystem` (testing, dry runs)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Read a whole file as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> DuckResult<String>;

    /// Write content to a file, replacing it.
    fn write_file(&self, path: &Path, content: &str) -> DuckResult<()>;

    /// Whether a regular file exists at `path`. Directories do not count.
    fn exists(&self, path: &Path) -> bool;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> DuckResult<()>;
}

/// Port for template storage and retrieval.
///
/// Implemented by:
/// - `duckgen_adapters::template_store::InMemoryStore` (built-in templates,
///   optionally overlaid with a user template directory)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateStore: Send + Sync {
    /// Get the template of `kit` answering to `name`.
    ///
    /// A trailing `*` in `name` selects the first template, in name order,
    /// starting with the prefix.
    fn get(&self, kit: Kit, name: &str) -> DuckResult<Template>;

    /// List the templates of `kit`, sorted by name.
    fn list(&self, kit: Kit) -> DuckResult<Vec<Template>>;
}
