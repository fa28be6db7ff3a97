//! Infrastructure adapters for duckgen.
//!
//! This crate implements the ports defined in `duckgen_core::application::ports`.
//! It contains all I/O: the real and in-memory filesystems, the bundled
//! templates and the loader for user template directories.

pub mod builtin_templates;
pub mod filesystem;
pub mod template_loader;
pub mod template_store;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use template_loader::DirectoryTemplateLoader;
pub use template_store::InMemoryStore;
