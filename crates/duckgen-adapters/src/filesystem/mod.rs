//! Filesystem adapters.
//!
//! `LocalFilesystem` writes the real tree. `MemoryFilesystem` backs tests
//! and keeps every write in a shared map.

mod local;
mod memory;

pub use local::LocalFilesystem;
pub use memory::MemoryFilesystem;
