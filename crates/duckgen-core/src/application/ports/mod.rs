//! Application ports (traits) for external dependencies.
//!
//! Ports define what the orchestrator needs from the outside world.
//! Adapters in `duckgen-adapters` implement them.
//!
//! - `Filesystem`: read, probe and write generated files
//! - `TemplateStore`: look up template bodies per kit

pub mod output;

pub use output::{Filesystem, TemplateStore};
