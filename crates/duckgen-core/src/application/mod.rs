//! Application layer for duckgen.
//!
//! This layer contains:
//! - **Services**: use case orchestration (`DuckService`) and the template
//!   and file resolvers it is built from
//! - **Ports**: interface definitions (traits) for external dependencies
//! - **Errors**: application-specific error types
//!
//! All text manipulation lives in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{DuckService, DuckSettings, FileService, Notice, Report, TemplateService};

pub use ports::{Filesystem, TemplateStore};

pub use error::ApplicationError;
