//! Application services - orchestrate use cases.

pub mod duck_service;
pub mod file_service;
pub mod template_service;

pub use duck_service::{DuckService, DuckSettings, Notice, Report};
pub use file_service::FileService;
pub use template_service::TemplateService;
