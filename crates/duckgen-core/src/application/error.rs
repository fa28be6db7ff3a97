//! Failures of the ports duckgen drives, as opposed to the text logic in
//! `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The override directory or one of its templates could not be read.
    #[error("Template resolution failed: {reason}")]
    TemplateResolution { reason: String },

    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// A writer panicked while holding an in-memory lock.
    #[error("Lock on the in-memory {what} was poisoned")]
    LockPoisoned { what: &'static str },
}

impl ApplicationError {
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateResolution { .. } => vec![
                "Point templates.local_path (or DUCKGEN_TEMPLATES_DIR) at an existing directory".into(),
                "Run 'duckgen list' to see which templates are loaded".into(),
            ],
            Self::FilesystemError { path, reason } => vec![
                format!("{} could not be used ({reason})", path.display()),
                "Run duckgen from the project root or pass --root".into(),
            ],
            Self::LockPoisoned { .. } => {
                vec!["An earlier operation panicked; re-run the command".into()]
            }
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateResolution { .. } => ErrorCategory::Configuration,
            Self::FilesystemError { .. } | Self::LockPoisoned { .. } => ErrorCategory::Internal,
        }
    }
}
