//! The error type every public duckgen operation returns.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::{self, DomainError};

#[derive(Debug, Error, Clone)]
pub enum DuckError {
    /// A bad name or a file that lost its anchor.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Reading templates or touching the filesystem went wrong.
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl DuckError {
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Coarse class used by front ends to pick an exit status.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                domain::ErrorCategory::Validation => ErrorCategory::Validation,
                domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
                domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Internal,
}

pub type DuckResult<T> = Result<T, DuckError>;

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn lost_anchor_is_not_found() {
        let err: DuckError = DomainError::AnchorNotFound {
            anchor: "// Actions".into(),
            path: PathBuf::from("modules/todo.js"),
        }
        .into();

        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert_eq!(
            err.to_string(),
            "Anchor '// Actions' not found in modules/todo.js"
        );
    }

    #[test]
    fn unreadable_file_is_internal_with_hints() {
        let err: DuckError = ApplicationError::FilesystemError {
            path: PathBuf::from("x"),
            reason: "denied".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Internal);
        assert!(!err.suggestions().is_empty());
    }

    #[test]
    fn broken_override_dir_is_configuration() {
        let err: DuckError = ApplicationError::TemplateResolution {
            reason: "no such directory".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Configuration);
    }
}
