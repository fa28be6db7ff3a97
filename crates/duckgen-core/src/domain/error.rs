// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use std::path::PathBuf;
use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (reports keep a copy)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid {kind} name '{name}': {reason}")]
    InvalidName {
        kind: &'static str,
        name: String,
        reason: String,
    },

    #[error("Unknown case style '{0}'")]
    UnknownCaseStyle(String),

    // ========================================================================
    // Structural Errors (target file does not look like generated output)
    // ========================================================================
    #[error("Anchor '{anchor}' not found in {}", path.display())]
    AnchorNotFound { anchor: String, path: PathBuf },

    #[error("Marker '{marker}' not found")]
    MarkerNotFound { marker: String },

    // ========================================================================
    // Not Found Errors
    // ========================================================================
    #[error("Template '{0}' not found")]
    TemplateNotFound(String),

    #[error("Unknown kit '{0}'")]
    UnknownKit(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidName { kind, .. } => vec![
                format!("Use letters, digits, '-' or '_' for the {kind} name"),
                "Examples: todo, todo-list, shoppingCart".into(),
            ],
            Self::AnchorNotFound { anchor, path } => vec![
                format!("'{}' no longer contains the line '{}'", path.display(), anchor),
                "Restore the anchor line or regenerate the file from its template".into(),
            ],
            Self::TemplateNotFound(name) => vec![
                format!("No template named '{name}' is available for this kit"),
                "Try: duckgen list to see available templates".into(),
            ],
            Self::UnknownKit(kit) => vec![
                format!("'{kit}' is not a known kit"),
                "Available kits: duck, starter-kit".into(),
            ],
            Self::UnknownCaseStyle(_) | Self::MarkerNotFound { .. } => {
                vec!["This appears to be a bug in duckgen".into()]
            }
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidName { .. } | Self::UnknownKit(_) => ErrorCategory::Validation,
            Self::AnchorNotFound { .. } | Self::TemplateNotFound(_) => ErrorCategory::NotFound,
            Self::UnknownCaseStyle(_) | Self::MarkerNotFound { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
