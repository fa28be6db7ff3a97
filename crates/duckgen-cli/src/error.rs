//! Errors surfaced by the `duckgen` binary and how they are shown.

use std::error::Error;
use std::fmt;

use owo_colors::{OwoColorize, Style};
use thiserror::Error;

use duckgen_core::error::{DuckError, DuckResult, ErrorCategory as CoreCategory};

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// Settings could not be loaded, or an unknown key was requested.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn Error + Send + Sync>>,
    },

    #[error(transparent)]
    Core(#[from] DuckError),

    /// Writing to stdout failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(source: std::io::Error) -> Self {
        Self::IoError {
            message: source.to_string(),
            source,
        }
    }
}

impl CliError {
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ConfigError { .. } => vec![
                format!(
                    "Compare {} and ./duckgen.toml against 'duckgen config list'",
                    crate::config::AppConfig::config_path().display()
                ),
                "DUCKGEN__SECTION__KEY variables override both files".into(),
            ],
            Self::Core(inner) => inner.suggestions(),
            Self::IoError { .. } => vec!["Is stdout a closed pipe or a full disk?".into()],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Configuration => ErrorCategory::Configuration,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// Render the error for stderr.
    ///
    /// The cause chain is only walked when `verbose` is set; otherwise a
    /// hint to re-run with `--verbose` closes the message.
    pub fn render(&self, verbose: bool, color: bool) -> String {
        let paint = |text: &str, style: Style| {
            if color {
                text.style(style).to_string()
            } else {
                text.to_string()
            }
        };
        let red = Style::new().red().bold();
        let dim = Style::new().dimmed();

        let mut lines = vec![
            String::new(),
            format!("{} {}", paint("Error:", red), paint(&self.to_string(), red)),
        ];

        if verbose {
            let mut cause = self.source();
            while let Some(err) = cause {
                lines.push(paint(&format!("  Caused by: {err}"), dim));
                cause = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            lines.push(String::new());
            lines.push(paint("Suggestions:", Style::new().yellow().bold()));
            lines.extend(suggestions.iter().map(|s| format!("  {s}")));
        }

        if !verbose {
            lines.push(String::new());
            lines.push(paint("Run again with --verbose to see what caused this.", dim));
        }

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }

    pub fn log(&self) {
        let category = self.category();
        match category {
            ErrorCategory::UserError | ErrorCategory::NotFound => {
                tracing::warn!(?category, error = %self, "Command rejected")
            }
            ErrorCategory::Configuration | ErrorCategory::Internal => {
                tracing::error!(?category, error = %self, "Command failed")
            }
        }
        if let Some(cause) = self.source() {
            tracing::debug!(%cause, "Underlying cause");
        }
    }
}

/// Exit status classes: 2, 3, 4 and 1 respectively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    UserError,
    NotFound,
    Configuration,
    Internal,
}

/// Records what a command was doing when a core call failed. Core errors
/// already name the file or template, so the description is only logged.
pub trait CoreContext<T> {
    fn while_doing<D: fmt::Display>(self, what: impl FnOnce() -> D) -> CliResult<T>;
}

impl<T> CoreContext<T> for DuckResult<T> {
    fn while_doing<D: fmt::Display>(self, what: impl FnOnce() -> D) -> CliResult<T> {
        self.map_err(|err| {
            tracing::debug!(during = %what(), "Core call failed");
            CliError::Core(err)
        })
    }
}
