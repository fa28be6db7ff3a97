//! Duck Service - main application orchestrator.
//!
//! Implements the two use cases:
//! 1. `init`: write the kit's bootstrap files, then generate an example duck
//!    when the tree was empty
//! 2. `generate`: create or extend a duck module, then wire it into the
//!    kit's registry file
//!
//! Both steps are idempotent. Actions and wiring already present are
//! reported as notices and left alone.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, instrument};

use crate::{
    application::{
        ports::{Filesystem, TemplateStore},
        services::{FileService, TemplateService},
    },
    domain::{
        DomainValidator as validator, Kit, Variant,
        variant::{DUCK_TEMPLATE, MODULES_DIR},
    },
    error::DuckResult,
};

/// Paths and defaults the orchestrator works with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuckSettings {
    /// Directory holding the registry files.
    pub root: PathBuf,
    /// Directory, relative to `root`, holding duck modules.
    pub modules_dir: String,
    /// Duck generated by `init` on an empty tree.
    pub example_duck: String,
    /// Action used when `generate` is called without any.
    pub default_action: String,
}

impl Default for DuckSettings {
    fn default() -> Self {
        Self {
            root: PathBuf::from("src/redux"),
            modules_dir: MODULES_DIR.to_string(),
            example_duck: "todo".to_string(),
            default_action: "set".to_string(),
        }
    }
}

impl DuckSettings {
    pub fn modules_path(&self) -> PathBuf {
        self.root.join(&self.modules_dir)
    }
}

/// Non-fatal condition raised while running a use case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notice {
    /// A bootstrap file was already present and left untouched.
    AlreadyInitialized { path: PathBuf },
    /// The duck is already listed in the wiring file.
    AlreadyWired { path: PathBuf, line: usize },
    /// The action is already part of the duck.
    ActionExists {
        action: String,
        path: PathBuf,
        line: usize,
    },
    /// The wiring file does not exist, so the duck was not registered.
    WiringSkipped { path: PathBuf },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyInitialized { path } => {
                write!(f, "{} already exists, skipping", path.display())
            }
            Self::AlreadyWired { path, line } => {
                write!(f, "{} already wired (line {line})", path.display())
            }
            Self::ActionExists { action, path, line } => write!(
                f,
                "action '{action}' already exists in {} (line {line})",
                path.display()
            ),
            Self::WiringSkipped { path } => write!(
                f,
                "{} not found, duck was not wired (run duckgen init first)",
                path.display()
            ),
        }
    }
}

/// Outcome of a use case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Files written (or that would have been written in a dry run).
    pub written: Vec<PathBuf>,
    pub notices: Vec<Notice>,
    pub dry_run: bool,
}

impl Report {
    fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Self::default()
        }
    }

    fn notice(&mut self, notice: Notice) {
        info!(%notice, "Notice raised");
        self.notices.push(notice);
    }

    fn wrote(&mut self, path: &Path) {
        if !self.written.iter().any(|p| p == path) {
            self.written.push(path.to_path_buf());
        }
    }

    pub fn is_noop(&self) -> bool {
        self.written.is_empty()
    }
}

/// Main orchestration service.
pub struct DuckService {
    variant: Variant,
    templates: TemplateService,
    files: FileService,
    settings: DuckSettings,
}

impl DuckService {
    /// Create a new duck service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use duckgen_core::prelude::*;
    ///
    /// let mut service = DuckService::new(
    ///     Kit::Duck,
    ///     store,      // impl TemplateStore
    ///     filesystem, // impl Filesystem
    /// );
    /// service.generate("todo", &["set".into(), "clear".into()])?;
    /// ```
    pub fn new(kit: Kit, store: Box<dyn TemplateStore>, filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            variant: kit.variant(),
            templates: TemplateService::new(store),
            files: FileService::new(filesystem),
            settings: DuckSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: DuckSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Compute everything but keep writes in memory.
    pub fn dry_run(mut self, enabled: bool) -> Self {
        self.files = self.files.dry_run(enabled);
        self
    }

    pub fn kit(&self) -> Kit {
        self.variant.kit
    }

    pub fn settings(&self) -> &DuckSettings {
        &self.settings
    }

    /// Write the bootstrap files that are missing.
    ///
    /// When none of them existed beforehand the example duck is generated
    /// with the default action.
    #[instrument(skip_all, fields(kit = %self.variant.kit, root = %self.settings.root.display()))]
    pub fn init(&mut self) -> DuckResult<Report> {
        info!("Initializing {} store", self.variant.kit);

        let mut report = Report::new(self.files.is_dry_run());
        let mut fresh = true;

        for name in self.variant.bootstrap {
            let template = self.templates.resolve(self.variant.kit, name, "")?;
            let path = self.settings.root.join(&template.filename);
            let file = self.files.open(&path, "")?;

            if file.exists() {
                fresh = false;
                report.notice(Notice::AlreadyInitialized { path });
                continue;
            }

            let mut file = file.or_template(&template.content);
            self.files.persist(&mut file)?;
            report.wrote(&path);
        }

        if fresh {
            let duck = self.settings.example_duck.clone();
            let action = self.settings.default_action.clone();
            self.generate_into(&duck, &[action], &mut report)?;
        }

        info!(written = report.written.len(), "Init completed");
        Ok(report)
    }

    /// Create or extend the duck `name` and wire it into the registry.
    ///
    /// Actions default to the configured default action when empty.
    #[instrument(skip_all, fields(kit = %self.variant.kit, duck = %name))]
    pub fn generate(&mut self, name: &str, actions: &[String]) -> DuckResult<Report> {
        let actions = if actions.is_empty() {
            vec![self.settings.default_action.clone()]
        } else {
            actions.to_vec()
        };

        let mut report = Report::new(self.files.is_dry_run());
        self.generate_into(name, &actions, &mut report)?;

        info!(written = report.written.len(), "Generate completed");
        Ok(report)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn generate_into(
        &mut self,
        name: &str,
        actions: &[String],
        report: &mut Report,
    ) -> DuckResult<()> {
        validator::validate_duck_name(name)?;
        for action in actions {
            validator::validate_action_name(action)?;
        }

        self.write_module(name, actions, report)?;
        self.wire_module(name, report)
    }

    /// Step 1: the duck module itself.
    fn write_module(&mut self, name: &str, actions: &[String], report: &mut Report) -> DuckResult<()> {
        let template = self.templates.resolve(self.variant.kit, DUCK_TEMPLATE, name)?;
        let path = self.settings.modules_path().join(&template.filename);

        let mut module = self.files.open(&path, name)?.or_template(&template.content);

        // Reverse order so that repeated insert-after-anchor leaves the
        // actions in the order they were given.
        for action in actions.iter().rev() {
            let existing = self
                .variant
                .action_marker(name, action)
                .and_then(|marker| module.search(&marker, action).ok());

            if let Some(line) = existing {
                report.notice(Notice::ActionExists {
                    action: action.clone(),
                    path: module.path().to_path_buf(),
                    line,
                });
                continue;
            }

            for step in self.variant.action_steps(name, action) {
                module.insert(&step, action)?;
            }
        }

        if module.is_dirty() {
            self.files.persist(&mut module)?;
            report.wrote(module.path());
        }

        Ok(())
    }

    /// Step 2: register the duck in the wiring file.
    fn wire_module(&mut self, name: &str, report: &mut Report) -> DuckResult<()> {
        let path = self.settings.root.join(self.variant.wiring_file);
        let mut wiring = self.files.open(&path, name)?;

        if !wiring.exists() {
            report.notice(Notice::WiringSkipped { path });
            return Ok(());
        }

        if let Ok(line) = wiring.search(self.variant.wiring_marker(), name) {
            report.notice(Notice::AlreadyWired { path, line });
            return Ok(());
        }

        for step in self.variant.wiring_steps(&self.settings.modules_dir) {
            wiring.insert(&step, name)?;
        }

        self.files.persist(&mut wiring)?;
        report.wrote(&path);
        Ok(())
    }
}
