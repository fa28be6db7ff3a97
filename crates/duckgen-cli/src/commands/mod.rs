//! Command handlers, one module per subcommand.

pub mod completions;
pub mod config;
pub mod generate;
pub mod init;
pub mod list;

use tracing::{debug, info};

use duckgen_adapters::{InMemoryStore, LocalFilesystem, builtin_templates};
use duckgen_core::{application::DuckService, domain::Kit};

use crate::{
    cli::TargetArgs,
    config::AppConfig,
    error::{CliResult, CoreContext},
};

/// Template store holding the built-in templates plus any user overrides.
pub(crate) fn template_store(config: &AppConfig) -> CliResult<InMemoryStore> {
    let store = InMemoryStore::with_builtin().while_doing(|| "loading built-in templates")?;

    if let Some(dir) = builtin_templates::override_dir(config.templates.local_path.as_deref()) {
        let count = store
            .overlay_dir(&dir)
            .while_doing(|| format!("loading templates from {}", dir.display()))?;
        info!(dir = %dir.display(), count, "Template overrides loaded");
    }

    Ok(store)
}

/// Wire a [`DuckService`] against the local filesystem.
pub(crate) fn build_service(target: &TargetArgs, config: &AppConfig) -> CliResult<DuckService> {
    let kit = target.kit.map(Kit::from).unwrap_or(config.defaults.kit);
    let settings = config.to_settings(target.root.as_deref());
    debug!(%kit, root = %settings.root.display(), dry_run = target.dry_run, "Building duck service");

    let store = template_store(config)?;
    Ok(
        DuckService::new(kit, Box::new(store), Box::new(LocalFilesystem::new()))
            .with_settings(settings)
            .dry_run(target.dry_run),
    )
}
