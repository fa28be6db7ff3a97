//! `duckgen init`: write the store files and an example duck.

use tracing::instrument;

use crate::{
    cli::{InitArgs, OutputFormat},
    commands::build_service,
    config::AppConfig,
    error::{CliResult, CoreContext},
    output::OutputManager,
};

/// Bootstrap the configured store directory.
#[instrument(skip_all)]
pub fn execute(args: InitArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let mut service = build_service(&args.target, &config)?;

    if output.format() != OutputFormat::Json {
        output.header(&format!(
            "Initializing {} store in {}",
            service.kit(),
            service.settings().root.display()
        ))?;
    }

    let report = service
        .init()
        .while_doing(|| "initializing store")?;

    output.report(&report)?;
    Ok(())
}
