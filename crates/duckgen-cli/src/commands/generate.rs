//! `duckgen generate`: create a duck or add actions to it.

use tracing::instrument;

use crate::{
    cli::GenerateArgs,
    commands::build_service,
    config::AppConfig,
    error::{CliResult, CoreContext},
    output::OutputManager,
};

#[instrument(skip_all, fields(duck = %args.name))]
pub fn execute(args: GenerateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let mut service = build_service(&args.target, &config)?;

    let report = service
        .generate(&args.name, &args.actions)
        .while_doing(|| format!("generating duck '{}'", args.name))?;

    output.report(&report)?;
    Ok(())
}
