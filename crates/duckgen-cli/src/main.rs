//! `duckgen`: scaffolds Redux ducks and grows them one action at a time.
//!
//! The process exits with `0` on success (notices are only warnings),
//! `2` for bad names or arguments, `3` when a template or anchor is
//! missing, `4` for configuration problems and `1` for anything else.

use std::io::IsTerminal;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // Optional; lets DUCKGEN__* settings live next to the project.
    let _ = dotenvy::dotenv();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            // --help and --version come through here too.
            return ExitCode::from(if e.use_stderr() { 2 } else { 0 });
        }
    };

    if let Err(e) = init_logging(&cli.global) {
        eprintln!("duckgen: {e}");
        return ExitCode::from(1);
    }

    let verbose = cli.global.verbose > 0;
    debug!(
        command = ?cli.command,
        verbosity = cli.global.verbose,
        "Arguments parsed"
    );

    let config = match AppConfig::load(cli.global.config.as_ref()) {
        Ok(config) => config,
        Err(e) => {
            let err = CliError::ConfigError {
                message: format!("{e:#}"),
                source: None,
            };
            return fail(err, verbose, !cli.global.no_color);
        }
    };

    let output = OutputManager::new(&cli.global, &config);
    let color = output.supports_color();

    match dispatch(cli.command, config, output) {
        Ok(()) => {
            info!("Done");
            ExitCode::SUCCESS
        }
        Err(err) => fail(err, verbose, color),
    }
}

#[instrument(skip_all)]
fn dispatch(command: Commands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match command {
        Commands::Init(args) => commands::init::execute(args, config, output),
        Commands::Generate(args) => commands::generate::execute(args, config, output),
        Commands::List(args) => commands::list::execute(args, config, output),
        Commands::Completions(args) => commands::completions::execute(args),
        Commands::Config(action) => commands::config::execute(action, config, output),
    }
}

fn fail(err: CliError, verbose: bool, color: bool) -> ExitCode {
    err.log();
    eprint!(
        "{}",
        err.render(verbose, color && std::io::stderr().is_terminal())
    );
    ExitCode::from(err.exit_code())
}
