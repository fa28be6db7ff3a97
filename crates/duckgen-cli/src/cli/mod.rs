//! Command-line surface of `duckgen`: every flag, alias and value enum.

use std::fmt;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use duckgen_core::domain::Kit;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

#[derive(Debug, Parser)]
#[command(
    name = "duckgen",
    version,
    author,
    about = "\u{1f986} Redux duck generator",
    long_about = "duckgen creates Redux ducks and keeps adding actions to them, \
                  wiring every duck into the store as it goes.",
    after_help = "EXAMPLES:\n\
        \x20 duckgen init --kit starter-kit\n\
        \x20 duckgen generate todo add remove\n\
        \x20 duckgen g todo toggle --dry-run",
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create the store files and an example duck
    #[command(after_help = "EXAMPLES:\n\
        \x20 duckgen init\n\
        \x20 duckgen init -k rsk -r app/state --dry-run")]
    Init(InitArgs),

    /// Create a duck, or add actions to an existing one
    #[command(
        visible_alias = "g",
        after_help = "EXAMPLES:\n\
            \x20 duckgen generate todo\n\
            \x20 duckgen generate shopping-cart add-item remove-item"
    )]
    Generate(GenerateArgs),

    /// Show the templates each kit resolves
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Print a shell completion script
    #[command(after_help = "EXAMPLES:\n\
        \x20 duckgen completions zsh > ~/.zfunc/_duckgen")]
    Completions(CompletionsArgs),

    /// Inspect the effective settings
    #[command(subcommand)]
    Config(ConfigCommands),
}

/// Where ducks go and whether anything is written.
#[derive(Debug, Args)]
pub struct TargetArgs {
    /// Generator kit [default: defaults.kit]
    #[arg(short, long, value_enum)]
    pub kit: Option<KitArg>,

    /// Directory holding the store files [default: paths.root]
    #[arg(short, long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Report the files that would change, but write nothing
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Args)]
pub struct InitArgs {
    #[command(flatten)]
    pub target: TargetArgs,
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Duck name in any case (todo-list, todoList, todo_list)
    pub name: String,

    /// Actions to add [default: defaults.action]
    #[arg(value_name = "ACTION")]
    pub actions: Vec<String>,

    #[command(flatten)]
    pub target: TargetArgs,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Restrict to one kit
    #[arg(short, long, value_enum)]
    pub kit: Option<KitArg>,

    #[arg(long, value_enum, default_value_t = ListFormat::Table)]
    pub format: ListFormat,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Grouped by kit
    Table,
    /// `kit/template`, one per line
    List,
    Json,
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print one value, e.g. `paths.modules_dir`
    Get { key: String },
    /// Print every value as TOML
    List,
    /// Print where the user configuration file is read from
    Path,
}

/// Command-line spelling of [`Kit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KitArg {
    /// Classic ducks combined in configureStore.js
    Duck,
    /// redux-starter-kit slices collected in reducers.js
    #[value(alias = "rsk")]
    StarterKit,
}

impl From<KitArg> for Kit {
    fn from(kit: KitArg) -> Self {
        match kit {
            KitArg::Duck => Kit::Duck,
            KitArg::StarterKit => Kit::StarterKit,
        }
    }
}

impl fmt::Display for KitArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Kit::from(*self), f)
    }
}
