//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only ever sees the
//! [`DuckSettings`] derived from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables, `DUCKGEN__<SECTION>__<KEY>`
//! 3. Config file (`--config`, else the platform config dir, else `./duckgen.toml`)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use duckgen_core::application::DuckSettings;
use duckgen_core::domain::Kit;

/// Name of the project-local configuration file.
pub const LOCAL_CONFIG_FILE: &str = "duckgen.toml";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Values used when a flag or argument is omitted.
    pub defaults: Defaults,
    /// Where ducks are written.
    pub paths: PathsConfig,
    /// Template settings.
    pub templates: TemplateConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub kit: Kit,
    pub example_duck: String,
    pub action: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub root: PathBuf,
    pub modules_dir: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Directory whose `<kit>/` subdirectories override built-in templates.
    pub local_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for Defaults {
    fn default() -> Self {
        let settings = DuckSettings::default();
        Self {
            kit: Kit::default(),
            example_duck: settings.example_duck,
            action: settings.default_action,
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        let settings = DuckSettings::default();
        Self {
            root: settings.root,
            modules_dir: settings.modules_dir,
        }
    }
}

impl AppConfig {
    /// Load configuration, layering file and environment over the defaults.
    ///
    /// A file passed via `--config` must exist; the default locations are
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let defaults = Config::try_from(&Self::default())
            .context("Failed to serialise default configuration")?;

        let mut builder = Config::builder().add_source(defaults);

        match config_file {
            Some(path) => {
                debug!(path = %path.display(), "Using explicit config file");
                builder = builder.add_source(
                    File::from(path.clone())
                        .format(FileFormat::Toml)
                        .required(true),
                );
            }
            None => {
                for path in [Self::config_path(), PathBuf::from(LOCAL_CONFIG_FILE)] {
                    builder = builder.add_source(
                        File::from(path)
                            .format(FileFormat::Toml)
                            .required(false),
                    );
                }
            }
        }

        let config = builder
            .add_source(
                Environment::with_prefix("DUCKGEN")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read configuration")?;

        config
            .try_deserialize()
            .context("Invalid configuration values")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `duckgen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "duckgen", "duckgen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// Settings handed to the core orchestrator.
    pub fn to_settings(&self, root_override: Option<&Path>) -> DuckSettings {
        DuckSettings {
            root: root_override
                .map(Path::to_path_buf)
                .unwrap_or_else(|| self.paths.root.clone()),
            modules_dir: self.paths.modules_dir.clone(),
            example_duck: self.defaults.example_duck.clone(),
            default_action: self.defaults.action.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn defaults_match_core_settings() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.defaults.kit, Kit::Duck);
        assert_eq!(cfg.to_settings(None), DuckSettings::default());
    }

    #[test]
    fn default_no_color_is_false() {
        assert!(!AppConfig::default().output.no_color);
    }

    #[test]
    fn explicit_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[defaults]\nkit = \"starter-kit\"\nexample_duck = \"counter\"\n\n[paths]\nroot = \"app/state\"\n"
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&file.path().to_path_buf())).unwrap();

        assert_eq!(cfg.defaults.kit, Kit::StarterKit);
        assert_eq!(cfg.defaults.example_duck, "counter");
        assert_eq!(cfg.defaults.action, "set");
        assert_eq!(cfg.paths.root, PathBuf::from("app/state"));
        assert_eq!(cfg.paths.modules_dir, "modules");
    }

    #[test]
    fn missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(AppConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn kit_accepts_the_same_aliases_as_the_command_line() {
        for (spelling, kit) in [("classic", Kit::Duck), ("rsk", Kit::StarterKit)] {
            let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
            writeln!(file, "[defaults]\nkit = \"{spelling}\"\n").unwrap();
            let cfg = AppConfig::load(Some(&file.path().to_path_buf())).unwrap();
            assert_eq!(cfg.defaults.kit, kit, "{spelling}");
        }
    }

    #[test]
    fn unknown_kit_is_rejected() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[defaults]\nkit = \"saga\"\n").unwrap();
        assert!(AppConfig::load(Some(&file.path().to_path_buf())).is_err());
    }

    #[test]
    fn root_override_wins() {
        let cfg = AppConfig::default();
        let settings = cfg.to_settings(Some(Path::new("lib/store")));
        assert_eq!(settings.root, PathBuf::from("lib/store"));
        assert_eq!(settings.modules_path(), PathBuf::from("lib/store/modules"));
    }

    #[test]
    fn config_path_is_not_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}
