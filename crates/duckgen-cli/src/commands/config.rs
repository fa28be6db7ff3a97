//! `duckgen config`: show what the layered settings resolved to.

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dotted keys accepted by `config get`.
const KEYS: [&str; 7] = [
    "defaults.kit",
    "defaults.example_duck",
    "defaults.action",
    "paths.root",
    "paths.modules_dir",
    "templates.local_path",
    "output.no_color",
];

pub fn execute(cmd: ConfigCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = lookup(&config, &key).ok_or_else(|| CliError::ConfigError {
                message: format!("Unknown config key: '{key}' (known: {})", KEYS.join(", ")),
                source: None,
            })?;
            output.print(&value)?;
        }
        ConfigCommands::List => {
            let rendered = toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                message: format!("cannot render settings as TOML: {e}"),
                source: Some(Box::new(e)),
            })?;
            output.header("Effective settings:")?;
            output.print(rendered.trim_end())?;
        }
        ConfigCommands::Path => output.print(&AppConfig::config_path().display().to_string())?,
    }
    Ok(())
}

fn lookup(config: &AppConfig, key: &str) -> Option<String> {
    let value = match key {
        "defaults.kit" => config.defaults.kit.to_string(),
        "defaults.example_duck" => config.defaults.example_duck.clone(),
        "defaults.action" => config.defaults.action.clone(),
        "paths.root" => config.paths.root.display().to_string(),
        "paths.modules_dir" => config.paths.modules_dir.clone(),
        "templates.local_path" => config
            .templates
            .local_path
            .as_deref()
            .map(|dir| dir.display().to_string())
            .unwrap_or_default(),
        "output.no_color" => config.output.no_color.to_string(),
        _ => return None,
    };
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_advertised_key_resolves() {
        let config = AppConfig::default();
        for key in KEYS {
            assert!(lookup(&config, key).is_some(), "{key} should resolve");
        }
    }

    #[test]
    fn defaults_read_back_as_text() {
        let config = AppConfig::default();
        let get = |key| lookup(&config, key).unwrap();
        assert_eq!(get("defaults.kit"), "duck");
        assert_eq!(get("defaults.example_duck"), "todo");
        assert_eq!(get("paths.root"), "src/redux");
        assert_eq!(get("templates.local_path"), "");
    }

    #[test]
    fn unknown_key_is_none() {
        assert_eq!(lookup(&AppConfig::default(), "paths.nowhere"), None);
    }

    #[test]
    fn settings_render_as_toml_sections() {
        let text = toml::to_string_pretty(&AppConfig::default()).unwrap();
        assert!(text.contains("[defaults]"));
        assert!(text.contains("kit = \"duck\""));
        assert!(text.contains("modules_dir = \"modules\""));
    }
}
