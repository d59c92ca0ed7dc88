//! Top-level config loading pipeline.

use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::ui::theme::ThemeRegistry;

use super::env::{apply_env_overrides, dedupe_diagnostics};
use super::init::config_root_dir;
use super::sources::read_config_text_with_sources;
use super::{Config, ConfigDiagnostics, LoadedConfig};

/// Load configuration from disk and environment.
///
/// `path_override` is an explicit config file path (from --config flag).
pub fn load_config(path_override: Option<&str>) -> Result<Config, ConfigError> {
    Ok(load_config_with_diagnostics(path_override)?.config)
}

/// Load configuration and return non-fatal diagnostics.
pub fn load_config_with_diagnostics(
    path_override: Option<&str>,
) -> Result<LoadedConfig, ConfigError> {
    load_config_with_diagnostics_from_sources(
        path_override,
        |path| std::fs::read_to_string(path),
        |name| std::env::var(name).ok(),
        config_root_dir,
    )
}

pub(super) fn load_config_with_diagnostics_from_sources<FRead, FEnv, FRoot>(
    path_override: Option<&str>,
    read_file: FRead,
    env_lookup: FEnv,
    config_root: FRoot,
) -> Result<LoadedConfig, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FEnv: Fn(&str) -> Option<String>,
    FRoot: Fn() -> Option<PathBuf>,
{
    let (config_text, source) =
        read_config_text_with_sources(path_override, &read_file, &config_root)?;
    tracing::debug!(?source, "config source resolved");

    let mut config: Config = toml::from_str(&config_text)?;
    let mut diagnostics = ConfigDiagnostics::default();
    validate_exit_key(&config)?;
    apply_env_overrides(&mut config, &env_lookup, &mut diagnostics)?;
    collect_theme_warnings(&config, &mut diagnostics);
    dedupe_diagnostics(&mut diagnostics);

    Ok(LoadedConfig {
        config,
        source_path: source.path(),
        diagnostics,
    })
}

fn validate_exit_key(config: &Config) -> Result<(), ConfigError> {
    let key = &config.menu.exit_key;
    if key.chars().count() != 1 {
        return Err(ConfigError::Invalid(format!(
            "menu.exit_key `{key}` must be a single character"
        )));
    }
    Ok(())
}

/// Report bad theme overrides and an unknown selected theme.
fn collect_theme_warnings(config: &Config, diagnostics: &mut ConfigDiagnostics) {
    let (registry, warnings) = ThemeRegistry::from_overrides(&config.themes);
    diagnostics.warnings.extend(warnings);
    if registry.get(&config.display.theme).is_none() {
        diagnostics.warnings.push(format!(
            "unknown theme `{}`, falling back to default",
            config.display.theme
        ));
    }
}
