//! Environment overrides.
//!
//! `CLIGE_*` variables win over every file source. `NO_COLOR` follows the
//! no-color.org convention: any non-empty value disables color.

use crate::error::ConfigError;
use crate::tui::border::BorderStyle;

use super::{Config, ConfigDiagnostics};

pub(super) fn apply_env_overrides<FEnv>(
    config: &mut Config,
    env_lookup: &FEnv,
    diagnostics: &mut ConfigDiagnostics,
) -> Result<(), ConfigError>
where
    FEnv: Fn(&str) -> Option<String>,
{
    if let Some(theme) = non_empty(env_lookup, "CLIGE_THEME") {
        config.display.theme = theme;
    }
    if let Some(style) = non_empty(env_lookup, "CLIGE_BORDER_STYLE") {
        if !BorderStyle::ALL.iter().any(|s| s.name() == style.to_ascii_lowercase()) {
            diagnostics.warnings.push(format!(
                "unknown CLIGE_BORDER_STYLE `{style}`, using `single`"
            ));
        }
        config.boxes.border_style = Some(BorderStyle::from_name(&style));
    }
    if let Some(key) = non_empty(env_lookup, "CLIGE_EXIT_KEY") {
        if key.chars().count() != 1 {
            return Err(ConfigError::Invalid(format!(
                "invalid CLIGE_EXIT_KEY value `{key}`: expected a single character"
            )));
        }
        config.menu.exit_key = key;
    }
    if non_empty(env_lookup, "NO_COLOR").is_some()
        || non_empty(env_lookup, "CLIGE_NO_COLOR").is_some_and(|v| is_truthy(&v))
    {
        config.display.color = false;
    }
    Ok(())
}

fn non_empty<FEnv>(env_lookup: &FEnv, name: &str) -> Option<String>
where
    FEnv: Fn(&str) -> Option<String>,
{
    env_lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn is_truthy(value: &str) -> bool {
    !matches!(
        value.to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}

/// Sort and deduplicate diagnostic strings for stable output.
pub(super) fn dedupe_diagnostics(diagnostics: &mut ConfigDiagnostics) {
    diagnostics.warnings.sort();
    diagnostics.warnings.dedup();
}
