//! Configuration data model.
//!
//! Struct definitions plus default values. Source resolution lives in
//! `sources.rs`/`loader.rs`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use super::defaults::{DEFAULT_EXIT_KEY, DEFAULT_ITEMS_PER_PAGE};
use crate::tui::align::Align;
use crate::tui::border::BorderStyle;
use crate::tui::settings;
use crate::ui::theme::DEFAULT_THEME;

/// Top-level runtime configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    #[serde(rename = "box")]
    pub boxes: BoxConfig,
    pub menu: MenuConfig,
    /// `[themes.<name>]` tables: dotted theme path to color string.
    pub themes: BTreeMap<String, BTreeMap<String, String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Emit color and style codes.
    pub color: bool,
    pub theme: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: true,
            theme: DEFAULT_THEME.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct BoxConfig {
    /// Unset means "take it from the theme".
    pub border_style: Option<BorderStyle>,
    pub padding: usize,
    pub margin: usize,
    pub title_align: Align,
    pub align: Align,
}

impl Default for BoxConfig {
    fn default() -> Self {
        Self {
            border_style: None,
            padding: settings::DEFAULT_BOX_PADDING,
            margin: 0,
            title_align: Align::Left,
            align: Align::Left,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct MenuConfig {
    /// Single character; validated on load.
    pub exit_key: String,
    pub allow_escape: bool,
    pub clear_screen: bool,
    pub center: bool,
    pub items_per_page: usize,
    pub show_numbers: bool,
    pub show_indicators: bool,
    pub show_page_info: bool,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            exit_key: DEFAULT_EXIT_KEY.to_string(),
            allow_escape: true,
            clear_screen: true,
            center: false,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            show_numbers: true,
            show_indicators: true,
            show_page_info: true,
        }
    }
}

impl MenuConfig {
    /// The configured exit key as a `char`.
    pub fn exit_char(&self) -> char {
        self.exit_key.chars().next().unwrap_or(DEFAULT_EXIT_KEY)
    }
}

/// Non-fatal issues found while loading config.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigDiagnostics {
    pub warnings: Vec<String>,
}

/// Resolved config together with where it came from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the config was read from; `None` for built-in defaults.
    pub source_path: Option<PathBuf>,
    pub diagnostics: ConfigDiagnostics,
}

/// Outcome of `clige init`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlobalConfigInitResult {
    Created {
        path: PathBuf,
    },
    AlreadyInitialized {
        path: PathBuf,
    },
    Overwritten {
        path: PathBuf,
        backup_path: PathBuf,
    },
}
