//! Default configuration constants and the `clige init` template.

use crate::tui::settings;

/// Embedded default `clige.toml` template written by `clige init`.
pub(super) const DEFAULT_CONFIG_TEMPLATE: &str = include_str!("../templates/clige.toml");
/// Config file name, both local and global.
pub(super) const CONFIG_FILE_NAME: &str = "clige.toml";
/// Directory under the config root holding the global file.
pub(super) const CONFIG_DIR_NAME: &str = "clige";
pub(super) const DEFAULT_EXIT_KEY: char = settings::MENU_DEFAULT_EXIT_KEY;
pub(super) const DEFAULT_ITEMS_PER_PAGE: usize = settings::PAGE_DEFAULT_ITEMS;
