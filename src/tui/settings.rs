//! Centralized, hardcoded UI settings for the layout engine and the menu.
//!
//! This is the single place to tweak glyphs, default strings, colors and
//! sizing constants.

use crate::style;

// ---------------------------------------------------------------------------
// Boxes / layout
// ---------------------------------------------------------------------------

pub const DEFAULT_BOX_PADDING: usize = 1;
pub const MAX_AUTO_BOX_WIDTH: usize = 80;
pub const NESTED_BOX_EXTRA_WIDTH: usize = 10;
pub const NESTED_BOX_EXPAND_WIDTH: usize = 4;

/// Suffix for titles that do not fit in a top border.
pub const ELLIPSIS: &str = "…";
/// Suffix for column and screen-fit truncation.
pub const TRUNCATE_SUFFIX: &str = "...";

pub const DEFAULT_COLUMN_SPACING: usize = 2;
pub const COLUMN_BORDER: &str = "│";
pub const GRID_ROW_BORDER: &str = "─";
pub const GRID_CROSS: &str = "┼";

pub const DEFAULT_GRID_COLUMNS: usize = 3;
pub const DEFAULT_GRID_CELL_WIDTH: usize = 20;
pub const DEFAULT_GRID_CELL_HEIGHT: usize = 5;
pub const DEFAULT_GRID_SPACING: usize = 1;

pub const DEFAULT_CONTAINER_SPACING: usize = 1;

// ---------------------------------------------------------------------------
// Banner
// ---------------------------------------------------------------------------

pub const BANNER_MAX_WIDTH: usize = 60;
pub const BANNER_SIDE_RESERVE: usize = 4;
pub const DEFAULT_BANNER_PADDING: usize = 1;

// ---------------------------------------------------------------------------
// Table
// ---------------------------------------------------------------------------

/// Extra columns added to the widest cell when widths are derived.
pub const TABLE_CELL_EXTRA: usize = 2;

// ---------------------------------------------------------------------------
// Menu
// ---------------------------------------------------------------------------

pub const MENU_DEFAULT_TITLE: &str = "Select an option:";
pub const MENU_DEFAULT_EXIT_KEY: char = 'q';
pub const MENU_INDICATOR: &str = "► ";
pub const MENU_INDICATOR_BLANK: &str = "  ";
pub const MENU_INSTRUCTIONS: &str = "Use arrow keys to navigate, Enter to select";
pub const MENU_PROMPT_NUMBER: &str = "Enter option number:";
pub const MENU_INVALID_CHOICE: &str = "Invalid choice. Try again.";
pub const MENU_DISABLED_CHOICE: &str = "This option is unavailable. Choose another.";

pub const PAGE_DEFAULT_TITLE: &str = "Menu";
pub const PAGE_DEFAULT_ITEMS: usize = 10;
pub const PAGE_PREV_LABEL: &str = "← Previous page";
pub const PAGE_NEXT_LABEL: &str = "→ Next page";
pub const PAGE_EXIT_LABEL: &str = "Exit";
pub const PAGE_EXIT_SUFFIX: &str = " 🚪";
pub const PAGE_NAV_PREFIX: &str = "  ";

pub const COLOR_MENU_SELECTED: &str = style::BRIGHT_GREEN;
pub const COLOR_MENU_INDICATOR: &str = style::BRIGHT_GREEN;
pub const COLOR_MENU_DISABLED: &str = style::DIM;
pub const COLOR_MENU_NUMBERS: &str = style::CYAN;
pub const COLOR_MENU_INSTRUCTIONS: &str = style::DIM;
pub const COLOR_PROMPT_ERROR: &str = style::RED;

// ---------------------------------------------------------------------------
// Progress
// ---------------------------------------------------------------------------

pub const PROGRESS_DEFAULT_WIDTH: usize = 40;
pub const PROGRESS_FILL: char = '█';
pub const PROGRESS_EMPTY: char = '░';
pub const PROGRESS_BRACKETS: (&str, &str) = ("[", "]");
pub const COLOR_PROGRESS_FILL: &str = style::GREEN;
pub const COLOR_PROGRESS_EMPTY: &str = style::DIM;
pub const COLOR_SPINNER: &str = style::CYAN;
pub const COLOR_LOADING: &str = style::YELLOW;

pub const SPINNER_DOTS: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
pub const SPINNER_LINE: &[&str] = &["|", "/", "-", "\\"];
pub const SPINNER_ARROW: &[&str] = &["↑", "↗", "→", "↘", "↓", "↙", "←", "↖"];
pub const SPINNER_BOUNCE: &[&str] = &["⠁", "⠂", "⠄", "⠂"];
pub const SPINNER_PULSE: &[&str] = &["●", "◐", "◑", "◒", "◓", "◔", "◕", "◖", "◗", "◘"];

pub const LOADING_DEFAULT_TEXT: &str = "Loading";
pub const LOADING_MAX_DOTS: usize = 6;

pub const STEP_COMPLETED: &str = "✓";
pub const STEP_CURRENT: &str = "●";
pub const STEP_PENDING: &str = "○";
pub const STEP_CONNECTOR: &str = "─";
pub const STEP_VERTICAL_CONNECTOR: &str = "│";
pub const STEP_LABEL_MAX: usize = 10;
pub const STEP_LABEL_SLOT: usize = 12;
pub const COLOR_STEP_COMPLETED: &str = style::GREEN;
pub const COLOR_STEP_CURRENT: &str = style::YELLOW;
pub const COLOR_STEP_PENDING: &str = style::DIM;
