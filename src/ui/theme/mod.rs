//! Named color themes.
//!
//! A theme maps dotted paths (`colors.primary`, `components.menu.selected_color`)
//! to SGR code strings or plain settings such as a border style name. Built-in
//! themes can be extended or overridden from `[themes.<name>]` config tables.

use crossterm::style::Color;
use std::collections::BTreeMap;

use crate::style::{self, RESET};
use crate::tui::border::BorderStyle;

pub const DEFAULT_THEME: &str = "default";

/// Theme entries the renderers in this crate read directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ThemeToken {
    Primary,
    Secondary,
    Success,
    Warning,
    Error,
    Info,
    Text,
    TextMuted,
    Border,
    Accent,
    Title,
    Subtitle,
    BoxBorderStyle,
    BoxTitle,
    MenuSelected,
    MenuNormal,
    MenuDisabled,
    MenuNumbers,
    MenuIndicator,
    ProgressFill,
    ProgressEmpty,
    TableHeader,
    TableBorder,
    SuccessPrefix,
    ErrorPrefix,
    WarningPrefix,
    InfoPrefix,
}

impl ThemeToken {
    /// Dotted path for this token (also the `[themes.<name>]` override key).
    pub fn key(self) -> &'static str {
        match self {
            Self::Primary => "colors.primary",
            Self::Secondary => "colors.secondary",
            Self::Success => "colors.success",
            Self::Warning => "colors.warning",
            Self::Error => "colors.error",
            Self::Info => "colors.info",
            Self::Text => "colors.text",
            Self::TextMuted => "colors.text_muted",
            Self::Border => "colors.border",
            Self::Accent => "colors.accent",
            Self::Title => "styles.title",
            Self::Subtitle => "styles.subtitle",
            Self::BoxBorderStyle => "components.box.border_style",
            Self::BoxTitle => "components.box.title_color",
            Self::MenuSelected => "components.menu.selected_color",
            Self::MenuNormal => "components.menu.normal_color",
            Self::MenuDisabled => "components.menu.disabled_color",
            Self::MenuNumbers => "components.menu.numbers_color",
            Self::MenuIndicator => "components.menu.indicator_color",
            Self::ProgressFill => "components.progress.fill_color",
            Self::ProgressEmpty => "components.progress.empty_color",
            Self::TableHeader => "components.table.header_color",
            Self::TableBorder => "components.table.border_color",
            Self::SuccessPrefix => "messages.success.prefix",
            Self::ErrorPrefix => "messages.error.prefix",
            Self::WarningPrefix => "messages.warning.prefix",
            Self::InfoPrefix => "messages.info.prefix",
        }
    }
}

/// Kind of status message, each with its own prefix glyph and color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
    Warning,
    Info,
}

impl MessageKind {
    fn tokens(self) -> (ThemeToken, ThemeToken) {
        match self {
            Self::Success => (ThemeToken::SuccessPrefix, ThemeToken::Success),
            Self::Error => (ThemeToken::ErrorPrefix, ThemeToken::Error),
            Self::Warning => (ThemeToken::WarningPrefix, ThemeToken::Warning),
            Self::Info => (ThemeToken::InfoPrefix, ThemeToken::Info),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub name: String,
    pub description: String,
    values: BTreeMap<String, String>,
}

impl Theme {
    fn new(name: &str, description: &str, entries: &[(&str, String)]) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            values: entries
                .iter()
                .map(|(k, v)| ((*k).to_string(), v.clone()))
                .collect(),
        }
    }

    /// Value at a dotted path, or `""` when the path is unknown.
    pub fn get(&self, path: &str) -> &str {
        self.values.get(path.trim()).map(String::as_str).unwrap_or("")
    }

    pub fn code(&self, token: ThemeToken) -> &str {
        self.get(token.key())
    }

    /// Wrap `text` in the code at `path` and a reset.
    pub fn colorize(&self, text: &str, path: &str) -> String {
        format!("{}{text}{RESET}", self.get(path))
    }

    /// Wrap `text` in `styles.<name>`.
    pub fn style(&self, text: &str, name: &str) -> String {
        self.colorize(text, &format!("styles.{name}"))
    }

    /// `prefix text` in the message color.
    pub fn message(&self, kind: MessageKind, text: &str) -> String {
        let (prefix, color) = kind.tokens();
        format!("{}{} {text}{RESET}", self.code(color), self.code(prefix))
    }

    pub fn border_style(&self) -> BorderStyle {
        BorderStyle::from_name(self.code(ThemeToken::BoxBorderStyle))
    }

    /// Same theme with every color and style entry emptied.
    pub fn without_color(mut self) -> Self {
        for (key, value) in self.values.iter_mut() {
            if is_style_key(key) {
                value.clear();
            }
        }
        self
    }

    fn apply_overrides(mut self, overrides: &BTreeMap<String, String>) -> Result<Self, String> {
        for (key, value) in overrides {
            let key = key.trim().to_ascii_lowercase();
            if key.is_empty() {
                continue;
            }
            let resolved = if is_style_key(&key) {
                parse_style(value).map_err(|err| format!("{key}: {err}"))?
            } else {
                value.clone()
            };
            self.values.insert(key, resolved);
        }
        Ok(self)
    }
}

/// Theme registry with built-ins and optional custom overrides.
#[derive(Debug, Clone)]
pub struct ThemeRegistry {
    themes: BTreeMap<String, Theme>,
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::from_overrides(&BTreeMap::new()).0
    }
}

impl ThemeRegistry {
    /// Build from built-ins plus `[themes.<name>]` tables.
    ///
    /// A table named after a built-in patches it; any other name starts from
    /// `default`. A table with an invalid color is skipped and reported.
    pub fn from_overrides(
        overrides: &BTreeMap<String, BTreeMap<String, String>>,
    ) -> (Self, Vec<String>) {
        let mut themes = BTreeMap::new();
        for theme in [default_theme(), dark_theme(), redblood_theme()] {
            themes.insert(theme.name.clone(), theme);
        }

        let mut warnings = Vec::new();
        for (name, values) in overrides {
            let name = normalize_theme_name(name);
            let mut base = themes.get(&name).cloned().unwrap_or_else(default_theme);
            if base.name != name {
                base.name = name.clone();
                base.description = "custom theme".to_string();
            }
            match base.apply_overrides(values) {
                Ok(theme) => {
                    themes.insert(name, theme);
                }
                Err(err) => {
                    tracing::warn!(theme = %name, %err, "skipping theme override");
                    warnings.push(format!("theme `{name}` ignored: {err}"));
                }
            }
        }
        (Self { themes }, warnings)
    }

    pub fn names(&self) -> Vec<String> {
        self.themes.keys().cloned().collect()
    }

    pub fn get(&self, name: &str) -> Option<&Theme> {
        self.themes.get(&normalize_theme_name(name))
    }

    /// Look up `name`, falling back to `default` with a warning.
    pub fn resolve(&self, name: &str) -> (Theme, Option<String>) {
        if let Some(theme) = self.get(name) {
            return (theme.clone(), None);
        }
        tracing::warn!(theme = %name, "unknown theme, using default");
        let fallback = self.get(DEFAULT_THEME).cloned().unwrap_or_else(default_theme);
        (
            fallback,
            Some(format!("theme `{name}` not found, using `{DEFAULT_THEME}`")),
        )
    }

    pub fn iter(&self) -> impl Iterator<Item = &Theme> {
        self.themes.values()
    }
}

fn normalize_theme_name(name: &str) -> String {
    let normalized = name.trim().to_ascii_lowercase();
    if normalized.is_empty() {
        DEFAULT_THEME.to_string()
    } else {
        normalized
    }
}

/// Keys holding SGR codes rather than plain settings.
fn is_style_key(key: &str) -> bool {
    key.starts_with("colors.")
        || key.starts_with("styles.")
        || key.ends_with("_color")
        || key.ends_with(".color")
}

/// Parse `bold+bright_white`, `#ff0050`, `darkgrey` or `bg_red` into an SGR
/// code string.
pub fn parse_style(input: &str) -> Result<String, String> {
    let mut out = String::new();
    for part in input.split('+') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        if let Some(code) = style::code_for_name(part) {
            out.push_str(code);
            continue;
        }
        out.push_str(&style::fg_code(parse_color(part)?));
    }
    if out.is_empty() {
        return Err("theme color value cannot be empty".to_string());
    }
    Ok(out)
}

fn parse_color(input: &str) -> Result<Color, String> {
    let normalized = input.trim().to_ascii_lowercase();
    if let Some(hex) = normalized.strip_prefix('#') {
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(format!("invalid hex color `{input}` (expected #RRGGBB)"));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| format!("invalid hex color `{input}`"))
        };
        return Ok(Color::Rgb {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        });
    }

    let color = match normalized.as_str() {
        "darkgrey" | "dark-gray" | "dark_grey" | "darkgray" => Color::DarkGrey,
        "grey" | "gray" => Color::Grey,
        "darkred" | "dark-red" => Color::DarkRed,
        "darkgreen" | "dark-green" => Color::DarkGreen,
        "darkyellow" | "dark-yellow" => Color::DarkYellow,
        "darkblue" | "dark-blue" => Color::DarkBlue,
        "darkmagenta" | "dark-magenta" => Color::DarkMagenta,
        "darkcyan" | "dark-cyan" => Color::DarkCyan,
        _ => return Err(format!("unsupported color value `{input}`")),
    };
    Ok(color)
}

fn join(codes: &[&str]) -> String {
    codes.concat()
}

fn default_theme() -> Theme {
    use style::*;
    Theme::new(
        "default",
        "Standard light theme",
        &[
            ("colors.primary", join(&[BLUE])),
            ("colors.secondary", join(&[CYAN])),
            ("colors.success", join(&[GREEN])),
            ("colors.warning", join(&[YELLOW])),
            ("colors.error", join(&[RED])),
            ("colors.info", join(&[CYAN])),
            ("colors.text", join(&[WHITE])),
            ("colors.text_muted", join(&[BRIGHT_BLACK])),
            ("colors.border", join(&[WHITE])),
            ("colors.accent", join(&[BRIGHT_CYAN])),
            ("styles.title", join(&[BOLD, BRIGHT_WHITE])),
            ("styles.subtitle", join(&[BOLD, CYAN])),
            ("styles.emphasis", join(&[BOLD])),
            ("styles.code", join(&[BG_BLACK, BRIGHT_GREEN])),
            ("styles.link", join(&[UNDERLINE, BLUE])),
            ("styles.quote", join(&[ITALIC, DIM])),
            ("components.box.border_style", "single".to_string()),
            ("components.box.title_color", join(&[BOLD, WHITE])),
            ("components.menu.selected_color", join(&[BRIGHT_GREEN, BOLD])),
            ("components.menu.normal_color", join(&[WHITE])),
            ("components.menu.disabled_color", join(&[DIM])),
            ("components.menu.numbers_color", join(&[CYAN])),
            ("components.menu.indicator_color", join(&[BRIGHT_GREEN])),
            ("components.progress.fill_color", join(&[GREEN])),
            ("components.progress.empty_color", join(&[DIM])),
            ("components.table.header_color", join(&[BOLD, WHITE])),
            ("components.table.border_color", join(&[DIM])),
            ("messages.success.prefix", "✓".to_string()),
            ("messages.error.prefix", "✗".to_string()),
            ("messages.warning.prefix", "⚠".to_string()),
            ("messages.info.prefix", "ℹ".to_string()),
        ],
    )
}

fn dark_theme() -> Theme {
    use style::*;
    Theme::new(
        "dark",
        "Dark theme for night work",
        &[
            ("colors.primary", join(&[BRIGHT_BLUE])),
            ("colors.secondary", join(&[BRIGHT_CYAN])),
            ("colors.success", join(&[BRIGHT_GREEN])),
            ("colors.warning", join(&[BRIGHT_YELLOW])),
            ("colors.error", join(&[BRIGHT_RED])),
            ("colors.info", join(&[BRIGHT_CYAN])),
            ("colors.text", join(&[BRIGHT_WHITE])),
            ("colors.text_muted", join(&[DIM])),
            ("colors.border", join(&[BRIGHT_BLACK])),
            ("colors.accent", join(&[BRIGHT_MAGENTA])),
            ("styles.title", join(&[BOLD, BRIGHT_WHITE])),
            ("styles.subtitle", join(&[BOLD, BRIGHT_CYAN])),
            ("styles.emphasis", join(&[BOLD, BRIGHT_WHITE])),
            ("styles.code", join(&[BG_BLACK, BRIGHT_GREEN])),
            ("styles.link", join(&[UNDERLINE, BRIGHT_BLUE])),
            ("styles.quote", join(&[ITALIC, BRIGHT_BLACK])),
            ("components.box.border_style", "single".to_string()),
            ("components.box.title_color", join(&[BOLD, BRIGHT_WHITE])),
            ("components.menu.selected_color", join(&[BRIGHT_GREEN, BOLD])),
            ("components.menu.normal_color", join(&[BRIGHT_WHITE])),
            ("components.menu.disabled_color", join(&[DIM])),
            ("components.menu.numbers_color", join(&[BRIGHT_CYAN])),
            ("components.menu.indicator_color", join(&[BRIGHT_GREEN])),
            ("components.progress.fill_color", join(&[BRIGHT_GREEN])),
            ("components.progress.empty_color", join(&[BRIGHT_BLACK])),
            ("components.table.header_color", join(&[BOLD, BRIGHT_WHITE])),
            ("components.table.border_color", join(&[BRIGHT_BLACK])),
            ("messages.success.prefix", "✓".to_string()),
            ("messages.error.prefix", "✗".to_string()),
            ("messages.warning.prefix", "⚠".to_string()),
            ("messages.info.prefix", "ℹ".to_string()),
        ],
    )
}

fn redblood_theme() -> Theme {
    use style::*;
    let accent = rgb(255, 0, 80);
    Theme::new(
        "redblood",
        "Aggressive red-on-black theme",
        &[
            ("colors.primary", join(&[RED])),
            ("colors.secondary", join(&[BRIGHT_RED])),
            ("colors.success", join(&[BRIGHT_GREEN])),
            ("colors.warning", join(&[YELLOW])),
            ("colors.error", join(&[BRIGHT_RED])),
            ("colors.info", join(&[RED])),
            ("colors.text", join(&[RED])),
            ("colors.text_muted", join(&[DIM, RED])),
            ("colors.border", join(&[RED])),
            ("colors.accent", accent.clone()),
            ("colors.blood", rgb(139, 0, 0)),
            ("colors.crimson", rgb(220, 20, 60)),
            ("colors.fire", rgb(255, 69, 0)),
            ("styles.title", join(&[BOLD, BRIGHT_RED])),
            ("styles.subtitle", join(&[BOLD, RED])),
            ("styles.emphasis", join(&[BOLD, BRIGHT_RED])),
            ("styles.code", join(&[BG_BLACK, BRIGHT_RED])),
            ("styles.link", join(&[UNDERLINE, RED])),
            ("styles.quote", join(&[ITALIC, DIM, RED])),
            ("styles.danger", join(&[BOLD, BRIGHT_RED, BLINK])),
            ("components.box.border_style", "double".to_string()),
            ("components.box.title_color", join(&[BOLD, BRIGHT_RED])),
            ("components.menu.selected_color", join(&[BRIGHT_RED, BOLD])),
            ("components.menu.normal_color", join(&[RED])),
            ("components.menu.disabled_color", join(&[DIM, RED])),
            ("components.menu.numbers_color", join(&[BRIGHT_RED])),
            ("components.menu.indicator_color", accent),
            ("components.progress.fill_color", join(&[BRIGHT_RED])),
            ("components.progress.empty_color", join(&[DIM, RED])),
            ("components.table.header_color", join(&[BOLD, BRIGHT_RED])),
            ("components.table.border_color", join(&[RED])),
            ("messages.success.prefix", "⚡".to_string()),
            ("messages.error.prefix", "💀".to_string()),
            ("messages.warning.prefix", "🔥".to_string()),
            ("messages.info.prefix", "🩸".to_string()),
        ],
    )
}
