//! Menu frame rendering. Pure: the same state and size give the same bytes.

use super::state::{MenuItem, MenuState};
use crate::style::RESET;
use crate::terminal::TerminalSize;
use crate::tui::boxes::{render_box, BoxSpec};
use crate::tui::layout::{pad_to_screen, ScreenPlacement};
use crate::tui::settings;
use crate::ui::theme::{Theme, ThemeToken};

/// Presentation and behavior options for a menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuOptions {
    pub title: String,
    pub show_numbers: bool,
    pub show_indicators: bool,
    pub selected_color: String,
    pub normal_color: String,
    pub disabled_color: String,
    pub numbers_color: String,
    pub indicator_color: String,
    pub box_spec: BoxSpec,
    pub exit_key: char,
    pub allow_escape: bool,
    pub clear_screen: bool,
    /// Place banner and menu in the middle of the screen.
    pub center: bool,
    /// Printed above the menu when non-empty.
    pub banner: String,
}

impl Default for MenuOptions {
    fn default() -> Self {
        Self {
            title: settings::MENU_DEFAULT_TITLE.to_string(),
            show_numbers: true,
            show_indicators: true,
            selected_color: settings::COLOR_MENU_SELECTED.to_string(),
            normal_color: String::new(),
            disabled_color: settings::COLOR_MENU_DISABLED.to_string(),
            numbers_color: settings::COLOR_MENU_NUMBERS.to_string(),
            indicator_color: settings::COLOR_MENU_INDICATOR.to_string(),
            box_spec: BoxSpec::default(),
            exit_key: settings::MENU_DEFAULT_EXIT_KEY,
            allow_escape: true,
            clear_screen: true,
            center: false,
            banner: String::new(),
        }
    }
}

impl MenuOptions {
    /// Take item colors and the box border style from a theme.
    pub fn themed(mut self, theme: &Theme) -> Self {
        self.selected_color = theme.code(ThemeToken::MenuSelected).to_string();
        self.normal_color = theme.code(ThemeToken::MenuNormal).to_string();
        self.disabled_color = theme.code(ThemeToken::MenuDisabled).to_string();
        self.numbers_color = theme.code(ThemeToken::MenuNumbers).to_string();
        self.indicator_color = theme.code(ThemeToken::MenuIndicator).to_string();
        self.box_spec.border = theme.border_style();
        self.box_spec.color = theme.code(ThemeToken::Border).to_string();
        self
    }
}

fn item_line(index: usize, item: &MenuItem, selected: bool, opts: &MenuOptions) -> String {
    let mut line = String::new();
    if opts.show_indicators {
        if selected {
            line.push_str(&format!(
                "{}{}{RESET}",
                opts.indicator_color,
                settings::MENU_INDICATOR
            ));
        } else {
            line.push_str(settings::MENU_INDICATOR_BLANK);
        }
    }
    if opts.show_numbers {
        line.push_str(&format!("{}[{}]{RESET} ", opts.numbers_color, index + 1));
    }
    let color = if item.disabled {
        &opts.disabled_color
    } else if selected {
        &opts.selected_color
    } else {
        &opts.normal_color
    };
    line.push_str(&format!(
        "{color}{}{}{}{RESET}",
        item.prefix, item.text, item.suffix
    ));
    line
}

/// The boxed item list with `selected` highlighted.
pub fn render_menu(items: &[MenuItem], selected: usize, opts: &MenuOptions, size: TerminalSize) -> String {
    let content = items
        .iter()
        .enumerate()
        .map(|(idx, item)| item_line(idx, item, idx == selected, opts))
        .collect::<Vec<_>>()
        .join("\n");
    let spec = BoxSpec {
        title: opts.title.clone(),
        ..opts.box_spec.clone()
    };
    render_box(&content, &spec, size)
}

/// Dim help line under the menu.
pub fn instructions(opts: &MenuOptions) -> String {
    if opts.allow_escape {
        format!(
            "{}{}, '{}' to exit{RESET}",
            settings::COLOR_MENU_INSTRUCTIONS,
            settings::MENU_INSTRUCTIONS,
            opts.exit_key
        )
    } else {
        format!(
            "{}{}{RESET}",
            settings::COLOR_MENU_INSTRUCTIONS,
            settings::MENU_INSTRUCTIONS
        )
    }
}

/// Full frame for the current state: optional banner, menu box, a blank
/// line and the instructions. Screen clearing is left to the caller.
pub fn render_frame(state: &MenuState, opts: &MenuOptions, size: TerminalSize) -> String {
    let menu = render_menu(state.items(), state.selected(), opts, size);
    let full = format!("{menu}\n\n{}", instructions(opts));
    let content = if opts.banner.is_empty() {
        full
    } else {
        format!("{}\n{full}", opts.banner)
    };
    if opts.center {
        pad_to_screen(&content, &ScreenPlacement::default(), size)
    } else {
        content
    }
}
