//! Configuration loading from TOML files and environment variables.
//!
//! Config is loaded in this order of precedence (highest wins):
//! 1. Environment variables (`CLIGE_THEME`, `CLIGE_BORDER_STYLE`,
//!    `CLIGE_EXIT_KEY`, `NO_COLOR`/`CLIGE_NO_COLOR`)
//! 2. TOML file specified via --config CLI flag
//! 3. ./clige.toml in the current directory
//! 4. $XDG_CONFIG_HOME/clige/clige.toml (or ~/.config/clige/clige.toml)
//! 5. Built-in defaults

mod defaults;
mod env;
mod init;
mod loader;
mod sources;
mod types;

pub use init::{
    config_root_dir, default_global_config_path, initialize_config_at_path,
    initialize_default_global_config,
};
pub use loader::{load_config, load_config_with_diagnostics};
pub use types::{
    BoxConfig, Config, ConfigDiagnostics, DisplayConfig, GlobalConfigInitResult, LoadedConfig,
    MenuConfig,
};

use crate::tui::boxes::BoxSpec;
use crate::tui::menu::{MenuOptions, PageOptions};
use crate::ui::theme::{Theme, ThemeRegistry};

impl Config {
    /// Registry of built-in themes plus this config's overrides.
    pub fn theme_registry(&self) -> ThemeRegistry {
        ThemeRegistry::from_overrides(&self.themes).0
    }

    /// The selected theme, color-stripped when color is off.
    pub fn theme(&self) -> Theme {
        let (theme, _) = self.theme_registry().resolve(&self.display.theme);
        if self.display.color {
            theme
        } else {
            theme.without_color()
        }
    }

    /// Box defaults: config values, with the border style from the theme
    /// unless one is set explicitly.
    pub fn box_spec(&self, theme: &Theme) -> BoxSpec {
        let mut spec = BoxSpec::default()
            .with_padding(self.boxes.padding)
            .with_margin(self.boxes.margin)
            .with_align(self.boxes.align)
            .with_border(self.boxes.border_style.unwrap_or_else(|| theme.border_style()));
        spec.title_align = self.boxes.title_align;
        spec.color = theme.code(crate::ui::theme::ThemeToken::Border).to_string();
        spec
    }

    pub fn menu_options(&self, theme: &Theme) -> MenuOptions {
        let mut opts = MenuOptions::default().themed(theme);
        opts.box_spec = self.box_spec(theme);
        opts.exit_key = self.menu.exit_char();
        opts.allow_escape = self.menu.allow_escape;
        opts.clear_screen = self.menu.clear_screen;
        opts.center = self.menu.center;
        opts.show_numbers = self.menu.show_numbers;
        opts.show_indicators = self.menu.show_indicators;
        opts
    }

    pub fn page_options(&self) -> PageOptions {
        PageOptions {
            items_per_page: self.menu.items_per_page.max(1),
            show_page_info: self.menu.show_page_info,
            ..PageOptions::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::loader::load_config_with_diagnostics_from_sources;
    use super::*;
    use crate::testsupport::TestTempDir;
    use crate::tui::align::Align;
    use crate::tui::border::BorderStyle;
    use std::collections::HashMap;
    use std::path::{Path, PathBuf};

    fn load_with(
        files: &[(&str, &str)],
        env: &[(&str, &str)],
        path_override: Option<&str>,
    ) -> Result<LoadedConfig, crate::error::ConfigError> {
        let files: HashMap<PathBuf, String> = files
            .iter()
            .map(|(p, t)| (PathBuf::from(p), t.to_string()))
            .collect();
        let env: HashMap<String, String> = env
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        load_config_with_diagnostics_from_sources(
            path_override,
            |path: &Path| {
                files.get(path).cloned().ok_or_else(|| {
                    std::io::Error::new(std::io::ErrorKind::NotFound, "missing")
                })
            },
            |name| env.get(name).cloned(),
            || Some(PathBuf::from("/cfg")),
        )
    }

    #[test]
    fn defaults_are_sensible() {
        let loaded = load_with(&[], &[], None).unwrap();
        let c = loaded.config;
        assert!(c.display.color);
        assert_eq!(c.display.theme, "default");
        assert_eq!(c.boxes.padding, 1);
        assert_eq!(c.boxes.border_style, None);
        assert_eq!(c.menu.exit_char(), 'q');
        assert_eq!(c.menu.items_per_page, 10);
        assert!(loaded.source_path.is_none());
        assert!(loaded.diagnostics.warnings.is_empty());
    }

    #[test]
    fn parse_partial_toml() {
        let toml = r#"
            [box]
            border_style = "rounded"
            title_align = "center"

            [menu]
            exit_key = "x"
            center = true
        "#;
        let c = load_with(&[("clige.toml", toml)], &[], None).unwrap().config;
        assert_eq!(c.boxes.border_style, Some(BorderStyle::Rounded));
        assert_eq!(c.boxes.title_align, Align::Center);
        assert_eq!(c.boxes.padding, 1);
        assert_eq!(c.menu.exit_char(), 'x');
        assert!(c.menu.center);
        assert!(c.menu.allow_escape);
    }

    #[test]
    fn unknown_names_fall_back() {
        let toml = r#"
            [box]
            border_style = "wavy"
            align = "justify"
        "#;
        let c = load_with(&[("clige.toml", toml)], &[], None).unwrap().config;
        assert_eq!(c.boxes.border_style, Some(BorderStyle::Single));
        assert_eq!(c.boxes.align, Align::Left);
    }

    #[test]
    fn local_file_beats_global() {
        let loaded = load_with(
            &[
                ("clige.toml", "[display]\ntheme = \"dark\""),
                ("/cfg/clige/clige.toml", "[display]\ntheme = \"redblood\""),
            ],
            &[],
            None,
        )
        .unwrap();
        assert_eq!(loaded.config.display.theme, "dark");
        assert_eq!(loaded.source_path, Some(PathBuf::from("clige.toml")));
    }

    #[test]
    fn global_file_is_used_when_no_local() {
        let loaded = load_with(
            &[("/cfg/clige/clige.toml", "[display]\ntheme = \"redblood\"")],
            &[],
            None,
        )
        .unwrap();
        assert_eq!(loaded.config.display.theme, "redblood");
    }

    #[test]
    fn explicit_path_must_exist() {
        let err = load_with(&[("clige.toml", "")], &[], Some("/nope.toml")).unwrap_err();
        assert!(matches!(err, crate::error::ConfigError::Io(_)));
    }

    #[test]
    fn env_overrides_file() {
        let loaded = load_with(
            &[("clige.toml", "[display]\ntheme = \"dark\"\ncolor = true")],
            &[
                ("CLIGE_THEME", "redblood"),
                ("CLIGE_BORDER_STYLE", "thick"),
                ("CLIGE_EXIT_KEY", "e"),
                ("NO_COLOR", "1"),
            ],
            None,
        )
        .unwrap();
        let c = loaded.config;
        assert_eq!(c.display.theme, "redblood");
        assert_eq!(c.boxes.border_style, Some(BorderStyle::Thick));
        assert_eq!(c.menu.exit_char(), 'e');
        assert!(!c.display.color);
    }

    #[test]
    fn clige_no_color_accepts_false() {
        let c = load_with(&[], &[("CLIGE_NO_COLOR", "false")], None)
            .unwrap()
            .config;
        assert!(c.display.color);
    }

    #[test]
    fn bad_exit_key_is_rejected() {
        let err = load_with(&[("clige.toml", "[menu]\nexit_key = \"quit\"")], &[], None)
            .unwrap_err();
        assert!(err.to_string().contains("single character"));
        let err = load_with(&[], &[("CLIGE_EXIT_KEY", "ab")], None).unwrap_err();
        assert!(err.to_string().contains("CLIGE_EXIT_KEY"));
    }

    #[test]
    fn unknown_theme_and_bad_override_are_warnings() {
        let toml = r##"
            [display]
            theme = "neon"

            [themes.broken]
            "colors.primary" = "#zz"
        "##;
        let loaded = load_with(&[("clige.toml", toml)], &[], None).unwrap();
        let warnings = loaded.diagnostics.warnings;
        assert_eq!(warnings.len(), 2);
        assert!(warnings.iter().any(|w| w.contains("neon")));
        assert!(warnings.iter().any(|w| w.contains("broken")));
    }

    #[test]
    fn theme_drives_menu_and_box_options() {
        let toml = r#"
            [display]
            theme = "redblood"

            [menu]
            show_numbers = false
        "#;
        let c = load_with(&[("clige.toml", toml)], &[], None).unwrap().config;
        let theme = c.theme();
        let opts = c.menu_options(&theme);
        assert_eq!(opts.box_spec.border, BorderStyle::Double);
        assert!(!opts.show_numbers);
        assert_eq!(opts.selected_color, theme.get("components.menu.selected_color"));
    }

    #[test]
    fn no_color_strips_theme_codes() {
        let c = load_with(&[], &[("NO_COLOR", "1")], None).unwrap().config;
        let opts = c.menu_options(&c.theme());
        assert_eq!(opts.selected_color, "");
        assert_eq!(opts.box_spec.color, "");
    }

    #[test]
    fn init_creates_then_keeps_then_backs_up() {
        let tmp = TestTempDir::new("init");
        let path = tmp.child("clige/clige.toml");

        let created = initialize_config_at_path(&path, false).unwrap();
        assert_eq!(created, GlobalConfigInitResult::Created { path: path.clone() });
        let template = std::fs::read_to_string(&path).unwrap();
        assert!(template.contains("[menu]"));
        toml::from_str::<Config>(&template).expect("template should parse");

        std::fs::write(&path, "# mine\n").unwrap();
        let kept = initialize_config_at_path(&path, false).unwrap();
        assert_eq!(kept, GlobalConfigInitResult::AlreadyInitialized { path: path.clone() });
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# mine\n");

        let GlobalConfigInitResult::Overwritten { backup_path, .. } =
            initialize_config_at_path(&path, true).unwrap()
        else {
            panic!("expected overwrite");
        };
        assert_eq!(std::fs::read_to_string(backup_path).unwrap(), "# mine\n");
        assert_eq!(std::fs::read_to_string(&path).unwrap(), template);
    }
}
