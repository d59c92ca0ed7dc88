//! CLI argument parsing via clap.

use clap::{Parser, Subcommand};

/// Render boxes, tables and banners, or run a selection menu, in the terminal.
#[derive(Debug, Parser)]
#[command(name = "clige", version)]
pub struct Args {
    /// Path to config file (default: ./clige.toml or ~/.config/clige/clige.toml).
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<String>,

    /// Theme name (overrides config and CLIGE_THEME).
    #[arg(short = 't', long = "theme", global = true)]
    pub theme: Option<String>,

    /// Disable color output.
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    /// Write logs here instead of stderr (logging is enabled by CLIGE_LOG).
    #[arg(long = "log-file", global = true, value_name = "PATH")]
    pub log_file: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Draw text (or stdin when no text is given) inside a box.
    Box {
        text: Option<String>,
        #[arg(long)]
        title: Option<String>,
        /// single | double | rounded | thick.
        #[arg(long)]
        border: Option<String>,
        #[arg(long)]
        width: Option<usize>,
        #[arg(long)]
        padding: Option<usize>,
        /// left | center | right.
        #[arg(long)]
        align: Option<String>,
        /// Wrap in this many concentric boxes.
        #[arg(long, default_value_t = 1)]
        nested: usize,
    },
    /// Render CSV-ish rows (comma-separated, one row per argument).
    Table {
        rows: Vec<String>,
        /// Comma-separated header names.
        #[arg(long)]
        headers: Option<String>,
        #[arg(long)]
        no_borders: bool,
    },
    /// Draw a banner around a line of text.
    Banner {
        text: String,
        /// simple | double | star.
        #[arg(long, default_value = "simple")]
        style: String,
        #[arg(long)]
        width: Option<usize>,
    },
    /// Lay text blocks out side by side. `\n` inside an argument starts a new line.
    Columns {
        blocks: Vec<String>,
        #[arg(long)]
        borders: bool,
        /// Comma-separated column widths.
        #[arg(long)]
        widths: Option<String>,
    },
    /// Lay text items out in a grid.
    Grid {
        items: Vec<String>,
        #[arg(long, default_value_t = 3)]
        columns: usize,
        #[arg(long, default_value_t = 20)]
        cell_width: usize,
        #[arg(long, default_value_t = 3)]
        cell_height: usize,
        #[arg(long)]
        borders: bool,
    },
    /// Pick one of the given options. Prefix an option with `!` to disable it.
    Menu {
        options: Vec<String>,
        #[arg(long)]
        title: Option<String>,
        /// Print the selection as JSON.
        #[arg(long)]
        json: bool,
        /// Show the options in pages of `items_per_page`.
        #[arg(long)]
        paged: bool,
        /// Banner text printed above the menu.
        #[arg(long)]
        banner: Option<String>,
    },
    /// Print a progress bar, spinner frame or step indicator.
    Progress {
        current: u64,
        #[arg(default_value_t = 100)]
        total: u64,
        #[arg(long)]
        width: Option<usize>,
        /// Comma-separated step names; shows a step indicator instead of a bar.
        #[arg(long)]
        steps: Option<String>,
        #[arg(long)]
        vertical: bool,
        /// Print spinner frame `current` instead (dots, line, arrow, bounce, pulse).
        #[arg(long, value_name = "STYLE")]
        spinner: Option<String>,
        /// Print loading-dots frame `current` instead.
        #[arg(long)]
        loading: bool,
    },
    /// List available themes.
    Themes,
    /// Create default ~/.config/clige/clige.toml.
    Init {
        /// Overwrite an existing config after writing a timestamped backup.
        #[arg(long = "force")]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::{Args, Command};
    use clap::Parser;

    #[test]
    fn global_flags_parse_after_subcommand() {
        let args = Args::parse_from(["clige", "box", "hi", "--no-color", "--theme", "dark"]);
        assert!(args.no_color);
        assert_eq!(args.theme.as_deref(), Some("dark"));
        assert!(matches!(args.command, Command::Box { nested: 1, .. }));
    }

    #[test]
    fn menu_collects_options() {
        let args = Args::parse_from(["clige", "menu", "a", "!b", "c", "--json"]);
        let Command::Menu { options, json, paged, .. } = args.command else {
            panic!("expected menu");
        };
        assert_eq!(options, vec!["a", "!b", "c"]);
        assert!(json);
        assert!(!paged);
    }

    #[test]
    fn init_force_flag() {
        let args = Args::parse_from(["clige", "init", "--force"]);
        assert!(matches!(args.command, Command::Init { force: true }));
    }
}
