//! CLI entry point for clige.

mod cli;

use std::io::{self, Read};

use clap::Parser;
use clige::config::{
    initialize_default_global_config, load_config_with_diagnostics, Config,
    GlobalConfigInitResult,
};
use clige::error::CliError;
use clige::terminal::current_size;
use clige::tui::menu::{run_menu, run_paged, MenuItem};
use clige::tui::{
    columns, draw_banner, draw_box, grid, loading_dots, progress_bar, render_nested_box,
    render_table, settings, spinner_frame, step_progress, Align, BannerSpec, BannerStyle,
    BorderStyle, ColumnsSpec, GridSpec, ProgressSpec, SpinnerStyle, StepSpec, TableSpec,
};
use clige::ui::theme::{MessageKind, Theme, ThemeToken};
use tracing_subscriber::EnvFilter;

use cli::{Args, Command};

/// Exit status when a menu is cancelled with the exit key.
const CANCELLED_EXIT_CODE: i32 = 1;

fn main() {
    let args = Args::parse();
    init_logging(args.log_file.as_deref());

    if let Command::Init { force } = args.command {
        match initialize_default_global_config(force) {
            Ok(result) => report_init(result),
            Err(e) => {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    let loaded = match load_config_with_diagnostics(args.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };
    for warning in &loaded.diagnostics.warnings {
        eprintln!("warning: {warning}");
    }

    let mut config = loaded.config;
    if let Some(theme) = &args.theme {
        config.display.theme = theme.clone();
    }
    if args.no_color {
        config.display.color = false;
    }

    match run(args.command, &config) {
        Ok(code) if code != 0 => std::process::exit(code),
        Ok(_) => {}
        Err(e) => {
            eprintln!("{}", config.theme().message(MessageKind::Error, &e.to_string()));
            std::process::exit(1);
        }
    }
}

/// Install a tracing subscriber only when `CLIGE_LOG` is set, so log lines
/// never interleave with raw-mode frames by default.
fn init_logging(log_file: Option<&str>) {
    let Ok(directives) = std::env::var("CLIGE_LOG") else {
        return;
    };
    let filter = EnvFilter::try_new(directives.trim()).unwrap_or_else(|_| EnvFilter::new("debug"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false);
    let result = match log_file {
        Some(path) => match std::fs::OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => builder.with_writer(std::sync::Mutex::new(file)).try_init(),
            Err(e) => {
                eprintln!("warning: cannot open log file `{path}`: {e}");
                return;
            }
        },
        None => builder.with_writer(io::stderr).try_init(),
    };
    if let Err(e) = result {
        eprintln!("warning: failed to install logger: {e}");
    }
}

fn report_init(result: GlobalConfigInitResult) {
    match result {
        GlobalConfigInitResult::Created { path } => {
            println!("Created {}", path.display());
        }
        GlobalConfigInitResult::AlreadyInitialized { path } => {
            println!(
                "{} already exists; rerun with --force to overwrite it",
                path.display()
            );
        }
        GlobalConfigInitResult::Overwritten { path, backup_path } => {
            println!(
                "Overwrote {} (previous file saved as {})",
                path.display(),
                backup_path.display()
            );
        }
    }
}

/// Execute one subcommand; returns the process exit status.
fn run(command: Command, config: &Config) -> Result<i32, CliError> {
    let theme = config.theme();
    match command {
        Command::Box {
            text,
            title,
            border,
            width,
            padding,
            align,
            nested,
        } => {
            let content = match text {
                Some(text) => text,
                None => read_stdin()?,
            };
            let mut spec = config.box_spec(&theme);
            if let Some(border) = border {
                spec.border = BorderStyle::from_name(&border);
            }
            if let Some(width) = width {
                spec = spec.with_width(width);
            }
            if let Some(padding) = padding {
                spec = spec.with_padding(padding);
            }
            if let Some(align) = align {
                spec = spec.with_align(Align::from_name(&align));
            }
            if let Some(title) = title {
                spec = spec.with_title(title, config.boxes.title_align);
            }
            let out = if nested > 1 {
                let colors = nested_colors(&theme);
                render_nested_box(
                    &content,
                    nested,
                    settings::NESTED_BOX_EXPAND_WIDTH,
                    &colors,
                    &spec,
                    current_size(),
                )
            } else {
                draw_box(&content, &spec)
            };
            println!("{out}");
        }
        Command::Table {
            rows,
            headers,
            no_borders,
        } => {
            let rows: Vec<Vec<String>> = rows.iter().map(|row| split_list(row)).collect();
            let mut spec = TableSpec {
                show_borders: !no_borders,
                header_color: theme.code(ThemeToken::TableHeader).to_string(),
                border_color: theme.code(ThemeToken::TableBorder).to_string(),
                ..TableSpec::default()
            };
            match headers {
                Some(headers) => spec = spec.with_headers(split_list(&headers)),
                None => spec.show_headers = false,
            }
            println!("{}", render_table(&rows, &spec));
        }
        Command::Banner { text, style, width } => {
            let spec = BannerSpec {
                style: BannerStyle::from_name(&style),
                width,
                color: theme.code(ThemeToken::Title).to_string(),
                border_color: theme.code(ThemeToken::Border).to_string(),
                ..BannerSpec::default()
            };
            println!("{}", draw_banner(&text, &spec));
        }
        Command::Columns {
            blocks,
            borders,
            widths,
        } => {
            let blocks: Vec<String> = blocks.iter().map(|b| b.replace("\\n", "\n")).collect();
            let widths = match widths {
                Some(raw) => parse_widths(&raw)?,
                None => Vec::new(),
            };
            let spec = ColumnsSpec {
                widths,
                borders,
                ..ColumnsSpec::default()
            };
            println!("{}", columns(&blocks, &spec, current_size()));
        }
        Command::Grid {
            items,
            columns: cols,
            cell_width,
            cell_height,
            borders,
        } => {
            let items: Vec<String> = items.iter().map(|b| b.replace("\\n", "\n")).collect();
            let spec = GridSpec {
                columns: cols,
                cell_width,
                cell_height,
                borders,
                ..GridSpec::default()
            };
            println!("{}", grid(&items, &spec, current_size()));
        }
        Command::Menu {
            options,
            title,
            json,
            paged,
            banner,
        } => return run_menu_command(config, &theme, options, title, json, paged, banner),
        Command::Progress {
            current,
            total,
            width,
            steps,
            vertical,
            spinner,
            loading,
        } => {
            let frame = current as usize;
            if let Some(style) = spinner {
                println!(
                    "{}",
                    spinner_frame(frame, SpinnerStyle::from_name(&style), settings::LOADING_DEFAULT_TEXT)
                );
            } else if loading {
                println!(
                    "{}",
                    loading_dots(frame, settings::LOADING_DEFAULT_TEXT, settings::LOADING_MAX_DOTS)
                );
            } else if let Some(steps) = steps {
                let steps = split_list(&steps);
                let spec = StepSpec {
                    show_labels: true,
                    vertical,
                };
                println!("{}", step_progress(&steps, frame, &spec));
            } else {
                let mut spec = ProgressSpec {
                    color: theme.code(ThemeToken::ProgressFill).to_string(),
                    empty_color: theme.code(ThemeToken::ProgressEmpty).to_string(),
                    ..ProgressSpec::default()
                };
                if let Some(width) = width {
                    spec.width = width;
                }
                println!("{}", progress_bar(current, total, &spec));
            }
        }
        Command::Themes => {
            let registry = config.theme_registry();
            for entry in registry.iter() {
                let marker = if entry.name == theme.name { "*" } else { " " };
                let sample = if config.display.color {
                    entry.colorize(&entry.name, ThemeToken::Primary.key())
                } else {
                    entry.name.clone()
                };
                println!("{marker} {sample:<20} {}", entry.description);
            }
        }
        Command::Init { .. } => {}
    }
    Ok(0)
}

fn run_menu_command(
    config: &Config,
    theme: &Theme,
    options: Vec<String>,
    title: Option<String>,
    json: bool,
    paged: bool,
    banner: Option<String>,
) -> Result<i32, CliError> {
    if options.is_empty() {
        return Err(CliError::Usage("menu needs at least one option".to_string()));
    }
    let items: Vec<MenuItem> = options.iter().map(|raw| parse_menu_item(raw)).collect();
    let mut opts = config.menu_options(theme);
    if let Some(title) = title {
        opts.title = title;
    }
    if let Some(text) = banner {
        let spec = BannerSpec {
            color: theme.code(ThemeToken::Title).to_string(),
            border_color: theme.code(ThemeToken::Border).to_string(),
            ..BannerSpec::default()
        };
        opts.banner = draw_banner(&text, &spec);
    }

    let printed = if paged {
        let page_opts = config.page_options();
        match run_paged(&items, &opts, &page_opts)? {
            Some(selection) if json => Some(serde_json::to_string(&selection)?),
            Some(selection) => Some(selection.selection.value),
            None => None,
        }
    } else {
        match run_menu(items, &opts)? {
            Some(selection) if json => Some(serde_json::to_string(&selection)?),
            Some(selection) => Some(selection.value),
            None => None,
        }
    };

    match printed {
        Some(line) => {
            println!("{line}");
            Ok(0)
        }
        None => Ok(CANCELLED_EXIT_CODE),
    }
}

/// `!text` marks a disabled option; `text=value` sets a separate value.
fn parse_menu_item(raw: &str) -> MenuItem {
    let (disabled, rest) = match raw.strip_prefix('!') {
        Some(rest) => (true, rest),
        None => (false, raw),
    };
    let item = match rest.split_once('=') {
        Some((text, value)) => MenuItem::new(text).with_value(value),
        None => MenuItem::new(rest),
    };
    item.disabled(disabled)
}

fn nested_colors(theme: &Theme) -> Vec<String> {
    [
        ThemeToken::Primary,
        ThemeToken::Secondary,
        ThemeToken::Accent,
    ]
    .iter()
    .map(|token| theme.code(*token).to_string())
    .collect()
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',').map(|cell| cell.trim().to_string()).collect()
}

fn parse_widths(raw: &str) -> Result<Vec<usize>, CliError> {
    raw.split(',')
        .map(|w| {
            w.trim()
                .parse::<usize>()
                .map_err(|_| CliError::Usage(format!("invalid column width `{w}`")))
        })
        .collect()
}

fn read_stdin() -> Result<String, CliError> {
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf.trim_end_matches('\n').to_string())
}
