//! clige: an ANSI-aware terminal layout engine with keyboard-driven menus.
//!
//! All renderers are pure functions returning styled strings. Widths are
//! measured on visible characters, so color codes embedded in content never
//! break alignment. The only interactive piece is the menu, which owns raw
//! mode for the duration of a single selection.
//!
//! # Quick start
//!
//! ```no_run
//! use clige::tui::{draw_box, BoxSpec};
//! use clige::tui::menu::{run_menu, MenuItem, MenuOptions};
//!
//! let spec = BoxSpec::default().with_title("Hello", Default::default());
//! println!("{}", draw_box("a boxed line", &spec));
//!
//! let items = vec![MenuItem::new("Start"), MenuItem::new("Quit")];
//! if let Some(choice) = run_menu(items, &MenuOptions::default()).unwrap() {
//!     println!("picked {}", choice.value);
//! }
//! ```

pub mod config;
pub mod error;
pub mod style;
pub mod terminal;
#[cfg(test)]
pub mod testsupport;
pub mod tui;
pub mod ui;

pub use error::{CliError, ConfigError};
pub use terminal::TerminalSize;
