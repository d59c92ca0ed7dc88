//! Keyboard-driven selection menus.
//!
//! `state` holds the pure transition function, `keys` turns terminal input
//! into menu events, `render` draws frames and `run` owns the raw-mode loop.

pub mod keys;
pub mod paged;
pub mod render;
pub mod run;
pub mod state;

pub use keys::KeyBindings;
pub use paged::{run_paged, run_paged_with, PageOptions, PageSlot, PagedResult, PagedSelection, Pager};
pub use render::{instructions, render_frame, render_menu, MenuOptions};
pub use run::{
    drive, run_interactive, run_menu, run_with, simple_prompt, CrosstermKeys, KeySource,
    MenuResult, ScriptedKeys, Selection, INTERRUPT_EXIT_CODE,
};
pub use state::{MenuEvent, MenuItem, MenuOutcome, MenuState, Step};
