//! Terminal layout engine and interactive menus.
//!
//! Every renderer here is a pure function from content plus a settings value
//! to a styled string; width math always goes through `text` so embedded
//! escape sequences never count as columns.

pub mod align;
pub mod banner;
pub mod border;
pub mod boxes;
pub mod layout;
pub mod menu;
pub mod progress;
pub mod settings;
pub mod table;
pub mod text;
pub mod wrap;

pub use align::{align_block, center_text, pad, repeat, truncate, Align};
pub use banner::{draw_banner, render_banner, BannerSpec, BannerStyle};
pub use border::{glyphs_for, BorderGlyphs, BorderStyle};
pub use boxes::{draw_box, render_box, render_nested_box, BoxSpec};
pub use layout::{
    arrange_horizontal, columns, fit_to_terminal, grid, pad_to_screen, render_container,
    stack_vertical, ColumnsSpec, ContainerItem, ContainerSpec, Direction, GridSpec,
    ScreenPlacement, VAlign,
};
pub use progress::{
    loading_dots, percentage, progress_bar, spinner_frame, step_progress, ProgressSpec, SpinnerStyle,
    StepSpec,
};
pub use table::{column_widths, render_table, TableSpec};
pub use text::{measure, strip_escapes, visible_width, TextMetrics};
pub use wrap::wrap;
