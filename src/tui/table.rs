//! Bordered tables with per-column alignment.

use crate::style::{BOLD, DIM, RESET};
use crate::tui::align::{pad, repeat, Align};
use crate::tui::settings;
use crate::tui::text::visible_width;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSpec {
    pub headers: Vec<String>,
    /// Used only when it has one entry per column.
    pub widths: Vec<usize>,
    /// Per-column alignment; missing entries are left-aligned.
    pub alignment: Vec<Align>,
    pub show_headers: bool,
    pub show_borders: bool,
    pub header_color: String,
    pub border_color: String,
}

impl Default for TableSpec {
    fn default() -> Self {
        Self {
            headers: Vec::new(),
            widths: Vec::new(),
            alignment: Vec::new(),
            show_headers: true,
            show_borders: true,
            header_color: BOLD.to_string(),
            border_color: DIM.to_string(),
        }
    }
}

impl TableSpec {
    pub fn with_headers<S: Into<String>>(mut self, headers: impl IntoIterator<Item = S>) -> Self {
        self.headers = headers.into_iter().map(Into::into).collect();
        self
    }
}

/// Column widths: explicit ones when they match the column count, otherwise
/// the widest header or cell plus two.
pub fn column_widths<R: AsRef<[String]>>(rows: &[R], spec: &TableSpec) -> Vec<usize> {
    let count = column_count(rows, spec);
    if spec.widths.len() == count {
        return spec.widths.clone();
    }
    (0..count)
        .map(|col| {
            let header = spec.headers.get(col).map(|h| visible_width(h)).unwrap_or(0);
            let cells = rows
                .iter()
                .map(|row| row.as_ref().get(col).map(|c| visible_width(c)).unwrap_or(0))
                .max()
                .unwrap_or(0);
            header.max(cells) + settings::TABLE_CELL_EXTRA
        })
        .collect()
}

fn column_count<R: AsRef<[String]>>(rows: &[R], spec: &TableSpec) -> usize {
    rows.iter()
        .map(|row| row.as_ref().len())
        .max()
        .unwrap_or(0)
        .max(spec.headers.len())
}

/// Render rows as a table. Missing cells render empty; no rows renders `""`.
pub fn render_table<R: AsRef<[String]>>(rows: &[R], spec: &TableSpec) -> String {
    if rows.is_empty() {
        return String::new();
    }
    let widths = column_widths(rows, spec);
    let border = |text: &str| format!("{}{text}{RESET}", spec.border_color);
    let rule = |left: &str, mid: &str, right: &str| {
        let inner = widths
            .iter()
            .map(|w| repeat("─", *w))
            .collect::<Vec<_>>()
            .join(mid);
        border(&format!("{left}{inner}{right}"))
    };
    let align_of = |col: usize| spec.alignment.get(col).copied().unwrap_or_default();

    let mut lines = Vec::with_capacity(rows.len() + 4);
    if spec.show_borders {
        lines.push(rule("┌", "┬", "┐"));
    }

    if spec.show_headers && !spec.headers.is_empty() {
        let mut line = String::new();
        if spec.show_borders {
            line.push_str(&border("│"));
        }
        for (col, width) in widths.iter().enumerate() {
            let header = spec.headers.get(col).map(String::as_str).unwrap_or("");
            let styled = format!("{}{header}{RESET}", spec.header_color);
            line.push_str(&pad(&styled, *width, ' ', align_of(col)));
            if spec.show_borders {
                line.push_str(&border("│"));
            }
        }
        lines.push(line);
        if spec.show_borders {
            lines.push(rule("├", "┼", "┤"));
        }
    }

    for row in rows {
        let row = row.as_ref();
        let mut line = String::new();
        if spec.show_borders {
            line.push_str(&border("│"));
        }
        for (col, width) in widths.iter().enumerate() {
            let cell = row.get(col).map(String::as_str).unwrap_or("");
            line.push_str(&pad(cell, *width, ' ', align_of(col)));
            if spec.show_borders {
                line.push_str(&border("│"));
            }
        }
        lines.push(line);
    }

    if spec.show_borders {
        lines.push(rule("└", "┴", "┘"));
    }
    lines.join("\n")
}
