//! Composition of rendered blocks: stacking, side-by-side boxes, columns,
//! grids and whole-screen placement.

use crate::style::{BOLD, RESET};
use crate::terminal::TerminalSize;
use crate::tui::align::{pad, repeat, truncate, Align};
use crate::tui::boxes::{render_box, BoxSpec};
use crate::tui::settings;
use crate::tui::text::visible_width;

/// Join rendered blocks top to bottom with `spacing` blank lines between them.
pub fn stack_vertical<S: AsRef<str>>(blocks: &[S], spacing: usize) -> String {
    let separator = "\n".repeat(spacing + 1);
    blocks
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(separator.as_str())
}

/// One box inside a container: its content plus its own box settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainerItem {
    pub content: String,
    pub spec: BoxSpec,
}

impl ContainerItem {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            spec: BoxSpec::default(),
        }
    }

    pub fn with_spec(mut self, spec: BoxSpec) -> Self {
        self.spec = spec;
        self
    }
}

/// Render items as boxes placed side by side.
///
/// Every box gets `floor((terminal - (n - 1) * spacing) / n)` columns, at
/// least two. Rows
/// past the end of a shorter box are filled with blank lines of that box's
/// width, colored with the item color, else `container_color`, plus the
/// item background.
pub fn arrange_horizontal(
    items: &[ContainerItem],
    spacing: usize,
    container_color: &str,
    size: TerminalSize,
) -> String {
    if items.is_empty() {
        return String::new();
    }
    let count = items.len();
    let available = size.width.saturating_sub((count - 1) * spacing);
    // A box needs its two border columns even when the terminal is too narrow.
    let item_width = (available / count).max(2);

    let rendered: Vec<Vec<String>> = items
        .iter()
        .map(|item| {
            let spec = BoxSpec {
                width: Some(item_width),
                ..item.spec.clone()
            };
            render_box(&item.content, &spec, size)
                .split('\n')
                .map(str::to_string)
                .collect()
        })
        .collect();

    let max_height = rendered.iter().map(Vec::len).max().unwrap_or(0);
    let gap = repeat(" ", spacing);
    let mut out = Vec::with_capacity(max_height);
    for row in 0..max_height {
        let mut line = String::new();
        for (idx, (item, lines)) in items.iter().zip(&rendered).enumerate() {
            match lines.get(row) {
                Some(existing) => line.push_str(existing),
                None => {
                    let width = lines.first().map(|l| visible_width(l)).unwrap_or(0);
                    let color = if item.spec.color.is_empty() {
                        container_color
                    } else {
                        &item.spec.color
                    };
                    line.push_str(color);
                    line.push_str(&item.spec.background);
                    line.push_str(&repeat(" ", width));
                    line.push_str(RESET);
                }
            }
            if idx + 1 < count {
                line.push_str(&gap);
            }
        }
        out.push(line);
    }
    out.join("\n")
}

/// Direction in which a container lays out its items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Vertical,
    Horizontal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerSpec {
    /// Rendered as a bold centered box above the items when non-empty.
    pub title: String,
    /// Fallback color for items without their own.
    pub color: String,
    pub direction: Direction,
    pub spacing: usize,
    /// Blank columns and rows around the whole container.
    pub padding: usize,
}

impl Default for ContainerSpec {
    fn default() -> Self {
        Self {
            title: String::new(),
            color: String::new(),
            direction: Direction::Vertical,
            spacing: settings::DEFAULT_CONTAINER_SPACING,
            padding: 0,
        }
    }
}

/// Render a group of boxes, stacked or side by side, under an optional title.
pub fn render_container(items: &[ContainerItem], spec: &ContainerSpec, size: TerminalSize) -> String {
    let mut blocks = Vec::new();
    if !spec.title.is_empty() {
        let title_spec = BoxSpec::default()
            .with_align(Align::Center)
            .with_color(format!("{}{BOLD}", spec.color));
        blocks.push(render_box(&spec.title, &title_spec, size));
    }

    match spec.direction {
        Direction::Horizontal => {
            blocks.push(arrange_horizontal(items, spec.spacing, &spec.color, size));
        }
        Direction::Vertical => {
            let boxes: Vec<String> = items
                .iter()
                .map(|item| {
                    let mut item_spec = item.spec.clone();
                    if item_spec.color.is_empty() {
                        item_spec.color = spec.color.clone();
                    }
                    render_box(&item.content, &item_spec, size)
                })
                .collect();
            blocks.push(stack_vertical(&boxes, spec.spacing));
        }
    }

    let body = stack_vertical(&blocks, spec.spacing);
    if spec.padding == 0 {
        return body;
    }
    surround(&body, spec.padding)
}

/// Add `padding` blank columns on both sides and blank rows above and below.
fn surround(block: &str, padding: usize) -> String {
    let side = repeat(" ", padding);
    let lines: Vec<String> = block
        .split('\n')
        .map(|line| format!("{side}{line}{side}"))
        .collect();
    let width = lines.iter().map(|l| visible_width(l)).max().unwrap_or(0);
    let blank = repeat(" ", width);
    let mut out = Vec::with_capacity(lines.len() + padding * 2);
    out.extend(std::iter::repeat(blank.clone()).take(padding));
    out.extend(lines);
    out.extend(std::iter::repeat(blank).take(padding));
    out.join("\n")
}

/// Side-by-side text columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnsSpec {
    /// Used only when it has one entry per column; otherwise widths are split
    /// evenly across the terminal.
    pub widths: Vec<usize>,
    pub spacing: usize,
    /// Per-column alignment; missing entries are left-aligned.
    pub alignment: Vec<Align>,
    /// Separate columns with ` │ ` instead of plain spacing.
    pub borders: bool,
}

impl Default for ColumnsSpec {
    fn default() -> Self {
        Self {
            widths: Vec::new(),
            spacing: settings::DEFAULT_COLUMN_SPACING,
            alignment: Vec::new(),
            borders: false,
        }
    }
}

/// Lay text blocks out as columns.
///
/// Lines wider than their column are truncated with `...`, never wrapped.
/// Columns with fewer lines are filled with blanks of the column width.
pub fn columns<S: AsRef<str>>(contents: &[S], spec: &ColumnsSpec, size: TerminalSize) -> String {
    if contents.is_empty() {
        return String::new();
    }
    let count = contents.len();
    let separator = if spec.borders {
        format!(" {} ", settings::COLUMN_BORDER)
    } else {
        repeat(" ", spec.spacing)
    };

    let widths: Vec<usize> = if spec.widths.len() == count {
        spec.widths.clone()
    } else {
        let available = size
            .width
            .saturating_sub((count - 1) * visible_width(&separator));
        vec![available / count; count]
    };

    let cells: Vec<Vec<String>> = contents
        .iter()
        .zip(&widths)
        .enumerate()
        .map(|(idx, (content, &width))| {
            let align = spec.alignment.get(idx).copied().unwrap_or_default();
            content
                .as_ref()
                .split('\n')
                .map(|line| {
                    if visible_width(line) > width {
                        truncate(line, width, settings::TRUNCATE_SUFFIX)
                    } else {
                        pad(line, width, ' ', align)
                    }
                })
                .collect()
        })
        .collect();

    let max_lines = cells.iter().map(Vec::len).max().unwrap_or(0);
    (0..max_lines)
        .map(|row| {
            cells
                .iter()
                .zip(&widths)
                .map(|(column, &width)| {
                    column
                        .get(row)
                        .cloned()
                        .unwrap_or_else(|| repeat(" ", width))
                })
                .collect::<Vec<_>>()
                .join(separator.as_str())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridSpec {
    pub columns: usize,
    pub cell_width: usize,
    pub cell_height: usize,
    /// Blank lines between rows and blank columns between cells.
    pub spacing: usize,
    /// Draw `│` between cells and a `─┼─` rule between rows.
    pub borders: bool,
    pub alignment: Align,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            columns: settings::DEFAULT_GRID_COLUMNS,
            cell_width: settings::DEFAULT_GRID_CELL_WIDTH,
            cell_height: settings::DEFAULT_GRID_CELL_HEIGHT,
            spacing: settings::DEFAULT_GRID_SPACING,
            borders: false,
            alignment: Align::Center,
        }
    }
}

/// Tile items into a matrix of fixed-size cells.
///
/// Each cell is clipped or padded to exactly `cell_height` lines before the
/// row is laid out with [`columns`].
pub fn grid<S: AsRef<str>>(items: &[S], spec: &GridSpec, size: TerminalSize) -> String {
    let per_row = spec.columns.max(1);
    if items.is_empty() {
        return String::new();
    }
    let column_spec = ColumnsSpec {
        widths: vec![spec.cell_width; per_row],
        spacing: spec.spacing,
        alignment: vec![spec.alignment; per_row],
        borders: spec.borders,
    };

    let rows: Vec<String> = items
        .chunks(per_row)
        .map(|chunk| {
            let cells: Vec<String> = (0..per_row)
                .map(|col| match chunk.get(col) {
                    Some(item) => fit_cell(item.as_ref(), spec.cell_height),
                    None => vec![""; spec.cell_height.max(1)].join("\n"),
                })
                .collect();
            columns(&cells, &column_spec, size)
        })
        .collect();

    if spec.borders {
        let cross = format!("{0}{1}{0}", settings::GRID_ROW_BORDER, settings::GRID_CROSS);
        let rule = vec![repeat(settings::GRID_ROW_BORDER, spec.cell_width); per_row].join(cross.as_str());
        rows.join(format!("\n{rule}\n").as_str())
    } else {
        stack_vertical(&rows, spec.spacing)
    }
}

fn fit_cell(item: &str, height: usize) -> String {
    let lines: Vec<&str> = item.split('\n').collect();
    (0..height.max(1))
        .map(|i| lines.get(i).copied().unwrap_or(""))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Vertical placement of a block on screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VAlign {
    Top,
    #[default]
    Center,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenPlacement {
    pub horizontal: Align,
    pub vertical: VAlign,
    pub fill: char,
    /// Rows kept free below the block (prompts, status lines).
    pub reserved_lines: usize,
}

impl Default for ScreenPlacement {
    fn default() -> Self {
        Self {
            horizontal: Align::Center,
            vertical: VAlign::Center,
            fill: ' ',
            reserved_lines: 0,
        }
    }
}

/// Position a block within the terminal.
///
/// Only leading fill is added, so lines never reach past their natural end.
pub fn pad_to_screen(content: &str, placement: &ScreenPlacement, size: TerminalSize) -> String {
    let lines: Vec<&str> = content.split('\n').collect();
    let fill = |n: usize| std::iter::repeat(placement.fill).take(n).collect::<String>();

    let placed: Vec<String> = lines
        .iter()
        .map(|line| {
            let slack = size.width.saturating_sub(visible_width(line));
            match placement.horizontal {
                Align::Left => (*line).to_string(),
                Align::Center => format!("{}{line}", fill(slack / 2)),
                Align::Right => format!("{}{line}", fill(slack)),
            }
        })
        .collect();

    let available = size.height.saturating_sub(placement.reserved_lines);
    let free = available.saturating_sub(lines.len());
    let top = match placement.vertical {
        VAlign::Top => 0,
        VAlign::Center => free / 2,
        VAlign::Bottom => free,
    };
    format!("{}{}", "\n".repeat(top), placed.join("\n"))
}

/// Clip a block to the terminal: at most `height - reserved_height` lines,
/// each truncated to `width - reserved_width` columns.
pub fn fit_to_terminal(
    text: &str,
    reserved_width: usize,
    reserved_height: usize,
    size: TerminalSize,
) -> String {
    let max_width = size.width.saturating_sub(reserved_width);
    let max_height = size.height.saturating_sub(reserved_height);
    text.split('\n')
        .take(max_height)
        .map(|line| truncate(line, max_width, settings::TRUNCATE_SUFFIX))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{BG_BLUE, GREEN, RED};
    use crate::tui::text::strip_escapes;

    fn size(width: usize, height: usize) -> TerminalSize {
        TerminalSize::new(width, height)
    }

    #[test]
    fn stack_vertical_inserts_blank_lines() {
        assert_eq!(stack_vertical(&["a", "b"], 0), "a\nb");
        assert_eq!(stack_vertical(&["a", "b"], 2), "a\n\n\nb");
        assert_eq!(stack_vertical::<&str>(&[], 1), "");
    }

    #[test]
    fn horizontal_boxes_backfill_shorter_box() {
        let items = vec![
            ContainerItem::new("x").with_spec(BoxSpec::default().with_padding(0)),
            ContainerItem::new("a\nb\nc").with_spec(BoxSpec::default().with_padding(0)),
        ];
        let out = arrange_horizontal(&items, 2, "", size(22, 24));
        let lines: Vec<&str> = out.split('\n').collect();
        assert_eq!(lines.len(), 5);
        for line in &lines {
            assert_eq!(visible_width(line), 22);
        }
        assert_eq!(strip_escapes(lines[4]), format!("{}  └────────┘", " ".repeat(10)));
    }

    #[test]
    fn narrow_terminal_keeps_rows_even() {
        let items: Vec<ContainerItem> = ["a", "b", "c"].into_iter().map(ContainerItem::new).collect();
        let out = arrange_horizontal(&items, 1, "", size(10, 24));
        for line in out.split('\n') {
            assert_eq!(visible_width(line), 8);
        }

        let items: Vec<ContainerItem> =
            ["a", "b", "c", "d"].into_iter().map(ContainerItem::new).collect();
        let out = arrange_horizontal(&items, 1, "", size(3, 24));
        assert_eq!(out.split('\n').count(), 3);
        for line in out.split('\n') {
            assert_eq!(visible_width(line), 4 * 2 + 3);
        }
    }

    #[test]
    fn backfill_prefers_item_color_then_container() {
        let items = vec![
            ContainerItem::new("x").with_spec(
                BoxSpec::default()
                    .with_padding(0)
                    .with_color(RED)
                    .with_background(BG_BLUE),
            ),
            ContainerItem::new("y").with_spec(BoxSpec::default().with_padding(0)),
            ContainerItem::new("1\n2\n3").with_spec(BoxSpec::default().with_padding(0)),
        ];
        let out = arrange_horizontal(&items, 1, GREEN, size(32, 24));
        let last = out.split('\n').last().expect("rows");
        let first_fill = format!("{RED}{BG_BLUE}{}{RESET}", " ".repeat(10));
        let second_fill = format!("{GREEN}{}{RESET}", " ".repeat(10));
        assert!(last.starts_with(&format!("{first_fill} {second_fill} ")));
    }

    #[test]
    fn container_adds_title_and_padding() {
        let items = vec![ContainerItem::new("body").with_spec(BoxSpec::default().with_width(10))];
        let spec = ContainerSpec {
            title: "Head".into(),
            padding: 1,
            spacing: 0,
            ..ContainerSpec::default()
        };
        let out = render_container(&items, &spec, size(20, 24));
        let lines: Vec<String> = out.split('\n').map(|l| strip_escapes(l).into_owned()).collect();
        assert_eq!(lines.first().map(String::as_str), Some(" ".repeat(22).as_str()));
        assert!(lines.iter().any(|l| l.contains("Head")));
        assert!(lines.iter().any(|l| l.contains("body")));
        assert_eq!(lines.len(), 5 + 5 + 2);
    }

    #[test]
    fn columns_truncate_instead_of_wrapping() {
        let spec = ColumnsSpec {
            widths: vec![5, 3],
            spacing: 1,
            ..ColumnsSpec::default()
        };
        let out = columns(&["toolongtext\nok", "abc"], &spec, size(80, 24));
        assert_eq!(out, "to... abc\nok       ");
    }

    #[test]
    fn columns_split_terminal_evenly() {
        let out = columns(&["a", "b"], &ColumnsSpec::default(), size(12, 24));
        assert_eq!(out, "a      b    ");
    }

    #[test]
    fn bordered_columns_use_separator() {
        let spec = ColumnsSpec {
            widths: vec![2, 2],
            borders: true,
            alignment: vec![Align::Right, Align::Center],
            ..ColumnsSpec::default()
        };
        assert_eq!(columns(&["a", "b"], &spec, size(80, 24)), " a │ b ");
    }

    #[test]
    fn grid_cells_have_fixed_height() {
        let spec = GridSpec {
            columns: 2,
            cell_width: 3,
            cell_height: 2,
            spacing: 1,
            borders: false,
            alignment: Align::Left,
        };
        let out = grid(&["a", "b\nc\nd", "e"], &spec, size(80, 24));
        assert_eq!(out, "a   b  \n    c  \n\ne      \n       ");
    }

    #[test]
    fn bordered_grid_separates_rows_with_rule() {
        let spec = GridSpec {
            columns: 2,
            cell_width: 1,
            cell_height: 1,
            spacing: 1,
            borders: true,
            alignment: Align::Left,
        };
        let out = grid(&["a", "b", "c", "d"], &spec, size(80, 24));
        assert_eq!(out, "a │ b\n──┼──\nc │ d");
    }

    #[test]
    fn pad_to_screen_centers_both_ways() {
        let placement = ScreenPlacement::default();
        let out = pad_to_screen("ab", &placement, size(10, 5));
        assert_eq!(out, "\n\n    ab");
    }

    #[test]
    fn pad_to_screen_bottom_right_with_reserve() {
        let placement = ScreenPlacement {
            horizontal: Align::Right,
            vertical: VAlign::Bottom,
            fill: '.',
            reserved_lines: 1,
        };
        let out = pad_to_screen("ab\nc", &placement, size(4, 5));
        assert_eq!(out, "\n\n..ab\n...c");
    }

    #[test]
    fn fit_to_terminal_clips_rows_and_columns() {
        let out = fit_to_terminal("abcdefgh\nb\nc\nd", 2, 2, size(8, 4));
        assert_eq!(out, "abc...\nb");
    }
}
