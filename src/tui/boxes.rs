//! Bordered, padded, optionally titled boxes.

use crate::style::RESET;
use crate::terminal::{current_size, TerminalSize};
use crate::tui::align::{pad, repeat, truncate, Align};
use crate::tui::border::BorderStyle;
use crate::tui::settings;
use crate::tui::text::{measure, visible_width};
use crate::tui::wrap::wrap;

/// Box configuration. Every field has a usable default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxSpec {
    /// Outer width including borders. `None` derives it from the terminal.
    pub width: Option<usize>,
    /// Outer height including borders. `None` sizes to content.
    pub height: Option<usize>,
    pub padding: usize,
    pub margin: usize,
    pub title: String,
    pub title_align: Align,
    pub border: BorderStyle,
    /// Alignment of content lines inside the box.
    pub align: Align,
    /// Foreground code applied to the whole box.
    pub color: String,
    /// Background code applied to the whole box.
    pub background: String,
}

impl Default for BoxSpec {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            padding: settings::DEFAULT_BOX_PADDING,
            margin: 0,
            title: String::new(),
            title_align: Align::Left,
            border: BorderStyle::Single,
            align: Align::Left,
            color: String::new(),
            background: String::new(),
        }
    }
}

impl BoxSpec {
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_height(mut self, height: usize) -> Self {
        self.height = Some(height);
        self
    }

    pub fn with_padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_margin(mut self, margin: usize) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>, align: Align) -> Self {
        self.title = title.into();
        self.title_align = align;
        self
    }

    pub fn with_border(mut self, border: BorderStyle) -> Self {
        self.border = border;
        self
    }

    pub fn with_align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_background(mut self, background: impl Into<String>) -> Self {
        self.background = background.into();
        self
    }

    /// Outer width for a terminal of the given size.
    ///
    /// Explicit widths win; otherwise `min(terminal - 2 * margin, 80)`.
    /// Never narrower than the two border columns.
    pub fn resolved_width(&self, size: TerminalSize) -> usize {
        let width = match self.width {
            Some(width) if width > 0 => width,
            _ => size
                .width
                .saturating_sub(self.margin * 2)
                .min(settings::MAX_AUTO_BOX_WIDTH),
        };
        width.max(2)
    }

    /// Padding clamped so both sides fit between the borders.
    pub fn effective_padding(&self, box_width: usize) -> usize {
        self.padding.min(box_width.saturating_sub(2) / 2)
    }

    /// Width left for content after borders and padding, floored at 0.
    pub fn content_width(&self, box_width: usize) -> usize {
        box_width.saturating_sub(2 + self.effective_padding(box_width) * 2)
    }

    /// Combined foreground + background code.
    pub(crate) fn full_color(&self) -> String {
        format!("{}{}", self.color, self.background)
    }
}

/// Render a box sized against the live terminal.
pub fn draw_box(content: &str, spec: &BoxSpec) -> String {
    render_box(content, spec, current_size())
}

/// Render `content` inside a box.
///
/// Output has exactly `2 + 2 * padding + content_rows` lines, and every line
/// has the same visible width (the resolved box width plus margin). Padding
/// is clamped to what fits and rows that still overflow are cut.
pub fn render_box(content: &str, spec: &BoxSpec, size: TerminalSize) -> String {
    let box_width = spec.resolved_width(size);
    let padding = spec.effective_padding(box_width);
    let content_width = spec.content_width(box_width);
    let glyphs = spec.border.glyphs();
    let full_color = spec.full_color();
    let inner = box_width - 2;

    let mut rows = content_rows(content, content_width);
    if let Some(height) = spec.height {
        let target = height.saturating_sub(2 + padding * 2);
        rows.resize(target, String::new());
    }

    let mut lines = Vec::with_capacity(rows.len() + 2 + padding * 2);
    lines.push(top_border(spec, box_width, &full_color));

    let empty_row = format!(
        "{}{}{}",
        glyphs.vertical,
        repeat(" ", inner),
        glyphs.vertical
    );
    for _ in 0..padding {
        lines.push(empty_row.clone());
    }

    let pad_str = repeat(" ", padding);
    for row in &rows {
        let gap = content_width.saturating_sub(visible_width(row));
        let (left, right) = match spec.align {
            Align::Left => (0, gap),
            Align::Right => (gap, 0),
            Align::Center => (gap / 2, gap - gap / 2),
        };
        lines.push(format!(
            "{v}{pad_str}{}{row}{full_color}{}{pad_str}{v}",
            repeat(" ", left),
            repeat(" ", right),
            v = glyphs.vertical,
        ));
    }

    for _ in 0..padding {
        lines.push(empty_row.clone());
    }
    lines.push(format!(
        "{}{}{}",
        glyphs.bottom_left,
        repeat(glyphs.horizontal, inner),
        glyphs.bottom_right
    ));

    let margin = repeat(" ", spec.margin);
    lines
        .iter()
        .map(|line| format!("{margin}{full_color}{line}{RESET}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Split content into rows, wrapping any line wider than `content_width`.
fn content_rows(content: &str, content_width: usize) -> Vec<String> {
    let mut rows = Vec::new();
    for line in content.split('\n') {
        if content_width > 0 && visible_width(line) > content_width {
            rows.extend(wrap(line, content_width));
        } else {
            rows.push(line.to_string());
        }
    }
    for row in rows.iter_mut() {
        if visible_width(row) > content_width {
            *row = truncate(row, content_width, "");
        }
    }
    rows
}

fn top_border(spec: &BoxSpec, box_width: usize, full_color: &str) -> String {
    let glyphs = spec.border.glyphs();
    let inner = box_width - 2;
    if spec.title.is_empty() {
        return format!(
            "{}{}{}",
            glyphs.top_left,
            repeat(glyphs.horizontal, inner),
            glyphs.top_right
        );
    }

    // Two columns go to the spaces around the title.
    let max_title = inner.saturating_sub(2);
    if max_title == 0 {
        return format!(
            "{}{}{}",
            glyphs.top_left,
            repeat(glyphs.horizontal, inner),
            glyphs.top_right
        );
    }
    let title = truncate(&spec.title, max_title, settings::ELLIPSIS);
    let label = format!(" {title} ");
    let remaining = inner.saturating_sub(visible_width(&label));

    match spec.title_align {
        Align::Left => format!(
            "{}{label}{full_color}{}{}",
            glyphs.top_left,
            repeat(glyphs.horizontal, remaining),
            glyphs.top_right
        ),
        Align::Right => format!(
            "{}{}{label}{full_color}{}",
            glyphs.top_left,
            repeat(glyphs.horizontal, remaining),
            glyphs.top_right
        ),
        Align::Center => {
            let left = remaining / 2;
            format!(
                "{}{}{label}{full_color}{}{}",
                glyphs.top_left,
                repeat(glyphs.horizontal, left),
                repeat(glyphs.horizontal, remaining - left),
                glyphs.top_right
            )
        }
    }
}

/// Wrap `content` in `levels` concentric centered boxes.
///
/// The innermost box is ten columns wider than the content; each outer level
/// adds `expand_width`. `colors[i]` styles level `i` (outermost first), with
/// `spec.color` as the fallback.
pub fn render_nested_box(
    content: &str,
    levels: usize,
    expand_width: usize,
    colors: &[String],
    spec: &BoxSpec,
    size: TerminalSize,
) -> String {
    let mut result = content.to_string();
    let mut width = 0usize;
    for level in (0..levels).rev() {
        width = if level == levels - 1 {
            measure(&result).width + settings::NESTED_BOX_EXTRA_WIDTH
        } else {
            width + expand_width
        };
        let color = colors
            .get(level)
            .filter(|c| !c.is_empty())
            .cloned()
            .unwrap_or_else(|| spec.color.clone());
        let level_spec = BoxSpec {
            width: Some(width),
            height: None,
            title: String::new(),
            align: Align::Center,
            color,
            margin: 0,
            ..spec.clone()
        };
        result = render_box(&result, &level_spec, size);
    }
    result
}
