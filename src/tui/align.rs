//! Padding, alignment and truncation measured in visible width.

use serde::{Deserialize, Serialize};

use crate::tui::text::{strip_escapes, visible_width};

/// Horizontal placement of text inside a wider slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

impl Align {
    /// Resolve an alignment by name; anything unrecognized is `Left`.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "center" | "centre" => Self::Center,
            "right" => Self::Right,
            _ => Self::Left,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

impl From<String> for Align {
    fn from(value: String) -> Self {
        Self::from_name(&value)
    }
}

impl From<Align> for String {
    fn from(value: Align) -> Self {
        value.name().to_string()
    }
}

/// Repeat `glyph` `count` times.
pub fn repeat(glyph: &str, count: usize) -> String {
    glyph.repeat(count)
}

/// Pad `text` with `fill` up to `width` visible columns. Never truncates.
///
/// Centered text gets `floor(padding / 2)` on the left and the remainder on
/// the right.
pub fn pad(text: &str, width: usize, fill: char, align: Align) -> String {
    let padding = width.saturating_sub(visible_width(text));
    if padding == 0 {
        return text.to_string();
    }
    let fill_run = |n: usize| std::iter::repeat(fill).take(n).collect::<String>();
    match align {
        Align::Left => format!("{text}{}", fill_run(padding)),
        Align::Right => format!("{}{text}", fill_run(padding)),
        Align::Center => {
            let left = padding / 2;
            format!("{}{text}{}", fill_run(left), fill_run(padding - left))
        }
    }
}

/// Truncate to `width` visible columns, appending `suffix` only when the
/// text is actually too wide.
///
/// The cut keeps `width - visible_width(suffix)` plain characters; styling
/// of the truncated text is dropped.
pub fn truncate(text: &str, width: usize, suffix: &str) -> String {
    if visible_width(text) <= width {
        return text.to_string();
    }
    let keep = width.saturating_sub(visible_width(suffix));
    let plain = strip_escapes(text);
    let mut out: String = plain.chars().take(keep).collect();
    out.push_str(suffix);
    out
}

/// Pad every line of a block to `width` with the given alignment.
pub fn align_block(text: &str, width: usize, align: Align) -> String {
    text.split('\n')
        .map(|line| pad(line, width, ' ', align))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Center every line of a block within `width` columns.
pub fn center_text(text: &str, width: usize) -> String {
    align_block(text, width, Align::Center)
}
