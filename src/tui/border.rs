//! Named border glyph sets.

use serde::{Deserialize, Serialize};

/// The six glyphs that draw a rectangular frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderGlyphs {
    pub top_left: &'static str,
    pub top_right: &'static str,
    pub bottom_left: &'static str,
    pub bottom_right: &'static str,
    pub horizontal: &'static str,
    pub vertical: &'static str,
}

const SINGLE: BorderGlyphs = BorderGlyphs {
    top_left: "┌",
    top_right: "┐",
    bottom_left: "└",
    bottom_right: "┘",
    horizontal: "─",
    vertical: "│",
};

const DOUBLE: BorderGlyphs = BorderGlyphs {
    top_left: "╔",
    top_right: "╗",
    bottom_left: "╚",
    bottom_right: "╝",
    horizontal: "═",
    vertical: "║",
};

const ROUNDED: BorderGlyphs = BorderGlyphs {
    top_left: "╭",
    top_right: "╮",
    bottom_left: "╰",
    bottom_right: "╯",
    horizontal: "─",
    vertical: "│",
};

const THICK: BorderGlyphs = BorderGlyphs {
    top_left: "┏",
    top_right: "┓",
    bottom_left: "┗",
    bottom_right: "┛",
    horizontal: "━",
    vertical: "┃",
};

/// Border style selector.
///
/// Deserializing an unknown name yields `Single` instead of an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BorderStyle {
    #[default]
    Single,
    Double,
    Rounded,
    Thick,
}

impl BorderStyle {
    pub const ALL: [BorderStyle; 4] = [Self::Single, Self::Double, Self::Rounded, Self::Thick];

    /// Look up a style by name, falling back to `Single`.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "double" => Self::Double,
            "rounded" => Self::Rounded,
            "thick" => Self::Thick,
            _ => Self::Single,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Double => "double",
            Self::Rounded => "rounded",
            Self::Thick => "thick",
        }
    }

    pub fn glyphs(self) -> &'static BorderGlyphs {
        match self {
            Self::Single => &SINGLE,
            Self::Double => &DOUBLE,
            Self::Rounded => &ROUNDED,
            Self::Thick => &THICK,
        }
    }
}

impl From<String> for BorderStyle {
    fn from(value: String) -> Self {
        Self::from_name(&value)
    }
}

impl From<BorderStyle> for String {
    fn from(value: BorderStyle) -> Self {
        value.name().to_string()
    }
}

/// Glyphs for a style name; unknown names silently get the single-line set.
pub fn glyphs_for(style_name: &str) -> &'static BorderGlyphs {
    BorderStyle::from_name(style_name).glyphs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_styles_resolve() {
        assert_eq!(glyphs_for("double").top_left, "╔");
        assert_eq!(glyphs_for("rounded").bottom_right, "╯");
        assert_eq!(glyphs_for("thick").horizontal, "━");
        assert_eq!(glyphs_for("single").vertical, "│");
    }

    #[test]
    fn unknown_style_falls_back_to_single() {
        assert_eq!(glyphs_for("dotted"), glyphs_for("single"));
        assert_eq!(glyphs_for(""), &SINGLE);
    }

    #[test]
    fn names_round_trip() {
        for style in BorderStyle::ALL {
            assert_eq!(BorderStyle::from_name(style.name()), style);
        }
    }

    #[test]
    fn every_glyph_is_one_column() {
        for style in BorderStyle::ALL {
            let g = style.glyphs();
            for glyph in [
                g.top_left,
                g.top_right,
                g.bottom_left,
                g.bottom_right,
                g.horizontal,
                g.vertical,
            ] {
                assert_eq!(glyph.chars().count(), 1);
            }
        }
    }
}
