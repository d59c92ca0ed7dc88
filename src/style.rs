//! ANSI SGR color and style codes.
//!
//! Codes are plain strings so they can be concatenated around content; the
//! layout engine treats them as zero-width.

use crossterm::style::Color;

pub const BLACK: &str = "\x1b[30m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const MAGENTA: &str = "\x1b[35m";
pub const CYAN: &str = "\x1b[36m";
pub const WHITE: &str = "\x1b[37m";

pub const BRIGHT_BLACK: &str = "\x1b[90m";
pub const BRIGHT_RED: &str = "\x1b[91m";
pub const BRIGHT_GREEN: &str = "\x1b[92m";
pub const BRIGHT_YELLOW: &str = "\x1b[93m";
pub const BRIGHT_BLUE: &str = "\x1b[94m";
pub const BRIGHT_MAGENTA: &str = "\x1b[95m";
pub const BRIGHT_CYAN: &str = "\x1b[96m";
pub const BRIGHT_WHITE: &str = "\x1b[97m";

pub const BG_BLACK: &str = "\x1b[40m";
pub const BG_RED: &str = "\x1b[41m";
pub const BG_GREEN: &str = "\x1b[42m";
pub const BG_YELLOW: &str = "\x1b[43m";
pub const BG_BLUE: &str = "\x1b[44m";
pub const BG_MAGENTA: &str = "\x1b[45m";
pub const BG_CYAN: &str = "\x1b[46m";
pub const BG_WHITE: &str = "\x1b[47m";

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const ITALIC: &str = "\x1b[3m";
pub const UNDERLINE: &str = "\x1b[4m";
pub const BLINK: &str = "\x1b[5m";
pub const REVERSE: &str = "\x1b[7m";
pub const STRIKETHROUGH: &str = "\x1b[9m";

const NAMED_CODES: &[(&str, &str)] = &[
    ("black", BLACK),
    ("red", RED),
    ("green", GREEN),
    ("yellow", YELLOW),
    ("blue", BLUE),
    ("magenta", MAGENTA),
    ("cyan", CYAN),
    ("white", WHITE),
    ("bright_black", BRIGHT_BLACK),
    ("bright_red", BRIGHT_RED),
    ("bright_green", BRIGHT_GREEN),
    ("bright_yellow", BRIGHT_YELLOW),
    ("bright_blue", BRIGHT_BLUE),
    ("bright_magenta", BRIGHT_MAGENTA),
    ("bright_cyan", BRIGHT_CYAN),
    ("bright_white", BRIGHT_WHITE),
    ("bg_black", BG_BLACK),
    ("bg_red", BG_RED),
    ("bg_green", BG_GREEN),
    ("bg_yellow", BG_YELLOW),
    ("bg_blue", BG_BLUE),
    ("bg_magenta", BG_MAGENTA),
    ("bg_cyan", BG_CYAN),
    ("bg_white", BG_WHITE),
    ("reset", RESET),
    ("bold", BOLD),
    ("dim", DIM),
    ("italic", ITALIC),
    ("underline", UNDERLINE),
    ("blink", BLINK),
    ("reverse", REVERSE),
    ("strikethrough", STRIKETHROUGH),
];

/// Look up a code by symbolic name (`bright_green`, `bg_red`, `bold`, ...).
pub fn code_for_name(name: &str) -> Option<&'static str> {
    let normalized = name.trim().to_ascii_lowercase().replace(['-', ' '], "_");
    NAMED_CODES
        .iter()
        .find(|(key, _)| *key == normalized)
        .map(|(_, code)| *code)
}

/// Wrap `text` in `code` and a trailing reset.
pub fn colorize(text: &str, code: &str) -> String {
    format!("{code}{text}{RESET}")
}

/// Apply several codes at once.
pub fn style(text: &str, codes: &[&str]) -> String {
    format!("{}{text}{RESET}", codes.concat())
}

/// 24-bit foreground code.
pub fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{r};{g};{b}m")
}

/// 24-bit background code.
pub fn bg_rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[48;2;{r};{g};{b}m")
}

/// Color each character of `text` along a linear RGB ramp.
pub fn gradient(text: &str, from: (u8, u8, u8), to: (u8, u8, u8)) -> String {
    let chars: Vec<char> = text.chars().collect();
    let steps = chars.len().saturating_sub(1).max(1) as f32;
    let lerp = |a: u8, b: u8, t: f32| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    let mut out = String::new();
    for (idx, ch) in chars.iter().enumerate() {
        let t = idx as f32 / steps;
        out.push_str(&rgb(
            lerp(from.0, to.0, t),
            lerp(from.1, to.1, t),
            lerp(from.2, to.2, t),
        ));
        out.push(*ch);
        out.push_str(RESET);
    }
    out
}

/// SGR foreground code for a crossterm color.
pub fn fg_code(color: Color) -> String {
    sgr_code(color, false)
}

/// SGR background code for a crossterm color.
pub fn bg_code(color: Color) -> String {
    sgr_code(color, true)
}

fn sgr_code(color: Color, background: bool) -> String {
    let base = if background { 40 } else { 30 };
    let bright = if background { 100 } else { 90 };
    let extended = if background { 48 } else { 38 };
    let param = match color {
        Color::Reset => return if background { "\x1b[49m" } else { "\x1b[39m" }.to_string(),
        Color::Black => base,
        Color::DarkRed => base + 1,
        Color::DarkGreen => base + 2,
        Color::DarkYellow => base + 3,
        Color::DarkBlue => base + 4,
        Color::DarkMagenta => base + 5,
        Color::DarkCyan => base + 6,
        Color::Grey => base + 7,
        Color::DarkGrey => bright,
        Color::Red => bright + 1,
        Color::Green => bright + 2,
        Color::Yellow => bright + 3,
        Color::Blue => bright + 4,
        Color::Magenta => bright + 5,
        Color::Cyan => bright + 6,
        Color::White => bright + 7,
        Color::Rgb { r, g, b } => return format!("\x1b[{extended};2;{r};{g};{b}m"),
        Color::AnsiValue(value) => return format!("\x1b[{extended};5;{value}m"),
    };
    format!("\x1b[{param}m")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::text::strip_escapes;

    #[test]
    fn colorize_round_trips_through_strip() {
        for code in [RED, BRIGHT_GREEN, BG_BLUE, BOLD, &rgb(1, 2, 3)[..]] {
            assert_eq!(strip_escapes(&colorize("plain text", code)), "plain text");
        }
    }

    #[test]
    fn named_lookup_normalizes() {
        assert_eq!(code_for_name("Bright-Green"), Some(BRIGHT_GREEN));
        assert_eq!(code_for_name("bg_red"), Some(BG_RED));
        assert_eq!(code_for_name("chartreuse"), None);
    }

    #[test]
    fn crossterm_colors_map_to_classic_codes() {
        assert_eq!(fg_code(Color::DarkRed), RED);
        assert_eq!(fg_code(Color::Green), BRIGHT_GREEN);
        assert_eq!(bg_code(Color::Black), BG_BLACK);
        assert_eq!(fg_code(Color::Rgb { r: 9, g: 8, b: 7 }), "\x1b[38;2;9;8;7m");
    }

    #[test]
    fn gradient_keeps_text() {
        let out = gradient("abc", (0, 0, 0), (255, 255, 255));
        assert_eq!(strip_escapes(&out), "abc");
        assert!(out.starts_with(&rgb(0, 0, 0)));
    }
}
