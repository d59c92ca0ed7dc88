//! Escape-aware text metrics shared by every layout primitive.
//!
//! Layout math only ever looks at *visible* width: the number of code points
//! left after ANSI escape sequences are removed. The raw string, escapes
//! included, is what callers print.

use std::borrow::Cow;

const ESC: u8 = 0x1b;

/// One piece of a styled string: either an escape sequence or printable text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// A complete (or unterminated trailing) escape sequence.
    Escape(&'a str),
    /// A run of printable text with no escapes in it.
    Text(&'a str),
}

/// Iterator over the [`Segment`]s of a string.
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    source: &'a str,
    pos: usize,
}

/// Split `s` into alternating escape and text segments.
pub fn segments(s: &str) -> Segments<'_> {
    Segments { source: s, pos: 0 }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.source.as_bytes();
        if self.pos >= bytes.len() {
            return None;
        }
        let start = self.pos;
        if bytes[start] == ESC {
            let end = escape_end(bytes, start);
            self.pos = end;
            return Some(Segment::Escape(&self.source[start..end]));
        }
        // ESC is ASCII, so stopping on it never splits a UTF-8 sequence.
        let end = bytes[start..]
            .iter()
            .position(|b| *b == ESC)
            .map(|offset| start + offset)
            .unwrap_or(bytes.len());
        self.pos = end;
        Some(Segment::Text(&self.source[start..end]))
    }
}

/// Byte index just past the escape sequence that starts at `pos`.
fn escape_end(bytes: &[u8], pos: usize) -> usize {
    let next = pos + 1;
    if next >= bytes.len() {
        return bytes.len();
    }
    match bytes[next] {
        b'[' => csi_end(bytes, next + 1),
        b']' | b'P' | b'^' | b'_' => string_terminated_end(bytes, next + 1),
        // Two-byte escapes only swallow an ASCII final byte.
        b if b.is_ascii() => next + 1,
        _ => next,
    }
}

/// CSI: parameter bytes, intermediate bytes, then a final byte in 0x40..=0x7E.
fn csi_end(bytes: &[u8], pos: usize) -> usize {
    let mut i = pos;
    while i < bytes.len() {
        let b = bytes[i];
        if (0x40..=0x7e).contains(&b) {
            return i + 1;
        }
        if !(0x20..=0x3f).contains(&b) {
            return i;
        }
        i += 1;
    }
    bytes.len()
}

/// OSC/DCS/PM/APC: terminated by BEL or `ESC \`.
fn string_terminated_end(bytes: &[u8], pos: usize) -> usize {
    let mut i = pos;
    while i < bytes.len() {
        match bytes[i] {
            0x07 => return i + 1,
            ESC if bytes.get(i + 1) == Some(&b'\\') => return i + 2,
            _ => i += 1,
        }
    }
    bytes.len()
}

/// Remove every escape sequence, leaving printable characters untouched.
pub fn strip_escapes(s: &str) -> Cow<'_, str> {
    if !s.as_bytes().contains(&ESC) {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len());
    for segment in segments(s) {
        if let Segment::Text(text) = segment {
            out.push_str(text);
        }
    }
    Cow::Owned(out)
}

/// Visible width of a single line: code points excluding escape sequences.
pub fn visible_width(s: &str) -> usize {
    segments(s)
        .map(|segment| match segment {
            Segment::Text(text) => text.chars().count(),
            Segment::Escape(_) => 0,
        })
        .sum()
}

/// Dimensions of a (possibly multi-line) block of styled text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextMetrics {
    /// Widest visible line.
    pub width: usize,
    /// Number of lines.
    pub height: usize,
    /// Each line with escapes stripped.
    pub lines: Vec<String>,
}

/// Measure a block: split on `\n`, strip escapes per line, report the widest
/// line and the line count. The empty string measures as one empty line.
pub fn measure(block: &str) -> TextMetrics {
    let lines: Vec<String> = block
        .split('\n')
        .map(|line| strip_escapes(line).into_owned())
        .collect();
    let width = lines
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);
    TextMetrics {
        width,
        height: lines.len(),
        lines,
    }
}

/// Split a styled string after `count` visible characters.
///
/// Escape sequences are never cut: any escape encountered before the split
/// point stays in the head, the rest go to the tail.
pub fn split_at_visible(s: &str, count: usize) -> (&str, &str) {
    let mut seen = 0usize;
    let mut offset = 0usize;
    for segment in segments(s) {
        match segment {
            Segment::Escape(esc) => offset += esc.len(),
            Segment::Text(text) => {
                for (idx, _) in text.char_indices() {
                    if seen == count {
                        let at = offset + idx;
                        return (&s[..at], &s[at..]);
                    }
                    seen += 1;
                }
                offset += text.len();
            }
        }
    }
    (s, "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_borrows_when_no_escapes() {
        assert!(matches!(strip_escapes("plain"), Cow::Borrowed(_)));
        assert_eq!(strip_escapes("plain"), "plain");
    }

    #[test]
    fn strip_removes_sgr_and_truecolor() {
        assert_eq!(strip_escapes("\x1b[31mred\x1b[0m"), "red");
        assert_eq!(strip_escapes("\x1b[38;2;1;2;3mrgb\x1b[0m"), "rgb");
        assert_eq!(strip_escapes("\x1b[1m\x1b[92mbold\x1b[0m!"), "bold!");
    }

    #[test]
    fn strip_keeps_unicode_text() {
        assert_eq!(strip_escapes("\x1b[36m► Выход 🚪\x1b[0m"), "► Выход 🚪");
    }

    #[test]
    fn visible_width_ignores_escapes() {
        assert_eq!(visible_width("\x1b[2mabc\x1b[0m"), 3);
        assert_eq!(visible_width("╔══╗"), 4);
        assert_eq!(visible_width(""), 0);
    }

    #[test]
    fn escape_only_string_has_zero_width() {
        let m = measure("\x1b[31m\x1b[0m\x1b[1m");
        assert_eq!(m.width, 0);
        assert_eq!(m.height, 1);
    }

    #[test]
    fn measure_empty_is_one_line() {
        let m = measure("");
        assert_eq!(m.width, 0);
        assert_eq!(m.height, 1);
        assert_eq!(m.lines, vec![String::new()]);
    }

    #[test]
    fn measure_reports_widest_line() {
        let m = measure("ab\n\x1b[32mabcd\x1b[0m\nc");
        assert_eq!(m.width, 4);
        assert_eq!(m.height, 3);
        assert_eq!(m.lines[1], "abcd");
    }

    #[test]
    fn unterminated_escape_is_consumed() {
        assert_eq!(visible_width("ok\x1b[31"), 2);
    }

    #[test]
    fn split_at_visible_keeps_escapes_whole() {
        let (head, tail) = split_at_visible("\x1b[31mabcdef\x1b[0m", 2);
        assert_eq!(head, "\x1b[31mab");
        assert_eq!(tail, "cdef\x1b[0m");
    }

    #[test]
    fn split_at_visible_past_end_returns_all() {
        assert_eq!(split_at_visible("abc", 10), ("abc", ""));
        assert_eq!(split_at_visible("abc", 0), ("", "abc"));
    }

    #[cfg(feature = "fuzz-tests")]
    mod prop_tests {
        use super::*;
        use proptest::prelude::*;

        fn escape() -> impl Strategy<Value = String> {
            prop_oneof![
                (0u8..110).prop_map(|n| format!("\x1b[{n}m")),
                (0u8..255, 0u8..255, 0u8..255)
                    .prop_map(|(r, g, b)| format!("\x1b[38;2;{r};{g};{b}m")),
                Just("\x1b[2J".to_string()),
                Just("\x1b]0;title\x07".to_string()),
            ]
        }

        proptest! {
            #[test]
            fn escape_only_strings_have_zero_width(
                parts in proptest::collection::vec(escape(), 0..8)
            ) {
                let s = parts.concat();
                prop_assert_eq!(measure(&s).width, 0);
            }

            #[test]
            fn stripping_colorized_text_restores_it(
                text in proptest::string::string_regex("[ -~]{0,32}").expect("regex"),
                code in escape()
            ) {
                let colored = crate::style::colorize(&text, &code);
                prop_assert_eq!(strip_escapes(&colored), text.as_str());
            }
        }
    }
}
