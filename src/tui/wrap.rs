//! Greedy word wrapping measured in visible width.

use crate::tui::text::{split_at_visible, visible_width};

/// Wrap one line so every produced line has visible width `<= max_width`.
///
/// Words are whitespace-delimited and joined with single spaces. A word wider
/// than `max_width` is hard-broken into full-width chunks; its last chunk
/// stays open so following words may join it. `max_width == 0` cannot wrap
/// anything, so the line comes back unchanged.
pub fn wrap(line: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return vec![line.to_string()];
    }

    let mut out = Vec::new();
    let mut current = String::new();
    let mut current_width = 0usize;

    for word in line.split_whitespace() {
        let word_width = visible_width(word);
        if current.is_empty() {
            current_width = start_line(&mut out, &mut current, word, word_width, max_width);
            continue;
        }
        if current_width + 1 + word_width <= max_width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
            continue;
        }
        out.push(std::mem::take(&mut current));
        current_width = start_line(&mut out, &mut current, word, word_width, max_width);
    }

    if !current.is_empty() || out.is_empty() {
        out.push(current);
    }
    out
}

/// Begin a fresh line with `word`, flushing full-width chunks of an
/// over-long word. Returns the visible width left in `current`.
fn start_line(
    out: &mut Vec<String>,
    current: &mut String,
    word: &str,
    word_width: usize,
    max_width: usize,
) -> usize {
    let mut rest = word;
    let mut rest_width = word_width;
    while rest_width > max_width {
        let (head, tail) = split_at_visible(rest, max_width);
        out.push(head.to_string());
        rest = tail;
        rest_width -= max_width;
    }
    current.push_str(rest);
    rest_width
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_at_word_boundaries() {
        assert_eq!(wrap("one two three", 7), vec!["one two", "three"]);
    }

    #[test]
    fn fits_on_one_line_when_wide_enough() {
        assert_eq!(wrap("one two", 7), vec!["one two"]);
    }

    #[test]
    fn hard_breaks_long_words_and_keeps_tail_open() {
        assert_eq!(wrap("superlongtoken", 5), vec!["super", "longt", "oken"]);
        assert_eq!(wrap("abcdefg hi", 5), vec!["abcde", "fg hi"]);
    }

    #[test]
    fn long_word_after_short_word_is_still_broken() {
        assert_eq!(wrap("a bcdefgh", 3), vec!["a", "bcd", "efg", "h"]);
    }

    #[test]
    fn zero_width_returns_line_unchanged() {
        assert_eq!(wrap("left as is", 0), vec!["left as is"]);
    }

    #[test]
    fn empty_input_yields_one_empty_line() {
        assert_eq!(wrap("", 10), vec![String::new()]);
        assert_eq!(wrap("   ", 10), vec![String::new()]);
    }

    #[test]
    fn colored_words_measure_by_visible_width() {
        let line = "\x1b[31mred\x1b[0m \x1b[32mgreen\x1b[0m";
        let wrapped = wrap(line, 9);
        assert_eq!(wrapped, vec![line.to_string()]);
        let wrapped = wrap(line, 5);
        assert_eq!(wrapped.len(), 2);
        assert!(wrapped.iter().all(|l| visible_width(l) <= 5));
    }

    #[test]
    fn exact_multiple_long_word_leaves_no_empty_line() {
        assert_eq!(wrap("abcdef", 3), vec!["abc", "def"]);
    }

    #[cfg(feature = "fuzz-tests")]
    mod prop_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn wrapped_lines_fit_and_keep_word_order(
                words in proptest::collection::vec(
                    proptest::string::string_regex("[a-z]{1,12}").expect("regex"),
                    0..20
                ),
                width in 1usize..30
            ) {
                let line = words.join(" ");
                let wrapped = wrap(&line, width);
                prop_assert!(wrapped.iter().all(|l| visible_width(l) <= width));
                let rejoined: String = wrapped.concat().chars().filter(|c| *c != ' ').collect();
                let original: String = words.concat();
                prop_assert_eq!(rejoined, original);
            }
        }
    }
}
