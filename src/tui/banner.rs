//! Full-width banners framed by rules.

use crate::style::{BOLD, RESET};
use crate::terminal::{current_size, TerminalSize};
use crate::tui::align::{pad, repeat, truncate, Align};
use crate::tui::settings;
use crate::tui::text::visible_width;

/// Banner frame style. Unknown names resolve to `Simple`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BannerStyle {
    #[default]
    Simple,
    Double,
    Star,
}

impl BannerStyle {
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "double" => Self::Double,
            "star" => Self::Star,
            _ => Self::Simple,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Double => "double",
            Self::Star => "star",
        }
    }

    fn frame(self, width: usize) -> (String, String, &'static str) {
        match self {
            Self::Simple => (repeat("═", width), repeat("═", width), "║"),
            Self::Double => {
                let inner = repeat("═", width.saturating_sub(2));
                (format!("╔{inner}╗"), format!("╚{inner}╝"), "║")
            }
            Self::Star => (repeat("*", width), repeat("*", width), "*"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerSpec {
    pub style: BannerStyle,
    /// `None` uses `min(terminal - 4, 60)`.
    pub width: Option<usize>,
    pub padding: usize,
    /// Code applied to the text.
    pub color: String,
    /// Code applied to the frame.
    pub border_color: String,
    pub fill: char,
}

impl Default for BannerSpec {
    fn default() -> Self {
        Self {
            style: BannerStyle::Simple,
            width: None,
            padding: settings::DEFAULT_BANNER_PADDING,
            color: BOLD.to_string(),
            border_color: String::new(),
            fill: ' ',
        }
    }
}

impl BannerSpec {
    pub fn resolved_width(&self, size: TerminalSize) -> usize {
        match self.width {
            Some(width) if width > 0 => width,
            _ => size
                .width
                .saturating_sub(settings::BANNER_SIDE_RESERVE)
                .min(settings::BANNER_MAX_WIDTH),
        }
        .max(2)
    }
}

pub fn draw_banner(text: &str, spec: &BannerSpec) -> String {
    render_banner(text, spec, current_size())
}

/// Render a banner; every line is exactly the banner width.
///
/// Text lines wider than the space inside the frame are cut with `…`.
pub fn render_banner(text: &str, spec: &BannerSpec, size: TerminalSize) -> String {
    let width = spec.resolved_width(size);
    let (top, bottom, side) = spec.style.frame(width);
    let padding = spec.padding.min(width.saturating_sub(2) / 2);
    let inner = width.saturating_sub(2 + padding * 2);
    let fill: String = std::iter::repeat(spec.fill).take(padding).collect();
    let border = &spec.border_color;

    let mut lines = vec![format!("{border}{top}{RESET}")];
    for line in text.split('\n') {
        let line = if inner == 0 {
            String::new()
        } else if visible_width(line) > inner {
            truncate(line, inner, settings::ELLIPSIS)
        } else {
            line.to_string()
        };
        let styled = format!("{}{line}{RESET}", spec.color);
        let centered = pad(&styled, inner, ' ', Align::Center);
        lines.push(format!(
            "{border}{side}{fill}{centered}{border}{fill}{side}{RESET}"
        ));
    }
    lines.push(format!("{border}{bottom}{RESET}"));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::text::strip_escapes;

    fn plain(out: &str) -> Vec<String> {
        out.split('\n').map(|l| strip_escapes(l).into_owned()).collect()
    }

    #[test]
    fn simple_banner_layout() {
        let spec = BannerSpec {
            width: Some(10),
            ..BannerSpec::default()
        };
        assert_eq!(
            plain(&render_banner("Hi", &spec, TerminalSize::default())),
            vec!["══════════", "║   Hi   ║", "══════════"]
        );
    }

    #[test]
    fn double_and_star_frames() {
        let double = BannerSpec {
            width: Some(6),
            padding: 0,
            style: BannerStyle::Double,
            ..BannerSpec::default()
        };
        assert_eq!(
            plain(&render_banner("ab", &double, TerminalSize::default())),
            vec!["╔════╗", "║ ab ║", "╚════╝"]
        );
        let star = BannerSpec {
            style: BannerStyle::from_name("star"),
            ..double
        };
        assert_eq!(
            plain(&render_banner("ab", &star, TerminalSize::default())),
            vec!["******", "* ab *", "******"]
        );
    }

    #[test]
    fn default_width_tracks_terminal() {
        let spec = BannerSpec::default();
        assert_eq!(spec.resolved_width(TerminalSize::new(100, 24)), 60);
        assert_eq!(spec.resolved_width(TerminalSize::new(30, 24)), 26);
    }

    #[test]
    fn every_line_matches_banner_width() {
        let spec = BannerSpec::default();
        let out = render_banner(
            "short\na much longer line that will not fit in a narrow banner",
            &spec,
            TerminalSize::new(30, 24),
        );
        for line in out.split('\n') {
            assert_eq!(visible_width(line), 26);
        }
    }

    #[test]
    fn wide_padding_still_fits_width() {
        let spec = BannerSpec {
            width: Some(6),
            padding: 5,
            ..BannerSpec::default()
        };
        for line in plain(&render_banner("hello", &spec, TerminalSize::default())) {
            assert_eq!(visible_width(&line), 6);
        }
    }

    #[test]
    fn unknown_style_is_simple() {
        assert_eq!(BannerStyle::from_name("fancy"), BannerStyle::Simple);
    }
}
