//! Progress bars, spinner frames and step indicators.
//!
//! Everything here renders a single frame as a string; callers own timing
//! and redraw.

use crate::style::RESET;
use crate::tui::align::{pad, repeat, Align};
use crate::tui::settings;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressSpec {
    /// Bar width in cells, brackets excluded.
    pub width: usize,
    pub fill: char,
    pub empty: char,
    pub show_percentage: bool,
    pub show_numbers: bool,
    pub color: String,
    pub empty_color: String,
    pub brackets: (String, String),
}

impl Default for ProgressSpec {
    fn default() -> Self {
        Self {
            width: settings::PROGRESS_DEFAULT_WIDTH,
            fill: settings::PROGRESS_FILL,
            empty: settings::PROGRESS_EMPTY,
            show_percentage: true,
            show_numbers: true,
            color: settings::COLOR_PROGRESS_FILL.to_string(),
            empty_color: settings::COLOR_PROGRESS_EMPTY.to_string(),
            brackets: (
                settings::PROGRESS_BRACKETS.0.to_string(),
                settings::PROGRESS_BRACKETS.1.to_string(),
            ),
        }
    }
}

/// Percentage complete, clamped to `0..=100`. A zero total counts as 0%.
pub fn percentage(current: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (current as f64 / total as f64 * 100.0).clamp(0.0, 100.0)
}

/// Render `[████░░░░] 50.0% (5/10)`.
pub fn progress_bar(current: u64, total: u64, spec: &ProgressSpec) -> String {
    let pct = percentage(current, total);
    let filled = ((pct / 100.0) * spec.width as f64).floor() as usize;
    let filled = filled.min(spec.width);
    let empty = spec.width - filled;
    let run = |c: char, n: usize| std::iter::repeat(c).take(n).collect::<String>();

    let mut bar = format!(
        "{}{}{}{RESET}{}{}{RESET}{}",
        spec.brackets.0,
        spec.color,
        run(spec.fill, filled),
        spec.empty_color,
        run(spec.empty, empty),
        spec.brackets.1,
    );
    if spec.show_percentage {
        bar.push_str(&format!(" {pct:.1}%"));
    }
    if spec.show_numbers {
        bar.push_str(&format!(" ({current}/{total})"));
    }
    bar
}

/// Spinner animation set. Unknown names resolve to `Dots`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SpinnerStyle {
    #[default]
    Dots,
    Line,
    Arrow,
    Bounce,
    Pulse,
}

impl SpinnerStyle {
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "line" => Self::Line,
            "arrow" => Self::Arrow,
            "bounce" => Self::Bounce,
            "pulse" => Self::Pulse,
            _ => Self::Dots,
        }
    }

    pub fn frames(self) -> &'static [&'static str] {
        match self {
            Self::Dots => settings::SPINNER_DOTS,
            Self::Line => settings::SPINNER_LINE,
            Self::Arrow => settings::SPINNER_ARROW,
            Self::Bounce => settings::SPINNER_BOUNCE,
            Self::Pulse => settings::SPINNER_PULSE,
        }
    }
}

/// One spinner frame, colored, followed by `text` when non-empty.
pub fn spinner_frame(frame: usize, style: SpinnerStyle, text: &str) -> String {
    let frames = style.frames();
    let glyph = frames[frame % frames.len()];
    if text.is_empty() {
        format!("{}{glyph}{RESET}", settings::COLOR_SPINNER)
    } else {
        format!("{}{glyph}{RESET} {text}", settings::COLOR_SPINNER)
    }
}

/// `text` followed by `frame % (max_dots + 1)` dots, space-padded to a stable
/// width.
pub fn loading_dots(frame: usize, text: &str, max_dots: usize) -> String {
    let dots = frame % (max_dots + 1);
    format!(
        "{}{text}{}{}{RESET}",
        settings::COLOR_LOADING,
        repeat(".", dots),
        repeat(" ", max_dots - dots)
    )
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepSpec {
    pub show_labels: bool,
    pub vertical: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StepState {
    Completed,
    Current,
    Pending,
}

impl StepState {
    fn of(index: usize, current: usize) -> Self {
        match index.cmp(&current) {
            std::cmp::Ordering::Less => Self::Completed,
            std::cmp::Ordering::Equal => Self::Current,
            std::cmp::Ordering::Greater => Self::Pending,
        }
    }

    fn glyph(self) -> &'static str {
        match self {
            Self::Completed => settings::STEP_COMPLETED,
            Self::Current => settings::STEP_CURRENT,
            Self::Pending => settings::STEP_PENDING,
        }
    }

    fn color(self) -> &'static str {
        match self {
            Self::Completed => settings::COLOR_STEP_COMPLETED,
            Self::Current => settings::COLOR_STEP_CURRENT,
            Self::Pending => settings::COLOR_STEP_PENDING,
        }
    }

    fn marker(self) -> String {
        format!("{}{}{RESET}", self.color(), self.glyph())
    }
}

/// Render a step indicator: `✓──●──○` with labels below, or one step per line.
pub fn step_progress<S: AsRef<str>>(steps: &[S], current: usize, spec: &StepSpec) -> String {
    if spec.vertical {
        let mut lines = Vec::new();
        for (idx, step) in steps.iter().enumerate() {
            let state = StepState::of(idx, current);
            if spec.show_labels {
                lines.push(format!("{} {}", state.marker(), step.as_ref()));
            } else {
                lines.push(state.marker());
            }
            if !spec.show_labels && idx + 1 < steps.len() {
                lines.push(format!(
                    "{}{}{RESET}",
                    state.color(),
                    settings::STEP_VERTICAL_CONNECTOR
                ));
            }
        }
        return lines.join("\n");
    }

    let track = steps
        .iter()
        .enumerate()
        .map(|(idx, _)| StepState::of(idx, current).marker())
        .collect::<Vec<_>>()
        .join(repeat(settings::STEP_CONNECTOR, 2).as_str());
    if !spec.show_labels {
        return track;
    }
    let labels: String = steps
        .iter()
        .map(|step| {
            let short: String = step.as_ref().chars().take(settings::STEP_LABEL_MAX).collect();
            pad(&short, settings::STEP_LABEL_SLOT, ' ', Align::Left)
        })
        .collect();
    format!("{track}\n{}", labels.trim_end())
}
