//! Menu state algebra: pure types and the transition function, no I/O.

use serde::Serialize;

/// One menu entry. Plain strings convert into an enabled item whose value is
/// its text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub text: String,
    /// Reported on selection; falls back to `text` when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub prefix: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub suffix: String,
    pub disabled: bool,
}

impl MenuItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn is_enabled(&self) -> bool {
        !self.disabled
    }

    /// Selection value: explicit value if set and non-empty, else the text.
    pub fn value(&self) -> &str {
        match self.value.as_deref() {
            Some(value) if !value.is_empty() => value,
            _ => &self.text,
        }
    }
}

impl From<&str> for MenuItem {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for MenuItem {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

/// Decoded keyboard input the menu reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    Up,
    Down,
    Enter,
    /// A digit key, 1-based item number.
    Digit(u32),
    Exit,
    Interrupt,
}

/// Terminal states of the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOutcome {
    Confirmed(usize),
    Cancelled,
    /// Process interrupt. Callers end the process after restoring the terminal.
    Terminated,
}

/// Result of feeding one event to the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Still awaiting input; the frame must be redrawn.
    Redraw,
    /// Still awaiting input; nothing changed and no redraw is needed.
    Ignored,
    Done(MenuOutcome),
}

/// The single "awaiting input" state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuState {
    items: Vec<MenuItem>,
    selected: usize,
    allow_escape: bool,
}

impl MenuState {
    /// Start on the first enabled item, or 0 when every item is disabled.
    pub fn new(items: Vec<MenuItem>, allow_escape: bool) -> Self {
        let selected = items.iter().position(MenuItem::is_enabled).unwrap_or(0);
        Self {
            items,
            selected,
            allow_escape,
        }
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn allow_escape(&self) -> bool {
        self.allow_escape
    }

    pub fn into_items(self) -> Vec<MenuItem> {
        self.items
    }

    fn enabled(&self, index: usize) -> bool {
        self.items.get(index).is_some_and(MenuItem::is_enabled)
    }

    /// Apply one event.
    pub fn apply(&mut self, event: MenuEvent) -> Step {
        match event {
            MenuEvent::Up => {
                if let Some(idx) = (0..self.selected).rev().find(|&i| self.enabled(i)) {
                    self.selected = idx;
                }
                Step::Redraw
            }
            MenuEvent::Down => {
                if let Some(idx) = (self.selected + 1..self.items.len()).find(|&i| self.enabled(i)) {
                    self.selected = idx;
                }
                Step::Redraw
            }
            MenuEvent::Enter => {
                if self.enabled(self.selected) {
                    Step::Done(MenuOutcome::Confirmed(self.selected))
                } else {
                    Step::Ignored
                }
            }
            MenuEvent::Digit(digit) => {
                let Some(index) = (digit as usize).checked_sub(1) else {
                    return Step::Ignored;
                };
                if self.enabled(index) {
                    self.selected = index;
                    Step::Done(MenuOutcome::Confirmed(index))
                } else {
                    Step::Ignored
                }
            }
            MenuEvent::Exit => {
                if self.allow_escape {
                    Step::Done(MenuOutcome::Cancelled)
                } else {
                    Step::Ignored
                }
            }
            MenuEvent::Interrupt => Step::Done(MenuOutcome::Terminated),
        }
    }
}
