//! Interactive menu loop: key sources, raw-mode lifetime and the line-based
//! fallback prompt.

use std::collections::VecDeque;
use std::io::{self, BufRead, IsTerminal, Write};

use crossterm::event::{self, Event};
use serde::Serialize;

use super::keys::KeyBindings;
use super::render::{render_frame, render_menu, MenuOptions};
use super::state::{MenuEvent, MenuItem, MenuOutcome, MenuState, Step};
use crate::style::{DIM, RESET};
use crate::terminal::{clear_screen, current_size, write_raw_frame, RawModeGuard, TerminalSize};
use crate::tui::settings;

/// Exit status used when a menu is interrupted.
pub const INTERRUPT_EXIT_CODE: i32 = 130;

/// Anything that yields decoded menu events.
pub trait KeySource {
    /// Block until the next menu event. `Ok(None)` means input is exhausted.
    fn next_event(&mut self) -> io::Result<Option<MenuEvent>>;
}

/// Reads key events from the terminal through crossterm.
#[derive(Debug, Clone, Copy, Default)]
pub struct CrosstermKeys {
    bindings: KeyBindings,
}

impl CrosstermKeys {
    pub fn new(bindings: KeyBindings) -> Self {
        Self { bindings }
    }
}

impl KeySource for CrosstermKeys {
    fn next_event(&mut self) -> io::Result<Option<MenuEvent>> {
        loop {
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if let Some(menu_event) = self.bindings.map_key(key) {
                return Ok(Some(menu_event));
            }
        }
    }
}

/// Replays a fixed sequence of raw input tokens.
#[derive(Debug, Clone, Default)]
pub struct ScriptedKeys {
    events: VecDeque<MenuEvent>,
}

impl ScriptedKeys {
    /// Decode `tokens` with `bindings`; tokens that map to nothing are dropped.
    pub fn from_tokens<S: AsRef<str>>(bindings: KeyBindings, tokens: &[S]) -> Self {
        Self {
            events: tokens
                .iter()
                .filter_map(|t| bindings.decode_token(t.as_ref()))
                .collect(),
        }
    }

    pub fn from_events(events: impl IntoIterator<Item = MenuEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }
}

impl KeySource for ScriptedKeys {
    fn next_event(&mut self) -> io::Result<Option<MenuEvent>> {
        Ok(self.events.pop_front())
    }
}

/// A confirmed choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub index: usize,
    pub item: MenuItem,
    pub value: String,
}

impl Selection {
    fn from_state(state: &MenuState, index: usize) -> Option<Self> {
        let item = state.items().get(index)?.clone();
        Some(Self {
            index,
            value: item.value().to_string(),
            item,
        })
    }
}

/// How a menu run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuResult {
    Selected(Selection),
    Cancelled,
    Terminated,
}

/// Feed events into `state` until it reaches a terminal state, redrawing
/// after every transition that asks for it.
///
/// `size` is called once per frame so terminal resizes are honored.
pub fn drive<K, W, F>(
    state: &mut MenuState,
    opts: &MenuOptions,
    keys: &mut K,
    out: &mut W,
    mut size: F,
) -> io::Result<MenuOutcome>
where
    K: KeySource,
    W: Write,
    F: FnMut() -> TerminalSize,
{
    draw(state, opts, out, size())?;
    loop {
        let Some(event) = keys.next_event()? else {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "key input ended before the menu finished",
            ));
        };
        let step = state.apply(event);
        tracing::trace!(?event, ?step, selected = state.selected(), "menu transition");
        match step {
            Step::Redraw => draw(state, opts, out, size())?,
            Step::Ignored => {}
            Step::Done(outcome) => {
                tracing::debug!(?outcome, "menu finished");
                return Ok(outcome);
            }
        }
    }
}

fn draw<W: Write>(state: &MenuState, opts: &MenuOptions, out: &mut W, size: TerminalSize) -> io::Result<()> {
    if opts.clear_screen {
        clear_screen(out)?;
    }
    write_raw_frame(out, &render_frame(state, opts, size))
}

/// Run a menu against any key source and writer.
pub fn run_with<K, W, F>(
    items: Vec<MenuItem>,
    opts: &MenuOptions,
    keys: &mut K,
    out: &mut W,
    size: F,
) -> io::Result<MenuResult>
where
    K: KeySource,
    W: Write,
    F: FnMut() -> TerminalSize,
{
    let mut state = MenuState::new(items, opts.allow_escape);
    let outcome = drive(&mut state, opts, keys, out, size)?;
    Ok(match outcome {
        MenuOutcome::Confirmed(index) => match Selection::from_state(&state, index) {
            Some(selection) => MenuResult::Selected(selection),
            None => MenuResult::Cancelled,
        },
        MenuOutcome::Cancelled => MenuResult::Cancelled,
        MenuOutcome::Terminated => MenuResult::Terminated,
    })
}

/// Run a menu on the real terminal.
///
/// Raw mode is held for the whole loop and released before this returns on
/// every path, including errors.
pub fn run_interactive(items: Vec<MenuItem>, opts: &MenuOptions) -> io::Result<MenuResult> {
    let _guard = RawModeGuard::acquire()?;
    let mut keys = CrosstermKeys::new(KeyBindings::new(opts.exit_key));
    let mut stdout = io::stdout();
    run_with(items, opts, &mut keys, &mut stdout, current_size)
}

/// Show a menu and return the selection, or `None` when cancelled.
///
/// Falls back to [`simple_prompt`] when stdin is not a terminal. An interrupt
/// ends the process with status 130 once the terminal has been restored.
pub fn run_menu(items: Vec<MenuItem>, opts: &MenuOptions) -> io::Result<Option<Selection>> {
    if !io::stdin().is_terminal() {
        let stdin = io::stdin();
        return simple_prompt(&items, opts, &mut stdin.lock(), &mut io::stdout());
    }
    match run_interactive(items, opts)? {
        MenuResult::Selected(selection) => Ok(Some(selection)),
        MenuResult::Cancelled => Ok(None),
        MenuResult::Terminated => {
            tracing::debug!("menu interrupted, exiting");
            std::process::exit(INTERRUPT_EXIT_CODE)
        }
    }
}

/// Line-based menu: print the options, read a number, repeat until the
/// choice is valid and enabled. Returns `None` at end of input.
pub fn simple_prompt<R, W>(
    items: &[MenuItem],
    opts: &MenuOptions,
    input: &mut R,
    out: &mut W,
) -> io::Result<Option<Selection>>
where
    R: BufRead,
    W: Write,
{
    let state = MenuState::new(items.to_vec(), opts.allow_escape);
    loop {
        writeln!(out, "{}", render_menu(items, state.selected(), opts, current_size()))?;
        writeln!(out, "\n{DIM}{}{RESET} ", settings::MENU_PROMPT_NUMBER)?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let choice = line.trim().parse::<usize>().ok().filter(|n| (1..=items.len()).contains(n));
        let Some(number) = choice else {
            writeln!(out, "{}{}{RESET}", settings::COLOR_PROMPT_ERROR, settings::MENU_INVALID_CHOICE)?;
            continue;
        };
        let index = number - 1;
        if items[index].disabled {
            writeln!(out, "{}{}{RESET}", settings::COLOR_PROMPT_ERROR, settings::MENU_DISABLED_CHOICE)?;
            continue;
        }
        return Ok(Selection::from_state(&state, index));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testsupport::{scripted_keys, KEY_CTRL_C, KEY_DOWN, KEY_ENTER, KEY_UP};

    fn items() -> Vec<MenuItem> {
        vec![
            MenuItem::new("A"),
            MenuItem::new("B").disabled(true),
            MenuItem::new("C").with_value("c-value"),
        ]
    }

    fn fixed() -> TerminalSize {
        TerminalSize::new(60, 20)
    }

    #[test]
    fn scripted_navigation_confirms_third_item() {
        let mut keys = scripted_keys(&[KEY_DOWN, KEY_ENTER]);
        let mut out = Vec::new();
        let result = run_with(items(), &MenuOptions::default(), &mut keys, &mut out, fixed)
            .expect("menu run");
        let MenuResult::Selected(selection) = result else {
            panic!("expected selection, got {result:?}");
        };
        assert_eq!(selection.index, 2);
        assert_eq!(selection.value, "c-value");
    }

    #[test]
    fn redraws_once_per_navigation_step() {
        let opts = MenuOptions {
            clear_screen: true,
            ..MenuOptions::default()
        };
        let mut keys = scripted_keys(&[KEY_DOWN, "2", KEY_UP, "q"]);
        let mut out = Vec::new();
        let result = run_with(items(), &opts, &mut keys, &mut out, fixed).expect("menu run");
        assert_eq!(result, MenuResult::Cancelled);
        let text = String::from_utf8(out).expect("utf8");
        assert_eq!(text.matches("\x1b[2J").count(), 3);
    }

    #[test]
    fn interrupt_terminates() {
        let mut keys = scripted_keys(&[KEY_CTRL_C]);
        let mut out = Vec::new();
        let result = run_with(items(), &MenuOptions::default(), &mut keys, &mut out, fixed)
            .expect("menu run");
        assert_eq!(result, MenuResult::Terminated);
    }

    #[test]
    fn exhausted_input_is_an_error() {
        let mut keys = ScriptedKeys::default();
        let mut out = Vec::new();
        let err = run_with(items(), &MenuOptions::default(), &mut keys, &mut out, fixed)
            .expect_err("no input");
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn simple_prompt_retries_until_valid() {
        let mut input = io::Cursor::new("x\n2\n9\n3\n");
        let mut out = Vec::new();
        let selection = simple_prompt(&items(), &MenuOptions::default(), &mut input, &mut out)
            .expect("prompt")
            .expect("selection");
        assert_eq!(selection.index, 2);
        let text = String::from_utf8(out).expect("utf8");
        assert_eq!(text.matches(settings::MENU_INVALID_CHOICE).count(), 2);
        assert_eq!(text.matches(settings::MENU_DISABLED_CHOICE).count(), 1);
    }

    #[test]
    fn simple_prompt_eof_returns_none() {
        let mut input = io::Cursor::new("");
        let mut out = Vec::new();
        let result = simple_prompt(&items(), &MenuOptions::default(), &mut input, &mut out)
            .expect("prompt");
        assert_eq!(result, None);
    }
}
