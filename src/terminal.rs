//! Terminal environment: size queries, raw-mode lifetime, screen control.

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::QueueableCommand;
use std::io::{self, Write};

/// Fallback size used when the terminal cannot be queried.
pub const DEFAULT_SIZE: TerminalSize = TerminalSize {
    width: 80,
    height: 24,
};

/// Terminal dimensions in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalSize {
    pub width: usize,
    pub height: usize,
}

impl TerminalSize {
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }
}

impl Default for TerminalSize {
    fn default() -> Self {
        DEFAULT_SIZE
    }
}

/// Query the live terminal size, falling back to 80x24.
///
/// Not cached: every render asks again so resizes are picked up.
pub fn current_size() -> TerminalSize {
    match terminal::size() {
        Ok((cols, rows)) if cols > 0 && rows > 0 => TerminalSize::new(cols as usize, rows as usize),
        _ => DEFAULT_SIZE,
    }
}

/// Raw mode lifetime guard so terminal state is restored on any return path.
///
/// While held, the cursor is hidden; dropping the guard shows it again and
/// leaves raw mode.
pub struct RawModeGuard {
    _private: (),
}

impl RawModeGuard {
    /// Enable raw mode and return a guard that disables it on drop.
    pub fn acquire() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let guard = Self { _private: () };
        let mut out = io::stdout();
        out.queue(Hide)?;
        out.flush()?;
        tracing::debug!("raw mode acquired");
        Ok(guard)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let mut out = io::stdout();
        let _ = out.queue(Show);
        let _ = out.flush();
        let _ = terminal::disable_raw_mode();
        tracing::debug!("raw mode released");
    }
}

/// Clear the whole screen and home the cursor.
pub fn clear_screen<W: Write>(out: &mut W) -> io::Result<()> {
    out.queue(Clear(ClearType::All))?;
    out.queue(Clear(ClearType::Purge))?;
    out.queue(MoveTo(0, 0))?;
    Ok(())
}

/// Write a rendered frame while the terminal is in raw mode.
///
/// Raw mode disables output post-processing, so bare `\n` would not return
/// the carriage.
pub fn write_raw_frame<W: Write>(out: &mut W, frame: &str) -> io::Result<()> {
    for (idx, line) in frame.split('\n').enumerate() {
        if idx > 0 {
            out.write_all(b"\r\n")?;
        }
        out.write_all(line.as_bytes())?;
    }
    out.write_all(b"\r\n")?;
    out.flush()
}
