//! Shared test fixtures: a temp-dir fixture and scripted menu input.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::tui::menu::{KeyBindings, ScriptedKeys};

static TEST_DIR_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Temporary directory fixture with best-effort cleanup.
#[derive(Debug)]
pub struct TestTempDir {
    path: PathBuf,
}

impl TestTempDir {
    /// Create a unique temporary directory with a readable prefix.
    pub fn new(prefix: &str) -> Self {
        let suffix = TEST_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        let dir = std::env::temp_dir().join(format!("clige-{prefix}-{millis}-{suffix}"));
        fs::create_dir_all(&dir).expect("failed to create temporary fixture directory");
        Self { path: dir }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Build a child path under the fixture root.
    pub fn child(&self, relative: &str) -> PathBuf {
        self.path.join(relative)
    }

    /// Write UTF-8 text to a child path, creating parent directories as needed.
    pub fn write_text(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.child(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent directories for fixture");
        }
        fs::write(&path, content).expect("failed to write fixture file");
        path
    }
}

impl Drop for TestTempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

/// Key source replaying raw terminal tokens with the default bindings.
pub fn scripted_keys(tokens: &[&str]) -> ScriptedKeys {
    ScriptedKeys::from_tokens(KeyBindings::default(), tokens)
}

pub const KEY_UP: &str = "\x1b[A";
pub const KEY_DOWN: &str = "\x1b[B";
pub const KEY_ENTER: &str = "\r";
pub const KEY_CTRL_C: &str = "\x03";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::menu::{KeySource, MenuEvent};

    #[test]
    fn temp_dir_fixture_writes_and_resolves_paths() {
        let fixture = TestTempDir::new("fixture");
        let file = fixture.write_text("nested/file.txt", "hello");
        assert_eq!(fs::read_to_string(file).unwrap(), "hello");
        assert!(fixture.path().exists());
    }

    #[test]
    fn scripted_keys_decode_tokens() {
        let mut keys = scripted_keys(&[KEY_DOWN, "zz", KEY_ENTER, KEY_CTRL_C]);
        assert_eq!(keys.next_event().unwrap(), Some(MenuEvent::Down));
        assert_eq!(keys.next_event().unwrap(), Some(MenuEvent::Enter));
        assert_eq!(keys.next_event().unwrap(), Some(MenuEvent::Interrupt));
        assert_eq!(keys.next_event().unwrap(), None);
    }
}
