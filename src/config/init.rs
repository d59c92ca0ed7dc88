//! `clige init`: write the commented template to the global config path.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::ConfigError;

use super::defaults::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_CONFIG_TEMPLATE};
use super::GlobalConfigInitResult;

/// Give up looking for a free backup name after this many numbered tries.
const MAX_BACKUP_SUFFIX: usize = 1000;

/// `$XDG_CONFIG_HOME/clige/clige.toml`, or the same under `~/.config`.
pub fn default_global_config_path() -> Option<PathBuf> {
    config_root_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Write the template to the global config path. See
/// [`initialize_config_at_path`].
pub fn initialize_default_global_config(
    force: bool,
) -> Result<GlobalConfigInitResult, ConfigError> {
    let path = default_global_config_path().ok_or_else(|| {
        ConfigError::Invalid("cannot locate a config directory for clige.toml".to_string())
    })?;
    initialize_config_at_path(&path, force)
}

/// Write the template to `path`.
///
/// An existing file is left alone unless `force` is set, in which case it is
/// copied to a timestamped `.bak` sibling before being replaced.
pub fn initialize_config_at_path(
    path: &Path,
    force: bool,
) -> Result<GlobalConfigInitResult, ConfigError> {
    let path_buf = path.to_path_buf();
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }

    if !path.exists() && write_if_absent(path)? {
        tracing::debug!(path = %path.display(), "config created");
        return Ok(GlobalConfigInitResult::Created { path: path_buf });
    }
    if !force {
        return Ok(GlobalConfigInitResult::AlreadyInitialized { path: path_buf });
    }

    let backup_path = timestamped_backup_path(path);
    fs::copy(path, &backup_path)?;
    fs::write(path, DEFAULT_CONFIG_TEMPLATE)?;
    tracing::debug!(path = %path.display(), backup = %backup_path.display(), "config overwritten");
    Ok(GlobalConfigInitResult::Overwritten {
        path: path_buf,
        backup_path,
    })
}

/// Create `path` with the template. `false` when someone else created it first.
fn write_if_absent(path: &Path) -> io::Result<bool> {
    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => return Ok(false),
        Err(e) => return Err(e),
    };
    file.write_all(DEFAULT_CONFIG_TEMPLATE.as_bytes())?;
    Ok(true)
}

/// `clige.toml.<unix-secs>.bak`, numbered when that name is taken.
fn timestamped_backup_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map_or_else(|| CONFIG_FILE_NAME.to_string(), |n| n.to_string_lossy().into_owned());
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();

    std::iter::once(format!("{name}.{secs}.bak"))
        .chain((1..MAX_BACKUP_SUFFIX).map(|n| format!("{name}.{secs}.{n}.bak")))
        .map(|candidate| path.with_file_name(candidate))
        .find(|candidate| !candidate.exists())
        .unwrap_or_else(|| path.with_file_name(format!("{name}.{secs}.{}.bak", std::process::id())))
}

/// Base directory holding `clige/`: a non-blank `XDG_CONFIG_HOME`, else
/// `~/.config`, else the platform config dir.
pub fn config_root_dir() -> Option<PathBuf> {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .map(|raw| raw.trim().to_string())
        .filter(|raw| !raw.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
        .or_else(dirs::config_dir)
}
