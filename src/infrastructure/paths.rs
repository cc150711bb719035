//! Path utilities for configuration and data storage.
//!
//! Directories follow the XDG base directory layout: `$XDG_CONFIG_HOME/brewlog`
//! for `config.toml` and `$XDG_DATA_HOME/brewlog` for trace output, falling back
//! to `~/.config` and `~/.local/share` when the variables are unset or empty.

use std::env;
use std::path::PathBuf;

/// Directory name used under the XDG base directories.
const APP_DIR: &str = "brewlog";

/// Name of the configuration file inside [`config_dir`].
pub const CONFIG_FILE_NAME: &str = "config.toml";

fn env_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.is_empty())
}

fn resolve(xdg: Option<String>, home: Option<String>, fallback: &[&str]) -> Option<PathBuf> {
    let base = match xdg {
        Some(dir) => PathBuf::from(dir),
        None => fallback.iter().fold(PathBuf::from(home?), |path, part| path.join(part)),
    };
    Some(base.join(APP_DIR))
}

/// Returns the configuration directory, or `None` if neither
/// `XDG_CONFIG_HOME` nor `HOME` is set.
///
/// # Examples
///
/// ```
/// use brewlog::infrastructure::config_dir;
///
/// if let Some(dir) = config_dir() {
///     assert!(dir.ends_with("brewlog"));
/// }
/// ```
#[must_use]
pub fn config_dir() -> Option<PathBuf> {
    resolve(env_var("XDG_CONFIG_HOME"), env_var("HOME"), &[".config"])
}

/// Returns the path of `config.toml`.
#[must_use]
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE_NAME))
}

/// Returns the data directory used for trace files.
#[must_use]
pub fn data_dir() -> Option<PathBuf> {
    resolve(env_var("XDG_DATA_HOME"), env_var("HOME"), &[".local", "share"])
}

/// Expands a leading `~` to the home directory.
///
/// Paths without a tilde, or with no known home, are returned unchanged.
///
/// # Examples
///
/// ```
/// use brewlog::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/etc/brewlog.toml"), std::path::PathBuf::from("/etc/brewlog.toml"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    expand_with_home(path, env_var("HOME").as_deref())
}

fn expand_with_home(path: &str, home: Option<&str>) -> PathBuf {
    match (path, home) {
        ("~", Some(home)) => PathBuf::from(home),
        (path, Some(home)) if path.starts_with("~/") => PathBuf::from(home).join(&path[2..]),
        (path, _) => PathBuf::from(path),
    }
}
