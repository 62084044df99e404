//! Plain-text `key = value` settings store.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

pub type SettingsResult<T> = Result<T, SettingsError>;

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Failed to read settings file: {path}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write settings file: {path}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Values every session starts with, before the config file is applied.
pub const DEFAULTS: &[(&str, &str)] = &[
    ("snapping", "true"),
    ("limiting", "true"),
    ("driver", "opengl"),
    ("hide_sidebar", "false"),
    ("save_directory", ""),
    ("always_show_position_handle", "false"),
    ("vsync", "true"),
    ("use_sleep", "false"),
    ("fullscreen", "false"),
    ("width", "896"),
    ("height", "520"),
    ("installed", "false"),
    ("export_mod_name", "default"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    values: BTreeMap<String, String>,
}

impl Default for Settings {
    fn default() -> Self {
        let mut settings = Settings::empty();
        for (key, value) in DEFAULTS {
            settings.set(*key, *value);
        }
        settings
    }
}

impl Settings {
    pub fn empty() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// Value for `key`, or the empty string when unset.
    pub fn get(&self, key: &str) -> &str {
        self.values.get(key).map(String::as_str).unwrap_or("")
    }

    /// Integer value for `key`; unset or non-numeric values read as 0.
    pub fn get_int(&self, key: &str) -> i32 {
        self.get(key).trim().parse().unwrap_or(0)
    }

    pub fn get_bool(&self, key: &str) -> bool {
        matches!(
            self.get(key).trim().to_ascii_lowercase().as_str(),
            "true" | "1" | "yes" | "on"
        )
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl ToString) {
        self.values.insert(key.into(), value.to_string());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Applies the file at `path` on top of the current values.
    ///
    /// Returns `false` when the file does not exist; that is not an error.
    pub fn load(&mut self, path: &Path) -> SettingsResult<bool> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No settings file at {}", path.display());
                return Ok(false);
            }
            Err(e) => {
                return Err(SettingsError::Read {
                    path: path.to_path_buf(),
                    source: e,
                });
            }
        };

        self.apply(&content);
        Ok(true)
    }

    /// Applies `key = value` lines. Blank lines and `#` comments are ignored.
    pub fn apply(&mut self, content: &str) {
        for (number, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            match line.split_once('=') {
                Some((key, value)) if !key.trim().is_empty() => {
                    self.set(key.trim(), value.trim());
                }
                _ => {
                    tracing::warn!(line = number + 1, "Ignoring malformed settings line: {}", line);
                }
            }
        }
    }

    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for (key, value) in &self.values {
            let _ = writeln!(out, "{} = {}", key, value);
        }
        out
    }

    pub fn save(&self, path: &Path) -> SettingsResult<()> {
        std::fs::write(path, self.to_text()).map_err(|e| SettingsError::Write {
            path: path.to_path_buf(),
            source: e,
        })
    }
}
