//! Default directories for file pickers.

use std::path::{MAIN_SEPARATOR, PathBuf};

/// Directory the open/save pickers start in.
///
/// A non-empty `save_directory` setting wins. Otherwise an installed editor
/// browses the user's home directory and a development checkout the working
/// directory.
pub fn save_load_directory(save_directory: &str, installed: bool) -> PathBuf {
    let configured = save_directory.trim();
    if !configured.is_empty() {
        return PathBuf::from(with_trailing_separator(configured));
    }

    if installed {
        dirs::home_dir().unwrap_or_default()
    } else {
        PathBuf::new()
    }
}

/// Trims `dir` and makes sure it ends in a path separator.
/// Returns `None` for a blank string.
pub fn normalize_directory(dir: &str) -> Option<String> {
    let dir = dir.trim();
    if dir.is_empty() {
        None
    } else {
        Some(with_trailing_separator(dir))
    }
}

fn with_trailing_separator(dir: &str) -> String {
    if dir.ends_with('/') || dir.ends_with(MAIN_SEPARATOR) {
        dir.to_string()
    } else {
        format!("{}{}", dir, MAIN_SEPARATOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_directory_wins() {
        let dir = save_load_directory("  /srv/models ", true);
        assert_eq!(dir, PathBuf::from(format!("/srv/models{}", MAIN_SEPARATOR)));
    }

    #[test]
    fn development_mode_uses_working_directory() {
        assert_eq!(save_load_directory("", false), PathBuf::new());
        assert_eq!(save_load_directory("   ", false), PathBuf::new());
    }

    #[test]
    fn normalize_adds_one_separator() {
        assert_eq!(normalize_directory(" out "), Some(format!("out{}", MAIN_SEPARATOR)));
        assert_eq!(normalize_directory("out/"), Some("out/".to_string()));
        assert_eq!(normalize_directory(" \t"), None);
    }
}
