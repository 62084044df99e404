//! Application start-up: install detection, settings loading, window config.

use std::path::{Path, PathBuf};

use crate::settings::{Settings, SettingsResult};

/// File whose presence marks the editor's data directory.
pub const MEDIA_PROBE: &str = "media/sky.jpg";

pub const DEFAULT_WIDTH: u32 = 896;
pub const DEFAULT_HEIGHT: u32 = 520;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallLayout {
    /// Directory holding `media/`, if one was found.
    pub working_dir: Option<PathBuf>,
    pub installed: bool,
}

/// Looks for the data directory starting at `start`.
///
/// Checked in order: `start`, its parent (a build directory inside a
/// checkout), then `<parent>/share/nodeboxeditor` (an installed copy).
pub fn detect_install_mode(start: &Path) -> InstallLayout {
    if start.join(MEDIA_PROBE).exists() {
        return InstallLayout {
            working_dir: Some(start.to_path_buf()),
            installed: false,
        };
    }

    let parent = start.parent().unwrap_or(start);
    if parent.join(MEDIA_PROBE).exists() {
        return InstallLayout {
            working_dir: Some(parent.to_path_buf()),
            installed: false,
        };
    }

    let shared = parent.join("share").join("nodeboxeditor");
    if shared.join(MEDIA_PROBE).exists() {
        tracing::info!("Using installed data in {}", shared.display());
        return InstallLayout {
            working_dir: Some(shared),
            installed: true,
        };
    }

    tracing::warn!("Can't find the working directory!");
    InstallLayout {
        working_dir: None,
        installed: false,
    }
}

/// Location of the settings file for the given install mode.
pub fn config_path(installed: bool) -> PathBuf {
    if installed {
        dirs::config_dir()
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
            .unwrap_or_default()
            .join("nodeboxeditor.conf")
    } else {
        PathBuf::from("editor.conf")
    }
}

/// Defaults, then the install flag, then the file at `path`.
pub fn load_settings(installed: bool, path: &Path) -> SettingsResult<Settings> {
    let mut settings = Settings::default();
    settings.set("installed", installed);
    if settings.load(path)? {
        tracing::info!("Loaded settings from {}", path.display());
    }
    Ok(settings)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Driver {
    OpenGl,
    DirectX8,
    DirectX9,
    Software,
}

impl Driver {
    /// Unknown names fall back to OpenGL.
    pub fn from_name(name: &str) -> Driver {
        match name.trim().to_ascii_lowercase().as_str() {
            "directx8" => Driver::DirectX8,
            "directx9" => Driver::DirectX9,
            "software" => Driver::Software,
            _ => Driver::OpenGl,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowConfig {
    pub driver: Driver,
    pub width: u32,
    pub height: u32,
    pub fullscreen: bool,
    pub vsync: bool,
}

impl WindowConfig {
    pub fn from_settings(settings: &Settings) -> Self {
        let size = |key: &str, fallback: u32| match u32::try_from(settings.get_int(key)) {
            Ok(value) if value >= 1 => value,
            _ => fallback,
        };

        let config = Self {
            driver: Driver::from_name(settings.get("driver")),
            width: size("width", DEFAULT_WIDTH),
            height: size("height", DEFAULT_HEIGHT),
            fullscreen: settings.get_bool("fullscreen"),
            vsync: settings.get_bool("vsync"),
        };

        if !config.vsync {
            tracing::warn!("You have disabled vsync. Expect major CPU usage!");
        }
        config
    }
}
