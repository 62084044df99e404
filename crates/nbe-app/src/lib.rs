//! Shared application layer for the node box editor.
//!
//! This crate holds what a front end needs around the format plugins:
//! settings, start-up detection, the editor session, and the file dialog
//! flows that move projects between the session and the disk.

pub mod bootstrap;
pub mod dialog;
pub mod error;
pub mod host;
pub mod messages;
pub mod paths;
pub mod session;
pub mod settings;

// Re-export key types for convenience
pub use bootstrap::{
    Driver, InstallLayout, WindowConfig, config_path, detect_install_mode, load_settings,
};
pub use dialog::{DialogFailure, DialogOutcome, FileDialog, TextureExport};
pub use error::{AppError, AppResult};
pub use host::{GuiHost, PathPicker};
pub use paths::{normalize_directory, save_load_directory};
pub use session::EditorSession;
pub use settings::{Settings, SettingsError, SettingsResult};
