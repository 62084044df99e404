//! Collaborators the file dialog drives: the native picker and the GUI host.

use std::path::{Path, PathBuf};

use image::{ImageFormat, ImageResult, RgbaImage};

/// Native modal path selection. `None` means the user cancelled.
pub trait PathPicker {
    fn open_file(&mut self, title: &str, start: &Path, filters: &[String]) -> Option<PathBuf>;

    fn save_file(&mut self, title: &str, start: &Path, filters: &[String]) -> Option<PathBuf>;

    fn select_folder(&mut self, title: &str, start: &Path) -> Option<PathBuf>;
}

pub trait GuiHost {
    /// Modal message box.
    fn message_box(&mut self, title: &str, body: &str);

    /// Read-only text window, used for generated code.
    fn show_text(&mut self, title: &str, text: &str);

    /// Called after the live project was replaced, so views can reload.
    fn project_replaced(&mut self) {}

    /// Persists a decoded image. Written as PNG regardless of the name.
    fn write_image(&mut self, image: &RgbaImage, path: &Path) -> ImageResult<()> {
        image.save_with_format(path, ImageFormat::Png)
    }
}
