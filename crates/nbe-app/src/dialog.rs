//! Open, save, import and export flows.
//!
//! Each public operation runs one pass of pick path, resolve format,
//! execute, report. The format plugin is owned by the operation and dropped
//! when it returns, whichever branch it returns from. Nothing is retried;
//! every failure is shown to the user once and ends the operation.

use std::path::{Component, Path, PathBuf};

use nbe_format::{
    ErrorCode, FileFormat, FormatError, FormatResolver, FormatType, with_default_extension,
};

use crate::host::{GuiHost, PathPicker};
use crate::messages::{self, CODE_TITLE, NO_FORMAT, OPEN_TITLE, SAVE_TITLE, TEXTURES_TITLE};
use crate::paths::normalize_directory;
use crate::session::EditorSession;

#[derive(Debug)]
pub enum DialogFailure {
    /// No plugin claims the file's extension.
    UnknownFormat(PathBuf),
    Format(FormatError),
    Directory {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[derive(Debug)]
pub enum DialogOutcome {
    /// The user dismissed the picker; nothing was read or written.
    Cancelled,
    Completed,
    Failed(DialogFailure),
}

impl DialogOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, DialogOutcome::Completed)
    }

    pub fn error_code(&self) -> Option<ErrorCode> {
        match self {
            DialogOutcome::Failed(DialogFailure::Format(err)) => Some(err.code()),
            _ => None,
        }
    }
}

/// What a texture export did with each image.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextureExport {
    pub directory: PathBuf,
    pub exported: Vec<PathBuf>,
    /// Images without decoded data.
    pub skipped: Vec<String>,
    /// Images the host failed to write, with the reason.
    pub failed: Vec<(String, String)>,
}

pub struct FileDialog<'a> {
    session: &'a mut EditorSession,
    resolver: &'a dyn FormatResolver,
    picker: &'a mut dyn PathPicker,
    host: &'a mut dyn GuiHost,
}

impl<'a> FileDialog<'a> {
    pub fn new(
        session: &'a mut EditorSession,
        resolver: &'a dyn FormatResolver,
        picker: &'a mut dyn PathPicker,
        host: &'a mut dyn GuiHost,
    ) -> Self {
        Self {
            session,
            resolver,
            picker,
            host,
        }
    }

    /// Replaces the live project with a file chosen by the user.
    pub fn open_project(&mut self) -> DialogOutcome {
        let start = self.session.browse_directory();
        let filters = [FormatType::Nbe.filter()];
        let Some(path) = picked(self.picker.open_file("Open Project", &start, &filters)) else {
            return DialogOutcome::Cancelled;
        };

        let Some(format) = self.resolver.from_ext(&path) else {
            return self.unresolved(path);
        };
        self.load_with(format.as_ref(), &path)
    }

    /// Merges a file chosen by the user into the live project.
    pub fn import_project(&mut self) -> DialogOutcome {
        let start = self.session.browse_directory();
        let filters = [FormatType::Nbe.filter()];
        let Some(path) = picked(self.picker.open_file("Import Nodes", &start, &filters)) else {
            return DialogOutcome::Cancelled;
        };

        let Some(format) = self.resolver.from_ext(&path) else {
            return self.unresolved(path);
        };
        self.import_with(format.as_ref(), &path)
    }

    /// Saves the live project in the native format.
    pub fn save_project(&mut self) -> DialogOutcome {
        let start = self.session.browse_directory();
        let filters = [FormatType::Nbe.filter()];
        let Some(file) = picked(self.picker.save_file("Save Project", &start, &filters)) else {
            return DialogOutcome::Cancelled;
        };

        let writer = self.resolver.from_type(FormatType::Nbe);
        self.save_with(writer.as_ref(), &file)
    }

    /// Writes the live project with the plugin for `ty`.
    pub fn export(&mut self, ty: FormatType) -> DialogOutcome {
        let start = self.session.browse_directory();
        let filters = [ty.filter()];
        let Some(file) = picked(self.picker.save_file("Export Project", &start, &filters)) else {
            return DialogOutcome::Cancelled;
        };

        let writer = self.resolver.from_type(ty);
        self.save_with(writer.as_ref(), &file)
    }

    /// Writes every decoded image of the project into a chosen folder.
    pub fn export_textures(&mut self) -> DialogOutcome {
        let start = self.session.browse_directory();
        let Some(dir) = self.picker.select_folder("Select Folder", &start) else {
            return DialogOutcome::Cancelled;
        };
        let Some(dir) = normalize_directory(&dir.to_string_lossy()) else {
            return DialogOutcome::Cancelled;
        };

        match self.export_textures_to(Path::new(&dir)) {
            Ok(_) => DialogOutcome::Completed,
            Err(failure) => DialogOutcome::Failed(failure),
        }
    }

    /// Creates `dir` if needed and writes the images into it.
    ///
    /// Images without decoded data and images the host fails to write are
    /// skipped; the rest of the batch still goes out.
    pub fn export_textures_to(&mut self, dir: &Path) -> Result<TextureExport, DialogFailure> {
        tracing::info!("Exporting images to {}", dir.display());

        if let Err(source) = std::fs::create_dir_all(dir) {
            tracing::warn!("Failed to create {}: {}", dir.display(), source);
            self.host.message_box(TEXTURES_TITLE, messages::NO_DIRECTORY);
            return Err(DialogFailure::Directory {
                path: dir.to_path_buf(),
                source,
            });
        }

        let mut report = TextureExport {
            directory: dir.to_path_buf(),
            ..Default::default()
        };

        for image in self.session.project.media.images() {
            let Some(bitmap) = image.get() else {
                tracing::warn!("Image {} has no decoded data, skipping", image.name);
                report.skipped.push(image.name.clone());
                continue;
            };

            let Some(file_name) = image_file_name(&image.name) else {
                tracing::warn!("Image name {:?} is not a plain file name, skipping", image.name);
                report
                    .failed
                    .push((image.name.clone(), "not a plain file name".to_string()));
                continue;
            };

            let target = dir.join(file_name);
            match self.host.write_image(bitmap, &target) {
                Ok(()) => report.exported.push(target),
                Err(e) => {
                    tracing::warn!("Failed to write {}: {}", target.display(), e);
                    report.failed.push((image.name.clone(), e.to_string()));
                }
            }
        }

        tracing::info!(
            exported = report.exported.len(),
            skipped = report.skipped.len(),
            failed = report.failed.len(),
            "Texture export finished"
        );
        Ok(report)
    }

    /// In-app open dialog: a format picked from a list and a typed file name,
    /// relative to the browse directory.
    pub fn open_named(&mut self, ty: FormatType, name: &str) -> DialogOutcome {
        let format = self.resolver.from_type(ty);
        let Some(path) = self.named_path(format.as_ref(), name) else {
            return DialogOutcome::Cancelled;
        };
        self.load_with(format.as_ref(), &path)
    }

    /// In-app import dialog; see [`FileDialog::open_named`].
    pub fn import_named(&mut self, ty: FormatType, name: &str) -> DialogOutcome {
        let format = self.resolver.from_type(ty);
        let Some(path) = self.named_path(format.as_ref(), name) else {
            return DialogOutcome::Cancelled;
        };
        self.import_with(format.as_ref(), &path)
    }

    /// Shows the project rendered by `ty` in a text window.
    pub fn show_code(&mut self, ty: FormatType) -> DialogOutcome {
        let writer = self.resolver.from_type(ty);
        match writer.as_string(&self.session.project) {
            Ok(text) => {
                self.host.show_text("Code Window", &text);
                DialogOutcome::Completed
            }
            Err(err) => {
                tracing::warn!("Code generation failed: {}", err);
                self.host.message_box(CODE_TITLE, messages::UNKNOWN_REASON);
                DialogOutcome::Failed(DialogFailure::Format(err))
            }
        }
    }

    fn named_path(&self, format: &dyn FileFormat, name: &str) -> Option<PathBuf> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let file = with_default_extension(name, format.extension());
        Some(self.session.browse_directory().join(file))
    }

    fn load_with(&mut self, format: &dyn FileFormat, path: &Path) -> DialogOutcome {
        tracing::info!("Reading from {}", path.display());
        match format.load(path) {
            Ok(project) => {
                self.session.replace_project(project);
                self.host.project_replaced();
                DialogOutcome::Completed
            }
            Err(err) => self.read_failed(err),
        }
    }

    fn import_with(&mut self, format: &dyn FileFormat, path: &Path) -> DialogOutcome {
        tracing::info!("Importing from {}", path.display());
        match format.import_into(path, &mut self.session.project) {
            Ok(()) => {
                self.session.project.remesh();
                DialogOutcome::Completed
            }
            Err(err) => self.read_failed(err),
        }
    }

    fn save_with(&mut self, writer: &dyn FileFormat, file: &Path) -> DialogOutcome {
        let target = PathBuf::from(with_default_extension(
            &file.to_string_lossy(),
            writer.extension(),
        ));
        tracing::info!("Saving to {}", target.display());

        match writer.write(&self.session.project, &target) {
            Ok(()) => DialogOutcome::Completed,
            Err(err) => {
                tracing::warn!(code = %err.code(), "Save failed: {}", err);
                self.host
                    .message_box(SAVE_TITLE, messages::write_failure(err.code()));
                DialogOutcome::Failed(DialogFailure::Format(err))
            }
        }
    }

    fn read_failed(&mut self, err: FormatError) -> DialogOutcome {
        tracing::warn!(code = %err.code(), "Read failed: {}", err);
        self.host
            .message_box(OPEN_TITLE, messages::read_failure(err.code()));
        DialogOutcome::Failed(DialogFailure::Format(err))
    }

    fn unresolved(&mut self, path: PathBuf) -> DialogOutcome {
        tracing::warn!("No format for {}", path.display());
        self.host.message_box(OPEN_TITLE, NO_FORMAT);
        DialogOutcome::Failed(DialogFailure::UnknownFormat(path))
    }
}

/// Treats an empty selection like a cancelled one.
fn picked(path: Option<PathBuf>) -> Option<PathBuf> {
    path.filter(|p| !p.as_os_str().is_empty())
}

/// `name` when it is a single normal path component, so joining it cannot
/// leave the export directory.
fn image_file_name(name: &str) -> Option<&Path> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(file)), None) => Some(Path::new(file)),
        _ => None,
    }
}
