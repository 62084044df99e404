//! The format plugin contract.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use nbe_project::Project;

use crate::error::{FormatError, FormatResult};

/// Identifies a plugin independently of any file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatType {
    /// Native project file.
    Nbe,
    /// Native project document encoded as JSON.
    Json,
    /// Minetest mod code.
    Lua,
    /// Minetest engine code.
    Cpp,
}

impl FormatType {
    pub const ALL: [FormatType; 4] = [
        FormatType::Nbe,
        FormatType::Json,
        FormatType::Lua,
        FormatType::Cpp,
    ];

    pub fn extension(self) -> &'static str {
        match self {
            FormatType::Nbe => "nbe",
            FormatType::Json => "json",
            FormatType::Lua => "lua",
            FormatType::Cpp => "cpp",
        }
    }

    /// Exact, case-insensitive lookup. Never guesses.
    pub fn from_extension(ext: &str) -> Option<FormatType> {
        FormatType::ALL
            .into_iter()
            .find(|ty| ty.extension().eq_ignore_ascii_case(ext))
    }

    /// Glob pattern used to filter file pickers.
    pub fn filter(self) -> String {
        format!("*.{}", self.extension())
    }
}

impl fmt::Display for FormatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for FormatType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormatType::from_extension(s.trim_start_matches('.'))
            .ok_or_else(|| format!("Unknown format: {}", s))
    }
}

/// Environment handed to plugins when they are constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatContext {
    /// Prefix for generated node names, as in `default:stair`.
    pub mod_name: String,
}

impl Default for FormatContext {
    fn default() -> Self {
        Self {
            mod_name: "default".to_string(),
        }
    }
}

/// One way of turning a [`Project`] into a file (or a string) and back.
///
/// Instances are cheap and owned by a single operation.
pub trait FileFormat {
    fn format_type(&self) -> FormatType;

    /// Extension appended to file names typed without one.
    fn extension(&self) -> &'static str {
        self.format_type().extension()
    }

    fn can_read(&self) -> bool {
        false
    }

    /// Reads a new project from `path`. The returned project is remeshed.
    fn load(&self, _path: &Path) -> FormatResult<Project> {
        Err(FormatError::Unsupported {
            format: self.format_type(),
            operation: "reading",
        })
    }

    /// Reads `path` and merges its content into `project`.
    ///
    /// The file is parsed completely before `project` is touched, so a
    /// failure leaves it unchanged. Callers remesh after success.
    fn import_into(&self, path: &Path, project: &mut Project) -> FormatResult<()> {
        let loaded = self.load(path)?;
        project.merge(loaded);
        Ok(())
    }

    fn write(&self, project: &Project, path: &Path) -> FormatResult<()> {
        let content = self.as_string(project)?;
        write_text(path, &content)
    }

    fn as_string(&self, project: &Project) -> FormatResult<String>;
}

pub(crate) fn read_text(path: &Path) -> FormatResult<String> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::InvalidData => {
            FormatError::WrongType(format!("{} is not a text file", path.display()))
        }
        _ => FormatError::io(path, e),
    })
}

pub(crate) fn write_text(path: &Path, content: &str) -> FormatResult<()> {
    std::fs::write(path, content).map_err(|e| FormatError::io(path, e))
}

/// Appends `.ext` when the file name has no dot at all.
///
/// Only the last path component is inspected, so dotted directory names do
/// not suppress the extension.
pub fn with_default_extension(file: &str, ext: &str) -> String {
    let name = Path::new(file)
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();

    if name.contains('.') {
        file.to_string()
    } else {
        format!("{}.{}", file, ext)
    }
}
