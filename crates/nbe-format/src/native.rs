//! Native `.nbe` project files (YAML document).

use std::path::Path;

use nbe_project::Project;

use crate::document::{ProjectDocument, classify_syntax_error, decode_document};
use crate::error::{FormatError, FormatResult};
use crate::format::{FileFormat, FormatType, read_text};

#[derive(Debug, Clone, Copy, Default)]
pub struct NbeFormat;

impl FileFormat for NbeFormat {
    fn format_type(&self) -> FormatType {
        FormatType::Nbe
    }

    fn can_read(&self) -> bool {
        true
    }

    fn load(&self, path: &Path) -> FormatResult<Project> {
        let text = read_text(path)?;
        let value: serde_yaml::Value =
            serde_yaml::from_str(&text).map_err(|e| classify_syntax_error(&text, e))?;
        decode_document(value)?.into_project()
    }

    fn as_string(&self, project: &Project) -> FormatResult<String> {
        serde_yaml::to_string(&ProjectDocument::from_project(project))
            .map_err(|e| FormatError::Unknown(format!("Failed to serialize project: {}", e)))
    }
}
