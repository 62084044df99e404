//! Project document encoded as JSON.

use std::path::Path;

use nbe_project::Project;

use crate::document::{ProjectDocument, classify_syntax_error, decode_document};
use crate::error::{FormatError, FormatResult};
use crate::format::{FileFormat, FormatType, read_text};

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormat;

impl FileFormat for JsonFormat {
    fn format_type(&self) -> FormatType {
        FormatType::Json
    }

    fn can_read(&self) -> bool {
        true
    }

    fn load(&self, path: &Path) -> FormatResult<Project> {
        let text = read_text(path)?;
        let json: serde_json::Value =
            serde_json::from_str(&text).map_err(|e| classify_syntax_error(&text, e))?;
        // Header checks and migrations are shared with the native format.
        let value = serde_yaml::to_value(&json)
            .map_err(|e| FormatError::Parse(format!("Unsupported JSON value: {}", e)))?;
        decode_document(value)?.into_project()
    }

    fn as_string(&self, project: &Project) -> FormatResult<String> {
        let mut out = serde_json::to_string_pretty(&ProjectDocument::from_project(project))
            .map_err(|e| FormatError::Unknown(format!("Failed to serialize project: {}", e)))?;
        out.push('\n');
        Ok(out)
    }
}
