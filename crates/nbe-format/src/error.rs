//! Error types shared by every format plugin.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::format::FormatType;

pub type FormatResult<T> = Result<T, FormatError>;

/// Closed classification of a failed read or write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    IoError,
    ReadOldVersion,
    ReadNewVersion,
    ReadParseError,
    ReadWrongType,
    Unknown,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorCode::IoError => "IO_ERROR",
            ErrorCode::ReadOldVersion => "READ_OLD_VERSION",
            ErrorCode::ReadNewVersion => "READ_NEW_VERSION",
            ErrorCode::ReadParseError => "READ_PARSE_ERROR",
            ErrorCode::ReadWrongType => "READ_WRONG_TYPE",
            ErrorCode::Unknown => "UNKNOWN",
        };
        f.write_str(name)
    }
}

#[derive(thiserror::Error, Debug)]
pub enum FormatError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File version {found} is older than the oldest supported version {oldest}")]
    OldVersion { found: u32, oldest: u32 },

    #[error("File version {found} is newer than the latest supported version {latest}")]
    NewVersion { found: u32, latest: u32 },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Wrong file type: {0}")]
    WrongType(String),

    #[error("{format} format does not support {operation}")]
    Unsupported {
        format: FormatType,
        operation: &'static str,
    },

    #[error("{0}")]
    Unknown(String),
}

impl FormatError {
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        FormatError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            FormatError::Io { .. } => ErrorCode::IoError,
            FormatError::OldVersion { .. } => ErrorCode::ReadOldVersion,
            FormatError::NewVersion { .. } => ErrorCode::ReadNewVersion,
            FormatError::Parse(_) => ErrorCode::ReadParseError,
            FormatError::WrongType(_) => ErrorCode::ReadWrongType,
            FormatError::Unsupported { .. } | FormatError::Unknown(_) => ErrorCode::Unknown,
        }
    }
}

impl From<serde_yaml::Error> for FormatError {
    fn from(err: serde_yaml::Error) -> Self {
        FormatError::Parse(err.to_string())
    }
}

impl From<serde_json::Error> for FormatError {
    fn from(err: serde_json::Error) -> Self {
        FormatError::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_maps_to_one_code() {
        let cases = [
            (
                FormatError::io(Path::new("a.nbe"), std::io::ErrorKind::NotFound.into()),
                ErrorCode::IoError,
            ),
            (
                FormatError::OldVersion { found: 0, oldest: 1 },
                ErrorCode::ReadOldVersion,
            ),
            (
                FormatError::NewVersion { found: 9, latest: 3 },
                ErrorCode::ReadNewVersion,
            ),
            (FormatError::Parse("x".into()), ErrorCode::ReadParseError),
            (FormatError::WrongType("x".into()), ErrorCode::ReadWrongType),
            (
                FormatError::Unsupported {
                    format: FormatType::Lua,
                    operation: "reading",
                },
                ErrorCode::Unknown,
            ),
            (FormatError::Unknown("x".into()), ErrorCode::Unknown),
        ];

        for (err, code) in cases {
            assert_eq!(err.code(), code, "{err}");
        }
    }

    #[test]
    fn codes_display_like_the_taxonomy() {
        assert_eq!(ErrorCode::ReadWrongType.to_string(), "READ_WRONG_TYPE");
        assert_eq!(ErrorCode::IoError.to_string(), "IO_ERROR");
    }
}
