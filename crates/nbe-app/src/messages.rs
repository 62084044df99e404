//! User-facing text for failed file operations.

use nbe_format::ErrorCode;

pub const OPEN_TITLE: &str = "Unable to open";
pub const SAVE_TITLE: &str = "Unable to Save";
pub const CODE_TITLE: &str = "Unable to generate code";
pub const TEXTURES_TITLE: &str = "Unable to export textures";

pub const NO_FORMAT: &str = "File format does not exist. (It is based on file extensions)";
pub const NO_DIRECTORY: &str = "Unable to create the target directory";
pub const UNKNOWN_REASON: &str = "Unknown reason";

pub fn read_failure(code: ErrorCode) -> &'static str {
    match code {
        ErrorCode::IoError => "Failed to open the file\n\t(Does it not exist, or is it readonly?)",
        ErrorCode::ReadOldVersion => "This file is outdated and is not supported",
        ErrorCode::ReadNewVersion => {
            "This file was created with a new version of NBE\n\t(Update your copy)"
        }
        ErrorCode::ReadParseError => {
            "An error occurred while reading the file - it may be corrupted\n\t(This should never happen)"
        }
        ErrorCode::ReadWrongType => {
            "The file is not in the correct format\n\t(Are you opening the wrong type of file?)"
        }
        ErrorCode::Unknown => "Unknown error",
    }
}

pub fn write_failure(code: ErrorCode) -> &'static str {
    match code {
        ErrorCode::IoError => "Unable to open file to save to",
        _ => UNKNOWN_REASON,
    }
}
