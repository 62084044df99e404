//! nbe-format: pluggable project readers and writers.
//!
//! Every plugin implements [`FileFormat`]; [`registry`] resolves a file
//! extension or a [`FormatType`] to a fresh plugin instance. Failures are
//! reported as [`FormatError`], each classified by an [`ErrorCode`].

pub mod codegen;
pub mod cpp;
pub mod document;
pub mod error;
pub mod format;
pub mod json;
pub mod lua;
pub mod migrate;
pub mod native;
pub mod registry;

pub use cpp::CppFormat;
pub use error::{ErrorCode, FormatError, FormatResult};
pub use format::{FileFormat, FormatContext, FormatType, with_default_extension};
pub use json::JsonFormat;
pub use lua::LuaFormat;
pub use migrate::{LATEST_VERSION, OLDEST_VERSION};
pub use native::NbeFormat;
pub use registry::{FormatResolver, Registry, get_from_ext, get_from_type};
