//! Maps extensions and format types to plugin instances.
//!
//! This is the only place new formats are wired in.

use std::path::Path;

use crate::cpp::CppFormat;
use crate::format::{FileFormat, FormatContext, FormatType};
use crate::json::JsonFormat;
use crate::lua::LuaFormat;
use crate::native::NbeFormat;

/// Builds a new plugin for the extension of `path`, or `None` when no
/// plugin claims it.
pub fn get_from_ext(path: &Path, context: &FormatContext) -> Option<Box<dyn FileFormat>> {
    let ext = path.extension()?.to_str()?;
    FormatType::from_extension(ext).map(|ty| get_from_type(ty, context))
}

pub fn get_from_type(ty: FormatType, context: &FormatContext) -> Box<dyn FileFormat> {
    match ty {
        FormatType::Nbe => Box::new(NbeFormat),
        FormatType::Json => Box::new(JsonFormat),
        FormatType::Lua => Box::new(LuaFormat::new(context)),
        FormatType::Cpp => Box::new(CppFormat::new(context)),
    }
}

/// Source of plugin instances for an operation.
pub trait FormatResolver {
    fn from_ext(&self, path: &Path) -> Option<Box<dyn FileFormat>>;
    fn from_type(&self, ty: FormatType) -> Box<dyn FileFormat>;
}

/// Resolver backed by the built-in formats.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    context: FormatContext,
}

impl Registry {
    pub fn new(context: FormatContext) -> Self {
        Self { context }
    }
}

impl FormatResolver for Registry {
    fn from_ext(&self, path: &Path) -> Option<Box<dyn FileFormat>> {
        get_from_ext(path, &self.context)
    }

    fn from_type(&self, ty: FormatType) -> Box<dyn FileFormat> {
        get_from_type(ty, &self.context)
    }
}
