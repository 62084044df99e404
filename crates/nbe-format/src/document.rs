//! The versioned project document shared by the native and JSON formats.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use image::RgbaImage;
use nbe_project::{Image, Media, Node, Project};
use serde::{Deserialize, Serialize};
use serde_yaml::Value;

use crate::error::{FormatError, FormatResult};
use crate::migrate::{LATEST_VERSION, OLDEST_VERSION, migrate_to_latest};

/// Value of the `format` key that marks a project document.
pub const FORMAT_TAG: &str = "nodeboxeditor";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectDocument {
    pub format: String,
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub media: Vec<ImageDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImageDef {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bitmap: Option<BitmapDef>,
}

/// RGBA8 pixels, base64 encoded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BitmapDef {
    pub width: u32,
    pub height: u32,
    pub rgba: String,
}

impl ProjectDocument {
    pub fn from_project(project: &Project) -> Self {
        Self {
            format: FORMAT_TAG.to_string(),
            version: LATEST_VERSION,
            name: project.name.clone(),
            nodes: project.nodes.clone(),
            media: project.media.images().map(ImageDef::from_image).collect(),
        }
    }

    pub fn into_project(self) -> FormatResult<Project> {
        let media = self
            .media
            .into_iter()
            .map(ImageDef::into_image)
            .collect::<FormatResult<Media>>()?;
        Ok(Project::from_parts(self.name, self.nodes, media))
    }
}

impl ImageDef {
    fn from_image(image: &Image) -> Self {
        Self {
            name: image.name.clone(),
            bitmap: image.get().map(|bitmap| BitmapDef {
                width: bitmap.width(),
                height: bitmap.height(),
                rgba: STANDARD.encode(bitmap.as_raw()),
            }),
        }
    }

    fn into_image(self) -> FormatResult<Image> {
        let Some(bitmap) = self.bitmap else {
            return Ok(Image::missing(self.name));
        };

        let raw = STANDARD.decode(bitmap.rgba.as_bytes()).map_err(|e| {
            FormatError::Parse(format!("Image '{}' has invalid pixel data: {}", self.name, e))
        })?;

        let data = RgbaImage::from_raw(bitmap.width, bitmap.height, raw).ok_or_else(|| {
            FormatError::Parse(format!(
                "Image '{}' pixel data does not match {}x{}",
                self.name, bitmap.width, bitmap.height
            ))
        })?;

        Ok(Image::new(self.name, data))
    }
}

/// Validates the header of a parsed document, migrates it and decodes it.
///
/// - not a mapping, no `format` key, or a foreign tag: wrong type
/// - version outside `OLDEST_VERSION..=LATEST_VERSION`: old or new version
/// - anything else that fails to decode: parse error
pub fn decode_document(value: Value) -> FormatResult<ProjectDocument> {
    let Value::Mapping(mut doc) = value else {
        return Err(FormatError::WrongType(
            "content is not a project document".to_string(),
        ));
    };

    match doc.get("format").and_then(Value::as_str) {
        Some(FORMAT_TAG) => {}
        Some(other) => {
            return Err(FormatError::WrongType(format!(
                "document is a '{}' file",
                other
            )));
        }
        None => {
            return Err(FormatError::WrongType(
                "document has no format tag".to_string(),
            ));
        }
    }

    let version = doc
        .get("version")
        .ok_or_else(|| FormatError::Parse("document has no version".to_string()))?
        .as_u64()
        .and_then(|v| u32::try_from(v).ok())
        .ok_or_else(|| FormatError::Parse("document version is not an integer".to_string()))?;

    if version < OLDEST_VERSION {
        return Err(FormatError::OldVersion {
            found: version,
            oldest: OLDEST_VERSION,
        });
    }
    if version > LATEST_VERSION {
        return Err(FormatError::NewVersion {
            found: version,
            latest: LATEST_VERSION,
        });
    }

    migrate_to_latest(&mut doc, version)?;

    let document: ProjectDocument = serde_yaml::from_value(Value::Mapping(doc))?;
    Ok(document)
}

/// Maps a syntax error to a parse error when the text looks like one of our
/// documents, and to a wrong-type error otherwise.
pub(crate) fn classify_syntax_error(text: &str, err: impl std::fmt::Display) -> FormatError {
    if text.contains(FORMAT_TAG) {
        FormatError::Parse(err.to_string())
    } else {
        FormatError::WrongType(format!("not a project document ({})", err))
    }
}
