//! Named images attached to a project.

use image::RgbaImage;
use std::collections::BTreeMap;

/// A texture known to the project. `data` is `None` when the file was
/// referenced but its bitmap could not be decoded.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub name: String,
    data: Option<RgbaImage>,
}

impl Image {
    pub fn new(name: impl Into<String>, data: RgbaImage) -> Self {
        Self {
            name: name.into(),
            data: Some(data),
        }
    }

    pub fn missing(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data: None,
        }
    }

    /// The decoded bitmap, if any.
    pub fn get(&self) -> Option<&RgbaImage> {
        self.data.as_ref()
    }
}

/// Images keyed and iterated by name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Media {
    images: BTreeMap<String, Image>,
}

impl Media {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `image`, returning the image it replaced.
    pub fn add(&mut self, image: Image) -> Option<Image> {
        self.images.insert(image.name.clone(), image)
    }

    pub fn get(&self, name: &str) -> Option<&Image> {
        self.images.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.images.contains_key(name)
    }

    pub fn images(&self) -> impl Iterator<Item = &Image> {
        self.images.values()
    }

    pub fn into_images(self) -> impl Iterator<Item = Image> {
        self.images.into_values()
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

impl FromIterator<Image> for Media {
    fn from_iter<I: IntoIterator<Item = Image>>(iter: I) -> Self {
        let mut media = Media::new();
        for image in iter {
            media.add(image);
        }
        media
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn images_iterate_in_name_order() {
        let media: Media = ["stone.png", "dirt.png", "wood.png"]
            .into_iter()
            .map(Image::missing)
            .collect();

        let names: Vec<_> = media.images().map(|img| img.name.as_str()).collect();
        assert_eq!(names, vec!["dirt.png", "stone.png", "wood.png"]);
    }

    #[test]
    fn add_replaces_same_name() {
        let mut media = Media::new();
        assert!(media.add(Image::missing("a.png")).is_none());

        let replaced = media.add(Image::new("a.png", RgbaImage::new(2, 2)));
        assert!(replaced.is_some_and(|img| img.get().is_none()));
        assert_eq!(media.len(), 1);
        assert!(media.get("a.png").is_some_and(|img| img.get().is_some()));
    }
}
