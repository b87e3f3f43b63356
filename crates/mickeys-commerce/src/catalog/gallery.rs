//! Photo gallery entries served by the gallery backend.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GalleryImage {
    pub url: String,
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
}

/// Images grouped for tabbed display.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Gallery {
    images: Vec<GalleryImage>,
}

impl Gallery {
    pub fn new(images: Vec<GalleryImage>) -> Self {
        Self { images }
    }

    pub fn images(&self) -> &[GalleryImage] {
        &self.images
    }

    /// Distinct categories in order of first appearance.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for image in &self.images {
            if !seen.contains(&image.category.as_str()) {
                seen.push(&image.category);
            }
        }
        seen
    }

    /// Images in a category, compared case-insensitively.
    pub fn in_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a GalleryImage> {
        self.images
            .iter()
            .filter(move |i| i.category.eq_ignore_ascii_case(category))
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}
