use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque reference to an image (a path or URL as written in the content feed).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new<S: Into<String>>(reference: S) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ImageRef {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ImageRef {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// All images of one project.
///
/// The display sequence navigated by the lightbox is the primary image (when
/// present) followed by the secondary images. Thumbnail indices always refer
/// to the secondary list; display indices refer to the display sequence.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ImageSet {
    primary: Option<ImageRef>,
    images: Vec<ImageRef>,
}

impl ImageSet {
    /// A blank primary reference counts as no primary image.
    pub fn new(primary: Option<ImageRef>, images: Vec<ImageRef>) -> Self {
        Self {
            primary: primary.filter(|primary| !primary.is_empty()),
            images,
        }
    }

    pub fn primary(&self) -> Option<&ImageRef> {
        self.primary.as_ref()
    }

    pub fn has_primary(&self) -> bool {
        self.primary.is_some()
    }

    /// Secondary images, in thumbnail order.
    pub fn thumbnails(&self) -> &[ImageRef] {
        &self.images
    }

    pub fn thumbnail_count(&self) -> usize {
        self.images.len()
    }

    /// 1 when a primary image leads the display sequence, else 0.
    pub fn offset(&self) -> usize {
        usize::from(self.primary.is_some())
    }

    /// Length of the display sequence.
    pub fn len(&self) -> usize {
        self.offset() + self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Display index for a thumbnail, or `None` when out of range.
    pub fn display_index(&self, thumbnail_index: usize) -> Option<usize> {
        (thumbnail_index < self.images.len()).then(|| thumbnail_index + self.offset())
    }

    /// Image at a display index.
    pub fn get(&self, display_index: usize) -> Option<&ImageRef> {
        match (&self.primary, display_index) {
            (Some(primary), 0) => Some(primary),
            (Some(_), idx) => self.images.get(idx - 1),
            (None, idx) => self.images.get(idx),
        }
    }

    /// Iterates the display sequence.
    pub fn iter(&self) -> impl Iterator<Item = &ImageRef> {
        self.primary.iter().chain(self.images.iter())
    }
}
