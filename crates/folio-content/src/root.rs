use folio_types::ImageRef;
use std::path::{Path, PathBuf};

const FILE_SCHEME: &str = "file://";

/// Directory that image references in a feed are relative to.
///
/// References are site-rooted: `/images/a.jpeg` and `images/a.jpeg` both
/// resolve to `<base>/images/a.jpeg`. A `file://` reference names an
/// absolute path and is used as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentRoot {
    base: PathBuf,
}

impl ContentRoot {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// Root for a feed file: its parent directory.
    pub fn for_feed(feed_path: &Path) -> Self {
        let base = feed_path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        Self::new(base)
    }

    /// Root for the bundled feed, `$XDG_DATA_HOME/folio`.
    pub fn builtin() -> Self {
        let base = dirs::data_dir()
            .map(|dir| dir.join("folio"))
            .unwrap_or_else(|| PathBuf::from("."));
        Self::new(base)
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    pub fn resolve(&self, image: &ImageRef) -> PathBuf {
        let reference = image.as_str();

        if let Some(absolute) = reference.strip_prefix(FILE_SCHEME) {
            return PathBuf::from(absolute);
        }

        self.base.join(reference.trim_start_matches('/'))
    }

    /// Resolved path, or `None` when nothing exists there.
    pub fn resolve_existing(&self, image: &ImageRef) -> Option<PathBuf> {
        let path = self.resolve(image);
        if path.is_file() {
            Some(path)
        } else {
            tracing::debug!(image = %image, path = %path.display(), "image not found");
            None
        }
    }
}
