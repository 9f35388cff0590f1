use cosmic::widget::image::Handle;
use folio_content::{ContentRoot, Feed};
use folio_types::{ImageRef, SiteContent};
use folio_widgets::load_handle;
use std::collections::HashMap;

/// Image handles for every reference in the current feed, resolved once
/// when the feed loads. A reference whose file is missing maps to `None`
/// and renders as a placeholder.
#[derive(Debug, Clone)]
pub struct ImageStore {
    root: ContentRoot,
    handles: HashMap<ImageRef, Option<Handle>>,
}

impl ImageStore {
    pub fn new(root: ContentRoot) -> Self {
        Self {
            root,
            handles: HashMap::new(),
        }
    }

    pub fn for_feed(feed: &Feed) -> Self {
        let mut store = Self::new(feed.root.clone());
        for image in references(&feed.content) {
            store.insert(image);
        }

        let missing = store.handles.values().filter(|h| h.is_none()).count();
        if missing > 0 {
            tracing::warn!(
                missing,
                root = %store.root.base().display(),
                "some images could not be found"
            );
        }

        store
    }

    fn insert(&mut self, image: &ImageRef) {
        if !self.handles.contains_key(image) {
            let handle = load_handle(self.root.resolve_existing(image).as_deref());
            self.handles.insert(image.clone(), handle);
        }
    }

    pub fn handle(&self, image: &ImageRef) -> Option<Handle> {
        match self.handles.get(image) {
            Some(handle) => handle.clone(),
            None => load_handle(self.root.resolve_existing(image).as_deref()),
        }
    }

    pub fn handle_opt(&self, image: Option<&ImageRef>) -> Option<Handle> {
        image.and_then(|image| self.handle(image))
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }
}

fn references(content: &SiteContent) -> impl Iterator<Item = &ImageRef> {
    let profile = [
        content.profile.hero_image.as_ref(),
        content.profile.portrait.as_ref(),
        content.contact.image.as_ref(),
    ];

    profile.into_iter().flatten().chain(
        content
            .projects
            .iter()
            .flat_map(|p| p.main_image.iter().chain(p.images.iter())),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_content::parse_content;
    use tempfile::TempDir;

    #[test]
    fn test_store_resolves_existing_images_only() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("images")).unwrap();
        std::fs::write(dir.path().join("images/a.jpeg"), b"jpeg").unwrap();

        let content = parse_content(
            r#"{
                "profile": { "name": "Ana", "hero_image": "/images/a.jpeg" },
                "projects": [{
                    "id": "1", "title": "Uno", "location": "A", "year": 2020,
                    "main_image": "/images/a.jpeg",
                    "images": ["/images/b.jpeg"]
                }]
            }"#,
        )
        .unwrap();

        let feed = Feed {
            content,
            root: ContentRoot::new(dir.path()),
            path: None,
        };
        let store = ImageStore::for_feed(&feed);

        assert_eq!(store.len(), 2);
        assert!(store.handle(&"/images/a.jpeg".into()).is_some());
        assert!(store.handle(&"/images/b.jpeg".into()).is_none());
        assert!(store.handle_opt(None).is_none());
    }
}
