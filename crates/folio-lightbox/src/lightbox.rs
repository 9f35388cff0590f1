use crate::{keys::LightboxKey, scroll_lock::ScrollLock, state::LightboxState};
use folio_types::{ImageRef, ImageSet};

/// Operations a parent view may invoke on a gallery it holds a handle to.
pub trait LightboxControl {
    /// Opens at the primary image. Returns `false` when there is none.
    fn open_primary(&mut self) -> bool;

    fn close(&mut self);

    /// Moves by `delta` with wraparound. No effect while closed.
    fn navigate(&mut self, delta: isize);
}

/// Modal image viewer state for one [`ImageSet`].
///
/// Created closed. While open it holds a guard on the page [`ScrollLock`];
/// closing, or dropping the lightbox, releases it.
#[derive(Debug)]
pub struct Lightbox {
    images: ImageSet,
    scroll_lock: ScrollLock,
    state: LightboxState,
}

impl Lightbox {
    pub fn new(images: ImageSet, scroll_lock: ScrollLock) -> Self {
        Self {
            images,
            scroll_lock,
            state: LightboxState::Closed,
        }
    }

    pub fn images(&self) -> &ImageSet {
        &self.images
    }

    pub fn state(&self) -> &LightboxState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.state.selected_index()
    }

    /// Image shown in the overlay.
    pub fn current(&self) -> Option<&ImageRef> {
        self.selected_index().and_then(|idx| self.images.get(idx))
    }

    /// Length of the display sequence.
    pub fn total(&self) -> usize {
        self.images.len()
    }

    pub fn can_open(&self) -> bool {
        !self.images.is_empty()
    }

    /// 1-based position and total, while open.
    pub fn counter(&self) -> Option<(usize, usize)> {
        self.selected_index().map(|idx| (idx + 1, self.total()))
    }

    /// Opens at a thumbnail (an index into the secondary images).
    pub fn open_at(&mut self, thumbnail_index: usize) -> Option<&ImageRef> {
        let Some(index) = self.images.display_index(thumbnail_index) else {
            tracing::warn!(
                thumbnail_index,
                thumbnails = self.images.thumbnail_count(),
                "ignoring out of range thumbnail"
            );
            return None;
        };

        self.show(index);
        self.current()
    }

    pub fn open_primary(&mut self) -> Option<&ImageRef> {
        if !self.images.has_primary() {
            return None;
        }

        self.show(0);
        self.current()
    }

    pub fn close(&mut self) {
        if self.is_open() {
            tracing::debug!("closing lightbox");
        }
        self.state = LightboxState::Closed;
    }

    /// Moves `delta` steps through the display sequence, wrapping at both
    /// ends. Any magnitude wraps in one step.
    pub fn navigate(&mut self, delta: isize) -> Option<&ImageRef> {
        let index = self.selected_index()?;
        let total = self.total() as isize;
        let target = index as isize + delta.rem_euclid(total);

        self.navigate_to(target)
    }

    /// Jumps to a display index, wrapping targets outside `0..total`.
    pub fn navigate_to(&mut self, target: isize) -> Option<&ImageRef> {
        let total = self.total();
        let LightboxState::Open { index, .. } = &mut self.state else {
            return None;
        };

        *index = target.rem_euclid(total as isize) as usize;
        tracing::trace!(index = *index, total, "lightbox navigated");
        self.current()
    }

    pub fn next(&mut self) -> Option<&ImageRef> {
        self.navigate(1)
    }

    pub fn prev(&mut self) -> Option<&ImageRef> {
        self.navigate(-1)
    }

    /// Applies a key press. Returns whether the key was consumed; nothing is
    /// consumed while closed.
    pub fn handle_key(&mut self, key: LightboxKey) -> bool {
        if !self.is_open() {
            return false;
        }

        match key {
            LightboxKey::Previous => {
                self.prev();
            }
            LightboxKey::Next => {
                self.next();
            }
            LightboxKey::Close => self.close(),
        }

        true
    }

    fn show(&mut self, display_index: usize) {
        if let LightboxState::Open { index, .. } = &mut self.state {
            *index = display_index;
            return;
        }

        tracing::debug!(index = display_index, total = self.total(), "opening lightbox");
        self.state = LightboxState::Open {
            index: display_index,
            scroll: self.scroll_lock.acquire(),
        };
    }
}

impl LightboxControl for Lightbox {
    fn open_primary(&mut self) -> bool {
        Lightbox::open_primary(self).is_some()
    }

    fn close(&mut self) {
        Lightbox::close(self);
    }

    fn navigate(&mut self, delta: isize) {
        Lightbox::navigate(self, delta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(primary: Option<&str>, images: &[&str]) -> ImageSet {
        ImageSet::new(
            primary.map(ImageRef::from),
            images.iter().map(|name| ImageRef::from(*name)).collect(),
        )
    }

    fn lightbox(primary: Option<&str>, images: &[&str]) -> (Lightbox, ScrollLock) {
        let lock = ScrollLock::new();
        (Lightbox::new(set(primary, images), lock.clone()), lock)
    }

    fn shown(lightbox: &Lightbox) -> Option<&str> {
        lightbox.current().map(ImageRef::as_str)
    }

    #[test]
    fn test_starts_closed() {
        let (lightbox, lock) = lightbox(Some("A"), &["B", "C"]);
        assert!(!lightbox.is_open());
        assert_eq!(lightbox.selected_index(), None);
        assert_eq!(lightbox.current(), None);
        assert_eq!(lightbox.counter(), None);
        assert!(!lock.is_locked());
    }

    #[test]
    fn test_open_at_offsets_past_primary() {
        let (mut lightbox, lock) = lightbox(Some("A"), &["B", "C"]);

        assert_eq!(lightbox.open_at(0).map(ImageRef::as_str), Some("B"));
        assert_eq!(lightbox.selected_index(), Some(1));
        assert!(lock.is_locked());

        assert_eq!(lightbox.open_at(1).map(ImageRef::as_str), Some("C"));
        assert_eq!(lightbox.selected_index(), Some(2));
        assert_eq!(lightbox.counter(), Some((3, 3)));
    }

    #[test]
    fn test_open_at_without_primary() {
        let (mut lightbox, _lock) = lightbox(None, &["B", "C"]);

        lightbox.open_at(1);
        assert_eq!(lightbox.selected_index(), Some(1));
        assert_eq!(shown(&lightbox), Some("C"));
    }

    #[test]
    fn test_open_at_out_of_range_is_noop() {
        let (mut lightbox, lock) = lightbox(Some("A"), &["B", "C"]);

        assert_eq!(lightbox.open_at(2), None);
        assert!(!lightbox.is_open());
        assert!(!lock.is_locked());

        lightbox.open_primary();
        assert_eq!(lightbox.open_at(9), None);
        assert_eq!(lightbox.selected_index(), Some(0));
    }

    #[test]
    fn test_open_primary_requires_primary() {
        let (mut lightbox, lock) = lightbox(None, &["B"]);
        assert_eq!(lightbox.open_primary(), None);
        assert!(!lightbox.is_open());
        assert!(!lock.is_locked());
    }

    #[test]
    fn test_reopen_keeps_single_guard() {
        let (mut lightbox, lock) = lightbox(Some("A"), &["B", "C"]);

        lightbox.open_primary();
        lightbox.open_at(1);
        lightbox.open_primary();
        assert_eq!(lock.holders(), 1);

        lightbox.close();
        assert_eq!(lock.holders(), 0);
    }

    #[test]
    fn test_navigate_wraps_both_ends() {
        let (mut lightbox, _lock) = lightbox(Some("A"), &["B", "C"]);
        lightbox.open_primary();

        assert_eq!(lightbox.prev().map(ImageRef::as_str), Some("C"));
        assert_eq!(lightbox.next().map(ImageRef::as_str), Some("A"));
    }

    #[test]
    fn test_navigate_large_delta() {
        let (mut lightbox, _lock) = lightbox(None, &["B", "C", "D"]);
        lightbox.open_at(0);

        lightbox.navigate(7);
        assert_eq!(lightbox.selected_index(), Some(1));

        lightbox.navigate(-8);
        assert_eq!(lightbox.selected_index(), Some(wrap(1 - 8, 3)));

        lightbox.navigate(isize::MIN);
        assert!(lightbox.selected_index().is_some_and(|idx| idx < 3));

        lightbox.navigate(isize::MAX);
        assert!(lightbox.selected_index().is_some_and(|idx| idx < 3));
    }

    fn wrap(value: isize, len: isize) -> usize {
        (((value % len) + len) % len) as usize
    }

    #[test]
    fn test_navigate_to_wraps_target() {
        let (mut lightbox, _lock) = lightbox(Some("A"), &["B", "C"]);
        lightbox.open_primary();

        lightbox.navigate_to(-1);
        assert_eq!(lightbox.selected_index(), Some(2));

        lightbox.navigate_to(3);
        assert_eq!(lightbox.selected_index(), Some(0));

        lightbox.navigate_to(1);
        assert_eq!(lightbox.selected_index(), Some(1));
    }

    #[test]
    fn test_navigate_closed_is_noop() {
        let (mut lightbox, lock) = lightbox(Some("A"), &["B"]);

        assert_eq!(lightbox.navigate(1), None);
        assert_eq!(lightbox.navigate_to(0), None);
        assert!(!lightbox.is_open());
        assert!(!lock.is_locked());
    }

    #[test]
    fn test_single_image_wraps_to_itself() {
        let (mut lightbox, _lock) = lightbox(Some("A"), &[]);
        lightbox.open_primary();

        lightbox.next();
        assert_eq!(lightbox.selected_index(), Some(0));
        lightbox.prev();
        assert_eq!(lightbox.selected_index(), Some(0));
    }

    #[test]
    fn test_keys_only_act_while_open() {
        let (mut lightbox, _lock) = lightbox(Some("A"), &["B", "C"]);

        assert!(!lightbox.handle_key(LightboxKey::Next));
        assert!(!lightbox.handle_key(LightboxKey::Close));
        assert!(!lightbox.is_open());

        lightbox.open_primary();
        assert!(lightbox.handle_key(LightboxKey::Next));
        assert_eq!(lightbox.selected_index(), Some(1));
        assert!(lightbox.handle_key(LightboxKey::Previous));
        assert!(lightbox.handle_key(LightboxKey::Previous));
        assert_eq!(lightbox.selected_index(), Some(2));
        assert!(lightbox.handle_key(LightboxKey::Close));
        assert!(!lightbox.is_open());
    }

    #[test]
    fn test_close_is_idempotent() {
        let (mut lightbox, lock) = lightbox(Some("A"), &["B"]);
        lightbox.open_at(0);

        lightbox.close();
        let after_one = lightbox.selected_index();
        lightbox.close();

        assert_eq!(lightbox.selected_index(), after_one);
        assert_eq!(lightbox.selected_index(), None);
        assert_eq!(lightbox.state(), &LightboxState::Closed);
        assert_eq!(lock.holders(), 0);
    }

    #[test]
    fn test_drop_releases_scroll_lock() {
        let (mut lightbox, lock) = lightbox(Some("A"), &["B"]);
        lightbox.open_primary();
        assert!(lock.is_locked());

        drop(lightbox);
        assert!(!lock.is_locked());
    }

    #[test]
    fn test_empty_gallery_never_opens() {
        let (mut lightbox, lock) = lightbox(None, &[]);

        assert!(!lightbox.can_open());
        assert_eq!(lightbox.open_at(0), None);
        assert_eq!(lightbox.open_primary(), None);
        assert!(!lightbox.handle_key(LightboxKey::Next));
        assert!(!lightbox.is_open());
        assert!(!lock.is_locked());
    }

    #[test]
    fn test_control_trait() {
        let (mut lightbox, lock) = lightbox(Some("A"), &["B", "C"]);
        let control: &mut dyn LightboxControl = &mut lightbox;

        assert!(control.open_primary());
        control.navigate(-1);
        control.close();

        assert!(!lock.is_locked());
        assert!(!lightbox.is_open());
    }
}
