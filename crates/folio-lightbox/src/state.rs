use crate::scroll_lock::ScrollGuard;

/// Lightbox visibility. An open lightbox always has a selected image and
/// always holds the page scroll lock.
#[derive(Debug, Default)]
pub enum LightboxState {
    #[default]
    Closed,
    Open {
        /// Index into the display sequence
        index: usize,
        scroll: ScrollGuard,
    },
}

impl LightboxState {
    pub fn is_open(&self) -> bool {
        matches!(self, LightboxState::Open { .. })
    }

    pub fn selected_index(&self) -> Option<usize> {
        match self {
            LightboxState::Open { index, .. } => Some(*index),
            LightboxState::Closed => None,
        }
    }
}

impl PartialEq for LightboxState {
    fn eq(&self, other: &Self) -> bool {
        self.selected_index() == other.selected_index()
    }
}

impl Eq for LightboxState {}
