//! Gallery lightbox: which image of a project is shown full screen, how the
//! keyboard drives it, and the page scroll lock it holds while visible.

pub mod keys;
pub mod lightbox;
pub mod scroll_lock;
pub mod state;

pub use keys::LightboxKey;
pub use lightbox::{Lightbox, LightboxControl};
pub use scroll_lock::{ScrollGuard, ScrollLock};
pub use state::LightboxState;
