pub mod image_source;
pub mod lightbox_overlay;
pub mod project_card;
pub mod thumbnail_grid;

pub use image_source::{content_fit, image_or_placeholder, load_handle};
pub use lightbox_overlay::{LightboxOverlay, lightbox_overlay};
pub use project_card::project_card;
pub use thumbnail_grid::{GridItem, ThumbnailGrid, thumbnail_grid};
