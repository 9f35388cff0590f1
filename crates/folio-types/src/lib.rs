pub mod image_set;
pub mod types;

pub use image_set::{ImageRef, ImageSet};
pub use types::{Category, ContactInfo, Profile, Project, ProjectSort, SiteContent};
pub use shared::grid_config::ThumbnailFit;
