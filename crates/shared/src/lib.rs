pub mod grid_config;
pub mod loading_state;
pub mod screen_reader_labels;

pub use grid_config::{AspectRatio, GridConfigError, GridConfiguration, ThumbnailFit};
pub use loading_state::{LoadingEvent, LoadingState};
