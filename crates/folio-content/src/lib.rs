pub mod catalog;
pub mod error;
pub mod feed;
pub mod root;

pub use catalog::{Catalog, CategoryFilter};
pub use error::{ContentError, ContentResult};
pub use feed::{Feed, builtin_content, load_content, load_feed, parse_content};
pub use root::ContentRoot;
