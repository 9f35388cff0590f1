use std::path::PathBuf;

pub type ContentResult<T> = Result<T, ContentError>;

#[derive(thiserror::Error, Debug)]
pub enum ContentError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed content feed: {source}")]
    Parse {
        #[from]
        source: serde_json::Error,
    },

    #[error("Invalid content feed: {0}")]
    Invalid(String),
}
