pub mod app;
pub mod gallery;
pub mod images;
pub mod key_binds;
pub mod localize;
pub mod menu;
pub mod message;
pub mod pages;
pub mod watcher;

use app::Folio;
use std::path::PathBuf;

fn main() -> cosmic::iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let settings = cosmic::app::Settings::default().size_limits(
        cosmic::iced::Limits::NONE
            .min_width(720.0)
            .min_height(480.0),
    );

    // The watcher compares event paths against this one, so make it absolute.
    let content_file = std::env::args().nth(1).map(|arg| {
        let path = PathBuf::from(arg);
        std::fs::canonicalize(&path).unwrap_or(path)
    });

    cosmic::app::run::<Folio>(settings, content_file)
}
