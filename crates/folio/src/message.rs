use cosmic::iced_widget::scrollable::AbsoluteOffset;
use folio_config::{AppTheme, ThumbnailSize};
use folio_content::{CategoryFilter, Feed};
use folio_types::ProjectSort;
use std::{path::PathBuf, sync::Arc};

pub use crate::{gallery::GalleryMessage, key_binds::MenuAction};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Home,
    Projects,
    /// Project id
    Project(String),
    Contact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextPage {
    About,
    Settings,
}

#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Page),
    Gallery(GalleryMessage),
    PageScrolled(AbsoluteOffset),
    FilterCategory(CategoryFilter),
    Contact(ContactMessage),
    Settings(SettingsMessage),
    KeyBind(MenuAction),
    ToggleContextPage(ContextPage),
    OpenFileDialog,
    OpenContent(PathBuf),
    OpenRecentContent(usize),
    ClearRecentContent,
    UseBuiltinContent,
    Reload,
    RetryContent,
    ContentLoaded(Result<Feed, Arc<String>>),
    WatcherEvent(crate::watcher::WatcherEvent),
    Cancelled,
    Quit,
    Surface(cosmic::surface::Action),
}

#[derive(Debug, Clone)]
pub enum SettingsMessage {
    AppTheme(AppTheme),
    ThumbnailSize(ThumbnailSize),
    GridColumns(u32),
    ProjectSort(ProjectSort),
    RememberContent(bool),
}

/// Edits to the contact form. The form is never submitted.
#[derive(Debug, Clone)]
pub enum ContactMessage {
    Name(String),
    Email(String),
    ProjectType(usize),
    Body(String),
}
