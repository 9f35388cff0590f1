use cosmic::cosmic_config::{self, Config, ConfigGet, ConfigSet, CosmicConfigEntry};
use folio_types::ProjectSort;
use serde::{Deserialize, Serialize};
use shared::grid_config::GridConfiguration;
use std::fmt;

pub const CONFIG_VERSION: u64 = 1;
pub const APP_ID: &str = "org.codeberg.bhh32.Folio";

/// Maximum number of recent content files to remember
pub const MAX_RECENT_CONTENT: usize = 10;

pub const MIN_GRID_COLUMNS: u32 = 1;
pub const MAX_GRID_COLUMNS: u32 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AppTheme {
    #[default]
    System,
    Dark,
    Light,
}

impl AppTheme {
    pub const ALL: &'static [Self] = &[Self::System, Self::Dark, Self::Light];

    pub fn to_cosmic_theme(self) -> cosmic::Theme {
        match self {
            AppTheme::System => cosmic::theme::system_preference(),
            AppTheme::Dark => cosmic::Theme::dark(),
            AppTheme::Light => cosmic::Theme::light(),
        }
    }
}

impl fmt::Display for AppTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppTheme::System => write!(f, "System"),
            AppTheme::Dark => write!(f, "Dark"),
            AppTheme::Light => write!(f, "Light"),
        }
    }
}

/// Width of a gallery thumbnail. Height follows the fit aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThumbnailSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ThumbnailSize {
    pub const ALL: &'static [Self] = &[Self::Small, Self::Medium, Self::Large];

    pub fn pixels(self) -> u32 {
        match self {
            ThumbnailSize::Small => 160,
            ThumbnailSize::Medium => 240,
            ThumbnailSize::Large => 320,
        }
    }
}

impl fmt::Display for ThumbnailSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThumbnailSize::Small => write!(f, "Small"),
            ThumbnailSize::Medium => write!(f, "Medium"),
            ThumbnailSize::Large => write!(f, "Large"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FolioConfig {
    pub app_theme: AppTheme,
    pub thumbnail_size: ThumbnailSize,
    pub grid_columns: u32,
    pub project_sort: ProjectSort,
    pub remember_content: bool,
    pub content_path: Option<String>,
    pub recent_content: Vec<String>,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            app_theme: AppTheme::default(),
            thumbnail_size: ThumbnailSize::default(),
            grid_columns: 2,
            project_sort: ProjectSort::default(),
            remember_content: true,
            content_path: None,
            recent_content: Vec::new(),
        }
    }
}

impl FolioConfig {
    /// Most recent first. Re-adding a path moves it to the front.
    pub fn add_recent_content(&mut self, path: String) {
        self.recent_content.retain(|p| p != &path);
        self.recent_content.insert(0, path);
        self.recent_content.truncate(MAX_RECENT_CONTENT);
    }

    pub fn set_grid_columns(&mut self, columns: u32) {
        self.grid_columns = columns.clamp(MIN_GRID_COLUMNS, MAX_GRID_COLUMNS);
    }

    /// Grid layout for the project gallery.
    pub fn grid(&self) -> GridConfiguration {
        let columns = self.grid_columns.clamp(MIN_GRID_COLUMNS, MAX_GRID_COLUMNS);
        GridConfiguration::new(columns as usize)
    }

    /// Content file to open at startup, if one should be reopened.
    pub fn startup_content(&self) -> Option<&str> {
        self.remember_content
            .then_some(self.content_path.as_deref())
            .flatten()
    }
}

impl CosmicConfigEntry for FolioConfig {
    const VERSION: u64 = CONFIG_VERSION;

    fn write_entry(&self, config: &cosmic_config::Config) -> Result<(), cosmic_config::Error> {
        config.set("app_theme", self.app_theme)?;
        config.set("thumbnail_size", self.thumbnail_size)?;
        config.set("grid_columns", self.grid_columns)?;
        config.set("project_sort", self.project_sort)?;
        config.set("remember_content", self.remember_content)?;
        config.set("content_path", self.content_path.clone())?;
        config.set("recent_content", self.recent_content.clone())?;
        Ok(())
    }

    fn get_entry(
        config: &cosmic_config::Config,
    ) -> Result<Self, (Vec<cosmic_config::Error>, Self)> {
        let mut errors = Vec::new();
        let mut cfg = FolioConfig::default();

        macro_rules! get_field {
            ($name:literal, $field:ident, $type:ty) => {
                match config.get::<$type>($name) {
                    Ok(val) => cfg.$field = val,
                    Err(e) => errors.push(e),
                }
            };
        }

        get_field!("app_theme", app_theme, AppTheme);
        get_field!("thumbnail_size", thumbnail_size, ThumbnailSize);
        get_field!("grid_columns", grid_columns, u32);
        get_field!("project_sort", project_sort, ProjectSort);
        get_field!("remember_content", remember_content, bool);
        get_field!("content_path", content_path, Option<String>);
        get_field!("recent_content", recent_content, Vec<String>);

        if errors.is_empty() {
            Ok(cfg)
        } else {
            Err((errors, cfg))
        }
    }

    fn update_keys<T: AsRef<str>>(
        &mut self,
        config: &cosmic_config::Config,
        changed_keys: &[T],
    ) -> (Vec<cosmic_config::Error>, Vec<&'static str>) {
        let mut errors = Vec::new();
        let mut updated = Vec::new();

        macro_rules! update_field {
            ($name:literal, $field:ident, $type:ty) => {
                match config.get::<$type>($name) {
                    Ok(val) => {
                        self.$field = val;
                        updated.push($name);
                    }
                    Err(e) => errors.push(e),
                }
            };
        }

        for key in changed_keys {
            match key.as_ref() {
                "app_theme" => update_field!("app_theme", app_theme, AppTheme),
                "thumbnail_size" => update_field!("thumbnail_size", thumbnail_size, ThumbnailSize),
                "grid_columns" => update_field!("grid_columns", grid_columns, u32),
                "project_sort" => update_field!("project_sort", project_sort, ProjectSort),
                "remember_content" => update_field!("remember_content", remember_content, bool),
                "content_path" => update_field!("content_path", content_path, Option<String>),
                "recent_content" => update_field!("recent_content", recent_content, Vec<String>),
                _ => {}
            }
        }

        (errors, updated)
    }
}

pub fn config() -> Result<Config, cosmic_config::Error> {
    Config::new(APP_ID, CONFIG_VERSION)
}
