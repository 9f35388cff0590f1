use crate::image_set::{ImageRef, ImageSet};
use serde::{Deserialize, Serialize};
use shared::grid_config::ThumbnailFit;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Residential,
    Commercial,
    Cultural,
    Public,
    Urban,
    #[default]
    Other,
}

impl Category {
    pub const ALL: &'static [Self] = &[
        Self::Residential,
        Self::Commercial,
        Self::Cultural,
        Self::Public,
        Self::Urban,
        Self::Other,
    ];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Residential => write!(f, "Residential"),
            Category::Commercial => write!(f, "Commercial"),
            Category::Cultural => write!(f, "Cultural"),
            Category::Public => write!(f, "Public Spaces"),
            Category::Urban => write!(f, "Urban"),
            Category::Other => write!(f, "Other"),
        }
    }
}

/// Ordering of the project listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ProjectSort {
    #[default]
    Newest,
    Oldest,
    TitleAsc,
    TitleDesc,
}

impl ProjectSort {
    pub const ALL: &'static [Self] = &[Self::Newest, Self::Oldest, Self::TitleAsc, Self::TitleDesc];
}

impl fmt::Display for ProjectSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectSort::Newest => write!(f, "Newest first"),
            ProjectSort::Oldest => write!(f, "Oldest first"),
            ProjectSort::TitleAsc => write!(f, "Title A-Z"),
            ProjectSort::TitleDesc => write!(f, "Title Z-A"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub location: String,
    #[serde(default)]
    pub category: Category,
    pub year: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub architect: Option<String>,
    /// Paragraphs
    #[serde(default)]
    pub description: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_image: Option<ImageRef>,
    #[serde(default)]
    pub images: Vec<ImageRef>,
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub thumbnail_fit: ThumbnailFit,
}

impl Project {
    /// Gallery images: the main image as primary, then the rest.
    pub fn image_set(&self) -> ImageSet {
        ImageSet::new(self.main_image.clone(), self.images.clone())
    }

    /// Image used for cards and listings.
    pub fn cover(&self) -> Option<&ImageRef> {
        self.main_image
            .as_ref()
            .filter(|main| !main.is_empty())
            .or_else(|| self.images.first())
    }

    pub fn summary(&self) -> Option<&str> {
        self.description.first().map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Profile {
    pub name: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub hero_title: String,
    #[serde(default)]
    pub hero_subtitle: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_image: Option<ImageRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portrait: Option<ImageRef>,
    #[serde(default)]
    pub about: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience_years: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ContactInfo {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub availability: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageRef>,
}

/// Everything the portfolio shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SiteContent {
    pub profile: Profile,
    #[serde(default)]
    pub contact: ContactInfo,
    #[serde(default)]
    pub projects: Vec<Project>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project() -> Project {
        Project {
            id: "4".to_string(),
            title: "Quirno".to_string(),
            location: "Flores, Buenos Aires".to_string(),
            category: Category::Residential,
            year: 2023,
            client: None,
            architect: Some("Estudio Nómade".to_string()),
            description: vec!["Renovación integral".to_string()],
            main_image: Some("/images/quirno-1.jpeg".into()),
            images: vec!["/images/quirno-2.jpeg".into(), "/images/quirno-3.jpeg".into()],
            services: Vec::new(),
            featured: true,
            thumbnail_fit: ThumbnailFit::Cover,
        }
    }

    #[test]
    fn test_image_set_leads_with_main_image() {
        let set = project().image_set();
        assert_eq!(set.len(), 3);
        assert_eq!(set.primary().map(ImageRef::as_str), Some("/images/quirno-1.jpeg"));
        assert_eq!(set.display_index(0), Some(1));
    }

    #[test]
    fn test_cover_falls_back_to_first_image() {
        let mut project = project();
        assert_eq!(project.cover().map(ImageRef::as_str), Some("/images/quirno-1.jpeg"));

        project.main_image = None;
        assert_eq!(project.cover().map(ImageRef::as_str), Some("/images/quirno-2.jpeg"));

        project.images.clear();
        assert_eq!(project.cover(), None);
    }

    #[test]
    fn test_project_defaults_from_json() {
        let json = r#"{ "id": "9", "title": "Casa", "location": "Mendoza", "year": 2021 }"#;
        let project: Project = serde_json::from_str(json).unwrap();

        assert_eq!(project.category, Category::Other);
        assert!(project.images.is_empty());
        assert!(!project.featured);
        assert_eq!(project.thumbnail_fit, ThumbnailFit::Cover);
        assert!(project.image_set().is_empty());
    }

    #[test]
    fn test_empty_main_image_is_not_primary() {
        let json = r#"{
            "id": "5", "title": "Galpón", "location": "Rosario", "year": 2022,
            "main_image": "",
            "images": ["/b.jpg", "/c.jpg"]
        }"#;
        let project: Project = serde_json::from_str(json).unwrap();
        let set = project.image_set();

        assert!(!set.has_primary());
        assert_eq!(set.len(), 2);
        assert_eq!(set.display_index(0), Some(0));
        assert_eq!(project.cover().map(ImageRef::as_str), Some("/b.jpg"));
    }

    #[test]
    fn test_category_names() {
        let category: Category = serde_json::from_str("\"urban\"").unwrap();
        assert_eq!(category, Category::Urban);
        assert_eq!(Category::Public.to_string(), "Public Spaces");
        assert_eq!(Category::ALL.len(), 6);
    }
}
