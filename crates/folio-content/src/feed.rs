use crate::{
    error::{ContentError, ContentResult},
    root::ContentRoot,
};
use folio_types::SiteContent;
use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

const BUILTIN_FEED: &str = include_str!("../content/portfolio.json");

/// Parsed feed together with where its images live.
#[derive(Debug, Clone)]
pub struct Feed {
    pub content: SiteContent,
    pub root: ContentRoot,
    /// `None` for the bundled feed
    pub path: Option<PathBuf>,
}

impl Feed {
    pub fn builtin() -> ContentResult<Self> {
        Ok(Self {
            content: builtin_content()?,
            root: ContentRoot::builtin(),
            path: None,
        })
    }

    pub fn is_builtin(&self) -> bool {
        self.path.is_none()
    }
}

pub fn parse_content(json: &str) -> ContentResult<SiteContent> {
    let content: SiteContent = serde_json::from_str(json)?;
    validate(&content)?;
    Ok(content)
}

pub fn builtin_content() -> ContentResult<SiteContent> {
    parse_content(BUILTIN_FEED)
}

pub async fn load_content(path: impl AsRef<Path>) -> ContentResult<SiteContent> {
    let path = path.as_ref();
    let json = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    let content = parse_content(&json)?;
    tracing::info!(
        path = %path.display(),
        projects = content.projects.len(),
        "loaded content feed"
    );
    Ok(content)
}

pub async fn load_feed(path: PathBuf) -> ContentResult<Feed> {
    let content = load_content(&path).await?;
    Ok(Feed {
        content,
        root: ContentRoot::for_feed(&path),
        path: Some(path),
    })
}

fn validate(content: &SiteContent) -> ContentResult<()> {
    let mut seen = HashSet::new();

    for (position, project) in content.projects.iter().enumerate() {
        if project.id.trim().is_empty() {
            return Err(ContentError::Invalid(format!(
                "project at position {position} has an empty id"
            )));
        }

        if !seen.insert(project.id.as_str()) {
            return Err(ContentError::Invalid(format!(
                "duplicate project id \"{}\"",
                project.id
            )));
        }

        if project.title.trim().is_empty() {
            return Err(ContentError::Invalid(format!(
                "project \"{}\" has an empty title",
                project.id
            )));
        }

        if project.image_set().is_empty() {
            tracing::warn!(id = %project.id, "project has no images");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_types::{Category, ThumbnailFit};

    #[test]
    fn test_builtin_feed_parses() {
        let content = builtin_content().unwrap();

        assert_eq!(content.profile.name, "Nico Giraldez");
        assert_eq!(content.projects.len(), 12);

        let casas = content.projects.iter().find(|p| p.id == "3").unwrap();
        assert_eq!(casas.category, Category::Urban);
        assert_eq!(casas.thumbnail_fit, ThumbnailFit::Contain);
        assert_eq!(casas.image_set().len(), 7);
    }

    #[test]
    fn test_minimal_feed() {
        let content = parse_content(r#"{ "profile": { "name": "Ana" } }"#).unwrap();
        assert!(content.projects.is_empty());
        assert_eq!(content.contact.email, "");
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let json = r#"{
            "profile": { "name": "Ana" },
            "projects": [
                { "id": "1", "title": "Uno", "location": "A", "year": 2020 },
                { "id": "1", "title": "Dos", "location": "B", "year": 2021 }
            ]
        }"#;

        let err = parse_content(json).unwrap_err();
        assert!(matches!(err, ContentError::Invalid(ref msg) if msg.contains("duplicate")));
    }

    #[test]
    fn test_rejects_blank_id_and_title() {
        let blank_id = r#"{ "profile": { "name": "Ana" },
            "projects": [{ "id": " ", "title": "Uno", "location": "A", "year": 2020 }] }"#;
        assert!(matches!(parse_content(blank_id), Err(ContentError::Invalid(_))));

        let blank_title = r#"{ "profile": { "name": "Ana" },
            "projects": [{ "id": "1", "title": "", "location": "A", "year": 2020 }] }"#;
        assert!(matches!(parse_content(blank_title), Err(ContentError::Invalid(_))));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(parse_content("{ \"profile\": "), Err(ContentError::Parse { .. })));
    }
}
