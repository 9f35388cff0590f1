use folio_content::{ContentError, ContentRoot, load_content, load_feed};
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

const FEED: &str = r#"{
    "profile": { "name": "Ana Ruiz", "hero_image": "/images/hero.jpeg" },
    "contact": { "email": "ana@example.com" },
    "projects": [
        {
            "id": "casa-sur",
            "title": "Casa Sur",
            "location": "Rosario",
            "category": "residential",
            "year": 2024,
            "main_image": "/images/casa-sur-1.jpeg",
            "images": ["/images/casa-sur-2.jpeg", "/images/casa-sur-3.jpeg"],
            "featured": true
        }
    ]
}"#;

#[tokio::test]
async fn test_load_content_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(FEED.as_bytes()).unwrap();

    let content = load_content(file.path()).await.unwrap();

    assert_eq!(content.profile.name, "Ana Ruiz");
    assert_eq!(content.projects.len(), 1);
    assert_eq!(content.projects[0].image_set().len(), 3);
}

#[tokio::test]
async fn test_missing_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.json");

    match load_content(&path).await {
        Err(ContentError::Io { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected an io error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"{ not json").unwrap();

    assert!(matches!(
        load_content(file.path()).await,
        Err(ContentError::Parse { .. })
    ));
}

#[tokio::test]
async fn test_feed_images_resolve_next_to_feed() {
    let dir = TempDir::new().unwrap();
    let feed_path = dir.path().join("portfolio.json");
    std::fs::write(&feed_path, FEED).unwrap();
    std::fs::create_dir(dir.path().join("images")).unwrap();
    std::fs::write(dir.path().join("images/casa-sur-1.jpeg"), b"jpeg").unwrap();

    let feed = load_feed(feed_path.clone()).await.unwrap();
    assert_eq!(feed.path.as_deref(), Some(feed_path.as_path()));
    assert_eq!(feed.root, ContentRoot::new(dir.path()));

    let project = &feed.content.projects[0];
    let images = project.image_set();
    let main = images.primary().unwrap();
    assert_eq!(
        feed.root.resolve_existing(main),
        Some(dir.path().join("images/casa-sur-1.jpeg"))
    );
    assert_eq!(feed.root.resolve_existing(&images.thumbnails()[0]), None);
}
