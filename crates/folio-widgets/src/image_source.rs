use cosmic::{
    Element,
    iced::{ContentFit, Length},
    theme,
    widget::{container, icon, image, image::Handle},
};
use shared::grid_config::ThumbnailFit;
use std::path::Path;

const PLACEHOLDER_ICON: &str = "image-missing-symbolic";

/// Handle for an image file, or `None` when the file does not exist.
pub fn load_handle(path: Option<&Path>) -> Option<Handle> {
    let path = path?;
    if !path.is_file() {
        tracing::debug!(path = %path.display(), "no image at path");
        return None;
    }
    Some(Handle::from_path(path))
}

pub fn content_fit(fit: ThumbnailFit) -> ContentFit {
    match fit {
        ThumbnailFit::Cover => ContentFit::Cover,
        ThumbnailFit::Contain => ContentFit::Contain,
    }
}

/// The image sized to `width` x `height`, or a placeholder icon of the same
/// size when there is no handle.
pub fn image_or_placeholder<'a, M: 'a>(
    handle: Option<Handle>,
    fit: ContentFit,
    width: Length,
    height: Length,
) -> Element<'a, M> {
    match handle {
        Some(handle) => image(handle)
            .content_fit(fit)
            .width(width)
            .height(height)
            .into(),
        None => container(icon::from_name(PLACEHOLDER_ICON).size(48))
            .center_x(width)
            .center_y(height)
            .class(theme::Container::Card)
            .into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_fit_mapping() {
        assert_eq!(content_fit(ThumbnailFit::Cover), ContentFit::Cover);
        assert_eq!(content_fit(ThumbnailFit::Contain), ContentFit::Contain);
    }

    #[test]
    fn test_missing_file_has_no_handle() {
        assert!(load_handle(None).is_none());
        assert!(load_handle(Some(Path::new("/nonexistent/folio/a.jpeg"))).is_none());
    }
}
