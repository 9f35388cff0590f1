use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Alt text for one image of a project: `"{label} - Imagen {n}"`.
pub const IMAGE_TEMPLATE: &str = "{{label}} - Imagen {{index}}";

/// Position counter shown in the lightbox: `"{n} / {total}"`.
pub const COUNTER_TEMPLATE: &str = "{{current}} / {{total}}";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenReaderLabel {
    pub template: String,
    pub variables: HashMap<String, String>,
}

impl ScreenReaderLabel {
    pub fn new<S: Into<String>>(template: S) -> Self {
        Self {
            template: template.into(),
            variables: HashMap::new(),
        }
    }

    pub fn with_variable<S: Into<String>>(mut self, key: &str, value: S) -> Self {
        self.variables.insert(key.to_string(), value.into());
        self
    }

    /// Substitute every `{{key}}` placeholder in one pass over the template.
    /// Substituted values are never rescanned. Unknown placeholders are left as-is.
    pub fn render(&self) -> String {
        let mut rendered = String::with_capacity(self.template.len());
        let mut rest = self.template.as_str();

        while let Some(start) = rest.find("{{") {
            rendered.push_str(&rest[..start]);
            let after_open = &rest[start + 2..];

            let Some(end) = after_open.find("}}") else {
                rest = &rest[start..];
                break;
            };

            let key = &after_open[..end];
            match self.variables.get(key) {
                Some(value) => rendered.push_str(value),
                None => rendered.push_str(&rest[start..start + 2 + end + 2]),
            }
            rest = &after_open[end + 2..];
        }

        rendered.push_str(rest);
        rendered
    }

    /// Label for the image at 0-based `position`.
    pub fn image(label: &str, position: usize) -> Self {
        Self::new(IMAGE_TEMPLATE)
            .with_variable("label", label)
            .with_variable("index", (position + 1).to_string())
    }

    /// Counter for the image at 0-based `index` out of `total`.
    pub fn counter(index: usize, total: usize) -> Self {
        Self::new(COUNTER_TEMPLATE)
            .with_variable("current", (index + 1).to_string())
            .with_variable("total", total.to_string())
    }
}

pub fn image_label(label: &str, position: usize) -> String {
    ScreenReaderLabel::image(label, position).render()
}

pub fn counter_label(index: usize, total: usize) -> String {
    ScreenReaderLabel::counter(index, total).render()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_reader_label_creation() {
        let label = ScreenReaderLabel::new("Image {{index}}");
        assert_eq!(label.template, "Image {{index}}");
        assert!(label.variables.is_empty());
    }

    #[test]
    fn test_unknown_placeholders_survive() {
        let label = ScreenReaderLabel::new("{{label}} ({{missing}})").with_variable("label", "Quirno");
        assert_eq!(label.render(), "Quirno ({{missing}})");
    }

    #[test]
    fn test_values_are_not_rescanned() {
        for _ in 0..16 {
            assert_eq!(image_label("Casa {{index}}", 1), "Casa {{index}} - Imagen 2");
        }
        assert_eq!(image_label("Obra {{label}}", 0), "Obra {{label}} - Imagen 1");
    }

    #[test]
    fn test_unterminated_placeholder_is_kept() {
        let label = ScreenReaderLabel::new("{{label}} {{open").with_variable("label", "Quirno");
        assert_eq!(label.render(), "Quirno {{open");
    }

    #[test]
    fn test_image_label_is_one_based() {
        assert_eq!(image_label("Arenales", 0), "Arenales - Imagen 1");
        assert_eq!(image_label("Arenales", 7), "Arenales - Imagen 8");
    }

    #[test]
    fn test_counter_label() {
        assert_eq!(counter_label(0, 3), "1 / 3");
        assert_eq!(counter_label(2, 3), "3 / 3");
    }
}
