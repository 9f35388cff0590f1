#[cfg(test)]
mod tests {
    use shared::screen_reader_labels::{ScreenReaderLabel, counter_label, image_label};

    #[test]
    fn test_thumbnail_labels_follow_grid_order() {
        let labels: Vec<String> = (0..3).map(|idx| image_label("Quirno", idx)).collect();

        assert_eq!(
            labels,
            vec![
                "Quirno - Imagen 1".to_string(),
                "Quirno - Imagen 2".to_string(),
                "Quirno - Imagen 3".to_string(),
            ]
        );
    }

    #[test]
    fn test_label_keeps_project_title_verbatim() {
        let label = image_label("Pabellón de Cristal", 4);
        assert_eq!(label, "Pabellón de Cristal - Imagen 5");
    }

    #[test]
    fn test_counter_matches_lightbox_format() {
        assert_eq!(counter_label(0, 9), "1 / 9");
        assert_eq!(counter_label(8, 9), "9 / 9");
    }

    #[test]
    fn test_custom_template() {
        let label = ScreenReaderLabel::new("{{label}} | photo {{index}}")
            .with_variable("label", "Arenales")
            .with_variable("index", "2");

        assert_eq!(label.render(), "Arenales | photo 2");
    }
}
