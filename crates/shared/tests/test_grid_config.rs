#[cfg(test)]
mod tests {
    use shared::grid_config::{AspectRatio, GridConfiguration, ThumbnailFit};

    #[test]
    fn test_fit_drives_cell_shape() {
        let cover = GridConfiguration::new(2).with_fit(ThumbnailFit::Cover);
        let contain = GridConfiguration::new(2).with_fit(ThumbnailFit::Contain);

        // Landscape cells for cover, portrait cells for contain
        assert!(cover.cell_height(400.0) < 400.0);
        assert!(contain.cell_height(400.0) > 400.0);
    }

    #[test]
    fn test_explicit_aspect_overrides_fit() {
        let config = GridConfiguration::new(2)
            .with_fit(ThumbnailFit::Contain)
            .with_aspect(AspectRatio::new(16, 9));

        assert_eq!(config.fit, ThumbnailFit::Contain);
        assert_eq!(config.cell_height(1600.0), 900.0);
    }

    #[test]
    fn test_single_column_grid() {
        let config = GridConfiguration::new(1).with_spacing(12);

        assert_eq!(config.rows(5), 5);
        assert_eq!(config.cell_width(600.0), 600.0);
    }
}
