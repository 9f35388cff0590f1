//! ThumbnailGrid - fixed-column grid of clickable image thumbnails
//!
//! Every cell has the same size: the configured width, and a height taken
//! from the grid aspect ratio. Missing images render as a placeholder so the
//! grid keeps its shape.

use std::ops::Range;

use cosmic::{
    Element,
    iced::Length,
    widget::{column, image::Handle, mouse_area, row, text, tooltip},
};
use shared::grid_config::GridConfiguration;

use crate::image_source::{content_fit, image_or_placeholder};

/// An item in the thumbnail grid
#[derive(Debug, Clone)]
pub struct GridItem {
    pub handle: Option<Handle>,
    /// Accessible label, shown as a tooltip
    pub label: String,
}

impl GridItem {
    pub fn new(handle: Option<Handle>, label: impl Into<String>) -> Self {
        Self {
            handle,
            label: label.into(),
        }
    }
}

/// Builder for ThumbnailGrid
pub struct ThumbnailGrid<'a, M> {
    items: Vec<GridItem>,
    config: GridConfiguration,
    cell_width: f32,
    on_activate: Option<Box<dyn Fn(usize) -> M + 'a>>,
}

impl<'a, M: Clone + 'a> ThumbnailGrid<'a, M> {
    pub fn new(items: Vec<GridItem>) -> Self {
        Self {
            items,
            config: GridConfiguration::default(),
            cell_width: 240.0,
            on_activate: None,
        }
    }

    pub fn config(mut self, config: GridConfiguration) -> Self {
        self.config = config;
        self
    }

    pub fn cell_width(mut self, width: u32) -> Self {
        self.cell_width = width as f32;
        self
    }

    /// Callback when a thumbnail is clicked
    pub fn on_activate<F>(mut self, f: F) -> Self
    where
        F: Fn(usize) -> M + 'a,
    {
        self.on_activate = Some(Box::new(f));
        self
    }

    pub fn into_element(self) -> Element<'a, M> {
        if let Err(err) = self.config.validate() {
            tracing::warn!("invalid grid configuration, using defaults: {err}");
        }
        let config = if self.config.is_valid() {
            self.config
        } else {
            GridConfiguration::default().with_fit(self.config.fit)
        };

        let width = Length::Fixed(self.cell_width);
        let height = Length::Fixed(config.cell_height(self.cell_width));
        let fit = content_fit(config.fit);
        let on_activate = self.on_activate;
        let ranges = row_ranges(self.items.len(), config.columns);

        let mut cells = self.items.into_iter().enumerate().map(|(idx, item)| {
            let thumb = image_or_placeholder(item.handle, fit, width, height);
            let thumb: Element<'a, M> = match on_activate.as_ref() {
                Some(on_activate) => mouse_area(thumb).on_press(on_activate(idx)).into(),
                None => thumb,
            };

            tooltip(thumb, text::caption(item.label), tooltip::Position::Bottom).into()
        });

        let mut grid = column()
            .spacing(config.spacing)
            .padding(config.padding);

        for range in ranges {
            let cells_in_row = cells.by_ref().take(range.len());
            let grid_row = cells_in_row.fold(row().spacing(config.spacing), |r, cell| r.push(cell));
            grid = grid.push(grid_row);
        }

        grid.into()
    }
}

impl<'a, M: Clone + 'a> From<ThumbnailGrid<'a, M>> for Element<'a, M> {
    fn from(grid: ThumbnailGrid<'a, M>) -> Self {
        grid.into_element()
    }
}

/// Constructor function
pub fn thumbnail_grid<'a, M: Clone + 'a>(items: Vec<GridItem>) -> ThumbnailGrid<'a, M> {
    ThumbnailGrid::new(items)
}

/// Item index ranges for each row of a grid with `columns` columns.
pub fn row_ranges(len: usize, columns: usize) -> Vec<Range<usize>> {
    let columns = columns.max(1);
    (0..len)
        .step_by(columns)
        .map(|start| start..(start + columns).min(len))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_ranges() {
        assert_eq!(row_ranges(5, 2), vec![0..2, 2..4, 4..5]);
        assert_eq!(row_ranges(4, 2), vec![0..2, 2..4]);
        assert_eq!(row_ranges(2, 3), vec![0..2]);
        assert!(row_ranges(0, 2).is_empty());
    }

    #[test]
    fn test_row_ranges_zero_columns() {
        assert_eq!(row_ranges(3, 0), vec![0..1, 1..2, 2..3]);
    }

    #[test]
    fn test_row_ranges_match_grid_rows() {
        let config = GridConfiguration::new(3);
        for len in 0..10 {
            assert_eq!(row_ranges(len, config.columns).len(), config.rows(len));
        }
    }
}
