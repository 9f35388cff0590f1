use serde::{Deserialize, Serialize};
use std::fmt;

/// How a thumbnail fills its grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThumbnailFit {
    /// Crop to fill the cell (landscape cells)
    #[default]
    Cover,
    /// Letterbox inside the cell (portrait cells)
    Contain,
}

impl ThumbnailFit {
    pub const ALL: &'static [Self] = &[Self::Cover, Self::Contain];

    /// Cell aspect ratio that goes with this fit.
    pub fn aspect_ratio(self) -> AspectRatio {
        match self {
            ThumbnailFit::Cover => AspectRatio::new(4, 3),
            ThumbnailFit::Contain => AspectRatio::new(3, 4),
        }
    }
}

impl fmt::Display for ThumbnailFit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThumbnailFit::Cover => write!(f, "Cover"),
            ThumbnailFit::Contain => write!(f, "Contain"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AspectRatio {
    pub width: u32,
    pub height: u32,
}

impl AspectRatio {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    pub fn height_for(&self, width: f32) -> f32 {
        if !self.is_valid() {
            return width;
        }
        width * self.height as f32 / self.width as f32
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GridConfigError {
    #[error("Grid must have at least one column")]
    ZeroColumns,

    #[error("Invalid aspect ratio {width}:{height}")]
    InvalidAspect { width: u32, height: u32 },

    #[error("Padding {padding} is too large for spacing {spacing}")]
    PaddingTooLarge { padding: u16, spacing: u16 },
}

/// Layout of a thumbnail grid: a fixed column count with cells sized by
/// the available width and the aspect ratio of the fit mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfiguration {
    pub columns: usize,
    pub spacing: u16,
    pub padding: u16,
    pub fit: ThumbnailFit,
    pub aspect: AspectRatio,
}

impl GridConfiguration {
    pub fn new(columns: usize) -> Self {
        Self {
            columns,
            spacing: 24,
            padding: 0,
            fit: ThumbnailFit::Cover,
            aspect: ThumbnailFit::Cover.aspect_ratio(),
        }
    }

    pub fn with_spacing(mut self, spacing: u16) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_padding(mut self, padding: u16) -> Self {
        self.padding = padding;
        self
    }

    /// Sets the fit mode along with its matching aspect ratio.
    pub fn with_fit(mut self, fit: ThumbnailFit) -> Self {
        self.fit = fit;
        self.aspect = fit.aspect_ratio();
        self
    }

    pub fn with_aspect(mut self, aspect: AspectRatio) -> Self {
        self.aspect = aspect;
        self
    }

    pub fn rows(&self, total_items: usize) -> usize {
        if self.columns == 0 {
            0
        } else {
            total_items.div_ceil(self.columns)
        }
    }

    pub fn cell_width(&self, container_width: f32) -> f32 {
        let cols = self.columns.max(1);
        let gaps = self.spacing as f32 * (cols - 1) as f32;
        let inner = container_width - gaps - 2.0 * self.padding as f32;
        (inner / cols as f32).max(0.0)
    }

    pub fn cell_height(&self, cell_width: f32) -> f32 {
        self.aspect.height_for(cell_width)
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    pub fn validate(&self) -> Result<(), GridConfigError> {
        if self.columns == 0 {
            return Err(GridConfigError::ZeroColumns);
        }

        if !self.aspect.is_valid() {
            return Err(GridConfigError::InvalidAspect {
                width: self.aspect.width,
                height: self.aspect.height,
            });
        }

        if self.spacing > 0 && self.padding > self.spacing * 4 {
            return Err(GridConfigError::PaddingTooLarge {
                padding: self.padding,
                spacing: self.spacing,
            });
        }

        Ok(())
    }
}

impl Default for GridConfiguration {
    fn default() -> Self {
        Self::new(2)
    }
}
