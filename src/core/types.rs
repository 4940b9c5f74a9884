use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Space reserved around the plot for axes, title and legend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 70.0,
            right: 60.0,
            bottom: 80.0,
            left: 100.0,
        }
    }
}

impl Margins {
    pub fn validate(self) -> ChartResult<Self> {
        for (side, value) in [
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
            ("left", self.left),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "margin `{side}` must be finite and >= 0"
                )));
            }
        }
        Ok(self)
    }
}

/// Minimum drawing surface applied to container-reported sizes.
///
/// Containers that report zero (not yet laid out) end up at exactly the
/// minimum size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasSizing {
    pub min_width: u32,
    pub min_height: u32,
}

impl Default for CanvasSizing {
    fn default() -> Self {
        Self {
            min_width: 600,
            min_height: 400,
        }
    }
}

impl CanvasSizing {
    #[must_use]
    pub fn resolve(self, reported_width: u32, reported_height: u32) -> Viewport {
        Viewport::new(
            reported_width.max(self.min_width),
            reported_height.max(self.min_height),
        )
    }

    pub fn validate(self) -> ChartResult<Self> {
        if self.min_width == 0 || self.min_height == 0 {
            return Err(ChartError::InvalidViewport {
                width: self.min_width,
                height: self.min_height,
            });
        }
        Ok(self)
    }
}

/// Inner drawing region in viewport coordinates.
///
/// Inner extents never drop below one unit so scales derived from a tiny
/// viewport stay well-formed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    #[must_use]
    pub fn from_viewport(viewport: Viewport, margins: Margins) -> Self {
        let inner_width = f64::from(viewport.width) - margins.left - margins.right;
        let inner_height = f64::from(viewport.height) - margins.top - margins.bottom;
        Self {
            left: margins.left,
            top: margins.top,
            width: inner_width.max(1.0),
            height: inner_height.max(1.0),
        }
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.top + self.height
    }

    #[must_use]
    pub fn contains(self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.right() && y >= self.top && y <= self.bottom()
    }
}
