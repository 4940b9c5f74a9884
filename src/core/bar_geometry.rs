use serde::{Deserialize, Serialize};

use crate::core::{Category, Dataset, ScaleSet};
use crate::error::ChartResult;
use crate::render::Color;

/// Bar rectangle for one record in viewport coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    pub name: String,
    pub category: Category,
    pub magnitude: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill_color: Color,
}

impl BarGeometry {
    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }

    #[must_use]
    pub fn center_x(&self) -> f64 {
        self.x + self.width * 0.5
    }
}

/// Projects every record into a bar, in display order.
///
/// Bars span from the zero baseline to the record's magnitude, so negative
/// magnitudes hang below the baseline instead of producing a negative height.
/// Records sharing a name share a band and therefore overlap.
pub fn project_bars(dataset: &Dataset, scales: &ScaleSet) -> ChartResult<Vec<BarGeometry>> {
    let plot = scales.plot;
    let baseline_px = plot.top + scales.magnitude.map(0.0)?;
    let width = scales.band.bandwidth();

    let mut bars = Vec::with_capacity(dataset.len());
    for record in dataset.display_order() {
        let Some(offset) = scales.band.position(&record.name) else {
            continue;
        };
        let value_px = plot.top + scales.magnitude.map(record.magnitude)?;
        bars.push(BarGeometry {
            name: record.name.clone(),
            category: record.category,
            magnitude: record.magnitude,
            x: plot.left + offset,
            y: value_px.min(baseline_px),
            width,
            height: (baseline_px - value_px).abs(),
            fill_color: scales.palette.color(record.category),
        });
    }
    Ok(bars)
}
