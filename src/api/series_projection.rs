use crate::core::{BarGeometry, Record, project_bars};
use crate::error::ChartResult;
use crate::render::Renderer;

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    /// Bar geometry keyed by record name, in display order.
    pub fn bars(&self) -> ChartResult<Vec<BarGeometry>> {
        project_bars(&self.dataset, &self.scales)
    }

    /// Top-most bar under the point, if any.
    ///
    /// Later bars are painted over earlier ones, so the search runs backwards.
    pub fn bar_at(&self, x: f64, y: f64) -> ChartResult<Option<BarGeometry>> {
        Ok(self
            .bars()?
            .into_iter()
            .rev()
            .find(|bar| bar.contains(x, y)))
    }

    /// Record shown for `name`: its first occurrence in display order, which
    /// is also the occurrence that owns the band.
    pub(super) fn display_record(&self, name: &str) -> Option<&Record> {
        self.dataset
            .display_order()
            .into_iter()
            .find(|record| record.name == name)
    }
}
