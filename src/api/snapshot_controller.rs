use crate::error::ChartResult;
use crate::render::Renderer;

use super::{ChartEngine, EngineSnapshot};

impl<R: Renderer> ChartEngine<R> {
    /// Builds a deterministic snapshot useful for regression tests.
    pub fn snapshot(&self) -> ChartResult<EngineSnapshot> {
        Ok(EngineSnapshot {
            viewport: self.viewport,
            records: self.dataset.records().to_vec(),
            magnitude_domain: self.scales.magnitude.domain(),
            tick_values: self.scales.ticks.values.clone(),
            bandwidth: self.scales.band.bandwidth(),
            bars: self.bars()?,
            hover: self.interaction.hover().clone(),
            tooltip: self.tooltip(),
        })
    }
}
