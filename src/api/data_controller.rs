use tracing::{debug, info};

use crate::core::{Dataset, ScaleSet};
use crate::error::ChartResult;
use crate::loader::{
    ColumnMapping, LoadOutcome, LoadReport, LoadTicket, RecordSource, load_dataset,
};
use crate::render::Renderer;

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Replaces the working dataset wholesale.
    ///
    /// Scales are derived before anything is committed: on error the engine
    /// keeps its previous dataset, scales and hover. On success hover is
    /// reset to idle.
    pub fn set_dataset(&mut self, dataset: Dataset) -> ChartResult<()> {
        let scales = ScaleSet::derive(&dataset, self.config.scale_params(self.viewport))?;
        debug!(records = dataset.len(), "set dataset");
        self.dataset = dataset;
        self.scales = scales;
        self.interaction.reset();
        Ok(())
    }

    pub fn apply_load_report(&mut self, report: LoadReport) -> ChartResult<()> {
        if report.source_failed {
            debug!("applying empty dataset after failed load");
        }
        self.set_dataset(report.dataset)
    }

    /// Registers a new load request. Any request still in flight becomes stale.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.loads.begin()
    }

    /// Applies a finished load if `ticket` is still the newest request.
    ///
    /// Returns `false` when the result was superseded and discarded.
    pub fn complete_load(&mut self, ticket: LoadTicket, report: LoadReport) -> ChartResult<bool> {
        match self.loads.complete(ticket, report) {
            LoadOutcome::Current(report) => {
                self.apply_load_report(report)?;
                Ok(true)
            }
            LoadOutcome::Superseded { .. } => Ok(false),
        }
    }

    /// Runs one complete load cycle against `source` and applies the result.
    ///
    /// Source failures leave the engine with an empty dataset; only scale
    /// derivation errors are returned.
    pub fn load_from<S>(&mut self, source: &S, mapping: &ColumnMapping) -> ChartResult<LoadReportSummary>
    where
        S: RecordSource + ?Sized,
    {
        let ticket = self.begin_load();
        let report = load_dataset(source, mapping);
        let summary = LoadReportSummary::from(&report);
        let applied = self.complete_load(ticket, report)?;
        info!(
            accepted = summary.accepted,
            rejected = summary.rejected,
            applied,
            "load cycle finished"
        );
        Ok(summary)
    }
}

/// Counts describing one finished load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadReportSummary {
    pub accepted: usize,
    pub rejected: usize,
    pub source_failed: bool,
}

impl From<&LoadReport> for LoadReportSummary {
    fn from(report: &LoadReport) -> Self {
        Self {
            accepted: report.accepted(),
            rejected: report.rejected(),
            source_failed: report.source_failed,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::api::{ChartEngine, ChartEngineConfig};
    use crate::core::{Category, Dataset, Record};
    use crate::render::NullRenderer;

    fn engine_with_lion() -> ChartEngine<NullRenderer> {
        let mut engine = ChartEngine::new(NullRenderer::default(), ChartEngineConfig::default())
            .expect("engine init");
        engine
            .set_dataset(Dataset::from(vec![
                Record::new("Lion", 80.0, Category::Carnivore).expect("record"),
            ]))
            .expect("set dataset");
        engine.pointer_enter("Lion", 500.0, 300.0);
        engine
    }

    #[test]
    fn failed_dataset_swap_keeps_previous_state() {
        let mut engine = engine_with_lion();
        let scales_before = engine.scales.clone();
        // Out-of-range padding makes scale derivation fail.
        engine.config.band_padding = 2.0;

        let result = engine.set_dataset(Dataset::from(vec![
            Record::new("Tiny", 1.0, Category::Herbivore).expect("record"),
        ]));

        assert!(result.is_err());
        assert_eq!(engine.dataset().records()[0].name, "Lion");
        assert_eq!(engine.scales, scales_before);
        assert_eq!(engine.hovered_name(), Some("Lion"));
    }

    #[test]
    fn failed_resize_keeps_previous_viewport_and_scales() {
        let mut engine = engine_with_lion();
        let viewport_before = engine.viewport();
        let scales_before = engine.scales.clone();
        engine.config.band_padding = 2.0;

        assert!(engine.resize(1200, 700).is_err());
        assert_eq!(engine.viewport(), viewport_before);
        assert_eq!(engine.scales, scales_before);
    }
}
