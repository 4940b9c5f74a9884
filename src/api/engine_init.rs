use tracing::debug;

use crate::core::{Dataset, ScaleSet};
use crate::error::ChartResult;
use crate::interaction::InteractionState;
use crate::loader::LoadSequencer;
use crate::render::Renderer;

use super::{ChartEngine, ChartEngineConfig};

impl<R: Renderer> ChartEngine<R> {
    /// Creates an engine with an empty dataset.
    ///
    /// The configured viewport is treated as a container report and raised to
    /// the canvas minimums.
    pub fn new(renderer: R, config: ChartEngineConfig) -> ChartResult<Self> {
        config.validate()?;
        let viewport = config
            .canvas
            .resolve(config.viewport.width, config.viewport.height);
        let dataset = Dataset::empty();
        let scales = ScaleSet::derive(&dataset, config.scale_params(viewport))?;
        debug!(
            width = viewport.width,
            height = viewport.height,
            "chart engine initialized"
        );

        Ok(Self {
            renderer,
            config,
            viewport,
            dataset,
            scales,
            interaction: InteractionState::default(),
            loads: LoadSequencer::default(),
        })
    }
}
