use tracing::debug;

use crate::core::{ScaleSet, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::{ChartEngine, ChartEngineConfig};

impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn config(&self) -> &ChartEngineConfig {
        &self.config
    }

    /// Resolved drawing surface, never below the canvas minimums.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn scale_set(&self) -> &ScaleSet {
        &self.scales
    }

    /// Applies a container-reported size.
    ///
    /// Zero dimensions fall back to the canvas minimums. Hover survives a
    /// resize because the dataset is unchanged. On error the previous
    /// viewport and scales stay in place.
    pub fn resize(&mut self, reported_width: u32, reported_height: u32) -> ChartResult<()> {
        let viewport = self
            .config
            .canvas
            .resolve(reported_width, reported_height);
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        if viewport == self.viewport {
            return Ok(());
        }

        let scales = ScaleSet::derive(&self.dataset, self.config.scale_params(viewport))?;
        debug!(
            reported_width,
            reported_height,
            width = viewport.width,
            height = viewport.height,
            "resize viewport"
        );
        self.viewport = viewport;
        self.scales = scales;
        Ok(())
    }

    pub fn set_viewport(&mut self, viewport: Viewport) -> ChartResult<()> {
        self.resize(viewport.width, viewport.height)
    }
}
