use tracing::trace;

use crate::core::{Dataset, ScaleSet, Viewport};
use crate::error::ChartResult;
use crate::interaction::InteractionState;
use crate::loader::LoadSequencer;
use crate::render::Renderer;

use super::ChartEngineConfig;

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Main orchestration facade consumed by host applications.
///
/// `ChartEngine` owns the working dataset, the derived scale set, hover state
/// and the renderer. Every draw is a full rebuild from those inputs.
pub struct ChartEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: ChartEngineConfig,
    pub(super) viewport: Viewport,
    pub(super) dataset: Dataset,
    pub(super) scales: ScaleSet,
    pub(super) interaction: InteractionState,
    pub(super) loads: LoadSequencer,
}

impl<R: Renderer> ChartEngine<R> {
    /// Builds the current frame and hands it to the renderer.
    ///
    /// The renderer replaces whatever it drew before, so repeated calls never
    /// accumulate output.
    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_render_frame()?;
        trace!(
            lines = frame.line_count(),
            rects = frame.rect_count(),
            texts = frame.text_count(),
            "render frame"
        );
        self.renderer.render(&frame)
    }

    /// Renders the frame into an external cairo context.
    ///
    /// This path is used by toolkit draw callbacks while keeping the renderer
    /// implementation decoupled from toolkit-specific APIs.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> ChartResult<()>
    where
        R: CairoContextRenderer,
    {
        let frame = self.build_render_frame()?;
        self.renderer.render_on_cairo_context(context, &frame)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
