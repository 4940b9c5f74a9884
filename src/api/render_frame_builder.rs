use crate::error::ChartResult;
use crate::render::{
    RectPrimitive, RenderFrame, Renderer, SceneLayerKind, TextHAlign, TextPrimitive,
};

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    /// Builds the full scene from dataset, scales and hover state.
    ///
    /// Equal inputs always produce an equal frame. An empty dataset still
    /// yields axes, title and legend.
    pub fn build_render_frame(&self) -> ChartResult<RenderFrame> {
        let mut frame = RenderFrame::new(self.viewport);
        self.push_axes(&mut frame)?;
        self.push_bars(&mut frame)?;
        self.push_legend(&mut frame);
        self.push_title(&mut frame);
        self.push_tooltip(&mut frame);
        frame.validate()?;
        Ok(frame)
    }

    /// Bars in display order. Only the first bar carrying the hovered name is
    /// raised, matching the record the tooltip describes.
    fn push_bars(&self, frame: &mut RenderFrame) -> ChartResult<()> {
        let style = &self.config.style;
        let mut hovered = self.interaction.hovered_name();
        for bar in self.bars()? {
            let opacity = if hovered == Some(bar.name.as_str()) {
                hovered = None;
                style.hovered_bar_opacity
            } else {
                style.bar_opacity
            };
            let fill = bar.fill_color.with_alpha(bar.fill_color.alpha * opacity);
            frame.push_rect(
                SceneLayerKind::Series,
                RectPrimitive::new(bar.x, bar.y, bar.width, bar.height, fill),
            );
        }
        Ok(())
    }

    fn push_legend(&self, frame: &mut RenderFrame) {
        let legend = self.config.style.legend;
        let margins = self.config.margins;
        let origin_x = f64::from(self.viewport.width) - margins.right - legend.offset_from_right_px;
        let origin_y = margins.top - legend.offset_above_plot_px;

        for (row, (category, color)) in self.scales.palette.legend_entries().into_iter().enumerate() {
            let row_y = origin_y + legend.row_pitch_px * row as f64;
            frame.push_rect(
                SceneLayerKind::Legend,
                RectPrimitive::new(
                    origin_x,
                    row_y,
                    legend.swatch_size_px,
                    legend.swatch_size_px,
                    color,
                ),
            );
            frame.push_text(
                SceneLayerKind::Legend,
                TextPrimitive::new(
                    category.label(),
                    origin_x + legend.label_offset_x_px,
                    row_y + legend.label_baseline_px,
                    legend.font_size_px,
                    self.config.style.text_color,
                    TextHAlign::Left,
                ),
            );
        }
    }

    fn push_title(&self, frame: &mut RenderFrame) {
        let title = &self.config.labels.title;
        if title.is_empty() {
            return;
        }
        frame.push_text(
            SceneLayerKind::Annotation,
            TextPrimitive::new(
                title.as_str(),
                f64::from(self.viewport.width) / 2.0,
                self.config.margins.top / 2.0,
                self.config.style.title_font_size_px,
                self.config.style.text_color,
                TextHAlign::Center,
            )
            .bold(),
        );
    }
}
