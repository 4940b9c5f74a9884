use crate::error::ChartResult;
use crate::render::{
    LinePrimitive, RenderFrame, Renderer, SceneLayerKind, TextHAlign, TextPrimitive,
};

use super::ChartEngine;
use super::layout_helpers::centered_baseline_offset;

impl<R: Renderer> ChartEngine<R> {
    /// Category axis along the plot bottom and magnitude axis along its left.
    ///
    /// Category ticks mark band centers but carry no labels; names are only
    /// revealed through the tooltip.
    pub(super) fn push_axes(&self, frame: &mut RenderFrame) -> ChartResult<()> {
        let style = &self.config.style;
        let plot = self.scales.plot;
        let axis_line = |x1, y1, x2, y2| {
            LinePrimitive::new(x1, y1, x2, y2, style.axis_stroke_width, style.axis_color)
        };

        frame.push_line(
            SceneLayerKind::Axis,
            axis_line(plot.left, plot.bottom(), plot.right(), plot.bottom()),
        );
        let half_band = self.scales.band.bandwidth() * 0.5;
        for name in self.scales.band.names() {
            let Some(offset) = self.scales.band.position(name) else {
                continue;
            };
            let center = plot.left + offset + half_band;
            frame.push_line(
                SceneLayerKind::Axis,
                axis_line(center, plot.bottom(), center, plot.bottom() + style.tick_length_px),
            );
        }

        frame.push_line(
            SceneLayerKind::Axis,
            axis_line(plot.left, plot.top, plot.left, plot.bottom()),
        );
        let label_x = plot.left - style.tick_length_px - style.tick_label_gap_px;
        let baseline_shift = centered_baseline_offset(style.tick_label_font_size_px);
        for value in &self.scales.ticks.values {
            let y = plot.top + self.scales.magnitude.map(*value)?;
            frame.push_line(
                SceneLayerKind::Axis,
                axis_line(plot.left - style.tick_length_px, y, plot.left, y),
            );
            frame.push_text(
                SceneLayerKind::Axis,
                TextPrimitive::new(
                    self.scales.ticks.format(*value),
                    label_x,
                    y + baseline_shift,
                    style.tick_label_font_size_px,
                    style.text_color,
                    TextHAlign::Right,
                ),
            );
        }

        self.push_axis_titles(frame);
        Ok(())
    }

    fn push_axis_titles(&self, frame: &mut RenderFrame) {
        let style = &self.config.style;
        let labels = &self.config.labels;
        let width = f64::from(self.viewport.width);
        let height = f64::from(self.viewport.height);

        if !labels.y_axis_title.is_empty() {
            frame.push_text(
                SceneLayerKind::Axis,
                TextPrimitive::new(
                    labels.y_axis_title.as_str(),
                    style.y_axis_title_offset_px,
                    height / 2.0,
                    style.axis_title_font_size_px,
                    style.text_color,
                    TextHAlign::Center,
                )
                .rotated(-90.0),
            );
        }
        if !labels.x_axis_title.is_empty() {
            frame.push_text(
                SceneLayerKind::Axis,
                TextPrimitive::new(
                    labels.x_axis_title.as_str(),
                    width / 2.0,
                    height - style.x_axis_title_offset_px,
                    style.axis_title_font_size_px,
                    style.text_color,
                    TextHAlign::Center,
                ),
            );
        }
    }
}
