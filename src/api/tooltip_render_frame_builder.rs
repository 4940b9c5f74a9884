use crate::render::{
    RectPrimitive, RenderFrame, Renderer, SceneLayerKind, TextHAlign, TextPrimitive,
};

use super::ChartEngine;
use super::layout_helpers::estimate_label_text_width_px;

impl<R: Renderer> ChartEngine<R> {
    /// Dark box with one text line per tooltip row, name in bold.
    ///
    /// Drawn on the topmost layer so it is never covered by bars or legend.
    pub(super) fn push_tooltip(&self, frame: &mut RenderFrame) {
        let Some(view) = self.tooltip() else {
            return;
        };
        let style = self.config.style.tooltip;
        let line_pitch = style.font_size_px * style.line_height;
        let text_width = view
            .lines
            .iter()
            .map(|line| estimate_label_text_width_px(line, style.font_size_px))
            .fold(0.0, f64::max);
        let box_width = text_width + 2.0 * style.padding_x_px;
        let box_height = line_pitch * view.lines.len() as f64 + 2.0 * style.padding_y_px;

        frame.push_rect(
            SceneLayerKind::Tooltip,
            RectPrimitive::new(view.x, view.y, box_width, box_height, style.background)
                .with_corner_radius(style.corner_radius_px),
        );
        for (index, line) in view.lines.iter().enumerate() {
            if line.is_empty() {
                continue;
            }
            let baseline = view.y + style.padding_y_px + line_pitch * index as f64 + style.font_size_px;
            let text = TextPrimitive::new(
                line.as_str(),
                view.x + style.padding_x_px,
                baseline,
                style.font_size_px,
                style.text_color,
                TextHAlign::Left,
            );
            let text = if index == 0 { text.bold() } else { text };
            frame.push_text(SceneLayerKind::Tooltip, text);
        }
    }
}
