use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{LinePrimitive, RectPrimitive, SceneLayerKind, TextPrimitive};

/// Primitives of a single scene layer, drawn lines → rects → texts.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerPrimitives {
    pub kind: SceneLayerKind,
    pub lines: Vec<LinePrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl LayerPrimitives {
    fn empty(kind: SceneLayerKind) -> Self {
        Self {
            kind,
            lines: Vec::new(),
            rects: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.rects.is_empty() && self.texts.is_empty()
    }
}

/// Backend-agnostic scene for one chart draw pass.
///
/// Always holds every [`SceneLayerKind`] in canonical order, possibly empty.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    layers: Vec<LayerPrimitives>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            layers: SceneLayerKind::CANONICAL
                .into_iter()
                .map(LayerPrimitives::empty)
                .collect(),
        }
    }

    /// Layers bottom to top.
    #[must_use]
    pub fn layers(&self) -> &[LayerPrimitives] {
        &self.layers
    }

    #[must_use]
    pub fn layer(&self, kind: SceneLayerKind) -> &LayerPrimitives {
        &self.layers[kind.index()]
    }

    pub fn push_line(&mut self, kind: SceneLayerKind, line: LinePrimitive) {
        self.layers[kind.index()].lines.push(line);
    }

    pub fn push_rect(&mut self, kind: SceneLayerKind, rect: RectPrimitive) {
        self.layers[kind.index()].rects.push(rect);
    }

    pub fn push_text(&mut self, kind: SceneLayerKind, text: TextPrimitive) {
        self.layers[kind.index()].texts.push(text);
    }

    #[must_use]
    pub fn with_line(mut self, kind: SceneLayerKind, line: LinePrimitive) -> Self {
        self.push_line(kind, line);
        self
    }

    #[must_use]
    pub fn with_rect(mut self, kind: SceneLayerKind, rect: RectPrimitive) -> Self {
        self.push_rect(kind, rect);
        self
    }

    #[must_use]
    pub fn with_text(mut self, kind: SceneLayerKind, text: TextPrimitive) -> Self {
        self.push_text(kind, text);
        self
    }

    pub fn lines(&self) -> impl Iterator<Item = &LinePrimitive> {
        self.layers.iter().flat_map(|layer| layer.lines.iter())
    }

    pub fn rects(&self) -> impl Iterator<Item = &RectPrimitive> {
        self.layers.iter().flat_map(|layer| layer.rects.iter())
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextPrimitive> {
        self.layers.iter().flat_map(|layer| layer.texts.iter())
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.lines.len()).sum()
    }

    #[must_use]
    pub fn rect_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.rects.len()).sum()
    }

    #[must_use]
    pub fn text_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.texts.len()).sum()
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for line in self.lines() {
            line.validate()?;
        }
        for rect in self.rects() {
            rect.validate()?;
        }
        for text in self.texts() {
            text.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.iter().all(LayerPrimitives::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::RenderFrame;
    use crate::core::Viewport;
    use crate::render::{
        Color, LinePrimitive, RectPrimitive, SceneLayerKind, TextHAlign, TextPrimitive,
    };

    #[test]
    fn primitives_land_in_their_layer_and_iterate_bottom_up() {
        let frame = RenderFrame::new(Viewport::new(100, 50))
            .with_rect(
                SceneLayerKind::Tooltip,
                RectPrimitive::new(1.0, 1.0, 4.0, 4.0, Color::rgb(0.0, 0.0, 0.0)),
            )
            .with_rect(
                SceneLayerKind::Series,
                RectPrimitive::new(2.0, 2.0, 4.0, 4.0, Color::rgb(1.0, 0.0, 0.0)),
            )
            .with_line(
                SceneLayerKind::Axis,
                LinePrimitive::new(0.0, 1.0, 5.0, 1.0, 1.0, Color::rgb(0.2, 0.2, 0.2)),
            )
            .with_text(
                SceneLayerKind::Legend,
                TextPrimitive::new(
                    "x",
                    2.0,
                    4.0,
                    10.0,
                    Color::rgb(1.0, 1.0, 1.0),
                    TextHAlign::Left,
                ),
            );

        assert_eq!(frame.layer(SceneLayerKind::Series).rects.len(), 1);
        assert_eq!(frame.rect_count(), 2);
        assert_eq!(frame.line_count(), 1);
        assert_eq!(frame.text_count(), 1);
        // Series is painted before Tooltip regardless of insertion order.
        let xs: Vec<f64> = frame.rects().map(|rect| rect.x).collect();
        assert_eq!(xs, vec![2.0, 1.0]);
        frame.validate().expect("valid frame");
    }

    #[test]
    fn new_frame_is_empty_but_has_every_layer() {
        let frame = RenderFrame::new(Viewport::new(10, 10));
        assert!(frame.is_empty());
        assert_eq!(frame.layers().len(), SceneLayerKind::CANONICAL.len());
    }
}
