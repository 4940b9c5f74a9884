use std::path::Path;

use crate::error::ChartResult;
use crate::render::{
    Color, FontWeight, LinePrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign,
    TextPrimitive,
};

/// Renders frames into a standalone SVG document.
///
/// Every call to [`Renderer::render`] rebuilds the document from scratch, so
/// nothing from an earlier frame survives into the next one.
#[derive(Debug, Clone)]
pub struct SvgRenderer {
    font_family: String,
    background: Option<Color>,
    document: String,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self {
            font_family: "sans-serif".to_owned(),
            background: Some(Color::rgb(1.0, 1.0, 1.0)),
            document: String::new(),
        }
    }
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_font_family(mut self, font_family: impl Into<String>) -> Self {
        self.font_family = font_family.into();
        self
    }

    /// `None` leaves the canvas transparent.
    #[must_use]
    pub fn with_background(mut self, background: Option<Color>) -> Self {
        self.background = background;
        self
    }

    /// Document produced by the latest render, empty before the first one.
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    #[must_use]
    pub fn into_document(self) -> String {
        self.document
    }

    pub fn write_to(&self, path: impl AsRef<Path>) -> ChartResult<()> {
        std::fs::write(path, &self.document)?;
        Ok(())
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        let width = frame.viewport.width;
        let height = frame.viewport.height;
        let mut svg = String::new();
        svg.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">\n",
        ));
        if let Some(background) = self.background {
            svg.push_str(&format!(
                "<rect width=\"100%\" height=\"100%\"{}/>\n",
                paint_attrs("fill", background)
            ));
        }

        for layer in frame.layers() {
            if layer.is_empty() {
                continue;
            }
            svg.push_str(&format!("<g data-layer=\"{}\">\n", layer.kind.name()));
            for line in &layer.lines {
                push_line(&mut svg, line);
            }
            for rect in &layer.rects {
                push_rect(&mut svg, rect);
            }
            for text in &layer.texts {
                push_text(&mut svg, text, &self.font_family);
            }
            svg.push_str("</g>\n");
        }
        svg.push_str("</svg>\n");

        self.document = svg;
        Ok(())
    }
}

fn push_line(svg: &mut String, line: &LinePrimitive) {
    svg.push_str(&format!(
        "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke-width=\"{:.2}\"{}/>\n",
        line.x1,
        line.y1,
        line.x2,
        line.y2,
        line.stroke_width,
        paint_attrs("stroke", line.color)
    ));
}

fn push_rect(svg: &mut String, rect: &RectPrimitive) {
    svg.push_str(&format!(
        "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\"{}",
        rect.x,
        rect.y,
        rect.width,
        rect.height,
        paint_attrs("fill", rect.fill_color)
    ));
    if rect.corner_radius > 0.0 {
        svg.push_str(&format!(
            " rx=\"{0:.2}\" ry=\"{0:.2}\"",
            rect.corner_radius
        ));
    }
    if rect.border_width > 0.0 {
        svg.push_str(&format!(
            " stroke-width=\"{:.2}\"{}",
            rect.border_width,
            paint_attrs("stroke", rect.border_color)
        ));
    }
    svg.push_str("/>\n");
}

fn push_text(svg: &mut String, text: &TextPrimitive, font_family: &str) {
    let anchor = match text.h_align {
        TextHAlign::Left => "start",
        TextHAlign::Center => "middle",
        TextHAlign::Right => "end",
    };
    svg.push_str(&format!(
        "<text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"{anchor}\" font-family=\"{}\" font-size=\"{:.2}\"{}",
        text.x,
        text.y,
        escape_xml(font_family),
        text.font_size_px,
        paint_attrs("fill", text.color)
    ));
    if text.weight == FontWeight::Bold {
        svg.push_str(" font-weight=\"bold\"");
    }
    if text.rotation_deg != 0.0 {
        svg.push_str(&format!(
            " transform=\"rotate({:.2} {:.2} {:.2})\"",
            text.rotation_deg, text.x, text.y
        ));
    }
    svg.push_str(&format!(">{}</text>\n", escape_xml(&text.text)));
}

/// `fill="#rrggbb"` plus an opacity attribute when the color is translucent.
fn paint_attrs(attribute: &str, color: Color) -> String {
    let mut attrs = format!(" {attribute}=\"{}\"", color.to_hex_rgb());
    if color.alpha < 1.0 {
        attrs.push_str(&format!(" {attribute}-opacity=\"{:.3}\"", color.alpha));
    }
    attrs
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
