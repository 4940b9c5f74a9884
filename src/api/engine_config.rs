use serde::{Deserialize, Serialize};

use crate::core::{CanvasSizing, CategoryPalette, Margins, ScaleSetParams, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart setup
/// without inventing their own ad-hoc format. Every field has a default, so a
/// partial JSON document is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartEngineConfig {
    /// Size reported by the host container; raised to `canvas` minimums.
    pub viewport: Viewport,
    pub canvas: CanvasSizing,
    pub margins: Margins,
    /// Inner and outer band padding as a fraction of one band step.
    pub band_padding: f64,
    pub palette: CategoryPalette,
    pub labels: ChartLabels,
    pub style: ChartStyle,
}

impl Default for ChartEngineConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::new(800, 500),
            canvas: CanvasSizing::default(),
            margins: Margins::default(),
            band_padding: 0.2,
            palette: CategoryPalette::default(),
            labels: ChartLabels::default(),
            style: ChartStyle::default(),
        }
    }
}

impl ChartEngineConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_canvas_sizing(mut self, canvas: CanvasSizing) -> Self {
        self.canvas = canvas;
        self
    }

    #[must_use]
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_band_padding(mut self, band_padding: f64) -> Self {
        self.band_padding = band_padding;
        self
    }

    #[must_use]
    pub fn with_palette(mut self, palette: CategoryPalette) -> Self {
        self.palette = palette;
        self
    }

    #[must_use]
    pub fn with_labels(mut self, labels: ChartLabels) -> Self {
        self.labels = labels;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    /// Scale inputs for a resolved viewport.
    #[must_use]
    pub fn scale_params(&self, viewport: Viewport) -> ScaleSetParams {
        ScaleSetParams {
            viewport,
            margins: self.margins,
            band_padding: self.band_padding,
            palette: self.palette,
        }
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.canvas.validate()?;
        self.margins.validate()?;
        if !self.band_padding.is_finite() || !(0.0..1.0).contains(&self.band_padding) {
            return Err(ChartError::InvalidData(
                "band padding must be finite and in [0, 1)".to_owned(),
            ));
        }
        for color in [
            self.palette.herbivore,
            self.palette.omnivore,
            self.palette.carnivore,
        ] {
            color.validate()?;
        }
        self.style.validate()
    }
}

/// Text content of the chart chrome and tooltip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartLabels {
    pub title: String,
    pub x_axis_title: String,
    pub y_axis_title: String,
    pub magnitude_label: String,
    pub magnitude_unit: String,
    pub category_label: String,
    /// Decimal places of the tooltip magnitude.
    pub magnitude_precision: usize,
}

impl Default for ChartLabels {
    fn default() -> Self {
        Self {
            title: "Animal Speed by Diet".to_owned(),
            x_axis_title: "Animals (hover bars for details)".to_owned(),
            y_axis_title: "Speed (km/h)".to_owned(),
            magnitude_label: "Speed".to_owned(),
            magnitude_unit: "km/h".to_owned(),
            category_label: "Diet".to_owned(),
            magnitude_precision: 1,
        }
    }
}

/// Visual constants. Sizes are in viewport units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartStyle {
    pub bar_opacity: f64,
    pub hovered_bar_opacity: f64,
    pub text_color: Color,
    pub axis_color: Color,
    pub axis_stroke_width: f64,
    pub tick_length_px: f64,
    pub tick_label_gap_px: f64,
    pub tick_label_font_size_px: f64,
    pub axis_title_font_size_px: f64,
    /// Distance of the rotated magnitude-axis title from the left edge.
    pub y_axis_title_offset_px: f64,
    /// Distance of the category-axis title baseline from the bottom edge.
    pub x_axis_title_offset_px: f64,
    pub title_font_size_px: f64,
    pub legend: LegendStyle,
    pub tooltip: TooltipStyle,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            bar_opacity: 0.85,
            hovered_bar_opacity: 1.0,
            text_color: Color::rgb(0.0, 0.0, 0.0),
            axis_color: Color::rgb(0.0, 0.0, 0.0),
            axis_stroke_width: 1.0,
            tick_length_px: 6.0,
            tick_label_gap_px: 3.0,
            tick_label_font_size_px: 10.0,
            axis_title_font_size_px: 16.0,
            y_axis_title_offset_px: 20.0,
            x_axis_title_offset_px: 10.0,
            title_font_size_px: 18.0,
            legend: LegendStyle::default(),
            tooltip: TooltipStyle::default(),
        }
    }
}

impl ChartStyle {
    #[must_use]
    pub fn with_bar_opacity(mut self, bar_opacity: f64, hovered_bar_opacity: f64) -> Self {
        self.bar_opacity = bar_opacity;
        self.hovered_bar_opacity = hovered_bar_opacity;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        for (name, opacity) in [
            ("bar_opacity", self.bar_opacity),
            ("hovered_bar_opacity", self.hovered_bar_opacity),
        ] {
            if !opacity.is_finite() || !(0.0..=1.0).contains(&opacity) {
                return Err(ChartError::InvalidData(format!(
                    "`{name}` must be finite and in [0, 1]"
                )));
            }
        }
        for (name, size) in [
            ("axis_stroke_width", self.axis_stroke_width),
            ("tick_label_font_size_px", self.tick_label_font_size_px),
            ("axis_title_font_size_px", self.axis_title_font_size_px),
            ("title_font_size_px", self.title_font_size_px),
            ("legend.font_size_px", self.legend.font_size_px),
            ("legend.swatch_size_px", self.legend.swatch_size_px),
            ("tooltip.font_size_px", self.tooltip.font_size_px),
            ("tooltip.line_height", self.tooltip.line_height),
        ] {
            ensure_positive(name, size)?;
        }
        for (name, length) in [
            ("tick_length_px", self.tick_length_px),
            ("tick_label_gap_px", self.tick_label_gap_px),
            ("y_axis_title_offset_px", self.y_axis_title_offset_px),
            ("x_axis_title_offset_px", self.x_axis_title_offset_px),
            ("legend.row_pitch_px", self.legend.row_pitch_px),
            ("tooltip.padding_x_px", self.tooltip.padding_x_px),
            ("tooltip.padding_y_px", self.tooltip.padding_y_px),
            ("tooltip.corner_radius_px", self.tooltip.corner_radius_px),
        ] {
            ensure_non_negative(name, length)?;
        }
        for coordinate in [
            self.legend.offset_from_right_px,
            self.legend.offset_above_plot_px,
            self.legend.label_offset_x_px,
            self.legend.label_baseline_px,
            self.tooltip.pointer_offset_px,
        ] {
            if !coordinate.is_finite() {
                return Err(ChartError::InvalidData(
                    "legend/tooltip offsets must be finite".to_owned(),
                ));
            }
        }
        for color in [
            self.text_color,
            self.axis_color,
            self.tooltip.background,
            self.tooltip.text_color,
        ] {
            color.validate()?;
        }
        Ok(())
    }
}

/// Legend block placement and sizing.
///
/// The block is anchored at
/// `(width - margin.right - offset_from_right_px, margin.top - offset_above_plot_px)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegendStyle {
    pub offset_from_right_px: f64,
    pub offset_above_plot_px: f64,
    pub row_pitch_px: f64,
    pub swatch_size_px: f64,
    pub label_offset_x_px: f64,
    pub label_baseline_px: f64,
    pub font_size_px: f64,
}

impl Default for LegendStyle {
    fn default() -> Self {
        Self {
            offset_from_right_px: 140.0,
            offset_above_plot_px: 40.0,
            row_pitch_px: 25.0,
            swatch_size_px: 18.0,
            label_offset_x_px: 25.0,
            label_baseline_px: 14.0,
            font_size_px: 14.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TooltipStyle {
    pub background: Color,
    pub text_color: Color,
    pub font_size_px: f64,
    /// Line pitch as a multiple of the font size.
    pub line_height: f64,
    pub padding_x_px: f64,
    pub padding_y_px: f64,
    pub corner_radius_px: f64,
    /// Offset of the box's top-left corner from the pointer, on both axes.
    pub pointer_offset_px: f64,
}

impl Default for TooltipStyle {
    fn default() -> Self {
        Self {
            background: Color::rgba(0.0, 0.0, 0.0, 0.85),
            text_color: Color::rgb(1.0, 1.0, 1.0),
            font_size_px: 12.0,
            line_height: 1.25,
            padding_x_px: 10.0,
            padding_y_px: 8.0,
            corner_radius_px: 8.0,
            pointer_offset_px: 12.0,
        }
    }
}

fn ensure_positive(name: &str, value: f64) -> ChartResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ChartError::InvalidData(format!(
            "`{name}` must be finite and > 0"
        )));
    }
    Ok(())
}

fn ensure_non_negative(name: &str, value: f64) -> ChartResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(ChartError::InvalidData(format!(
            "`{name}` must be finite and >= 0"
        )));
    }
    Ok(())
}
