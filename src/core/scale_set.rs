use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{
    BandScale, CategoryPalette, Dataset, LinearScale, Margins, NiceTicks, PlotArea, Viewport,
    nice_ceil,
};
use crate::error::{ChartError, ChartResult};

/// Inputs besides the dataset that shape a [`ScaleSet`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleSetParams {
    pub viewport: Viewport,
    pub margins: Margins,
    pub band_padding: f64,
    pub palette: CategoryPalette,
}

/// Position, magnitude and color mappings for one render cycle.
///
/// Band positions and magnitude pixels are relative to the plot origin
/// (`plot.left`, `plot.top`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleSet {
    pub plot: PlotArea,
    pub band: BandScale,
    pub magnitude: LinearScale,
    pub ticks: NiceTicks,
    pub palette: CategoryPalette,
}

impl ScaleSet {
    /// Derives the scale set. Pure: equal inputs give equal outputs.
    ///
    /// Bands follow the dataset's display order. An empty dataset, or one
    /// whose magnitudes are all `<= 0`, gets the magnitude domain `[0, 1]`.
    pub fn derive(dataset: &Dataset, params: ScaleSetParams) -> ChartResult<Self> {
        if !params.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: params.viewport.width,
                height: params.viewport.height,
            });
        }

        let plot = PlotArea::from_viewport(params.viewport, params.margins);
        let ordered = dataset.display_order();
        let band = BandScale::new(
            ordered.iter().map(|record| record.name.as_str()),
            plot.width,
            params.band_padding,
        )?;

        let raw_max = dataset
            .max_magnitude()
            .filter(|max| *max > 0.0)
            .unwrap_or(0.0);
        let upper = nice_ceil(raw_max);
        let magnitude = LinearScale::new((0.0, upper), (plot.height, 0.0))?;
        let ticks = magnitude.ticks();

        trace!(
            records = dataset.len(),
            bands = band.len(),
            raw_max,
            upper,
            "derived scale set"
        );

        Ok(Self {
            plot,
            band,
            magnitude,
            ticks,
            palette: params.palette,
        })
    }

    /// Upper bound of the magnitude domain after nice rounding.
    #[must_use]
    pub fn magnitude_ceiling(&self) -> f64 {
        self.magnitude.domain().1
    }
}
