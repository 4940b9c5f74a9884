pub mod band_scale;
pub mod bar_geometry;
pub mod palette;
pub mod record;
pub mod scale;
pub mod scale_set;
pub mod types;

pub use band_scale::BandScale;
pub use bar_geometry::{BarGeometry, project_bars};
pub use palette::CategoryPalette;
pub use record::{Category, Dataset, Record};
pub use scale::{LinearScale, NiceTicks, TickStep, nice_ceil, nice_ticks};
pub use scale_set::{ScaleSet, ScaleSetParams};
pub use types::{CanvasSizing, Margins, PlotArea, Viewport};
