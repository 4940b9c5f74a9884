//! species-chart: rendering engine for a categorical magnitude bar chart.
//!
//! Raw tabular rows flow through the [`loader`] into a validated
//! [`core::Dataset`], the [`core`] scale engine derives band, magnitude and
//! color mappings, and [`ChartEngine`] turns them into a layered
//! [`render::RenderFrame`] with hover-driven tooltip state.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod loader;
pub mod render;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig};
pub use error::{ChartError, ChartResult};
