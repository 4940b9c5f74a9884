use serde::{Deserialize, Serialize};

use crate::core::{BarGeometry, Record, Viewport};
use crate::interaction::HoverState;

use super::TooltipView;

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub viewport: Viewport,
    pub records: Vec<Record>,
    pub magnitude_domain: (f64, f64),
    pub tick_values: Vec<f64>,
    pub bandwidth: f64,
    pub bars: Vec<BarGeometry>,
    pub hover: HoverState,
    pub tooltip: Option<TooltipView>,
}
