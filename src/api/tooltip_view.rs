use serde::{Deserialize, Serialize};

use crate::core::Record;

use super::ChartLabels;

/// Content and anchor of the hover tooltip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipView {
    pub name: String,
    /// Name, magnitude and category lines, top to bottom.
    pub lines: Vec<String>,
    /// Top-left corner of the tooltip box.
    pub x: f64,
    pub y: f64,
}

impl TooltipView {
    #[must_use]
    pub fn for_record(record: &Record, labels: &ChartLabels, x: f64, y: f64) -> Self {
        let lines = vec![
            record.name.clone(),
            format!(
                "{}: {:.*} {}",
                labels.magnitude_label, labels.magnitude_precision, record.magnitude, labels.magnitude_unit
            ),
            format!("{}: {}", labels.category_label, record.category),
        ];
        Self {
            name: record.name.clone(),
            lines,
            x,
            y,
        }
    }
}
