use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Closed set of diet categories a record can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Herbivore,
    Omnivore,
    Carnivore,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 3] = [Self::Herbivore, Self::Omnivore, Self::Carnivore];

    /// Fixed legend order. Independent of which categories a dataset contains.
    pub const LEGEND_ORDER: [Category; 3] = [Self::Carnivore, Self::Herbivore, Self::Omnivore];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Herbivore => "Herbivore",
            Self::Omnivore => "Omnivore",
            Self::Carnivore => "Carnivore",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One validated data point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub magnitude: f64,
    pub category: Category,
}

impl Record {
    /// Builds a record, enforcing the working-set invariants.
    pub fn new(name: impl Into<String>, magnitude: f64, category: Category) -> ChartResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ChartError::InvalidData(
                "record name must not be empty".to_owned(),
            ));
        }
        if !magnitude.is_finite() {
            return Err(ChartError::InvalidData(
                "record magnitude must be finite".to_owned(),
            ));
        }
        Ok(Self {
            name,
            magnitude,
            category,
        })
    }
}

/// Validated records in ingestion order.
///
/// Replaced wholesale on every load. Display order is derived through
/// [`Dataset::display_order`] and never written back.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|record| record.name == name)
    }

    /// Largest magnitude, or `None` for an empty dataset.
    #[must_use]
    pub fn max_magnitude(&self) -> Option<f64> {
        self.records
            .iter()
            .map(|record| record.magnitude)
            .max_by(f64::total_cmp)
    }

    /// Records sorted by descending magnitude.
    ///
    /// The sort is stable: equal magnitudes keep their dataset order.
    #[must_use]
    pub fn display_order(&self) -> Vec<&Record> {
        let mut ordered: Vec<&Record> = self.records.iter().collect();
        ordered.sort_by(|left, right| right.magnitude.total_cmp(&left.magnitude));
        ordered
    }
}

impl From<Vec<Record>> for Dataset {
    fn from(records: Vec<Record>) -> Self {
        Self { records }
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
