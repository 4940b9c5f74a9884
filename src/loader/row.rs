use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{Category, Record};

/// One raw input row: column name → cell text, in column order.
pub type RawRow = IndexMap<String, String>;

/// Fixed column keys and category lookup used to read raw rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnMapping {
    #[serde(default = "default_name_column")]
    pub name_column: String,
    #[serde(default = "default_magnitude_column")]
    pub magnitude_column: String,
    #[serde(default = "default_category_column")]
    pub category_column: String,
    /// Lower-cased, trimmed cell text → category.
    #[serde(default = "default_category_lookup")]
    pub category_lookup: IndexMap<String, Category>,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            name_column: default_name_column(),
            magnitude_column: default_magnitude_column(),
            category_column: default_category_column(),
            category_lookup: default_category_lookup(),
        }
    }
}

impl ColumnMapping {
    #[must_use]
    pub fn with_columns(
        mut self,
        name_column: impl Into<String>,
        magnitude_column: impl Into<String>,
        category_column: impl Into<String>,
    ) -> Self {
        self.name_column = name_column.into();
        self.magnitude_column = magnitude_column.into();
        self.category_column = category_column.into();
        self
    }

    /// Adds an extra spelling that maps onto `category`.
    #[must_use]
    pub fn with_category_alias(mut self, alias: &str, category: Category) -> Self {
        self.category_lookup
            .insert(normalize_category_key(alias), category);
        self
    }

    #[must_use]
    pub fn lookup_category(&self, raw: &str) -> Option<Category> {
        self.category_lookup
            .get(&normalize_category_key(raw))
            .copied()
    }
}

fn default_name_column() -> String {
    "Animal".to_owned()
}

fn default_magnitude_column() -> String {
    "Average Speed (km/h)".to_owned()
}

fn default_category_column() -> String {
    "Diet".to_owned()
}

fn default_category_lookup() -> IndexMap<String, Category> {
    Category::ALL
        .iter()
        .map(|category| (normalize_category_key(category.label()), *category))
        .collect()
}

fn normalize_category_key(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Why a raw row was left out of the dataset.
///
/// Predicates are checked in declaration order and the first failure wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum RowRejection {
    #[error("name is empty after trimming")]
    EmptyName,
    #[error("magnitude is not a finite number")]
    NonFiniteMagnitude,
    #[error("category is not in the lookup table")]
    UnknownCategory,
}

/// Validates and normalizes one raw row.
///
/// Missing name or category columns read as empty text. A blank magnitude
/// cell reads as `0`; a missing magnitude column is rejected.
pub fn normalize_row(row: &RawRow, mapping: &ColumnMapping) -> Result<Record, RowRejection> {
    let name = cell(row, &mapping.name_column).trim();
    if name.is_empty() {
        return Err(RowRejection::EmptyName);
    }

    let magnitude = row
        .get(&mapping.magnitude_column)
        .map(String::as_str)
        .and_then(coerce_magnitude)
        .ok_or(RowRejection::NonFiniteMagnitude)?;

    let category = mapping
        .lookup_category(cell(row, &mapping.category_column))
        .ok_or(RowRejection::UnknownCategory)?;

    Ok(Record {
        name: name.to_owned(),
        magnitude,
        category,
    })
}

fn coerce_magnitude(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return Some(0.0);
    }
    text.parse::<f64>().ok().filter(|value| value.is_finite())
}

fn cell<'r>(row: &'r RawRow, column: &str) -> &'r str {
    row.get(column).map_or("", String::as_str)
}

#[cfg(test)]
mod tests {
    use super::{ColumnMapping, RawRow, RowRejection, normalize_row};
    use crate::core::Category;

    fn row(name: &str, speed: &str, diet: &str) -> RawRow {
        [
            ("Animal", name),
            ("Average Speed (km/h)", speed),
            ("Diet", diet),
        ]
        .into_iter()
        .map(|(key, value)| (key.to_owned(), value.to_owned()))
        .collect()
    }

    #[test]
    fn row_fields_are_trimmed_and_category_is_case_insensitive() {
        let record = normalize_row(
            &row("  Cheetah ", " 120 ", " CARNIVORE "),
            &ColumnMapping::default(),
        )
        .expect("valid row");
        assert_eq!(record.name, "Cheetah");
        assert_eq!(record.magnitude, 120.0);
        assert_eq!(record.category, Category::Carnivore);
    }

    #[test]
    fn first_failing_predicate_is_reported() {
        let mapping = ColumnMapping::default();
        assert_eq!(
            normalize_row(&row(" ", "abc", "plant"), &mapping),
            Err(RowRejection::EmptyName)
        );
        assert_eq!(
            normalize_row(&row("Bear", "inf", "plant"), &mapping),
            Err(RowRejection::NonFiniteMagnitude)
        );
        assert_eq!(
            normalize_row(&row("Bear", "", "plant"), &mapping),
            Err(RowRejection::UnknownCategory)
        );
        assert_eq!(
            normalize_row(&row("Bear", "40", "plant"), &mapping),
            Err(RowRejection::UnknownCategory)
        );
    }

    #[test]
    fn aliases_extend_the_lookup_table() {
        let mapping =
            ColumnMapping::default().with_category_alias("Insectivore", Category::Carnivore);
        assert_eq!(
            mapping.lookup_category(" insectivore"),
            Some(Category::Carnivore)
        );
        assert_eq!(mapping.lookup_category("herbivore"), Some(Category::Herbivore));
    }

    #[test]
    fn blank_magnitude_reads_as_zero() {
        let mapping = ColumnMapping::default();
        for blank in ["", "   "] {
            let record = normalize_row(&row("Kiwi", blank, "Omnivore"), &mapping)
                .expect("blank magnitude is kept");
            assert_eq!(record.magnitude, 0.0);
        }
    }

    #[test]
    fn missing_magnitude_column_is_rejected() {
        let mut partial = RawRow::new();
        partial.insert("Animal".to_owned(), "Kiwi".to_owned());
        assert_eq!(
            normalize_row(&partial, &ColumnMapping::default()),
            Err(RowRejection::NonFiniteMagnitude)
        );
    }
}
