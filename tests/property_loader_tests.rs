use proptest::prelude::*;
use species_chart::loader::{ColumnMapping, RawRow, normalize_rows};

fn name_cell() -> impl Strategy<Value = (String, bool)> {
    prop_oneof![
        "[A-Za-z]{1,8}".prop_map(|name| (format!(" {name} "), true)),
        Just(("   ".to_owned(), false)),
        Just((String::new(), false)),
    ]
}

fn magnitude_cell() -> impl Strategy<Value = (String, bool)> {
    prop_oneof![
        (-1000.0f64..1000.0).prop_map(|value| (value.to_string(), true)),
        Just(("fast".to_owned(), false)),
        Just((String::new(), true)),
        Just(("  ".to_owned(), true)),
        Just(("inf".to_owned(), false)),
        Just(("NaN".to_owned(), false)),
    ]
}

fn category_cell() -> impl Strategy<Value = (String, bool)> {
    prop_oneof![
        Just(("Carnivore".to_owned(), true)),
        Just((" herbivore ".to_owned(), true)),
        Just(("OMNIVORE".to_owned(), true)),
        Just(("rock".to_owned(), false)),
        Just((String::new(), false)),
    ]
}

proptest! {
    #[test]
    fn accepted_count_matches_rows_passing_every_predicate(
        cells in prop::collection::vec((name_cell(), magnitude_cell(), category_cell()), 0..64)
    ) {
        let mapping = ColumnMapping::default();
        let mut expected_names = Vec::new();
        let rows: Vec<RawRow> = cells
            .into_iter()
            .map(|((name, name_ok), (magnitude, magnitude_ok), (category, category_ok))| {
                if name_ok && magnitude_ok && category_ok {
                    expected_names.push(name.trim().to_owned());
                }
                let mut row = RawRow::new();
                row.insert(mapping.name_column.clone(), name);
                row.insert(mapping.magnitude_column.clone(), magnitude);
                row.insert(mapping.category_column.clone(), category);
                row
            })
            .collect();

        let report = normalize_rows(&rows, &mapping);
        let names: Vec<String> = report.dataset.iter().map(|record| record.name.clone()).collect();

        prop_assert_eq!(report.accepted() + report.rejected(), rows.len());
        prop_assert_eq!(names, expected_names);
        prop_assert!(report.dataset.iter().all(|record| record.magnitude.is_finite()));
    }
}
