use approx::assert_relative_eq;
use species_chart::core::{
    BandScale, CanvasSizing, Category, Dataset, LinearScale, Margins, PlotArea, Record, Viewport,
    nice_ceil, nice_ticks,
};

fn record(name: &str, magnitude: f64, category: Category) -> Record {
    Record::new(name, magnitude, category).expect("valid record")
}

#[test]
fn display_order_is_descending_and_stable() {
    let dataset = Dataset::from(vec![
        record("Lion", 80.0, Category::Carnivore),
        record("Cheetah", 120.0, Category::Carnivore),
        record("Pronghorn", 88.0, Category::Herbivore),
        record("Hyena", 80.0, Category::Carnivore),
    ]);

    let names: Vec<&str> = dataset
        .display_order()
        .into_iter()
        .map(|record| record.name.as_str())
        .collect();
    assert_eq!(names, vec!["Cheetah", "Pronghorn", "Lion", "Hyena"]);
    // Canonical order is untouched.
    assert_eq!(dataset.records()[0].name, "Lion");
}

#[test]
fn band_scale_centers_padded_bands() {
    let scale = BandScale::new(["Cheetah", "Pronghorn", "Lion"], 640.0, 0.2).expect("band scale");

    assert_relative_eq!(scale.step(), 200.0, epsilon = 1e-9);
    assert_relative_eq!(scale.bandwidth(), 160.0, epsilon = 1e-9);
    assert_relative_eq!(scale.position("Cheetah").expect("band"), 40.0, epsilon = 1e-9);
    assert_relative_eq!(scale.position("Lion").expect("band"), 440.0, epsilon = 1e-9);
    assert!(scale.position("Zebra").is_none());
}

#[test]
fn duplicate_names_collide_on_one_band() {
    let scale = BandScale::new(["Eagle", "Falcon", "Eagle"], 300.0, 0.2).expect("band scale");

    assert_eq!(scale.len(), 2);
    assert_eq!(scale.band_index("Eagle"), Some(0));
    assert_eq!(scale.band_index("Falcon"), Some(1));
}

#[test]
fn nice_ceiling_lands_on_readable_bounds() {
    assert_eq!(nice_ceil(120.0), 120.0);
    assert_eq!(nice_ceil(88.0), 90.0);
    assert_eq!(nice_ceil(112.0), 120.0);
    assert_eq!(nice_ceil(0.0), 1.0);
    assert_eq!(nice_ceil(-4.0), 1.0);
    assert_eq!(nice_ceil(f64::NAN), 1.0);
}

#[test]
fn ticks_divide_the_ceiling_evenly() {
    let ticks = nice_ticks(nice_ceil(88.0));
    assert_eq!(ticks.values.first().copied(), Some(0.0));
    assert_eq!(ticks.values.last().copied(), Some(90.0));
    assert!(ticks.values.len() <= 11);
    assert_eq!(ticks.format(30.0), "30");
}

#[test]
fn magnitude_scale_grows_upward() {
    let scale = LinearScale::new((0.0, 120.0), (350.0, 0.0)).expect("scale");
    assert_relative_eq!(scale.map(0.0).expect("map"), 350.0, epsilon = 1e-9);
    assert_relative_eq!(scale.map(120.0).expect("map"), 0.0, epsilon = 1e-9);
    assert_relative_eq!(scale.invert(175.0).expect("invert"), 60.0, epsilon = 1e-9);
    assert!(LinearScale::new((1.0, 1.0), (0.0, 10.0)).is_err());
}

#[test]
fn canvas_sizing_raises_reports_to_minimum() {
    let sizing = CanvasSizing::default();
    assert_eq!(sizing.resolve(0, 0), Viewport::new(600, 400));
    assert_eq!(sizing.resolve(1024, 300), Viewport::new(1024, 400));

    let plot = PlotArea::from_viewport(Viewport::new(800, 500), Margins::default());
    assert_eq!(plot.width, 640.0);
    assert_eq!(plot.height, 350.0);
}
