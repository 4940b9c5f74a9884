use species_chart::api::{ChartEngine, ChartEngineConfig};
use species_chart::interaction::HoverState;
use species_chart::loader::{ColumnMapping, CsvTextSource, load_dataset};
use species_chart::render::NullRenderer;

const FIRST: &str = "Animal,Average Speed (km/h),Diet\nSloth,0.3,Herbivore\n";
const SECOND: &str =
    "Animal,Average Speed (km/h),Diet\nCheetah,120,Carnivore\nLion,80,Carnivore\n";

fn engine() -> ChartEngine<NullRenderer> {
    ChartEngine::new(NullRenderer::default(), ChartEngineConfig::default()).expect("engine init")
}

#[test]
fn stale_load_completing_last_is_discarded() {
    let mut engine = engine();
    let mapping = ColumnMapping::default();

    let first = engine.begin_load();
    let second = engine.begin_load();

    let second_report = load_dataset(&CsvTextSource::new(SECOND), &mapping);
    assert!(engine.complete_load(second, second_report).expect("apply"));

    let first_report = load_dataset(&CsvTextSource::new(FIRST), &mapping);
    assert!(!engine.complete_load(first, first_report).expect("discard"));

    let names: Vec<&str> = engine.dataset().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Cheetah", "Lion"]);
    assert_eq!(engine.scale_set().magnitude_ceiling(), 120.0);
}

#[test]
fn stale_load_completing_first_is_also_discarded() {
    let mut engine = engine();
    let mapping = ColumnMapping::default();

    let first = engine.begin_load();
    let second = engine.begin_load();

    let first_report = load_dataset(&CsvTextSource::new(FIRST), &mapping);
    assert!(!engine.complete_load(first, first_report).expect("discard"));
    assert!(engine.dataset().is_empty());

    let second_report = load_dataset(&CsvTextSource::new(SECOND), &mapping);
    assert!(engine.complete_load(second, second_report).expect("apply"));
    assert_eq!(engine.dataset().len(), 2);
}

#[test]
fn completed_load_replaces_dataset_and_clears_hover() {
    let mut engine = engine();
    let mapping = ColumnMapping::default();
    engine
        .load_from(&CsvTextSource::new(SECOND), &mapping)
        .expect("first load");
    engine.pointer_enter("Lion", 500.0, 300.0);
    assert!(engine.hovered_name().is_some());

    let summary = engine
        .load_from(&CsvTextSource::new(FIRST), &mapping)
        .expect("second load");

    assert_eq!(summary.accepted, 1);
    assert_eq!(engine.hover_state(), &HoverState::Idle);
    assert_eq!(engine.dataset().len(), 1);
    assert_eq!(engine.dataset().records()[0].name, "Sloth");
}

#[test]
fn failed_source_leaves_an_empty_but_renderable_chart() {
    let mut engine = engine();
    let mapping = ColumnMapping::default();
    engine
        .load_from(&CsvTextSource::new(SECOND), &mapping)
        .expect("first load");

    let summary = engine
        .load_from(&CsvTextSource::new(""), &mapping)
        .expect("failed load still applies");

    assert!(summary.source_failed);
    assert!(engine.dataset().is_empty());
    engine.render().expect("render empty chart");
}
