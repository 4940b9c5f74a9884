use proptest::prelude::*;
use species_chart::api::{ChartEngine, ChartEngineConfig};
use species_chart::core::{Category, Dataset, Record};
use species_chart::render::{NullRenderer, SceneLayerKind};

fn category(index: u8) -> Category {
    match index % 3 {
        0 => Category::Herbivore,
        1 => Category::Omnivore,
        _ => Category::Carnivore,
    }
}

proptest! {
    #[test]
    fn render_frame_is_deterministic_and_valid(
        samples in prop::collection::vec((0.0f64..500.0f64, 0u8..3u8), 0..40)
    ) {
        let records: Vec<Record> = samples
            .iter()
            .enumerate()
            .map(|(index, (magnitude, cat))| {
                Record::new(format!("animal-{index}"), *magnitude, category(*cat)).expect("record")
            })
            .collect();
        let expected_bars = records.len();

        let mut engine = ChartEngine::new(NullRenderer::default(), ChartEngineConfig::default())
            .expect("engine init");
        engine.set_dataset(Dataset::from(records)).expect("set dataset");

        let first = engine.build_render_frame().expect("first frame");
        let second = engine.build_render_frame().expect("second frame");

        prop_assert_eq!(&first, &second);
        prop_assert!(first.validate().is_ok());
        prop_assert_eq!(first.layer(SceneLayerKind::Series).rects.len(), expected_bars);
        prop_assert_eq!(first.layer(SceneLayerKind::Legend).rects.len(), 3);

        let plot = engine.scale_set().plot;
        for rect in &first.layer(SceneLayerKind::Series).rects {
            prop_assert!(rect.x >= plot.left - 1e-9);
            prop_assert!(rect.x + rect.width <= plot.right() + 1e-9);
            prop_assert!(rect.y >= plot.top - 1e-9);
            prop_assert!(rect.y + rect.height <= plot.bottom() + 1e-9);
        }
    }
}
