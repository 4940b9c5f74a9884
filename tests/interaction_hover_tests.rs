use species_chart::api::{ChartEngine, ChartEngineConfig};
use species_chart::core::{Category, Dataset, Record};
use species_chart::interaction::{HoverState, HoverTransition, PointerPosition};
use species_chart::render::{NullRenderer, SceneLayerKind};

fn record(name: &str, magnitude: f64, category: Category) -> Record {
    Record::new(name, magnitude, category).expect("valid record")
}

fn engine() -> ChartEngine<NullRenderer> {
    let mut engine = ChartEngine::new(NullRenderer::default(), ChartEngineConfig::default())
        .expect("engine init");
    engine
        .set_dataset(Dataset::from(vec![
            record("Lion", 80.0, Category::Carnivore),
            record("Cheetah", 120.0, Category::Carnivore),
            record("Pronghorn", 88.0, Category::Herbivore),
        ]))
        .expect("set dataset");
    engine
}

fn fully_opaque_bar_count(engine: &ChartEngine<NullRenderer>) -> usize {
    engine
        .build_render_frame()
        .expect("frame")
        .layer(SceneLayerKind::Series)
        .rects
        .iter()
        .filter(|rect| rect.fill_color.alpha == 1.0)
        .count()
}

#[test]
fn entering_a_bar_highlights_it_and_shows_tooltip() {
    let mut engine = engine();
    let transition = engine.pointer_enter("Lion", 550.0, 300.0);

    assert_eq!(
        transition,
        HoverTransition::Entered {
            name: "Lion".to_owned()
        }
    );
    assert_eq!(fully_opaque_bar_count(&engine), 1);

    let tooltip = engine.tooltip().expect("tooltip");
    assert_eq!(tooltip.x, 562.0);
    assert_eq!(tooltip.y, 312.0);
    assert_eq!(
        tooltip.lines,
        vec!["Lion", "Speed: 80.0 km/h", "Diet: Carnivore"]
    );

    let frame = engine.build_render_frame().expect("frame");
    let layer = frame.layer(SceneLayerKind::Tooltip);
    assert_eq!(layer.rects.len(), 1);
    assert_eq!(layer.texts.len(), 3);
    assert_eq!(layer.rects[0].x, 562.0);
    // The tooltip is the topmost layer.
    assert_eq!(
        frame.layers().last().map(|layer| layer.kind),
        Some(SceneLayerKind::Tooltip)
    );
}

#[test]
fn hover_is_exclusive_across_bars() {
    let mut engine = engine();
    engine.pointer_enter("Cheetah", 200.0, 400.0);
    let transition = engine.pointer_enter("Lion", 560.0, 400.0);

    assert_eq!(
        transition,
        HoverTransition::Switched {
            from: "Cheetah".to_owned(),
            to: "Lion".to_owned()
        }
    );
    assert_eq!(engine.hovered_name(), Some("Lion"));
    assert_eq!(fully_opaque_bar_count(&engine), 1);

    let frame = engine.build_render_frame().expect("frame");
    let opaque = frame
        .layer(SceneLayerKind::Series)
        .rects
        .iter()
        .find(|rect| rect.fill_color.alpha == 1.0)
        .expect("hovered bar");
    assert_eq!(opaque.x, 540.0);
}

#[test]
fn tooltip_tracks_pointer_moves() {
    let mut engine = engine();
    engine.pointer_enter("Cheetah", 200.0, 400.0);
    assert_eq!(engine.pointer_move(220.0, 380.0), HoverTransition::Tracked);

    let tooltip = engine.tooltip().expect("tooltip");
    assert_eq!((tooltip.x, tooltip.y), (232.0, 392.0));
    assert_eq!(
        engine.hover_state(),
        &HoverState::Hovering {
            name: "Cheetah".to_owned(),
            pointer: PointerPosition::new(220.0, 380.0),
        }
    );
}

#[test]
fn leaving_restores_resting_state() {
    let mut engine = engine();
    let idle_frame = engine.build_render_frame().expect("idle frame");

    engine.pointer_enter("Pronghorn", 400.0, 400.0);
    engine.pointer_move(410.0, 390.0);
    assert_eq!(
        engine.pointer_leave(),
        HoverTransition::Left {
            name: "Pronghorn".to_owned()
        }
    );

    assert_eq!(engine.hover_state(), &HoverState::Idle);
    assert!(engine.tooltip().is_none());
    assert_eq!(engine.build_render_frame().expect("frame"), idle_frame);
}

#[test]
fn unknown_names_and_idle_moves_are_ignored() {
    let mut engine = engine();
    assert_eq!(
        engine.pointer_enter("Unicorn", 10.0, 10.0),
        HoverTransition::Unchanged
    );
    assert_eq!(engine.pointer_move(20.0, 20.0), HoverTransition::Unchanged);
    assert_eq!(engine.pointer_leave(), HoverTransition::Unchanged);
    assert_eq!(engine.hover_state(), &HoverState::Idle);
}

#[test]
fn dataset_replacement_resets_hover() {
    let mut engine = engine();
    engine.pointer_enter("Lion", 550.0, 300.0);
    engine
        .set_dataset(Dataset::from(vec![record("Lion", 81.0, Category::Carnivore)]))
        .expect("set dataset");

    assert_eq!(engine.hover_state(), &HoverState::Idle);
    assert!(engine.tooltip().is_none());
}

#[test]
fn resize_keeps_hover() {
    let mut engine = engine();
    engine.pointer_enter("Lion", 550.0, 300.0);
    engine.resize(1200, 600).expect("resize");
    assert_eq!(engine.hovered_name(), Some("Lion"));
}

#[test]
fn raw_pointer_positions_are_hit_tested_against_bars() {
    let mut engine = engine();

    assert_eq!(
        engine.pointer_at(200.0, 400.0).expect("hit test"),
        HoverTransition::Entered {
            name: "Cheetah".to_owned()
        }
    );
    assert_eq!(
        engine.pointer_at(210.0, 410.0).expect("hit test"),
        HoverTransition::Tracked
    );
    assert_eq!(
        engine.pointer_at(350.0, 400.0).expect("hit test"),
        HoverTransition::Switched {
            from: "Cheetah".to_owned(),
            to: "Pronghorn".to_owned()
        }
    );
    // Gap between the Pronghorn and Lion bands.
    assert_eq!(
        engine.pointer_at(520.0, 400.0).expect("hit test"),
        HoverTransition::Left {
            name: "Pronghorn".to_owned()
        }
    );
    // Above the Lion bar, inside its band.
    assert_eq!(
        engine.pointer_at(600.0, 100.0).expect("hit test"),
        HoverTransition::Unchanged
    );
}
