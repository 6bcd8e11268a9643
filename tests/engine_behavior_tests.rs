use scatter_rs::api::{ChartEngine, ChartEngineConfig};
use scatter_rs::core::Viewport;
use scatter_rs::data::StateRecord;
use scatter_rs::render::NullRenderer;

fn sample_records() -> Vec<StateRecord> {
    vec![
        StateRecord::new("Alaska", "AK", 8.1, 6.7),
        StateRecord::new("Ohio", "OH", 14.8, 9.0),
        StateRecord::new("Alabama", "AL", 20.1, 11.7),
        StateRecord::new("Mississippi", "MS", 26.4, 10.2),
    ]
}

fn engine_with_sample_data() -> ChartEngine<NullRenderer> {
    let config = ChartEngineConfig::new(Viewport::new(960, 540));
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
    engine.set_records(sample_records());
    engine.render().expect("initial render");
    engine
}

#[test]
fn render_emits_one_circle_and_label_per_record() {
    let engine = engine_with_sample_data();
    let scene = engine.scene().expect("scene after render");

    let x_ticks = scene.x_axis.ticks.len();
    let y_ticks = scene.y_axis.ticks.len();
    let renderer = engine.renderer();

    assert_eq!(renderer.last_circle_count, 4);
    // Two spines plus one tick mark per axis tick.
    assert_eq!(renderer.last_line_count, 2 + x_ticks + y_ticks);
    // Tick labels, marker abbreviations, and the two axis captions.
    assert_eq!(renderer.last_text_count, x_ticks + y_ticks + 4 + 2);
    assert_eq!(renderer.last_rect_count, 0);
}

#[test]
fn render_fails_on_empty_dataset() {
    let config = ChartEngineConfig::new(Viewport::new(960, 540));
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");

    assert!(engine.render().is_err());
    assert!(!engine.has_rendered_frame());
}

#[test]
fn hovering_a_marker_shows_its_tooltip() {
    let mut engine = engine_with_sample_data();
    let (marker_x, marker_y) = {
        let scene = engine.scene().expect("scene");
        let marker = &scene.markers[2];
        (scene.plot.left + marker.x, scene.plot.top + marker.y)
    };

    engine.pointer_move(marker_x, marker_y);

    let hovered = engine.hover_state().hovered_record();
    assert_eq!(hovered, Some(2));

    let tooltip = engine.tooltip_state();
    assert!(tooltip.visible);
    let content = tooltip.content.as_ref().expect("tooltip content");
    assert_eq!(content.title, "Alabama");
    assert_eq!(
        content.rows.get("Poverty (%)").map(String::as_str),
        Some("20.1")
    );
    assert_eq!(
        content.rows.get("Healthcare (%)").map(String::as_str),
        Some("11.7")
    );
}

#[test]
fn tooltip_is_anchored_with_the_configured_offset() {
    let mut engine = engine_with_sample_data();
    let (marker_x, marker_y) = {
        let scene = engine.scene().expect("scene");
        let marker = &scene.markers[0];
        (scene.plot.left + marker.x, scene.plot.top + marker.y)
    };

    engine.pointer_move(marker_x, marker_y);

    let offset = engine.config().tooltip_offset;
    let tooltip = engine.tooltip_state();
    assert!((tooltip.anchor_x - (marker_x + offset.dx)).abs() <= 1e-9);
    assert!((tooltip.anchor_y - (marker_y + offset.dy)).abs() <= 1e-9);
}

#[test]
fn rendering_while_hovered_adds_the_tooltip_overlay() {
    let mut engine = engine_with_sample_data();
    let (marker_x, marker_y) = {
        let scene = engine.scene().expect("scene");
        let marker = &scene.markers[1];
        (scene.plot.left + marker.x, scene.plot.top + marker.y)
    };

    engine.pointer_move(marker_x, marker_y);
    engine.render().expect("render with tooltip");

    let renderer = engine.renderer();
    assert_eq!(renderer.last_rect_count, 1);

    let scene = engine.scene().expect("scene");
    let baseline_texts = scene.x_axis.ticks.len() + scene.y_axis.ticks.len() + 4 + 2;
    // Title plus two detail rows.
    assert_eq!(renderer.last_text_count, baseline_texts + 3);
}

#[test]
fn pointer_leave_hides_the_tooltip() {
    let mut engine = engine_with_sample_data();
    let (marker_x, marker_y) = {
        let scene = engine.scene().expect("scene");
        let marker = &scene.markers[3];
        (scene.plot.left + marker.x, scene.plot.top + marker.y)
    };

    engine.pointer_move(marker_x, marker_y);
    assert!(engine.tooltip_state().visible);

    engine.pointer_leave();
    assert!(!engine.tooltip_state().visible);
    assert!(engine.tooltip_state().content.is_none());
    assert_eq!(engine.hover_state().hovered_record(), None);
}

#[test]
fn pointer_outside_all_markers_shows_nothing() {
    let mut engine = engine_with_sample_data();
    let scene_plot = engine.scene().expect("scene").plot;

    // Bottom-left plot corner is far from every sample marker.
    engine.pointer_move(scene_plot.left + 1.0, scene_plot.top + scene_plot.height - 1.0);

    assert_eq!(engine.hover_state().hovered_record(), None);
    assert!(!engine.tooltip_state().visible);
}

#[test]
fn overlapping_markers_resolve_to_the_nearest_center() {
    let config = ChartEngineConfig::new(Viewport::new(960, 540)).with_marker_radius(40.0);
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
    engine.set_records(vec![
        StateRecord::new("Left", "LF", 10.0, 5.0),
        StateRecord::new("Right", "RT", 10.05, 5.0),
    ]);
    engine.render().expect("render");

    let (x, y) = {
        let scene = engine.scene().expect("scene");
        let near_right = &scene.markers[1];
        (scene.plot.left + near_right.x - 1.0, scene.plot.top + near_right.y)
    };
    engine.pointer_move(x, y);

    assert_eq!(engine.hover_state().hovered_record(), Some(1));
}

#[test]
fn loading_from_csv_reader_feeds_the_chart() {
    let csv = "\
state,abbr,poverty,healthcare
Alabama,AL,20.1,11.7
Alaska,AK,8.1,6.7
";
    let config = ChartEngineConfig::new(Viewport::new(960, 540));
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
    engine
        .load_records_from_reader(csv.as_bytes())
        .expect("load");
    engine.render().expect("render");

    assert_eq!(engine.records().len(), 2);
    assert_eq!(engine.renderer().last_circle_count, 2);
}

#[test]
fn snapshot_json_reports_domains_and_counts() {
    let engine = engine_with_sample_data();
    let json = engine.snapshot_json_pretty().expect("snapshot json");

    assert!(json.contains("\"record_count\": 4"));
    assert!(json.contains("\"marker_count\": 4"));
    assert!(json.contains("\"x_domain\""));
    assert!(json.contains("\"y_domain\""));
}
