//! Integration tests for the SchematicBuilder API
//!
//! These tests drive the public API end to end: TOML in, SVG out.

use wellbore::{
    SchematicBuilder, WellboreError,
    completion::{CompletionConfig, MotorType},
    config::{AppConfig, StyleConfig},
    scene::SegmentKind,
};

#[test]
fn test_parse_empty_document_gives_defaults() {
    let builder = SchematicBuilder::default();
    let completion = builder.parse("").expect("Failed to parse empty document");
    assert_eq!(completion, CompletionConfig::default());
}

#[test]
fn test_parse_full_document() {
    let source = r#"
        zoom = 1.2
        surface_visible = false
        vsd_present = false
        vsd_frequency_hz = 60.0
        fluid_level_percent = 45.5
        cable_gauge_index = 2
        packer_installed = false
        y_tool_installed = true
        cable_guards_installed = false
        motor_type = "permanent-magnet"
        motor_power_hp = 600.0
        pump_stage_count = 200
        sensor_installed = false
    "#;

    let builder = SchematicBuilder::default();
    let completion = builder.parse(source).expect("Failed to parse completion");

    assert_eq!(completion.zoom(), 1.2);
    assert!(!completion.surface_visible());
    assert_eq!(completion.cable_gauge_index(), 2);
    assert!(completion.y_tool_installed());
    assert_eq!(completion.motor_type(), MotorType::PermanentMagnet);
    assert_eq!(completion.pump_stage_count(), 200);
    assert!(!completion.sensor_installed());
}

#[test]
fn test_parse_resolves_packer_conflict() {
    let source = r#"
        packer_installed = true
        y_tool_installed = true
    "#;

    let completion = SchematicBuilder::default()
        .parse(source)
        .expect("Failed to parse completion");
    assert!(completion.packer_installed());
    assert!(!completion.y_tool_installed());
}

#[test]
fn test_parse_clamps_out_of_domain_values() {
    let source = r#"
        fluid_level_percent = 180.0
        pump_stage_count = 5
        motor_power_hp = 5000.0
    "#;

    let completion = SchematicBuilder::default()
        .parse(source)
        .expect("Failed to parse completion");
    assert_eq!(completion.fluid_level_percent(), 100.0);
    assert_eq!(completion.pump_stage_count(), 20);
    assert_eq!(completion.motor_power_hp(), 1000.0);
}

#[test]
fn test_parse_clamps_out_of_range_counts() {
    let source = r#"
        pump_stage_count = -10
        cable_gauge_index = 300
    "#;

    let completion = SchematicBuilder::default()
        .parse(source)
        .expect("Out-of-range counts should clamp, not fail");
    assert_eq!(completion.pump_stage_count(), 20);
    assert_eq!(completion.cable_gauge_index(), 6);

    let completion = SchematicBuilder::default()
        .parse("pump_stage_count = 9000000000\ncable_gauge_index = -1")
        .expect("Out-of-range counts should clamp, not fail");
    assert_eq!(completion.pump_stage_count(), 400);
    assert_eq!(completion.cable_gauge_index(), 1);
}

#[test]
fn test_apply_edits_clamps_out_of_range_counts() {
    let completion = SchematicBuilder::default()
        .apply_edits(CompletionConfig::default(), ["stages=-10", "cable_gauge=300"])
        .expect("Out-of-range counts should clamp, not fail");
    assert_eq!(completion.pump_stage_count(), 20);
    assert_eq!(completion.cable_gauge_index(), 6);
}

#[test]
fn test_parse_unknown_key_returns_error() {
    let result = SchematicBuilder::default().parse("casing_grade = \"N80\"");
    assert!(
        matches!(result, Err(WellboreError::Parse { .. })),
        "Should reject unknown keys: {result:?}"
    );
}

#[test]
fn test_parse_invalid_syntax_returns_error() {
    let result = SchematicBuilder::default().parse("pump_stage_count = = 3");
    match result {
        Err(WellboreError::Parse { src, .. }) => assert_eq!(src, "pump_stage_count = = 3"),
        other => panic!("Expected a parse error, got {other:?}"),
    }
}

#[test]
fn test_apply_edits_last_toggle_wins() {
    let builder = SchematicBuilder::default();
    let completion = builder
        .apply_edits(
            CompletionConfig::default(),
            ["packer=on", "y_tool=on", "stages=300"],
        )
        .expect("Failed to apply edits");

    assert!(completion.y_tool_installed());
    assert!(!completion.packer_installed());
    assert_eq!(completion.pump_stage_count(), 300);
}

#[test]
fn test_apply_edits_rejects_bad_edit() {
    let builder = SchematicBuilder::default();
    let result = builder.apply_edits(CompletionConfig::default(), ["stages=300", "depth=9000"]);
    assert!(matches!(result, Err(WellboreError::Edit(_))));
}

#[test]
fn test_render_default_completion() {
    let builder = SchematicBuilder::default();
    let svg = builder
        .render_completion_svg(&CompletionConfig::default())
        .expect("Failed to render");

    assert!(svg.contains("<svg"), "Output should contain SVG tag");
    assert!(svg.contains("</svg>"), "Output should be complete SVG");
    assert!(svg.contains("Pump 120 stages"));
    assert!(svg.contains("Downhole sensor"));
}

#[test]
fn test_render_applies_single_outer_scale() {
    let builder = SchematicBuilder::default();
    let scene = builder.layout(&CompletionConfig::default());
    let svg = builder.render_svg(&scene, 1.4).expect("Failed to render");

    assert_eq!(svg.matches("scale(").count(), 1);
    assert!(svg.contains("width=\"1330\""));
}

#[test]
fn test_render_with_invalid_style_returns_error() {
    let config = AppConfig::new(StyleConfig::new(Some("#zzz".to_string()), None));
    let builder = SchematicBuilder::new(config);
    let scene = builder.layout(&CompletionConfig::default());

    let result = builder.render_svg(&scene, 1.0);
    assert!(matches!(result, Err(WellboreError::Export(_))));
}

#[test]
fn test_builder_reusability() {
    let builder = SchematicBuilder::default();

    let first = builder.parse("pump_stage_count = 100").expect("Failed to parse first");
    let second = builder
        .parse("pump_stage_count = 300\nsensor_installed = false")
        .expect("Failed to parse second");

    let first_scene = builder.layout(&first);
    let second_scene = builder.layout(&second);

    assert!(first_scene.segment(SegmentKind::Sensor).is_some());
    assert!(second_scene.segment(SegmentKind::Sensor).is_none());
    assert!(first_scene.total_height() < second_scene.total_height());

    let svg1 = builder.render_svg(&first_scene, 1.0).expect("Failed to render first");
    let svg2 = builder.render_svg(&second_scene, 1.0).expect("Failed to render second");
    assert_ne!(svg1, svg2);
}
