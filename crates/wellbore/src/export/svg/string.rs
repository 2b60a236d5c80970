//! SVG painters for the ESP string and the accessories above it.

use std::io::Write;

use svg::node::element as svg_element;

use wellbore_core::{
    apply_fill, apply_stroke,
    completion::MotorType,
    draw::StrokeDefinition,
    scene::{Scene, Segment},
};

use super::{Svg, segment_rect};

/// Stage lines are drawn one per this many stages, up to a cap.
const STAGES_PER_LINE: u32 = 5;
const MAX_STAGE_LINES: u32 = 20;
const MOTOR_RIBS: u16 = 10;
const Y_TOOL_BYPASS_WIDTH: f32 = 20.0;
const Y_TOOL_BYPASS_LENGTH: f32 = 250.0;

/// Text rotated to run along a vertical tool body.
fn body_text(text: String, center_x: f32, center_y: f32, font_size: f32) -> svg_element::Text {
    svg_element::Text::new(text)
        .set("x", center_x)
        .set("y", center_y)
        .set("transform", format!("rotate(-90 {center_x} {center_y})"))
        .set("text-anchor", "middle")
        .set("dominant-baseline", "middle")
        .set("font-family", "sans-serif")
        .set("font-size", font_size)
        .set("font-weight", "bold")
}

impl<W: Write> Svg<W> {
    fn body_outline(&self) -> StrokeDefinition {
        StrokeDefinition::solid(self.palette.steel_dark, 1.0)
    }

    pub(super) fn render_pump(&self, segment: &Segment, scene: &Scene) -> Box<dyn svg::Node> {
        let body = apply_stroke!(
            segment_rect(segment).set("fill", "url(#grad-metal)"),
            &self.body_outline()
        );

        let stage_stroke = StrokeDefinition::solid(self.palette.muted.with_alpha(0.5), 1.0);
        let line_count =
            (scene.readouts().pump_stage_count() / STAGES_PER_LINE).min(MAX_STAGE_LINES);
        let spacing = segment.height() / MAX_STAGE_LINES as f32;
        let stage_lines = (0..line_count).map(|i| {
            let y = segment.top_y() + 10.0 + i as f32 * spacing;
            apply_stroke!(
                svg_element::Line::new()
                    .set("x1", segment.left_x())
                    .set("y1", y)
                    .set("x2", segment.left_x() + segment.width())
                    .set("y2", y),
                &stage_stroke
            )
        });

        stage_lines
            .fold(svg_element::Group::new().add(body), |group, line| {
                group.add(line)
            })
            .add(
                body_text(
                    "CENTRIFUGAL PUMP".to_string(),
                    segment.center_x(),
                    segment.mid_y(),
                    12.0,
                )
                .set("fill", &self.palette.steel_dark),
            )
            .into()
    }

    pub(super) fn render_intake(&self, segment: &Segment) -> Box<dyn svg::Node> {
        let body = apply_stroke!(
            segment_rect(segment).set("fill", &self.palette.intake),
            &self.body_outline()
        );
        let slot_stroke = StrokeDefinition::dotted(self.palette.steel_dark, 2.0);
        let slots = [-10.0, 0.0, 10.0].into_iter().map(|offset| {
            let x = segment.center_x() + offset;
            apply_stroke!(
                svg_element::Line::new()
                    .set("x1", x)
                    .set("y1", segment.top_y() + 5.0)
                    .set("x2", x)
                    .set("y2", segment.bottom_y() - 5.0),
                &slot_stroke
            )
        });

        slots
            .fold(svg_element::Group::new().add(body), |group, slot| {
                group.add(slot)
            })
            .into()
    }

    pub(super) fn render_seal(&self, segment: &Segment) -> Box<dyn svg::Node> {
        svg_element::Group::new()
            .add(apply_stroke!(
                segment_rect(segment).set("fill", "url(#grad-metal)"),
                &self.body_outline()
            ))
            .add(
                body_text(
                    "PROTECTOR".to_string(),
                    segment.center_x(),
                    segment.mid_y(),
                    10.0,
                )
                .set("fill", &self.palette.steel_dark),
            )
            .into()
    }

    /// Induction motors are drawn smooth, permanent magnet motors ribbed.
    pub(super) fn render_motor(&self, segment: &Segment, scene: &Scene) -> Box<dyn svg::Node> {
        let motor_type = scene.readouts().motor_type();
        let mut group = svg_element::Group::new().add(apply_stroke!(
            segment_rect(segment).set("fill", &self.palette.steel),
            &self.body_outline()
        ));

        match motor_type {
            MotorType::Induction => {
                let band = StrokeDefinition::solid(self.palette.steel_dark.with_alpha(0.3), 20.0);
                group = group.add(apply_stroke!(
                    svg_element::Line::new()
                        .set("x1", segment.center_x())
                        .set("y1", segment.top_y())
                        .set("x2", segment.center_x())
                        .set("y2", segment.bottom_y()),
                    &band
                ));
            }
            MotorType::PermanentMagnet => {
                let rib_spacing = segment.height() / f32::from(MOTOR_RIBS);
                for i in 0..MOTOR_RIBS {
                    group = group.add(apply_fill!(
                        svg_element::Rectangle::new()
                            .set("x", segment.left_x())
                            .set("y", segment.top_y() + f32::from(i) * rib_spacing)
                            .set("width", segment.width())
                            .set("height", 2),
                        self.palette.ink.with_alpha(0.3)
                    ));
                }
            }
        }

        // Pothead where the cable plugs in
        let pothead = svg_element::Rectangle::new()
            .set("x", segment.left_x() + segment.width() - 5.0)
            .set("y", segment.top_y() + 10.0)
            .set("width", 15)
            .set("height", 20)
            .set("fill", &self.palette.steel_dark);

        group
            .add(pothead)
            .add(
                body_text(
                    format!("{motor_type} MOTOR"),
                    segment.center_x(),
                    segment.mid_y(),
                    12.0,
                )
                .set("fill", "white"),
            )
            .into()
    }

    pub(super) fn render_sensor(&self, segment: &Segment) -> Box<dyn svg::Node> {
        let outline = StrokeDefinition::solid(self.palette.sensor_edge, 1.0);
        svg_element::Group::new()
            .add(apply_stroke!(
                segment_rect(segment)
                    .set("rx", 5)
                    .set("fill", &self.palette.sensor),
                &outline
            ))
            .add(
                svg_element::Text::new("SENSOR")
                    .set("x", segment.center_x())
                    .set("y", segment.mid_y() + 4.0)
                    .set("text-anchor", "middle")
                    .set("font-family", "sans-serif")
                    .set("font-size", 9)
                    .set("font-weight", "bold")
                    .set("fill", "white"),
            )
            .into()
    }

    /// Packer element with the tubing mandrel running through it.
    pub(super) fn render_packer(&self, segment: &Segment) -> Box<dyn svg::Node> {
        let mandrel = svg_element::Rectangle::new()
            .set("x", segment.center_x() - 15.0)
            .set("y", segment.top_y() - 10.0)
            .set("width", 30)
            .set("height", segment.height() + 20.0)
            .set("fill", "url(#grad-metal)");

        svg_element::Group::new()
            .add(
                segment_rect(segment)
                    .set("rx", 4)
                    .set("fill", &self.palette.steel_dark),
            )
            .add(mandrel)
            .into()
    }

    /// Y-tool crossover with the bypass tube hanging beside the pump.
    pub(super) fn render_y_tool(&self, segment: &Segment) -> Box<dyn svg::Node> {
        let x = segment.center_x();
        let top_y = segment.top_y();
        let half_width = segment.width() / 2.0;
        let outline = self.body_outline();

        let crossover = apply_stroke!(
            svg_element::Path::new()
                .set(
                    "d",
                    format!(
                        "M{} {top_y} L{} {top_y} L{} {} L{} {} Z",
                        x - half_width / 2.0,
                        x + half_width / 2.0,
                        x + half_width,
                        segment.bottom_y(),
                        x - half_width,
                        segment.bottom_y()
                    ),
                )
                .set("fill", "url(#grad-metal)"),
            &outline
        );
        let bypass = apply_stroke!(
            svg_element::Rectangle::new()
                .set("x", x + half_width)
                .set("y", top_y)
                .set("width", Y_TOOL_BYPASS_WIDTH)
                .set("height", Y_TOOL_BYPASS_LENGTH)
                .set("fill", "url(#grad-metal)"),
            &outline
        );

        svg_element::Group::new()
            .add(crossover)
            .add(bypass)
            .into()
    }
}
