//! SVG painters for segment labels and the readout panel.

use std::io::Write;

use svg::node::element as svg_element;

use wellbore_core::{
    apply_fill, apply_stroke,
    draw::StrokeDefinition,
    scene::{LabelAnchor, Scene, SegmentKind},
};

use super::Svg;

const ACCENT_BAR_WIDTH: f32 = 4.0;
const TEXT_INSET: f32 = 12.0;
const READOUT_X: f32 = 20.0;
const READOUT_LINE_HEIGHT: f32 = 16.0;

impl<W: Write> Svg<W> {
    /// Paints the dotted leader, the anchor dot and the label box.
    pub(super) fn render_label(&self, label: &LabelAnchor) -> svg_element::Group {
        let leader = StrokeDefinition::dotted(self.palette.ink.with_alpha(0.6), 1.0);
        let box_edge = StrokeDefinition::solid(self.palette.label_edge, 1.0);

        let start = label.connector_start();
        let end = label.connector_end();
        let origin = label.box_origin();
        let size = label.box_size();

        let connector = apply_stroke!(
            svg_element::Line::new()
                .set("x1", start.x())
                .set("y1", start.y())
                .set("x2", end.x())
                .set("y2", end.y()),
            &leader
        );
        let dot = svg_element::Circle::new()
            .set("cx", start.x())
            .set("cy", start.y())
            .set("r", 3)
            .set("fill", &self.palette.ink);

        let frame = apply_stroke!(
            apply_fill!(
                svg_element::Rectangle::new()
                    .set("x", origin.x())
                    .set("y", origin.y())
                    .set("width", size.width())
                    .set("height", size.height())
                    .set("rx", 4),
                self.palette.label_fill
            ),
            &box_edge
        );
        let accent = svg_element::Rectangle::new()
            .set("x", origin.x())
            .set("y", origin.y())
            .set("width", ACCENT_BAR_WIDTH)
            .set("height", size.height())
            .set("rx", 2)
            .set("fill", &self.palette.accent);

        let title_y = match label.subtitle() {
            Some(_) => origin.y() + 14.0,
            None => origin.y() + size.height() / 2.0 + 4.0,
        };
        let title = svg_element::Text::new(label.title())
            .set("x", origin.x() + TEXT_INSET)
            .set("y", title_y)
            .set("font-family", "sans-serif")
            .set("font-size", 13)
            .set("font-weight", "bold")
            .set("fill", &self.palette.ink);

        let mut group = svg_element::Group::new()
            .set("class", format!("label-{}", label.kind()))
            .add(connector)
            .add(dot)
            .add(frame)
            .add(accent)
            .add(title);

        if let Some(subtitle) = label.subtitle() {
            group = group.add(
                svg_element::Text::new(subtitle)
                    .set("x", origin.x() + TEXT_INSET)
                    .set("y", origin.y() + 27.0)
                    .set("font-family", "monospace")
                    .set("font-size", 10)
                    .set("fill", &self.palette.muted),
            );
        }

        group
    }

    /// Paints the ground caption and the summary of the displayed parameters.
    pub(super) fn render_readouts(&self, scene: &Scene) -> svg_element::Group {
        let readouts = scene.readouts();
        let mut lines = vec![
            format!(
                "Motor: {} ({})",
                readouts.motor_type(),
                readouts.motor_type().description()
            ),
            format!("Pump: {} stages", readouts.pump_stage_count()),
            format!("Fluid level: {}%", readouts.fluid_level_percent()),
        ];
        if let Some(hz) = readouts.vsd_frequency_hz() {
            lines.push(format!("VSD: {hz:.1} Hz"));
        }

        let mut group = lines.into_iter().enumerate().fold(
            svg_element::Group::new().set("class", "readouts"),
            |group, (i, line)| {
                group.add(
                    svg_element::Text::new(line)
                        .set("x", READOUT_X)
                        .set("y", READOUT_LINE_HEIGHT * (i as f32 + 1.0))
                        .set("font-family", "monospace")
                        .set("font-size", 11)
                        .set("fill", &self.palette.ink),
                )
            },
        );

        if scene.segment(SegmentKind::SurfaceEquipment).is_some() {
            group = group.add(
                svg_element::Text::new("GROUND LEVEL")
                    .set("x", READOUT_X)
                    .set("y", scene.ground_y() - 10.0)
                    .set("font-family", "sans-serif")
                    .set("font-size", 12)
                    .set("font-weight", "bold")
                    .set("fill", &self.palette.muted),
            );
        }

        group
    }
}
