//! SVG painters for the wellbore, surface equipment and tubing run.

use std::io::Write;

use svg::node::element as svg_element;

use wellbore_core::{
    apply_fill, apply_stroke,
    draw::{StrokeCap, StrokeDefinition},
    scene::{Scene, Segment},
};

use super::{Svg, segment_rect};

const CASING_WALL_WIDTH: f32 = 6.0;
/// Depth of the perforation tunnels into the formation.
const PERFORATION_DEPTH: f32 = 20.0;
const PERFORATION_SPACING: f32 = 40.0;
const PERFORATION_SHOTS: u16 = 3;
/// Settled solids at the bottom of the rat hole.
const RAT_HOLE_FILL_HEIGHT: f32 = 130.0;
const TUBING_COUPLING_SPACING: f32 = 100.0;
const TUBING_COUPLING_HEIGHT: f32 = 8.0;

impl<W: Write> Svg<W> {
    pub(super) fn render_cement(&self, segment: &Segment) -> Box<dyn svg::Node> {
        segment_rect(segment).set("fill", "url(#pat-cement)").into()
    }

    pub(super) fn render_casing(&self, segment: &Segment) -> Box<dyn svg::Node> {
        let wall = StrokeDefinition::solid(self.palette.ink, CASING_WALL_WIDTH);
        let left_x = segment.left_x();
        let right_x = left_x + segment.width();

        let interior = segment_rect(segment).set("fill", "white");
        let rat_hole = apply_fill!(
            svg_element::Rectangle::new()
                .set("x", left_x)
                .set("y", segment.bottom_y() - RAT_HOLE_FILL_HEIGHT)
                .set("width", segment.width())
                .set("height", RAT_HOLE_FILL_HEIGHT),
            self.palette.rat_hole.with_alpha(0.6)
        );

        let walls = [left_x, right_x].into_iter().map(|x| {
            apply_stroke!(
                svg_element::Line::new()
                    .set("x1", x)
                    .set("y1", segment.top_y())
                    .set("x2", x)
                    .set("y2", segment.bottom_y()),
                &wall
            )
        });

        walls
            .fold(
                svg_element::Group::new().add(interior).add(rat_hole),
                |group, line| group.add(line),
            )
            .into()
    }

    pub(super) fn render_fluid_column(&self, segment: &Segment, scene: &Scene) -> Box<dyn svg::Node> {
        let surface = StrokeDefinition::dashed(self.palette.fluid, 2.0);
        let left_x = segment.left_x();
        let right_x = left_x + segment.width();

        let caption = svg_element::Text::new(format!(
            "Dynamic level ({}%)",
            scene.readouts().fluid_level_percent()
        ))
        .set("x", right_x + 12.0)
        .set("y", segment.top_y() + 4.0)
        .set("font-family", "sans-serif")
        .set("font-size", 11)
        .set("font-weight", "bold")
        .set("fill", &self.palette.fluid);

        svg_element::Group::new()
            .add(segment_rect(segment).set("fill", "url(#grad-fluid)"))
            .add(apply_stroke!(
                svg_element::Line::new()
                    .set("x1", left_x)
                    .set("y1", segment.top_y())
                    .set("x2", right_x)
                    .set("y2", segment.top_y()),
                &surface
            ))
            .add(caption)
            .into()
    }

    pub(super) fn render_perforations(&self, segment: &Segment, scene: &Scene) -> Box<dyn svg::Node> {
        let axis_x = scene.well_axis_x();
        let casing_half = segment.width() / 2.0 - PERFORATION_DEPTH;
        let top_y = segment.top_y();

        let shots = (0..PERFORATION_SHOTS).flat_map(|i| {
            let y = top_y + f32::from(i) * PERFORATION_SPACING;
            let left = format!(
                "{},{} {},{} {},{}",
                axis_x - casing_half,
                y,
                axis_x - casing_half - PERFORATION_DEPTH,
                y + 10.0,
                axis_x - casing_half,
                y + 20.0
            );
            let right = format!(
                "{},{} {},{} {},{}",
                axis_x + casing_half,
                y + 20.0,
                axis_x + casing_half + PERFORATION_DEPTH,
                y + 30.0,
                axis_x + casing_half,
                y + 40.0
            );
            [left, right]
        });

        let group = shots.fold(svg_element::Group::new(), |group, points| {
            group.add(
                svg_element::Polygon::new()
                    .set("points", points)
                    .set("fill", &self.palette.ink),
            )
        });

        group
            .add(
                svg_element::Text::new("Perforated zone")
                    .set("x", axis_x + casing_half + PERFORATION_DEPTH + 10.0)
                    .set("y", top_y + PERFORATION_SPACING)
                    .set("font-family", "sans-serif")
                    .set("font-size", 12)
                    .set("font-weight", "bold")
                    .set("fill", &self.palette.ink),
            )
            .into()
    }

    /// Wellhead and christmas tree, drawn upwards from the ground line.
    pub(super) fn render_surface_equipment(&self, segment: &Segment) -> Box<dyn svg::Node> {
        let x = segment.center_x();
        let ground_y = segment.bottom_y();
        let outline = StrokeDefinition::solid(self.palette.ink, 2.0);
        let valve_outline = StrokeDefinition::solid(self.palette.valve_edge, 2.0);

        let base = svg_element::Path::new()
            .set(
                "d",
                format!(
                    "M{} {} L{} {} L{} {} L{} {} Z",
                    x - 70.0,
                    ground_y,
                    x + 70.0,
                    ground_y,
                    x + 60.0,
                    ground_y - 10.0,
                    x - 60.0,
                    ground_y - 10.0
                ),
            )
            .set("fill", &self.palette.steel_dark);
        let wellhead = apply_stroke!(
            svg_element::Rectangle::new()
                .set("x", x - 60.0)
                .set("y", ground_y - 40.0)
                .set("width", 120)
                .set("height", 40)
                .set("fill", &self.palette.steel),
            &outline
        );
        let tree = apply_stroke!(
            svg_element::Rectangle::new()
                .set("x", x - 20.0)
                .set("y", ground_y - 140.0)
                .set("width", 40)
                .set("height", 100)
                .set("fill", &self.palette.steel),
            &outline
        );
        let wing = apply_stroke!(
            svg_element::Rectangle::new()
                .set("x", x - 80.0)
                .set("y", ground_y - 100.0)
                .set("width", 60)
                .set("height", 20)
                .set("fill", &self.palette.steel),
            &outline
        );
        let swab_valve = apply_stroke!(
            svg_element::Circle::new()
                .set("cx", x)
                .set("cy", ground_y - 150.0)
                .set("r", 15)
                .set("fill", &self.palette.valve),
            &valve_outline
        );
        let wing_valve = apply_stroke!(
            svg_element::Circle::new()
                .set("cx", x - 90.0)
                .set("cy", ground_y - 90.0)
                .set("r", 12)
                .set("fill", &self.palette.valve),
            &valve_outline
        );

        svg_element::Group::new()
            .add(wellhead)
            .add(base)
            .add(tree)
            .add(swab_valve)
            .add(wing)
            .add(wing_valve)
            .into()
    }

    /// Transformer, drive panel and the surface power run to the wellhead.
    pub(super) fn render_vsd(&self, segment: &Segment, scene: &Scene) -> Box<dyn svg::Node> {
        let left_x = segment.left_x();
        let top_y = segment.top_y();
        let outline = StrokeDefinition::solid(self.palette.ink, 2.0);
        let feed = StrokeDefinition::solid(self.palette.cable, 3.0).with_cap(StrokeCap::Round);

        let transformer = apply_stroke!(
            svg_element::Rectangle::new()
                .set("x", left_x)
                .set("y", top_y + 40.0)
                .set("width", 70)
                .set("height", 80)
                .set("rx", 2)
                .set("fill", &self.palette.steel),
            &outline
        );
        let panel_x = left_x + 100.0;
        let panel = apply_stroke!(
            svg_element::Rectangle::new()
                .set("x", panel_x)
                .set("y", top_y)
                .set("width", 90)
                .set("height", 140)
                .set("rx", 2)
                .set("fill", &self.palette.panel),
            &outline
        );
        let display = svg_element::Rectangle::new()
            .set("x", panel_x + 10.0)
            .set("y", top_y + 20.0)
            .set("width", 70)
            .set("height", 40)
            .set("fill", &self.palette.steel_dark);

        let frequency = scene
            .readouts()
            .vsd_frequency_hz()
            .map(|hz| format!("{hz:.1} Hz"))
            .unwrap_or_default();
        let readout = svg_element::Text::new(frequency)
            .set("x", panel_x + 45.0)
            .set("y", top_y + 45.0)
            .set("text-anchor", "middle")
            .set("font-family", "monospace")
            .set("font-size", 14)
            .set("font-weight", "bold")
            .set("fill", "#2ecc71");

        let caption = |text: &str, x: f32| {
            svg_element::Text::new(text)
                .set("x", x)
                .set("y", top_y + 155.0)
                .set("text-anchor", "middle")
                .set("font-family", "sans-serif")
                .set("font-size", 10)
                .set("font-weight", "bold")
                .set("fill", &self.palette.ink)
        };

        // Power run from the panel into the wellhead
        let run_y = top_y + 130.0;
        let power_run = apply_stroke!(
            svg_element::Line::new()
                .set("x1", panel_x + 90.0)
                .set("y1", run_y)
                .set("x2", scene.well_axis_x() - 60.0)
                .set("y2", run_y),
            &feed
        );

        svg_element::Group::new()
            .add(transformer)
            .add(panel)
            .add(display)
            .add(readout)
            .add(caption("TRANSFORMER", left_x + 35.0))
            .add(caption("VSD", panel_x + 45.0))
            .add(power_run)
            .into()
    }

    pub(super) fn render_tubing(&self, segment: &Segment) -> Box<dyn svg::Node> {
        let outline = StrokeDefinition::solid(self.palette.muted, 1.0);
        let body = apply_stroke!(segment_rect(segment).set("fill", "url(#grad-metal)"), &outline);

        let coupling_count = (segment.height() / TUBING_COUPLING_SPACING) as u16;
        let couplings = (1..=coupling_count).map(|i| {
            svg_element::Rectangle::new()
                .set("x", segment.left_x() - 2.0)
                .set("y", segment.top_y() + f32::from(i) * TUBING_COUPLING_SPACING)
                .set("width", segment.width() + 4.0)
                .set("height", TUBING_COUPLING_HEIGHT)
                .set("fill", &self.palette.steel)
        });

        couplings
            .fold(svg_element::Group::new().add(body), |group, coupling| {
                group.add(coupling)
            })
            .into()
    }

    pub(super) fn render_cable(&self, segment: &Segment) -> Box<dyn svg::Node> {
        let stroke =
            StrokeDefinition::solid(self.palette.cable, segment.width()).with_cap(StrokeCap::Round);
        apply_stroke!(
            svg_element::Line::new()
                .set("x1", segment.center_x())
                .set("y1", segment.top_y())
                .set("x2", segment.center_x())
                .set("y2", segment.bottom_y()),
            &stroke
        )
        .into()
    }

    pub(super) fn render_cable_guard(&self, segment: &Segment) -> Box<dyn svg::Node> {
        segment_rect(segment)
            .set("rx", 2)
            .set("fill", &self.palette.ink)
            .into()
    }
}
