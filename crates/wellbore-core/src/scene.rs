//! The positioned output of a layout run.
//!
//! A [`Scene`] is a complete, renderer-agnostic description of one
//! completion schematic. It is rebuilt from scratch for every configuration
//! and never mutated afterwards: all fields are private and only readable.
//!
//! # Contents
//!
//! - An ordered list of [`Segment`]s. The order is the paint order, from the
//!   cement sheath at the back to the ESP stack at the front.
//! - One [`LabelAnchor`] per labeled segment, derived from that segment's
//!   final geometry.
//! - [`Readouts`]: non-geometric values a painter prints on the schematic.
//!
//! All coordinates are unscaled layout units. Display zoom is applied by
//! the painter as a single outer transform.

use std::fmt;

use crate::{
    completion::MotorType,
    geometry::{Bounds, Point, Size},
};

/// The kind of a schematic segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SegmentKind {
    /// Cement sheath around the casing
    Cement,
    /// Production casing from the ground line to the well bottom
    Casing,
    /// Well fluid from the dynamic level down to the well bottom
    FluidColumn,
    /// Perforated interval near the well bottom
    PerforationBand,
    /// Wellhead and christmas tree above the ground line
    SurfaceEquipment,
    /// Transformer and variable speed drive panel
    Vsd,
    /// Production tubing from the ground line to the pump
    Tubing,
    /// Power cable from the ground line to the motor pothead
    Cable,
    /// A single cable guard clamp
    CableGuard,
    Packer,
    YTool,
    Pump,
    Intake,
    /// Seal section (protector)
    Seal,
    Motor,
    /// Downhole gauge below the motor
    Sensor,
}

impl SegmentKind {
    /// Returns a stable, lowercase name for this kind.
    pub fn name(self) -> &'static str {
        match self {
            Self::Cement => "cement",
            Self::Casing => "casing",
            Self::FluidColumn => "fluid-column",
            Self::PerforationBand => "perforation-band",
            Self::SurfaceEquipment => "surface-equipment",
            Self::Vsd => "vsd",
            Self::Tubing => "tubing",
            Self::Cable => "cable",
            Self::CableGuard => "cable-guard",
            Self::Packer => "packer",
            Self::YTool => "y-tool",
            Self::Pump => "pump",
            Self::Intake => "intake",
            Self::Seal => "seal",
            Self::Motor => "motor",
            Self::Sensor => "sensor",
        }
    }

    /// Returns true for the kinds stacked contiguously below the tubing.
    pub fn is_main_stack(self) -> bool {
        matches!(
            self,
            Self::Pump | Self::Intake | Self::Seal | Self::Motor | Self::Sensor
        )
    }
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A positioned, axis-aligned piece of the schematic.
///
/// Segments are described by their vertical extent (`top_y`, `height`) and
/// their horizontal extent around a center line (`center_x`, `width`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    kind: SegmentKind,
    top_y: f32,
    height: f32,
    width: f32,
    center_x: f32,
    visible: bool,
}

impl Segment {
    /// Creates a visible segment.
    pub fn new(kind: SegmentKind, top_y: f32, height: f32, width: f32, center_x: f32) -> Self {
        Self {
            kind,
            top_y,
            height,
            width,
            center_x,
            visible: true,
        }
    }

    /// Sets whether painters should draw this segment (builder style).
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn kind(&self) -> SegmentKind {
        self.kind
    }

    pub fn top_y(&self) -> f32 {
        self.top_y
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn center_x(&self) -> f32 {
        self.center_x
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Returns the y-coordinate just below this segment.
    pub fn bottom_y(&self) -> f32 {
        self.top_y + self.height
    }

    /// Returns the y-coordinate of the vertical midpoint.
    pub fn mid_y(&self) -> f32 {
        self.top_y + self.height / 2.0
    }

    /// Returns the x-coordinate of the left edge.
    pub fn left_x(&self) -> f32 {
        self.center_x - self.width / 2.0
    }

    /// Returns the rectangle covered by this segment.
    pub fn bounds(&self) -> Bounds {
        Bounds::new_from_top_left(
            Point::new(self.left_x(), self.top_y),
            Size::new(self.width, self.height),
        )
    }
}

/// Where a segment's label goes and how it connects back to the segment.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelAnchor {
    kind: SegmentKind,
    anchor: Point,
    connector_start: Point,
    connector_end: Point,
    box_origin: Point,
    box_size: Size,
    title: String,
    subtitle: Option<String>,
    crowded: bool,
}

impl LabelAnchor {
    /// Creates a label anchor from fully resolved geometry and text.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        kind: SegmentKind,
        anchor: Point,
        connector_start: Point,
        connector_end: Point,
        box_origin: Point,
        box_size: Size,
        title: impl Into<String>,
        subtitle: Option<String>,
        crowded: bool,
    ) -> Self {
        Self {
            kind,
            anchor,
            connector_start,
            connector_end,
            box_origin,
            box_size,
            title: title.into(),
            subtitle,
            crowded,
        }
    }

    /// Kind of the segment this label describes.
    pub fn kind(&self) -> SegmentKind {
        self.kind
    }

    /// Point on the well axis at the segment's vertical midpoint.
    pub fn anchor(&self) -> Point {
        self.anchor
    }

    pub fn connector_start(&self) -> Point {
        self.connector_start
    }

    pub fn connector_end(&self) -> Point {
        self.connector_end
    }

    /// Top-left corner of the label box.
    pub fn box_origin(&self) -> Point {
        self.box_origin
    }

    pub fn box_size(&self) -> Size {
        self.box_size
    }

    /// Rectangle covered by the label box.
    pub fn box_bounds(&self) -> Bounds {
        Bounds::new_from_top_left(self.box_origin, self.box_size)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    /// True when the segment is shorter than the label box, so this label
    /// may overlap its neighbours.
    pub fn crowded(&self) -> bool {
        self.crowded
    }
}

/// Non-geometric values printed on the schematic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Readouts {
    motor_type: MotorType,
    pump_stage_count: u32,
    fluid_level_percent: f32,
    vsd_frequency_hz: Option<f32>,
}

impl Readouts {
    pub fn new(
        motor_type: MotorType,
        pump_stage_count: u32,
        fluid_level_percent: f32,
        vsd_frequency_hz: Option<f32>,
    ) -> Self {
        Self {
            motor_type,
            pump_stage_count,
            fluid_level_percent,
            vsd_frequency_hz,
        }
    }

    pub fn motor_type(&self) -> MotorType {
        self.motor_type
    }

    pub fn pump_stage_count(&self) -> u32 {
        self.pump_stage_count
    }

    pub fn fluid_level_percent(&self) -> f32 {
        self.fluid_level_percent
    }

    /// Drive frequency, present only when the VSD panel is drawn.
    pub fn vsd_frequency_hz(&self) -> Option<f32> {
        self.vsd_frequency_hz
    }
}

/// Reference lines of a scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneFrame {
    /// Total width of the schematic
    pub total_width: f32,
    /// Total height of the schematic, i.e. the well bottom
    pub total_height: f32,
    /// Horizontal center of the borehole
    pub well_axis_x: f32,
    /// Ground line, the bottom of the surface band
    pub ground_y: f32,
    /// Dynamic fluid level
    pub fluid_y: f32,
    /// Top of the ESP stack
    pub pump_top_y: f32,
}

/// A fully resolved schematic.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    frame: SceneFrame,
    segments: Vec<Segment>,
    labels: Vec<LabelAnchor>,
    readouts: Readouts,
}

impl Scene {
    /// Assembles a scene from its parts.
    pub fn new(
        frame: SceneFrame,
        segments: Vec<Segment>,
        labels: Vec<LabelAnchor>,
        readouts: Readouts,
    ) -> Self {
        Self {
            frame,
            segments,
            labels,
            readouts,
        }
    }

    pub fn total_width(&self) -> f32 {
        self.frame.total_width
    }

    pub fn total_height(&self) -> f32 {
        self.frame.total_height
    }

    pub fn size(&self) -> Size {
        Size::new(self.frame.total_width, self.frame.total_height)
    }

    pub fn well_axis_x(&self) -> f32 {
        self.frame.well_axis_x
    }

    pub fn ground_y(&self) -> f32 {
        self.frame.ground_y
    }

    pub fn fluid_y(&self) -> f32 {
        self.frame.fluid_y
    }

    pub fn pump_top_y(&self) -> f32 {
        self.frame.pump_top_y
    }

    /// All segments in paint order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Segments painters should draw, in paint order.
    pub fn visible_segments(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter().filter(|segment| segment.visible())
    }

    /// The contiguous pump, intake, seal, motor and sensor segments, top to bottom.
    pub fn main_stack(&self) -> impl Iterator<Item = &Segment> {
        self.segments
            .iter()
            .filter(|segment| segment.kind().is_main_stack())
    }

    /// Returns the first segment of the given kind.
    pub fn segment(&self, kind: SegmentKind) -> Option<&Segment> {
        self.segments.iter().find(|segment| segment.kind() == kind)
    }

    /// Returns every segment of the given kind.
    pub fn segments_of(&self, kind: SegmentKind) -> impl Iterator<Item = &Segment> {
        self.segments
            .iter()
            .filter(move |segment| segment.kind() == kind)
    }

    pub fn labels(&self) -> &[LabelAnchor] {
        &self.labels
    }

    /// Returns the label bound to the given kind.
    pub fn label(&self, kind: SegmentKind) -> Option<&LabelAnchor> {
        self.labels.iter().find(|label| label.kind() == kind)
    }

    pub fn readouts(&self) -> &Readouts {
        &self.readouts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_scene() -> Scene {
        let frame = SceneFrame {
            total_width: 950.0,
            total_height: 1300.0,
            well_axis_x: 350.0,
            ground_y: 350.0,
            fluid_y: 635.0,
            pump_top_y: 800.0,
        };
        let segments = vec![
            Segment::new(SegmentKind::Casing, 350.0, 950.0, 200.0, 350.0),
            Segment::new(SegmentKind::CableGuard, 750.0, 20.0, 12.0, 367.0),
            Segment::new(SegmentKind::CableGuard, 670.0, 20.0, 12.0, 367.0),
            Segment::new(SegmentKind::Pump, 800.0, 180.0, 50.0, 350.0),
            Segment::new(SegmentKind::Intake, 980.0, 50.0, 46.0, 350.0),
            Segment::new(SegmentKind::FluidColumn, 1300.0, 0.0, 196.0, 350.0).with_visible(false),
        ];
        let readouts = Readouts::new(MotorType::Induction, 120, 30.0, Some(50.0));
        Scene::new(frame, segments, Vec::new(), readouts)
    }

    #[test]
    fn test_segment_derived_edges() {
        let pump = Segment::new(SegmentKind::Pump, 800.0, 180.0, 50.0, 350.0);
        assert_eq!(pump.bottom_y(), 980.0);
        assert_eq!(pump.mid_y(), 890.0);
        assert_eq!(pump.left_x(), 325.0);

        let bounds = pump.bounds();
        assert_eq!(bounds.min_x(), 325.0);
        assert_eq!(bounds.max_x(), 375.0);
        assert_eq!(bounds.min_y(), 800.0);
        assert_eq!(bounds.max_y(), 980.0);
    }

    #[test]
    fn test_scene_queries() {
        let scene = sample_scene();

        assert_eq!(scene.segments_of(SegmentKind::CableGuard).count(), 2);
        assert_eq!(scene.main_stack().count(), 2);
        assert_eq!(scene.visible_segments().count(), 5);
        assert!(scene.segment(SegmentKind::Sensor).is_none());
        assert_eq!(
            scene.segment(SegmentKind::Intake).map(Segment::top_y),
            Some(980.0)
        );
        assert_eq!(scene.size(), Size::new(950.0, 1300.0));
    }

    #[test]
    fn test_main_stack_kinds() {
        assert!(SegmentKind::Pump.is_main_stack());
        assert!(SegmentKind::Sensor.is_main_stack());
        assert!(!SegmentKind::Packer.is_main_stack());
        assert!(!SegmentKind::Tubing.is_main_stack());
    }

    #[test]
    fn test_segment_kind_names() {
        assert_eq!(SegmentKind::YTool.to_string(), "y-tool");
        assert_eq!(SegmentKind::PerforationBand.name(), "perforation-band");
    }
}
