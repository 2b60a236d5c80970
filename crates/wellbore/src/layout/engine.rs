//! Vertical stacking of the completion string.

use log::{debug, info, trace, warn};

use wellbore_core::{
    completion::{CompletionConfig, MotorType},
    scene::{Readouts, Scene, SceneFrame, Segment, SegmentKind},
};

use super::labels;

pub(crate) const TOTAL_WIDTH: f32 = 950.0;
pub(crate) const WELL_AXIS_X: f32 = 350.0;

const CASING_WIDTH: f32 = 200.0;
const CEMENT_WIDTH: f32 = 240.0;
const TUBING_WIDTH: f32 = 26.0;
const ESP_WIDTH: f32 = 50.0;

/// Motor height per horsepower.
const INDUCTION_POWER_FACTOR: f32 = 0.45;
const PERMANENT_MAGNET_POWER_FACTOR: f32 = 0.25;

const MOTOR_MIN_HEIGHT: f32 = 90.0;
const PUMP_MIN_HEIGHT: f32 = 120.0;
const STAGE_HEIGHT: f32 = 1.5;
const INTAKE_HEIGHT: f32 = 50.0;
const SEAL_HEIGHT: f32 = 70.0;
const SENSOR_HEIGHT: f32 = 35.0;

const SURFACE_BAND_HEIGHT: f32 = 350.0;
const COLLAPSED_SURFACE_BAND_HEIGHT: f32 = 60.0;
const TUBING_RUN: f32 = 450.0;
const RAT_HOLE: f32 = 150.0;
const BOTTOM_MARGIN: f32 = 100.0;

const PERFORATION_OFFSET: f32 = 180.0;
const PERFORATION_HEIGHT: f32 = 120.0;

/// Fluid stays inside the casing walls.
const FLUID_INSET: f32 = 4.0;

const PACKER_OFFSET: f32 = 80.0;
const PACKER_HEIGHT: f32 = 40.0;
const PACKER_WIDTH: f32 = 190.0;
const Y_TOOL_OFFSET: f32 = 180.0;
const Y_TOOL_HEIGHT: f32 = 120.0;
const Y_TOOL_WIDTH: f32 = 80.0;

const SURFACE_EQUIPMENT_HEIGHT: f32 = 165.0;
const SURFACE_EQUIPMENT_WIDTH: f32 = 204.0;
const VSD_HEIGHT: f32 = 160.0;
const VSD_WIDTH: f32 = 240.0;
const VSD_CENTER_X: f32 = 200.0;

/// The cable runs alongside the tubing, 4 units off its outer wall.
const CABLE_CENTER_X: f32 = WELL_AXIS_X + TUBING_WIDTH / 2.0 + 4.0;
const CABLE_BASE_WIDTH: f32 = 4.0;
const CABLE_WIDTH_PER_GAUGE_STEP: f32 = 0.8;
const CABLE_THINNEST_GAUGE: f32 = 7.0;

const CABLE_GUARD_COUNT: u16 = 5;
const CABLE_GUARD_FIRST_OFFSET: f32 = 50.0;
const CABLE_GUARD_SPACING: f32 = 80.0;
const CABLE_GUARD_WIDTH: f32 = 12.0;
const CABLE_GUARD_HEIGHT: f32 = 20.0;

/// Snaps a derived measure to the quarter-unit layout grid.
///
/// Grid values stay exact under f32 addition for any schematic size, so
/// stacked offsets never drift.
fn snap(value: f32) -> f32 {
    (value * 4.0).round() / 4.0
}

fn power_factor(motor_type: MotorType) -> f32 {
    match motor_type {
        MotorType::Induction => INDUCTION_POWER_FACTOR,
        MotorType::PermanentMagnet => PERMANENT_MAGNET_POWER_FACTOR,
    }
}

/// Motor body height: rated power times the motor type's factor, floored at
/// [`MOTOR_MIN_HEIGHT`].
///
/// The product is snapped to the quarter-unit grid first, so the result may
/// differ from `power_hp * factor` by up to 0.125 above the floor.
fn motor_height(motor_type: MotorType, power_hp: f32) -> f32 {
    snap(power_hp * power_factor(motor_type)).max(MOTOR_MIN_HEIGHT)
}

fn pump_height(stage_count: u32) -> f32 {
    snap(stage_count as f32 * STAGE_HEIGHT).max(PUMP_MIN_HEIGHT)
}

fn cable_width(gauge_index: u8) -> f32 {
    CABLE_BASE_WIDTH + (CABLE_THINNEST_GAUGE - f32::from(gauge_index)) * CABLE_WIDTH_PER_GAUGE_STEP
}

/// Maps a fluid level percentage onto the span between ground and well bottom.
///
/// 0 % is the ground line and 100 % the well bottom.
fn fluid_level_y(ground_y: f32, total_height: f32, percent: f32) -> f32 {
    let y = ground_y + (total_height - ground_y) * (percent / 100.0);
    y.clamp(ground_y, total_height)
}

/// One slot of the main stack, present or not.
#[derive(Debug, Clone, Copy)]
struct StackEntry {
    kind: SegmentKind,
    height: f32,
    width: f32,
    present: bool,
}

impl StackEntry {
    fn new(kind: SegmentKind, height: f32, width: f32) -> Self {
        Self {
            kind,
            height,
            width,
            present: true,
        }
    }

    fn present_if(mut self, present: bool) -> Self {
        self.present = present;
        self
    }
}

/// Lists every main-stack slot from top to bottom, including absent ones.
fn stack_candidates(config: &CompletionConfig) -> [StackEntry; 5] {
    [
        StackEntry::new(
            SegmentKind::Pump,
            pump_height(config.pump_stage_count()),
            ESP_WIDTH,
        ),
        StackEntry::new(SegmentKind::Intake, INTAKE_HEIGHT, ESP_WIDTH - 4.0),
        StackEntry::new(SegmentKind::Seal, SEAL_HEIGHT, ESP_WIDTH - 6.0),
        StackEntry::new(
            SegmentKind::Motor,
            motor_height(config.motor_type(), config.motor_power_hp()),
            ESP_WIDTH,
        ),
        StackEntry::new(SegmentKind::Sensor, SENSOR_HEIGHT, ESP_WIDTH - 20.0)
            .present_if(config.sensor_installed()),
    ]
}

/// Places the present slots contiguously, starting at `top_y`.
fn stack_segments(entries: &[StackEntry], top_y: f32) -> Vec<Segment> {
    entries
        .iter()
        .filter(|entry| entry.present)
        .scan(top_y, |cursor, entry| {
            let segment = Segment::new(entry.kind, *cursor, entry.height, entry.width, WELL_AXIS_X);
            *cursor += entry.height;
            Some(segment)
        })
        .collect()
}

/// Picks the accessory above the pump. The packer wins a conflict.
fn accessory_kind(packer: bool, y_tool: bool) -> Option<SegmentKind> {
    match (packer, y_tool) {
        (true, true) => {
            warn!("Packer and y-tool both requested, drawing the packer");
            Some(SegmentKind::Packer)
        }
        (true, false) => Some(SegmentKind::Packer),
        (false, true) => Some(SegmentKind::YTool),
        (false, false) => None,
    }
}

fn accessory_segment(kind: SegmentKind, pump_top_y: f32) -> Segment {
    match kind {
        SegmentKind::YTool => Segment::new(
            kind,
            pump_top_y - Y_TOOL_OFFSET,
            Y_TOOL_HEIGHT,
            Y_TOOL_WIDTH,
            WELL_AXIS_X,
        ),
        _ => Segment::new(
            SegmentKind::Packer,
            pump_top_y - PACKER_OFFSET,
            PACKER_HEIGHT,
            PACKER_WIDTH,
            WELL_AXIS_X,
        ),
    }
}

/// Cable guard clamps, kept only while strictly below the ground line.
fn cable_guards(pump_top_y: f32, ground_y: f32) -> impl Iterator<Item = Segment> {
    (0..CABLE_GUARD_COUNT)
        .map(move |i| pump_top_y - CABLE_GUARD_FIRST_OFFSET - f32::from(i) * CABLE_GUARD_SPACING)
        .filter(move |top_y| *top_y > ground_y)
        .map(|top_y| {
            Segment::new(
                SegmentKind::CableGuard,
                top_y,
                CABLE_GUARD_HEIGHT,
                CABLE_GUARD_WIDTH,
                CABLE_CENTER_X,
            )
        })
}

/// Computes the complete scene for a completion.
///
/// The input is clamped first, so any configuration is accepted. `zoom` is
/// not read: it scales the output at export time only.
///
/// # Examples
///
/// ```
/// use wellbore::layout::layout;
/// use wellbore_core::{completion::CompletionConfig, scene::SegmentKind};
///
/// let scene = layout(&CompletionConfig::default());
/// let pump = scene.segment(SegmentKind::Pump).unwrap();
/// assert_eq!(pump.top_y(), scene.pump_top_y());
/// ```
pub fn layout(config: &CompletionConfig) -> Scene {
    let config = config.clamped();
    info!(
        motor_type:? = config.motor_type(),
        pump_stage_count = config.pump_stage_count(),
        sensor_installed = config.sensor_installed();
        "Laying out completion"
    );

    let ground_y = if config.surface_visible() {
        SURFACE_BAND_HEIGHT
    } else {
        COLLAPSED_SURFACE_BAND_HEIGHT
    };
    let pump_top_y = ground_y + TUBING_RUN;

    let stack = stack_segments(&stack_candidates(&config), pump_top_y);
    let stack_bottom_y = stack.last().map_or(pump_top_y, Segment::bottom_y);
    let motor_top_y = stack
        .iter()
        .find(|segment| segment.kind() == SegmentKind::Motor)
        .map_or(stack_bottom_y, Segment::top_y);

    let total_height = stack_bottom_y + RAT_HOLE + BOTTOM_MARGIN;
    let fluid_y = fluid_level_y(ground_y, total_height, config.fluid_level_percent());
    debug!(
        ground_y,
        pump_top_y,
        stack_bottom_y,
        total_height,
        fluid_y;
        "Derived reference lines"
    );

    let well_depth = total_height - ground_y;
    let mut segments = vec![
        Segment::new(SegmentKind::Cement, ground_y, well_depth, CEMENT_WIDTH, WELL_AXIS_X),
        Segment::new(SegmentKind::Casing, ground_y, well_depth, CASING_WIDTH, WELL_AXIS_X),
        Segment::new(
            SegmentKind::FluidColumn,
            fluid_y,
            total_height - fluid_y,
            CASING_WIDTH - FLUID_INSET,
            WELL_AXIS_X,
        )
        .with_visible(fluid_y < total_height),
        Segment::new(
            SegmentKind::PerforationBand,
            total_height - PERFORATION_OFFSET,
            PERFORATION_HEIGHT,
            CEMENT_WIDTH,
            WELL_AXIS_X,
        ),
    ];

    if config.surface_visible() {
        segments.push(Segment::new(
            SegmentKind::SurfaceEquipment,
            ground_y - SURFACE_EQUIPMENT_HEIGHT,
            SURFACE_EQUIPMENT_HEIGHT,
            SURFACE_EQUIPMENT_WIDTH,
            WELL_AXIS_X,
        ));
        if config.vsd_present() {
            segments.push(Segment::new(
                SegmentKind::Vsd,
                ground_y - VSD_HEIGHT,
                VSD_HEIGHT,
                VSD_WIDTH,
                VSD_CENTER_X,
            ));
        }
    }

    segments.push(Segment::new(
        SegmentKind::Tubing,
        ground_y,
        TUBING_RUN,
        TUBING_WIDTH,
        WELL_AXIS_X,
    ));
    segments.push(Segment::new(
        SegmentKind::Cable,
        ground_y,
        motor_top_y - ground_y,
        cable_width(config.cable_gauge_index()),
        CABLE_CENTER_X,
    ));
    if config.cable_guards_installed() {
        segments.extend(cable_guards(pump_top_y, ground_y));
    }
    if let Some(kind) = accessory_kind(config.packer_installed(), config.y_tool_installed()) {
        segments.push(accessory_segment(kind, pump_top_y));
    }
    segments.extend(stack);

    let labels = labels::place_labels(&segments, &config, WELL_AXIS_X);
    debug!(
        segments_count = segments.len(),
        labels_count = labels.len();
        "Segments and labels placed"
    );

    let readouts = Readouts::new(
        config.motor_type(),
        config.pump_stage_count(),
        config.fluid_level_percent(),
        (config.surface_visible() && config.vsd_present()).then_some(config.vsd_frequency_hz()),
    );
    let frame = SceneFrame {
        total_width: TOTAL_WIDTH,
        total_height,
        well_axis_x: WELL_AXIS_X,
        ground_y,
        fluid_y,
        pump_top_y,
    };

    let scene = Scene::new(frame, segments, labels, readouts);
    trace!(scene:?; "Laid out scene");
    scene
}
