//! Label placement for labeled segments.
//!
//! Every labeled segment gets one [`LabelAnchor`] whose geometry follows from
//! the segment's final position:
//!
//! ```text
//!   well axis                       label column
//!      │                                 │
//!      ●      ○- - - - - - - - - - - - - ┌──────────────────────┐
//!   (anchor)  (connector start)          │ title                │
//!      │                                 │ subtitle             │
//!      │                                 └──────────────────────┘
//! ```
//!
//! The box is vertically centered on the segment midpoint. Labels are placed
//! after all segments are final and are never moved independently.

use log::debug;

use wellbore_core::{
    completion::CompletionConfig,
    geometry::{Point, Size},
    scene::{LabelAnchor, Segment, SegmentKind},
};

/// Left edge of the label column.
pub const LABEL_COLUMN_X: f32 = 600.0;
/// Horizontal gap between the well axis and the connector start.
pub const LEADER_CLEARANCE: f32 = 60.0;
pub const LABEL_BOX_WIDTH: f32 = 240.0;
pub const LABEL_BOX_HEIGHT: f32 = 32.0;

/// Returns true for segment kinds that carry a label.
pub fn is_labeled(kind: SegmentKind) -> bool {
    matches!(
        kind,
        SegmentKind::Pump
            | SegmentKind::Intake
            | SegmentKind::Seal
            | SegmentKind::Motor
            | SegmentKind::Sensor
            | SegmentKind::Packer
            | SegmentKind::YTool
    )
}

/// Computes the label anchor for one segment.
///
/// The anchor sits on the well axis at the segment midpoint. The connector
/// runs horizontally from `axis_x + LEADER_CLEARANCE` to the label column,
/// and the box is centered on the same line. A segment shorter than the box
/// is flagged as crowded.
///
/// # Examples
///
/// ```
/// use wellbore::layout::labels::place_label;
/// use wellbore_core::scene::{Segment, SegmentKind};
///
/// let pump = Segment::new(SegmentKind::Pump, 800.0, 180.0, 50.0, 350.0);
/// let label = place_label(&pump, 350.0, "Pump 120 stages", None);
///
/// assert_eq!(label.anchor().y(), 890.0);
/// assert_eq!(label.box_origin().y(), 874.0);
/// assert!(!label.crowded());
/// ```
pub fn place_label(
    segment: &Segment,
    axis_x: f32,
    title: impl Into<String>,
    subtitle: Option<String>,
) -> LabelAnchor {
    let mid_y = segment.mid_y();
    let crowded = segment.height() < LABEL_BOX_HEIGHT;
    if crowded {
        debug!(
            kind = segment.kind().name(),
            height = segment.height();
            "Segment is shorter than its label box"
        );
    }

    LabelAnchor::new(
        segment.kind(),
        Point::new(axis_x, mid_y),
        Point::new(axis_x + LEADER_CLEARANCE, mid_y),
        Point::new(LABEL_COLUMN_X, mid_y),
        Point::new(LABEL_COLUMN_X, mid_y - LABEL_BOX_HEIGHT / 2.0),
        Size::new(LABEL_BOX_WIDTH, LABEL_BOX_HEIGHT),
        title,
        subtitle,
        crowded,
    )
}

/// Returns the title and subtitle for a labeled kind, or `None` for kinds
/// that carry no label.
pub fn label_text(kind: SegmentKind, config: &CompletionConfig) -> Option<(String, Option<String>)> {
    let text = match kind {
        SegmentKind::Pump => (
            format!("Pump {} stages", config.pump_stage_count()),
            Some("Multistage centrifugal".to_string()),
        ),
        SegmentKind::Intake => (
            "Intake / Gas separator".to_string(),
            Some("Fluid entry".to_string()),
        ),
        SegmentKind::Seal => (
            "Seal section".to_string(),
            Some("Motor protector".to_string()),
        ),
        SegmentKind::Motor => (
            format!(
                "Motor {} {} HP",
                config.motor_type().abbreviation(),
                config.motor_power_hp()
            ),
            Some(config.motor_type().description().to_string()),
        ),
        SegmentKind::Sensor => (
            "Downhole sensor".to_string(),
            Some("Pressure / temperature / vibration".to_string()),
        ),
        SegmentKind::Packer => ("Production packer".to_string(), None),
        SegmentKind::YTool => (
            "Y-tool system".to_string(),
            Some("Bypass configuration".to_string()),
        ),
        _ => return None,
    };
    Some(text)
}

/// Places labels for every labeled segment, in segment order.
pub(crate) fn place_labels(
    segments: &[Segment],
    config: &CompletionConfig,
    axis_x: f32,
) -> Vec<LabelAnchor> {
    segments
        .iter()
        .filter(|segment| is_labeled(segment.kind()))
        .filter_map(|segment| {
            let (title, subtitle) = label_text(segment.kind(), config)?;
            Some(place_label(segment, axis_x, title, subtitle))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use wellbore_core::completion::{FieldEdit, MotorType};

    use super::*;
    use crate::layout::layout;

    #[test]
    fn test_place_label_geometry() {
        let seal = Segment::new(SegmentKind::Seal, 1030.0, 70.0, 44.0, 350.0);
        let label = place_label(&seal, 350.0, "Seal section", None);

        assert_eq!(label.kind(), SegmentKind::Seal);
        assert_eq!(label.anchor(), Point::new(350.0, 1065.0));
        assert_eq!(label.connector_start(), Point::new(410.0, 1065.0));
        assert_eq!(label.connector_end(), Point::new(600.0, 1065.0));
        assert_eq!(label.box_origin(), Point::new(600.0, 1049.0));
        assert_eq!(label.box_size(), Size::new(240.0, 32.0));
        assert_eq!(label.subtitle(), None);
    }

    #[test]
    fn test_short_segment_is_crowded() {
        let clamp = Segment::new(SegmentKind::CableGuard, 750.0, 20.0, 12.0, 367.0);
        let label = place_label(&clamp, 350.0, "Clamp", None);
        assert!(label.crowded());
    }

    #[test]
    fn test_default_scene_labels() {
        let scene = layout(&CompletionConfig::default());
        let kinds: Vec<SegmentKind> = scene.labels().iter().map(LabelAnchor::kind).collect();
        assert_eq!(
            kinds,
            vec![
                SegmentKind::Pump,
                SegmentKind::Intake,
                SegmentKind::Seal,
                SegmentKind::Motor,
                SegmentKind::Sensor,
            ]
        );
        assert!(scene.labels().iter().all(|label| !label.crowded()));

        let pump = scene.label(SegmentKind::Pump).unwrap();
        assert_eq!(pump.title(), "Pump 120 stages");
        assert_eq!(pump.subtitle(), Some("Multistage centrifugal"));

        let motor = scene.label(SegmentKind::Motor).unwrap();
        assert_eq!(motor.title(), "Motor AMM 375 HP");
        assert_eq!(motor.subtitle(), Some("Asynchronous induction"));
    }

    #[test]
    fn test_labels_follow_segment_midpoints() {
        let scene = layout(&CompletionConfig::default());
        for label in scene.labels() {
            let segment = scene.segment(label.kind()).unwrap();
            assert_eq!(label.anchor().y(), segment.mid_y());
            assert_eq!(label.anchor().x(), scene.well_axis_x());
        }
    }

    #[test]
    fn test_permanent_magnet_motor_label() {
        let config = CompletionConfig::default().apply_edits([
            FieldEdit::MotorType(MotorType::PermanentMagnet),
            FieldEdit::MotorPowerHp(500.0),
        ]);
        let scene = layout(&config);
        let motor = scene.label(SegmentKind::Motor).unwrap();
        assert_eq!(motor.title(), "Motor PMM 500 HP");
        assert_eq!(motor.subtitle(), Some("Permanent magnet"));
    }

    #[test]
    fn test_unlabeled_kinds_have_no_text() {
        let config = CompletionConfig::default();
        assert!(label_text(SegmentKind::Casing, &config).is_none());
        assert!(label_text(SegmentKind::CableGuard, &config).is_none());
        assert!(label_text(SegmentKind::Packer, &config).is_some());
    }
}
