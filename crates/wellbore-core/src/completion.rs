//! Completion parameters and the edit transition that keeps them consistent.
//!
//! A [`CompletionConfig`] is the validated set of engineering parameters the
//! layout engine turns into a scene. It can only be produced in a consistent
//! state:
//!
//! - [`CompletionConfig::default`] yields the standard starting completion.
//! - Deserialization (e.g. from TOML) clamps every numeric field to its
//!   domain and resolves a packer/y-tool conflict before the value exists.
//! - [`CompletionConfig::apply_edit`] is the single state transition for
//!   user edits; it clamps the edited value and enforces the packer/y-tool
//!   mutual exclusion atomically.
//!
//! # Example
//!
//! ```
//! use wellbore_core::completion::{CompletionConfig, FieldEdit};
//!
//! let config = CompletionConfig::default()
//!     .apply_edit(FieldEdit::YToolInstalled(true))
//!     .apply_edit(FieldEdit::PackerInstalled(true));
//!
//! // The last toggle wins
//! assert!(config.packer_installed());
//! assert!(!config.y_tool_installed());
//! ```

use std::{fmt, ops::RangeInclusive, str::FromStr};

use log::warn;
use serde::Deserialize;
use thiserror::Error;

/// Display scale domain.
pub const ZOOM_RANGE: RangeInclusive<f32> = 0.6..=1.4;
/// Variable speed drive frequency domain, in hertz.
pub const VSD_FREQUENCY_RANGE: RangeInclusive<f32> = 30.0..=90.0;
/// Fluid level domain, as a percentage of depth between ground and well bottom.
pub const FLUID_LEVEL_RANGE: RangeInclusive<f32> = 0.0..=100.0;
/// Power cable gauge index domain. Smaller means thicker.
pub const CABLE_GAUGE_RANGE: RangeInclusive<u8> = 1..=6;
/// Motor power domain, in horsepower.
pub const MOTOR_POWER_RANGE: RangeInclusive<f32> = 50.0..=1000.0;
/// Pump stage count domain.
pub const PUMP_STAGE_RANGE: RangeInclusive<u32> = 20..=400;

/// Motor technology of the downhole unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MotorType {
    /// Asynchronous induction motor (AMM)
    #[default]
    #[serde(alias = "amm")]
    Induction,
    /// Permanent magnet motor (PMM), shorter for the same power
    #[serde(alias = "pmm")]
    PermanentMagnet,
}

impl MotorType {
    /// Returns the short trade abbreviation shown on the motor body.
    pub fn abbreviation(self) -> &'static str {
        match self {
            Self::Induction => "AMM",
            Self::PermanentMagnet => "PMM",
        }
    }

    /// Returns a human readable description of the motor technology.
    pub fn description(self) -> &'static str {
        match self {
            Self::Induction => "Asynchronous induction",
            Self::PermanentMagnet => "Permanent magnet",
        }
    }
}

impl fmt::Display for MotorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

impl FromStr for MotorType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "induction" | "amm" => Ok(Self::Induction),
            "permanent-magnet" | "permanent_magnet" | "pmm" => Ok(Self::PermanentMagnet),
            _ => Err(format!(
                "invalid motor type `{s}`, valid values: induction, amm, permanent-magnet, pmm"
            )),
        }
    }
}

/// The validated completion parameters.
///
/// Every numeric field lies within its domain and at most one of
/// `packer_installed` and `y_tool_installed` is set.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(from = "CompletionDocument")]
pub struct CompletionConfig {
    zoom: f32,
    surface_visible: bool,
    vsd_present: bool,
    vsd_frequency_hz: f32,
    fluid_level_percent: f32,
    cable_gauge_index: u8,
    packer_installed: bool,
    y_tool_installed: bool,
    cable_guards_installed: bool,
    motor_type: MotorType,
    motor_power_hp: f32,
    pump_stage_count: u32,
    sensor_installed: bool,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            surface_visible: true,
            vsd_present: true,
            vsd_frequency_hz: 50.0,
            fluid_level_percent: 30.0,
            cable_gauge_index: 4,
            packer_installed: false,
            y_tool_installed: false,
            cable_guards_installed: true,
            motor_type: MotorType::Induction,
            motor_power_hp: 375.0,
            pump_stage_count: 120,
            sensor_installed: true,
        }
    }
}

impl CompletionConfig {
    /// Display scale applied by painters; never affects layout.
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn surface_visible(&self) -> bool {
        self.surface_visible
    }

    pub fn vsd_present(&self) -> bool {
        self.vsd_present
    }

    pub fn vsd_frequency_hz(&self) -> f32 {
        self.vsd_frequency_hz
    }

    /// Fluid surface depth between the ground line (0) and the well bottom (100).
    pub fn fluid_level_percent(&self) -> f32 {
        self.fluid_level_percent
    }

    pub fn cable_gauge_index(&self) -> u8 {
        self.cable_gauge_index
    }

    pub fn packer_installed(&self) -> bool {
        self.packer_installed
    }

    pub fn y_tool_installed(&self) -> bool {
        self.y_tool_installed
    }

    pub fn cable_guards_installed(&self) -> bool {
        self.cable_guards_installed
    }

    pub fn motor_type(&self) -> MotorType {
        self.motor_type
    }

    pub fn motor_power_hp(&self) -> f32 {
        self.motor_power_hp
    }

    pub fn pump_stage_count(&self) -> u32 {
        self.pump_stage_count
    }

    pub fn sensor_installed(&self) -> bool {
        self.sensor_installed
    }

    /// Returns a copy with every numeric field clamped to its domain.
    ///
    /// NaN clamps to the lower bound of its domain. Values already in
    /// domain are returned unchanged, so this is idempotent.
    pub fn clamped(&self) -> Self {
        Self {
            zoom: clamp_f32(self.zoom, &ZOOM_RANGE),
            vsd_frequency_hz: clamp_f32(self.vsd_frequency_hz, &VSD_FREQUENCY_RANGE),
            fluid_level_percent: clamp_f32(self.fluid_level_percent, &FLUID_LEVEL_RANGE),
            cable_gauge_index: clamp_count(self.cable_gauge_index.into(), &CABLE_GAUGE_RANGE),
            motor_power_hp: clamp_f32(self.motor_power_hp, &MOTOR_POWER_RANGE),
            pump_stage_count: clamp_count(self.pump_stage_count.into(), &PUMP_STAGE_RANGE),
            ..*self
        }
    }

    /// Applies a single field edit and returns the resulting configuration.
    ///
    /// The edited value is clamped to its domain. Turning the packer on turns
    /// the y-tool off and vice versa, so the last toggle written wins.
    pub fn apply_edit(&self, edit: FieldEdit) -> Self {
        let mut next = *self;
        match edit {
            FieldEdit::Zoom(value) => next.zoom = value,
            FieldEdit::SurfaceVisible(value) => next.surface_visible = value,
            FieldEdit::VsdPresent(value) => next.vsd_present = value,
            FieldEdit::VsdFrequencyHz(value) => next.vsd_frequency_hz = value,
            FieldEdit::FluidLevelPercent(value) => next.fluid_level_percent = value,
            FieldEdit::CableGaugeIndex(value) => {
                next.cable_gauge_index = clamp_count(value, &CABLE_GAUGE_RANGE)
            }
            FieldEdit::PackerInstalled(value) => {
                next.packer_installed = value;
                if value {
                    next.y_tool_installed = false;
                }
            }
            FieldEdit::YToolInstalled(value) => {
                next.y_tool_installed = value;
                if value {
                    next.packer_installed = false;
                }
            }
            FieldEdit::CableGuardsInstalled(value) => next.cable_guards_installed = value,
            FieldEdit::MotorType(value) => next.motor_type = value,
            FieldEdit::MotorPowerHp(value) => next.motor_power_hp = value,
            FieldEdit::PumpStageCount(value) => {
                next.pump_stage_count = clamp_count(value, &PUMP_STAGE_RANGE)
            }
            FieldEdit::SensorInstalled(value) => next.sensor_installed = value,
        }
        next.clamped()
    }

    /// Applies edits in order, as if a user made them one after another.
    pub fn apply_edits(&self, edits: impl IntoIterator<Item = FieldEdit>) -> Self {
        edits
            .into_iter()
            .fold(*self, |config, edit| config.apply_edit(edit))
    }
}

fn clamp_f32(value: f32, range: &RangeInclusive<f32>) -> f32 {
    if value.is_nan() {
        *range.start()
    } else {
        value.clamp(*range.start(), *range.end())
    }
}

/// Saturates a wide integer into a narrower counting domain.
fn clamp_count<T>(value: i64, range: &RangeInclusive<T>) -> T
where
    T: Copy + Into<i64> + TryFrom<i64>,
{
    let clamped = value.clamp((*range.start()).into(), (*range.end()).into());
    T::try_from(clamped).unwrap_or(*range.start())
}

/// A single field assignment on a [`CompletionConfig`].
///
/// Parses from `field=value` text, e.g. `packer_installed=true`,
/// `motor_type=pmm` or `pump_stage_count=240`. Field names accept `-` in
/// place of `_`, and the short aliases `packer`, `y_tool`, `sensor`,
/// `surface`, `vsd`, `cable_guards`, `stages`, `motor_hp` and `fluid_level`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldEdit {
    Zoom(f32),
    SurfaceVisible(bool),
    VsdPresent(bool),
    VsdFrequencyHz(f32),
    FluidLevelPercent(f32),
    /// Requested gauge index; saturated into [`CABLE_GAUGE_RANGE`] when applied.
    CableGaugeIndex(i64),
    PackerInstalled(bool),
    YToolInstalled(bool),
    CableGuardsInstalled(bool),
    MotorType(MotorType),
    MotorPowerHp(f32),
    /// Requested stage count; saturated into [`PUMP_STAGE_RANGE`] when applied.
    PumpStageCount(i64),
    SensorInstalled(bool),
}

/// Errors produced while parsing a [`FieldEdit`] from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("edit `{0}` is not of the form field=value")]
    MissingSeparator(String),

    #[error("unknown completion field `{0}`")]
    UnknownField(String),

    #[error("invalid value `{value}` for `{field}`: {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

impl FromStr for FieldEdit {
    type Err = EditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, value) = s
            .split_once('=')
            .ok_or_else(|| EditError::MissingSeparator(s.to_string()))?;
        let field = field.trim();
        let value = value.trim();

        let invalid = |reason: String| EditError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
            reason,
        };
        let number = |value: &str| value.parse::<f32>().map_err(|err| invalid(err.to_string()));
        let count = |value: &str| value.parse::<i64>().map_err(|err| invalid(err.to_string()));
        let flag = |value: &str| parse_flag(value).map_err(&invalid);

        let edit = match field.replace('-', "_").as_str() {
            "zoom" => Self::Zoom(number(value)?),
            "surface_visible" | "surface" => Self::SurfaceVisible(flag(value)?),
            "vsd_present" | "vsd" => Self::VsdPresent(flag(value)?),
            "vsd_frequency_hz" | "vsd_frequency" => Self::VsdFrequencyHz(number(value)?),
            "fluid_level_percent" | "fluid_level" => Self::FluidLevelPercent(number(value)?),
            "cable_gauge_index" | "cable_gauge" => Self::CableGaugeIndex(count(value)?),
            "packer_installed" | "packer" => Self::PackerInstalled(flag(value)?),
            "y_tool_installed" | "y_tool" => Self::YToolInstalled(flag(value)?),
            "cable_guards_installed" | "cable_guards" => Self::CableGuardsInstalled(flag(value)?),
            "motor_type" => Self::MotorType(value.parse().map_err(&invalid)?),
            "motor_power_hp" | "motor_hp" => Self::MotorPowerHp(number(value)?),
            "pump_stage_count" | "stages" => Self::PumpStageCount(count(value)?),
            "sensor_installed" | "sensor" => Self::SensorInstalled(flag(value)?),
            _ => return Err(EditError::UnknownField(field.to_string())),
        };
        Ok(edit)
    }
}

fn parse_flag(value: &str) -> Result<bool, String> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Ok(true),
        "false" | "off" | "no" | "0" => Ok(false),
        _ => Err("expected true/false, on/off or yes/no".to_string()),
    }
}

/// Wire form of a completion description.
///
/// Missing keys take the [`CompletionConfig::default`] values. Converting
/// into a [`CompletionConfig`] clamps out-of-domain values and resolves a
/// packer/y-tool conflict in favour of the packer.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct CompletionDocument {
    zoom: f32,
    surface_visible: bool,
    vsd_present: bool,
    vsd_frequency_hz: f32,
    fluid_level_percent: f32,
    cable_gauge_index: i64,
    packer_installed: bool,
    y_tool_installed: bool,
    cable_guards_installed: bool,
    motor_type: MotorType,
    motor_power_hp: f32,
    pump_stage_count: i64,
    sensor_installed: bool,
}

impl Default for CompletionDocument {
    fn default() -> Self {
        let defaults = CompletionConfig::default();
        Self {
            zoom: defaults.zoom,
            surface_visible: defaults.surface_visible,
            vsd_present: defaults.vsd_present,
            vsd_frequency_hz: defaults.vsd_frequency_hz,
            fluid_level_percent: defaults.fluid_level_percent,
            cable_gauge_index: defaults.cable_gauge_index.into(),
            packer_installed: defaults.packer_installed,
            y_tool_installed: defaults.y_tool_installed,
            cable_guards_installed: defaults.cable_guards_installed,
            motor_type: defaults.motor_type,
            motor_power_hp: defaults.motor_power_hp,
            pump_stage_count: defaults.pump_stage_count.into(),
            sensor_installed: defaults.sensor_installed,
        }
    }
}

impl From<CompletionDocument> for CompletionConfig {
    fn from(doc: CompletionDocument) -> Self {
        let cable_gauge_index = clamp_count(doc.cable_gauge_index, &CABLE_GAUGE_RANGE);
        let pump_stage_count = clamp_count(doc.pump_stage_count, &PUMP_STAGE_RANGE);
        let counts_clamped = i64::from(cable_gauge_index) != doc.cable_gauge_index
            || i64::from(pump_stage_count) != doc.pump_stage_count;

        let raw = Self {
            zoom: doc.zoom,
            surface_visible: doc.surface_visible,
            vsd_present: doc.vsd_present,
            vsd_frequency_hz: doc.vsd_frequency_hz,
            fluid_level_percent: doc.fluid_level_percent,
            cable_gauge_index,
            packer_installed: doc.packer_installed,
            y_tool_installed: doc.y_tool_installed && !doc.packer_installed,
            cable_guards_installed: doc.cable_guards_installed,
            motor_type: doc.motor_type,
            motor_power_hp: doc.motor_power_hp,
            pump_stage_count,
            sensor_installed: doc.sensor_installed,
        };

        if doc.packer_installed && doc.y_tool_installed {
            warn!("Packer and y-tool are mutually exclusive, keeping the packer");
        }

        let clamped = raw.clamped();
        if clamped != raw {
            warn!(requested:? = raw, clamped:? = clamped; "Completion values clamped to their domains");
        }
        if counts_clamped {
            warn!(
                cable_gauge_index = doc.cable_gauge_index,
                pump_stage_count = doc.pump_stage_count;
                "Completion counts clamped to their domains"
            );
        }
        clamped
    }
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    // ===================
    // Strategies
    // ===================

    fn edit_strategy() -> impl Strategy<Value = FieldEdit> {
        prop_oneof![
            any::<bool>().prop_map(FieldEdit::PackerInstalled),
            any::<bool>().prop_map(FieldEdit::YToolInstalled),
            any::<bool>().prop_map(FieldEdit::SensorInstalled),
            any::<bool>().prop_map(FieldEdit::SurfaceVisible),
            (-50.0f32..200.0).prop_map(FieldEdit::FluidLevelPercent),
            (-1000i64..5000).prop_map(FieldEdit::PumpStageCount),
            (0.0f32..2000.0).prop_map(FieldEdit::MotorPowerHp),
            (-300i64..300).prop_map(FieldEdit::CableGaugeIndex),
            (0.0f32..3.0).prop_map(FieldEdit::Zoom),
        ]
    }

    // ===================
    // Property Checks
    // ===================

    /// No edit sequence can leave both exclusive accessories installed.
    fn check_exclusive_toggles(edits: Vec<FieldEdit>) -> Result<(), TestCaseError> {
        let mut config = CompletionConfig::default();
        for edit in edits {
            config = config.apply_edit(edit);
            prop_assert!(!(config.packer_installed() && config.y_tool_installed()));
        }
        Ok(())
    }

    /// Every edited configuration is already within its domains.
    fn check_edits_stay_in_domain(edits: Vec<FieldEdit>) -> Result<(), TestCaseError> {
        let config = CompletionConfig::default().apply_edits(edits);
        prop_assert_eq!(config.clamped(), config);
        prop_assert!(ZOOM_RANGE.contains(&config.zoom()));
        prop_assert!(FLUID_LEVEL_RANGE.contains(&config.fluid_level_percent()));
        prop_assert!(CABLE_GAUGE_RANGE.contains(&config.cable_gauge_index()));
        prop_assert!(MOTOR_POWER_RANGE.contains(&config.motor_power_hp()));
        prop_assert!(PUMP_STAGE_RANGE.contains(&config.pump_stage_count()));
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn exclusive_toggles(edits in prop::collection::vec(edit_strategy(), 0..40)) {
            check_exclusive_toggles(edits)?;
        }

        #[test]
        fn edits_stay_in_domain(edits in prop::collection::vec(edit_strategy(), 0..40)) {
            check_edits_stay_in_domain(edits)?;
        }
    }
}
