//! Visual definitions shared by schematic painters.

mod fill;
mod stroke;

pub use stroke::{StrokeCap, StrokeDefinition, StrokeStyle};
