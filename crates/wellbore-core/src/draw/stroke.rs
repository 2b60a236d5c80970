//! Stroke and line-style definitions.
//!
//! # Overview
//!
//! Exported types:
//! - [`StrokeDefinition`]: Color, width, dash style and cap of a stroke
//! - [`StrokeStyle`]: Enum defining line patterns (solid, dashed, dotted)
//! - [`StrokeCap`]: Enum defining how line endpoints are rendered
//! - [`apply_stroke!`](crate::apply_stroke!): Macro for applying stroke attributes to SVG elements
//!
//! # SVG Attribute Mapping
//!
//! | Rust Property | SVG Attribute | Example Values |
//! |--------------|---------------|----------------|
//! | `color` | `stroke` (opaque), `stroke-opacity` | `"#2c3e50"`, `0.6` |
//! | `width` | `stroke-width` | `2.0` |
//! | `style` | `stroke-dasharray` | `"4,2"`, `"2,2"` |
//! | `cap` | `stroke-linecap` | `"butt"`, `"round"` |
//!
//! # Example
//!
//! ```
//! use wellbore_core::draw::StrokeDefinition;
//! use wellbore_core::color::Color;
//! use svg::node::element as svg_element;
//!
//! let casing_wall = StrokeDefinition::solid(Color::new("#2c3e50").unwrap(), 6.0);
//! let line = svg_element::Line::new()
//!     .set("x1", 250)
//!     .set("y1", 350)
//!     .set("x2", 250)
//!     .set("y2", 1200);
//!
//! let line = wellbore_core::apply_stroke!(line, &casing_wall);
//! ```

use crate::color::Color;

/// Defines the visual style of a stroke, including dash patterns.
///
/// # SVG Mapping
///
/// - `Solid`: No dasharray attribute
/// - `Dashed`: "4,2" (fluid surface line)
/// - `Dotted`: "2,2" (label leaders)
#[derive(Debug, Default, Clone, PartialEq)]
pub enum StrokeStyle {
    /// Solid continuous line (default)
    #[default]
    Solid,
    /// Dashed line (4px dash, 2px gap)
    Dashed,
    /// Dotted line (2px dot, 2px gap)
    Dotted,
}

impl StrokeStyle {
    /// Returns the SVG dasharray value for this style, or None for solid lines
    pub fn to_svg_value(&self) -> Option<String> {
        match self {
            Self::Solid => None,
            Self::Dashed => Some("4,2".to_string()),
            Self::Dotted => Some("2,2".to_string()),
        }
    }
}

/// Defines how line endpoints are rendered.
///
/// Maps directly to SVG `stroke-linecap` attribute values.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StrokeCap {
    /// Flat cap at the exact endpoint (SVG default)
    #[default]
    Butt,
    /// Rounded cap extending beyond the endpoint by half the stroke width
    Round,
}

impl StrokeCap {
    /// Returns the SVG stroke-linecap value
    pub fn to_svg_value(&self) -> &'static str {
        match self {
            Self::Butt => "butt",
            Self::Round => "round",
        }
    }
}

/// A stroke definition for rendering lines and borders.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
    style: StrokeStyle,
    cap: StrokeCap,
}

impl StrokeDefinition {
    /// Creates a new solid, butt-capped stroke with the given color and width.
    pub fn new(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            style: StrokeStyle::default(),
            cap: StrokeCap::default(),
        }
    }

    /// Creates a solid stroke (convenience constructor).
    pub fn solid(color: Color, width: f32) -> Self {
        Self::new(color, width)
    }

    /// Creates a dashed stroke (convenience constructor).
    pub fn dashed(color: Color, width: f32) -> Self {
        Self::new(color, width).with_style(StrokeStyle::Dashed)
    }

    /// Creates a dotted stroke (convenience constructor).
    pub fn dotted(color: Color, width: f32) -> Self {
        Self::new(color, width).with_style(StrokeStyle::Dotted)
    }

    /// Returns the stroke color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the stroke width.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Returns the stroke style.
    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }

    /// Returns the stroke cap style.
    pub fn cap(&self) -> StrokeCap {
        self.cap
    }

    /// Returns the stroke with the given dash style.
    pub fn with_style(mut self, style: StrokeStyle) -> Self {
        self.style = style;
        self
    }

    /// Returns the stroke with the given cap style.
    pub fn with_cap(mut self, cap: StrokeCap) -> Self {
        self.cap = cap;
        self
    }
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self::new(Color::default(), 1.0)
    }
}

/// Apply all stroke attributes to an SVG element.
///
/// This macro applies color, opacity, width, line cap and dash pattern
/// (if not solid) to any SVG element. The color is written opaque and its
/// alpha goes to `stroke-opacity` alone.
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        let mut elem = $element
            .set("stroke", $stroke.color().with_alpha(1.0).to_string())
            .set("stroke-opacity", $stroke.color().alpha())
            .set("stroke-width", $stroke.width())
            .set("stroke-linecap", $stroke.cap().to_svg_value());

        if let Some(dasharray) = $stroke.style().to_svg_value() {
            elem = elem.set("stroke-dasharray", dasharray);
        }

        elem
    }};
}

#[cfg(test)]
mod tests {
    use svg::node::element as svg_element;

    use super::*;

    #[test]
    fn test_stroke_default() {
        let stroke = StrokeDefinition::default();
        assert_eq!(stroke.width(), 1.0);
        assert_eq!(stroke.color().to_string(), "black");
        assert_eq!(*stroke.style(), StrokeStyle::Solid);
        assert_eq!(stroke.cap(), StrokeCap::Butt);
    }

    #[test]
    fn test_stroke_constructors() {
        let color = Color::new("red").unwrap();

        let solid = StrokeDefinition::solid(color, 2.0);
        assert_eq!(solid.width(), 2.0);
        assert_eq!(*solid.style(), StrokeStyle::Solid);

        let dashed = StrokeDefinition::dashed(color, 1.5);
        assert_eq!(*dashed.style(), StrokeStyle::Dashed);

        let dotted = StrokeDefinition::dotted(color, 1.0);
        assert_eq!(*dotted.style(), StrokeStyle::Dotted);
    }

    #[test]
    fn test_stroke_style_svg_values() {
        assert_eq!(StrokeStyle::Solid.to_svg_value(), None);
        assert_eq!(StrokeStyle::Dashed.to_svg_value().as_deref(), Some("4,2"));
        assert_eq!(StrokeStyle::Dotted.to_svg_value().as_deref(), Some("2,2"));
    }

    #[test]
    fn test_apply_stroke_sets_dasharray_only_when_patterned() {
        let color = Color::new("#c0392b").unwrap();

        let solid = StrokeDefinition::solid(color, 4.0).with_cap(StrokeCap::Round);
        let line = crate::apply_stroke!(svg_element::Line::new(), &solid).to_string();
        assert!(line.contains("stroke-linecap=\"round\""));
        assert!(!line.contains("stroke-dasharray"));

        let dashed = StrokeDefinition::dashed(color, 2.0);
        let line = crate::apply_stroke!(svg_element::Line::new(), &dashed).to_string();
        assert!(line.contains("stroke-dasharray=\"4,2\""));
    }

    #[test]
    fn test_apply_stroke_applies_alpha_once() {
        let translucent = Color::new("red").unwrap().with_alpha(0.6);
        let opaque = translucent.with_alpha(1.0);
        let leader = StrokeDefinition::dotted(translucent, 1.0);

        let line = crate::apply_stroke!(svg_element::Line::new(), &leader).to_string();
        assert!(line.contains("stroke-opacity=\"0.6\""), "{line}");
        assert!(line.contains(&format!("stroke=\"{opaque}\"")), "{line}");
        assert!(!line.contains(&format!("stroke=\"{translucent}\"")), "{line}");
    }
}
