//! Fill helpers for painters.

/// Apply a fill color and its opacity to an SVG element.
///
/// The color is written opaque and its alpha goes to `fill-opacity`, so
/// renderers without CSS color level 4 support still honour transparency.
///
/// # Example
///
/// ```
/// use wellbore_core::color::Color;
/// use svg::node::element as svg_element;
///
/// let fluid = Color::new("#3498db").unwrap().with_alpha(0.4);
/// let rect = wellbore_core::apply_fill!(svg_element::Rectangle::new(), fluid);
/// assert!(rect.to_string().contains("fill-opacity=\"0.4\""));
/// ```
#[macro_export]
macro_rules! apply_fill {
    ($element:expr, $color:expr) => {{
        let color = $color;
        $element
            .set("fill", color.with_alpha(1.0).to_string())
            .set("fill-opacity", color.alpha())
    }};
}

#[cfg(test)]
mod tests {
    use svg::node::element as svg_element;

    use crate::color::Color;

    #[test]
    fn test_apply_fill_splits_alpha() {
        let color = Color::new("red").unwrap().with_alpha(0.5);
        let rect = crate::apply_fill!(svg_element::Rectangle::new(), color).to_string();

        assert!(rect.contains("fill-opacity=\"0.5\""));
        assert!(rect.contains("fill=\""));
    }

    #[test]
    fn test_apply_fill_accepts_references() {
        let color = Color::new("blue").unwrap();
        let rect = crate::apply_fill!(svg_element::Circle::new(), &color).to_string();
        assert!(rect.contains("fill-opacity=\"1\""));
    }
}
