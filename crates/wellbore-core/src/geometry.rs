//! Geometric primitives for schematic layout and positioning.
//!
//! This module provides the geometric types used throughout Wellbore for
//! describing where segments, label boxes and connectors sit in the schematic.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in schematic space
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - A rectangular bounding box defined by minimum and maximum coordinates
//!
//! # Coordinate System
//!
//! Wellbore uses a coordinate system consistent with SVG:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │   sky / surface band
//!     │ ─────────────────── ground line
//!     ▼   borehole
//!    +Y (depth)
//! ```
//!
//! - **Origin**: Top-left corner at `(0, 0)`
//! - **X-axis**: Increases rightward
//! - **Y-axis**: Increases downward, so larger Y means deeper in the well

/// A 2D point representing a position in schematic coordinate space.
///
/// # Examples
///
/// ```
/// # use wellbore_core::geometry::Point;
/// let anchor = Point::new(350.0, 890.0);
/// assert_eq!(anchor.x(), 350.0);
/// assert_eq!(anchor.y(), 890.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Multiplies both dimension by the given factor
    pub fn scale(self, factor: f32) -> Self {
        Self {
            width: self.width * factor,
            height: self.height * factor,
        }
    }
}

/// Represents a rectangular bounding box with minimum and maximum coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates a new bounds from a top-left point and a size
    pub fn new_from_top_left(top_left: Point, size: Size) -> Self {
        Self {
            min_x: top_left.x,
            min_y: top_left.y,
            max_x: top_left.x + size.width,
            max_y: top_left.y + size.height,
        }
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f32 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f32 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Returns true if the vertical extents of both bounds share an interior.
    ///
    /// Extents that merely touch (one ends exactly where the other starts)
    /// do not overlap, which is how contiguous stack segments meet.
    ///
    /// # Examples
    ///
    /// ```
    /// # use wellbore_core::geometry::{Bounds, Point, Size};
    /// let pump = Bounds::new_from_top_left(Point::new(325.0, 800.0), Size::new(50.0, 180.0));
    /// let intake = Bounds::new_from_top_left(Point::new(327.0, 980.0), Size::new(46.0, 50.0));
    /// assert!(!pump.overlaps_vertically(&intake));
    /// ```
    pub fn overlaps_vertically(&self, other: &Self) -> bool {
        self.min_y < other.max_y && other.min_y < self.max_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_new() {
        let point = Point::new(3.5, 4.2);
        assert_eq!(point.x(), 3.5);
        assert_eq!(point.y(), 4.2);
    }

    #[test]
    fn test_size_scale() {
        let size = Size::new(950.0, 1200.0);

        let zoomed_in = size.scale(1.4);
        assert!((zoomed_in.width() - 1330.0).abs() < 0.01);
        assert!((zoomed_in.height() - 1680.0).abs() < 0.01);

        let identity = size.scale(1.0);
        assert_eq!(identity, size);
    }

    #[test]
    fn test_bounds_new_from_top_left() {
        let top_left = Point::new(10.0, 20.0);
        let size = Size::new(30.0, 40.0);
        let bounds = Bounds::new_from_top_left(top_left, size);

        assert_eq!(bounds.min_x(), 10.0);
        assert_eq!(bounds.min_y(), 20.0);
        assert_eq!(bounds.max_x(), 40.0);
        assert_eq!(bounds.max_y(), 60.0);
        assert_eq!(bounds.width(), 30.0);
        assert_eq!(bounds.height(), 40.0);
    }

    #[test]
    fn test_bounds_overlaps_vertically() {
        let upper = Bounds::new_from_top_left(Point::new(0.0, 0.0), Size::new(10.0, 50.0));
        let touching = Bounds::new_from_top_left(Point::new(100.0, 50.0), Size::new(10.0, 20.0));
        let crossing = Bounds::new_from_top_left(Point::new(100.0, 49.0), Size::new(10.0, 20.0));
        let below = Bounds::new_from_top_left(Point::new(0.0, 80.0), Size::new(10.0, 20.0));

        // Horizontal position is irrelevant
        assert!(!upper.overlaps_vertically(&touching));
        assert!(upper.overlaps_vertically(&crossing));
        assert!(crossing.overlaps_vertically(&upper));
        assert!(!upper.overlaps_vertically(&below));
    }
}
