// MIT/Apache2 License

use crate::geometry::Bounds;

/// How the cut-out around a highlighted element is shaped.
///
/// The default shape is a rectangle hugging the element exactly: no padding, no corner rounding.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum HighlightShape {
    /// Rectangular cut-out around the element's bounds.
    Rectangle {
        /// Extra space added on every side of the element. May be negative to shrink the cut-out.
        padding: f32,
        /// Corner rounding radius. A radius beyond half of the cut-out's shorter side produces
        /// overlapping corner arcs.
        border_radius: f32,
    },
    /// Circular cut-out centered on the element. The radius is derived from the larger of the
    /// element's two dimensions, so non-square elements stay fully inside the circle.
    Circle {
        /// Extra radius beyond the element's own extent. May be negative.
        padding: f32,
    },
}

impl Default for HighlightShape {
    #[inline]
    fn default() -> HighlightShape {
        HighlightShape::Rectangle {
            padding: 0.0,
            border_radius: 0.0,
        }
    }
}

impl HighlightShape {
    /// The padding this shape applies around the element.
    #[inline]
    #[must_use]
    pub fn padding(&self) -> f32 {
        match *self {
            HighlightShape::Rectangle { padding, .. } => padding,
            HighlightShape::Circle { padding } => padding,
        }
    }

    /// The cut-out radius a circular shape derives for an element of the given bounds.
    #[inline]
    #[must_use]
    pub fn circle_radius(bounds: &Bounds, padding: f32) -> f32 {
        bounds.width.max(bounds.height) / 2.0 + padding
    }
}
