// MIT/Apache2 License

//! Geometry shared across the crate. Element boxes arrive from the host platform as a top-left corner
//! plus an extent; everything derived from them (padding inflation, centers, cut-out boxes) goes
//! through the `euclid` types re-exported here.

pub use euclid::default::{Box2D, Point2D, Size2D, Vector2D};

/// A top-left-origin rectangle in viewport coordinates. Represents an element's on-screen box, or the
/// size of the overlay container (in which role the corner is ignored).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Bounds {
    /// X coordinate of the top-left corner.
    pub x: f32,
    /// Y coordinate of the top-left corner.
    pub y: f32,
    /// Horizontal extent. Expected to be non-negative.
    pub width: f32,
    /// Vertical extent. Expected to be non-negative.
    pub height: f32,
}

impl Bounds {
    /// Create bounds from a top-left corner and an extent.
    #[inline]
    #[must_use]
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Bounds {
        Bounds {
            x,
            y,
            width,
            height,
        }
    }

    /// Bounds of the given size, anchored at the origin. Overlay containers are usually known only by
    /// their measured size.
    #[inline]
    #[must_use]
    pub fn from_size(size: Size2D<f32>) -> Bounds {
        Bounds::new(0.0, 0.0, size.width, size.height)
    }

    /// The extent of this rectangle.
    #[inline]
    #[must_use]
    pub fn size(&self) -> Size2D<f32> {
        Size2D::new(self.width, self.height)
    }

    /// The geometric center.
    #[inline]
    #[must_use]
    pub fn center(&self) -> Point2D<f32> {
        Point2D::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// This rectangle as a min/max box, which keeps arithmetic on opposite edges symmetric.
    #[inline]
    #[must_use]
    pub fn to_box2d(&self) -> Box2D<f32> {
        Box2D::new(
            Point2D::new(self.x, self.y),
            Point2D::new(self.x + self.width, self.y + self.height),
        )
    }

    /// Whether every coordinate of this rectangle is a finite number.
    #[inline]
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite()
    }
}
