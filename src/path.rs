// MIT/Apache2 License

//! Path segments and the textual path grammar they format to.
//!
//! This is a pure formatting layer: segments render whatever numbers they are given and never fail, so
//! malformed coordinates come out as malformed but non-panicking tokens. Validation, where wanted,
//! happens upstream of path construction.

use crate::geometry::{Point2D, Vector2D};
use lyon_geom::ArcFlags;
use lyon_path::builder::{Build, SvgPathBuilder};
use std::fmt;
use tinyvec::TinyVec;

/// Segments it takes to dim a window and cut one shape out of the dimming layer.
const MAX_PATH_STACK_SIZE: usize = 16;

/// A single command in a path description.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PathSegment {
    /// Begin a sub-path at an absolute position: `M x y`.
    Move { to: Point2D<f32> },
    /// Straight line to an absolute position: `L x y`.
    Line { to: Point2D<f32> },
    /// Circular arc to an absolute position: `A r,r 0 0 0 x,y`. The radius is uniform and the
    /// x-axis-rotation, large-arc, and sweep flags are fixed, as the quarter-turn corner arcs are the
    /// only absolute arcs the grammar subset needs.
    Arc { to: Point2D<f32>, radius: f32 },
    /// Move the current position by an offset: `m dx dy`.
    MoveBy { by: Vector2D<f32> },
    /// Semicircular arc sweeping to an offset: `a r,r 0 1,0 dx,dy`. Two of these express a full
    /// circle, which the grammar cannot write as one segment.
    ArcBy { by: Vector2D<f32>, radius: f32 },
    /// Close the current sub-path: `z`.
    Close,
}

impl Default for PathSegment {
    #[inline]
    fn default() -> PathSegment {
        PathSegment::Close
    }
}

impl fmt::Display for PathSegment {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Move { to } => write!(f, "M {} {}", to.x, to.y),
            Self::Line { to } => write!(f, "L {} {}", to.x, to.y),
            Self::Arc { to, radius } => write!(f, "A {},{} 0 0 0 {},{}", radius, radius, to.x, to.y),
            Self::MoveBy { by } => write!(f, "m {} {}", by.x, by.y),
            Self::ArcBy { by, radius } => {
                write!(f, "a {},{} 0 1,0 {},{}", radius, radius, by.x, by.y)
            }
            Self::Close => f.write_str("z"),
        }
    }
}

/// A path assembled from [`PathSegment`]s.
///
/// Segments are buffered inline; a full clip path fits on the stack. The `Display` impl joins the
/// segment tokens with single spaces, which is the string form consumed by vector-rendering surfaces.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    segments: TinyVec<[PathSegment; MAX_PATH_STACK_SIZE]>,
}

impl Path {
    /// Create a new, empty path.
    #[inline]
    #[must_use]
    pub fn new() -> Path {
        Path::default()
    }

    /// Begin a sub-path at `to`.
    #[inline]
    pub fn move_to(&mut self, to: Point2D<f32>) {
        self.segments.push(PathSegment::Move { to });
    }

    /// Draw a straight line to `to`.
    #[inline]
    pub fn line_to(&mut self, to: Point2D<f32>) {
        self.segments.push(PathSegment::Line { to });
    }

    /// Draw a circular arc of the given radius to `to`.
    #[inline]
    pub fn arc_to(&mut self, to: Point2D<f32>, radius: f32) {
        self.segments.push(PathSegment::Arc { to, radius });
    }

    /// Move the current position by `by` without drawing.
    #[inline]
    pub fn move_by(&mut self, by: Vector2D<f32>) {
        self.segments.push(PathSegment::MoveBy { by });
    }

    /// Draw a semicircular arc of the given radius sweeping to `by`.
    #[inline]
    pub fn arc_by(&mut self, by: Vector2D<f32>, radius: f32) {
        self.segments.push(PathSegment::ArcBy { by, radius });
    }

    /// Close the current sub-path.
    #[inline]
    pub fn close(&mut self) {
        self.segments.push(PathSegment::Close);
    }

    /// The segments pushed so far.
    #[inline]
    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Whether any segments have been pushed.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Replay this path into a [`lyon_path::Path`], for renderers that consume typed geometry rather
    /// than the string form.
    ///
    /// The cut-out only renders as a hole when the fill honors the even-odd rule
    /// (`lyon_path::FillRule::EvenOdd`); under a plain nonzero fill the inner shape paints as a solid
    /// region instead.
    #[must_use]
    pub fn to_lyon(&self) -> lyon_path::Path {
        let zero = lyon_geom::Angle::radians(0.0);
        let quarter_turn = ArcFlags {
            large_arc: false,
            sweep: false,
        };
        let half_turn = ArcFlags {
            large_arc: true,
            sweep: false,
        };

        let mut builder = lyon_path::Path::svg_builder();
        for segment in self.segments.iter() {
            match *segment {
                PathSegment::Move { to } => {
                    builder.move_to(to);
                }
                PathSegment::Line { to } => {
                    builder.line_to(to);
                }
                PathSegment::Arc { to, radius } => {
                    builder.arc_to(Vector2D::new(radius, radius), zero, quarter_turn, to);
                }
                PathSegment::MoveBy { by } => {
                    builder.relative_move_to(by);
                }
                PathSegment::ArcBy { by, radius } => {
                    builder.relative_arc_to(Vector2D::new(radius, radius), zero, half_turn, by);
                }
                PathSegment::Close => {
                    builder.close();
                }
            }
        }
        builder.build()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i != 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_tokens() {
        assert_eq!(
            PathSegment::Move {
                to: Point2D::new(100.0, 200.0)
            }
            .to_string(),
            "M 100 200"
        );
        assert_eq!(
            PathSegment::Line {
                to: Point2D::new(-12.5, 0.25)
            }
            .to_string(),
            "L -12.5 0.25"
        );
        assert_eq!(
            PathSegment::Arc {
                to: Point2D::new(95.0, 240.0),
                radius: 5.0
            }
            .to_string(),
            "A 5,5 0 0 0 95,240"
        );
        assert_eq!(
            PathSegment::MoveBy {
                by: Vector2D::new(-20.0, 0.0)
            }
            .to_string(),
            "m -20 0"
        );
        assert_eq!(
            PathSegment::ArcBy {
                by: Vector2D::new(40.0, 0.0),
                radius: 20.0
            }
            .to_string(),
            "a 20,20 0 1,0 40,0"
        );
        assert_eq!(PathSegment::Close.to_string(), "z");
    }

    #[test]
    fn test_tokens_join_with_single_spaces() {
        let mut path = Path::new();
        path.move_to(Point2D::new(0.0, 0.0));
        path.line_to(Point2D::new(0.0, 10.0));
        path.line_to(Point2D::new(10.0, 10.0));
        path.line_to(Point2D::new(10.0, 0.0));
        path.close();
        assert_eq!(path.to_string(), "M 0 0 L 0 10 L 10 10 L 10 0 z");
    }

    #[test]
    fn test_empty_path_formats_to_nothing() {
        assert_eq!(Path::new().to_string(), "");
    }

    #[test]
    fn test_lyon_replay_keeps_sub_paths() {
        // a closed outer loop plus an open inner shape round-trip as two sub-paths
        let mut path = Path::new();
        path.move_to(Point2D::new(0.0, 0.0));
        path.line_to(Point2D::new(0.0, 10.0));
        path.line_to(Point2D::new(10.0, 10.0));
        path.line_to(Point2D::new(10.0, 0.0));
        path.close();
        path.move_to(Point2D::new(2.0, 3.0));
        path.line_to(Point2D::new(4.0, 3.0));
        path.arc_to(Point2D::new(5.0, 4.0), 1.0);

        let lyon = path.to_lyon();
        let sub_paths = lyon
            .iter()
            .filter(|event| matches!(event, lyon_path::PathEvent::Begin { .. }))
            .count();
        assert_eq!(sub_paths, 2);
    }
}
