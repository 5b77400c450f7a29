// MIT/Apache2 License

//! Clip-path construction for the dimming overlay.
//!
//! A clip path is two sub-paths in one string: an outer loop covering the whole overlay (the "dim
//! everything" rectangle) and an inner cut-out shape around the highlighted element. The combined
//! path only renders as a dimming layer with a hole when the surface filling it honors the even-odd
//! fill rule; pair the string (or [`Path::to_lyon`] output with `lyon_path::FillRule::EvenOdd`) with
//! such a surface, or the cut-out paints as a solid shape instead of a hole.

use crate::{
    geometry::{Bounds, Box2D, Point2D, Size2D, Vector2D},
    highlight::HighlightShape,
    path::Path,
    registry::RegisteredElement,
};

/// Builds clip paths that dim a window except for one highlighted element.
///
/// Holds the device window size, captured once at startup and passed in explicitly so multi-window
/// hosts and tests can supply their own metrics. The outer dimming rectangle is clamped to the
/// smaller of this window and the overlay container, which keeps an oversized scrollable container
/// from producing an overlay bigger than the visible viewport.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ClipPathGenerator {
    window: Size2D<f32>,
}

impl ClipPathGenerator {
    /// Create a generator for a device window of the given size.
    #[inline]
    #[must_use]
    pub fn new(window: Size2D<f32>) -> ClipPathGenerator {
        ClipPathGenerator { window }
    }

    /// The window size the dimming layer is clamped to.
    #[inline]
    #[must_use]
    pub fn window(&self) -> Size2D<f32> {
        self.window
    }

    /// Generate the clip path for one element as a path-description string.
    ///
    /// Pure and total: identical inputs produce byte-identical strings, and every input produces a
    /// string. Degenerate bounds or radii degenerate in the output rather than failing; see
    /// [`RegisteredElement::check`] for opt-in detection.
    #[inline]
    #[must_use]
    pub fn generate(&self, element: &RegisteredElement, container: Bounds) -> String {
        self.path_for(element, container).to_string()
    }

    /// Generate the same clip path in segment form.
    #[must_use]
    pub fn path_for(&self, element: &RegisteredElement, container: Bounds) -> Path {
        let outer = Box2D::new(
            Point2D::new(0.0, 0.0),
            Point2D::new(
                container.width.min(self.window.width),
                container.height.min(self.window.height),
            ),
        );

        let mut path = Path::new();
        dimming_layer(&mut path, outer);

        match element.shape {
            HighlightShape::Rectangle {
                padding,
                border_radius,
            } => {
                let cut = element.bounds.to_box2d().inflate(padding, padding);
                rectangular_cutout(&mut path, cut, border_radius);
            }
            HighlightShape::Circle { padding } => {
                let radius = HighlightShape::circle_radius(&element.bounds, padding);
                circular_cutout(&mut path, element.bounds.center(), radius);
            }
        }

        log::trace!(
            "clip path for {:?} within {:?}: {} segments",
            element.bounds,
            outer,
            path.segments().len()
        );
        path
    }
}

/// The "dim everything" loop covering the whole overlay.
fn dimming_layer(path: &mut Path, outer: Box2D<f32>) {
    path.move_to(outer.min);
    path.line_to(Point2D::new(outer.min.x, outer.max.y));
    path.line_to(outer.max);
    path.line_to(Point2D::new(outer.max.x, outer.min.y));
    path.close();
}

/// Rounded-rectangle cut-out: four edges joined by quarter-arcs, starting just below the top-left
/// corner. The final arc returns exactly to the start point, so no explicit close is emitted.
fn rectangular_cutout(path: &mut Path, cut: Box2D<f32>, radius: f32) {
    path.move_to(Point2D::new(cut.min.x, cut.min.y + radius));
    path.line_to(Point2D::new(cut.min.x, cut.max.y - radius));
    path.arc_to(Point2D::new(cut.min.x + radius, cut.max.y), radius);
    path.line_to(Point2D::new(cut.max.x - radius, cut.max.y));
    path.arc_to(Point2D::new(cut.max.x, cut.max.y - radius), radius);
    path.line_to(Point2D::new(cut.max.x, cut.min.y + radius));
    path.arc_to(Point2D::new(cut.max.x - radius, cut.min.y), radius);
    path.line_to(Point2D::new(cut.min.x + radius, cut.min.y));
    path.arc_to(Point2D::new(cut.min.x, cut.min.y + radius), radius);
}

/// Circular cut-out as two mirrored semicircles, since the grammar cannot express a full circle in
/// one arc segment.
fn circular_cutout(path: &mut Path, center: Point2D<f32>, radius: f32) {
    path.move_to(center);
    path.move_by(Vector2D::new(-radius, 0.0));
    path.arc_by(Vector2D::new(radius * 2.0, 0.0), radius);
    path.arc_by(Vector2D::new(-radius * 2.0, 0.0), radius);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generator() -> ClipPathGenerator {
        ClipPathGenerator::new(Size2D::new(400.0, 800.0))
    }

    fn container(width: f32, height: f32) -> Bounds {
        Bounds::from_size(Size2D::new(width, height))
    }

    #[test]
    fn test_outer_rectangle_clamps_to_window_and_container() {
        let element = RegisteredElement::default();

        // container smaller than the window: the container wins
        let path = generator().generate(&element, container(300.0, 500.0));
        assert!(path.starts_with("M 0 0 L 0 500 L 300 500 L 300 0 z"));

        // container larger than the window: the window wins
        let path = generator().generate(&element, container(1000.0, 1000.0));
        assert!(path.starts_with("M 0 0 L 0 800 L 400 800 L 400 0 z"));

        // mixed: each axis clamps independently
        let path = generator().generate(&element, container(1000.0, 500.0));
        assert!(path.starts_with("M 0 0 L 0 500 L 400 500 L 400 0 z"));
    }

    #[test]
    fn test_rectangle_cutout_with_padding() {
        // padding expands the cut-out by 10 on every side; radius 0 keeps the corners square
        let element = RegisteredElement::new(
            Bounds::new(100.0, 200.0, 50.0, 30.0),
            HighlightShape::Rectangle {
                padding: 10.0,
                border_radius: 0.0,
            },
        );
        let path = generator().generate(&element, container(400.0, 800.0));
        assert_eq!(
            path,
            "M 0 0 L 0 800 L 400 800 L 400 0 z \
             M 90 190 L 90 240 A 0,0 0 0 0 90,240 L 160 240 A 0,0 0 0 0 160,240 \
             L 160 190 A 0,0 0 0 0 160,190 L 90 190 A 0,0 0 0 0 90,190"
        );
    }

    #[test]
    fn test_rectangle_cutout_with_rounded_corners() {
        let element = RegisteredElement::new(
            Bounds::new(100.0, 200.0, 50.0, 30.0),
            HighlightShape::Rectangle {
                padding: 10.0,
                border_radius: 5.0,
            },
        );
        let path = generator().generate(&element, container(400.0, 800.0));
        assert_eq!(
            path,
            "M 0 0 L 0 800 L 400 800 L 400 0 z \
             M 90 195 L 90 235 A 5,5 0 0 0 95,240 L 155 240 A 5,5 0 0 0 160,235 \
             L 160 195 A 5,5 0 0 0 155,190 L 95 190 A 5,5 0 0 0 90,195"
        );
    }

    #[test]
    fn test_rectangle_cutout_is_independent_of_container_size() {
        let element = RegisteredElement::new(
            Bounds::new(100.0, 200.0, 50.0, 30.0),
            HighlightShape::Rectangle {
                padding: 10.0,
                border_radius: 0.0,
            },
        );
        let small = generator().generate(&element, container(300.0, 500.0));
        let large = generator().generate(&element, container(400.0, 800.0));
        // same cut-out tokens after the differing outer loops
        assert_eq!(
            small.split_once('z').unwrap().1,
            large.split_once('z').unwrap().1
        );
    }

    #[test]
    fn test_circle_cutout() {
        let element = RegisteredElement::new(
            Bounds::new(0.0, 0.0, 40.0, 40.0),
            HighlightShape::Circle { padding: 0.0 },
        );
        let path = generator().generate(&element, container(400.0, 800.0));
        assert_eq!(
            path,
            "M 0 0 L 0 800 L 400 800 L 400 0 z \
             M 20 20 m -20 0 a 20,20 0 1,0 40,0 a 20,20 0 1,0 -40,0"
        );
    }

    #[test]
    fn test_circle_cutout_covers_non_square_elements() {
        // radius follows the larger dimension, plus padding
        let element = RegisteredElement::new(
            Bounds::new(10.0, 20.0, 30.0, 50.0),
            HighlightShape::Circle { padding: 5.0 },
        );
        let path = generator().generate(&element, container(400.0, 800.0));
        assert_eq!(
            path,
            "M 0 0 L 0 800 L 400 800 L 400 0 z \
             M 25 45 m -30 0 a 30,30 0 1,0 60,0 a 30,30 0 1,0 -60,0"
        );
    }

    #[test]
    fn test_default_shape_matches_explicit_rectangle() {
        let bounds = Bounds::new(5.0, 6.0, 7.0, 8.0);
        let default = RegisteredElement::new(bounds, HighlightShape::default());
        let explicit = RegisteredElement::new(
            bounds,
            HighlightShape::Rectangle {
                padding: 0.0,
                border_radius: 0.0,
            },
        );
        assert_eq!(
            generator().generate(&default, container(400.0, 800.0)),
            generator().generate(&explicit, container(400.0, 800.0))
        );
    }

    #[test]
    fn test_generation_is_deterministic() {
        let element = RegisteredElement::new(
            Bounds::new(100.0, 200.0, 50.0, 30.0),
            HighlightShape::Rectangle {
                padding: 10.0,
                border_radius: 5.0,
            },
        );
        assert_eq!(
            generator().generate(&element, container(400.0, 800.0)),
            generator().generate(&element, container(400.0, 800.0))
        );
    }

    #[test]
    fn test_negative_padding_shrinks_the_cutout() {
        let element = RegisteredElement::new(
            Bounds::new(100.0, 200.0, 50.0, 30.0),
            HighlightShape::Rectangle {
                padding: -5.0,
                border_radius: 0.0,
            },
        );
        let path = generator().generate(&element, container(400.0, 800.0));
        assert_eq!(
            path,
            "M 0 0 L 0 800 L 400 800 L 400 0 z \
             M 105 205 L 105 225 A 0,0 0 0 0 105,225 L 145 225 A 0,0 0 0 0 145,225 \
             L 145 205 A 0,0 0 0 0 145,205 L 105 205 A 0,0 0 0 0 105,205"
        );
    }

    #[test]
    fn test_clip_path_fits_the_inline_segment_buffer() {
        // the whole clip path should stay on the stack
        let element = RegisteredElement::new(
            Bounds::new(100.0, 200.0, 50.0, 30.0),
            HighlightShape::Rectangle {
                padding: 10.0,
                border_radius: 5.0,
            },
        );
        let path = generator().path_for(&element, container(400.0, 800.0));
        assert_eq!(path.segments().len(), 14);
    }
}
