// MIT/Apache2 License

//! Registers a couple of elements and prints the clip path the overlay would fill for each.
//!
//! Run with `RUST_LOG=debug` to watch the registry churn.

use limelight::{Bounds, ClipPathGenerator, ElementRegistry, HighlightShape, Size2D};

fn main() {
    env_logger::init();

    let mut registry = ElementRegistry::new();
    registry.add_element(
        "cta-button",
        Bounds::new(100.0, 200.0, 50.0, 30.0),
        HighlightShape::Rectangle {
            padding: 10.0,
            border_radius: 5.0,
        },
    );
    registry.add_element(
        "avatar",
        Bounds::new(16.0, 48.0, 40.0, 40.0),
        HighlightShape::Circle { padding: 4.0 },
    );

    // window metrics would come from the host platform's screen query
    let generator = ClipPathGenerator::new(Size2D::new(400.0, 800.0));
    let container = Bounds::from_size(Size2D::new(400.0, 800.0));

    for (id, element) in registry.iter() {
        println!("{}: {}", id, generator.generate(element, container));
    }
}
