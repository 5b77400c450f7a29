// MIT/Apache2 License

//! The element registry: the mapping the overlay reads when it renders. Hosts measure an element,
//! record it here under an id, and remove it when the element leaves the screen. The registry is
//! plain owned data; hosts needing shared mutation wrap it themselves.

use crate::{geometry::Bounds, highlight::HighlightShape, Error, Result};
use std::collections::HashMap;

/// The registry's record for one highlightable element.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct RegisteredElement {
    /// On-screen box of the element, in viewport coordinates.
    pub bounds: Bounds,
    /// Shape of the cut-out drawn around it.
    pub shape: HighlightShape,
}

impl RegisteredElement {
    /// Create a record from measured bounds and a shape.
    #[inline]
    #[must_use]
    pub fn new(bounds: Bounds, shape: HighlightShape) -> RegisteredElement {
        RegisteredElement { bounds, shape }
    }

    /// Verify that the recorded bounds and shape parameters describe a well-formed cut-out.
    ///
    /// The clip-path generator never rejects its input; a degenerate record still produces a path
    /// string, just a self-intersecting or visually wrong one. Callers that want to surface such
    /// records instead of rendering them run this first.
    pub fn check(&self) -> Result {
        let (padding, border_radius) = match self.shape {
            HighlightShape::Rectangle {
                padding,
                border_radius,
            } => (padding, border_radius),
            HighlightShape::Circle { padding } => (padding, 0.0),
        };

        if !(self.bounds.is_finite() && padding.is_finite() && border_radius.is_finite()) {
            return Err(Error::NonFinite);
        }

        let Bounds { width, height, .. } = self.bounds;
        if width < 0.0 || height < 0.0 {
            return Err(Error::NegativeExtent { width, height });
        }

        match self.shape {
            HighlightShape::Rectangle { .. } => {
                if border_radius < 0.0 {
                    return Err(Error::NegativeArcRadius(border_radius));
                }

                let cut_width = width + padding * 2.0;
                let cut_height = height + padding * 2.0;
                if cut_width < 0.0 || cut_height < 0.0 {
                    return Err(Error::NegativeExtent {
                        width: cut_width,
                        height: cut_height,
                    });
                }

                let limit = cut_width.min(cut_height) / 2.0;
                if border_radius > limit {
                    return Err(Error::OversizedCornerRadius {
                        radius: border_radius,
                        limit,
                    });
                }
            }
            HighlightShape::Circle { .. } => {
                let radius = HighlightShape::circle_radius(&self.bounds, padding);
                if radius < 0.0 {
                    return Err(Error::NegativeArcRadius(radius));
                }
            }
        }

        Ok(())
    }
}

/// Elements eligible for highlighting, keyed by the id the overlay looks them up under.
#[derive(Debug, Clone, Default)]
pub struct ElementRegistry {
    elements: HashMap<String, RegisteredElement>,
}

impl ElementRegistry {
    /// Create an empty registry.
    #[inline]
    #[must_use]
    pub fn new() -> ElementRegistry {
        ElementRegistry::default()
    }

    /// Record an element's bounds and shape. Re-registering an id replaces the old record.
    ///
    /// Degenerate shape parameters are logged but still recorded; see
    /// [`RegisteredElement::check`].
    pub fn add_element<I: Into<String>>(&mut self, id: I, bounds: Bounds, shape: HighlightShape) {
        let id = id.into();
        let element = RegisteredElement::new(bounds, shape);
        if let Err(e) = element.check() {
            log::warn!("element \"{}\" registered with degenerate shape: {}", id, e);
        }
        log::debug!("registering element \"{}\": {:?}", id, element);
        self.elements.insert(id, element);
    }

    /// Forget an element. Returns the old record if the id was known.
    pub fn remove_element(&mut self, id: &str) -> Option<RegisteredElement> {
        let removed = self.elements.remove(id);
        if removed.is_some() {
            log::debug!("removed element \"{}\"", id);
        }
        removed
    }

    /// Look up an element by id.
    #[inline]
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&RegisteredElement> {
        self.elements.get(id)
    }

    /// Iterate over all registered elements.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RegisteredElement)> {
        self.elements.iter().map(|(id, element)| (id.as_str(), element))
    }

    /// The number of registered elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the registry has no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Forget every element.
    #[inline]
    pub fn clear(&mut self) {
        self.elements.clear();
    }
}
