use std::collections::HashMap;

use crate::element::{Element, ElementKey, HoverTarget};

/// A keyed mutation of the drawing surface.
///
/// `Draw` upserts: an element whose key is already on the surface is
/// replaced in place, keeping its z-position; a new key lands on top.
/// `Remove` drops the element entirely.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp {
    Draw(Element),
    Remove(ElementKey),
}

/// The external drawing capability.
///
/// The core computes where things go and hands the result over as keyed
/// operations; implementations own pixels, retained state, and delivering
/// pointer events back to the application.
pub trait Surface {
    fn apply(&mut self, ops: Vec<SurfaceOp>);
}

/// Which way a pointer crossed an interactive element.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PointerKind {
    Enter,
    Leave,
}

/// A pointer crossing reported by the surface, identified by the hover
/// target the element was registered with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointerEvent {
    pub target: HoverTarget,
    pub kind: PointerKind,
}

impl PointerEvent {
    pub fn enter(target: HoverTarget) -> Self {
        Self {
            target,
            kind: PointerKind::Enter,
        }
    }

    pub fn leave(target: HoverTarget) -> Self {
        Self {
            target,
            kind: PointerKind::Leave,
        }
    }
}

/// Retained element store: the reference `Surface` used by tests and by
/// the SVG exporter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemorySurface {
    elements: Vec<Element>,
    index: HashMap<ElementKey, usize>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Elements in draw order (bottom to top).
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn get(&self, key: &ElementKey) -> Option<&Element> {
        self.index.get(key).map(|&at| &self.elements[at])
    }

    pub fn contains(&self, key: &ElementKey) -> bool {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    fn draw(&mut self, element: Element) {
        match self.index.get(&element.key) {
            Some(&at) => self.elements[at] = element,
            None => {
                self.index.insert(element.key.clone(), self.elements.len());
                self.elements.push(element);
            }
        }
    }

    fn remove(&mut self, key: &ElementKey) {
        let Some(at) = self.index.remove(key) else {
            return;
        };
        self.elements.remove(at);
        for position in self.index.values_mut() {
            if *position > at {
                *position -= 1;
            }
        }
    }
}

impl Surface for MemorySurface {
    fn apply(&mut self, ops: Vec<SurfaceOp>) {
        for op in ops {
            match op {
                SurfaceOp::Draw(element) => self.draw(element),
                SurfaceOp::Remove(key) => self.remove(&key),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{MemorySurface, Surface, SurfaceOp};
    use crate::element::{Color, Element, ElementKey, Primitive, Style};
    use foundation::math::Vec2;

    fn circle(key: &str, radius: f64) -> Element {
        Element::new(
            ElementKey::new(key),
            Primitive::Circle {
                center: Vec2::new(0.0, 0.0),
                radius,
            },
            Style::filled(Color::rgb(0x2a, 0x55, 0x99)),
        )
    }

    #[test]
    fn draw_appends_in_order() {
        let mut surface = MemorySurface::new();
        surface.apply(vec![
            SurfaceOp::Draw(circle("a", 1.0)),
            SurfaceOp::Draw(circle("b", 2.0)),
        ]);

        assert_eq!(surface.len(), 2);
        assert_eq!(surface.elements()[0].key, ElementKey::new("a"));
        assert_eq!(surface.elements()[1].key, ElementKey::new("b"));
    }

    #[test]
    fn drawing_an_existing_key_replaces_in_place() {
        let mut surface = MemorySurface::new();
        surface.apply(vec![
            SurfaceOp::Draw(circle("a", 1.0)),
            SurfaceOp::Draw(circle("b", 2.0)),
            SurfaceOp::Draw(circle("a", 9.0)),
        ]);

        assert_eq!(surface.len(), 2);
        // Still at the bottom of the z-order.
        assert_eq!(surface.elements()[0].key, ElementKey::new("a"));
        match surface
            .get(&ElementKey::new("a"))
            .map(|e| &e.primitive)
        {
            Some(Primitive::Circle { radius, .. }) => assert_eq!(*radius, 9.0),
            other => panic!("unexpected primitive: {other:?}"),
        }
    }

    #[test]
    fn remove_drops_the_element_and_keeps_the_rest_addressable() {
        let mut surface = MemorySurface::new();
        surface.apply(vec![
            SurfaceOp::Draw(circle("a", 1.0)),
            SurfaceOp::Draw(circle("b", 2.0)),
            SurfaceOp::Draw(circle("c", 3.0)),
        ]);
        surface.apply(vec![SurfaceOp::Remove(ElementKey::new("b"))]);

        assert_eq!(surface.len(), 2);
        assert!(!surface.contains(&ElementKey::new("b")));
        match surface
            .get(&ElementKey::new("c"))
            .map(|e| &e.primitive)
        {
            Some(Primitive::Circle { radius, .. }) => assert_eq!(*radius, 3.0),
            other => panic!("unexpected primitive: {other:?}"),
        }
    }

    #[test]
    fn removing_a_missing_key_is_a_noop() {
        let mut surface = MemorySurface::new();
        surface.apply(vec![SurfaceOp::Draw(circle("a", 1.0))]);
        surface.apply(vec![SurfaceOp::Remove(ElementKey::new("zzz"))]);
        assert_eq!(surface.len(), 1);
    }
}
