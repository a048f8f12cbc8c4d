use crate::coords::Vec2;
use crate::paint::Color;

/// Static, flat-colored triangle list in node-local coordinates.
///
/// Built once when a drawable node is created and never modified afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    /// Triangle list; `len()` is a multiple of 3.
    pub vertices: Vec<Vec2>,
    pub color: Color,
}

impl Geometry {
    #[inline]
    pub fn new(vertices: Vec<Vec2>, color: Color) -> Self {
        debug_assert!(vertices.len() % 3 == 0, "geometry must be a triangle list");
        Self { vertices, color }
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}
