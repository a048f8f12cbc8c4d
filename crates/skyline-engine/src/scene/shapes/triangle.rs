use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{Geometry, NodeId, NodeKind, SceneGraph};

/// Single triangle.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TriangleShape {
    pub a: Vec2,
    pub b: Vec2,
    pub c: Vec2,
}

impl TriangleShape {
    #[inline]
    pub fn new(a: Vec2, b: Vec2, c: Vec2) -> Self {
        Self { a, b, c }
    }

    #[inline]
    pub fn tessellate(&self) -> Vec<Vec2> {
        vec![self.a, self.b, self.c]
    }
}

impl SceneGraph {
    /// Appends a triangle leaf.
    #[inline]
    pub fn add_triangle(&mut self, shape: TriangleShape, color: Color) -> NodeId {
        self.add_node(NodeKind::Triangle(Geometry::new(shape.tessellate(), color)))
    }
}
