use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{Geometry, NodeId, NodeKind, SceneGraph};

use super::fan;

/// Convex quadrilateral given by its corners in outline order.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct QuadShape {
    pub corners: [Vec2; 4],
}

impl QuadShape {
    #[inline]
    pub fn new(corners: [Vec2; 4]) -> Self {
        Self { corners }
    }

    /// Trapezoid with horizontal edges: `bottom` and `top` widths centered on `center_x`.
    pub fn trapezoid(center_x: f32, bottom_y: f32, top_y: f32, bottom: f32, top: f32) -> Self {
        Self::new([
            Vec2::new(center_x - bottom * 0.5, bottom_y),
            Vec2::new(center_x + bottom * 0.5, bottom_y),
            Vec2::new(center_x + top * 0.5, top_y),
            Vec2::new(center_x - top * 0.5, top_y),
        ])
    }

    #[inline]
    pub fn tessellate(&self) -> Vec<Vec2> {
        fan(&self.corners)
    }
}

impl SceneGraph {
    /// Appends a quad leaf.
    #[inline]
    pub fn add_quad(&mut self, shape: QuadShape, color: Color) -> NodeId {
        self.add_node(NodeKind::Quad(Geometry::new(shape.tessellate(), color)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quad_is_two_triangles_sharing_first_corner() {
        let q = QuadShape::trapezoid(0.0, 0.0, 1.0, 2.0, 1.0);
        let v = q.tessellate();
        assert_eq!(v.len(), 6);
        assert_eq!(v[0], q.corners[0]);
        assert_eq!(v[3], q.corners[0]);
        assert_eq!(v[5], q.corners[3]);
    }
}
