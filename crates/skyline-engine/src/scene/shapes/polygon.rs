use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{Geometry, NodeId, NodeKind, SceneGraph};

use super::fan;

/// Freeform convex outline, triangulated as a fan.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonShape {
    pub points: Vec<Vec2>,
}

impl PolygonShape {
    #[inline]
    pub fn new(points: impl Into<Vec<Vec2>>) -> Self {
        Self { points: points.into() }
    }

    #[inline]
    pub fn tessellate(&self) -> Vec<Vec2> {
        fan(&self.points)
    }
}

impl SceneGraph {
    /// Appends a polygon leaf.
    #[inline]
    pub fn add_polygon(&mut self, shape: PolygonShape, color: Color) -> NodeId {
        self.add_node(NodeKind::Polygon(Geometry::new(shape.tessellate(), color)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pentagon_has_three_triangles() {
        let p = PolygonShape::new(vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.5, 1.0),
            Vec2::new(0.5, 2.0),
            Vec2::new(-0.5, 1.0),
        ]);
        assert_eq!(p.tessellate().len(), 9);
    }

    #[test]
    fn too_few_points_is_empty() {
        let p = PolygonShape::new(vec![Vec2::zero(), Vec2::new(1.0, 0.0)]);
        assert!(p.tessellate().is_empty());
    }
}
