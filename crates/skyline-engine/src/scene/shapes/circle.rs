use core::f32::consts::TAU;

use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{Geometry, NodeId, NodeKind, SceneGraph};

/// Circle approximated by `segments` triangles around `center`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CircleShape {
    pub center: Vec2,
    pub radius: f32,
    pub segments: u32,
}

impl CircleShape {
    /// One segment per degree.
    pub const DEFAULT_SEGMENTS: u32 = 360;

    #[inline]
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius, segments: Self::DEFAULT_SEGMENTS }
    }

    #[inline]
    pub fn with_segments(mut self, segments: u32) -> Self {
        self.segments = segments;
        self
    }

    /// Triangle fan around the center; fewer than 3 segments are raised to 3.
    pub fn tessellate(&self) -> Vec<Vec2> {
        let n = self.segments.max(3);
        let step = TAU / n as f32;
        let rim = |i: u32| self.center + Vec2::from_polar(self.radius, step * (i % n) as f32);

        let mut out = Vec::with_capacity(n as usize * 3);
        for i in 0..n {
            out.extend_from_slice(&[self.center, rim(i), rim(i + 1)]);
        }
        out
    }
}

impl SceneGraph {
    /// Appends a circle leaf.
    #[inline]
    pub fn add_circle(&mut self, shape: CircleShape, color: Color) -> NodeId {
        self.add_node(NodeKind::Circle(Geometry::new(shape.tessellate(), color)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rim_points_sit_on_radius() {
        let c = CircleShape::new(Vec2::new(2.0, -1.0), 0.5).with_segments(12);
        let v = c.tessellate();
        assert_eq!(v.len(), 36);
        for tri in v.chunks(3) {
            assert_eq!(tri[0], c.center);
            assert!(((tri[1] - c.center).length() - 0.5).abs() < 1e-5);
        }
    }

    #[test]
    fn fan_closes_on_first_rim_point() {
        let v = CircleShape::new(Vec2::zero(), 1.0).with_segments(4).tessellate();
        assert_eq!(v[v.len() - 1], v[1]);
    }

    #[test]
    fn degenerate_segment_count_is_raised() {
        let v = CircleShape::new(Vec2::zero(), 1.0).with_segments(1).tessellate();
        assert_eq!(v.len(), 9);
    }
}
