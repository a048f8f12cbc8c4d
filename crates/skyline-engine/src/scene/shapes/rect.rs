use crate::coords::{Rect, Vec2};
use crate::paint::Color;
use crate::scene::{Geometry, NodeId, NodeKind, SceneGraph};

/// Axis-aligned rectangle centered on `center`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RectShape {
    pub center: Vec2,
    pub width: f32,
    pub height: f32,
}

impl RectShape {
    #[inline]
    pub fn new(center: Vec2, width: f32, height: f32) -> Self {
        Self { center, width, height }
    }

    #[inline]
    pub fn square(center: Vec2, side: f32) -> Self {
        Self::new(center, side, side)
    }

    /// Rectangle covering `rect` (given as min corner + size).
    #[inline]
    pub fn from_rect(rect: Rect) -> Self {
        let r = rect.normalized();
        Self::new(r.center(), r.size.x, r.size.y)
    }

    /// Two triangles: top-left, bottom-left, bottom-right / bottom-right, top-right, top-left.
    pub fn tessellate(&self) -> Vec<Vec2> {
        let hw = self.width * 0.5;
        let hh = self.height * 0.5;
        let c = self.center;

        let tl = Vec2::new(c.x - hw, c.y + hh);
        let bl = Vec2::new(c.x - hw, c.y - hh);
        let br = Vec2::new(c.x + hw, c.y - hh);
        let tr = Vec2::new(c.x + hw, c.y + hh);

        vec![tl, bl, br, br, tr, tl]
    }
}

impl SceneGraph {
    /// Appends a rectangle leaf.
    #[inline]
    pub fn add_rect(&mut self, shape: RectShape, color: Color) -> NodeId {
        self.add_node(NodeKind::Rect(Geometry::new(shape.tessellate(), color)))
    }
}
