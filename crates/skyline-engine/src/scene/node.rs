use std::fmt;

use crate::transform::Transform2D;

use super::Geometry;

/// Stable handle to a node inside a [`SceneGraph`](super::SceneGraph) arena.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What a node is, and for drawable kinds the geometry it paints.
///
/// Shape parameters are tessellated when the node is created; the variant only
/// records which generator produced the triangles.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// Groups and transforms children; paints nothing itself.
    Composite,
    Rect(Geometry),
    Circle(Geometry),
    Triangle(Geometry),
    Quad(Geometry),
    Polygon(Geometry),
}

impl NodeKind {
    /// Geometry painted by this kind, `None` for composites.
    #[inline]
    pub fn geometry(&self) -> Option<&Geometry> {
        match self {
            NodeKind::Composite => None,
            NodeKind::Rect(g)
            | NodeKind::Circle(g)
            | NodeKind::Triangle(g)
            | NodeKind::Quad(g)
            | NodeKind::Polygon(g) => Some(g),
        }
    }

    #[inline]
    pub fn is_drawable(&self) -> bool {
        self.geometry().is_some()
    }

    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Composite => "composite",
            NodeKind::Rect(_) => "rect",
            NodeKind::Circle(_) => "circle",
            NodeKind::Triangle(_) => "triangle",
            NodeKind::Quad(_) => "quad",
            NodeKind::Polygon(_) => "polygon",
        }
    }
}

/// A node in the arena.
///
/// Children are non-owning handles: the arena owns every node, so a node may
/// appear under more than one parent and nothing is destroyed recursively.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    /// Transform relative to the parent frame. Identity at creation.
    pub local: Transform2D,
    pub(crate) children: Vec<NodeId>,
    pub(crate) kind: NodeKind,
}

impl SceneNode {
    #[inline]
    pub(crate) fn new(kind: NodeKind) -> Self {
        Self {
            local: Transform2D::identity(),
            children: Vec::new(),
            kind,
        }
    }

    /// Child handles in paint order.
    #[inline]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    #[inline]
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;

    #[test]
    fn kind_names_follow_variant() {
        let g = Geometry::new(vec![Vec2::zero(); 3], Color::black());
        assert_eq!(NodeKind::Composite.name(), "composite");
        assert_eq!(NodeKind::Quad(g.clone()).name(), "quad");
        assert_eq!(NodeKind::Polygon(g).name(), "polygon");
    }

    #[test]
    fn only_composite_lacks_geometry() {
        let g = Geometry::new(vec![Vec2::zero(); 3], Color::black());
        assert!(!NodeKind::Composite.is_drawable());
        assert!(NodeKind::Circle(g).is_drawable());
    }
}
