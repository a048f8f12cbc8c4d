//! Shape generators for drawable leaves.
//!
//! Each shape is a small parameter struct with a `tessellate()` into a local
//! triangle list, plus a `SceneGraph::add_*` helper that tessellates once and
//! appends the leaf.
//!
//! Adding a shape:
//! - add a module here with the parameter struct
//! - add a `NodeKind` variant carrying its `Geometry`
//! - add the `SceneGraph::add_*` helper inside the shape module

pub(crate) mod circle;
pub(crate) mod polygon;
pub(crate) mod quad;
pub(crate) mod rect;
pub(crate) mod triangle;

pub use circle::CircleShape;
pub use polygon::PolygonShape;
pub use quad::QuadShape;
pub use rect::RectShape;
pub use triangle::TriangleShape;

use crate::coords::Vec2;

/// Triangulates a convex outline as a fan around `points[0]`.
///
/// Fewer than three points produce no triangles.
pub(crate) fn fan(points: &[Vec2]) -> Vec<Vec2> {
    if points.len() < 3 {
        return Vec::new();
    }
    let mut out = Vec::with_capacity((points.len() - 2) * 3);
    for pair in points[1..].windows(2) {
        out.extend_from_slice(&[points[0], pair[0], pair[1]]);
    }
    out
}
