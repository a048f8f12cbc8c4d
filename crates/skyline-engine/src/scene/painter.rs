use crate::transform::Transform2D;

use super::Geometry;

/// Rendering context handed to [`Scene::draw`](super::Scene::draw).
///
/// Receives one call per drawable leaf per path, in paint order. `world` maps
/// the geometry's local coordinates into the space of the base transform given
/// to `draw` (clip space when the base is a projection).
pub trait Painter {
    fn paint(&mut self, world: &Transform2D, geometry: &Geometry);
}
