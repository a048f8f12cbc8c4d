//! Coordinate and geometry types shared by the scene graph, camera and renderers.
//!
//! World space:
//! - arbitrary scene units, +X right, +Y up
//! - mapped to clip space by the projection passed to the scene traversal
//!
//! `Viewport` is the only pixel-space type; renderers use it for surface sizing.

mod rect;
mod vec2;
mod viewport;

pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
