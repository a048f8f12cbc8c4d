//! Scene graph: a transform hierarchy of composite and drawable nodes.
//!
//! Responsibilities:
//! - own every node in an arena addressed by `NodeId`
//! - check once, at build time, that parent/child links form no cycle
//! - compose `parent * local` on the way down and hand each drawable leaf's
//!   static geometry to a `Painter` in a fixed paint order
//! - keep shape tessellation isolated per shape file under `scene::shapes`
//!
//! Paint order: a leaf paints itself, then its children in insertion order.
//! Later siblings therefore paint over earlier ones.

mod error;
mod geometry;
mod graph;
mod node;
mod painter;

pub mod shapes;

pub use error::SceneError;
pub use geometry::Geometry;
pub use graph::{Animate, Scene, SceneGraph};
pub use node::{NodeId, NodeKind, SceneNode};
pub use painter::Painter;
