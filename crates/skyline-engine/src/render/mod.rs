//! GPU rendering subsystem.
//!
//! The scene is flattened on the CPU by [`MeshBatch`], which implements
//! [`Painter`](crate::scene::Painter) and writes clip-space triangles.
//! [`MeshRenderer`] uploads the batch and issues one draw per frame.
//!
//! Convention:
//! - Vertex positions reaching the GPU are already in clip space.
//! - Colors are linear premultiplied RGBA.

mod ctx;
pub mod mesh;

pub use ctx::{RenderCtx, RenderTarget};
pub use mesh::{MeshBatch, MeshRenderer, MeshVertex};
