//! 2D affine transforms.
//!
//! A single matrix type is shared by the scene graph (local/world transforms),
//! the camera and the projection. Composition is the only way transforms combine.

mod affine;

pub use affine::Transform2D;
