//! 2D camera driven by polled keyboard state.
//!
//! The camera is host policy: it produces a view transform that the host
//! combines with the projection and passes to the scene traversal as the base
//! transform. Clamping (minimum zoom, pan bounds) lives here, not in the scene.

mod camera2d;

pub use camera2d::{Camera2D, CameraConfig};
