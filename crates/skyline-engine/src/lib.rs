//! Skyline engine crate.
//!
//! Scene graph and 2D affine transforms, plus the platform and GPU runtime
//! pieces that put a scene on screen.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod transform;
pub mod scene;
pub mod camera;
pub mod render;
pub mod paint;
