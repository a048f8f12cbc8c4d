//! GPU device + surface management.
//!
//! Creates the wgpu device/queue for one window, keeps its surface configured
//! across resizes and hands out per-frame encoders.

mod frame;
mod gpu;
mod init;
mod surface;

pub use frame::GpuFrame;
pub use gpu::Gpu;
pub use init::GpuInit;
pub use surface::SurfaceErrorAction;
