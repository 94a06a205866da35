//! GPU device and surface management.
//!
//! Creates the wgpu instance/adapter/device/queue, configures the window
//! surface, and hands out one encoder + view per acquired frame.

mod gpu;

pub use gpu::{Gpu, GpuFrame, GpuInit, SurfaceErrorAction};
