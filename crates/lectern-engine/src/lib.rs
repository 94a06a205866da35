//! Lectern engine crate.
//!
//! Platform, GPU and rendering pieces for small textured 3D scenes: the
//! window runtime, input, a free-fly camera, and a validated frame plan
//! executed by a single scene pass.

pub mod camera;
pub mod core;
pub mod device;
pub mod input;
pub mod logging;
pub mod render;
pub mod time;
pub mod window;
