//! Free-fly camera and projection.
//!
//! The camera is a plain value mutated by input deltas; it derives a
//! right-handed view matrix and, together with a `ProjectionMode`, the
//! projection matrix. Depth maps to wgpu's `[0, 1]` clip range.

mod free_fly;
mod mouse_look;
mod projection;

pub use free_fly::{Camera, CameraMovement};
pub use mouse_look::MouseLook;
pub use projection::{ProjectionMode, orthographic_projection, perspective_projection, FAR_PLANE, NEAR_PLANE};
