//! Scene rendering core.
//!
//! Resources (meshes, textures, programs) are created once at startup and
//! owned by a `ResourceSet`. Each frame the app records a `FramePlan` of
//! passes and draw calls; `ScenePass` validates and executes it.
//!
//! Conventions:
//! - right-handed world space, +Y up, depth in `[0, 1]`
//! - vertices are interleaved position/normal/uv, 8 floats per vertex
//! - bind group 0 is the per-draw uniform block, group 1 the texture

mod ctx;
mod layouts;
pub mod mesh;
pub mod pass;
pub mod plan;
pub mod program;
pub mod resources;
pub mod texture;
pub mod uniforms;

pub use ctx::{RenderCtx, RenderTarget};
pub use layouts::SceneLayouts;
