//! Lectern Desk: a small textured desk scene with a free-fly camera.
//!
//! Controls: W/A/S/D move, Q/E down/up, mouse looks, wheel zooms,
//! P orthographic, O perspective, ESC quits.

mod app;
mod config;
mod scene;
mod shaders;
mod shapes;

use clap::Parser;
use lectern_engine::device::GpuInit;
use lectern_engine::logging::init_logging;
use lectern_engine::window::Runtime;

use crate::app::DeskApp;
use crate::config::{CliArgs, DeskConfig};

fn main() {
    let config = DeskConfig::from_cli(CliArgs::parse());

    init_logging(config.logging());
    log::info!("loading textures from {}", config.asset_root.display());

    // Shading and the clear color are authored for a non-sRGB target.
    let gpu_init = GpuInit {
        prefer_srgb: false,
        ..GpuInit::default()
    };

    let runtime = config.runtime();
    if let Err(e) = Runtime::run(runtime, gpu_init, DeskApp::new(config)) {
        eprintln!("lectern-desk: {e:#}");
        std::process::exit(1);
    }
}
