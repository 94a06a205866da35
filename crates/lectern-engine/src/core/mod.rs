//! Core engine-facing contracts.
//!
//! The interface between the runtime (platform loop) and the application:
//! a one-time setup hook per window, window events, and one call per frame.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
