//! Frame timing.
//!
//! One `FrameClock` lives per window; the runtime ticks it once per redraw and
//! hands the resulting `FrameTime` to the app. Camera movement scales by `dt`.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
