//! Input subsystem.
//!
//! The public API does not expose winit types. The runtime translates platform
//! events into `InputEvent`s and feeds them through `InputState::apply_event`,
//! which keeps held state and records per-frame transitions in `InputFrame`.

mod frame;
mod state;
mod types;

pub use frame::InputFrame;
pub use state::InputState;
pub use types::{
    InputEvent,
    Key,
    KeyState,
    Modifiers,
    MouseButton,
    MouseButtonState,
    MouseWheelDelta,
    PointerButtonEvent,
    PointerMoveEvent,
};
