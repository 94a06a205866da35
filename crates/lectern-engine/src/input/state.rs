use std::collections::HashSet;

use super::frame::InputFrame;
use super::types::{
    InputEvent,
    Key,
    KeyState,
    MouseButton,
    MouseButtonState,
    PointerButtonEvent,
    PointerMoveEvent,
};

/// Current input state for a single window.
#[derive(Debug, Default)]
pub struct InputState {
    pub modifiers: super::Modifiers,

    pub focused: bool,

    /// Cursor position in logical pixels, while the cursor is over the window.
    pub pointer_pos: Option<(f32, f32)>,

    /// Unbounded pointer position integrated from raw motion.
    ///
    /// `None` until the first motion sample arrives. Unlike `pointer_pos` it
    /// keeps moving while the cursor is grabbed.
    pub virtual_pointer: Option<(f32, f32)>,

    pub keys_down: HashSet<Key>,

    pub buttons_down: HashSet<MouseButton>,
}

impl InputState {
    /// Applies one event to the held state and records transitions in `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match &ev {
            InputEvent::ModifiersChanged(m) => {
                self.modifiers = *m;
            }

            InputEvent::Focused(f) => {
                self.focused = *f;
                if !*f {
                    // Releases are not delivered to unfocused windows.
                    self.keys_down.clear();
                    self.buttons_down.clear();
                }
            }

            InputEvent::PointerMoved(PointerMoveEvent { x, y }) => {
                self.pointer_pos = Some((*x, *y));
            }

            InputEvent::PointerMotion { dx, dy } => {
                let (x, y) = self.virtual_pointer.unwrap_or((0.0, 0.0));
                self.virtual_pointer = Some((x + dx, y + dy));
                frame.motion_delta.0 += dx;
                frame.motion_delta.1 += dy;
            }

            InputEvent::PointerLeft => {
                self.pointer_pos = None;
            }

            InputEvent::Key {
                key,
                state,
                modifiers,
                ..
            } => {
                self.modifiers = *modifiers;

                match state {
                    KeyState::Pressed => {
                        if self.keys_down.insert(*key) {
                            frame.keys_pressed.insert(*key);
                        }
                    }
                    KeyState::Released => {
                        if self.keys_down.remove(key) {
                            frame.keys_released.insert(*key);
                        }
                    }
                }
            }

            InputEvent::PointerButton(PointerButtonEvent {
                button,
                state,
                x,
                y,
                modifiers,
            }) => {
                self.pointer_pos = Some((*x, *y));
                self.modifiers = *modifiers;

                match state {
                    MouseButtonState::Pressed => {
                        if self.buttons_down.insert(*button) {
                            frame.buttons_pressed.insert(*button);
                        }
                    }
                    MouseButtonState::Released => {
                        if self.buttons_down.remove(button) {
                            frame.buttons_released.insert(*button);
                        }
                    }
                }
            }

            InputEvent::MouseWheel { delta, modifiers } => {
                self.modifiers = *modifiers;
                let (x, y) = delta.lines();
                frame.scroll_delta.0 += x;
                frame.scroll_delta.1 += y;
            }
        }

        frame.push_event(ev);
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    pub fn button_down(&self, btn: MouseButton) -> bool {
        self.buttons_down.contains(&btn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Modifiers, MouseWheelDelta};

    fn key(key: Key, state: KeyState, repeat: bool) -> InputEvent {
        InputEvent::Key {
            key,
            state,
            modifiers: Modifiers::default(),
            code: 0,
            repeat,
        }
    }

    // ── keys ──────────────────────────────────────────────────────────────

    #[test]
    fn press_is_recorded_once_per_hold() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, key(Key::W, KeyState::Pressed, false));
        frame.clear();
        state.apply_event(&mut frame, key(Key::W, KeyState::Pressed, true));

        assert!(state.key_down(Key::W));
        assert!(!frame.key_pressed(Key::W));
    }

    #[test]
    fn release_clears_held_key() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, key(Key::P, KeyState::Pressed, false));
        state.apply_event(&mut frame, key(Key::P, KeyState::Released, false));

        assert!(!state.key_down(Key::P));
        assert!(frame.keys_released.contains(&Key::P));
    }

    #[test]
    fn focus_loss_drops_held_keys() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, key(Key::A, KeyState::Pressed, false));
        state.apply_event(&mut frame, InputEvent::Focused(false));

        assert!(state.keys_down.is_empty());
    }

    // ── pointer ───────────────────────────────────────────────────────────

    #[test]
    fn raw_motion_integrates_virtual_pointer() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        assert!(state.virtual_pointer.is_none());

        state.apply_event(&mut frame, InputEvent::PointerMotion { dx: 3.0, dy: -1.0 });
        state.apply_event(&mut frame, InputEvent::PointerMotion { dx: 2.0, dy: 4.0 });

        assert_eq!(state.virtual_pointer, Some((5.0, 3.0)));
        assert_eq!(frame.motion_delta, (5.0, 3.0));
    }

    #[test]
    fn wheel_accumulates_in_lines() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        let modifiers = Modifiers::default();

        state.apply_event(&mut frame, InputEvent::MouseWheel {
            delta: MouseWheelDelta::Line { x: 0.0, y: 1.0 },
            modifiers,
        });
        state.apply_event(&mut frame, InputEvent::MouseWheel {
            delta: MouseWheelDelta::Pixel { x: 0.0, y: 40.0 },
            modifiers,
        });

        assert_eq!(frame.scroll_delta, (0.0, 3.0));
        frame.clear();
        assert_eq!(frame.scroll_delta, (0.0, 0.0));
    }
}
