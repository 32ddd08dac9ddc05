use ::winit::dpi::PhysicalPosition;
use ::winit::event::{ElementState, MouseButton as WinitMouseButton, WindowEvent};
use ::winit::keyboard::{KeyCode, ModifiersState, PhysicalKey};
use ::winit::window::Window;

use crate::input::{
    InputEvent, Key, KeyState, Modifiers, MouseButton, MouseButtonState, PointerButtonEvent,
    PointerMoveEvent,
};

/// Translation-time tracking of the platform state that winit does not attach
/// to every event.
///
/// winit 0.30 has no cursor or modifier query, so button and key events are
/// stamped with the last values seen here. This runs when the event arrives,
/// ahead of the queued `InputState` update.
#[derive(Debug, Default)]
pub(crate) struct PlatformInput {
    modifiers: Modifiers,
    pointer_pos: Option<(f32, f32)>,
}

impl PlatformInput {
    /// Translates a winit `WindowEvent` into an engine `InputEvent`.
    ///
    /// Returns `None` for events not represented by the input subsystem.
    pub(crate) fn translate(&mut self, window: &Window, event: &WindowEvent) -> Option<InputEvent> {
        match event {
            WindowEvent::CloseRequested => Some(InputEvent::CloseRequested),

            WindowEvent::ModifiersChanged(m) => {
                self.modifiers = map_modifiers(m.state());
                Some(InputEvent::ModifiersChanged(self.modifiers))
            }

            WindowEvent::Focused(f) => Some(InputEvent::Focused(*f)),

            WindowEvent::CursorLeft { .. } => {
                self.pointer_pos = None;
                Some(InputEvent::PointerLeft)
            }

            WindowEvent::CursorMoved { position, .. } => {
                let (x, y) = to_logical_f32(window, *position);
                self.pointer_pos = Some((x, y));
                Some(InputEvent::PointerMoved(PointerMoveEvent { x, y }))
            }

            WindowEvent::MouseInput { state, button, .. } => self.pointer_button(
                map_mouse_button(*button),
                match state {
                    ElementState::Pressed => MouseButtonState::Pressed,
                    ElementState::Released => MouseButtonState::Released,
                },
            ),

            WindowEvent::KeyboardInput { event, .. } => {
                let (key, code) = map_key(event.physical_key);

                Some(InputEvent::Key {
                    key,
                    state: match event.state {
                        ElementState::Pressed => KeyState::Pressed,
                        ElementState::Released => KeyState::Released,
                    },
                    modifiers: self.modifiers,
                    code,
                    repeat: event.repeat,
                })
            }

            _ => None,
        }
    }

    /// Stamps a button transition with the last cursor position.
    ///
    /// winit reports no position with `MouseInput`, and a click can arrive
    /// before the first `CursorMoved` (or after `CursorLeft`). Such buttons are
    /// dropped rather than placed at a made-up location.
    fn pointer_button(&self, button: MouseButton, state: MouseButtonState) -> Option<InputEvent> {
        let (x, y) = self.pointer_pos?;
        Some(InputEvent::PointerButton(PointerButtonEvent {
            button,
            state,
            x,
            y,
            modifiers: self.modifiers,
        }))
    }
}

fn to_logical_f32(window: &Window, pos: PhysicalPosition<f64>) -> (f32, f32) {
    let logical = pos.to_logical::<f64>(window.scale_factor());
    (logical.x as f32, logical.y as f32)
}

fn map_modifiers(m: ModifiersState) -> Modifiers {
    Modifiers {
        shift: m.shift_key(),
        ctrl: m.control_key(),
        alt: m.alt_key(),
        meta: m.super_key(),
    }
}

fn map_mouse_button(b: WinitMouseButton) -> MouseButton {
    match b {
        WinitMouseButton::Left => MouseButton::Left,
        WinitMouseButton::Right => MouseButton::Right,
        WinitMouseButton::Middle => MouseButton::Middle,
        WinitMouseButton::Back => MouseButton::Back,
        WinitMouseButton::Forward => MouseButton::Forward,
        WinitMouseButton::Other(v) => MouseButton::Other(v),
    }
}

fn map_key(pk: PhysicalKey) -> (Key, u32) {
    match pk {
        PhysicalKey::Code(code) => {
            let key = match code {
                KeyCode::Escape => Key::Escape,
                KeyCode::Enter => Key::Enter,
                KeyCode::Tab => Key::Tab,
                KeyCode::Backspace => Key::Backspace,
                KeyCode::Space => Key::Space,

                KeyCode::Insert => Key::Insert,
                KeyCode::Delete => Key::Delete,
                KeyCode::Home => Key::Home,
                KeyCode::End => Key::End,
                KeyCode::PageUp => Key::PageUp,
                KeyCode::PageDown => Key::PageDown,

                KeyCode::ArrowUp => Key::ArrowUp,
                KeyCode::ArrowDown => Key::ArrowDown,
                KeyCode::ArrowLeft => Key::ArrowLeft,
                KeyCode::ArrowRight => Key::ArrowRight,

                KeyCode::ShiftLeft => Key::ShiftLeft,
                KeyCode::ShiftRight => Key::ShiftRight,
                KeyCode::ControlLeft => Key::ControlLeft,
                KeyCode::ControlRight => Key::ControlRight,
                KeyCode::AltLeft => Key::AltLeft,
                KeyCode::AltRight => Key::AltRight,
                KeyCode::SuperLeft | KeyCode::SuperRight => Key::Meta,

                KeyCode::KeyA => Key::A,
                KeyCode::KeyB => Key::B,
                KeyCode::KeyC => Key::C,
                KeyCode::KeyD => Key::D,
                KeyCode::KeyE => Key::E,
                KeyCode::KeyF => Key::F,
                KeyCode::KeyG => Key::G,
                KeyCode::KeyH => Key::H,
                KeyCode::KeyI => Key::I,
                KeyCode::KeyJ => Key::J,
                KeyCode::KeyK => Key::K,
                KeyCode::KeyL => Key::L,
                KeyCode::KeyM => Key::M,
                KeyCode::KeyN => Key::N,
                KeyCode::KeyO => Key::O,
                KeyCode::KeyP => Key::P,
                KeyCode::KeyQ => Key::Q,
                KeyCode::KeyR => Key::R,
                KeyCode::KeyS => Key::S,
                KeyCode::KeyT => Key::T,
                KeyCode::KeyU => Key::U,
                KeyCode::KeyV => Key::V,
                KeyCode::KeyW => Key::W,
                KeyCode::KeyX => Key::X,
                KeyCode::KeyY => Key::Y,
                KeyCode::KeyZ => Key::Z,

                KeyCode::Digit0 => Key::Digit0,
                KeyCode::Digit1 => Key::Digit1,
                KeyCode::Digit2 => Key::Digit2,
                KeyCode::Digit3 => Key::Digit3,
                KeyCode::Digit4 => Key::Digit4,
                KeyCode::Digit5 => Key::Digit5,
                KeyCode::Digit6 => Key::Digit6,
                KeyCode::Digit7 => Key::Digit7,
                KeyCode::Digit8 => Key::Digit8,
                KeyCode::Digit9 => Key::Digit9,

                KeyCode::Slash => Key::Slash,
                KeyCode::Backslash => Key::Backslash,
                KeyCode::Comma => Key::Comma,
                KeyCode::Period => Key::Period,
                KeyCode::Semicolon => Key::Semicolon,
                KeyCode::Quote => Key::Quote,
                KeyCode::Minus => Key::Minus,
                KeyCode::Equal => Key::Equal,

                KeyCode::F1 => Key::F1,
                KeyCode::F2 => Key::F2,
                KeyCode::F3 => Key::F3,
                KeyCode::F4 => Key::F4,
                KeyCode::F5 => Key::F5,
                KeyCode::F6 => Key::F6,
                KeyCode::F7 => Key::F7,
                KeyCode::F8 => Key::F8,
                KeyCode::F9 => Key::F9,
                KeyCode::F10 => Key::F10,
                KeyCode::F11 => Key::F11,
                KeyCode::F12 => Key::F12,

                other => Key::Unknown(other as u32),
            };

            (key, code as u32)
        }

        // NativeKeyCode has no stable numeric form in winit 0.30.
        PhysicalKey::Unidentified(_) => (Key::Unknown(0), 0),
    }
}
