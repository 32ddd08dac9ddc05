use easel_engine::coords::Vec2;
use easel_engine::input::{
    InputEvent, InputState, Key, KeyState, MouseButtonState, PointerButtonEvent,
};
use easel_engine::paint::Rgba8;
use easel_engine::scene::PrimitiveMode;

/// Color selected with Shift + `/`.
pub const TRANSLUCENT_GRAY: Rgba8 = Rgba8::new(128, 128, 128, 40);

/// Canvas action bound to an input event.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Command {
    Exit,
    /// Clear the canvas and assemble new vertices with this mode.
    SetMode(PrimitiveMode),
    SetColor(Rgba8),
    AddVertex(Vec2),
}

/// Maps an input event to a canvas command.
///
/// `input` must already include `event`. Key repeats count as presses;
/// releases, pointer motion and focus changes map to nothing.
pub fn command_for(event: &InputEvent, input: &InputState) -> Option<Command> {
    match event {
        InputEvent::CloseRequested => Some(Command::Exit),

        InputEvent::Key {
            key,
            state: KeyState::Pressed,
            ..
        } => key_command(*key, input),

        InputEvent::PointerButton(PointerButtonEvent {
            state: MouseButtonState::Pressed,
            x,
            y,
            ..
        }) => Some(Command::AddVertex(Vec2::new(*x, *y))),

        _ => None,
    }
}

fn key_command(key: Key, input: &InputState) -> Option<Command> {
    match key {
        Key::Escape => Some(Command::Exit),
        Key::R => Some(Command::SetColor(Rgba8::RED)),
        Key::Slash if input.key_down(Key::ShiftLeft) => {
            Some(Command::SetColor(TRANSLUCENT_GRAY))
        }
        _ => key
            .digit()
            .and_then(|d| PrimitiveMode::ALL.get(d as usize).copied())
            .map(Command::SetMode),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use easel_engine::input::{Modifiers, MouseButton};

    fn key(key: Key, state: KeyState) -> InputEvent {
        InputEvent::Key {
            key,
            state,
            modifiers: Modifiers::default(),
            code: 0,
            repeat: false,
        }
    }

    fn click(button: MouseButton, state: MouseButtonState) -> InputEvent {
        InputEvent::PointerButton(PointerButtonEvent {
            button,
            state,
            x: 12.5,
            y: 7.0,
            modifiers: Modifiers::default(),
        })
    }

    /// Applies `ev` to `input` first, as the frame loop does.
    fn command(input: &mut InputState, ev: InputEvent) -> Option<Command> {
        input.apply_event(&ev);
        command_for(&ev, input)
    }

    #[test]
    fn digits_zero_to_four_select_modes() {
        let mut input = InputState::default();
        let digits = [Key::Digit0, Key::Digit1, Key::Digit2, Key::Digit3, Key::Digit4];
        for (k, mode) in digits.into_iter().zip(PrimitiveMode::ALL) {
            assert_eq!(
                command(&mut input, key(k, KeyState::Pressed)),
                Some(Command::SetMode(mode))
            );
        }
        assert_eq!(command(&mut input, key(Key::Digit5, KeyState::Pressed)), None);
        assert_eq!(command(&mut input, key(Key::Digit9, KeyState::Pressed)), None);
    }

    #[test]
    fn escape_and_close_exit() {
        let mut input = InputState::default();
        assert_eq!(
            command(&mut input, key(Key::Escape, KeyState::Pressed)),
            Some(Command::Exit)
        );
        assert_eq!(
            command(&mut input, InputEvent::CloseRequested),
            Some(Command::Exit)
        );
    }

    #[test]
    fn releases_do_nothing() {
        let mut input = InputState::default();
        assert_eq!(command(&mut input, key(Key::R, KeyState::Released)), None);
        assert_eq!(
            command(&mut input, click(MouseButton::Left, MouseButtonState::Released)),
            None
        );
    }

    #[test]
    fn r_selects_red() {
        let mut input = InputState::default();
        assert_eq!(
            command(&mut input, key(Key::R, KeyState::Pressed)),
            Some(Command::SetColor(Rgba8::RED))
        );
    }

    #[test]
    fn slash_needs_left_shift() {
        let mut input = InputState::default();
        assert_eq!(command(&mut input, key(Key::Slash, KeyState::Pressed)), None);

        command(&mut input, key(Key::ShiftRight, KeyState::Pressed));
        assert_eq!(command(&mut input, key(Key::Slash, KeyState::Pressed)), None);

        command(&mut input, key(Key::ShiftLeft, KeyState::Pressed));
        assert_eq!(
            command(&mut input, key(Key::Slash, KeyState::Pressed)),
            Some(Command::SetColor(TRANSLUCENT_GRAY))
        );
    }

    #[test]
    fn any_button_press_adds_a_vertex_at_the_pointer() {
        let mut input = InputState::default();
        for button in [MouseButton::Left, MouseButton::Right, MouseButton::Middle] {
            assert_eq!(
                command(&mut input, click(button, MouseButtonState::Pressed)),
                Some(Command::AddVertex(Vec2::new(12.5, 7.0)))
            );
        }
    }

    #[test]
    fn other_keys_are_ignored() {
        let mut input = InputState::default();
        assert_eq!(command(&mut input, key(Key::A, KeyState::Pressed)), None);
        assert_eq!(command(&mut input, InputEvent::Focused(true)), None);
        assert_eq!(command(&mut input, InputEvent::PointerLeft), None);
    }
}
