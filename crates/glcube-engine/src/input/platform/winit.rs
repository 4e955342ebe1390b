use winit::event::{ElementState, MouseButton, TouchPhase as WinitTouchPhase, WindowEvent};
use winit::keyboard::{Key as WinitKey, NamedKey};

use crate::input::{InputEvent, InputState, Key, KeyEvent, KeyState, TouchPhase};

/// Translates a winit `WindowEvent` into engine `InputEvent`s.
///
/// With `mouse_as_touch`, the left mouse button and drags drive the primary
/// touch point. Positions are window coordinates in physical pixels. Events
/// not represented by the input subsystem yield nothing.
pub fn translate_window_event(
    state: &mut InputState,
    event: &WindowEvent,
    mouse_as_touch: bool,
) -> Vec<InputEvent> {
    match event {
        WindowEvent::KeyboardInput { event, .. } => {
            let key_state = match event.state {
                ElementState::Pressed => KeyState::Down,
                ElementState::Released => KeyState::Up,
            };

            vec![InputEvent::Key(KeyEvent {
                key:    map_key(&event.logical_key),
                state:  key_state,
                repeat: event.repeat,
            })]
        }

        WindowEvent::Touch(touch) => {
            let (x, y) = (touch.location.x as f32, touch.location.y as f32);
            state
                .touch(touch.id, map_touch_phase(touch.phase), x, y)
                .map(InputEvent::Touch)
                .into_iter()
                .collect()
        }

        WindowEvent::MouseInput { state: st, button: MouseButton::Left, .. } if mouse_as_touch => {
            state
                .mouse_button(*st == ElementState::Pressed)
                .into_iter()
                .map(InputEvent::Touch)
                .collect()
        }

        WindowEvent::CursorMoved { position, .. } if mouse_as_touch => {
            state
                .cursor_moved(position.x as f32, position.y as f32)
                .map(InputEvent::Touch)
                .into_iter()
                .collect()
        }

        WindowEvent::CursorLeft { .. } if mouse_as_touch => {
            state.cursor_left();
            Vec::new()
        }

        _ => Vec::new(),
    }
}

pub fn map_touch_phase(phase: WinitTouchPhase) -> TouchPhase {
    match phase {
        WinitTouchPhase::Started => TouchPhase::Pressed,
        WinitTouchPhase::Moved => TouchPhase::Moved,
        WinitTouchPhase::Ended => TouchPhase::Released,
        WinitTouchPhase::Cancelled => TouchPhase::Interrupted,
    }
}

/// Maps a winit logical key to its symbolic name.
pub fn map_key(key: &WinitKey) -> Key {
    match key {
        WinitKey::Named(named) => match named {
            NamedKey::Escape => Key::Escape,
            // Android reports its back button as a browser/navigation key.
            NamedKey::GoBack | NamedKey::BrowserBack => Key::Back,
            NamedKey::ArrowUp => Key::Up,
            NamedKey::ArrowDown => Key::Down,
            NamedKey::ArrowLeft => Key::Left,
            NamedKey::ArrowRight => Key::Right,
            other => Key::Other(format!("{other:?}")),
        },
        WinitKey::Character(text) => Key::Other(text.to_string()),
        WinitKey::Unidentified(native) => Key::Other(format!("{native:?}")),
        WinitKey::Dead(ch) => Key::Other(format!("Dead({ch:?})")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_map_to_directions() {
        assert_eq!(map_key(&WinitKey::Named(NamedKey::ArrowUp)), Key::Up);
        assert_eq!(map_key(&WinitKey::Named(NamedKey::ArrowDown)), Key::Down);
        assert_eq!(map_key(&WinitKey::Named(NamedKey::ArrowLeft)), Key::Left);
        assert_eq!(map_key(&WinitKey::Named(NamedKey::ArrowRight)), Key::Right);
    }

    #[test]
    fn exit_keys() {
        assert_eq!(map_key(&WinitKey::Named(NamedKey::Escape)), Key::Escape);
        assert_eq!(map_key(&WinitKey::Named(NamedKey::GoBack)), Key::Back);
        assert_eq!(map_key(&WinitKey::Named(NamedKey::BrowserBack)), Key::Back);
    }

    #[test]
    fn other_keys_keep_a_name() {
        assert_eq!(map_key(&WinitKey::Named(NamedKey::Enter)), Key::Other("Enter".to_string()));
        assert_eq!(map_key(&WinitKey::Character("a".into())), Key::Other("a".to_string()));
    }

    #[test]
    fn touch_phases() {
        assert_eq!(map_touch_phase(WinitTouchPhase::Started), TouchPhase::Pressed);
        assert_eq!(map_touch_phase(WinitTouchPhase::Moved), TouchPhase::Moved);
        assert_eq!(map_touch_phase(WinitTouchPhase::Ended), TouchPhase::Released);
        assert_eq!(map_touch_phase(WinitTouchPhase::Cancelled), TouchPhase::Interrupted);
    }
}
