use std::fmt;

/// Symbolic key, named the way the device's key events name them.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    /// Hardware back key (`XF86Back`).
    Back,
    Escape,
    Up,
    Down,
    Left,
    Right,
    /// Any other key, by its platform name.
    Other(String),
}

impl Key {
    /// Parses a symbolic key name. Unknown names become `Key::Other`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "XF86Back" => Key::Back,
            "Escape" => Key::Escape,
            "Up" => Key::Up,
            "Down" => Key::Down,
            "Left" => Key::Left,
            "Right" => Key::Right,
            other => Key::Other(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Key::Back => "XF86Back",
            Key::Escape => "Escape",
            Key::Up => "Up",
            Key::Down => "Down",
            Key::Left => "Left",
            Key::Right => "Right",
            Key::Other(name) => name,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Down,
    Up,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct KeyEvent {
    pub key:    Key,
    pub state:  KeyState,
    /// True when the platform reports an auto-repeat.
    pub repeat: bool,
}

impl KeyEvent {
    pub fn down(key: Key) -> Self {
        Self { key, state: KeyState::Down, repeat: false }
    }

    pub fn up(key: Key) -> Self {
        Self { key, state: KeyState::Up, repeat: false }
    }
}

/// Per-point touch transition.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TouchPhase {
    Pressed,
    Released,
    Moved,
    /// The platform cancelled the touch (e.g. a system gesture took over).
    Interrupted,
}

/// Touch transition of a single point.
///
/// `point` is the slot index of the touch: 0 is the primary point, further
/// concurrent touches take the next free slot. Positions are window
/// coordinates in physical pixels; the default window is borderless
/// fullscreen, where they coincide with screen coordinates.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TouchEvent {
    pub point: usize,
    pub phase: TouchPhase,
    pub x:     f32,
    pub y:     f32,
}

impl TouchEvent {
    pub fn primary(phase: TouchPhase, x: f32, y: f32) -> Self {
        Self { point: 0, phase, x, y }
    }
}

/// Platform-agnostic input events emitted by the runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Key(KeyEvent),
    Touch(TouchEvent),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbolic_names_round_trip() {
        for name in ["XF86Back", "Escape", "Up", "Down", "Left", "Right", "Return"] {
            assert_eq!(Key::from_name(name).name(), name);
        }
    }

    #[test]
    fn unknown_name_is_other() {
        assert_eq!(Key::from_name("F1"), Key::Other("F1".to_string()));
    }

    #[test]
    fn names_are_case_sensitive() {
        assert_eq!(Key::from_name("up"), Key::Other("up".to_string()));
    }
}
