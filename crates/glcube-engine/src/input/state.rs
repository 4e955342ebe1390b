use super::types::{TouchEvent, TouchPhase};

/// Touch bookkeeping for a single window.
///
/// Maps platform touch ids onto point slots and tracks the emulated touch
/// driven by the left mouse button.
#[derive(Debug, Default)]
pub struct InputState {
    /// Platform touch id per slot; `None` marks a free slot.
    slots: Vec<Option<u64>>,

    /// Whether the left mouse button currently holds the emulated touch.
    pub mouse_down: bool,

    /// Last cursor position in physical pixels.
    pub cursor_pos: Option<(f32, f32)>,
}

impl InputState {
    /// Number of touches currently held.
    #[cfg(test)]
    fn active_touches(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Assigns a platform touch to a slot and returns the transition.
    ///
    /// Returns `None` for moves/ends of a touch that was never started.
    pub fn touch(&mut self, id: u64, phase: TouchPhase, x: f32, y: f32) -> Option<TouchEvent> {
        let point = match phase {
            TouchPhase::Pressed => self.acquire(id),
            TouchPhase::Moved => self.slot_of(id)?,
            TouchPhase::Released | TouchPhase::Interrupted => self.release(id)?,
        };

        Some(TouchEvent { point, phase, x, y })
    }

    /// Left mouse button transition, emulated as the primary touch point.
    ///
    /// A press is preceded by a `Moved` at the cursor position so the
    /// receiver's previous point is current before the touch goes down.
    pub fn mouse_button(&mut self, pressed: bool) -> Vec<TouchEvent> {
        if pressed == self.mouse_down {
            return Vec::new();
        }
        self.mouse_down = pressed;

        let (x, y) = self.cursor_pos.unwrap_or((0.0, 0.0));
        if pressed {
            vec![
                TouchEvent::primary(TouchPhase::Moved, x, y),
                TouchEvent::primary(TouchPhase::Pressed, x, y),
            ]
        } else {
            vec![TouchEvent::primary(TouchPhase::Released, x, y)]
        }
    }

    /// Cursor motion. Only a held button turns it into touch motion.
    pub fn cursor_moved(&mut self, x: f32, y: f32) -> Option<TouchEvent> {
        self.cursor_pos = Some((x, y));
        self.mouse_down
            .then(|| TouchEvent::primary(TouchPhase::Moved, x, y))
    }

    /// Cursor left the window.
    ///
    /// A held button stays held: the platform keeps the pointer grabbed and
    /// still delivers the release.
    pub fn cursor_left(&mut self) {
        if !self.mouse_down {
            self.cursor_pos = None;
        }
    }

    fn acquire(&mut self, id: u64) -> usize {
        if let Some(slot) = self.slot_of(id) {
            return slot;
        }
        match self.slots.iter().position(Option::is_none) {
            Some(free) => {
                self.slots[free] = Some(id);
                free
            }
            None => {
                self.slots.push(Some(id));
                self.slots.len() - 1
            }
        }
    }

    fn release(&mut self, id: u64) -> Option<usize> {
        let slot = self.slot_of(id)?;
        self.slots[slot] = None;
        while matches!(self.slots.last(), Some(None)) {
            self.slots.pop();
        }
        Some(slot)
    }

    fn slot_of(&self, id: u64) -> Option<usize> {
        self.slots.iter().position(|s| *s == Some(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── touch slots ───────────────────────────────────────────────────────

    #[test]
    fn first_touch_is_primary() {
        let mut s = InputState::default();
        let ev = s.touch(42, TouchPhase::Pressed, 1.0, 2.0).unwrap();
        assert_eq!(ev, TouchEvent::primary(TouchPhase::Pressed, 1.0, 2.0));
        assert_eq!(s.active_touches(), 1);
    }

    #[test]
    fn second_touch_takes_next_slot() {
        let mut s = InputState::default();
        s.touch(1, TouchPhase::Pressed, 0.0, 0.0);
        let ev = s.touch(2, TouchPhase::Pressed, 0.0, 0.0).unwrap();
        assert_eq!(ev.point, 1);
    }

    #[test]
    fn secondary_keeps_slot_when_primary_lifts() {
        let mut s = InputState::default();
        s.touch(1, TouchPhase::Pressed, 0.0, 0.0);
        s.touch(2, TouchPhase::Pressed, 0.0, 0.0);

        let up = s.touch(1, TouchPhase::Released, 0.0, 0.0).unwrap();
        assert_eq!(up.point, 0);

        let mv = s.touch(2, TouchPhase::Moved, 5.0, 5.0).unwrap();
        assert_eq!(mv.point, 1);

        // The freed primary slot is reused by the next touch.
        let again = s.touch(3, TouchPhase::Pressed, 0.0, 0.0).unwrap();
        assert_eq!(again.point, 0);
    }

    #[test]
    fn unknown_touch_moves_are_dropped() {
        let mut s = InputState::default();
        assert!(s.touch(9, TouchPhase::Moved, 0.0, 0.0).is_none());
        assert!(s.touch(9, TouchPhase::Released, 0.0, 0.0).is_none());
    }

    #[test]
    fn interrupted_frees_the_slot() {
        let mut s = InputState::default();
        s.touch(1, TouchPhase::Pressed, 0.0, 0.0);
        let ev = s.touch(1, TouchPhase::Interrupted, 0.0, 0.0).unwrap();
        assert_eq!(ev.phase, TouchPhase::Interrupted);
        assert_eq!(s.active_touches(), 0);
    }

    // ── mouse emulation ───────────────────────────────────────────────────

    #[test]
    fn mouse_press_primes_position_then_presses() {
        let mut s = InputState::default();
        assert!(s.cursor_moved(10.5, 20.5).is_none());

        let events = s.mouse_button(true);
        assert_eq!(
            events,
            vec![
                TouchEvent::primary(TouchPhase::Moved, 10.5, 20.5),
                TouchEvent::primary(TouchPhase::Pressed, 10.5, 20.5),
            ]
        );
        assert!(s.mouse_down);
    }

    #[test]
    fn hover_without_press_is_not_touch_motion() {
        let mut s = InputState::default();
        assert!(s.cursor_moved(1.0, 1.0).is_none());
        assert!(s.cursor_moved(2.0, 3.0).is_none());
        assert_eq!(s.cursor_pos, Some((2.0, 3.0)));
    }

    #[test]
    fn drag_is_touch_motion() {
        let mut s = InputState::default();
        s.mouse_button(true);
        let ev = s.cursor_moved(4.0, 5.0).unwrap();
        assert_eq!(ev, TouchEvent::primary(TouchPhase::Moved, 4.0, 5.0));
    }

    #[test]
    fn duplicate_mouse_transitions_are_dropped() {
        let mut s = InputState::default();
        assert!(s.mouse_button(false).is_empty());
        assert_eq!(s.mouse_button(true).len(), 2);
        assert!(s.mouse_button(true).is_empty());
        assert_eq!(s.mouse_button(false)[0].phase, TouchPhase::Released);
    }

    #[test]
    fn release_outside_the_window_still_releases() {
        let mut s = InputState::default();
        s.cursor_moved(10.0, 10.0);
        s.mouse_button(true);
        s.cursor_moved(20.0, 10.0);
        s.cursor_left();

        let up = s.mouse_button(false);
        assert_eq!(up, vec![TouchEvent::primary(TouchPhase::Released, 20.0, 10.0)]);
        assert!(!s.mouse_down);

        // Back to hovering: no more touch motion.
        assert!(s.cursor_moved(300.0, 10.0).is_none());
    }
}
