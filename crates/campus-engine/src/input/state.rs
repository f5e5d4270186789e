use crate::coords::Vec2;

use super::frame::InputFrame;
use super::types::{InputEvent, Modifiers, PointerButtonEvent, PointerMoveEvent};

/// Current input state for the window.
///
/// Winit reports wheel and button events without a position or modifiers, so
/// the translation layer reads both from here.
#[derive(Debug, Default)]
pub struct InputState {
    pub modifiers: Modifiers,

    /// Pointer position in logical pixels; `None` while outside the window.
    pub pointer_pos: Option<Vec2>,
}

impl InputState {
    /// Applies a platform-agnostic input event to the current state and records it in `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match &ev {
            InputEvent::ModifiersChanged(m) => self.modifiers = *m,
            InputEvent::PointerMoved(PointerMoveEvent { x, y }) => {
                self.pointer_pos = Some(Vec2::new(*x, *y));
            }
            InputEvent::PointerLeft => self.pointer_pos = None,
            InputEvent::Key { modifiers, .. } | InputEvent::MouseWheel { modifiers, .. } => {
                self.modifiers = *modifiers;
            }
            InputEvent::PointerButton(PointerButtonEvent { x, y, modifiers, .. }) => {
                self.pointer_pos = Some(Vec2::new(*x, *y));
                self.modifiers = *modifiers;
            }
            InputEvent::Focused(_) => {}
        }

        frame.push_event(ev);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Key, KeyState, MouseButton, MouseButtonState};

    fn moved(x: f32, y: f32) -> InputEvent {
        InputEvent::PointerMoved(PointerMoveEvent { x, y })
    }

    fn shift() -> Modifiers {
        Modifiers { shift: true, ..Modifiers::default() }
    }

    // ── pointer ───────────────────────────────────────────────────────────

    #[test]
    fn pointer_follows_moves_and_leaves() {
        let mut s = InputState::default();
        let mut f = InputFrame::default();
        s.apply_event(&mut f, moved(10.0, 10.0));
        s.apply_event(&mut f, moved(20.0, 15.0));
        assert_eq!(s.pointer_pos, Some(Vec2::new(20.0, 15.0)));

        s.apply_event(&mut f, InputEvent::PointerLeft);
        assert_eq!(s.pointer_pos, None);
        assert_eq!(f.events.len(), 3);
    }

    #[test]
    fn button_updates_pointer_and_modifiers() {
        let mut s = InputState::default();
        let mut f = InputFrame::default();
        s.apply_event(
            &mut f,
            InputEvent::PointerButton(PointerButtonEvent {
                button: MouseButton::Right,
                state: MouseButtonState::Pressed,
                x: 1.0,
                y: 2.0,
                modifiers: shift(),
            }),
        );
        assert_eq!(s.pointer_pos, Some(Vec2::new(1.0, 2.0)));
        assert_eq!(s.modifiers, shift());
    }

    // ── frame ─────────────────────────────────────────────────────────────

    #[test]
    fn events_keep_arrival_order_until_cleared() {
        let mut s = InputState::default();
        let mut f = InputFrame::default();
        let key = InputEvent::Key { key: Key::N, state: KeyState::Pressed, modifiers: shift(), code: 0, repeat: false };
        s.apply_event(&mut f, key.clone());
        s.apply_event(&mut f, InputEvent::Focused(false));
        assert_eq!(f.events, [key, InputEvent::Focused(false)]);
        assert_eq!(s.modifiers, shift());

        f.clear();
        assert!(f.is_empty());
    }
}
