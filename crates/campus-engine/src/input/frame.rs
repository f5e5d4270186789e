use super::types::InputEvent;

/// Input events for the current frame.
///
/// `InputState` provides the current state (pointer position, modifiers).
/// `InputFrame` carries the events that arrived since the last frame, which
/// consumers replay in order so drags can start and stop mid-frame.
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Raw events in arrival order.
    pub events: Vec<InputEvent>,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn push_event(&mut self, ev: InputEvent) {
        self.events.push(ev);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
