use super::types::InputEvent;

/// Events delivered during one frame, in arrival order.
///
/// Filled by `InputState::apply_event` and cleared by the runtime after the
/// app's `on_frame` returns. A press, a move and a release can all land in
/// the same frame, so consumers walk `events` rather than sampling state.
#[derive(Debug, Default)]
pub struct InputFrame {
    pub events: Vec<InputEvent>,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn push_event(&mut self, ev: InputEvent) {
        self.events.push(ev);
    }
}
