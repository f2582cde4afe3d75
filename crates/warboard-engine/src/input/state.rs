use super::frame::InputFrame;
use super::types::{
    InputEvent,
    PointerButtonEvent,
    PointerMoveEvent,
    TouchEvent,
    TouchPhase,
};

/// Pointer tracking for a single window.
///
/// Platform translation reads it to position button presses and to follow a
/// single finger.
#[derive(Debug, Default)]
pub struct InputState {
    /// Pointer position in logical pixels; `None` until the cursor enters
    /// and again after it leaves.
    pub pointer_pos: Option<(f32, f32)>,

    /// Finger currently acting as the pointer.
    pub active_touch: Option<u64>,
}

impl InputState {
    /// Applies an input event to the tracked pointer and appends it to `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match &ev {
            InputEvent::Focused(false) => {
                // Touch end is not delivered once focus is gone.
                self.active_touch = None;
            }
            InputEvent::Focused(true) => {}

            InputEvent::PointerMoved(PointerMoveEvent { x, y })
            | InputEvent::PointerButton(PointerButtonEvent { x, y, .. }) => {
                self.pointer_pos = Some((*x, *y));
            }

            InputEvent::PointerLeft => {
                self.pointer_pos = None;
            }

            InputEvent::Touch(TouchEvent { id, phase, x, y }) => {
                self.pointer_pos = Some((*x, *y));
                match phase {
                    TouchPhase::Started => self.active_touch = Some(*id),
                    TouchPhase::Moved => {}
                    TouchPhase::Ended | TouchPhase::Cancelled => self.active_touch = None,
                }
            }
        }

        frame.push_event(ev);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{ButtonState, MouseButton};

    fn press(x: f32, y: f32) -> InputEvent {
        InputEvent::PointerButton(PointerButtonEvent {
            button: MouseButton::Left,
            state: ButtonState::Pressed,
            x,
            y,
        })
    }

    fn touch(id: u64, phase: TouchPhase) -> InputEvent {
        InputEvent::Touch(TouchEvent { id, phase, x: 3.0, y: 4.0 })
    }

    // ── pointer ───────────────────────────────────────────────────────────

    #[test]
    fn events_are_kept_in_arrival_order() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, press(1.0, 2.0));
        state.apply_event(&mut frame, InputEvent::PointerLeft);
        assert_eq!(frame.events, vec![press(1.0, 2.0), InputEvent::PointerLeft]);
    }

    #[test]
    fn button_updates_position() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, press(1.0, 2.0));
        assert_eq!(state.pointer_pos, Some((1.0, 2.0)));
    }

    #[test]
    fn leave_forgets_position() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, InputEvent::PointerMoved(PointerMoveEvent { x: 5.0, y: 6.0 }));
        assert_eq!(state.pointer_pos, Some((5.0, 6.0)));
        state.apply_event(&mut frame, InputEvent::PointerLeft);
        assert_eq!(state.pointer_pos, None);
    }

    #[test]
    fn frame_clear_keeps_state() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, press(7.0, 8.0));
        frame.clear();
        assert!(frame.events.is_empty());
        assert_eq!(state.pointer_pos, Some((7.0, 8.0)));
    }

    // ── touch ─────────────────────────────────────────────────────────────

    #[test]
    fn touch_tracks_active_finger() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, touch(7, TouchPhase::Started));
        assert_eq!(state.active_touch, Some(7));
        assert_eq!(state.pointer_pos, Some((3.0, 4.0)));
        state.apply_event(&mut frame, touch(7, TouchPhase::Cancelled));
        assert_eq!(state.active_touch, None);
    }

    #[test]
    fn focus_loss_drops_active_finger() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, touch(2, TouchPhase::Started));
        state.apply_event(&mut frame, InputEvent::Focused(true));
        assert_eq!(state.active_touch, Some(2));
        state.apply_event(&mut frame, InputEvent::Focused(false));
        assert_eq!(state.active_touch, None);
    }
}
