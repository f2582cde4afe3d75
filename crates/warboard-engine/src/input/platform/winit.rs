use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton as WinitMouseButton, Touch, TouchPhase as WinitTouchPhase, WindowEvent};

use crate::input::{
    ButtonState, InputEvent, InputState, MouseButton, PointerButtonEvent, PointerMoveEvent,
    TouchEvent, TouchPhase,
};

/// Translates a winit `WindowEvent` into an engine `InputEvent`.
///
/// `scale_factor` converts physical positions to logical pixels. Returns
/// `None` for events the input subsystem does not represent, and for touches
/// by any finger other than the one currently acting as the pointer.
pub(crate) fn translate_window_event(
    scale_factor: f64,
    state: &InputState,
    event: &WindowEvent,
) -> Option<InputEvent> {
    match event {
        WindowEvent::Focused(f) => Some(InputEvent::Focused(*f)),

        WindowEvent::CursorLeft { .. } => Some(InputEvent::PointerLeft),

        WindowEvent::CursorMoved { position, .. } => {
            let (x, y) = to_logical_f32(scale_factor, *position);
            Some(InputEvent::PointerMoved(PointerMoveEvent { x, y }))
        }

        WindowEvent::MouseInput { state: st, button, .. } => {
            pointer_button(state.pointer_pos, map_mouse_button(*button), map_button_state(*st))
        }

        WindowEvent::Touch(Touch { id, phase, location, .. }) => {
            let phase = map_touch_phase(*phase);
            if !is_primary_touch(state.active_touch, *id, phase) {
                return None;
            }
            let (x, y) = to_logical_f32(scale_factor, *location);
            Some(InputEvent::Touch(TouchEvent { id: *id, phase, x, y }))
        }

        _ => None,
    }
}

/// winit 0.30 has no cursor query, so presses take the tracked pointer
/// position. A press with no known position (before the first move, or after
/// the cursor left) is dropped.
fn pointer_button(
    pointer_pos: Option<(f32, f32)>,
    button: MouseButton,
    state: ButtonState,
) -> Option<InputEvent> {
    let (x, y) = pointer_pos?;
    Some(InputEvent::PointerButton(PointerButtonEvent { button, state, x, y }))
}

/// A new finger becomes the pointer only when none is active; afterwards only
/// that finger is followed.
fn is_primary_touch(active: Option<u64>, id: u64, phase: TouchPhase) -> bool {
    match phase {
        TouchPhase::Started => active.is_none(),
        _ => active == Some(id),
    }
}

fn to_logical_f32(scale_factor: f64, pos: PhysicalPosition<f64>) -> (f32, f32) {
    let logical = pos.to_logical::<f64>(scale_factor);
    (logical.x as f32, logical.y as f32)
}

fn map_button_state(st: ElementState) -> ButtonState {
    match st {
        ElementState::Pressed => ButtonState::Pressed,
        ElementState::Released => ButtonState::Released,
    }
}

fn map_mouse_button(b: WinitMouseButton) -> MouseButton {
    match b {
        WinitMouseButton::Left => MouseButton::Left,
        WinitMouseButton::Right => MouseButton::Right,
        WinitMouseButton::Middle => MouseButton::Middle,
        WinitMouseButton::Back => MouseButton::Other(3),
        WinitMouseButton::Forward => MouseButton::Other(4),
        WinitMouseButton::Other(v) => MouseButton::Other(v),
    }
}

fn map_touch_phase(p: WinitTouchPhase) -> TouchPhase {
    match p {
        WinitTouchPhase::Started => TouchPhase::Started,
        WinitTouchPhase::Moved => TouchPhase::Moved,
        WinitTouchPhase::Ended => TouchPhase::Ended,
        WinitTouchPhase::Cancelled => TouchPhase::Cancelled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── touch filtering ───────────────────────────────────────────────────

    #[test]
    fn first_finger_becomes_primary() {
        assert!(is_primary_touch(None, 1, TouchPhase::Started));
        assert!(!is_primary_touch(Some(1), 2, TouchPhase::Started));
    }

    #[test]
    fn only_primary_finger_is_followed() {
        assert!(is_primary_touch(Some(1), 1, TouchPhase::Moved));
        assert!(!is_primary_touch(Some(1), 2, TouchPhase::Moved));
        assert!(!is_primary_touch(None, 1, TouchPhase::Ended));
        assert!(is_primary_touch(Some(1), 1, TouchPhase::Cancelled));
    }

    // ── buttons ───────────────────────────────────────────────────────────

    #[test]
    fn press_uses_tracked_position() {
        assert_eq!(
            pointer_button(Some((12.0, 34.0)), MouseButton::Left, ButtonState::Pressed),
            Some(InputEvent::PointerButton(PointerButtonEvent {
                button: MouseButton::Left,
                state: ButtonState::Pressed,
                x: 12.0,
                y: 34.0,
            }))
        );
    }

    #[test]
    fn press_without_known_position_is_dropped() {
        assert_eq!(pointer_button(None, MouseButton::Left, ButtonState::Pressed), None);
        assert_eq!(pointer_button(None, MouseButton::Left, ButtonState::Released), None);
    }

    #[test]
    fn press_after_cursor_left_is_dropped() {
        let mut state = InputState::default();
        let mut frame = crate::input::InputFrame::default();
        state.apply_event(&mut frame, InputEvent::PointerMoved(PointerMoveEvent { x: 1.0, y: 1.0 }));
        state.apply_event(&mut frame, InputEvent::PointerLeft);
        assert_eq!(pointer_button(state.pointer_pos, MouseButton::Left, ButtonState::Pressed), None);
    }

    // ── mapping ───────────────────────────────────────────────────────────

    #[test]
    fn physical_positions_become_logical() {
        assert_eq!(to_logical_f32(2.0, PhysicalPosition::new(100.0, 50.0)), (50.0, 25.0));
        assert_eq!(to_logical_f32(1.0, PhysicalPosition::new(3.0, 4.0)), (3.0, 4.0));
    }

    #[test]
    fn mouse_buttons_map() {
        assert_eq!(map_mouse_button(WinitMouseButton::Left), MouseButton::Left);
        assert_eq!(map_mouse_button(WinitMouseButton::Other(9)), MouseButton::Other(9));
        assert_eq!(map_button_state(ElementState::Released), ButtonState::Released);
        assert_eq!(map_touch_phase(WinitTouchPhase::Cancelled), TouchPhase::Cancelled);
    }
}
