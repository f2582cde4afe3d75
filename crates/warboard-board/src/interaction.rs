//! Selection and drag handling for pointer events.

use warboard_engine::coords::Vec2;

use crate::board::SceneService;
use crate::object::{ObjectId, Role};
use crate::pick::Picker;

/// Drag state of the controller.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        object: ObjectId,
        /// `object position - hit point`, fixed for the whole gesture.
        offset: Vec2,
    },
}

/// Turns pointer events (in normalized device coordinates) into selection
/// and drag moves on a scene.
///
/// At most one model is selected. Release, leave and cancel always drop the
/// selection.
#[derive(Debug, Clone, Default)]
pub struct InteractionController {
    pointer: Vec2,
    state: DragState,
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last pointer position seen, in normalized device coordinates.
    #[inline]
    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    #[inline]
    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn selected(&self) -> Option<ObjectId> {
        match self.state {
            DragState::Idle => None,
            DragState::Dragging { object, .. } => Some(object),
        }
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.selected().is_some()
    }

    /// Records the pointer and, while dragging, moves the selected object so
    /// it keeps its offset from the pointer.
    pub fn on_pointer_move<S>(&mut self, ndc: Vec2, scene: &mut S)
    where
        S: SceneService,
    {
        self.pointer = ndc;

        let DragState::Dragging { object, offset } = self.state else {
            return;
        };

        let world = scene.unproject(ndc);
        match scene.object_mut(object) {
            Some(o) => o.position = world.xy() + offset,
            None => {
                log::debug!("dragged object {object:?} left the scene");
                self.state = DragState::Idle;
            }
        }
    }

    /// Picks under `ndc`. The topmost model hit becomes the selection; every
    /// button hit is activated. Hitting nothing keeps the current selection.
    pub fn on_pointer_down<S>(&mut self, ndc: Vec2, scene: &mut S)
    where
        S: SceneService + Picker,
    {
        self.pointer = ndc;

        let ray = scene.camera().ray(ndc);
        let hits = scene.pick(&ray);
        let mut took_model = false;

        for hit in hits {
            let Some(object) = scene.object(hit.object) else {
                continue;
            };

            match &object.role {
                Role::Model if !took_model => {
                    let offset = object.position - hit.point.xy();
                    self.state = DragState::Dragging { object: hit.object, offset };
                    took_model = true;
                    log::debug!("selected {:?}", hit.object);
                }
                Role::Button(spawn) => {
                    let spawn = spawn.clone();
                    spawn.activate(scene);
                }
                _ => {}
            }
        }
    }

    pub fn on_pointer_up(&mut self) {
        self.release("up");
    }

    pub fn on_pointer_leave(&mut self) {
        self.release("leave");
    }

    pub fn on_pointer_cancel(&mut self) {
        self.release("cancel");
    }

    fn release(&mut self, cause: &str) {
        if let DragState::Dragging { object, .. } = self.state {
            log::debug!("released {object:?} on pointer {cause}");
        }
        self.state = DragState::Idle;
    }
}
