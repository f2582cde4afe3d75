use warboard_board::camera::screen_to_ndc;
use warboard_board::{Board, BoardConfig, InteractionController, LabelStyle, SceneService};
use warboard_engine::coords::{Vec2, Viewport};
use warboard_engine::core::{App, AppControl, FrameCtx};
use warboard_engine::input::{
    ButtonState, InputEvent, MouseButton, PointerButtonEvent, PointerMoveEvent, TouchEvent,
    TouchPhase,
};
use warboard_engine::paint::Color;
use warboard_engine::render::shapes::{CircleRenderer, RectRenderer, TextRenderer};
use warboard_engine::scene::DrawList;
use warboard_engine::text::{FontId, FontSystem};
use warboard_engine::window::CursorIcon;

use crate::stats::FrameStats;

/// Pointer gesture steps the controller understands. Positions are logical
/// pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
enum PointerAction {
    Move(Vec2),
    Down(Vec2),
    Up,
    Leave,
    Cancel,
}

/// Primary mouse button and the primary finger drive the board; other
/// buttons are ignored.
fn pointer_action(event: &InputEvent) -> Option<PointerAction> {
    match *event {
        InputEvent::PointerMoved(PointerMoveEvent { x, y }) => Some(PointerAction::Move(Vec2::new(x, y))),

        InputEvent::PointerButton(PointerButtonEvent { button: MouseButton::Left, state, x, y }) => {
            Some(match state {
                ButtonState::Pressed => PointerAction::Down(Vec2::new(x, y)),
                ButtonState::Released => PointerAction::Up,
            })
        }
        InputEvent::PointerButton(_) => None,

        InputEvent::Touch(TouchEvent { phase, x, y, .. }) => Some(match phase {
            TouchPhase::Started => PointerAction::Down(Vec2::new(x, y)),
            TouchPhase::Moved => PointerAction::Move(Vec2::new(x, y)),
            TouchPhase::Ended => PointerAction::Up,
            TouchPhase::Cancelled => PointerAction::Cancel,
        }),

        InputEvent::PointerLeft => Some(PointerAction::Leave),
        InputEvent::Focused(false) => Some(PointerAction::Cancel),
        InputEvent::Focused(true) => None,
    }
}

/// The board application: one scene, one controller, a renderer per shape kind.
pub struct BoardApp {
    board: Board,
    controller: InteractionController,
    background: Color,

    draw_list: DrawList,
    rect_renderer: RectRenderer,
    circle_renderer: CircleRenderer,
    text_renderer: TextRenderer,
    fonts: FontSystem,

    stats: FrameStats,
}

impl BoardApp {
    /// `label_font` must come from `fonts`; without it buttons stay unlabelled.
    pub fn new(config: &BoardConfig, aspect: f32, fonts: FontSystem, label_font: Option<FontId>) -> Self {
        let mut board = Board::from_config(config, aspect);
        board.set_labels(label_font.map(LabelStyle::new));
        Self {
            board,
            controller: InteractionController::new(),
            background: config.background,
            draw_list: DrawList::new(),
            rect_renderer: RectRenderer::new(),
            circle_renderer: CircleRenderer::new(),
            text_renderer: TextRenderer::new(),
            fonts,
            stats: FrameStats::default(),
        }
    }

    fn apply(&mut self, action: PointerAction, viewport: Viewport) {
        match action {
            PointerAction::Move(px) => {
                self.controller.on_pointer_move(screen_to_ndc(px, viewport), &mut self.board)
            }
            PointerAction::Down(px) => {
                self.controller.on_pointer_down(screen_to_ndc(px, viewport), &mut self.board)
            }
            PointerAction::Up => self.controller.on_pointer_up(),
            PointerAction::Leave => self.controller.on_pointer_leave(),
            PointerAction::Cancel => self.controller.on_pointer_cancel(),
        }
    }
}

impl App for BoardApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let viewport = ctx.window.viewport();
        if !viewport.is_valid() {
            // Minimized; nothing to draw and no meaningful pointer mapping.
            return AppControl::Continue;
        }
        self.board.camera_mut().set_viewport(viewport);

        // ── Input ─────────────────────────────────────────────────────────
        for action in ctx.input_frame.events.iter().filter_map(pointer_action) {
            self.apply(action, viewport);
        }

        ctx.window.set_cursor(if self.controller.is_dragging() {
            CursorIcon::Grabbing
        } else {
            CursorIcon::Default
        });

        if let Some(fps) = self.stats.tick(ctx.time.now) {
            log::debug!("{fps:.1} fps, {} objects", self.board.len());
        }

        // ── Paint + render ────────────────────────────────────────────────
        self.draw_list.clear();
        self.board
            .render(&mut self.draw_list, viewport, self.controller.selected());

        let dl = &mut self.draw_list;
        let rects = &mut self.rect_renderer;
        let circles = &mut self.circle_renderer;
        let text = &mut self.text_renderer;
        let fonts = &self.fonts;

        ctx.render(self.background, |rctx, target| {
            rects.render(rctx, target, dl);
            circles.render(rctx, target, dl);
            text.render(rctx, target, dl, fonts);
        })
    }

    fn on_exit(&mut self) {
        log::info!("session ended with {} bases on the table", self.board.models().count());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn button(button: MouseButton, state: ButtonState) -> InputEvent {
        InputEvent::PointerButton(PointerButtonEvent { button, state, x: 10.0, y: 20.0 })
    }

    fn touch(phase: TouchPhase) -> InputEvent {
        InputEvent::Touch(TouchEvent { id: 0, phase, x: 1.0, y: 2.0 })
    }

    // ── mouse ─────────────────────────────────────────────────────────────

    #[test]
    fn primary_button_maps_to_down_and_up() {
        assert_eq!(
            pointer_action(&button(MouseButton::Left, ButtonState::Pressed)),
            Some(PointerAction::Down(Vec2::new(10.0, 20.0)))
        );
        assert_eq!(
            pointer_action(&button(MouseButton::Left, ButtonState::Released)),
            Some(PointerAction::Up)
        );
    }

    #[test]
    fn secondary_buttons_are_ignored() {
        assert_eq!(pointer_action(&button(MouseButton::Right, ButtonState::Pressed)), None);
        assert_eq!(pointer_action(&button(MouseButton::Middle, ButtonState::Released)), None);
    }

    #[test]
    fn leave_and_focus_loss() {
        assert_eq!(pointer_action(&InputEvent::PointerLeft), Some(PointerAction::Leave));
        assert_eq!(pointer_action(&InputEvent::Focused(false)), Some(PointerAction::Cancel));
        assert_eq!(pointer_action(&InputEvent::Focused(true)), None);
    }

    // ── touch ─────────────────────────────────────────────────────────────

    #[test]
    fn touch_phases_map_to_gesture() {
        assert_eq!(pointer_action(&touch(TouchPhase::Started)), Some(PointerAction::Down(Vec2::new(1.0, 2.0))));
        assert_eq!(pointer_action(&touch(TouchPhase::Moved)), Some(PointerAction::Move(Vec2::new(1.0, 2.0))));
        assert_eq!(pointer_action(&touch(TouchPhase::Ended)), Some(PointerAction::Up));
        assert_eq!(pointer_action(&touch(TouchPhase::Cancelled)), Some(PointerAction::Cancel));
    }

    // ── wiring ────────────────────────────────────────────────────────────

    #[test]
    fn click_on_first_red_button_spawns_base() {
        let viewport = Viewport::new(1280.0, 720.0);
        let mut app = BoardApp::new(&BoardConfig::default(), 1280.0 / 720.0, FontSystem::new(), None);
        let ndc = app.board.project(warboard_engine::coords::Vec3::new(36.0, 25.0, 1.0));
        let px = warboard_board::camera::ndc_to_screen(ndc, viewport);

        app.apply(PointerAction::Down(px), viewport);
        app.apply(PointerAction::Up, viewport);
        assert_eq!(app.board.models().count(), 1);
        assert!(!app.controller.is_dragging());
    }

    #[test]
    fn label_font_reaches_the_board() {
        let config = BoardConfig::default();
        let plain = BoardApp::new(&config, 1280.0 / 720.0, FontSystem::new(), None);
        assert!(plain.board.labels().is_none());

        let font = FontId::from_index(0);
        let labelled = BoardApp::new(&config, 1280.0 / 720.0, FontSystem::new(), Some(font));
        assert_eq!(labelled.board.labels().map(|l| l.font), Some(font));
    }

    #[test]
    fn drag_follows_pointer_then_releases_on_cancel() {
        let viewport = Viewport::new(1280.0, 720.0);
        let mut app = BoardApp::new(&BoardConfig::default(), 1280.0 / 720.0, FontSystem::new(), None);
        let origin = warboard_board::camera::ndc_to_screen(Vec2::zero(), viewport);
        let spawn = warboard_board::Spawn {
            base_mm: 32.0,
            color: Color::white(),
            at: warboard_engine::coords::Vec3::new(0.0, 0.0, 1.0),
        };
        let id = spawn.activate(&mut app.board);

        app.apply(PointerAction::Down(origin), viewport);
        app.apply(PointerAction::Move(origin + Vec2::new(120.0, 0.0)), viewport);
        let x = app.board.object(id).map(|o| o.position.x).unwrap();
        assert!((x - 10.0).abs() < 1e-3);

        app.apply(PointerAction::Cancel, viewport);
        assert!(!app.controller.is_dragging());
    }
}
