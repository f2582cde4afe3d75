//! Board to draw-list painting.
//!
//! World units are converted to logical pixels through the camera. World
//! rotation is counter-clockwise with +Y up; the draw list is +Y down, so
//! rotations flip sign on the way through.

use warboard_engine::coords::{Vec2, Vec3, Viewport};
use warboard_engine::paint::Color;
use warboard_engine::scene::{Border, DrawList, TextAlign, ZIndex};
use warboard_engine::text::FontId;

use crate::camera::OrthoCamera;
use crate::object::{SceneObject, Shape, Spawn};

/// Width of the selection ring, logical pixels.
pub const OUTLINE_PX: f32 = 3.0;
pub const GRID_LINE_PX: f32 = 1.0;
pub const LABEL_SIZE_PX: f32 = 16.0;
const LABEL_COLOR: u32 = 0x202020;

/// Font and look of the button size labels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LabelStyle {
    pub font: FontId,
    /// Logical pixels; labels do not scale with the board.
    pub size: f32,
    pub color: Color,
}

impl LabelStyle {
    pub fn new(font: FontId) -> Self {
        Self {
            font,
            size: LABEL_SIZE_PX,
            color: Color::from_hex(LABEL_COLOR),
        }
    }
}

/// Text shown on the button that spawns `spawn`, e.g. `25mm`.
pub fn button_label(spawn: &Spawn) -> String {
    format!("{}mm", spawn.base_mm)
}

/// Records `object`. Buttons get their size label centered on the button's
/// projected position when `labels` is set.
pub fn paint_object(
    list: &mut DrawList,
    camera: &OrthoCamera,
    viewport: Viewport,
    object: &SceneObject,
    highlighted: bool,
    labels: Option<&LabelStyle>,
) {
    let z = ZIndex::from_depth(object.z);
    let ppu = camera.pixels_per_unit(viewport);
    let center = camera.world_to_screen(Vec3::from_xy(object.position, object.z), viewport);

    match object.shape {
        Shape::Rect { size } => {
            list.push_rotated_rect(z, center, size * ppu, -object.rotation, object.color);

            if let (Some(spawn), Some(style)) = (object.spawn(), labels) {
                list.push_text(
                    z,
                    button_label(spawn),
                    style.font,
                    style.size,
                    style.color,
                    center,
                    TextAlign::Center,
                );
            }
        }

        Shape::Circle { radius } => {
            let border = highlighted.then(|| Border::new(OUTLINE_PX, object.color.darkened(0.5)));
            list.push_circle(z, center, radius * ppu, object.color, border);
        }

        Shape::Grid { size, divisions } => {
            paint_grid(list, z, center, size * ppu, divisions, object.color);
        }
    }
}

/// Lines at every division boundary, both axes, edges included.
fn paint_grid(list: &mut DrawList, z: ZIndex, center: Vec2, size_px: f32, divisions: u32, color: Color) {
    if divisions == 0 {
        return;
    }
    let step = size_px / divisions as f32;
    let start = -size_px * 0.5;
    let vertical = Vec2::new(GRID_LINE_PX, size_px);
    let horizontal = Vec2::new(size_px, GRID_LINE_PX);

    for i in 0..=divisions {
        let offset = start + step * i as f32;
        list.push_rotated_rect(z, center + Vec2::new(offset, 0.0), vertical, 0.0, color);
        list.push_rotated_rect(z, center + Vec2::new(0.0, offset), horizontal, 0.0, color);
    }
}
