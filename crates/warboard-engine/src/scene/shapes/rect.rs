use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawList, ZIndex};

/// Rectangle draw payload (logical pixels).
///
/// The rectangle is centered on `center` and rotated by `rotation` radians,
/// clockwise on screen (+Y down).
#[derive(Debug, Clone, PartialEq)]
pub struct RectCmd {
    pub center: Vec2,
    pub size: Vec2,
    pub rotation: f32,
    pub color: Color,
}

impl RectCmd {
    #[inline]
    pub fn new(center: Vec2, size: Vec2, rotation: f32, color: Color) -> Self {
        Self { center, size, rotation, color }
    }
}

impl DrawList {
    /// Records a rotated rectangle.
    #[inline]
    pub fn push_rotated_rect(
        &mut self,
        z: ZIndex,
        center: Vec2,
        size: Vec2,
        rotation: f32,
        color: Color,
    ) {
        self.push(z, RectCmd::new(center, size, rotation, color).into());
    }
}
