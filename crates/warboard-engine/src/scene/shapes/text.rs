use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawList, ZIndex};
use crate::text::FontId;

/// Where `TextCmd::anchor` sits on the laid-out text block.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum TextAlign {
    #[default]
    TopLeft,
    /// Block centered on the anchor in both axes.
    Center,
}

/// Single-line text payload (logical pixels).
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    pub font: FontId,
    /// Font size in logical pixels.
    pub size: f32,
    pub color: Color,
    pub anchor: Vec2,
    pub align: TextAlign,
}

impl DrawList {
    /// Records a line of text.
    pub fn push_text(
        &mut self,
        z: ZIndex,
        text: impl Into<String>,
        font: FontId,
        size: f32,
        color: Color,
        anchor: Vec2,
        align: TextAlign,
    ) {
        self.push(
            z,
            TextCmd {
                text: text.into(),
                font,
                size,
                color,
                anchor,
                align,
            }
            .into(),
        );
    }
}
