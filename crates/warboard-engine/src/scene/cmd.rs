use crate::coords::Vec2;
use crate::scene::shapes::circle::CircleCmd;
use crate::scene::shapes::rect::RectCmd;
use crate::scene::shapes::text::TextCmd;

/// One recorded shape. Each variant has a matching renderer under
/// `render::shapes`.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Rect(RectCmd),
    Circle(CircleCmd),
    Text(TextCmd),
}

impl DrawCmd {
    /// Center of the shape in logical pixels. Text reports its anchor.
    pub fn center(&self) -> Vec2 {
        match self {
            DrawCmd::Rect(r) => r.center,
            DrawCmd::Circle(c) => c.center,
            DrawCmd::Text(t) => t.anchor,
        }
    }
}

impl From<RectCmd> for DrawCmd {
    fn from(cmd: RectCmd) -> Self {
        DrawCmd::Rect(cmd)
    }
}

impl From<CircleCmd> for DrawCmd {
    fn from(cmd: CircleCmd) -> Self {
        DrawCmd::Circle(cmd)
    }
}

impl From<TextCmd> for DrawCmd {
    fn from(cmd: TextCmd) -> Self {
        DrawCmd::Text(cmd)
    }
}
