use bytemuck::{Pod, Zeroable};

use crate::render::{RenderCtx, RenderTarget};
use crate::scene::shapes::RectCmd;
use crate::scene::{DrawCmd, DrawList};

use super::common::QuadPipeline;

/// Renderer for `DrawCmd::Rect`.
///
/// Rectangles may be rotated about their center. Edges are antialiased
/// inwards by one physical pixel.
pub struct RectRenderer {
    quad: QuadPipeline,
    instances: Vec<RectInstance>,
}

impl RectRenderer {
    pub fn new() -> Self {
        Self {
            quad: QuadPipeline::new("rect", include_str!("shaders/rect.wgsl"), RectInstance::layout),
            instances: Vec::new(),
        }
    }

    /// Renders the rectangles contained in `draw_list` into `target`, in paint order.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        draw_list: &mut DrawList,
    ) {
        self.instances.clear();
        self.instances.extend(draw_list.iter_in_paint_order().filter_map(|item| {
            let DrawCmd::Rect(cmd) = &item.cmd else { return None };
            RectInstance::from_cmd(cmd)
        }));

        self.quad.draw(ctx, target, &self.instances);
    }
}

impl Default for RectRenderer {
    fn default() -> Self {
        Self::new()
    }
}

// ── GPU types ─────────────────────────────────────────────────────────────

/// Instance data layout (36 bytes):
///
///  offset  0  center    [f32; 2]  loc 1
///  offset  8  size      [f32; 2]  loc 2
///  offset 16  rotation   f32      loc 3
///  offset 20  color     [f32; 4]  loc 4
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
struct RectInstance {
    center: [f32; 2],
    size: [f32; 2],
    rotation: f32,
    color: [f32; 4],
}

impl RectInstance {
    const ATTRS: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
        1 => Float32x2, // center
        2 => Float32x2, // size
        3 => Float32,   // rotation
        4 => Float32x4  // color
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<RectInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }

    /// Skips degenerate and non-finite rectangles.
    fn from_cmd(cmd: &RectCmd) -> Option<Self> {
        let (w, h) = (cmd.size.x.abs(), cmd.size.y.abs());
        let finite = cmd.center.is_finite() && cmd.size.is_finite() && cmd.rotation.is_finite();
        if !finite || w <= 0.0 || h <= 0.0 {
            return None;
        }
        Some(Self {
            center: [cmd.center.x, cmd.center.y],
            size: [w, h],
            rotation: cmd.rotation,
            color: cmd.color.to_array(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;

    fn cmd(center: Vec2, w: f32, h: f32) -> RectCmd {
        RectCmd::new(center, Vec2::new(w, h), 0.0, Color::white())
    }

    #[test]
    fn instance_layout_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<RectInstance>(), 36);
    }

    #[test]
    fn negative_size_is_mirrored_not_dropped() {
        let inst = RectInstance::from_cmd(&cmd(Vec2::zero(), -4.0, 2.0));
        assert_eq!(inst.map(|i| i.size), Some([4.0, 2.0]));
    }

    #[test]
    fn degenerate_rects_are_skipped() {
        assert!(RectInstance::from_cmd(&cmd(Vec2::zero(), 0.0, 2.0)).is_none());
        assert!(RectInstance::from_cmd(&cmd(Vec2::new(f32::NAN, 0.0), 1.0, 2.0)).is_none());
    }
}
