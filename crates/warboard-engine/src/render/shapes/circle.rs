use bytemuck::{Pod, Zeroable};

use crate::render::{RenderCtx, RenderTarget};
use crate::scene::shapes::CircleCmd;
use crate::scene::{DrawCmd, DrawList};

use super::common::QuadPipeline;

/// Renderer for `DrawCmd::Circle`.
///
/// Circles are evaluated as a signed distance in the fragment shader.
/// Borders are rendered as an antialiased ring on the inner edge.
pub struct CircleRenderer {
    quad: QuadPipeline,
    instances: Vec<CircleInstance>,
}

impl CircleRenderer {
    pub fn new() -> Self {
        Self {
            quad: QuadPipeline::new("circle", include_str!("shaders/circle.wgsl"), CircleInstance::layout),
            instances: Vec::new(),
        }
    }

    /// Renders the circles contained in `draw_list` into `target`, in paint order.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        draw_list: &mut DrawList,
    ) {
        self.instances.clear();
        self.instances.extend(draw_list.iter_in_paint_order().filter_map(|item| match &item.cmd {
            DrawCmd::Circle(cmd) => CircleInstance::from_cmd(cmd),
            _ => None,
        }));

        self.quad.draw(ctx, target, &self.instances);
    }
}

impl Default for CircleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

// ── GPU types ─────────────────────────────────────────────────────────────

/// Instance data layout (48 bytes):
///
///  offset  0  center        [f32; 2]  loc 1
///  offset  8  radius_bw     [f32; 2]  loc 2  (.x = radius, .y = border width)
///  offset 16  color         [f32; 4]  loc 3
///  offset 32  border_color  [f32; 4]  loc 4
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
struct CircleInstance {
    center: [f32; 2],
    radius_bw: [f32; 2],
    color: [f32; 4],
    border_color: [f32; 4],
}

impl CircleInstance {
    const ATTRS: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
        1 => Float32x2, // center
        2 => Float32x2, // radius_bw
        3 => Float32x4, // color
        4 => Float32x4  // border_color
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<CircleInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }

    fn from_cmd(cmd: &CircleCmd) -> Option<Self> {
        if !(cmd.radius > 0.0) || !cmd.center.is_finite() {
            return None;
        }

        let (border_width, border_color) = match &cmd.border {
            Some(b) => (b.width.clamp(0.0, cmd.radius), b.color.to_array()),
            None => (0.0, [0.0; 4]),
        };

        Some(Self {
            center: [cmd.center.x, cmd.center.y],
            radius_bw: [cmd.radius, border_width],
            color: cmd.color.to_array(),
            border_color,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;
    use crate::scene::Border;

    #[test]
    fn border_is_clamped_to_radius() {
        let cmd = CircleCmd::new(Vec2::zero(), 3.0, Color::white(), Some(Border::new(10.0, Color::white())));
        let inst = CircleInstance::from_cmd(&cmd).map(|i| i.radius_bw);
        assert_eq!(inst, Some([3.0, 3.0]));
    }

    #[test]
    fn zero_and_nan_radius_are_skipped() {
        let zero = CircleCmd::new(Vec2::zero(), 0.0, Color::white(), None);
        let nan = CircleCmd::new(Vec2::zero(), f32::NAN, Color::white(), None);
        assert!(CircleInstance::from_cmd(&zero).is_none());
        assert!(CircleInstance::from_cmd(&nan).is_none());
    }
}
