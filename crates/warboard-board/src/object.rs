use warboard_engine::coords::{Vec2, Vec3};
use warboard_engine::paint::Color;

use crate::board::SceneService;

/// Millimetres per inch; one world unit is one inch.
pub const MM_PER_INCH: f32 = 25.4;

/// Radius in world units of a base with the given diameter in millimetres.
#[inline]
pub fn base_radius(base_mm: f32) -> f32 {
    base_mm / (MM_PER_INCH * 2.0)
}

/// Identity of an object within one scene. Never reused.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct ObjectId(pub(crate) u64);

impl ObjectId {
    #[inline]
    pub fn raw(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Rectangle centered on the object position, before rotation.
    Rect { size: Vec2 },
    Circle { radius: f32 },
    /// Square line grid `size` units wide with `divisions` cells per side.
    Grid { size: f32, divisions: u32 },
}

/// Activation action of a size button: places a new base on the table.
#[derive(Debug, Clone, PartialEq)]
pub struct Spawn {
    pub base_mm: f32,
    pub color: Color,
    /// Where the new base appears; `z` is its depth.
    pub at: Vec3,
}

impl Spawn {
    #[inline]
    pub fn radius(&self) -> f32 {
        base_radius(self.base_mm)
    }

    /// Adds one new model to `scene`. Selection is not touched.
    pub fn activate(&self, scene: &mut dyn SceneService) -> ObjectId {
        let id = scene.add_object(SceneObject::model(self.base_mm, self.at, self.color));
        log::info!("{}mm button clicked", self.base_mm);
        id
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Role {
    /// Board surface, borders, grid.
    Static,
    Terrain,
    Button(Spawn),
    /// Draggable miniature base.
    Model,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    pub shape: Shape,
    pub position: Vec2,
    /// Height above the table plane; larger is closer to the camera.
    pub z: f32,
    /// Counter-clockwise, radians, about `position`.
    pub rotation: f32,
    pub color: Color,
    pub role: Role,
}

impl SceneObject {
    pub fn rect(size: Vec2, position: Vec2, z: f32, color: Color) -> Self {
        Self {
            shape: Shape::Rect { size },
            position,
            z,
            rotation: 0.0,
            color,
            role: Role::Static,
        }
    }

    pub fn circle(radius: f32, position: Vec2, z: f32, color: Color) -> Self {
        Self {
            shape: Shape::Circle { radius },
            position,
            z,
            rotation: 0.0,
            color,
            role: Role::Static,
        }
    }

    pub fn grid(size: f32, divisions: u32, position: Vec2, z: f32, color: Color) -> Self {
        Self {
            shape: Shape::Grid { size, divisions },
            position,
            z,
            rotation: 0.0,
            color,
            role: Role::Static,
        }
    }

    /// A draggable base of `base_mm` diameter.
    pub fn model(base_mm: f32, at: Vec3, color: Color) -> Self {
        Self::circle(base_radius(base_mm), at.xy(), at.z, color).with_role(Role::Model)
    }

    pub fn with_rotation(mut self, radians: f32) -> Self {
        self.rotation = radians;
        self
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    #[inline]
    pub fn is_model(&self) -> bool {
        matches!(self.role, Role::Model)
    }

    pub fn spawn(&self) -> Option<&Spawn> {
        match &self.role {
            Role::Button(spawn) => Some(spawn),
            _ => None,
        }
    }

    /// Whether the table-plane point `p` lies on the object.
    ///
    /// Edges count as inside. Grids are never hit.
    pub fn contains(&self, p: Vec2) -> bool {
        let local = (p - self.position).rotated(-self.rotation);
        match self.shape {
            Shape::Rect { size } => {
                local.x.abs() <= size.x * 0.5 && local.y.abs() <= size.y * 0.5
            }
            Shape::Circle { radius } => local.length_squared() <= radius * radius,
            Shape::Grid { .. } => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn white() -> Color {
        Color::white()
    }

    // ── base sizes ────────────────────────────────────────────────────────

    #[test]
    fn base_radius_is_half_the_diameter_in_inches() {
        assert_eq!(base_radius(25.0), 25.0 / 50.8);
        assert!((base_radius(50.8) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn model_carries_role_and_depth() {
        let m = SceneObject::model(32.0, Vec3::new(1.0, 2.0, 1.0), white());
        assert!(m.is_model());
        assert_eq!(m.position, Vec2::new(1.0, 2.0));
        assert_eq!(m.z, 1.0);
        assert_eq!(m.shape, Shape::Circle { radius: 32.0 / 50.8 });
    }

    // ── containment ───────────────────────────────────────────────────────

    #[test]
    fn rect_contains_honors_rotation() {
        let r = SceneObject::rect(Vec2::new(6.0, 4.0), Vec2::zero(), 0.1, white());
        assert!(r.contains(Vec2::new(2.9, 0.0)));
        assert!(!r.contains(Vec2::new(0.0, 2.9)));

        let turned = r.with_rotation(FRAC_PI_2);
        assert!(!turned.contains(Vec2::new(2.9, 0.0)));
        assert!(turned.contains(Vec2::new(0.0, 2.9)));
    }

    #[test]
    fn rect_edges_are_inside() {
        let r = SceneObject::rect(Vec2::new(8.0, 4.0), Vec2::new(36.0, 25.0), 1.0, white());
        assert!(r.contains(Vec2::new(40.0, 27.0)));
        assert!(!r.contains(Vec2::new(40.01, 25.0)));
    }

    #[test]
    fn circle_contains_is_radius_check() {
        let c = SceneObject::circle(1.0, Vec2::new(5.0, 5.0), 1.0, white());
        assert!(c.contains(Vec2::new(5.0, 6.0)));
        assert!(!c.contains(Vec2::new(5.8, 5.8)));
    }

    #[test]
    fn grid_is_never_hit() {
        let g = SceneObject::grid(60.0, 60, Vec2::zero(), 0.01, white());
        assert!(!g.contains(Vec2::zero()));
    }

    // ── buttons ───────────────────────────────────────────────────────────

    #[test]
    fn spawn_only_on_buttons() {
        let spawn = Spawn { base_mm: 25.0, color: white(), at: Vec3::new(0.0, 0.0, 1.0) };
        let b = SceneObject::rect(Vec2::new(8.0, 4.0), Vec2::zero(), 1.0, white())
            .with_role(Role::Button(spawn.clone()));
        assert_eq!(b.spawn(), Some(&spawn));
        assert!(!b.is_model());
        assert_eq!(SceneObject::model(25.0, Vec3::zero(), white()).spawn(), None);
    }
}
