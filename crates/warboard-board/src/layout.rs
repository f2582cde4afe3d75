//! The fixed table layout: surface, grid, borders, terrain and size buttons.

use warboard_engine::coords::Vec2;
use warboard_engine::paint::Color;

use crate::board::SceneService;
use crate::config::BoardConfig;
use crate::object::{Role, SceneObject, Spawn};

pub const GRID_SIZE: f32 = 60.0;
pub const GRID_DIVISIONS: u32 = 60;
pub const GRID_DEPTH: f32 = 0.01;
pub const GRID_COLOR: u32 = 0xbbbbbb;

pub const BORDER_DEPTH: f32 = 1.0;
pub const BORDER_COLOR: u32 = 0xdddddd;

pub const TERRAIN_DEPTH: f32 = 0.1;
pub const TERRAIN_COLOR: u32 = 0xffdd54;

pub const BUTTON_SIZE: Vec2 = Vec2::new(8.0, 4.0);
pub const BUTTON_DEPTH: f32 = 1.0;
/// Horizontal distance of the button columns from the table center.
pub const BUTTON_COLUMN_X: f32 = 36.0;
pub const BUTTON_TOP_Y: f32 = 25.0;
pub const BUTTON_SPACING: f32 = 5.0;

/// Frame around the playing area; hides grid lines past the board edge.
const BORDERS: [(Vec2, Vec2); 4] = [
    (Vec2::new(120.0, 16.0), Vec2::new(0.0, 30.0)),
    (Vec2::new(120.0, 16.0), Vec2::new(0.0, -30.0)),
    (Vec2::new(32.0, 120.0), Vec2::new(-46.0, 0.0)),
    (Vec2::new(32.0, 120.0), Vec2::new(46.0, 0.0)),
];

/// Terrain footprints as (size, center, rotation in degrees).
const TERRAIN: [(Vec2, Vec2, f32); 12] = [
    (Vec2::new(6.0, 4.0), Vec2::new(0.0, 19.0), 90.0),
    (Vec2::new(6.0, 4.0), Vec2::new(0.0, -19.0), 90.0),
    (Vec2::new(6.0, 4.0), Vec2::new(7.05, -0.71), 45.0),
    (Vec2::new(6.0, 4.0), Vec2::new(-7.05, 0.71), 45.0),
    (Vec2::new(10.0, 5.0), Vec2::new(-5.3, 6.74), -45.0),
    (Vec2::new(10.0, 5.0), Vec2::new(5.3, -6.74), -45.0),
    (Vec2::new(12.0, 6.0), Vec2::new(21.0, -11.0), 90.0),
    (Vec2::new(12.0, 6.0), Vec2::new(-21.0, 11.0), 90.0),
    (Vec2::new(12.0, 6.0), Vec2::new(11.0, 12.0), 90.0),
    (Vec2::new(12.0, 6.0), Vec2::new(-11.0, -12.0), 90.0),
    (Vec2::new(12.0, 6.0), Vec2::new(20.0, 3.0), 0.0),
    (Vec2::new(12.0, 6.0), Vec2::new(-20.0, -3.0), 0.0),
];

/// Adds the full table layout to `scene`, bottom layer first.
pub fn populate(scene: &mut dyn SceneService, config: &BoardConfig) {
    scene.add_object(SceneObject::rect(config.board_size, Vec2::zero(), 0.0, Color::white()));

    scene.add_object(SceneObject::grid(
        GRID_SIZE,
        GRID_DIVISIONS,
        Vec2::zero(),
        GRID_DEPTH,
        Color::from_hex(GRID_COLOR),
    ));

    let border = Color::from_hex(BORDER_COLOR);
    for (size, center) in BORDERS {
        scene.add_object(SceneObject::rect(size, center, BORDER_DEPTH, border));
    }

    let terrain = Color::from_hex(TERRAIN_COLOR);
    for (size, center, degrees) in TERRAIN {
        scene.add_object(
            SceneObject::rect(size, center, TERRAIN_DEPTH, terrain)
                .with_rotation(degrees.to_radians())
                .with_role(Role::Terrain),
        );
    }

    for (i, &base_mm) in config.base_sizes.iter().enumerate() {
        let y = button_row_y(i);
        add_button(scene, config, base_mm, config.red, Vec2::new(BUTTON_COLUMN_X, y));
        add_button(scene, config, base_mm, config.blue, Vec2::new(-BUTTON_COLUMN_X, y));
    }
}

/// Height of the `index`-th button row.
#[inline]
pub fn button_row_y(index: usize) -> f32 {
    BUTTON_TOP_Y - index as f32 * BUTTON_SPACING
}

fn add_button(
    scene: &mut dyn SceneService,
    config: &BoardConfig,
    base_mm: f32,
    color: Color,
    center: Vec2,
) {
    let spawn = Spawn { base_mm, color, at: config.spawn_position };
    scene.add_object(
        SceneObject::rect(BUTTON_SIZE, center, BUTTON_DEPTH, color).with_role(Role::Button(spawn)),
    );
}
