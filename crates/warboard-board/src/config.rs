use std::fmt;

use warboard_engine::coords::{Vec2, Vec3};
use warboard_engine::paint::Color;

use crate::camera::OrthoCamera;

/// Board setup. Distances are world units (inches); base sizes are
/// diameters in millimetres.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardConfig {
    /// Vertical extent of the camera view.
    pub frustum_size: f32,
    /// Camera height above the table.
    pub camera_distance: f32,
    pub near: f32,
    pub far: f32,
    pub board_size: Vec2,
    pub background: Color,
    /// Where buttons place new bases; `z` is their depth.
    pub spawn_position: Vec3,
    /// One red and one blue button per entry, top to bottom.
    pub base_sizes: Vec<f32>,
    pub red: Color,
    pub blue: Color,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            frustum_size: 60.0,
            camera_distance: 50.0,
            near: 0.1,
            far: 100.0,
            board_size: Vec2::new(60.0, 44.0),
            background: Color::from_hex(0xf0f0f0),
            spawn_position: Vec3::new(0.0, 0.0, 1.0),
            base_sizes: vec![25.0, 28.0, 32.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 100.0, 120.0],
            red: Color::from_hex(0xff2400),
            blue: Color::from_hex(0x3090ff),
        }
    }
}

impl BoardConfig {
    /// Checks that every size is finite and positive and that the camera
    /// sees the spawn depth.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("frustum_size", self.frustum_size)?;
        positive("camera_distance", self.camera_distance)?;
        positive("near", self.near)?;
        positive("far", self.far)?;
        if self.far <= self.near {
            return Err(ConfigError::new("far", format!("must exceed near ({})", self.near)));
        }
        positive("board_size.x", self.board_size.x)?;
        positive("board_size.y", self.board_size.y)?;

        if !self.spawn_position.is_finite() {
            return Err(ConfigError::new("spawn_position", "must be finite"));
        }
        let depth = self.camera_distance - self.spawn_position.z;
        if depth < self.near || depth > self.far {
            return Err(ConfigError::new(
                "spawn_position",
                format!("depth {depth} is outside the camera range"),
            ));
        }

        if self.base_sizes.is_empty() {
            return Err(ConfigError::new("base_sizes", "must not be empty"));
        }
        for &size in &self.base_sizes {
            positive("base_sizes", size)?;
        }
        Ok(())
    }

    /// Camera centered over the table for a viewport of the given aspect.
    pub fn camera(&self, aspect: f32) -> OrthoCamera {
        OrthoCamera::new(
            self.frustum_size,
            Vec3::new(0.0, 0.0, self.camera_distance),
            self.near,
            self.far,
            aspect,
        )
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::new(field, format!("must be finite and positive, got {value}")))
    }
}

/// A rejected board configuration value.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigError {
    pub field: &'static str,
    pub message: String,
}

impl ConfigError {
    pub(crate) fn new(field: &'static str, msg: impl Into<String>) -> Self {
        Self { field, message: msg.into() }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid board config `{}`: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(BoardConfig::default().validate(), Ok(()));
    }

    #[test]
    fn default_has_eleven_sizes() {
        let c = BoardConfig::default();
        assert_eq!(c.base_sizes.len(), 11);
        assert_eq!(c.base_sizes[0], 25.0);
        assert_eq!(c.base_sizes[10], 120.0);
    }

    // ── rejections ────────────────────────────────────────────────────────

    #[test]
    fn zero_frustum_rejected() {
        let c = BoardConfig { frustum_size: 0.0, ..Default::default() };
        assert_eq!(c.validate().unwrap_err().field, "frustum_size");
    }

    #[test]
    fn nan_board_rejected() {
        let c = BoardConfig { board_size: Vec2::new(f32::NAN, 44.0), ..Default::default() };
        assert_eq!(c.validate().unwrap_err().field, "board_size.x");
    }

    #[test]
    fn empty_sizes_rejected() {
        let c = BoardConfig { base_sizes: vec![], ..Default::default() };
        assert_eq!(c.validate().unwrap_err().field, "base_sizes");
    }

    #[test]
    fn negative_base_rejected() {
        let c = BoardConfig { base_sizes: vec![25.0, -1.0], ..Default::default() };
        assert!(c.validate().is_err());
    }

    #[test]
    fn inverted_clip_range_rejected() {
        let c = BoardConfig { near: 10.0, far: 5.0, ..Default::default() };
        assert_eq!(c.validate().unwrap_err().field, "far");
    }

    #[test]
    fn spawn_above_camera_rejected() {
        let c = BoardConfig { spawn_position: Vec3::new(0.0, 0.0, 60.0), ..Default::default() };
        assert_eq!(c.validate().unwrap_err().field, "spawn_position");
    }

    #[test]
    fn error_message_names_field() {
        let c = BoardConfig { frustum_size: -2.0, ..Default::default() };
        let msg = c.validate().unwrap_err().to_string();
        assert!(msg.contains("frustum_size"));
        assert!(msg.contains("-2"));
    }

    // ── camera ────────────────────────────────────────────────────────────

    #[test]
    fn camera_sits_above_origin() {
        let cam = BoardConfig::default().camera(2.0);
        assert_eq!(cam.position, Vec3::new(0.0, 0.0, 50.0));
        assert_eq!(cam.aspect(), 2.0);
    }
}
