use core::ops::{Add, Mul, Sub};

use super::Vec2;

/// 3D vector in world units (+Y up, +Z towards the viewer).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Lifts a planar point to depth `z`.
    #[inline]
    pub const fn from_xy(xy: Vec2, z: f32) -> Self {
        Self::new(xy.x, xy.y, z)
    }

    /// Drops the depth component.
    #[inline]
    pub const fn xy(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    #[inline]
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    #[inline]
    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;
    #[inline]
    fn mul(self, rhs: f32) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xy_roundtrip_keeps_depth_separate() {
        let v = Vec3::from_xy(Vec2::new(1.0, 2.0), 0.5);
        assert_eq!(v.xy(), Vec2::new(1.0, 2.0));
        assert_eq!(v.z, 0.5);
    }

    #[test]
    fn length_of_axis_vector() {
        assert_eq!(Vec3::new(0.0, 0.0, -2.0).length(), 2.0);
        assert_eq!((Vec3::new(1.0, 1.0, 1.0) * 2.0 - Vec3::new(2.0, 2.0, 2.0)).length(), 0.0);
    }
}
