use warboard_engine::coords::Vec3;

use crate::object::{ObjectId, SceneObject};

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Point at parameter `t`.
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Intersection with the horizontal plane at height `z`, as the ray
    /// parameter. `None` when parallel or behind the origin.
    pub fn hit_plane(&self, z: f32) -> Option<f32> {
        if self.direction.z == 0.0 {
            return None;
        }
        let t = (z - self.origin.z) / self.direction.z;
        (t >= 0.0 && t.is_finite()).then_some(t)
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Hit {
    pub object: ObjectId,
    /// World-space intersection point.
    pub point: Vec3,
    /// Distance from the ray origin.
    pub distance: f32,
}

/// Maps a ray to the objects it passes through.
pub trait Picker {
    /// All hits, nearest first. Objects at the same distance come most
    /// recently added first.
    fn pick(&self, ray: &Ray) -> Vec<Hit>;
}

/// Intersects `ray` with one object, if it hits.
pub(crate) fn intersect(id: ObjectId, object: &SceneObject, ray: &Ray) -> Option<Hit> {
    let t = ray.hit_plane(object.z)?;
    let point = ray.at(t);
    object.contains(point.xy()).then(|| Hit {
        object: id,
        point,
        distance: t * ray.direction.length(),
    })
}

/// Orders hits nearest first; equal distances by descending id.
pub(crate) fn sort_hits(hits: &mut [Hit]) {
    hits.sort_by(|a, b| {
        a.distance
            .total_cmp(&b.distance)
            .then_with(|| b.object.cmp(&a.object))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use warboard_engine::coords::Vec2;
    use warboard_engine::paint::Color;

    fn down_at(x: f32, y: f32) -> Ray {
        Ray { origin: Vec3::new(x, y, 49.9), direction: Vec3::new(0.0, 0.0, -1.0) }
    }

    // ── planes ────────────────────────────────────────────────────────────

    #[test]
    fn plane_behind_origin_is_missed() {
        assert_eq!(down_at(0.0, 0.0).hit_plane(60.0), None);
        let flat = Ray { origin: Vec3::zero(), direction: Vec3::new(1.0, 0.0, 0.0) };
        assert_eq!(flat.hit_plane(0.0), None);
    }

    #[test]
    fn hit_point_lies_on_object_plane() {
        let obj = SceneObject::circle(1.0, Vec2::new(2.0, 3.0), 1.0, Color::white());
        let hit = intersect(ObjectId(4), &obj, &down_at(2.5, 3.0)).unwrap();
        assert_eq!(hit.point, Vec3::new(2.5, 3.0, 1.0));
        assert!((hit.distance - 48.9).abs() < 1e-4);
    }

    // ── ordering ──────────────────────────────────────────────────────────

    #[test]
    fn nearer_hits_first_then_newer() {
        let hit = |id: u64, distance: f32| Hit { object: ObjectId(id), point: Vec3::zero(), distance };
        let mut hits = vec![hit(0, 49.9), hit(1, 48.9), hit(2, 48.9), hit(3, 49.8)];
        sort_hits(&mut hits);
        let order: Vec<u64> = hits.iter().map(|h| h.object.raw()).collect();
        assert_eq!(order, vec![2, 1, 3, 0]);
    }
}
